//! Recording doubles for the host traits.

use std::collections::BTreeMap;

use bluesky_core::{Angle, Color, Point, Rect};

use crate::error::HostError;
use crate::host::{GraphicsContext, LayerHost, LayerId};

/// A primitive call together with the sticky state it was drawn with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillRadial {
        rect: Rect,
        inset: i32,
        start: Angle,
        end: Angle,
        color: Color,
    },
    Line {
        p0: Point,
        p1: Point,
        color: Color,
        width: u8,
        antialiased: bool,
    },
    FillCircle {
        center: Point,
        radius: i32,
        color: Color,
    },
    Circle {
        center: Point,
        radius: i32,
        color: Color,
        width: u8,
    },
}

#[derive(Debug, Default)]
pub struct RecordingContext {
    fill: Color,
    stroke: Color,
    width: u8,
    antialiased: bool,
    pub ops: Vec<DrawOp>,
}

impl GraphicsContext for RecordingContext {
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_stroke_width(&mut self, width: u8) {
        self.width = width;
    }

    fn set_antialiased(&mut self, enabled: bool) {
        self.antialiased = enabled;
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect {
            rect,
            color: self.fill,
        });
    }

    fn fill_radial(&mut self, rect: Rect, inset: i32, start: Angle, end: Angle) {
        self.ops.push(DrawOp::FillRadial {
            rect,
            inset,
            start,
            end,
            color: self.fill,
        });
    }

    fn draw_line(&mut self, p0: Point, p1: Point) {
        self.ops.push(DrawOp::Line {
            p0,
            p1,
            color: self.stroke,
            width: self.width,
            antialiased: self.antialiased,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: i32) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            color: self.fill,
        });
    }

    fn draw_circle(&mut self, center: Point, radius: i32) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color: self.stroke,
            width: self.width,
        });
    }
}

/// Host that tracks layer frames and counts lifecycle calls.
#[derive(Debug, Default)]
pub struct MockHost {
    next_id: u32,
    pub frames: BTreeMap<LayerId, Rect>,
    pub created: usize,
    pub destroyed: Vec<LayerId>,
    pub dirty_marks: Vec<LayerId>,
    /// Error returned by the next `create_layer` call.
    pub fail_next: Option<HostError>,
}

impl MockHost {
    /// Host whose next `create_layer` call fails with `err`.
    pub fn failing(err: HostError) -> Self {
        Self {
            fail_next: Some(err),
            ..Self::default()
        }
    }
}

impl LayerHost for MockHost {
    fn create_layer(&mut self, frame: Rect) -> Result<LayerId, HostError> {
        if let Some(err) = self.fail_next.take() {
            return Err(err);
        }
        self.next_id += 1;
        let id = LayerId(self.next_id);
        self.frames.insert(id, frame);
        self.created += 1;
        Ok(id)
    }

    fn layer_bounds(&self, layer: LayerId) -> Option<Rect> {
        self.frames
            .get(&layer)
            .map(|frame| Rect::new(0, 0, frame.size.w, frame.size.h))
    }

    fn mark_dirty(&mut self, layer: LayerId) {
        self.dirty_marks.push(layer);
    }

    fn destroy_layer(&mut self, layer: LayerId) {
        self.frames.remove(&layer);
        self.destroyed.push(layer);
    }
}
