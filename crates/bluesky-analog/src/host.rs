//! Interfaces the clock layer consumes from its host.

use std::fmt;

use bluesky_core::{Angle, Color, Point, Rect};

use crate::error::HostError;

/// Opaque handle to a drawable owned by a [`LayerHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(pub u32);

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer#{}", self.0)
    }
}

/// 2D drawing primitives of the host display surface.
///
/// Colors and stroke settings are sticky: they apply to every following
/// primitive until changed.
pub trait GraphicsContext {
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_stroke_width(&mut self, width: u8);
    fn set_antialiased(&mut self, enabled: bool);

    fn fill_rect(&mut self, rect: Rect);

    /// Fill the band between the ellipse inscribed in `rect` and the same
    /// ellipse shrunk by `inset` pixels, swept clockwise from `start` to
    /// `end`.
    fn fill_radial(&mut self, rect: Rect, inset: i32, start: Angle, end: Angle);

    fn draw_line(&mut self, p0: Point, p1: Point);
    fn fill_circle(&mut self, center: Point, radius: i32);
    fn draw_circle(&mut self, center: Point, radius: i32);
}

/// Layer lifecycle services of the host view system.
pub trait LayerHost {
    /// Acquire a drawable placed at `frame` in its parent surface.
    fn create_layer(&mut self, frame: Rect) -> Result<LayerId, HostError>;

    /// Current bounds of a live layer.
    fn layer_bounds(&self, layer: LayerId) -> Option<Rect>;

    /// Ask for `layer` to be redrawn at the host's next opportunity.
    fn mark_dirty(&mut self, layer: LayerId);

    /// Release the drawable. Called exactly once per created layer.
    fn destroy_layer(&mut self, layer: LayerId);
}
