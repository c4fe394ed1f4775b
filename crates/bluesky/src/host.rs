//! Terminal implementation of the layer host.

use std::collections::BTreeMap;

use bluesky_analog::{HostError, LayerHost, LayerId};
use bluesky_core::Rect;
use log::{debug, warn};

use crate::surface::PixelSurface;

#[derive(Debug, Clone, Copy)]
struct Slot {
    frame: Rect,
    dirty: bool,
}

/// Tracks layers placed on one shared [`PixelSurface`].
#[derive(Debug, Default)]
pub struct TerminalHost {
    next_id: u32,
    slots: BTreeMap<LayerId, Slot>,
    surface: PixelSurface,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&self) -> &PixelSurface {
        &self.surface
    }

    pub fn frame(&self, layer: LayerId) -> Option<Rect> {
        self.slots.get(&layer).map(|slot| slot.frame)
    }

    /// Move or resize a layer. Its next redraw uses the new bounds.
    pub fn set_frame(&mut self, layer: LayerId, frame: Rect) {
        match self.slots.get_mut(&layer) {
            Some(slot) => {
                slot.frame = frame;
                slot.dirty = true;
            }
            None => {
                warn!("set_frame on unknown {layer}");
                return;
            }
        }
        self.fit_surface();
    }

    /// Whether `layer` is waiting for a redraw.
    pub fn is_dirty(&self, layer: LayerId) -> bool {
        self.slots.get(&layer).is_some_and(|slot| slot.dirty)
    }

    /// Redraw `layer` through `paint` if it is dirty.
    ///
    /// `paint` receives the layer bounds and a surface translated to the
    /// layer's frame. Returns whether anything was drawn.
    pub fn redraw<F>(&mut self, layer: LayerId, paint: F) -> bool
    where
        F: FnOnce(Rect, &mut PixelSurface),
    {
        let Some(bounds) = self.layer_bounds(layer) else {
            return false;
        };
        let Some(slot) = self.slots.get_mut(&layer).filter(|slot| slot.dirty) else {
            return false;
        };
        slot.dirty = false;
        let frame = slot.frame;

        self.surface.clear_rect(frame);
        self.surface.set_origin(frame.origin);
        paint(bounds, &mut self.surface);
        true
    }

    /// Grow or shrink the surface to the union of all layer frames.
    fn fit_surface(&mut self) {
        let (width, height) = self.slots.values().fold((0, 0), |(w, h), slot| {
            (
                w.max(slot.frame.origin.x + slot.frame.size.w),
                h.max(slot.frame.origin.y + slot.frame.size.h),
            )
        });
        if width != self.surface.width() || height != self.surface.height() {
            self.surface.resize(width, height);
            for slot in self.slots.values_mut() {
                slot.dirty = true;
            }
        }
    }
}

impl LayerHost for TerminalHost {
    fn create_layer(&mut self, frame: Rect) -> Result<LayerId, HostError> {
        if frame.is_empty() {
            return Err(HostError::Rejected {
                reason: format!("empty frame {frame:?}"),
            });
        }
        self.next_id += 1;
        let layer = LayerId(self.next_id);
        self.slots.insert(layer, Slot { frame, dirty: true });
        self.fit_surface();
        debug!("host created {layer}");
        Ok(layer)
    }

    fn layer_bounds(&self, layer: LayerId) -> Option<Rect> {
        self.frame(layer)
            .map(|frame| Rect::new(0, 0, frame.size.w, frame.size.h))
    }

    fn mark_dirty(&mut self, layer: LayerId) {
        if let Some(slot) = self.slots.get_mut(&layer) {
            slot.dirty = true;
        }
    }

    fn destroy_layer(&mut self, layer: LayerId) {
        if self.slots.remove(&layer).is_none() {
            warn!("destroy of unknown {layer}");
            return;
        }
        debug!("host destroyed {layer}");
        self.fit_surface();
    }
}
