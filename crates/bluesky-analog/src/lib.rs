//! Analog 24-hour sky clock layer.
//!
//! An [`AnalogLayer`] owns a drawable acquired from a [`LayerHost`] together
//! with the time it shows. The host decides when to redraw and calls
//! [`AnalogLayer::render`] with a [`GraphicsContext`]; the layer paints
//! concentric sky bands, 24 hour ticks with midnight at the bottom, and a
//! sun that travels the orbit once per day.

mod error;
pub mod face;
mod host;
mod layer;
#[cfg(test)]
mod testing;

pub use error::{Error, HostError, Result};
pub use host::{GraphicsContext, LayerHost, LayerId};
pub use layer::AnalogLayer;
