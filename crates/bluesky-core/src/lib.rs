//! Core types shared by the bluesky clock crates.
//!
//! Integer pixel geometry, fixed-point angles measured as a fraction of a
//! full turn, the clock palette, and the wall-clock breakdown of an instant.

mod angle;
mod color;
mod geometry;
mod time;

pub use angle::{Angle, TRIG_MAX_ANGLE};
pub use color::{Color, ParseColorError, Palette};
pub use geometry::{Point, Rect, Size, point_from_polar};
pub use time::{LocalZone, WallTime};
