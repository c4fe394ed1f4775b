//! Integer pixel geometry.

use crate::Angle;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// A rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(w, h),
        }
    }

    /// Shrink the rectangle by `inset` pixels on every edge.
    pub const fn trim(self, inset: i32) -> Self {
        Rect::new(
            self.origin.x + inset,
            self.origin.y + inset,
            self.size.w - inset * 2,
            self.size.h - inset * 2,
        )
    }

    /// Length of the shorter side.
    pub fn min_side(&self) -> i32 {
        self.size.w.min(self.size.h)
    }

    pub fn is_empty(&self) -> bool {
        self.size.w <= 0 || self.size.h <= 0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.y >= self.origin.y
            && p.x < self.origin.x + self.size.w
            && p.y < self.origin.y + self.size.h
    }

    /// Center and half-extents of the ellipse inscribed in this rectangle,
    /// measured between the centers of the edge pixels.
    pub fn ellipse(&self) -> (f64, f64, f64, f64) {
        let rx = f64::from(self.size.w - 1) / 2.0;
        let ry = f64::from(self.size.h - 1) / 2.0;
        (
            f64::from(self.origin.x) + rx,
            f64::from(self.origin.y) + ry,
            rx,
            ry,
        )
    }
}

/// Point on the ellipse inscribed in `rect` at `angle`.
///
/// The unit-circle point is scaled by the half-width on x and the
/// half-height on y, so non-square bounds yield an ellipse.
pub fn point_from_polar(rect: Rect, angle: Angle) -> Point {
    let (cx, cy, rx, ry) = rect.ellipse();
    let theta = angle.radians();
    Point::new(
        (cx + rx * theta.sin()).round() as i32,
        (cy - ry * theta.cos()).round() as i32,
    )
}
