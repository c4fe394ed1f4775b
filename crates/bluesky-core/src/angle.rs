//! Fixed-point angles.

use std::f64::consts::TAU;

/// Number of angle units in one full turn.
pub const TRIG_MAX_ANGLE: i32 = 0x10000;

/// An angle as a fraction of a full turn, in units of `1 / TRIG_MAX_ANGLE`.
///
/// Zero points up and angles grow clockwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Angle(i32);

impl Angle {
    pub const ZERO: Angle = Angle(0);
    pub const HALF: Angle = Angle(TRIG_MAX_ANGLE / 2);
    pub const FULL: Angle = Angle(TRIG_MAX_ANGLE);

    /// `numerator / denominator` of a full turn, truncated toward zero.
    pub const fn from_fraction(numerator: i32, denominator: i32) -> Self {
        Angle(TRIG_MAX_ANGLE * numerator / denominator)
    }

    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Wrap into `[0, FULL)`.
    pub const fn normalized(self) -> Self {
        Angle(self.0.rem_euclid(TRIG_MAX_ANGLE))
    }

    pub fn degrees(self) -> f64 {
        f64::from(self.0) * 360.0 / f64::from(TRIG_MAX_ANGLE)
    }

    pub fn radians(self) -> f64 {
        f64::from(self.0) * TAU / f64::from(TRIG_MAX_ANGLE)
    }

    /// Angle of the vector `(dx, dy)` in screen coordinates (y grows down).
    pub fn of_vector(dx: f64, dy: f64) -> Self {
        let turns = dx.atan2(-dy) / TAU;
        Angle((turns * f64::from(TRIG_MAX_ANGLE)).round() as i32).normalized()
    }
}

impl std::ops::Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle(self.0 + rhs.0)
    }
}

impl std::ops::Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle(self.0 - rhs.0)
    }
}
