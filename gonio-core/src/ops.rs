//! Operator implementations for [`Angle`].
//!
//! Arithmetic combines raw degree magnitudes directly; no wraparound is applied to results.
//! Callers that need the canonical form normalize explicitly afterwards.

use crate::Angle;
use core::ops::{Add, AddAssign, Div, Mul, Neg, Rem, Sub, SubAssign};

impl Add for Angle {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_degrees(self.degrees() + rhs.degrees())
    }
}

impl AddAssign for Angle {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Angle {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_degrees(self.degrees() - rhs.degrees())
    }
}

impl SubAssign for Angle {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for Angle {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::from_degrees(self.degrees() * rhs)
    }
}

impl Mul<Angle> for f64 {
    type Output = Angle;
    #[inline]
    fn mul(self, rhs: Angle) -> Angle {
        rhs * self
    }
}

impl Div<f64> for Angle {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::from_degrees(self.degrees() / rhs)
    }
}

impl Rem<f64> for Angle {
    type Output = Self;
    #[inline]
    fn rem(self, rhs: f64) -> Self {
        Self::from_degrees(self.degrees() % rhs)
    }
}

impl Neg for Angle {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_degrees(-self.degrees())
    }
}

impl PartialEq<f64> for Angle {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.degrees() == *other
    }
}
