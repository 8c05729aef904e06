//! Normalization into canonical ranges, and trigonometry.
//!
//! Reduction is a single Euclidean-remainder operation, O(1) for any finite magnitude. Repeated
//! subtraction is never used: an angle a billion degrees from range reduces in the same handful
//! of instructions as one a few degrees out.
//!
//! ## Edge cases
//!
//! Wrapping and trig operations follow IEEE-754 semantics from `f64`: NaN and `±∞` inputs
//! produce NaN.

use crate::Angle;

#[inline]
pub(crate) fn rem_euclid(x: f64, modulus: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.rem_euclid(modulus)
    }
    #[cfg(not(feature = "std"))]
    {
        let r = libm::fmod(x, modulus);
        if r < 0.0 {
            r + modulus
        } else {
            r
        }
    }
}

impl Angle {
    /// Returns the canonical representative in `[0°, 360°)`.
    ///
    /// Idempotent, and congruent to the input mod 360°. Negative inputs land in the upper part
    /// of the range; inputs many revolutions out of range reduce in constant time.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(-10.0).normalize().degrees(), 350.0);
    /// assert_eq!(Angle::from_degrees(1000.0).normalize().degrees(), 280.0);
    /// assert_eq!(Angle::from_degrees(360.0).normalize(), Angle::ZERO);
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        let full = Self::FULL_TURN.degrees();
        let r = rem_euclid(self.degrees(), full);
        // rem_euclid rounds up to the modulus itself for tiny negative inputs;
        // the result must stay strictly below a full turn.
        Self::from_degrees(if r >= full { 0.0 } else { r })
    }

    /// Returns the canonical representative in `(-180°, 180°]`.
    ///
    /// *Upper bound is inclusive*; lower bound is exclusive. Useful for minimal signed angular
    /// differences: both `180°` and `-180°` map to `180°`.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(190.0).normalize_signed().degrees(), -170.0);
    /// assert_eq!(Angle::from_degrees(-180.0).normalize_signed().degrees(), 180.0);
    /// ```
    #[inline]
    pub fn normalize_signed(self) -> Self {
        let full = Self::FULL_TURN.degrees();
        let half = Self::HALF_TURN.degrees();
        let y = rem_euclid(self.degrees() + half, full) - half;
        let norm = if y <= -half { y + full } else { y };
        Self::from_degrees(norm)
    }

    /// Sine of the angle.
    ///
    /// IEEE-754 note: NaN/`±∞` inputs produce NaN.
    #[inline]
    pub fn sin(self) -> f64 {
        let x = self.radians();
        #[cfg(feature = "std")]
        {
            x.sin()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sin(x)
        }
    }

    /// Cosine of the angle.
    ///
    /// IEEE-754 note: NaN/`±∞` inputs produce NaN.
    #[inline]
    pub fn cos(self) -> f64 {
        let x = self.radians();
        #[cfg(feature = "std")]
        {
            x.cos()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::cos(x)
        }
    }

    /// Tangent of the angle.
    ///
    /// IEEE-754 note: NaN/`±∞` inputs produce NaN.
    #[inline]
    pub fn tan(self) -> f64 {
        let x = self.radians();
        #[cfg(feature = "std")]
        {
            x.tan()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::tan(x)
        }
    }

    /// Simultaneously compute sine and cosine.
    #[inline]
    pub fn sin_cos(self) -> (f64, f64) {
        let x = self.radians();
        #[cfg(feature = "std")]
        {
            x.sin_cos()
        }
        #[cfg(not(feature = "std"))]
        {
            (libm::sin(x), libm::cos(x))
        }
    }
}
