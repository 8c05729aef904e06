//! Directional classification: cardinal axes and upright snapping.
//!
//! These predicates operate on the *normalized* angle, so whole revolutions never change a
//! classification. The cardinal checks use exact floating equality after a single modular
//! reduction, not a tolerance band — an angle is cardinal only if its canonical form is a
//! bit-exact multiple of 90°. Magnitudes carrying accumulated floating error from upstream
//! arithmetic will therefore not classify as cardinal; callers needing a tolerance must round
//! before asking.

use crate::wrap::rem_euclid;
use crate::Angle;

impl Angle {
    /// True iff the normalized angle is an exact multiple of 90° (0°, 90°, 180°, or 270°).
    ///
    /// Exact equality, no epsilon. Non-finite angles never classify as cardinal.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    ///
    /// assert!(Angle::from_degrees(450.0).is_cardinal());   // 450° ≡ 90°
    /// assert!(Angle::from_degrees(-90.0).is_cardinal());
    /// assert!(!Angle::from_degrees(90.0001).is_cardinal());
    /// ```
    #[inline]
    pub fn is_cardinal(self) -> bool {
        rem_euclid(self.normalize().degrees(), Self::QUARTER_TURN.degrees()) == 0.0
    }

    /// True iff the normalized angle points along the vertical axis (90° or 270°).
    ///
    /// Distinguishes the two-way vertical check from the four-way [`Angle::is_cardinal`].
    /// Exact equality, same caveat as `is_cardinal`.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    ///
    /// assert!(Angle::DEG_90.is_cardinal90());
    /// assert!(Angle::DEG_270.is_cardinal90());
    /// assert!(!Angle::DEG_180.is_cardinal90());
    /// ```
    #[inline]
    pub fn is_cardinal90(self) -> bool {
        rem_euclid(self.normalize().degrees(), Self::HALF_TURN.degrees())
            == Self::QUARTER_TURN.degrees()
    }

    /// Snaps to the nearer upright orientation: exactly [`Angle::ZERO`] or [`Angle::DEG_90`].
    ///
    /// Used to decide whether an element that must stay readable is kept horizontal or
    /// vertical. The boundaries are deliberately asymmetric in inclusivity; on the normalized
    /// degree value `d`:
    ///
    /// | condition                | result |
    /// |--------------------------|--------|
    /// | `d <= 45` or `d >= 315`  | 0°     |
    /// | `135 < d <= 225`         | 0°     |
    /// | otherwise                | 90°    |
    ///
    /// So `45°` stays horizontal while `45.0001°` flips vertical, and `135°` is vertical while
    /// `135.0001°` is horizontal. A plain round-to-nearest-90 disagrees at exactly these
    /// boundaries.
    ///
    /// Non-finite input classifies as vertical: NaN fails every boundary comparison and falls
    /// through to the 90° arm.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    ///
    /// assert_eq!(Angle::from_degrees(200.0).keep_upright(), Angle::ZERO);
    /// assert_eq!(Angle::DEG_90.keep_upright(), Angle::DEG_90);
    /// assert_eq!(Angle::DEG_45.keep_upright(), Angle::ZERO);
    /// ```
    #[inline]
    pub fn keep_upright(self) -> Self {
        let d = self.normalize().degrees();
        if d <= 45.0 || d >= 315.0 {
            Self::ZERO
        } else if d > 135.0 && d <= 225.0 {
            Self::ZERO
        } else {
            Self::DEG_90
        }
    }
}
