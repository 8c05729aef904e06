//! The [`Angle`] value type: storage, construction, and conversions.
//!
//! # Design overview
//!
//! * **Canonical unit:** Degrees are the canonical scaling unit. The stored magnitude is a plain
//!   `f64` degree value; radians and fixed-point tenths are conversion surfaces, not alternative
//!   storage modes. The radian factor is kept as the single constant `180/π` so every conversion
//!   derives from one base value rather than chained multiplications.
//! * **Raw storage:** Construction never wraps or clamps. `720°` and `1080°` are distinct stored
//!   values until [`Angle::normalize`] is applied, which lets callers accumulate multi-turn
//!   rotation without silent reduction.
//! * **Raw comparison:** `PartialEq`/`PartialOrd` compare stored magnitudes. Angles that differ by
//!   an exact multiple of a full turn compare unequal until normalized.
//! * **Unit-tagged construction:** The unit is always explicit at the call site
//!   ([`Angle::from_degrees`], [`Angle::from_radians`], [`Angle::from_tenths`]); there is no
//!   untagged constructor to leave a reader guessing.
//!
//! ## Edge cases
//!
//! All operations follow IEEE-754 `f64` semantics: NaN propagates, and `±∞` stays non-finite
//! through arithmetic. The checked constructors reject non-finite input up front with
//! [`InvalidAngle`](crate::InvalidAngle).

use crate::error::InvalidAngle;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Degrees per radian, the single conversion base (`1 rad == 180/π deg`).
const DEG_PER_RAD: f64 = 180.0 / core::f64::consts::PI;

/// Fixed-point resolution of the integer tenth-of-a-degree form.
const TENTHS_PER_DEGREE: f64 = 10.0;

/// An angle stored as a raw `f64` degree magnitude.
///
/// `Angle` is a total, ordered, wraparound quantity: values are logically mod 360°, but the
/// stored magnitude is never reduced implicitly. Call [`Angle::normalize`] for the canonical
/// representative in `[0°, 360°)`.
///
/// # Examples
///
/// ```rust
/// use gonio_core::Angle;
///
/// let a = Angle::from_degrees(30.0);
/// let b = Angle::from_degrees(60.0);
/// assert_eq!((a + b).degrees(), 90.0);
///
/// // Raw comparison: a full turn is not erased until normalization.
/// assert_ne!(Angle::from_degrees(0.0), Angle::from_degrees(360.0));
/// assert_eq!(
///     Angle::from_degrees(0.0).normalize(),
///     Angle::from_degrees(360.0).normalize()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Angle(f64);

// ─────────────────────────────────────────────────────────────────────────────
// Named constants
// ─────────────────────────────────────────────────────────────────────────────

impl Angle {
    /// A constant representing NaN (the poisoned, non-finite angle).
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// assert!(Angle::NAN.degrees().is_nan());
    /// ```
    pub const NAN: Self = Self(f64::NAN);

    /// 0°.
    pub const ZERO: Self = Self(0.0);
    /// 45°.
    pub const DEG_45: Self = Self(45.0);
    /// 90°.
    pub const DEG_90: Self = Self(90.0);
    /// 135°.
    pub const DEG_135: Self = Self(135.0);
    /// 180°.
    pub const DEG_180: Self = Self(180.0);
    /// 270°.
    pub const DEG_270: Self = Self(270.0);
    /// 360°, one full revolution.
    pub const FULL_TURN: Self = Self(360.0);
    /// 180°, half a revolution. Same value as [`Angle::DEG_180`]; named for range arithmetic.
    pub const HALF_TURN: Self = Self(180.0);
    /// 90°, a quarter revolution. Same value as [`Angle::DEG_90`]; named for range arithmetic.
    pub const QUARTER_TURN: Self = Self(90.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Construction and accessors
// ─────────────────────────────────────────────────────────────────────────────

impl Angle {
    /// Creates an angle from a degree magnitude, retained exactly as given.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// let a = Angle::from_degrees(1000.0);
    /// assert_eq!(a.degrees(), 1000.0);
    /// ```
    #[inline]
    pub const fn from_degrees(value: f64) -> Self {
        Self(value)
    }

    /// Creates an angle from a radian magnitude.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// let a = Angle::from_radians(core::f64::consts::FRAC_PI_2);
    /// assert!((a.degrees() - 90.0).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn from_radians(value: f64) -> Self {
        Self(value * DEG_PER_RAD)
    }

    /// Creates an angle from the fixed-point integer tenth-of-a-degree form.
    ///
    /// The integer form is exact, so this conversion introduces no rounding beyond the division
    /// by ten.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// let a = Angle::from_tenths(905);
    /// assert_eq!(a.degrees(), 90.5);
    /// ```
    #[inline]
    pub const fn from_tenths(tenths: i32) -> Self {
        Self(tenths as f64 / TENTHS_PER_DEGREE)
    }

    /// Checked variant of [`Angle::from_degrees`]: rejects NaN and `±∞`.
    ///
    /// ```rust
    /// use gonio_core::{Angle, InvalidAngle};
    /// assert!(Angle::try_from_degrees(45.0).is_ok());
    /// assert!(Angle::try_from_degrees(f64::NAN).is_err());
    /// ```
    #[inline]
    pub fn try_from_degrees(value: f64) -> Result<Self, InvalidAngle> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(InvalidAngle::NotFinite(value))
        }
    }

    /// Checked variant of [`Angle::from_radians`]: rejects NaN and `±∞`.
    #[inline]
    pub fn try_from_radians(value: f64) -> Result<Self, InvalidAngle> {
        if value.is_finite() {
            Ok(Self::from_radians(value))
        } else {
            Err(InvalidAngle::NotFinite(value))
        }
    }

    /// Returns the raw degree magnitude.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// assert_eq!(Angle::from_degrees(720.0).degrees(), 720.0);
    /// ```
    #[inline]
    pub const fn degrees(self) -> f64 {
        self.0
    }

    /// Returns the raw magnitude expressed in radians.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// let r = Angle::from_degrees(180.0).radians();
    /// assert!((r - core::f64::consts::PI).abs() < 1e-12);
    /// ```
    #[inline]
    pub const fn radians(self) -> f64 {
        self.0 / DEG_PER_RAD
    }

    /// Converts to the fixed-point integer tenth-of-a-degree form.
    ///
    /// Rounding rule: **round-half-away-from-zero** (`0.05° → 1`, `-0.05° → -1`). Values
    /// outside the `i32` range saturate at `i32::MIN`/`i32::MAX`; NaN converts to `0`. The
    /// round trip back through [`Angle::from_tenths`] reproduces the original degree value to
    /// within half the unit resolution (`0.05°`).
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// assert_eq!(Angle::from_degrees(90.55).to_tenths(), 906);
    /// assert_eq!(Angle::from_degrees(-90.55).to_tenths(), -906);
    /// ```
    #[inline]
    pub fn to_tenths(self) -> i32 {
        let scaled = self.0 * TENTHS_PER_DEGREE;
        #[cfg(feature = "std")]
        let rounded = scaled.round();
        #[cfg(not(feature = "std"))]
        let rounded = libm::round(scaled);
        rounded as i32
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// assert_eq!(Angle::from_degrees(-10.0).abs().degrees(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Sign of the raw magnitude (same semantics as `f64::signum()`).
    #[inline]
    pub const fn signum(self) -> f64 {
        self.0.signum()
    }

    /// True iff the raw magnitude is neither NaN nor infinite.
    #[inline]
    pub const fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    /// Const addition of two angles.
    ///
    /// ```rust
    /// use gonio_core::Angle;
    /// const SUM: Angle = Angle::DEG_45.add(Angle::DEG_90);
    /// assert_eq!(SUM.degrees(), 135.0);
    /// ```
    #[inline]
    pub const fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }

    /// Const subtraction of two angles.
    #[inline]
    pub const fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl core::fmt::Display for Angle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}°", self.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for Angle {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Angle {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Angle::from_degrees(value))
    }
}

/// Serde helper module for serializing angles with an explicit unit tag.
///
/// Use this with the `#[serde(with = "...")]` attribute to preserve the unit symbol in
/// serialized data, for external APIs or self-documenting formats.
///
/// # Examples
///
/// ```rust
/// use gonio_core::Angle;
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Placement {
///     #[serde(with = "gonio_core::serde_with_unit")]
///     rotation: Angle,  // Serializes as {"value": 90.0, "unit": "deg"}
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use serde::de;

    const UNIT: &str = "deg";

    #[derive(Serialize)]
    #[serde(rename = "Angle")]
    struct Tagged {
        value: f64,
        unit: &'static str,
    }

    #[derive(Deserialize)]
    #[serde(rename = "Angle")]
    struct TaggedIn<'a> {
        value: f64,
        // Optional for backwards compatibility with the bare-value form.
        #[serde(borrow)]
        unit: Option<&'a str>,
    }

    /// Serializes an [`Angle`] as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON output
    /// ```json
    /// {"value": 42.5, "unit": "deg"}
    /// ```
    pub fn serialize<S>(angle: &Angle, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Tagged {
            value: angle.degrees(),
            unit: UNIT,
        }
        .serialize(serializer)
    }

    /// Deserializes an [`Angle`] from a struct with `value` and optionally `unit` fields.
    ///
    /// The `unit` field is validated if present; a mismatching symbol is an error rather than a
    /// silently reinterpreted magnitude.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Angle, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tagged = TaggedIn::deserialize(deserializer)?;
        if let Some(unit) = tagged.unit {
            if unit != UNIT {
                return Err(de::Error::custom("unit mismatch: expected 'deg'"));
            }
        }
        Ok(Angle::from_degrees(tagged.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    // ─────────────────────────────────────────────────────────────────────────
    // Construction and accessors
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn from_degrees_retains_raw_magnitude() {
        assert_eq!(Angle::from_degrees(720.0).degrees(), 720.0);
        assert_eq!(Angle::from_degrees(1080.0).degrees(), 1080.0);
        assert_eq!(Angle::from_degrees(-0.5).degrees(), -0.5);
    }

    #[test]
    fn from_radians_scales_once() {
        assert_abs_diff_eq!(Angle::from_radians(PI).degrees(), 180.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            Angle::from_radians(FRAC_PI_2).degrees(),
            90.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(Angle::from_radians(TAU).degrees(), 360.0, epsilon = 1e-12);
    }

    #[test]
    fn radians_roundtrip() {
        let a = Angle::from_degrees(123.456);
        let back = Angle::from_radians(a.radians());
        assert_abs_diff_eq!(back.degrees(), a.degrees(), epsilon = 1e-12);
    }

    #[test]
    fn from_tenths_is_exact_decimal() {
        assert_eq!(Angle::from_tenths(905).degrees(), 90.5);
        assert_eq!(Angle::from_tenths(-35).degrees(), -3.5);
        assert_eq!(Angle::from_tenths(0).degrees(), 0.0);
        assert_eq!(Angle::from_tenths(3600).degrees(), 360.0);
    }

    #[test]
    fn try_from_degrees_finite() {
        assert_eq!(Angle::try_from_degrees(45.0).unwrap().degrees(), 45.0);
        assert!(matches!(
            Angle::try_from_degrees(f64::NAN),
            Err(InvalidAngle::NotFinite(v)) if v.is_nan()
        ));
        assert!(Angle::try_from_degrees(f64::INFINITY).is_err());
    }

    #[test]
    fn try_from_radians_finite() {
        let a = Angle::try_from_radians(PI).unwrap();
        assert_abs_diff_eq!(a.degrees(), 180.0, epsilon = 1e-12);
        assert!(Angle::try_from_radians(f64::NEG_INFINITY).is_err());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Fixed-point conversion
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn to_tenths_rounds_half_away_from_zero() {
        assert_eq!(Angle::from_degrees(0.05).to_tenths(), 1);
        assert_eq!(Angle::from_degrees(-0.05).to_tenths(), -1);
        assert_eq!(Angle::from_degrees(90.55).to_tenths(), 906);
        assert_eq!(Angle::from_degrees(-90.55).to_tenths(), -906);
        assert_eq!(Angle::from_degrees(0.04).to_tenths(), 0);
        assert_eq!(Angle::from_degrees(-0.04).to_tenths(), 0);
    }

    #[test]
    fn to_tenths_exact_values() {
        assert_eq!(Angle::from_degrees(90.0).to_tenths(), 900);
        assert_eq!(Angle::from_degrees(-180.0).to_tenths(), -1800);
        assert_eq!(Angle::from_degrees(0.0).to_tenths(), 0);
    }

    #[test]
    fn to_tenths_saturates_and_zeroes_nan() {
        assert_eq!(Angle::from_degrees(1e300).to_tenths(), i32::MAX);
        assert_eq!(Angle::from_degrees(-1e300).to_tenths(), i32::MIN);
        assert_eq!(Angle::NAN.to_tenths(), 0);
    }

    #[test]
    fn tenths_roundtrip_exact_for_integer_tenths() {
        for tenths in [-3600, -1800, -1, 0, 1, 905, 3599, 7200] {
            assert_eq!(Angle::from_tenths(tenths).to_tenths(), tenths);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Constants
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn named_constants() {
        assert_eq!(Angle::ZERO.degrees(), 0.0);
        assert_eq!(Angle::DEG_45.degrees(), 45.0);
        assert_eq!(Angle::DEG_90.degrees(), 90.0);
        assert_eq!(Angle::DEG_135.degrees(), 135.0);
        assert_eq!(Angle::DEG_180.degrees(), 180.0);
        assert_eq!(Angle::DEG_270.degrees(), 270.0);
        assert_eq!(Angle::FULL_TURN.degrees(), 360.0);
        assert_eq!(Angle::HALF_TURN, Angle::DEG_180);
        assert_eq!(Angle::QUARTER_TURN, Angle::DEG_90);
    }

    #[test]
    fn nan_constant() {
        assert!(Angle::NAN.degrees().is_nan());
        assert!(!Angle::NAN.is_finite());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Misc accessors
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn abs_and_signum() {
        assert_eq!(Angle::from_degrees(-10.0).abs().degrees(), 10.0);
        assert_eq!(Angle::from_degrees(10.0).abs().degrees(), 10.0);
        assert_eq!(Angle::from_degrees(-10.0).signum(), -1.0);
        assert_eq!(Angle::from_degrees(10.0).signum(), 1.0);
    }

    #[test]
    fn display_degrees() {
        assert_eq!(format!("{}", Angle::from_degrees(45.5)), "45.5°");
        assert_eq!(format!("{}", Angle::from_degrees(-90.0)), "-90°");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Property-based tests
    // ─────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn prop_tenths_roundtrip_within_half_resolution(deg in -1e6..1e6f64) {
            let a = Angle::from_degrees(deg);
            let back = Angle::from_tenths(a.to_tenths());
            // Half the unit resolution, with headroom for the double rounding
            // in scale-then-divide.
            prop_assert!((back.degrees() - deg).abs() <= 0.05 + 1e-9);
        }

        #[test]
        fn prop_radians_roundtrip(deg in -1e6..1e6f64) {
            let a = Angle::from_degrees(deg);
            let back = Angle::from_radians(a.radians());
            prop_assert!((back.degrees() - deg).abs() <= 1e-6);
        }

        #[test]
        fn prop_checked_construction_accepts_all_finite(deg in -1e300..1e300f64) {
            prop_assert!(Angle::try_from_degrees(deg).is_ok());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_bare_value() {
            let json = serde_json::to_string(&Angle::from_degrees(42.5)).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn deserialize_bare_value() {
            let a: Angle = serde_json::from_str("42.5").unwrap();
            assert_eq!(a.degrees(), 42.5);
        }

        #[test]
        fn serde_roundtrip() {
            let original = Angle::from_degrees(123.456);
            let json = serde_json::to_string(&original).unwrap();
            let restored: Angle = serde_json::from_str(&json).unwrap();
            assert_eq!(restored, original);
        }

        #[derive(Serialize, Deserialize)]
        struct Placement {
            #[serde(with = "crate::serde_with_unit")]
            rotation: Angle,
        }

        #[test]
        fn serde_with_unit_serialize() {
            let p = Placement {
                rotation: Angle::from_degrees(90.0),
            };
            let json = serde_json::to_string(&p).unwrap();
            assert!(json.contains("\"value\""));
            assert!(json.contains("\"unit\""));
            assert!(json.contains("\"deg\""));
        }

        #[test]
        fn serde_with_unit_deserialize() {
            let json = r#"{"rotation":{"value":42.5,"unit":"deg"}}"#;
            let p: Placement = serde_json::from_str(json).unwrap();
            assert_eq!(p.rotation.degrees(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_no_unit_field() {
            let json = r#"{"rotation":{"value":42.5}}"#;
            let p: Placement = serde_json::from_str(json).unwrap();
            assert_eq!(p.rotation.degrees(), 42.5);
        }

        #[test]
        fn serde_with_unit_deserialize_wrong_unit() {
            let json = r#"{"rotation":{"value":42.5,"unit":"rad"}}"#;
            let result: Result<Placement, _> = serde_json::from_str(json);
            assert!(result.is_err());
            assert!(result.unwrap_err().to_string().contains("unit mismatch"));
        }

        #[test]
        fn serde_with_unit_roundtrip() {
            let original = Placement {
                rotation: Angle::from_degrees(-270.25),
            };
            let json = serde_json::to_string(&original).unwrap();
            let restored: Placement = serde_json::from_str(&json).unwrap();
            assert_eq!(restored.rotation, original.rotation);
        }
    }
}
