//! Error type for checked angle construction.

use thiserror::Error;

/// Error returned by the checked constructors when the supplied magnitude is not a finite number.
///
/// The unchecked factories ([`Angle::from_degrees`](crate::Angle::from_degrees) and friends)
/// never produce this error; they follow IEEE-754 propagation instead. See the crate-level
/// "Panics and errors" section.
///
/// ```rust
/// use gonio_core::{Angle, InvalidAngle};
///
/// let err = Angle::try_from_degrees(f64::INFINITY).unwrap_err();
/// assert!(matches!(err, InvalidAngle::NotFinite(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidAngle {
    /// The supplied magnitude was NaN or `±∞`.
    #[error("angle magnitude must be finite, got {0}")]
    NotFinite(f64),
}
