//! Bounded-angle value type with wraparound arithmetic and directional classification.
//!
//! `gonio` is the user-facing crate in this workspace. It re-exports the full API from
//! `gonio-core`.
//!
//! The core idea is: an [`Angle`] is a raw `f64` degree magnitude. Arithmetic never wraps, so
//! cumulative rotation survives intact; canonicalization into `[0°, 360°)` is an explicit,
//! constant-time [`Angle::normalize`] call. On top of that sit the directional classifiers:
//! [`Angle::is_cardinal`], [`Angle::is_cardinal90`], and the upright snap
//! [`Angle::keep_upright`].
//!
//! # What this crate solves
//!
//! - A wraparound angle quantity that still supports multi-turn bookkeeping (raw comparison,
//!   explicit normalization).
//! - Explicit unit-tagged construction: degrees, radians, or fixed-point tenths of a degree,
//!   never an ambiguous bare number.
//! - Exact, documented boundary behavior for axis classification and upright snapping.
//!
//! # What this crate does not try to solve
//!
//! - Geometry beyond a single angle (no vectors, transforms, or polygons).
//! - Exact arithmetic: angles are backed by `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use gonio::Angle;
//!
//! let a = Angle::from_degrees(-10.0);
//! assert_eq!(a.normalize().degrees(), 350.0);
//!
//! // Accumulate rotation without silent wraparound.
//! let sweep = Angle::from_degrees(350.0) + Angle::from_degrees(20.0);
//! assert_eq!(sweep.degrees(), 370.0);
//! assert_eq!(sweep.normalize().degrees(), 10.0);
//!
//! // Snap a label's rotation to the readable orientation.
//! assert_eq!(Angle::from_degrees(100.0).keep_upright(), Angle::DEG_90);
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `gonio-core`.
//! - `serde`: enables `serde` support for [`Angle`]; serialization is the raw degree value as a
//!   bare `f64`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! gonio = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! Core operations are pure `f64` computations; they do not panic for any finite input and
//! follow IEEE-754 behavior for NaN and infinities. Use [`Angle::try_from_degrees`] /
//! [`Angle::try_from_radians`] to reject non-finite input with [`InvalidAngle`] instead.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until
//! `1.0`.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use gonio_core::*;
