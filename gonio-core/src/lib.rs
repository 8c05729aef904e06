//! Core bounded-angle value type.
//!
//! `gonio-core` provides a single, precise numeric type:
//!
//! - An [`Angle`] is an `f64` degree magnitude wrapped in a `Copy` value type.
//! - Construction is explicit about units ([`Angle::from_degrees`], [`Angle::from_radians`],
//!   [`Angle::from_tenths`]) and never wraps or clamps the input.
//! - Canonicalization is an explicit, O(1) modular reduction via [`Angle::normalize`].
//! - Classification maps an angle onto the cardinal axes ([`Angle::is_cardinal`],
//!   [`Angle::is_cardinal90`]) or snaps it to the nearer upright orientation
//!   ([`Angle::keep_upright`]).
//!
//! Most users should depend on `gonio` (the facade crate) unless they need to pin this crate
//! directly.
//!
//! # What this crate solves
//!
//! - A total, ordered, wraparound angle quantity whose raw magnitude is preserved exactly, so
//!   callers can track cumulative rotation (multi-turn sweeps) without silent wraparound.
//! - Explicit, unit-tagged construction and conversion between degrees, radians, and the
//!   fixed-point tenth-of-a-degree form used for exact persistence.
//! - Directional classification with exact, documented boundary behavior.
//!
//! # What this crate does not try to solve
//!
//! - Geometry beyond a single angle (no vectors, transforms, or polygon operations).
//! - Exact arithmetic (`Angle` is backed by `f64`).
//! - Rendering, UI, or any file format of its own.
//!
//! # Quick start
//!
//! ```rust
//! use gonio_core::Angle;
//!
//! let a = Angle::from_degrees(-10.0);
//! assert_eq!(a.normalize().degrees(), 350.0);
//!
//! let r = Angle::from_radians(core::f64::consts::PI);
//! assert!((r.degrees() - 180.0).abs() < 1e-12);
//!
//! assert!(Angle::from_degrees(450.0).is_cardinal());
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `gonio-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! gonio-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via
//! `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Angle`]; serialization is the raw degree value as a
//!   bare `f64`.
//!
//! # Panics and errors
//!
//! Arithmetic, normalization, and classification are pure `f64` computations returning plain
//! values; they do not panic for any finite input, however extreme in magnitude. Non-finite
//! input follows IEEE-754: NaN propagates through arithmetic and normalization and makes every
//! comparison false. Callers that must reject NaN and infinities up front can use the checked
//! constructors [`Angle::try_from_degrees`] and [`Angle::try_from_radians`], which return
//! [`InvalidAngle`] instead of a poisoned value. Invalid input is never silently coerced to a
//! valid angle by either path.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod angle;
mod error;
mod ops;
mod orient;
mod wrap;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use angle::Angle;
pub use error::InvalidAngle;

#[cfg(feature = "serde")]
pub use angle::serde_with_unit;
