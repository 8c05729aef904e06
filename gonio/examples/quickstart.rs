//! Minimal end-to-end example: construct, accumulate, and canonicalize angles.

use gonio::Angle;

fn main() {
    let a = Angle::from_radians(core::f64::consts::PI);
    assert!((a.degrees() - 180.0).abs() < 1e-12);

    // Arithmetic keeps the raw magnitude; normalization is explicit.
    let sweep = Angle::from_degrees(350.0) + Angle::from_degrees(20.0);
    assert_eq!(sweep.degrees(), 370.0);
    assert_eq!(sweep.normalize().degrees(), 10.0);

    // Fixed-point tenths for exact persistence.
    let stored = Angle::from_degrees(90.55).to_tenths();
    assert_eq!(stored, 906);
    assert_eq!(Angle::from_tenths(stored).degrees(), 90.6);
}
