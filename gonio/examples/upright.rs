//! Upright snapping example: keeping rotated labels readable.

use gonio::Angle;

fn main() {
    // A label rotated with its parent should stay horizontal or vertical,
    // whichever is nearer.
    for deg in [0.0, 30.0, 45.0, 60.0, 100.0, 200.0, 280.0, 350.0] {
        let snapped = Angle::from_degrees(deg).keep_upright();
        println!("{deg:>5}° -> {snapped}");
    }

    assert_eq!(Angle::from_degrees(30.0).keep_upright(), Angle::ZERO);
    assert_eq!(Angle::from_degrees(60.0).keep_upright(), Angle::DEG_90);

    // The 45° boundary is inclusive toward horizontal.
    assert_eq!(Angle::from_degrees(45.0).keep_upright(), Angle::ZERO);
    assert_eq!(Angle::from_degrees(45.0001).keep_upright(), Angle::DEG_90);
}
