//! Orientation hand-off to the 3D model boundary.

/// Euler angles in radians, ordered as the model applies them to its
/// X, Y and Z axes (rotation order ZYX).
///
/// Axis assignment is part of the viewer contract: pitch drives X, yaw
/// drives Y and roll drives Z, even though the input tuple is
/// `[roll, pitch, yaw]`. Downstream renderers depend on this exact
/// mapping; do not "straighten" it to roll-on-X.
pub fn model_rotation_radians(orientation_deg: [f64; 3]) -> [f64; 3] {
    let [roll, pitch, yaw] = orientation_deg;
    [pitch.to_radians(), yaw.to_radians(), roll.to_radians()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn converts_degrees_to_radians() {
        let [x, y, z] = model_rotation_radians([180.0, 90.0, 45.0]);
        assert!((x - PI / 2.0).abs() < 1e-12);
        assert!((y - PI / 4.0).abs() < 1e-12);
        assert!((z - PI).abs() < 1e-12);
    }

    #[test]
    fn axes_are_reassigned_not_passed_through() {
        // roll lands on Z, pitch on X, yaw on Y
        let [x, y, z] = model_rotation_radians([10.0, 20.0, 30.0]);
        assert!((x - 20f64.to_radians()).abs() < 1e-12);
        assert!((y - 30f64.to_radians()).abs() < 1e-12);
        assert!((z - 10f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn zero_orientation_maps_to_zero_rotation() {
        assert_eq!(model_rotation_radians([0.0, 0.0, 0.0]), [0.0, 0.0, 0.0]);
    }
}
