/// Model and per-eye view matrix builders
use nalgebra::{Matrix4, Point3, Vector3};

use crate::state::FrameState;

/// Matrix builders for the stereo pipeline.
///
/// Convention throughout: column-major storage, column vectors (`M * v`),
/// so composed products apply right-to-left.
pub struct Transform;

impl Transform {
    /// Model matrix, composed as `Translation * RotationX * RotationY`.
    /// Rotation angles are given in degrees.
    pub fn model(state: &FrameState) -> Matrix4<f32> {
        let translation = Matrix4::new_translation(&state.model_translation);
        let rotation_x = Matrix4::new_rotation(Vector3::new(
            state.model_rotation.x.to_radians(),
            0.0,
            0.0,
        ));
        let rotation_y = Matrix4::new_rotation(Vector3::new(
            0.0,
            state.model_rotation.y.to_radians(),
            0.0,
        ));

        translation * rotation_x * rotation_y
    }

    /// View matrix for one eye, composed as
    /// `IpdShift * LookAtRotationᵀ * Translation(-viewer_position)`.
    ///
    /// The world is first moved so the viewer sits at the origin, then
    /// rotated into view orientation (the look-at rotation is pure, so its
    /// inverse is the transpose), and finally the eye is displaced along
    /// the view-space X axis. `half_ipd_shift` is `+ipd/2` for the left
    /// eye and `-ipd/2` for the right.
    ///
    /// Precondition: `viewer_position != viewer_target` (checked by
    /// `FrameState::validate`, not here).
    pub fn view(state: &FrameState, half_ipd_shift: f32) -> Matrix4<f32> {
        let translation = Matrix4::new_translation(&(-state.viewer_position.coords));
        let rotation =
            look_at_rotation(&state.viewer_position, &state.viewer_target, &Vector3::y())
                .transpose();
        let ipd_shift = Matrix4::new_translation(&Vector3::new(half_ipd_shift, 0.0, 0.0));

        ipd_shift * rotation * translation
    }
}

/// Right-handed rotation whose -Z axis points from `eye` toward `target`,
/// basis vectors in the columns (view-to-world orientation).
fn look_at_rotation(eye: &Point3<f32>, target: &Point3<f32>, up: &Vector3<f32>) -> Matrix4<f32> {
    let z = (eye - target).normalize();
    let x = up.cross(&z).normalize();
    let y = z.cross(&x);

    Matrix4::new(
        x.x, y.x, z.x, 0.0, //
        x.y, y.y, z.y, 0.0, //
        x.z, y.z, z.z, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector2;

    #[test]
    fn test_zero_rotation_model_is_pure_translation() {
        let state = FrameState {
            model_translation: Vector3::new(1.5, -2.0, 3.25),
            model_rotation: Vector2::zeros(),
            ..FrameState::default()
        };
        let expected = Matrix4::new_translation(&Vector3::new(1.5, -2.0, 3.25));
        assert_eq!(Transform::model(&state), expected);
    }

    #[test]
    fn test_model_rotation_order_y_before_x() {
        // 90° about Y maps +Z to +X, and the following 90° about X leaves
        // +X untouched. Applying X first would send the point to -Y instead.
        let state = FrameState {
            model_translation: Vector3::zeros(),
            model_rotation: Vector2::new(90.0, 90.0),
            ..FrameState::default()
        };
        let rotated = Transform::model(&state).transform_point(&Point3::new(0.0, 0.0, 1.0));
        assert!((rotated - Point3::new(1.0, 0.0, 0.0)).norm() < 1e-5);
    }

    #[test]
    fn test_view_maps_viewer_to_origin() {
        let state = FrameState {
            viewer_position: Point3::new(0.3, -0.2, 1.0),
            viewer_target: Point3::new(0.3, -0.2, 0.0),
            ..FrameState::default()
        };
        let view = Transform::view(&state, 0.0);
        let mapped = view.transform_point(&state.viewer_position);
        assert!(mapped.coords.norm() < 1e-6);
    }

    #[test]
    fn test_view_looks_down_negative_z() {
        let state = FrameState {
            viewer_position: Point3::new(0.0, 0.0, 2.0),
            viewer_target: Point3::new(0.0, 0.0, 0.0),
            ..FrameState::default()
        };
        let view = Transform::view(&state, 0.0);
        // The target sits 2 m in front of the viewer, on the -Z view axis.
        let mapped = view.transform_point(&state.viewer_target);
        assert!((mapped - Point3::new(0.0, 0.0, -2.0)).norm() < 1e-6);
    }

    #[test]
    fn test_ipd_shift_separates_the_eyes() {
        let state = FrameState::default();
        let left = Transform::view(&state, 0.032);
        let right = Transform::view(&state, -0.032);
        let in_left = left.transform_point(&state.viewer_position);
        let in_right = right.transform_point(&state.viewer_position);
        // Same world point, 64 mm apart horizontally between the two eyes.
        assert!((in_left.x - in_right.x - 0.064).abs() < 1e-6);
        assert!((in_left.y - in_right.y).abs() < 1e-6);
        assert!((in_left.z - in_right.z).abs() < 1e-6);
    }
}
