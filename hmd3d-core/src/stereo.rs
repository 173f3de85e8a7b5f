/// Stereo model/view/projection matrix builder
use nalgebra::Matrix4;

use crate::display::DisplayParameters;
use crate::error::StereoError;
use crate::projection;
use crate::state::FrameState;
use crate::transform::Transform;

/// A left/right pair of eye matrices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoPair {
    pub left: Matrix4<f32>,
    pub right: Matrix4<f32>,
}

impl StereoPair {
    fn identity() -> Self {
        Self {
            left: Matrix4::identity(),
            right: Matrix4::identity(),
        }
    }
}

/// Holds and recomputes the model/view/projection matrices for both eyes.
///
/// Call [`update`](Self::update) once per rendered frame, then read the
/// matrices as a snapshot; they stay valid until the next update. All five
/// matrices are computed into temporaries and published together, so a
/// caller never observes a half-updated set. Single render thread assumed;
/// concurrent readers must synchronize around `update` externally.
#[derive(Debug, Clone)]
pub struct StereoTransforms {
    display: DisplayParameters,
    model_mat: Matrix4<f32>,
    stereo_view_mat: StereoPair,
    stereo_projection_mat: StereoPair,
}

impl StereoTransforms {
    /// Validates the display configuration and starts with identity
    /// matrices until the first `update`.
    pub fn new(display: DisplayParameters) -> Result<Self, StereoError> {
        display.validate()?;
        Ok(Self {
            display,
            model_mat: Matrix4::identity(),
            stereo_view_mat: StereoPair::identity(),
            stereo_projection_mat: StereoPair::identity(),
        })
    }

    pub fn display(&self) -> &DisplayParameters {
        &self.display
    }

    /// Model matrix from the last update.
    pub fn model_mat(&self) -> &Matrix4<f32> {
        &self.model_mat
    }

    /// Per-eye view matrices from the last update.
    pub fn stereo_view_mat(&self) -> &StereoPair {
        &self.stereo_view_mat
    }

    /// Per-eye projection matrices from the last update.
    pub fn stereo_projection_mat(&self) -> &StereoPair {
        &self.stereo_projection_mat
    }

    /// Recomputes all matrices from the frame state and the fixed display
    /// configuration. On error the cached matrices are left untouched.
    ///
    /// Deterministic: the same state always produces bit-identical
    /// matrices.
    pub fn update(&mut self, state: &FrameState) -> Result<(), StereoError> {
        state.validate()?;

        let half_ipd = self.display.ipd / 2.0;
        let model = Transform::model(state);
        let view = StereoPair {
            left: Transform::view(state, half_ipd),
            right: Transform::view(state, -half_ipd),
        };

        let frustum = projection::stereo_frustum(state.clip_near, state.clip_far, &self.display);
        let proj = StereoPair {
            left: projection::perspective(
                frustum.left_eye.left,
                frustum.left_eye.right,
                frustum.left_eye.top,
                frustum.left_eye.bottom,
                state.clip_near,
                state.clip_far,
            ),
            right: projection::perspective(
                frustum.right_eye.left,
                frustum.right_eye.right,
                frustum.right_eye.top,
                frustum.right_eye.bottom,
                state.clip_near,
                state.clip_far,
            ),
        };

        self.model_mat = model;
        self.stereo_view_mat = view;
        self.stereo_projection_mat = proj;
        log::trace!("stereo matrices updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{Point3, Vector2, Vector3};

    fn builder() -> StereoTransforms {
        StereoTransforms::new(DisplayParameters::default()).unwrap()
    }

    #[test]
    fn test_new_rejects_invalid_display() {
        let display = DisplayParameters {
            ipd: -0.064,
            ..DisplayParameters::default()
        };
        assert!(StereoTransforms::new(display).is_err());
    }

    #[test]
    fn test_update_is_idempotent() {
        let state = FrameState {
            model_translation: Vector3::new(0.1, 0.2, -0.5),
            model_rotation: Vector2::new(12.0, 34.0),
            viewer_position: Point3::new(0.0, 0.1, 0.5),
            viewer_target: Point3::new(0.0, 0.0, -1.0),
            clip_near: 0.1,
            clip_far: 100.0,
        };

        let mut a = builder();
        a.update(&state).unwrap();
        let first = (*a.model_mat(), *a.stereo_view_mat(), *a.stereo_projection_mat());

        a.update(&state).unwrap();
        let second = (*a.model_mat(), *a.stereo_view_mat(), *a.stereo_projection_mat());

        // Bit-identical, not merely close.
        assert_eq!(first, second);
    }

    #[test]
    fn test_update_overwrites_previous_frame() {
        let mut builder = builder();
        let mut state = FrameState::default();
        builder.update(&state).unwrap();
        let before = *builder.model_mat();

        state.model_rotation = Vector2::new(0.0, 45.0);
        builder.update(&state).unwrap();
        assert_ne!(before, *builder.model_mat());
    }

    #[test]
    fn test_failed_update_keeps_last_matrices() {
        let mut builder = builder();
        builder.update(&FrameState::default()).unwrap();
        let before = (
            *builder.model_mat(),
            *builder.stereo_view_mat(),
            *builder.stereo_projection_mat(),
        );

        let bad = FrameState {
            clip_near: -1.0,
            ..FrameState::default()
        };
        assert!(builder.update(&bad).is_err());
        let after = (
            *builder.model_mat(),
            *builder.stereo_view_mat(),
            *builder.stereo_projection_mat(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_eye_views_differ_only_by_ipd() {
        let mut builder = builder();
        builder.update(&FrameState::default()).unwrap();
        let views = builder.stereo_view_mat();

        let shift = Matrix4::new_translation(&Vector3::new(builder.display().ipd, 0.0, 0.0));
        let left_from_right = shift * views.right;
        assert!((left_from_right - views.left).norm() < 1e-6);
    }
}
