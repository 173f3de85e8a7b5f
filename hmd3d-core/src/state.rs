/// Mutable per-frame viewer and object pose
use nalgebra::{Point3, Vector2, Vector3};

use crate::error::StereoError;

/// Everything that changes frame to frame: object pose, viewer pose,
/// clip planes. Owned and mutated by the application; the transform
/// builder only reads it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Object translation in world units (meters).
    pub model_translation: Vector3<f32>,
    /// Object rotation about the X and Y axes, in degrees.
    pub model_rotation: Vector2<f32>,
    /// Eye-pair midpoint in world coordinates.
    pub viewer_position: Point3<f32>,
    /// Point the viewer looks at.
    pub viewer_target: Point3<f32>,
    pub clip_near: f32,
    pub clip_far: f32,
}

impl FrameState {
    /// Rejects poses that would produce singular view or projection
    /// matrices.
    pub fn validate(&self) -> Result<(), StereoError> {
        if !(self.clip_near > 0.0) || !(self.clip_near < self.clip_far) {
            return Err(StereoError::InvalidClipRange {
                near: self.clip_near,
                far: self.clip_far,
            });
        }
        if self.viewer_position == self.viewer_target {
            return Err(StereoError::DegenerateViewer);
        }
        Ok(())
    }
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            model_translation: Vector3::new(0.0, 0.0, -0.35),
            model_rotation: Vector2::zeros(),
            viewer_position: Point3::origin(),
            viewer_target: Point3::new(0.0, 0.0, -1.0),
            clip_near: 0.01,
            clip_far: 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_is_valid() {
        assert!(FrameState::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_clip_planes() {
        let mut state = FrameState::default();
        state.clip_near = 0.0;
        assert!(matches!(
            state.validate(),
            Err(StereoError::InvalidClipRange { .. })
        ));

        let mut state = FrameState::default();
        state.clip_near = 10.0;
        state.clip_far = 1.0;
        assert!(matches!(
            state.validate(),
            Err(StereoError::InvalidClipRange { .. })
        ));
    }

    #[test]
    fn test_rejects_coincident_viewer_and_target() {
        let mut state = FrameState::default();
        state.viewer_target = state.viewer_position;
        assert_eq!(state.validate(), Err(StereoError::DegenerateViewer));
    }
}
