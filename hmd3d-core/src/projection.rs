/// Asymmetric frustum derivation and projection matrices for stereo displays
use nalgebra::Matrix4;

use crate::display::DisplayParameters;

/// Frustum extents measured on the near clip plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumPlanes {
    pub top: f32,
    pub bottom: f32,
    pub left: f32,
    pub right: f32,
}

/// Per-eye frustum extents for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StereoFrustum {
    pub left_eye: FrustumPlanes,
    pub right_eye: FrustumPlanes,
}

/// Derives both eyes' frustum extents from the physical display geometry.
///
/// Each lens magnifies its half of the screen by `M`; the half-width from
/// the lens axis toward the nose is `w1 = M * ipd / 2` and from the axis to
/// the outer screen edge `w2 = M * (screen_width - ipd) / 2`. Projecting
/// those widths onto the near plane through the screen-to-eye distance
/// gives each eye an off-center frustum, and the right eye mirrors the
/// left. The factor-of-2 placements are load-bearing; a mismatch shows up
/// as eye-strain-inducing misalignment between the two images, not as a
/// crash.
///
/// Vertically both eyes share the full magnified screen height, so top and
/// bottom are symmetric and identical between the eyes.
///
/// `_clip_far` does not participate in the extents (they are measured at
/// the near plane); the parameter is kept so the call mirrors
/// [`perspective`].
pub fn stereo_frustum(
    clip_near: f32,
    _clip_far: f32,
    display: &DisplayParameters,
) -> StereoFrustum {
    let m = display.lens_magnification;
    let w1 = m * display.ipd / 2.0;
    let w2 = m * (display.screen_width() - display.ipd) / 2.0;
    let h = m * display.screen_height();
    let dist = display.distance_screen_viewer;

    let top = clip_near * h / (2.0 * dist);

    StereoFrustum {
        left_eye: FrustumPlanes {
            top,
            bottom: -top,
            left: -clip_near * w2 / dist,
            right: clip_near * w1 / dist,
        },
        right_eye: FrustumPlanes {
            top,
            bottom: -top,
            left: -clip_near * w1 / dist,
            right: clip_near * w2 / dist,
        },
    }
}

/// Off-center perspective projection for the given frustum planes.
///
/// Column-vector convention, OpenGL clip space: a camera-space point on the
/// near-plane corner `(left, bottom, -clip_near)` lands on the NDC corner
/// `(-1, -1)`. Preconditions: `left < right`, `bottom < top`,
/// `0 < clip_near < clip_far`.
pub fn perspective(
    left: f32,
    right: f32,
    top: f32,
    bottom: f32,
    clip_near: f32,
    clip_far: f32,
) -> Matrix4<f32> {
    let x = 2.0 * clip_near / (right - left);
    let y = 2.0 * clip_near / (top - bottom);
    let a = (right + left) / (right - left);
    let b = (top + bottom) / (top - bottom);
    let c = -(clip_far + clip_near) / (clip_far - clip_near);
    let d = -2.0 * clip_far * clip_near / (clip_far - clip_near);

    Matrix4::new(
        x, 0.0, a, 0.0, //
        0.0, y, b, 0.0, //
        0.0, 0.0, c, d, //
        0.0, 0.0, -1.0, 0.0,
    )
}
