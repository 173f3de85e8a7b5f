/// Closed-form radial lens-distortion remap for the unwarp pass
use nalgebra::Vector2;

/// Lens distortion description for one eye's viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionParams {
    /// Lens center in normalized texture coordinates (0..1).
    pub center: Vector2<f32>,
    /// Physical viewport size in millimeters (one eye's half of the
    /// window).
    pub viewport_size: Vector2<f32>,
    /// Radial coefficients `[K1, K2]`.
    pub k: [f32; 2],
    /// Lens-to-screen distance in millimeters.
    pub dist_lens_screen: f32,
}

/// Maps an output texture coordinate to the distorted source coordinate:
/// `factor = 1 + K1·r² + K2·r⁴` with `r` the physical distance from the
/// lens center divided by the lens-to-screen distance.
///
/// Returns `None` when the source sample falls outside `[0, 1)` on either
/// axis; the unwarp pass paints those pixels black. `k = [0, 0]` is the
/// identity remap.
pub fn unwarp(params: &DistortionParams, tex_coords: Vector2<f32>) -> Option<Vector2<f32>> {
    let offset = tex_coords - params.center;
    let mm = params.viewport_size.component_mul(&offset);
    let r = mm.norm() / params.dist_lens_screen;

    let r2 = r * r;
    let factor = 1.0 + params.k[0] * r2 + params.k[1] * r2 * r2;

    let sample = offset * factor + params.center;
    let in_range =
        sample.x >= 0.0 && sample.x < 1.0 && sample.y >= 0.0 && sample.y < 1.0;
    in_range.then_some(sample)
}
