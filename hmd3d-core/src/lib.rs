/// HMD3D Core Library - Stereo transform and shading math
///
/// Stateless math for lens-separated stereo displays: validated physical
/// display configuration, per-frame pose state, per-eye asymmetric view
/// frustums and model/view/projection matrices, the shader-matched Phong
/// lighting model, and the radial lens unwarp remap.
///
/// Matrix convention everywhere: column-major storage, column vectors
/// (`M * v`), compositions apply right-to-left.

pub mod display;
pub mod distortion;
pub mod error;
pub mod geometry;
pub mod lighting;
pub mod projection;
pub mod state;
pub mod stereo;
pub mod transform;

// Re-export commonly used types
pub use display::DisplayParameters;
pub use distortion::DistortionParams;
pub use error::StereoError;
pub use geometry::{Mesh, Triangle, Vertex};
pub use lighting::{DirectionalLight, LightRig, Material, PointLight};
pub use projection::{FrustumPlanes, StereoFrustum};
pub use state::FrameState;
pub use stereo::{StereoPair, StereoTransforms};
pub use transform::Transform;
