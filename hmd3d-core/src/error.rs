/// Errors for degenerate display or pose configurations
use std::fmt;

/// Raised when an input would produce a NaN or singular transform.
///
/// All of these are caught at the boundary (construction or `update`)
/// instead of letting bad values propagate into the matrix pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum StereoError {
    /// A physical quantity that must be strictly positive was not.
    NonPositive { name: &'static str, value: f32 },
    /// The screen is not wide enough to place both eye regions.
    IpdExceedsScreen { ipd: f32, screen_width: f32 },
    /// Clip planes out of order, or a non-positive near plane.
    InvalidClipRange { near: f32, far: f32 },
    /// Viewer position and target coincide.
    DegenerateViewer,
}

impl fmt::Display for StereoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StereoError::NonPositive { name, value } => {
                write!(f, "display parameter `{name}` must be positive, got {value}")
            }
            StereoError::IpdExceedsScreen { ipd, screen_width } => {
                write!(
                    f,
                    "ipd {ipd} m does not fit on a {screen_width} m wide screen; \
                     the outer eye region collapses"
                )
            }
            StereoError::InvalidClipRange { near, far } => {
                write!(
                    f,
                    "clip planes must satisfy 0 < near < far, got near {near}, far {far}"
                )
            }
            StereoError::DegenerateViewer => {
                write!(
                    f,
                    "viewer position and target coincide; the view direction is undefined"
                )
            }
        }
    }
}

impl std::error::Error for StereoError {}
