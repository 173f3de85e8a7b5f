/// Physical display configuration for a lens-based stereo viewer
use serde::{Deserialize, Serialize};

use crate::error::StereoError;

/// Fixed per-session description of the display hardware.
///
/// All lengths are in meters. The canvas is the full shared screen; each
/// eye sees one half of it through its lens.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayParameters {
    /// Interpupillary distance.
    pub ipd: f32,
    /// Scalar magnification of the lenses.
    pub lens_magnification: f32,
    /// Screen width in pixels.
    pub canvas_width: u32,
    /// Screen height in pixels.
    pub canvas_height: u32,
    /// Physical size of one pixel, meters per pixel.
    pub pixel_pitch: f32,
    /// Distance from the screen to the viewer's eyes along the view axis.
    pub distance_screen_viewer: f32,
}

impl DisplayParameters {
    /// Builds a validated configuration. Fails fast on values that would
    /// degenerate the stereo frustums.
    pub fn new(
        ipd: f32,
        lens_magnification: f32,
        canvas_width: u32,
        canvas_height: u32,
        pixel_pitch: f32,
        distance_screen_viewer: f32,
    ) -> Result<Self, StereoError> {
        let params = Self {
            ipd,
            lens_magnification,
            canvas_width,
            canvas_height,
            pixel_pitch,
            distance_screen_viewer,
        };
        params.validate()?;
        Ok(params)
    }

    /// Re-checks the invariants. Deserialized profiles bypass `new`, so
    /// loaders call this before handing the profile to the transform
    /// builder.
    pub fn validate(&self) -> Result<(), StereoError> {
        let positive = [
            ("ipd", self.ipd),
            ("lens_magnification", self.lens_magnification),
            ("canvas_width", self.canvas_width as f32),
            ("canvas_height", self.canvas_height as f32),
            ("pixel_pitch", self.pixel_pitch),
            ("distance_screen_viewer", self.distance_screen_viewer),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(StereoError::NonPositive { name, value });
            }
        }
        if self.screen_width() <= self.ipd {
            return Err(StereoError::IpdExceedsScreen {
                ipd: self.ipd,
                screen_width: self.screen_width(),
            });
        }
        Ok(())
    }

    /// Physical screen width in meters.
    pub fn screen_width(&self) -> f32 {
        self.canvas_width as f32 * self.pixel_pitch
    }

    /// Physical screen height in meters.
    pub fn screen_height(&self) -> f32 {
        self.canvas_height as f32 * self.pixel_pitch
    }
}

impl Default for DisplayParameters {
    /// A generic phone-in-headset profile: 403 ppi panel, 64 mm ipd,
    /// screen 48 mm from the eyes.
    fn default() -> Self {
        Self {
            ipd: 0.064,
            lens_magnification: 1.6,
            canvas_width: 1920,
            canvas_height: 1080,
            pixel_pitch: 6.3e-5,
            distance_screen_viewer: 0.048,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile_is_valid() {
        assert!(DisplayParameters::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_quantities() {
        let err = DisplayParameters::new(0.0, 1.0, 1000, 1000, 1e-4, 0.04).unwrap_err();
        assert_eq!(
            err,
            StereoError::NonPositive {
                name: "ipd",
                value: 0.0
            }
        );

        let err = DisplayParameters::new(0.064, 1.0, 1000, 1000, -1e-4, 0.04).unwrap_err();
        assert!(matches!(err, StereoError::NonPositive { name: "pixel_pitch", .. }));
    }

    #[test]
    fn test_rejects_ipd_wider_than_screen() {
        // 1000 px * 1e-5 m/px = 1 cm screen, narrower than the 6.4 cm ipd.
        let err = DisplayParameters::new(0.064, 1.0, 1000, 1000, 1e-5, 0.04).unwrap_err();
        assert!(matches!(err, StereoError::IpdExceedsScreen { .. }));
    }

    #[test]
    fn test_profile_round_trips_through_json() {
        let profile = DisplayParameters::default();
        let json = serde_json::to_string(&profile).unwrap();
        let back: DisplayParameters = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, back);
    }

    #[test]
    fn test_physical_screen_size() {
        let profile = DisplayParameters::new(0.064, 1.0, 1000, 500, 1e-4, 0.04).unwrap();
        assert!((profile.screen_width() - 0.1).abs() < 1e-6);
        assert!((profile.screen_height() - 0.05).abs() < 1e-6);
    }
}
