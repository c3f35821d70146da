use glam::Vec3;
use thiserror::Error;

/// Fraction of the remaining distance the camera covers each frame.
pub const DEFAULT_SMOOTHING: f32 = 0.05;
/// Visible fraction of a section needed before it becomes active.
pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.3;
/// Scroll offset (px) after which the navigation bar gets its background.
pub const DEFAULT_SCROLLED_OFFSET: f64 = 20.0;
pub const DEFAULT_FOV_DEGREES: f32 = 50.0;
pub const DEFAULT_STAR_COUNT: usize = 5000;
pub const DEFAULT_MOTE_COUNT: usize = 20;
pub const DEFAULT_SEED: u64 = 0x5EC7_10A5;
pub const DEFAULT_CAMERA_START: Vec3 = Vec3::new(0.0, 0.0, 10.0);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("smoothing factor must be in (0, 1), got {0}")]
    Smoothing(f32),
    #[error("visibility threshold must be in (0, 1], got {0}")]
    Threshold(f64),
    #[error("field of view must be in (0, 180) degrees, got {0}")]
    FieldOfView(f32),
}

/// Tunables for the background scene and section tracking.
///
/// Provided as context by `App` so the scene and the sections never reach for
/// ambient globals.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    smoothing: f32,
    visibility_threshold: f64,
    fov_degrees: f32,
    pub scrolled_offset: f64,
    pub star_count: usize,
    pub mote_count: usize,
    pub seed: u64,
    pub camera_start: Vec3,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            fov_degrees: DEFAULT_FOV_DEGREES,
            scrolled_offset: DEFAULT_SCROLLED_OFFSET,
            star_count: DEFAULT_STAR_COUNT,
            mote_count: DEFAULT_MOTE_COUNT,
            seed: DEFAULT_SEED,
            camera_start: DEFAULT_CAMERA_START,
        }
    }
}

impl SiteConfig {
    pub fn with_smoothing(mut self, smoothing: f32) -> Result<Self, ConfigError> {
        if !(smoothing > 0.0 && smoothing < 1.0) {
            return Err(ConfigError::Smoothing(smoothing));
        }
        self.smoothing = smoothing;
        Ok(self)
    }

    pub fn with_visibility_threshold(mut self, threshold: f64) -> Result<Self, ConfigError> {
        if !(threshold > 0.0 && threshold <= 1.0) {
            return Err(ConfigError::Threshold(threshold));
        }
        self.visibility_threshold = threshold;
        Ok(self)
    }

    pub fn with_fov_degrees(mut self, fov: f32) -> Result<Self, ConfigError> {
        if !(fov > 0.0 && fov < 180.0) {
            return Err(ConfigError::FieldOfView(fov));
        }
        self.fov_degrees = fov;
        Ok(self)
    }

    pub fn smoothing(&self) -> f32 {
        self.smoothing
    }

    pub fn visibility_threshold(&self) -> f64 {
        self.visibility_threshold
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.smoothing(), 0.05);
        assert_eq!(config.visibility_threshold(), 0.3);
        assert_eq!(config.fov_degrees(), 50.0);
        assert_eq!(config.scrolled_offset, 20.0);
    }

    #[test]
    fn test_smoothing_bounds() {
        assert!(SiteConfig::default().with_smoothing(0.2).is_ok());
        assert_eq!(
            SiteConfig::default().with_smoothing(0.0),
            Err(ConfigError::Smoothing(0.0))
        );
        assert_eq!(
            SiteConfig::default().with_smoothing(1.0),
            Err(ConfigError::Smoothing(1.0))
        );
        assert!(SiteConfig::default().with_smoothing(f32::NAN).is_err());
    }

    #[test]
    fn test_threshold_and_fov_bounds() {
        assert!(SiteConfig::default().with_visibility_threshold(1.0).is_ok());
        assert!(SiteConfig::default().with_visibility_threshold(0.0).is_err());
        assert!(SiteConfig::default().with_visibility_threshold(1.5).is_err());
        assert!(SiteConfig::default().with_fov_degrees(75.0).is_ok());
        assert!(SiteConfig::default().with_fov_degrees(180.0).is_err());
    }
}
