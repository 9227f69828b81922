//! Renderer configuration and startup validation.

use std::time::Duration;

use thiserror::Error;

use crate::types::{
    ASPECT_RATIO, BLANK, CAMERA_DISTANCE, FRAME_INTERVAL_MS, GLYPH_RAMP, LUMINANCE_SCALE,
    MAJOR_RADIUS, MINOR_RADIUS, PHI_STEP, SCREEN_HEIGHT, SCREEN_WIDTH, THETA_STEP,
};

/// Invalid configuration, reported once at startup.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("screen must be at least 1x1, got {width}x{height}")]
    EmptyScreen { width: u16, height: u16 },

    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("minor radius {minor} must be smaller than major radius {major}")]
    DegenerateTorus { minor: f32, major: f32 },

    #[error(
        "camera distance {camera_distance} must exceed major + minor radius ({extent}) \
         or part of the torus lands behind the camera"
    )]
    CameraInsideTorus { camera_distance: f32, extent: f32 },

    #[error("glyph ramp must not be empty")]
    EmptyGlyphRamp,

    #[error("glyph ramp must not contain the blank character")]
    BlankInGlyphRamp,
}

/// Fixed parameters for one process lifetime.
///
/// `Default` reproduces the classic donut: an 80x22 screen, R1=1, R2=2, K2=5.
#[derive(Debug, Clone, PartialEq)]
pub struct TorusConfig {
    pub screen_width: u16,
    pub screen_height: u16,
    pub minor_radius: f32,
    pub major_radius: f32,
    pub camera_distance: f32,
    pub theta_step: f32,
    pub phi_step: f32,
    pub aspect_ratio: f32,
    pub glyph_ramp: String,
    pub luminance_scale: f32,
    pub frame_interval: Duration,
    /// Multiplier on the per-frame rotation increments.
    pub speed: f32,
    /// Stop the driver after this many frames. `None` runs forever.
    pub max_frames: Option<u64>,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            minor_radius: MINOR_RADIUS,
            major_radius: MAJOR_RADIUS,
            camera_distance: CAMERA_DISTANCE,
            theta_step: THETA_STEP,
            phi_step: PHI_STEP,
            aspect_ratio: ASPECT_RATIO,
            glyph_ramp: GLYPH_RAMP.to_string(),
            luminance_scale: LUMINANCE_SCALE,
            frame_interval: Duration::from_millis(FRAME_INTERVAL_MS),
            speed: 1.0,
            max_frames: None,
        }
    }
}

impl TorusConfig {
    /// Create from environment variables.
    ///
    /// Reads `TORUS_WIDTH`, `TORUS_HEIGHT`, `TORUS_FRAME_MS`, `TORUS_SPEED` and
    /// `TORUS_MAX_FRAMES`. Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`TorusConfig::from_env`] but with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let parsed = |key: &str| lookup(key).map(|s| s.trim().to_string());
        let defaults = Self::default();

        let screen_width = parsed("TORUS_WIDTH")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.screen_width);
        let screen_height = parsed("TORUS_HEIGHT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.screen_height);
        let frame_interval = parsed("TORUS_FRAME_MS")
            .and_then(|s| s.parse().ok())
            .map(Duration::from_millis)
            .unwrap_or(defaults.frame_interval);
        let speed = parsed("TORUS_SPEED")
            .and_then(|s| s.parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(defaults.speed);
        let max_frames = parsed("TORUS_MAX_FRAMES")
            .and_then(|s| s.parse().ok())
            .filter(|&n: &u64| n > 0);

        Self {
            screen_width,
            screen_height,
            frame_interval,
            speed,
            max_frames,
            ..defaults
        }
    }

    pub fn with_screen(mut self, width: u16, height: u16) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_max_frames(mut self, max_frames: Option<u64>) -> Self {
        self.max_frames = max_frames;
        self
    }

    /// Reject geometry that would divide by zero or place the torus behind the camera.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(ConfigError::EmptyScreen {
                width: self.screen_width,
                height: self.screen_height,
            });
        }

        for (name, value) in [
            ("minor radius", self.minor_radius),
            ("major radius", self.major_radius),
            ("camera distance", self.camera_distance),
            ("theta step", self.theta_step),
            ("phi step", self.phi_step),
            ("aspect ratio", self.aspect_ratio),
            ("luminance scale", self.luminance_scale),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }

        if self.minor_radius >= self.major_radius {
            return Err(ConfigError::DegenerateTorus {
                minor: self.minor_radius,
                major: self.major_radius,
            });
        }

        let extent = self.minor_radius + self.major_radius;
        if self.camera_distance <= extent {
            return Err(ConfigError::CameraInsideTorus {
                camera_distance: self.camera_distance,
                extent,
            });
        }

        if self.glyph_ramp.is_empty() {
            return Err(ConfigError::EmptyGlyphRamp);
        }
        if self.glyph_ramp.contains(BLANK) {
            return Err(ConfigError::BlankInGlyphRamp);
        }

        Ok(())
    }
}
