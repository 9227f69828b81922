//! Shared constants and value types for the torus renderer.
//!
//! This crate has no dependencies so that every other crate (core pipeline,
//! terminal backend, driver binary) can agree on the same numbers.
//!
//! # Geometry
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MINOR_RADIUS` | 1.0 | Tube radius (R1) |
//! | `MAJOR_RADIUS` | 2.0 | Distance from torus center to tube center (R2) |
//! | `CAMERA_DISTANCE` | 5.0 | Distance from the camera to the torus center (K2) |
//!
//! # Sampling
//!
//! - `THETA_STEP`: 0.07 rad around the tube cross-section
//! - `PHI_STEP`: 0.02 rad around the central axis
//!
//! # Timing
//!
//! Frames are paced to `FRAME_INTERVAL_MS`. Each frame advances the rotation
//! angles by `ANGLE_STEP_A` and `ANGLE_STEP_B` (scaled by the configured speed).
//!
//! # Examples
//!
//! ```
//! use ascii_torus_types::{RotationAngles, ANGLE_STEP_A, ANGLE_STEP_B, GLYPH_RAMP};
//!
//! let mut angles = RotationAngles::default();
//! angles.advance(ANGLE_STEP_A, ANGLE_STEP_B);
//! assert!(angles.a > angles.b);
//!
//! assert_eq!(GLYPH_RAMP.chars().count(), 12);
//! ```

use std::f32::consts::TAU;

/// Default screen width in columns.
pub const SCREEN_WIDTH: u16 = 80;

/// Default screen height in rows (a typical 24-row terminal minus two).
pub const SCREEN_HEIGHT: u16 = 22;

/// Tube radius (R1).
pub const MINOR_RADIUS: f32 = 1.0;

/// Distance from torus center to tube center (R2).
pub const MAJOR_RADIUS: f32 = 2.0;

/// Distance from camera to torus center along the viewing axis (K2).
pub const CAMERA_DISTANCE: f32 = 5.0;

/// Angular step around the tube cross-section (theta).
pub const THETA_STEP: f32 = 0.07;

/// Angular step around the central axis of revolution (phi).
pub const PHI_STEP: f32 = 0.02;

/// Vertical-to-horizontal focal length ratio.
///
/// Terminal cells are roughly twice as tall as they are wide.
pub const ASPECT_RATIO: f32 = 0.5;

/// Characters from sparsest to densest.
pub const GLYPH_RAMP: &str = ".,-~:;=!*#$@";

/// Multiplier turning illumination into a ramp index.
///
/// Illumination tops out at sqrt(2), so `8 * sqrt(2) ~= 11.3` covers all 12 glyphs.
pub const LUMINANCE_SCALE: f32 = 8.0;

/// The character written where nothing was plotted.
pub const BLANK: char = ' ';

/// Target frame interval in milliseconds (~30 FPS).
pub const FRAME_INTERVAL_MS: u64 = 33;

/// Per-frame increment of rotation angle A (radians).
pub const ANGLE_STEP_A: f32 = 0.04;

/// Per-frame increment of rotation angle B (radians).
pub const ANGLE_STEP_B: f32 = 0.02;

/// Rotation state owned by the driver.
///
/// `a` rotates about the horizontal (x) axis, `b` about the viewing (z) axis.
/// The render pipeline only ever reads these.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotationAngles {
    pub a: f32,
    pub b: f32,
}

impl RotationAngles {
    pub const fn new(a: f32, b: f32) -> Self {
        Self { a, b }
    }

    /// Advance both angles, wrapping each into `[0, 2pi)`.
    ///
    /// Wrapping keeps precision stable on long runs; sine and cosine are
    /// periodic so the rendered rotation is unchanged.
    pub fn advance(&mut self, da: f32, db: f32) {
        self.a = wrap_angle(self.a + da);
        self.b = wrap_angle(self.b + db);
    }
}

/// Normalize an angle into `[0, 2pi)`.
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
