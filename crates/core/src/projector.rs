//! Transform & projector: rotate a surface sample into camera space,
//! perspective-project it, and compute its illumination.
//!
//! This module is pure. Nothing here touches the frame.

use crate::config::TorusConfig;
use crate::sampler::{CrossSection, Trig};
use crate::types::RotationAngles;

/// Sines and cosines of the driver's rotation angles, computed once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub a: Trig,
    pub b: Trig,
}

impl Rotation {
    pub fn new(angles: RotationAngles) -> Self {
        Self {
            a: Trig::of(angles.a),
            b: Trig::of(angles.b),
        }
    }
}

impl From<RotationAngles> for Rotation {
    fn from(angles: RotationAngles) -> Self {
        Self::new(angles)
    }
}

/// One projected surface sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Screen column (truncated toward zero, may be out of range).
    pub x: i32,
    /// Screen row (truncated toward zero, may be out of range).
    pub y: i32,
    /// Reciprocal depth. Larger is closer to the camera.
    pub ooz: f32,
    /// Illumination in roughly `[-sqrt(2), sqrt(2)]`. Positive faces the light.
    pub luminance: f32,
}

/// Camera constants derived from the configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    center_x: f32,
    center_y: f32,
    focal_x: f32,
    focal_y: f32,
    camera_distance: f32,
}

impl Projection {
    /// Derive the focal length so the torus spans about half the screen width.
    ///
    /// The widest point of the torus is at `x = R1 + R2, z = 0`; placing it a
    /// quarter screen from the center gives `K1 = (width / 4) * K2 / (R1 + R2)`.
    /// The quarter width and the screen centers use integer division.
    pub fn new(config: &TorusConfig) -> Self {
        let extent = config.minor_radius + config.major_radius;
        let focal_x = (config.screen_width / 4) as f32 * config.camera_distance / extent;
        Self {
            center_x: (config.screen_width / 2) as f32,
            center_y: (config.screen_height / 2) as f32,
            focal_x,
            focal_y: focal_x * config.aspect_ratio,
            camera_distance: config.camera_distance,
        }
    }

    pub fn focal_length(&self) -> f32 {
        self.focal_x
    }

    /// Revolve `section` by `phi`, rotate by A and B, and project.
    #[inline]
    pub fn project(&self, rot: &Rotation, section: &CrossSection, phi: Trig) -> Projected {
        let (cos_a, sin_a) = (rot.a.cos, rot.a.sin);
        let (cos_b, sin_b) = (rot.b.cos, rot.b.sin);
        let (cos_t, sin_t) = (section.theta.cos, section.theta.sin);
        let cx = section.circle_x;
        let cy = section.circle_y;

        let x = cx * (cos_b * phi.cos + sin_a * sin_b * phi.sin) - cy * cos_a * sin_b;
        let y = cx * (sin_b * phi.cos - sin_a * cos_b * phi.sin) + cy * cos_a * cos_b;
        let z = self.camera_distance + cos_a * cx * phi.sin + cy * sin_a;
        let ooz = 1.0 / z;

        // Screen y grows downward, so y is negated.
        let xp = (self.center_x + self.focal_x * x * ooz) as i32;
        let yp = (self.center_y - self.focal_y * y * ooz) as i32;

        // Surface normal dotted with the light direction (0, 1, -1).
        let luminance = phi.cos * cos_t * sin_b - cos_a * cos_t * phi.sin - sin_a * sin_t
            + cos_b * (cos_a * sin_t - cos_t * sin_a * phi.sin);

        Projected {
            x: xp,
            y: yp,
            ooz,
            luminance,
        }
    }
}
