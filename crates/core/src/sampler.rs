//! Surface sampler: the fixed angular grid over the torus surface.
//!
//! The grid is identical for every frame, so the sines and cosines of both
//! sampling angles are tabulated once at construction.

use std::f32::consts::TAU;

/// Cosine and sine of one angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trig {
    pub cos: f32,
    pub sin: f32,
}

impl Trig {
    #[inline]
    pub fn of(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { cos, sin }
    }
}

/// A point on the tube's circular cross-section, before revolving it around
/// the central axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossSection {
    pub theta: Trig,
    /// `major_radius + minor_radius * cos(theta)`
    pub circle_x: f32,
    /// `minor_radius * sin(theta)`
    pub circle_y: f32,
}

impl CrossSection {
    pub fn new(minor_radius: f32, major_radius: f32, theta: f32) -> Self {
        let theta = Trig::of(theta);
        Self {
            theta,
            circle_x: major_radius + minor_radius * theta.cos,
            circle_y: minor_radius * theta.sin,
        }
    }
}

/// Angles `0, step, 2*step, ...` strictly below `2pi`.
///
/// Each angle is computed as `i * step` rather than by repeated addition, so
/// the last sample is near but not exactly at a full revolution.
pub fn angular_grid(step: f32) -> impl Iterator<Item = f32> {
    (0u32..)
        .map(move |i| i as f32 * step)
        .take_while(|&angle| angle < TAU)
}

/// Tabulated torus surface samples.
///
/// Every `(cross_section, revolution)` pair is one surface point.
#[derive(Debug, Clone)]
pub struct SurfaceSampler {
    cross_sections: Vec<CrossSection>,
    revolutions: Vec<Trig>,
}

impl SurfaceSampler {
    /// Steps must be positive; `TorusConfig::validate` guarantees this.
    pub fn new(minor_radius: f32, major_radius: f32, theta_step: f32, phi_step: f32) -> Self {
        let cross_sections = angular_grid(theta_step)
            .map(|theta| CrossSection::new(minor_radius, major_radius, theta))
            .collect();
        let revolutions = angular_grid(phi_step).map(Trig::of).collect();
        Self {
            cross_sections,
            revolutions,
        }
    }

    /// Points around the tube (theta).
    pub fn cross_sections(&self) -> &[CrossSection] {
        &self.cross_sections
    }

    /// Revolution angles around the central axis (phi).
    pub fn revolutions(&self) -> &[Trig] {
        &self.revolutions
    }

    pub fn sample_count(&self) -> usize {
        self.cross_sections.len() * self.revolutions.len()
    }
}
