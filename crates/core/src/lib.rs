//! Core torus renderer - pure, deterministic, and testable
//!
//! This crate turns two rotation angles into a character frame. It does no
//! terminal I/O and no timing, so every frame can be produced and
//! inspected in tests.
//!
//! # Pipeline
//!
//! Each call to [`Renderer::render_into`] runs three stages fused into one
//! double loop over the sampling grid:
//!
//! - [`sampler`]: points on the tube cross-section (theta) and the revolution
//!   angles around the central axis (phi)
//! - [`projector`]: rotation by A and B, perspective projection to integer
//!   screen coordinates, and illumination
//! - [`raster`]: back-face culling, bounds check, depth test on reciprocal
//!   depth, and glyph lookup via [`glyph`]
//!
//! # Example
//!
//! ```
//! use ascii_torus_core::{Renderer, TorusConfig};
//! use ascii_torus_types::RotationAngles;
//!
//! let mut renderer = Renderer::new(TorusConfig::default()).unwrap();
//! let frame = renderer.render(RotationAngles::new(1.0, 0.5));
//!
//! assert_eq!(frame.lines().len(), 22);
//! assert!(frame.lines().iter().all(|line| line.chars().count() == 80));
//! ```

pub mod config;
pub mod frame;
pub mod glyph;
pub mod projector;
pub mod raster;
pub mod render;
pub mod sampler;

pub use ascii_torus_types as types;

pub use config::{ConfigError, TorusConfig};
pub use frame::Frame;
pub use glyph::GlyphRamp;
pub use projector::{Projected, Projection, Rotation};
pub use raster::{DepthBuffer, PlotOutcome, Rasterizer};
pub use render::{RenderStats, Renderer};
pub use sampler::{angular_grid, CrossSection, SurfaceSampler, Trig};
