//! Renderer: one synchronous pass of sample -> project -> rasterize.

use crate::config::{ConfigError, TorusConfig};
use crate::frame::Frame;
use crate::glyph::GlyphRamp;
use crate::projector::{Projection, Rotation};
use crate::raster::{PlotOutcome, Rasterizer};
use crate::sampler::SurfaceSampler;
use crate::types::RotationAngles;

/// Counters for one render call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub samples: u32,
    pub plotted: u32,
    pub occluded: u32,
    pub back_facing: u32,
    pub clipped: u32,
}

impl RenderStats {
    #[inline]
    fn record(&mut self, outcome: PlotOutcome) {
        self.samples += 1;
        match outcome {
            PlotOutcome::Plotted => self.plotted += 1,
            PlotOutcome::Occluded => self.occluded += 1,
            PlotOutcome::BackFacing => self.back_facing += 1,
            PlotOutcome::OutOfBounds => self.clipped += 1,
        }
    }
}

/// Renders the rotating torus into a character [`Frame`].
///
/// Geometry, camera constants and the sampling grid are fixed at
/// construction. Each call takes the rotation angles by value and never
/// keeps anything from a previous frame.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: TorusConfig,
    sampler: SurfaceSampler,
    projection: Projection,
    raster: Rasterizer,
}

impl Renderer {
    /// Validate `config` and derive everything the hot loop needs.
    pub fn new(config: TorusConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let sampler = SurfaceSampler::new(
            config.minor_radius,
            config.major_radius,
            config.theta_step,
            config.phi_step,
        );
        let projection = Projection::new(&config);
        let raster = Rasterizer::new(GlyphRamp::new(&config.glyph_ramp, config.luminance_scale));

        Ok(Self {
            config,
            sampler,
            projection,
            raster,
        })
    }

    pub fn config(&self) -> &TorusConfig {
        &self.config
    }

    pub fn sampler(&self) -> &SurfaceSampler {
        &self.sampler
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn ramp(&self) -> &GlyphRamp {
        self.raster.ramp()
    }

    /// A blank frame of the configured size.
    pub fn new_frame(&self) -> Frame {
        Frame::new(self.config.screen_width, self.config.screen_height)
    }

    /// Render into an existing frame.
    ///
    /// This is the allocation-free hot path: `frame` is resized only if its
    /// dimensions differ from the configuration, and both the characters and
    /// the depth buffer are reset before any sample is plotted.
    pub fn render_into(&mut self, angles: RotationAngles, frame: &mut Frame) -> RenderStats {
        frame.resize(self.config.screen_width, self.config.screen_height);
        self.raster.begin(frame);

        let rot = Rotation::new(angles);
        let mut stats = RenderStats::default();

        for section in self.sampler.cross_sections() {
            for &phi in self.sampler.revolutions() {
                let p = self.projection.project(&rot, section, phi);
                stats.record(self.raster.plot(frame, p));
            }
        }

        stats
    }

    pub fn render(&mut self, angles: RotationAngles) -> Frame {
        let mut frame = self.new_frame();
        self.render_into(angles, &mut frame);
        frame
    }
}
