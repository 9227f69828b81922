//! Depth-buffered rasterizer.
//!
//! Samples arrive in any order. A sample wins a cell only if its reciprocal
//! depth is strictly greater than anything already written there. On an exact
//! depth tie the brighter sample wins, so each cell ends up holding the
//! maximum of `(depth, luminance)` and the frame does not depend on arrival
//! order.

use crate::frame::Frame;
use crate::glyph::GlyphRamp;
use crate::projector::Projected;

/// What happened to one projected sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotOutcome {
    /// Won the depth test and wrote a glyph.
    Plotted,
    /// Something closer already owns the cell.
    Occluded,
    /// Illumination `<= 0`: the surface faces away from the light.
    BackFacing,
    /// Outside the drawable area.
    OutOfBounds,
}

/// Per-cell reciprocal depth. Zero means nothing plotted yet.
///
/// The winning luminance is kept alongside to break exact depth ties.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthBuffer {
    width: u16,
    height: u16,
    ooz: Vec<f32>,
    luminance: Vec<f32>,
}

impl DepthBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            ooz: vec![0.0; len],
            luminance: vec![0.0; len],
        }
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.ooz.resize(len, 0.0);
        self.luminance.resize(len, 0.0);
    }

    /// Back to "infinitely far" everywhere.
    pub fn reset(&mut self) {
        self.ooz.fill(0.0);
        self.luminance.fill(0.0);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.ooz[(y as usize) * (self.width as usize) + (x as usize)])
    }
}

/// Resolves overlapping samples and writes glyphs into a [`Frame`].
#[derive(Debug, Clone)]
pub struct Rasterizer {
    ramp: GlyphRamp,
    depth: DepthBuffer,
}

impl Rasterizer {
    pub fn new(ramp: GlyphRamp) -> Self {
        Self {
            ramp,
            depth: DepthBuffer::new(0, 0),
        }
    }

    pub fn ramp(&self) -> &GlyphRamp {
        &self.ramp
    }

    pub fn depth(&self) -> &DepthBuffer {
        &self.depth
    }

    /// Start a new frame: blank the characters and forget all depths.
    ///
    /// Must run before the first `plot` of every frame, otherwise glyphs and
    /// depths from the previous frame leak into this one.
    pub fn begin(&mut self, frame: &mut Frame) {
        self.depth.resize(frame.width(), frame.height());
        self.depth.reset();
        frame.clear();
    }

    /// Depth-test one sample and write its glyph if it is the closest so far,
    /// or ties the closest and is brighter.
    ///
    /// Row 0 and column 0 are never drawn; only `1..width` and `1..height`
    /// are accepted.
    #[inline]
    pub fn plot(&mut self, frame: &mut Frame, p: Projected) -> PlotOutcome {
        if !(p.luminance > 0.0) {
            return PlotOutcome::BackFacing;
        }
        if p.x <= 0
            || p.y <= 0
            || p.x >= i32::from(frame.width())
            || p.y >= i32::from(frame.height())
        {
            return PlotOutcome::OutOfBounds;
        }

        let (x, y) = (p.x as u16, p.y as u16);
        let Some(i) = frame.idx(x, y) else {
            return PlotOutcome::OutOfBounds;
        };

        let stored = self.depth.ooz[i];
        let closer = p.ooz > stored;
        let brighter_tie = p.ooz == stored && p.luminance > self.depth.luminance[i];
        if closer || brighter_tie {
            self.depth.ooz[i] = p.ooz;
            self.depth.luminance[i] = p.luminance;
            frame.set(x, y, self.ramp.glyph(p.luminance));
            PlotOutcome::Plotted
        } else {
            PlotOutcome::Occluded
        }
    }
}
