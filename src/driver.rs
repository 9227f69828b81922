//! Animation loop and log filter setup shared by the binary and its tests.

use std::io::Write;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::core::Renderer;
use crate::term::{FramePacer, TerminalRenderer};
use crate::types::{RotationAngles, ANGLE_STEP_A, ANGLE_STEP_B};

/// Where a run ended up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub overruns: u64,
    /// Angles the next frame would have used.
    pub angles: RotationAngles,
}

/// Build the log filter.
///
/// `level` (from `--verbose`/`--debug`) is only the default: any directive in
/// `rust_log`, including a bare level such as `trace`, takes precedence.
pub fn log_filter(level: tracing::Level, rust_log: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Render, draw, advance and pace until `max_frames` is reached, or forever.
pub fn run<W: Write>(
    mut renderer: Renderer,
    term: &mut TerminalRenderer<W>,
) -> Result<RunSummary> {
    let speed = renderer.config().speed;
    let max_frames = renderer.config().max_frames;
    let mut pacer = FramePacer::new(renderer.config().frame_interval);
    let mut frame = renderer.new_frame();
    let mut angles = RotationAngles::default();

    loop {
        let frame_start = Instant::now();

        let stats = renderer.render_into(angles, &mut frame);
        term.draw(&frame).context("failed to draw frame")?;
        tracing::trace!(?angles, ?stats, "frame rendered");

        angles.advance(ANGLE_STEP_A * speed, ANGLE_STEP_B * speed);
        pacer.pace(frame_start);

        if max_frames.is_some_and(|max| pacer.frames() >= max) {
            break;
        }
    }

    tracing::info!(
        frames = pacer.frames(),
        overruns = pacer.overruns(),
        "stopped after frame limit"
    );
    Ok(RunSummary {
        frames: pacer.frames(),
        overruns: pacer.overruns(),
        angles,
    })
}
