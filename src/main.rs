//! Rotating torus runner (default binary).
//!
//! Clears the terminal once, then renders, draws, advances the rotation and
//! sleeps off the rest of the frame interval, forever (or until
//! `TORUS_MAX_FRAMES` frames have been drawn).

use std::env;
use std::process;

use anyhow::{Context, Result};

use ascii_torus::core::{Renderer, TorusConfig};
use ascii_torus::driver::{log_filter, run};
use ascii_torus::term::TerminalRenderer;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|arg| arg == "--verbose" || arg == "-v");
    let debug = args.iter().any(|arg| arg == "--debug");
    let version = args.iter().any(|arg| arg == "--version" || arg == "-V");

    if version {
        println!("ascii-torus {}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    let log_level = if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    // Frames go to stdout; logs go to stderr so they can be redirected.
    let rust_log = env::var("RUST_LOG").ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(log_level, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = TorusConfig::from_env();
    tracing::debug!(?config, "loaded configuration");

    let renderer = Renderer::new(config).context("invalid torus configuration")?;
    tracing::info!(
        width = renderer.config().screen_width,
        height = renderer.config().screen_height,
        samples = renderer.sampler().sample_count(),
        focal_length = renderer.projection().focal_length(),
        "starting ascii-torus {}",
        env!("CARGO_PKG_VERSION")
    );

    if let Ok((cols, rows)) = crossterm::terminal::size() {
        let config = renderer.config();
        if cols < config.screen_width || rows < config.screen_height {
            tracing::warn!(
                cols,
                rows,
                "terminal is smaller than the {}x{} frame; output will wrap",
                config.screen_width,
                config.screen_height
            );
        }
    }

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to clear terminal")?;

    let result = run(renderer, &mut term);

    // Always try to leave the cursor below the frame.
    let _ = term.exit();
    result.map(|_| ())
}
