//! Terminal output for the torus renderer.
//!
//! The core crate produces a [`Frame`](crate::core::Frame); this crate puts
//! it on screen and keeps the driver loop at a steady frame rate.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Full redraws from the cursor home position, no scrolling
//! - Frame pacing that never sleeps a negative amount

pub mod pacer;
pub mod renderer;

pub use ascii_torus_core as core;
pub use ascii_torus_types as types;

pub use pacer::FramePacer;
pub use renderer::{encode_frame_into, TerminalRenderer};
