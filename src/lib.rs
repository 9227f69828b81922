//! ASCII torus (workspace facade crate).
//!
//! Re-exports `ascii_torus::{core,term,types}` so the binary, integration
//! tests and benches share one import path while the implementation lives in
//! dedicated crates under `crates/`. The driver loop lives here so it can be
//! run against an in-memory terminal.

pub mod driver;

pub use ascii_torus_core as core;
pub use ascii_torus_term as term;
pub use ascii_torus_types as types;
