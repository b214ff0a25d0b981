//! TUI Wireframe (workspace facade crate).
//!
//! Exposes `tui_wireframe::{core,engine,term,types}` while the implementation
//! lives in dedicated crates under `crates/`. The command-line and logging
//! setup shared by both binaries lives here as well.

pub mod cli;
pub mod logging;

pub use tui_wireframe_core as core;
pub use tui_wireframe_engine as engine;
pub use tui_wireframe_term as term;
pub use tui_wireframe_types as types;
