//! Terminal output module.
//!
//! The only crate that touches the real terminal. It owns cursor state for
//! the lifetime of a run and turns [`Screen`](crate::core::Screen) grids into
//! ANSI frames. Everything upstream stays pure and testable.

pub mod renderer;

pub use tui_wireframe_core as core;
pub use tui_wireframe_engine as engine;
pub use tui_wireframe_types as types;

pub use renderer::{encode_frame_into, frame_len, TerminalRenderer, CURSOR_HOME};
