//! Frame loop module (engine-facing).
//!
//! Strings the core stages together for animation: a [`Pipeline`] renders one
//! frame into a reused [`Screen`](crate::core::Screen), and a [`FrameLoop`]
//! repeats that while advancing the rotation and handing frames to a
//! [`FrameSink`]. The terminal crate provides the real sink; [`MemorySink`]
//! keeps frames in memory for tests.

pub mod frame_loop;
pub mod pipeline;

pub use tui_wireframe_core as core;
pub use tui_wireframe_types as types;

pub use frame_loop::{Animation, FrameLoop, FrameSink, MemorySink};
pub use pipeline::{FrameStats, Pipeline};
