//! Spinning ASCII wireframe (default binary).
//!
//! Loads an OBJ file given on the command line (or uses the built-in cube),
//! then streams frames to stdout until killed or `--frames` is reached.

use anyhow::Result;
use clap::Parser;

use tui_wireframe::cli::{resolve_config, Args};
use tui_wireframe::core::{load_or_default, Model};
use tui_wireframe::engine::FrameLoop;
use tui_wireframe::logging;
use tui_wireframe::term::TerminalRenderer;
use tui_wireframe::types::RenderConfig;

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init()?;

    let config = resolve_config(&args)?;
    let model = load_or_default(args.path.as_deref());

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &model, &config, args.frames);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    model: &Model,
    config: &RenderConfig,
    frames: Option<u64>,
) -> Result<()> {
    let mut frame_loop = FrameLoop::new(config);
    frame_loop.run(model, term, frames)?;
    Ok(())
}
