//! Ray-traced ASCII still of three spheres.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tui_wireframe::cli::RaytraceArgs;
use tui_wireframe::core::{Scene, Screen};
use tui_wireframe::logging;

fn main() -> Result<()> {
    let args = RaytraceArgs::parse();
    logging::init()?;

    let scene = Scene::default();
    let mut screen = Screen::new(args.width, args.height);
    scene.render_into(&mut screen);
    info!(width = args.width, height = args.height, spheres = scene.spheres.len(), "traced scene");

    let mut stdout = io::stdout().lock();
    stdout.write_all(screen.to_text().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
