//! Frame loop: render, present, advance the rotation, sleep.
//!
//! The loop alternates between two phases. *Idle* clears the grid and homes
//! the cursor (the sink does the latter); *Rendering* rotates, projects and
//! rasterizes the model, hands the grid to the sink and sleeps for the frame
//! delay. There is no shutdown sequence of its own: it runs until the frame
//! limit is hit, the sink fails, or the process is killed.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::core::{Model, Screen};
use crate::pipeline::{FrameStats, Pipeline};
use crate::types::{Angles, RenderConfig};

/// Destination for finished frames.
pub trait FrameSink {
    fn present(&mut self, screen: &Screen) -> Result<()>;
}

/// Collects frames as text; used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub frames: Vec<String>,
}

impl FrameSink for MemorySink {
    fn present(&mut self, screen: &Screen) -> Result<()> {
        self.frames.push(screen.to_text());
        Ok(())
    }
}

/// Rotation accumulators plus their per-frame steps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    angles: Angles,
    step_x: f32,
    step_y: f32,
}

impl Animation {
    pub fn new(step_x: f32, step_y: f32) -> Self {
        Self {
            angles: Angles::default(),
            step_x,
            step_y,
        }
    }

    pub fn angles(&self) -> Angles {
        self.angles
    }

    pub fn advance(&mut self) {
        self.angles = self.angles.advance(self.step_x, self.step_y);
    }
}

/// Owns everything that lives across frames: the grid, the pipeline
/// scratch buffers and the animation state.
#[derive(Debug, Clone)]
pub struct FrameLoop {
    pipeline: Pipeline,
    animation: Animation,
    screen: Screen,
    frame_delay: Duration,
    frames: u64,
}

impl FrameLoop {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            pipeline: Pipeline::new(config),
            animation: Animation::new(config.step_x, config.step_y),
            screen: Screen::new(config.width, config.height),
            frame_delay: Duration::from_millis(config.frame_ms),
            frames: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn angles(&self) -> Angles {
        self.animation.angles()
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render and present one frame, then advance the rotation.
    ///
    /// Does not sleep.
    pub fn step(&mut self, model: &Model, sink: &mut impl FrameSink) -> Result<FrameStats> {
        let stats = self
            .pipeline
            .render_into(model, self.animation.angles(), &mut self.screen);
        sink.present(&self.screen)?;
        self.animation.advance();
        self.frames += 1;
        Ok(stats)
    }

    /// Run until `max_frames` frames have been presented (forever if `None`).
    ///
    /// Returns the number of frames presented by this call.
    pub fn run(
        &mut self,
        model: &Model,
        sink: &mut impl FrameSink,
        max_frames: Option<u64>,
    ) -> Result<u64> {
        info!(
            width = self.screen.width(),
            height = self.screen.height(),
            vertices = model.vertices().len(),
            edges = model.edges().len(),
            frame_ms = self.frame_delay.as_millis() as u64,
            "starting frame loop"
        );

        let mut presented = 0u64;
        while max_frames.map_or(true, |max| presented < max) {
            let stats = self.step(model, sink)?;
            if stats.edges_skipped > 0 {
                debug!(skipped = stats.edges_skipped, "edges without projected vertices");
            }
            presented += 1;

            if !self.frame_delay.is_zero() {
                thread::sleep(self.frame_delay);
            }
        }

        info!(frames = presented, "frame loop finished");
        Ok(presented)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Preset, STEP_X, STEP_Y};

    fn headless(preset: Preset) -> RenderConfig {
        RenderConfig {
            frame_ms: 0,
            ..preset.config()
        }
    }

    #[test]
    fn run_presents_exactly_max_frames() {
        let mut fl = FrameLoop::new(&headless(Preset::Cube));
        let mut sink = MemorySink::default();
        let n = fl.run(&Model::cube(), &mut sink, Some(3)).unwrap();
        assert_eq!(n, 3);
        assert_eq!(sink.frames.len(), 3);
        assert_eq!(fl.frames(), 3);
    }

    #[test]
    fn angles_advance_once_per_frame() {
        let mut fl = FrameLoop::new(&headless(Preset::Cube));
        let mut sink = MemorySink::default();
        fl.run(&Model::cube(), &mut sink, Some(2)).unwrap();
        let a = fl.angles();
        assert!((a.x - 2.0 * STEP_X).abs() < 1e-6);
        assert!((a.y - 2.0 * STEP_Y).abs() < 1e-6);
    }

    #[test]
    fn consecutive_frames_differ_as_the_model_spins() {
        let mut fl = FrameLoop::new(&headless(Preset::Cube));
        let mut sink = MemorySink::default();
        fl.run(&Model::cube(), &mut sink, Some(40)).unwrap();
        assert_ne!(sink.frames.first(), sink.frames.last());
    }

    #[test]
    fn frame_text_matches_screen_dimensions() {
        let cfg = headless(Preset::Cube);
        let mut fl = FrameLoop::new(&cfg);
        let mut sink = MemorySink::default();
        fl.step(&Model::cube(), &mut sink).unwrap();

        let frame = &sink.frames[0];
        assert_eq!(frame.lines().count(), cfg.height as usize);
        assert!(frame.lines().all(|l| l.chars().count() == cfg.width as usize));
    }

    struct FailingSink;

    impl FrameSink for FailingSink {
        fn present(&mut self, _screen: &Screen) -> Result<()> {
            anyhow::bail!("sink closed")
        }
    }

    #[test]
    fn sink_error_stops_the_loop() {
        let mut fl = FrameLoop::new(&headless(Preset::Cube));
        let err = fl.run(&Model::cube(), &mut FailingSink, None).unwrap_err();
        assert!(err.to_string().contains("sink closed"));
        assert_eq!(fl.frames(), 0);
    }
}
