//! TerminalRenderer: flushes a character grid to a real terminal.
//!
//! Frames are written as a cursor-home escape followed by every row and a
//! newline, in a single write per frame. Terminal state (cursor visibility)
//! is acquired in [`TerminalRenderer::enter`] and released in
//! [`TerminalRenderer::exit`], or on drop if the caller never got that far.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, terminal, QueueableCommand};

use crate::core::Screen;
use crate::engine::FrameSink;

/// ANSI cursor-home escape written before every frame.
pub const CURSOR_HOME: &str = "\x1b[H";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
    entered: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            entered: false,
        }
    }

    /// Hide the cursor and clear the screen.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf()?;
        self.entered = true;
        Ok(())
    }

    /// Show the cursor again.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(cursor::Show)?;
        self.flush_buf()?;
        self.entered = false;
        Ok(())
    }

    /// Write one full frame.
    pub fn draw(&mut self, screen: &Screen) -> Result<()> {
        self.buf.clear();
        encode_frame_into(screen, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl FrameSink for TerminalRenderer {
    fn present(&mut self, screen: &Screen) -> Result<()> {
        self.draw(screen)
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        if self.entered {
            let _ = self.exit();
        }
    }
}

/// Bytes needed for one encoded frame of ASCII cells.
pub fn frame_len(screen: &Screen) -> usize {
    CURSOR_HOME.len() + (screen.width() as usize + 1) * screen.height() as usize
}

/// Encode a full frame into `out`: cursor home, then each row plus `\n`.
///
/// This appends to `out` without writing to stdout.
pub fn encode_frame_into(screen: &Screen, out: &mut Vec<u8>) -> Result<()> {
    out.reserve(frame_len(screen));
    out.extend_from_slice(CURSOR_HOME.as_bytes());

    let mut utf8 = [0u8; 4];
    for row in screen.rows() {
        for &ch in row {
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
        out.push(b'\n');
    }
    Ok(())
}
