//! Display surface capability and an in-memory implementation.

use anyhow::{bail, Result};

use crate::fb::Frame;

/// A character-grid display the [`crate::Screen`] can flush into.
///
/// Implementations: [`crate::TerminalSurface`] for a real terminal and
/// [`MemorySurface`] for tests and benches.
pub trait Surface {
    /// Largest `(width, height)` the surface can show.
    fn max_size(&self) -> Result<(u16, u16)>;

    /// Prepare the display for a fixed-size grid and set its title.
    fn configure(&mut self, width: u16, height: u16, title: &str) -> Result<()>;

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()>;

    /// Write the whole frame in one batch.
    fn write_frame(&mut self, frame: &Frame) -> Result<()>;

    /// Blank the display right away, without waiting for a frame.
    fn clear_immediate(&mut self) -> Result<()>;
}

/// Surface that records everything written to it.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    max_width: u16,
    max_height: u16,
    fail_configure: bool,
    title: Option<String>,
    size: Option<(u16, u16)>,
    cursor_visible: bool,
    frames: Vec<Frame>,
    clears: usize,
}

impl MemorySurface {
    pub fn new(max_width: u16, max_height: u16) -> Self {
        Self {
            max_width,
            max_height,
            fail_configure: false,
            title: None,
            size: None,
            cursor_visible: true,
            frames: Vec::new(),
            clears: 0,
        }
    }

    /// Make `configure` fail, to exercise startup errors.
    pub fn with_configure_error(mut self) -> Self {
        self.fail_configure = true;
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Size passed to the last `configure` call.
    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn frames_written(&self) -> usize {
        self.frames.len()
    }

    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Surface for MemorySurface {
    fn max_size(&self) -> Result<(u16, u16)> {
        Ok((self.max_width, self.max_height))
    }

    fn configure(&mut self, width: u16, height: u16, title: &str) -> Result<()> {
        if self.fail_configure {
            bail!("memory surface refused configuration");
        }
        self.size = Some((width, height));
        self.title = Some(title.to_owned());
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.cursor_visible = visible;
        Ok(())
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }

    fn clear_immediate(&mut self) -> Result<()> {
        self.clears += 1;
        Ok(())
    }
}
