//! TerminalSurface: flushes frames to a real terminal through crossterm.
//!
//! Every frame is encoded into a reusable byte buffer and written with a
//! single `write_all`, so the terminal never shows a half-drawn board.

use std::io::{self, Write};

use anyhow::{Context, Result};
use log::debug;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::attr::{Attr, Layer, LayerBits};
use crate::fb::Frame;
use crate::surface::Surface;

pub struct TerminalSurface {
    stdout: io::Stdout,
    buf: Vec<u8>,
    configured: bool,
}

impl TerminalSurface {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(64 * 1024),
            configured: false,
        }
    }

    /// Undo `configure`: leave the alternate screen, show the cursor and
    /// disable raw mode. Safe to call more than once.
    pub fn restore(&mut self) -> Result<()> {
        if !self.configured {
            return Ok(());
        }
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        self.configured = false;
        debug!("terminal restored");
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.restore();
    }
}

impl Surface for TerminalSurface {
    fn max_size(&self) -> Result<(u16, u16)> {
        terminal::size().context("failed to query terminal size")
    }

    fn configure(&mut self, width: u16, height: u16, title: &str) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.configured = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.buf.queue(terminal::SetTitle(title))?;
        self.buf.queue(terminal::SetSize(width, height))?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.flush_buf().context("failed to configure terminal")?;
        debug!("terminal configured to {width}x{height}, title {title:?}");
        Ok(())
    }

    fn set_cursor_visible(&mut self, visible: bool) -> Result<()> {
        self.buf.clear();
        if visible {
            self.buf.queue(cursor::Show)?;
        } else {
            self.buf.queue(cursor::Hide)?;
        }
        self.flush_buf()
    }

    fn write_frame(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    fn clear_immediate(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
/// Rows are addressed with explicit cursor moves since raw mode does not
/// translate line feeds.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<Attr> = None;
    for y in 0..frame.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for cell in frame.row(y) {
            if current != Some(cell.attr) {
                apply_attr_into(out, cell.attr)?;
                current = Some(cell.attr);
            }
            let ch = if cell.ch.is_control() { ' ' } else { cell.ch };
            out.queue(Print(ch))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_attr_into(out: &mut Vec<u8>, attr: Attr) -> Result<()> {
    let (fg, bg) = attr_to_colors(attr);
    out.queue(SetForegroundColor(fg))?;
    out.queue(SetBackgroundColor(bg))?;
    Ok(())
}

/// Map a packed attribute to the 16 ANSI colours, one per layer.
pub fn attr_to_colors(attr: Attr) -> (Color, Color) {
    (
        layer_to_color(attr.layer(Layer::Foreground)),
        layer_to_color(attr.layer(Layer::Background)),
    )
}

fn layer_to_color(bits: LayerBits) -> Color {
    let LayerBits {
        red,
        green,
        blue,
        intense,
    } = bits;
    match (red, green, blue, intense) {
        (false, false, false, false) => Color::Black,
        (true, false, false, false) => Color::DarkRed,
        (false, true, false, false) => Color::DarkGreen,
        (true, true, false, false) => Color::DarkYellow,
        (false, false, true, false) => Color::DarkBlue,
        (true, false, true, false) => Color::DarkMagenta,
        (false, true, true, false) => Color::DarkCyan,
        (true, true, true, false) => Color::Grey,
        (false, false, false, true) => Color::DarkGrey,
        (true, false, false, true) => Color::Red,
        (false, true, false, true) => Color::Green,
        (true, true, false, true) => Color::Yellow,
        (false, false, true, true) => Color::Blue,
        (true, false, true, true) => Color::Magenta,
        (false, true, true, true) => Color::Cyan,
        (true, true, true, true) => Color::White,
    }
}
