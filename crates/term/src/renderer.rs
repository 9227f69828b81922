//! TerminalRenderer: flushes a frame to a real terminal.
//!
//! Every frame is a full redraw: cursor home, then each row followed by a
//! newline. The terminal stays in cooked mode so Ctrl-C still terminates the
//! process and leaves the shell usable.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{cursor, style::Print, terminal, QueueableCommand};

use crate::core::Frame;

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Clear the screen once before the first frame.
    pub fn enter(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        self.flush_buf()
    }

    /// Leave the cursor below the last frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print("\n"))?;
        self.flush_buf()
    }

    /// Draw a full frame.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.buf.clear();
        encode_frame_into(frame, &mut self.buf)?;
        self.flush_buf()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Moves the cursor home so consecutive frames overwrite each other instead
/// of scrolling, then writes `height` rows of `width` characters, each
/// terminated by `\n`.
pub fn encode_frame_into(frame: &Frame, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut utf8 = [0u8; 4];
    for row in frame.rows() {
        for &ch in row {
            out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        }
        out.push(b'\n');
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOME: &[u8] = b"\x1b[1;1H";

    #[test]
    fn frame_is_preceded_by_cursor_home() {
        let mut frame = Frame::new(3, 2);
        frame.set(1, 0, '@');

        let mut out = Vec::new();
        encode_frame_into(&frame, &mut out).unwrap();

        assert!(out.starts_with(HOME));
        assert_eq!(&out[HOME.len()..], b" @ \n   \n");
    }

    #[test]
    fn draw_writes_each_frame_in_full() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        let mut frame = Frame::new(2, 1);
        term.draw(&frame).unwrap();
        frame.set(0, 0, '#');
        term.draw(&frame).unwrap();

        let written = term.into_inner();
        let expected: Vec<u8> = [HOME, &b"  \n"[..], HOME, &b"# \n"[..]].concat();
        assert_eq!(written, expected);
    }

    #[test]
    fn enter_clears_screen() {
        let mut term = TerminalRenderer::with_writer(Vec::new());
        term.enter().unwrap();
        let written = String::from_utf8(term.into_inner()).unwrap();
        assert!(written.contains("\x1b[2J"));
        assert!(written.ends_with("\x1b[1;1H"));
    }
}
