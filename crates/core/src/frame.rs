//! Character grid produced by one render call.

use std::fmt;

use crate::types::BLANK;

/// 2D grid of characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize the frame.
    ///
    /// This preserves the underlying allocation when possible. Contents are
    /// unspecified afterwards; callers clear before drawing.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, BLANK);
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    pub(crate) fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// Reset every cell to the blank character.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Rows from top to bottom, each exactly `width` characters.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        // chunks_exact panics on 0, and a zero-width frame has no cells anyway.
        self.cells.chunks_exact(usize::from(self.width.max(1)))
    }

    /// Rows as owned strings.
    pub fn lines(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().collect()).collect()
    }

    pub fn is_blank(&self, x: u16, y: u16) -> bool {
        self.get(x, y).map_or(true, |ch| ch == BLANK)
    }

    /// Coordinates of every non-blank cell, row-major.
    pub fn occupied(&self) -> impl Iterator<Item = (u16, u16)> + '_ {
        let w = self.width.max(1) as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &ch)| ch != BLANK)
            .map(move |(i, _)| ((i % w) as u16, (i / w) as u16))
    }
}

impl fmt::Display for Frame {
    /// Row-major with a `\n` after every row.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &ch in row {
                fmt::Write::write_char(f, ch)?;
            }
            fmt::Write::write_char(f, '\n')?;
        }
        Ok(())
    }
}
