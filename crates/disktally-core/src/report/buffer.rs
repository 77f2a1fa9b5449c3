/// In-memory [`Surface`] that records everything painted on it.
///
/// Streamed text is kept as a list of spans; positioned writes land in a
/// row map, last write wins. Used by the test suites and usable for headless
/// rendering.
use super::{Span, Surface};
use crate::model::Color;
use std::collections::BTreeMap;
use std::io;

#[derive(Debug, Clone)]
pub struct BufferSurface {
    width: u16,
    height: u16,
    cursor: (u16, u16),
    spans: Vec<Span>,
    rows: BTreeMap<u16, (Color, String)>,
    clears: usize,
}

impl BufferSurface {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cursor: (0, 0),
            spans: Vec::new(),
            rows: BTreeMap::new(),
            clears: 0,
        }
    }

    /// Start with the cursor at `(x, y)`.
    pub fn with_cursor(mut self, x: u16, y: u16) -> Self {
        self.cursor = (x, y);
        self
    }

    /// Every streamed span, in paint order.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// All streamed text concatenated, colours dropped.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Latest positioned write on row `y`.
    pub fn row(&self, y: u16) -> Option<(Color, &str)> {
        self.rows.get(&y).map(|(c, t)| (*c, t.as_str()))
    }

    /// Number of `clear_screen` calls.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Surface for BufferSurface {
    fn paint(&mut self, color: Color, text: &str) -> io::Result<()> {
        self.spans.push(Span::new(color, text));
        Ok(())
    }

    fn paint_at(&mut self, x: u16, y: u16, color: Color, text: &str) -> io::Result<()> {
        self.rows.insert(y, (color, text.to_string()));
        let advance = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        self.cursor = (x.saturating_add(advance), y);
        Ok(())
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        self.rows.clear();
        self.cursor = (0, 0);
        self.clears += 1;
        Ok(())
    }

    fn size(&mut self) -> io::Result<(u16, u16)> {
        Ok((self.width, self.height))
    }

    fn cursor(&mut self) -> io::Result<(u16, u16)> {
        Ok(self.cursor)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positioned_writes_overwrite_rows() {
        let mut s = BufferSurface::new(20, 5);
        s.paint_at(0, 2, Color::White, "first").unwrap();
        s.paint_at(0, 2, Color::Cyan, "second").unwrap();
        assert_eq!(s.row(2), Some((Color::Cyan, "second")));
        assert_eq!(s.cursor().unwrap(), (6, 2));
        assert!(s.text().is_empty());
    }

    #[test]
    fn clear_resets_rows_and_counts() {
        let mut s = BufferSurface::new(20, 5).with_cursor(3, 4);
        s.paint_at(0, 1, Color::White, "x").unwrap();
        s.clear_screen().unwrap();
        assert_eq!(s.row(1), None);
        assert_eq!(s.cursor().unwrap(), (0, 0));
        assert_eq!(s.clears(), 1);
    }
}
