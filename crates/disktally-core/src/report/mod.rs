/// Report rendering.
///
/// The [`Reporter`] turns the accumulator, the top-K selection and walk
/// events into coloured text. It never opens a console itself: all output
/// goes through a [`Surface`] owned by the caller, which keeps the engine
/// testable against [`BufferSurface`].
///
/// # Modules
///
/// - [`layout`]: pure, fixed-width line builders.
/// - [`buffer`]: in-memory surface for tests and headless use.
pub mod buffer;
pub mod layout;

pub use buffer::BufferSurface;
pub use layout::Metric;

use crate::model::{Color, FileKind, FileRecord};
use crate::scanner::ScanSummary;
use crate::stats::{Snapshot, Stats};
use std::io;
use std::path::Path;

/// A run of text in one colour.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub color: Color,
    pub text: String,
}

impl Span {
    pub fn new(color: Color, text: impl Into<String>) -> Self {
        Self {
            color,
            text: text.into(),
        }
    }
}

/// Coloured text output with an addressable cursor.
pub trait Surface {
    /// Write `text` at the current cursor position and advance it.
    fn paint(&mut self, color: Color, text: &str) -> io::Result<()>;

    /// Write `text` starting at column `x` of row `y`, leaving the cursor
    /// after it.
    fn paint_at(&mut self, x: u16, y: u16, color: Color, text: &str) -> io::Result<()>;

    /// Blank the visible screen and home the cursor.
    fn clear_screen(&mut self) -> io::Result<()>;

    /// `(columns, rows)` of the visible area.
    fn size(&mut self) -> io::Result<(u16, u16)>;

    /// `(column, row)` of the cursor.
    fn cursor(&mut self) -> io::Result<(u16, u16)>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Rows used by the live summary panel: four totals plus a last-error row.
pub const PANEL_ROWS: u16 = 5;

/// Renders every report section onto a borrowed [`Surface`].
pub struct Reporter<'s, S: Surface + ?Sized> {
    surface: &'s mut S,
    /// Top row of the live summary panel, fixed by [`Reporter::anchor_panel`].
    panel_row: Option<u16>,
}

impl<'s, S: Surface + ?Sized> Reporter<'s, S> {
    pub fn new(surface: &'s mut S) -> Self {
        Self {
            surface,
            panel_row: None,
        }
    }

    /// Paint `spans` followed by a newline.
    pub fn paint_line(&mut self, spans: &[Span]) -> io::Result<()> {
        for span in spans {
            self.surface.paint(span.color, &span.text)?;
        }
        let last = spans.last().map_or(Color::White, |s| s.color);
        self.surface.paint(last, "\n")
    }

    fn paint_text_line(&mut self, color: Color, text: &str) -> io::Result<()> {
        self.paint_line(&[Span::new(color, text)])
    }

    // ── Live output ──────────────────────────────────────────────────────

    /// One line of the walk trace.
    pub fn trace_entry(&mut self, record: &FileRecord) -> io::Result<()> {
        self.paint_line(&layout::trace_line(record))
    }

    /// A per-entry failure, inline in the trace.
    pub fn trace_error(&mut self, message: &str) -> io::Result<()> {
        self.paint_line(&layout::error_line(message))
    }

    /// Fix the panel's top row at the current cursor row, scrolling first if
    /// the panel would not fit below it.
    pub fn anchor_panel(&mut self) -> io::Result<u16> {
        let (_, height) = self.surface.size()?;
        let (_, row) = self.surface.cursor()?;
        let row = if row.saturating_add(PANEL_ROWS) > height {
            for _ in 0..PANEL_ROWS {
                self.surface.paint(Color::White, "\n")?;
            }
            height.saturating_sub(PANEL_ROWS)
        } else {
            row
        };
        self.panel_row = Some(row);
        Ok(row)
    }

    /// Redraw the four totals rows of the summary panel in place.
    pub fn summary_panel(&mut self, current: &Path, total: &Stats) -> io::Result<()> {
        let top = self.panel_top()?;
        let width = self.line_width()?;
        for (offset, span) in (0u16..).zip(layout::panel_lines(current, total)) {
            let line = layout::fit_to_width(&span.text, width);
            self.surface.paint_at(0, top + offset, span.color, &line)?;
        }
        self.surface.flush()
    }

    /// Show a per-entry failure on the panel's last row.
    pub fn panel_error(&mut self, message: &str) -> io::Result<()> {
        let top = self.panel_top()?;
        let width = self.line_width()?;
        let line = layout::fit_to_width(&format!("ERROR: {message}"), width);
        self.surface
            .paint_at(0, top + PANEL_ROWS - 1, Color::Red, &line)?;
        self.surface.flush()
    }

    fn panel_top(&mut self) -> io::Result<u16> {
        match self.panel_row {
            Some(row) => Ok(row),
            None => self.anchor_panel(),
        }
    }

    /// Usable line width: one short of the terminal so lines never wrap.
    fn line_width(&mut self) -> io::Result<usize> {
        let (columns, _) = self.surface.size()?;
        Ok(usize::from(columns.saturating_sub(1)))
    }

    // ── Final report ─────────────────────────────────────────────────────

    /// Clear the live output before printing the final tables.
    pub fn begin_report(&mut self) -> io::Result<()> {
        self.surface.clear_screen()?;
        self.panel_row = None;
        Ok(())
    }

    /// Totals per entry kind.
    pub fn kind_table(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let rows: Vec<(FileKind, &Stats)> = snapshot.by_kind();
        let header = layout::table_header("kind");
        self.paint_text_line(Color::White, "")?;
        self.paint_text_line(Color::White, &header)?;
        self.paint_text_line(Color::Gray, &layout::rule(&header))?;
        for (kind, stats) in rows {
            self.paint_line(&layout::kind_row(kind, stats))?;
        }
        Ok(())
    }

    /// Totals per extension, largest total first.
    pub fn extension_table(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        let header = layout::table_header("ext");
        self.paint_text_line(Color::White, "")?;
        self.paint_text_line(Color::White, &header)?;
        self.paint_text_line(Color::Gray, &layout::rule(&header))?;
        for (ext, stats) in snapshot.by_extension() {
            self.paint_line(&layout::extension_row(ext, stats))?;
        }
        Ok(())
    }

    /// The largest-files listing. `k` is the configured count, shown in the
    /// header even when fewer files were found.
    pub fn top_files(&mut self, k: usize, files: &[FileRecord]) -> io::Result<()> {
        let rule = layout::rule(&layout::table_header("ext"));
        self.paint_text_line(Color::White, "\n")?;
        self.paint_text_line(Color::White, &layout::top_header(k))?;
        self.paint_text_line(Color::Gray, &rule)?;
        for file in files {
            self.paint_line(&layout::top_row(file))?;
        }
        Ok(())
    }

    /// Closing counts for the run.
    pub fn footer(&mut self, summary: &ScanSummary) -> io::Result<()> {
        self.paint_text_line(Color::White, "")?;
        self.paint_line(&layout::footer_line(summary))?;
        self.surface.flush()
    }
}
