/// Pure line builders for every report section.
///
/// Each builder returns coloured [`Span`]s with fixed-width columns already
/// applied; nothing here touches a surface. The column widths are those of
/// a classic 120-column console.
use super::Span;
use crate::model::size::{format_bytes, format_count, format_short};
use crate::model::{kind_style, size_color, Color, FileKind, FileRecord};
use crate::scanner::ScanSummary;
use crate::stats::Stats;
use std::path::Path;

/// Characters per indentation level in the walk trace.
pub const TAB_SIZE: usize = 3;

/// Width of the label (ext / kind) column in the tables.
const LABEL_WIDTH: usize = 26;
const COUNT_WIDTH: usize = 8;
const EXACT_WIDTH: usize = 18;
const SHORT_WIDTH: usize = 16;

/// Placeholder shown in the size columns of a directory trace line.
const DIR_MARKER: &str = "<DIR>";

/// A per-row quantity shown as an exact/short column pair in the tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Metric {
    Size,
    AverageSize,
    SizeOnDisk,
}

impl Metric {
    /// Column order in the tables.
    pub const ALL: [Metric; 3] = [Self::Size, Self::AverageSize, Self::SizeOnDisk];

    /// Headers for the exact and the short column.
    pub fn headers(self) -> (&'static str, &'static str) {
        match self {
            Self::Size => ("bytes", "size"),
            Self::AverageSize => ("avg bytes", "avg size"),
            Self::SizeOnDisk => ("bytes on disk", "size on disk"),
        }
    }

    /// Value of this metric for a bucket. An empty bucket averages to 0;
    /// the store never hands one out.
    pub fn value(self, stats: &Stats) -> u64 {
        match self {
            Self::Size => stats.total_logical_size,
            Self::AverageSize => stats.average_logical_size().unwrap_or(0),
            Self::SizeOnDisk => stats.total_on_disk_size,
        }
    }
}

// ── Walk trace ───────────────────────────────────────────────────────────────

/// Indentation for an entry at `depth`: `TAB_SIZE` spaces per level with a
/// `|` marking the start of the innermost level.
pub fn indent(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    let mut s = " ".repeat(TAB_SIZE * (depth - 1));
    s.push('|');
    s.push_str(&" ".repeat(TAB_SIZE - 1));
    s
}

/// One line of the walk trace: short size, exact size, indent, name.
pub fn trace_line(record: &FileRecord) -> Vec<Span> {
    let (short, exact, color) = if record.is_dir() {
        (String::new(), DIR_MARKER.to_string(), Color::Gray)
    } else {
        (
            format_short(record.logical_size),
            format_bytes(record.logical_size),
            size_color(record.logical_size),
        )
    };
    let style = kind_style(record.kind);
    vec![
        Span::new(color, format!("{short:>12} {exact:>25}")),
        Span::new(color, " ".repeat(TAB_SIZE)),
        Span::new(Color::Gray, indent(record.depth)),
        Span::new(style.color, record.name()),
    ]
}

/// A per-entry failure, shown inline in the error colour.
pub fn error_line(message: &str) -> Vec<Span> {
    vec![Span::new(Color::Red, format!("ERROR: {message}"))]
}

// ── Summary panel ────────────────────────────────────────────────────────────

/// Rows of the live summary panel, top to bottom.
pub fn panel_lines(current: &Path, total: &Stats) -> [Span; 4] {
    [
        Span::new(Color::White, format!("file: {}", current.display())),
        Span::new(Color::White, format!("count: {}", total.count)),
        Span::new(
            Color::White,
            format!(
                "logical size: {} ({})",
                format_short(total.total_logical_size),
                format_bytes(total.total_logical_size)
            ),
        ),
        Span::new(
            Color::Cyan,
            format!(
                "size on disk: {} ({})",
                format_short(total.total_on_disk_size),
                format_bytes(total.total_on_disk_size)
            ),
        ),
    ]
}

/// Truncate or pad `text` so it exactly fills `width` characters.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

// ── Tables ───────────────────────────────────────────────────────────────────

/// Header row shared by the kind and extension tables.
pub fn table_header(label: &str) -> String {
    let mut header = format!(
        "  {label:<lw$} {:>cw$}",
        "count",
        lw = LABEL_WIDTH,
        cw = COUNT_WIDTH
    );
    for metric in Metric::ALL {
        let (exact, short) = metric.headers();
        header.push_str(&format!(
            " {exact:>ew$} {short:>sw$}",
            ew = EXACT_WIDTH,
            sw = SHORT_WIDTH
        ));
    }
    header
}

/// Horizontal rule as wide as `header`.
pub fn rule(header: &str) -> String {
    "-".repeat(header.chars().count())
}

/// One table row: label and count, then an exact (gray) and a short
/// (size-coloured) column for each metric.
pub fn table_row(label: &str, label_color: Color, stats: &Stats) -> Vec<Span> {
    let mut spans = Vec::with_capacity(1 + 2 * Metric::ALL.len());
    spans.push(Span::new(
        label_color,
        format!(
            "  {label:<lw$} {:>cw$}",
            stats.count,
            lw = LABEL_WIDTH,
            cw = COUNT_WIDTH
        ),
    ));
    for metric in Metric::ALL {
        let value = metric.value(stats);
        spans.push(Span::new(
            Color::Gray,
            format!(" {:>w$}", format_bytes(value), w = EXACT_WIDTH),
        ));
        spans.push(Span::new(
            size_color(value),
            format!(" {:>w$}", format_short(value), w = SHORT_WIDTH),
        ));
    }
    spans
}

/// Extension table row. The label is the extension exactly as seen.
pub fn extension_row(ext: &str, stats: &Stats) -> Vec<Span> {
    table_row(ext, Color::White, stats)
}

/// Kind table row, labelled in the kind's delimiters and colour.
pub fn kind_row(kind: FileKind, stats: &Stats) -> Vec<Span> {
    let style = kind_style(kind);
    table_row(&style.wrap(kind.label()), style.color, stats)
}

// ── Largest files ────────────────────────────────────────────────────────────

pub fn top_header(k: usize) -> String {
    format!("Top {k} files:")
}

/// One row of the largest-files listing: exact size, short size, path.
pub fn top_row(record: &FileRecord) -> Vec<Span> {
    let size = record.logical_size;
    vec![
        Span::new(Color::Gray, format!("  {:>16}", format_bytes(size))),
        Span::new(size_color(size), format!(" {:>16}     ", format_short(size))),
        Span::new(Color::White, record.path.display().to_string()),
    ]
}

// ── Footer ───────────────────────────────────────────────────────────────────

pub fn footer_line(summary: &ScanSummary) -> Vec<Span> {
    let error_color = if summary.errors > 0 {
        Color::Red
    } else {
        Color::Gray
    };
    vec![
        Span::new(
            Color::Gray,
            format!(
                "{} files, {} directories scanned in {:.2?}, ",
                format_count(summary.files),
                format_count(summary.dirs),
                summary.duration
            ),
        ),
        Span::new(
            error_color,
            format!("{} unreadable", format_count(summary.errors)),
        ),
    ]
}
