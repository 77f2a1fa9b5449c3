/// Display colours and the two lookup tables that pick them:
/// size → colour (threshold ladder) and kind → style.
///
/// Everything here is a compile-time table. The rest of the crate refers to
/// colours by name, never by raw console attribute value.
use super::file_record::FileKind;
use super::size::{GB, KB, MB};

/// One of the 16 classic console colours.
///
/// Discriminants are the console attribute indices (0..=15), dark shades
/// first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Navy = 1,
    Forest = 2,
    Teal = 3,
    Maroon = 4,
    Purple = 5,
    Ochre = 6,
    Silver = 7,
    Gray = 8,
    Blue = 9,
    Green = 10,
    Cyan = 11,
    Red = 12,
    Magenta = 13,
    Yellow = 14,
    White = 15,
}

impl Color {
    /// All colours in index order.
    pub const ALL: [Color; 16] = [
        Self::Black,
        Self::Navy,
        Self::Forest,
        Self::Teal,
        Self::Maroon,
        Self::Purple,
        Self::Ochre,
        Self::Silver,
        Self::Gray,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Magenta,
        Self::Yellow,
        Self::White,
    ];

    /// Console attribute index, always within `0..=15`.
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }
}

/// A `(colour, exclusive upper bound)` step in a size ladder.
pub type Threshold = (Color, u64);

/// Default size ladder, ascending by bound.
pub const SIZE_THRESHOLDS: [Threshold; 6] = [
    (Color::Teal, KB),
    (Color::Forest, MB),
    (Color::Ochre, 10 * MB),
    (Color::Yellow, 50 * MB),
    (Color::Maroon, 100 * MB),
    (Color::Red, GB),
];

/// Colour for anything at or above the last bound.
pub const SIZE_FALLBACK: Color = Color::Magenta;

/// Pick the colour of the first threshold whose bound strictly exceeds
/// `bytes`, or `fallback` when none does.
///
/// `thresholds` must be sorted ascending by bound.
pub fn classify(bytes: u64, thresholds: &[Threshold], fallback: Color) -> Color {
    debug_assert!(
        thresholds.windows(2).all(|w| w[0].1 <= w[1].1),
        "size thresholds must be ascending"
    );
    thresholds
        .iter()
        .find(|&&(_, bound)| bytes < bound)
        .map(|&(color, _)| color)
        .unwrap_or(fallback)
}

/// [`classify`] against the default ladder.
#[inline]
pub fn size_color(bytes: u64) -> Color {
    classify(bytes, &SIZE_THRESHOLDS, SIZE_FALLBACK)
}

/// How an entry kind is drawn: delimiters around the name and its colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindStyle {
    pub prefix: &'static str,
    pub suffix: &'static str,
    pub color: Color,
}

impl KindStyle {
    const fn new(prefix: &'static str, suffix: &'static str, color: Color) -> Self {
        Self {
            prefix,
            suffix,
            color,
        }
    }

    /// `text` wrapped in this style's delimiters.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.prefix, text, self.suffix)
    }
}

/// Style table for entry kinds.
pub fn kind_style(kind: FileKind) -> KindStyle {
    match kind {
        FileKind::None => KindStyle::new("?", "?", Color::Silver),
        FileKind::NotFound => KindStyle::new("?", "?", Color::Red),
        FileKind::Regular => KindStyle::new("", "", Color::White),
        FileKind::Directory => KindStyle::new("<", ">", Color::Cyan),
        FileKind::Symlink => KindStyle::new("?", "?", Color::Yellow),
        FileKind::BlockDevice => KindStyle::new("?", "?", Color::Magenta),
        FileKind::CharDevice => KindStyle::new("?", "?", Color::Gray),
        FileKind::Fifo => KindStyle::new("?", "?", Color::Forest),
        FileKind::Socket => KindStyle::new("?", "?", Color::Teal),
        FileKind::Unknown => KindStyle::new("?", "?", Color::Forest),
        FileKind::Junction => KindStyle::new("?", "?", Color::Silver),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_boundaries() {
        assert_eq!(size_color(0), Color::Teal);
        assert_eq!(size_color(1023), Color::Teal);
        assert_eq!(size_color(1024), Color::Forest);
        assert_eq!(size_color(MB - 1), Color::Forest);
        assert_eq!(size_color(MB), Color::Ochre);
        assert_eq!(size_color(10 * MB), Color::Yellow);
        assert_eq!(size_color(50 * MB), Color::Maroon);
        assert_eq!(size_color(100 * MB), Color::Red);
        assert_eq!(size_color(GB - 1), Color::Red);
        assert_eq!(size_color(GB), Color::Magenta);
    }

    /// Values past every bound fall through to the catch-all.
    #[test]
    fn classify_falls_through_to_fallback() {
        assert_eq!(size_color(1_000_000_000_000), Color::Magenta);
        assert_eq!(size_color(u64::MAX), Color::Magenta);
    }

    #[test]
    fn classify_custom_table() {
        let table = [(Color::Green, 10), (Color::Red, 20)];
        assert_eq!(classify(9, &table, Color::White), Color::Green);
        assert_eq!(classify(10, &table, Color::White), Color::Red);
        assert_eq!(classify(20, &table, Color::White), Color::White);
        assert_eq!(classify(5, &[], Color::Blue), Color::Blue);
    }

    #[test]
    fn color_index_matches_table_position() {
        for (i, c) in Color::ALL.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
        }
        assert_eq!(Color::White.index(), 15);
    }

    #[test]
    fn directories_are_bracketed_cyan() {
        let style = kind_style(FileKind::Directory);
        assert_eq!(style.color, Color::Cyan);
        assert_eq!(style.wrap("src"), "<src>");
    }

    #[test]
    fn regular_files_are_plain_white() {
        let style = kind_style(FileKind::Regular);
        assert_eq!(style.color, Color::White);
        assert_eq!(style.wrap("a.txt"), "a.txt");
    }

    #[test]
    fn error_kinds_use_red_or_silver() {
        assert_eq!(kind_style(FileKind::NotFound).color, Color::Red);
        assert_eq!(kind_style(FileKind::None).color, Color::Silver);
    }
}
