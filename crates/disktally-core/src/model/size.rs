/// Size formatting utilities: exact and human-readable byte counts.
///
/// All internal sizes are `u64` bytes. Floating point is only used
/// at the display-formatting boundary.

/// One kibibyte. Labelled "KB" on screen, as disk tools conventionally do.
pub const KB: u64 = 1 << 10;
/// One mebibyte.
pub const MB: u64 = 1 << 20;
/// One gibibyte.
pub const GB: u64 = 1 << 30;

/// Format a byte count with `,` thousand separators and a trailing ` B`.
///
/// `1_234_567` renders as `"1,234,567 B"`.
pub fn format_bytes(bytes: u64) -> String {
    format!("{} B", format_count(bytes))
}

/// Format a byte count on the fixed KB / MB / GB ladder with two decimals.
///
/// There is no plain-bytes tier: anything below one MB is shown in KB, so
/// `1023` renders as `"1.00 KB"` and `0` as `"0.00 KB"`. The comparisons are
/// strict, so exactly one MB is already `"1.00 MB"`.
pub fn format_short(bytes: u64) -> String {
    let b = bytes as f64;
    if bytes < MB {
        format!("{:.2} KB", b / KB as f64)
    } else if bytes < GB {
        format!("{:.2} MB", b / MB as f64)
    } else {
        format!("{:.2} GB", b / GB as f64)
    }
}

/// Format a count with `,` between each group of three digits.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.char_indices() {
        // A separator goes wherever a multiple of three digits remains.
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
