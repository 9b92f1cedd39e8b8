//! Display-width helpers.
//!
//! Widths are measured in terminal columns with `unicode-width`, so wide
//! (CJK) characters count as two and combining marks as zero.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Returns the display width of `s` in terminal columns.
pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Truncates a string to fit within a maximum display width, adding an
/// ellipsis if needed.
///
/// # Example
///
/// ```rust
/// use tsel_render::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Hello", 10), "Hello");
/// assert_eq!(truncate_to_width("Hello World", 6), "Hello…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut result = String::new();
    let mut current_width = 0;
    // Reserve one column for the ellipsis
    let limit = max_width - 1;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

/// Returns the longest prefix of `s` that fits within `max_width` columns.
pub fn clip_to_width(s: &str, max_width: usize) -> &str {
    let mut used = 0;
    for (i, c) in s.char_indices() {
        used += c.width().unwrap_or(0);
        if used > max_width {
            return &s[..i];
        }
    }
    s
}

/// Fits `s` into exactly `width` columns: truncated with `…` when too wide,
/// right-padded with spaces otherwise.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let mut fitted = truncate_to_width(s, width);
    let used = fitted.width();
    fitted.extend(std::iter::repeat(' ').take(width.saturating_sub(used)));
    fitted
}
