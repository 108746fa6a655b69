//! Title component: a static label rendered ahead of the bar.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Renders the bar's title, optionally padded or truncated to a fixed
/// column width.
#[derive(Debug, Clone)]
pub struct Title {
    text: String,
}

impl Title {
    /// Creates a title from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The current title text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the title text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Renders the title at its natural width, or fitted to `width`
    /// columns when one is given.
    pub fn render(&self, width: Option<usize>) -> String {
        match width {
            Some(width) => fit_to_width(&self.text, width),
            None => self.text.clone(),
        }
    }
}

/// Pads with spaces or truncates on a grapheme boundary so the result
/// occupies exactly `width` terminal columns.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(text);
    if visible == width {
        return text.to_string();
    }
    if visible < width {
        let mut out = String::with_capacity(text.len() + (width - visible));
        out.push_str(text);
        out.extend(std::iter::repeat(' ').take(width - visible));
        return out;
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > width {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    // A truncated wide glyph can leave us one column short.
    out.extend(std::iter::repeat(' ').take(width - used));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_natural_width() {
        let title = Title::new("download");
        assert_eq!(title.render(None), "download");
    }

    #[test]
    fn test_render_pads_to_width() {
        let title = Title::new("abc");
        assert_eq!(title.render(Some(6)), "abc   ");
    }

    #[test]
    fn test_render_truncates_to_width() {
        let title = Title::new("abcdefgh");
        assert_eq!(title.render(Some(4)), "abcd");
    }

    #[test]
    fn test_wide_glyphs_count_two_columns() {
        // Each CJK glyph occupies two columns; three glyphs do not fit in
        // five columns, so the last one becomes a padding space.
        let title = Title::new("进度条");
        assert_eq!(title.render(Some(5)), "进度 ");
    }

    #[test]
    fn test_set_text() {
        let mut title = Title::new("before");
        title.set_text("after");
        assert_eq!(title.text(), "after");
        assert_eq!(title.render(None), "after");
    }
}
