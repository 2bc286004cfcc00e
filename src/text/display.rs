//! Human-facing rendering of engine strings.

use super::codec::{decode, LINE_SEPARATOR};
use super::model::RichText;
use crate::util::Result;

/// Render an engine string for display.
///
/// Lossy: line separators become newlines, trailing whitespace is dropped,
/// and null or blank strings get a visible placeholder.
pub fn to_display_string(s: Option<&str>) -> String {
    let Some(s) = s else {
        return "null".to_string();
    };
    let shown = s.replace(LINE_SEPARATOR, "\n");
    let shown = shown.trim_end();
    if shown.is_empty() {
        "[blank]".to_string()
    } else {
        shown.to_string()
    }
}

impl RichText {
    /// Decode this text and render it for display.
    pub fn to_display_string(&self) -> Result<String> {
        let s = decode(self)?;
        Ok(to_display_string(s.as_deref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::encode;

    #[test]
    fn test_display_placeholders() {
        assert_eq!(to_display_string(None), "null");
        assert_eq!(to_display_string(Some("")), "[blank]");
        assert_eq!(to_display_string(Some(" \t<br>  ")), "[blank]");
    }

    #[test]
    fn test_display_line_breaks() {
        assert_eq!(to_display_string(Some("a<br>b")), "a\nb");
        assert_eq!(to_display_string(Some("a<br>b<br><br>")), "a\nb");
        assert_eq!(to_display_string(Some("  lead")), "  lead");
    }

    #[test]
    fn test_rich_text_display() {
        assert_eq!(encode(None).to_display_string().unwrap(), "null");
        assert_eq!(
            encode(Some("Line 1<br>Line 2")).to_display_string().unwrap(),
            "Line 1\nLine 2"
        );
    }
}
