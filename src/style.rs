//! Terminal styling utilities
//!
//! Consistent color scheme for the text report.
//! Uses crossterm for cross-platform terminal colors.

use crossterm::style::{StyledContent, Stylize};

/// Section headers
pub fn header(text: &str) -> StyledContent<String> {
    text.to_string().bold()
}

/// Scenario names
pub fn subheader(text: &str) -> StyledContent<String> {
    text.to_string().underlined()
}

/// Rules and other chrome
pub fn dim(text: &str) -> StyledContent<String> {
    text.to_string().dark_grey()
}

/// Headline numbers (effective accuracy)
pub fn success(text: &str) -> StyledContent<String> {
    text.to_string().green()
}

/// Advantage multipliers
pub fn highlight(text: &str) -> StyledContent<String> {
    text.to_string().yellow()
}

/// Error text
pub fn error(text: &str) -> StyledContent<String> {
    text.to_string().red()
}

/// Apply `style` only when color output is enabled
pub fn paint(enabled: bool, text: &str, style: fn(&str) -> StyledContent<String>) -> String {
    if enabled {
        style(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_keep_content() {
        assert_eq!(header("RESULTS").content(), "RESULTS");
        assert_eq!(success("99.0250%").content(), "99.0250%");
        assert_eq!(highlight("6.2x").content(), "6.2x");
    }

    #[test]
    fn test_paint_disabled_is_plain() {
        assert_eq!(paint(false, "plain", header), "plain");
        assert_eq!(paint(false, "∞", highlight), "∞");
    }

    #[test]
    fn test_paint_enabled_wraps_content() {
        let painted = paint(true, "bold", header);
        assert!(painted.contains("bold"));
    }
}
