use owo_colors::OwoColorize;

/// Renders a section heading, bold and cyan when color is enabled.
pub fn heading(text: &str, use_colors: bool) -> String {
    if use_colors {
        text.bold().cyan().to_string()
    } else {
        text.to_string()
    }
}

/// Renders a secondary label, dimmed when color is enabled.
pub fn dim(text: &str, use_colors: bool) -> String {
    if use_colors { text.dimmed().to_string() } else { text.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_when_colors_disabled() {
        assert_eq!(heading("STATS", false), "STATS");
        assert_eq!(dim("note", false), "note");
    }

    #[test]
    fn test_escape_codes_when_colors_enabled() {
        let styled = heading("STATS", true);
        assert!(styled.contains("STATS"));
        assert!(styled.contains('\u{1b}'));
    }
}
