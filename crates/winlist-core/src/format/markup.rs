//! Polybar format tags.

/// Wrap `text` in polybar foreground and optional background tags.
///
/// ```
/// use winlist_core::format::colorize;
///
/// assert_eq!(colorize("x", "#ffffff", None), "%{F#ffffff}x%{F-}");
/// assert_eq!(
///     colorize("x", "#ffffff", Some("#000000")),
///     "%{B#000000}%{F#ffffff}x%{F-}%{B-}"
/// );
/// ```
pub fn colorize(text: &str, fg: &str, bg: Option<&str>) -> String {
    let colored = format!("%{{F{fg}}}{text}%{{F-}}");
    match bg {
        Some(bg) => format!("%{{B{bg}}}{colored}%{{B-}}"),
        None => colored,
    }
}

/// Remove polybar `%{...}` tags, leaving the visible text.
pub fn strip_markup(markup: &str) -> String {
    let mut visible = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(start) = rest.find("%{") {
        visible.push_str(&rest[..start]);
        match rest[start..].find('}') {
            Some(end) => rest = &rest[start + end + 1..],
            None => {
                rest = &rest[start..];
                break;
            }
        }
    }
    visible.push_str(rest);
    visible
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colorize_foreground_only() {
        assert_eq!(
            colorize(" terminal ", "#6b7089", None),
            "%{F#6b7089} terminal %{F-}"
        );
    }

    #[test]
    fn test_colorize_with_background_nests_foreground_inside() {
        let markup = colorize("a", "#c6c8d1", Some("#1e2132"));
        assert!(markup.starts_with("%{B#1e2132}%{F#c6c8d1}"));
        assert!(markup.ends_with("%{F-}%{B-}"));
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(strip_markup("%{B#1}%{F#2} hi %{F-}%{B-}"), " hi ");
        assert_eq!(strip_markup("plain"), "plain");
        assert_eq!(strip_markup("100% done"), "100% done");
        assert_eq!(strip_markup("broken %{F#1"), "broken %{F#1");
    }
}
