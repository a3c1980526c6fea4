use crate::config::WinlistConfig;
use crate::format::markup::colorize;
use crate::windows::WindowRecord;

/// Everything needed to turn window records into one bar line.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryStyle {
    pub max_width: usize,
    pub ellipsis: String,
    pub padding: usize,
    pub dim_fg: String,
    pub focused_fg: String,
    pub focused_bg: String,
    pub separator: String,
}

impl EntryStyle {
    pub fn from_config(config: &WinlistConfig) -> Self {
        Self {
            max_width: config.label.max_width,
            ellipsis: config.label.ellipsis.clone(),
            padding: config.label.padding,
            dim_fg: config.colors.dim_fg.clone(),
            focused_fg: config.colors.focused_fg.clone(),
            focused_bg: config.colors.focused_bg.clone(),
            separator: config.bar.separator.clone(),
        }
    }
}

impl Default for EntryStyle {
    fn default() -> Self {
        Self::from_config(&WinlistConfig::default())
    }
}

/// A window record rendered for the bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedEntry {
    /// Title clamped to exactly `max_width` characters
    pub label: String,
    pub is_focused: bool,
    /// Padded label wrapped in color tags
    pub markup: String,
}

/// Clamp `title` to exactly `max_width` characters.
///
/// Longer titles keep their first `max_width - len(ellipsis)` characters and
/// end with `ellipsis`; shorter ones are right-padded with spaces.
pub fn clamp_label(title: &str, max_width: usize, ellipsis: &str) -> String {
    let len = title.chars().count();
    if len > max_width {
        let keep = max_width.saturating_sub(ellipsis.chars().count());
        let mut label: String = title.chars().take(keep).collect();
        label.push_str(ellipsis);
        label
    } else {
        let mut label = String::with_capacity(title.len() + max_width - len);
        label.push_str(title);
        label.extend(std::iter::repeat_n(' ', max_width - len));
        label
    }
}

pub fn format_entry(record: &WindowRecord, style: &EntryStyle) -> FormattedEntry {
    let label = clamp_label(&record.title, style.max_width, &style.ellipsis);
    let pad = " ".repeat(style.padding);
    let padded = format!("{pad}{label}{pad}");

    let markup = if record.is_focused {
        colorize(&padded, &style.focused_fg, Some(&style.focused_bg))
    } else {
        colorize(&padded, &style.dim_fg, None)
    };

    FormattedEntry {
        label,
        is_focused: record.is_focused,
        markup,
    }
}

/// Render all records into one line, separator between consecutive entries.
pub fn format_list(records: &[WindowRecord], style: &EntryStyle) -> String {
    records
        .iter()
        .map(|record| format_entry(record, style).markup)
        .collect::<Vec<_>>()
        .join(&style.separator)
}
