use std::collections::HashMap;
use std::process::Command;
use tracing::{debug, warn};

use crate::windows::traits::WindowQuery;
use crate::windows::types::{WindowMeta, WindowRecord, format_window_id};

/// Parse a hex window/node id such as `0x01E00003`. Zero is not a window.
pub fn parse_window_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    let digits = raw
        .strip_prefix("0x")
        .or_else(|| raw.strip_prefix("0X"))
        .unwrap_or(raw);
    u64::from_str_radix(digits, 16).ok().filter(|id| *id != 0)
}

/// Parse `bspc query -N` output into `(raw node id, numeric id)` pairs,
/// keeping bspwm's order.
pub fn parse_node_ids(output: &str) -> Vec<(String, u64)> {
    output
        .lines()
        .filter_map(|line| {
            let raw = line.trim();
            parse_window_id(raw).map(|id| (raw.to_string(), id))
        })
        .collect()
}

/// Parse one `wmctrl -lx` line.
///
/// Columns: window id, desktop, `instance.Class`, host, title. Whitespace
/// runs are collapsed; a missing title falls back to the class.
pub fn parse_wmctrl_line(line: &str) -> Option<(u64, WindowMeta)> {
    let columns: Vec<&str> = line.split_whitespace().collect();
    if columns.len() < 3 {
        return None;
    }

    let id = parse_window_id(columns[0])?;
    let class = columns[2]
        .rsplit('.')
        .next()
        .unwrap_or(columns[2])
        .to_lowercase();
    let title = if columns.len() > 4 {
        columns[4..].join(" ")
    } else {
        class.clone()
    };

    Some((id, WindowMeta { class, title }))
}

pub fn parse_wmctrl_output(output: &str) -> HashMap<u64, WindowMeta> {
    output.lines().filter_map(parse_wmctrl_line).collect()
}

/// Join node ids with window metadata.
///
/// Nodes without metadata are dropped; order follows `nodes`.
pub fn build_records(
    nodes: &[(String, u64)],
    focused: Option<u64>,
    metadata: &HashMap<u64, WindowMeta>,
) -> Vec<WindowRecord> {
    nodes
        .iter()
        .filter_map(|(raw, id)| {
            let Some(meta) = metadata.get(id) else {
                debug!(event = "core.windows.metadata_missing", node_id = raw.as_str());
                return None;
            };
            Some(WindowRecord {
                node_id: raw.clone(),
                window_id: format_window_id(*id),
                class: meta.class.clone(),
                title: meta.title.clone(),
                is_focused: focused == Some(*id),
            })
        })
        .collect()
}

/// Run an external query, returning stdout on success.
fn run_query(program: &str, args: &[&str]) -> Option<String> {
    match Command::new(program).args(args).output() {
        Ok(output) if output.status.success() => {
            Some(String::from_utf8_lossy(&output.stdout).into_owned())
        }
        Ok(output) => {
            warn!(
                event = "core.windows.query_failed",
                program = program,
                args = ?args,
                status = ?output.status.code(),
                stderr = %String::from_utf8_lossy(&output.stderr).trim()
            );
            None
        }
        Err(e) => {
            warn!(
                event = "core.windows.query_spawn_failed",
                program = program,
                error = %e
            );
            None
        }
    }
}

/// [`WindowQuery`] backed by `bspc query` and `wmctrl -lx`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BspwmQuery;

impl BspwmQuery {
    fn local_windows(&self) -> Option<Vec<(String, u64)>> {
        run_query("bspc", &["query", "-N", "-n", ".local.window"]).map(|out| parse_node_ids(&out))
    }

    /// `bspc query` exits non-zero when nothing is focused, which is normal.
    fn focused_window(&self) -> Option<u64> {
        let output = Command::new("bspc")
            .args(["query", "-N", "-n", "focused.window"])
            .output()
            .ok()?;
        if !output.status.success() {
            return None;
        }
        parse_node_ids(&String::from_utf8_lossy(&output.stdout))
            .first()
            .map(|(_, id)| *id)
    }

    fn window_metadata(&self) -> Option<HashMap<u64, WindowMeta>> {
        run_query("wmctrl", &["-lx"]).map(|out| parse_wmctrl_output(&out))
    }
}

impl WindowQuery for BspwmQuery {
    fn focused_desktop_windows(&self) -> Vec<WindowRecord> {
        let Some(nodes) = self.local_windows() else {
            return Vec::new();
        };
        if nodes.is_empty() {
            return Vec::new();
        }

        let Some(metadata) = self.window_metadata() else {
            return Vec::new();
        };

        build_records(&nodes, self.focused_window(), &metadata)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WMCTRL_OUTPUT: &str = "\
0x01e00003  0 urxvt.URxvt           archbox terminal
0x02400001  0 Navigator.firefox     archbox Some   page  -  Mozilla Firefox
0x02600007 -1 polybar.Polybar       archbox
";

    #[test]
    fn test_parse_window_id() {
        assert_eq!(parse_window_id("0x01E00003"), Some(0x01e00003));
        assert_eq!(parse_window_id("0x01e00003"), Some(0x01e00003));
        assert_eq!(parse_window_id(" 0X0000000A\n"), Some(10));
        assert_eq!(parse_window_id("0x00000000"), None);
        assert_eq!(parse_window_id(""), None);
        assert_eq!(parse_window_id("not-an-id"), None);
    }

    #[test]
    fn test_parse_node_ids_keeps_order_and_skips_garbage() {
        let ids = parse_node_ids("0x02400001\n\n0x01E00003\n0x0\n");
        assert_eq!(
            ids,
            vec![
                ("0x02400001".to_string(), 0x02400001),
                ("0x01E00003".to_string(), 0x01e00003),
            ]
        );
    }

    #[test]
    fn test_parse_wmctrl_line() {
        let (id, meta) = parse_wmctrl_line(
            "0x02400001  0 Navigator.firefox     archbox Some   page  -  Mozilla Firefox",
        )
        .unwrap();
        assert_eq!(id, 0x02400001);
        assert_eq!(meta.class, "firefox");
        assert_eq!(meta.title, "Some page - Mozilla Firefox");
    }

    #[test]
    fn test_parse_wmctrl_line_without_title_uses_class() {
        let (_, meta) = parse_wmctrl_line("0x02600007 -1 polybar.Polybar       archbox").unwrap();
        assert_eq!(meta.title, "polybar");
    }

    #[test]
    fn test_parse_wmctrl_line_rejects_short_lines() {
        assert!(parse_wmctrl_line("").is_none());
        assert!(parse_wmctrl_line("0x01e00003 0").is_none());
        assert!(parse_wmctrl_line("nonsense 0 a.B host title").is_none());
    }

    #[test]
    fn test_build_records_follows_node_order_and_marks_focus() {
        let metadata = parse_wmctrl_output(WMCTRL_OUTPUT);
        let nodes = parse_node_ids("0x02400001\n0x01E00003\n");

        let records = build_records(&nodes, Some(0x01e00003), &metadata);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].title, "Some page - Mozilla Firefox");
        assert!(!records[0].is_focused);
        assert_eq!(records[1].node_id, "0x01E00003");
        assert_eq!(records[1].window_id, "0x01e00003");
        assert_eq!(records[1].class, "urxvt");
        assert!(records[1].is_focused);
    }

    #[test]
    fn test_build_records_drops_nodes_without_metadata() {
        let metadata = parse_wmctrl_output(WMCTRL_OUTPUT);
        let nodes = parse_node_ids("0x0AAAAAAA\n0x01E00003\n");

        let records = build_records(&nodes, None, &metadata);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "terminal");
        assert!(!records[0].is_focused);
    }

    #[test]
    fn test_window_record_builder() {
        let record = WindowRecord::new("0x01E00003", "terminal").focused();
        assert_eq!(record.window_id, "0x01e00003");
        assert!(record.is_focused);
    }
}
