/// One window on the focused desktop, rebuilt on every refresh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRecord {
    /// bspwm node id as printed by `bspc query`
    pub node_id: String,
    /// X window id, lowercase `0x%08x`
    pub window_id: String,
    /// Lowercased last segment of WM_CLASS
    pub class: String,
    pub title: String,
    pub is_focused: bool,
}

impl WindowRecord {
    pub fn new(node_id: impl Into<String>, title: impl Into<String>) -> Self {
        let node_id = node_id.into();
        let window_id = super::operations::parse_window_id(&node_id)
            .map(format_window_id)
            .unwrap_or_default();
        Self {
            node_id,
            window_id,
            class: String::new(),
            title: title.into(),
            is_focused: false,
        }
    }

    pub fn focused(mut self) -> Self {
        self.is_focused = true;
        self
    }
}

/// Title and class of one X window, as listed by `wmctrl -lx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowMeta {
    pub class: String,
    pub title: String,
}

pub fn format_window_id(id: u64) -> String {
    format!("0x{:08x}", id)
}
