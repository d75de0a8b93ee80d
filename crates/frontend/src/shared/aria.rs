//! ARIA attribute names and state parsing.

pub const ROLE: &str = "role";
pub const ROLE_TAB: &str = "tab";
pub const ROLE_TABPANEL: &str = "tabpanel";

pub const ARIA_SELECTED: &str = "aria-selected";
pub const ARIA_EXPANDED: &str = "aria-expanded";
pub const ARIA_CONTROLS: &str = "aria-controls";
pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
pub const ARIA_BUSY: &str = "aria-busy";

pub const DATA_ARTICLE: &str = "data-article";

/// Parse a boolean ARIA state attribute.
///
/// Only the exact value `"true"` counts as set. A missing attribute and any
/// other value (`"false"`, `""`, `"TRUE"`, `"mixed"`) read as `false`.
pub fn parse_flag(value: Option<&str>) -> bool {
    value == Some("true")
}

pub fn format_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
