//! Keyboard navigation inside a tab list (manual activation pattern).
//!
//! Arrow keys, Home and End only move focus. Enter and Space select the
//! focused tab.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabKey {
    Previous,
    Next,
    First,
    Last,
    Activate,
}

impl TabKey {
    /// Maps `KeyboardEvent.key` to a navigation key. Unknown keys give `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(TabKey::Previous),
            "ArrowRight" => Some(TabKey::Next),
            "Home" => Some(TabKey::First),
            "End" => Some(TabKey::Last),
            // Older engines report "Spacebar"
            "Enter" | " " | "Spacebar" | "Space" => Some(TabKey::Activate),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabMove {
    Focus(usize),
    Activate(usize),
}

/// Resolve a key press on the tab at `current` in a list of `len` tabs.
pub fn resolve(key: TabKey, current: usize, len: usize) -> Option<TabMove> {
    if len == 0 || current >= len {
        return None;
    }
    let last = len - 1;
    let target = match key {
        TabKey::Previous => {
            if current > 0 {
                current - 1
            } else {
                last
            }
        }
        TabKey::Next => {
            if current < last {
                current + 1
            } else {
                0
            }
        }
        TabKey::First => 0,
        TabKey::Last => last,
        TabKey::Activate => return Some(TabMove::Activate(current)),
    };
    Some(TabMove::Focus(target))
}
