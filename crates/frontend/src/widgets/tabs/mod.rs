//! Single-select tab list.
//!
//! Tabs and panels are wired by `aria-controls`/`id` and
//! `aria-labelledby`/`id`. After every activation exactly one tab carries
//! `aria-selected="true"` and only its panel is visible.

pub mod keyboard;

use crate::shared::aria::{self, ARIA_CONTROLS, ARIA_LABELLEDBY, ARIA_SELECTED};
use crate::shared::dom::AriaNode;
use keyboard::{TabKey, TabMove};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Focused(usize),
    Activated(usize),
    Ignored,
}

impl KeyOutcome {
    pub fn is_handled(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

pub struct TabList<N> {
    tabs: Vec<N>,
    panels: Vec<N>,
}

impl<N: AriaNode> TabList<N> {
    /// Builds a list from its tabs (in document order) and the candidate
    /// panels. Only panels that belong to one of the tabs are kept.
    pub fn new(tabs: Vec<N>, candidate_panels: Vec<N>) -> Self {
        let panels = candidate_panels
            .into_iter()
            .filter(|panel| tabs.iter().any(|tab| owns_panel(tab, panel)))
            .collect();
        Self { tabs, panels }
    }

    pub fn tabs(&self) -> &[N] {
        &self.tabs
    }

    pub fn panels(&self) -> &[N] {
        &self.panels
    }

    pub fn position(&self, tab: &N) -> Option<usize> {
        self.tabs.iter().position(|t| t.same_node(tab))
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.tabs
            .iter()
            .position(|tab| aria::parse_flag(tab.attribute(ARIA_SELECTED).as_deref()))
    }

    /// Select the tab at `index` and show only its panel. Idempotent.
    pub fn switch_tab(&self, index: usize) {
        let Some(selected) = self.tabs.get(index) else {
            log::warn!("switch_tab: index {} out of range ({} tabs)", index, self.tabs.len());
            return;
        };

        for (i, tab) in self.tabs.iter().enumerate() {
            tab.set_attribute(ARIA_SELECTED, aria::format_flag(i == index));
        }

        for panel in &self.panels {
            panel.set_hidden(!owns_panel(selected, panel));
        }
    }

    /// Pointer activation.
    pub fn activate(&self, tab: &N) {
        if let Some(index) = self.position(tab) {
            self.switch_tab(index);
        }
    }

    pub fn handle_key(&self, current: usize, key: &str) -> KeyOutcome {
        let Some(key) = TabKey::from_key(key) else {
            return KeyOutcome::Ignored;
        };
        match keyboard::resolve(key, current, self.tabs.len()) {
            Some(TabMove::Focus(index)) => {
                self.tabs[index].focus();
                KeyOutcome::Focused(index)
            }
            Some(TabMove::Activate(index)) => {
                self.switch_tab(index);
                KeyOutcome::Activated(index)
            }
            None => KeyOutcome::Ignored,
        }
    }
}

/// Split tabs (in document order) into lists: tabs sharing a parent element
/// belong to the same list.
pub fn group_tab_lists<N: AriaNode>(tabs: Vec<N>) -> Vec<Vec<N>> {
    let mut groups: Vec<(Option<N>, Vec<N>)> = Vec::new();
    for tab in tabs {
        let parent = tab.parent();
        let existing = groups.iter().position(|(p, _)| match (p, &parent) {
            (Some(a), Some(b)) => a.same_node(b),
            (None, None) => true,
            _ => false,
        });
        match existing {
            Some(i) => groups[i].1.push(tab),
            None => groups.push((parent, vec![tab])),
        }
    }
    groups.into_iter().map(|(_, group)| group).collect()
}

fn owns_panel<N: AriaNode>(tab: &N, panel: &N) -> bool {
    let tab_id = tab.id();
    let labelled_by_tab =
        !tab_id.is_empty() && panel.attribute(ARIA_LABELLEDBY).as_deref() == Some(tab_id.as_str());
    let panel_id = panel.id();
    let controlled_by_tab =
        !panel_id.is_empty() && tab.attribute(ARIA_CONTROLS).as_deref() == Some(panel_id.as_str());
    labelled_by_tab || controlled_by_tab
}
