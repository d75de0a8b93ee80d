//! Accordion and disclosure buttons.
//!
//! Both are plain two-state toggles: the button's `aria-expanded` flips and
//! the panel named by `aria-controls` is shown or hidden to match. Sibling
//! buttons never affect each other.

use crate::shared::aria::{self, ARIA_CONTROLS, ARIA_EXPANDED};
use crate::shared::dom::{AriaNode, NodeScope};
use crate::shared::error::WidgetError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    Accordion,
    Disclosure,
}

impl ToggleKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            ToggleKind::Accordion => "accordion-button",
            ToggleKind::Disclosure => "disclosure-button",
        }
    }

    pub fn selector(&self) -> String {
        format!(".{}", self.class_name())
    }
}

impl std::fmt::Display for ToggleKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleKind::Accordion => write!(f, "accordion"),
            ToggleKind::Disclosure => write!(f, "disclosure"),
        }
    }
}

pub struct Toggle<N> {
    kind: ToggleKind,
    button: N,
}

impl<N: AriaNode> Toggle<N> {
    pub fn new(kind: ToggleKind, button: N) -> Self {
        Self { kind, button }
    }

    pub fn kind(&self) -> ToggleKind {
        self.kind
    }

    pub fn is_expanded(&self) -> bool {
        aria::parse_flag(self.button.attribute(ARIA_EXPANDED).as_deref())
    }

    /// Flip the expanded state and return the new value.
    ///
    /// The controlled panel is resolved before anything is written, so a
    /// broken `aria-controls` reference leaves the widget untouched.
    pub fn toggle<S>(&self, scope: &S) -> Result<bool, WidgetError>
    where
        S: NodeScope<Node = N>,
    {
        let panel_id = self
            .button
            .attribute(ARIA_CONTROLS)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| WidgetError::MissingControls(self.button.id()))?;
        let panel = scope
            .find_by_id(&panel_id)
            .ok_or_else(|| WidgetError::MissingPanel {
                control: self.button.id(),
                panel_id: panel_id.clone(),
            })?;

        let was_expanded = self.is_expanded();
        self.button
            .set_attribute(ARIA_EXPANDED, aria::format_flag(!was_expanded));
        panel.set_hidden(was_expanded);
        Ok(!was_expanded)
    }
}
