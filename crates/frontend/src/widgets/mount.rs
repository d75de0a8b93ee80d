//! Attaches every widget found under a root element to its DOM events.

use crate::config::WidgetConfig;
use crate::shared::aria::{ROLE_TAB, ROLE_TABPANEL};
use crate::shared::dom::{attribute_selector, DomScope};
use crate::shared::events::EventBinding;
use crate::widgets::articles::source::HttpArticleSource;
use crate::widgets::articles::{article_request, ArticleLoader};
use crate::widgets::tabs::{group_tab_lists, TabList};
use crate::widgets::toggle::{Toggle, ToggleKind};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, KeyboardEvent};

const ARTICLE_BUTTON_SELECTOR: &str = ".accordion-panel button";

/// Listeners owned by one mounted root. Dropping it detaches them.
pub struct MountedWidgets {
    _bindings: Vec<EventBinding>,
    pub tab_lists: usize,
    pub toggles: usize,
    pub article_buttons: usize,
}

impl MountedWidgets {
    /// Keep the listeners for the rest of the page lifetime.
    pub fn keep_alive(self) {
        std::mem::forget(self);
    }
}

pub fn mount(root: &Element, config: WidgetConfig) -> MountedWidgets {
    let scope = Rc::new(DomScope::new(root.clone()));
    let mut bindings = Vec::new();

    let tab_lists = mount_tabs(&scope, &mut bindings);
    let toggles = mount_toggles(&scope, ToggleKind::Accordion, &mut bindings)
        + mount_toggles(&scope, ToggleKind::Disclosure, &mut bindings);
    let article_buttons = mount_articles(&scope, config, &mut bindings);

    log::info!(
        "Widgets mounted: {} tab lists, {} toggles, {} article buttons ({} listeners)",
        tab_lists,
        toggles,
        article_buttons,
        bindings.len()
    );

    MountedWidgets {
        _bindings: bindings,
        tab_lists,
        toggles,
        article_buttons,
    }
}

// ── Tabs ─────────────────────────────────────────────────────────────────────

fn mount_tabs(scope: &Rc<DomScope>, bindings: &mut Vec<EventBinding>) -> usize {
    let tabs = scope.query_all(&attribute_selector("role", ROLE_TAB));
    let panels = scope.query_all(&attribute_selector("role", ROLE_TABPANEL));

    let groups = group_tab_lists(tabs);
    let count = groups.len();
    for group in groups {
        let list = Rc::new(TabList::new(group, panels.clone()));

        for (index, tab) in list.tabs().iter().enumerate() {
            let on_click_list = Rc::clone(&list);
            let clicked = tab.clone();
            bindings.push(EventBinding::listen(tab.as_ref(), "click", move |_| {
                on_click_list.activate(&clicked);
            }));

            let on_key_list = Rc::clone(&list);
            bindings.push(EventBinding::listen(
                tab.as_ref(),
                "keydown",
                move |event: Event| {
                    let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                        return;
                    };
                    if on_key_list
                        .handle_key(index, &keyboard_event.key())
                        .is_handled()
                    {
                        event.prevent_default();
                    }
                },
            ));
        }
    }
    count
}

// ── Accordions and disclosures ───────────────────────────────────────────────

fn mount_toggles(
    scope: &Rc<DomScope>,
    kind: ToggleKind,
    bindings: &mut Vec<EventBinding>,
) -> usize {
    let buttons = scope.query_all(&kind.selector());
    let count = buttons.len();

    for button in buttons {
        let toggle = Toggle::new(kind, button.clone());
        let scope = Rc::clone(scope);
        bindings.push(EventBinding::listen(button.as_ref(), "click", move |_| {
            if let Err(err) = toggle.toggle(&*scope) {
                log::warn!("{} toggle failed: {}", toggle.kind(), err);
            }
        }));
    }
    count
}

// ── Articles ─────────────────────────────────────────────────────────────────

fn mount_articles(
    scope: &Rc<DomScope>,
    config: WidgetConfig,
    bindings: &mut Vec<EventBinding>,
) -> usize {
    let buttons = scope.query_all(ARTICLE_BUTTON_SELECTOR);
    let count = buttons.len();

    let loader = Rc::new(ArticleLoader::new(
        HttpArticleSource::new(config.articles_url.clone()),
        config.content_trust,
    ));
    let config = Rc::new(config);

    for button in buttons {
        let loader = Rc::clone(&loader);
        let config = Rc::clone(&config);
        let scope = Rc::clone(scope);
        let clicked = button.clone();

        bindings.push(EventBinding::listen(button.as_ref(), "click", move |_| {
            let Some(request) = article_request(&clicked, &config, &*scope) else {
                return;
            };

            let loader = Rc::clone(&loader);
            spawn_local(async move {
                let outcome = loader
                    .load(&request.container_key, &request.container, &request.article_id)
                    .await;
                log::debug!("Article `{}`: {:?}", request.article_id, outcome);
            });
        }));
    }
    count
}
