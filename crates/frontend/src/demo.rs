//! Demo page rendering the markup the widgets expect: one tab per topic,
//! an accordion of article buttons in each panel, and a disclosure.

use crate::config::WidgetConfig;
use crate::widgets;
use leptos::html;
use leptos::prelude::*;

pub struct Topic {
    pub key: &'static str,
    pub label: &'static str,
    /// `(article id, button label)`
    pub articles: &'static [(&'static str, &'static str)],
}

pub const TOPICS: &[Topic] = &[
    Topic {
        key: "html",
        label: "HTML",
        articles: &[
            ("html-semantics", "Semantic elements"),
            ("html-forms", "Accessible forms"),
        ],
    },
    Topic {
        key: "css",
        label: "CSS",
        articles: &[
            ("css-focus", "Visible focus"),
            ("css-motion", "Reduced motion"),
        ],
    },
    Topic {
        key: "js",
        label: "JavaScript",
        articles: &[
            ("js-keyboard", "Keyboard handling"),
            ("js-live-regions", "Live regions"),
        ],
    },
    Topic {
        key: "aria",
        label: "ARIA",
        articles: &[
            ("aria-tabs", "Tabs pattern"),
            ("aria-disclosure", "Disclosure pattern"),
        ],
    },
];

#[component]
pub fn DemoPage() -> impl IntoView {
    let root_ref = NodeRef::<html::Div>::new();

    // Wire the widgets once the root element exists.
    Effect::new(move |mounted: Option<bool>| {
        if mounted == Some(true) {
            return true;
        }
        let Some(root) = root_ref.get() else {
            return false;
        };
        let root: &web_sys::HtmlElement = &root;
        let config = WidgetConfig::from_root(root);
        widgets::mount(root, config).keep_alive();
        true
    });

    view! {
        <div class="widgets-demo" node_ref=root_ref>
            <div role="tablist" aria-label="Topics">
                {TOPICS
                    .iter()
                    .enumerate()
                    .map(|(i, topic)| {
                        view! {
                            <button
                                role="tab"
                                id=format!("{}-tab", topic.key)
                                aria-selected={if i == 0 { "true" } else { "false" }}
                                aria-controls=format!("{}-panel", topic.key)
                            >
                                {topic.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            {TOPICS
                .iter()
                .enumerate()
                .map(|(i, topic)| view! { <TopicPanel topic=topic selected={i == 0} /> })
                .collect_view()}
            <button class="disclosure-button" aria-expanded="false" aria-controls="about-details">
                "About these articles"
            </button>
            <div id="about-details" hidden=true>
                <p>"Articles are loaded on demand from a static JSON document."</p>
            </div>
        </div>
    }
}

#[component]
fn TopicPanel(topic: &'static Topic, selected: bool) -> impl IntoView {
    let accordion_id = format!("{}-accordion", topic.key);

    view! {
        <div
            role="tabpanel"
            id=format!("{}-panel", topic.key)
            aria-labelledby=format!("{}-tab", topic.key)
            hidden={!selected}
        >
            <button class="accordion-button" aria-expanded="false" aria-controls=accordion_id.clone()>
                {format!("{} articles", topic.label)}
            </button>
            <div class="accordion-panel" id=accordion_id hidden=true>
                {topic
                    .articles
                    .iter()
                    .map(|(id, label)| view! { <button data-article={*id}>{*label}</button> })
                    .collect_view()}
            </div>
            <div id=format!("{}-article-content", topic.key) class="article-content"></div>
        </div>
    }
}
