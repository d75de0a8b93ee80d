//! Widget configuration.
//!
//! Defaults cover the stock page. Any root element can override them with
//! `data-*` attributes:
//!
//! ```html
//! <main data-articles-url="/content/articles.json"
//!       data-content-trust="trusted"
//!       data-article-containers='{"faq-panel": "faq-article-content"}'>
//! ```

use crate::shared::dom::AriaNode;
use crate::widgets::articles::render::ContentTrust;
use std::collections::BTreeMap;

pub const DEFAULT_ARTICLES_URL: &str = "data/articles.json";

pub const ATTR_ARTICLES_URL: &str = "data-articles-url";
pub const ATTR_CONTENT_TRUST: &str = "data-content-trust";
pub const ATTR_ARTICLE_CONTAINERS: &str = "data-article-containers";

const DEFAULT_CONTAINERS: [(&str, &str); 4] = [
    ("html-panel", "html-article-content"),
    ("css-panel", "css-article-content"),
    ("js-panel", "js-article-content"),
    ("aria-panel", "aria-article-content"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig {
    pub articles_url: String,
    pub content_trust: ContentTrust,
    /// Tab panel id -> id of the element that receives article markup.
    pub containers: BTreeMap<String, String>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            articles_url: DEFAULT_ARTICLES_URL.to_string(),
            content_trust: ContentTrust::default(),
            containers: DEFAULT_CONTAINERS
                .iter()
                .map(|(panel, container)| (panel.to_string(), container.to_string()))
                .collect(),
        }
    }
}

impl WidgetConfig {
    /// Defaults, overridden by the root element's `data-*` attributes.
    /// Malformed values are logged and ignored.
    pub fn from_root<N: AriaNode>(root: &N) -> Self {
        let mut config = Self::default();

        if let Some(url) = root
            .attribute(ATTR_ARTICLES_URL)
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
        {
            config.articles_url = url;
        }

        if let Some(value) = root.attribute(ATTR_CONTENT_TRUST) {
            match ContentTrust::parse(&value) {
                Some(trust) => config.content_trust = trust,
                None => log::warn!("Ignoring unknown {} `{}`", ATTR_CONTENT_TRUST, value),
            }
        }

        if let Some(json) = root.attribute(ATTR_ARTICLE_CONTAINERS) {
            match serde_json::from_str::<BTreeMap<String, String>>(&json) {
                Ok(extra) => config.containers.extend(extra),
                Err(e) => log::warn!("Ignoring malformed {}: {}", ATTR_ARTICLE_CONTAINERS, e),
            }
        }

        config
    }

    pub fn container_for(&self, panel_id: &str) -> Option<&str> {
        self.containers.get(panel_id).map(String::as_str)
    }
}
