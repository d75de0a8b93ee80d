//! Lazy article loading.
//!
//! `idle -> loading -> loaded | not found | failed`, started independently by
//! every click. The catalog is fetched fresh each time; a response that has
//! been overtaken by a newer request for the same container is discarded.

pub mod render;
pub mod source;
pub mod tokens;

use crate::config::WidgetConfig;
use crate::shared::aria::{ARIA_BUSY, DATA_ARTICLE, ROLE, ROLE_TABPANEL};
use crate::shared::dom::{closest_with_attribute, AriaNode, NodeScope};
use render::{ContentTrust, FAILED_HTML, NOT_FOUND_HTML};
use source::ArticleSource;
use tokens::RequestTokens;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    NotFound,
    Failed,
    /// A newer request for the same container started before this one settled.
    Superseded,
}

/// What a click on an article button asks for.
#[derive(Clone)]
pub struct ArticleRequest<N> {
    pub article_id: String,
    /// Container id, used to sequence requests.
    pub container_key: String,
    pub container: N,
}

/// Resolve a click on `button`: its `data-article`, the enclosing tab panel,
/// and that panel's article container. `None` means nothing to load.
pub fn article_request<S: NodeScope>(
    button: &S::Node,
    config: &WidgetConfig,
    scope: &S,
) -> Option<ArticleRequest<S::Node>> {
    let Some(article_id) = button.attribute(DATA_ARTICLE).filter(|id| !id.is_empty()) else {
        log::debug!("Button `{}` has no {}", button.id(), DATA_ARTICLE);
        return None;
    };
    let Some(panel) = closest_with_attribute(button, ROLE, ROLE_TABPANEL) else {
        log::debug!("Article button `{}` is outside any tab panel", article_id);
        return None;
    };
    let panel_id = panel.id();
    let Some(container_id) = config.container_for(&panel_id) else {
        log::debug!("No article container configured for panel `{}`", panel_id);
        return None;
    };
    let Some(container) = scope.find_by_id(container_id) else {
        log::warn!("Article container `{}` not found", container_id);
        return None;
    };
    Some(ArticleRequest {
        article_id,
        container_key: container_id.to_string(),
        container,
    })
}

pub struct ArticleLoader<S> {
    source: S,
    trust: ContentTrust,
    tokens: RequestTokens,
}

impl<S: ArticleSource> ArticleLoader<S> {
    pub fn new(source: S, trust: ContentTrust) -> Self {
        Self {
            source,
            trust,
            tokens: RequestTokens::new(),
        }
    }

    /// Fetch the catalog and render `article_id` into `container`.
    ///
    /// `container_key` identifies the container for request sequencing.
    /// Errors never escape: they are logged and shown inline.
    pub async fn load<N: AriaNode>(
        &self,
        container_key: &str,
        container: &N,
        article_id: &str,
    ) -> LoadOutcome {
        let ticket = self.tokens.begin(container_key);
        container.set_attribute(ARIA_BUSY, "true");

        let result = self.source.fetch_catalog().await;

        if !self.tokens.is_current(&ticket) {
            log::debug!(
                "Dropping stale response for `{}` (generation {})",
                container_key,
                ticket.generation()
            );
            return LoadOutcome::Superseded;
        }
        container.remove_attribute(ARIA_BUSY);

        match result {
            Ok(catalog) => match catalog.get(article_id) {
                Some(article) => {
                    container.set_inner_html(&render::render_article(article, self.trust));
                    LoadOutcome::Loaded
                }
                None => {
                    log::warn!("Article `{}` not found", article_id);
                    container.set_inner_html(NOT_FOUND_HTML);
                    LoadOutcome::NotFound
                }
            },
            Err(err) => {
                log::error!("Error fetching articles: {}", err);
                container.set_inner_html(FAILED_HTML);
                LoadOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::WidgetError;
    use crate::shared::testing::{FakeDocument, FakeNode};
    use async_trait::async_trait;
    use contracts::domain::article::ArticleCatalog;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const CATALOG: &str = r#"{"a1": {"title": "T", "content": "<p>C</p>"}}"#;

    struct StaticSource {
        json: &'static str,
        calls: Cell<usize>,
    }

    impl StaticSource {
        fn new(json: &'static str) -> Self {
            Self {
                json,
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ArticleSource for StaticSource {
        async fn fetch_catalog(&self) -> Result<ArticleCatalog, WidgetError> {
            self.calls.set(self.calls.get() + 1);
            ArticleCatalog::from_json(self.json).map_err(|e| WidgetError::Parse(e.to_string()))
        }
    }

    struct OfflineSource;

    #[async_trait(?Send)]
    impl ArticleSource for OfflineSource {
        async fn fetch_catalog(&self) -> Result<ArticleCatalog, WidgetError> {
            Err(WidgetError::Request("network unreachable".to_string()))
        }
    }

    /// Runs `before_reply` while the fetch is in flight.
    struct InterleavedSource {
        before_reply: RefCell<Option<Box<dyn FnOnce()>>>,
    }

    #[async_trait(?Send)]
    impl ArticleSource for InterleavedSource {
        async fn fetch_catalog(&self) -> Result<ArticleCatalog, WidgetError> {
            if let Some(f) = self.before_reply.borrow_mut().take() {
                f();
            }
            ArticleCatalog::from_json(CATALOG).map_err(|e| WidgetError::Parse(e.to_string()))
        }
    }

    #[tokio::test]
    async fn test_renders_found_article() {
        let doc = FakeDocument::new();
        let container = doc.element("html-article-content", &[]);
        let loader = ArticleLoader::new(StaticSource::new(CATALOG), ContentTrust::Trusted);

        let outcome = loader.load("html-article-content", &container, "a1").await;

        assert_eq!(outcome, LoadOutcome::Loaded);
        assert_eq!(container.inner_html(), "<h3>T</h3><p>C</p>");
        assert_eq!(container.attribute("aria-busy"), None);
    }

    #[tokio::test]
    async fn test_missing_article_renders_not_found() {
        let doc = FakeDocument::new();
        let container = doc.element("c", &[]);
        let loader = ArticleLoader::new(StaticSource::new(CATALOG), ContentTrust::Sanitized);

        let outcome = loader.load("c", &container, "missing").await;

        assert_eq!(outcome, LoadOutcome::NotFound);
        assert_eq!(container.inner_html(), "<p>Article not found.</p>");
    }

    #[tokio::test]
    async fn test_network_failure_renders_message() {
        let doc = FakeDocument::new();
        let container = doc.element("c", &[]);
        let loader = ArticleLoader::new(OfflineSource, ContentTrust::Sanitized);

        let outcome = loader.load("c", &container, "a1").await;

        assert_eq!(outcome, LoadOutcome::Failed);
        assert_eq!(container.inner_html(), "<p>Failed to load article.</p>");
        assert_eq!(container.attribute("aria-busy"), None);
    }

    #[tokio::test]
    async fn test_malformed_json_renders_failure() {
        let doc = FakeDocument::new();
        let container = doc.element("c", &[]);
        let loader = ArticleLoader::new(StaticSource::new("{not json"), ContentTrust::Sanitized);

        assert_eq!(loader.load("c", &container, "a1").await, LoadOutcome::Failed);
        assert_eq!(container.inner_html(), FAILED_HTML);
    }

    #[tokio::test]
    async fn test_fetches_fresh_on_every_load() {
        let doc = FakeDocument::new();
        let container = doc.element("c", &[]);
        let loader = ArticleLoader::new(StaticSource::new(CATALOG), ContentTrust::Sanitized);

        loader.load("c", &container, "a1").await;
        loader.load("c", &container, "a1").await;

        assert_eq!(loader.source.calls.get(), 2);
    }

    #[tokio::test]
    async fn test_superseded_response_is_discarded() {
        let doc = FakeDocument::new();
        let container = doc.element("c", &[]);
        container.set_inner_html("<p>newer</p>");

        // A second click on the same container happens while the first
        // request is still pending.
        let tokens_probe = Rc::new(Cell::new(false));
        let probe = Rc::clone(&tokens_probe);
        let loader = Rc::new(ArticleLoader::new(
            InterleavedSource {
                before_reply: RefCell::new(None),
            },
            ContentTrust::Trusted,
        ));
        let weak = Rc::downgrade(&loader);
        *loader.source.before_reply.borrow_mut() = Some(Box::new(move || {
            if let Some(loader) = weak.upgrade() {
                loader.tokens.begin("c");
                probe.set(true);
            }
        }));

        let outcome = loader.load("c", &container, "a1").await;

        assert!(tokens_probe.get());
        assert_eq!(outcome, LoadOutcome::Superseded);
        assert_eq!(container.inner_html(), "<p>newer</p>");
    }

    #[tokio::test]
    async fn test_other_containers_are_not_superseded() {
        let doc = FakeDocument::new();
        let html = doc.element("html", &[]);
        let css = doc.element("css", &[]);
        let loader = ArticleLoader::new(StaticSource::new(CATALOG), ContentTrust::Trusted);

        let (a, b) = tokio::join!(
            loader.load("html", &html, "a1"),
            loader.load("css", &css, "missing")
        );

        assert_eq!(a, LoadOutcome::Loaded);
        assert_eq!(b, LoadOutcome::NotFound);
    }

    /// `css-panel` tab panel with an accordion of article buttons and the
    /// panel's article container.
    fn panel_fixture(doc: &FakeDocument) -> (FakeNode, FakeNode) {
        let panel = doc.element("css-panel", &[("role", "tabpanel")]);
        let accordion = doc.child(&panel, "css-accordion", &[("class", "accordion-panel")]);
        let button = doc.child(&accordion, "", &[("data-article", "css-focus")]);
        let container = doc.child(&panel, "css-article-content", &[]);
        (button, container)
    }

    #[test]
    fn test_request_resolves_enclosing_panel_container() {
        let doc = FakeDocument::new();
        let (button, container) = panel_fixture(&doc);

        let request = article_request(&button, &WidgetConfig::default(), &doc).unwrap();

        assert_eq!(request.article_id, "css-focus");
        assert_eq!(request.container_key, "css-article-content");
        assert!(request.container.same_node(&container));
    }

    #[test]
    fn test_request_without_article_id_is_skipped() {
        let doc = FakeDocument::new();
        let panel = doc.element("css-panel", &[("role", "tabpanel")]);
        doc.child(&panel, "css-article-content", &[]);
        let button = doc.child(&panel, "plain", &[]);
        let empty = doc.child(&panel, "empty", &[("data-article", "")]);

        assert!(article_request(&button, &WidgetConfig::default(), &doc).is_none());
        assert!(article_request(&empty, &WidgetConfig::default(), &doc).is_none());
    }

    #[test]
    fn test_request_outside_tab_panel_is_skipped() {
        let doc = FakeDocument::new();
        let sidebar = doc.element("sidebar", &[]);
        let button = doc.child(&sidebar, "b", &[("data-article", "a1")]);

        assert!(article_request(&button, &WidgetConfig::default(), &doc).is_none());
    }

    #[test]
    fn test_request_for_unmapped_panel_is_skipped() {
        let doc = FakeDocument::new();
        let panel = doc.element("faq-panel", &[("role", "tabpanel")]);
        doc.child(&panel, "faq-article-content", &[]);
        let button = doc.child(&panel, "b", &[("data-article", "a1")]);

        assert!(article_request(&button, &WidgetConfig::default(), &doc).is_none());

        let mut config = WidgetConfig::default();
        config
            .containers
            .insert("faq-panel".to_string(), "faq-article-content".to_string());
        let request = article_request(&button, &config, &doc).unwrap();
        assert_eq!(request.container_key, "faq-article-content");
    }

    #[test]
    fn test_request_with_missing_container_element_is_skipped() {
        let doc = FakeDocument::new();
        let panel = doc.element("js-panel", &[("role", "tabpanel")]);
        let button = doc.child(&panel, "b", &[("data-article", "a1")]);

        assert!(article_request(&button, &WidgetConfig::default(), &doc).is_none());
    }
}
