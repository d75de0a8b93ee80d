//! Article content served as a static JSON document.
//!
//! The resource is a single object keyed by article id:
//! ```json
//! { "html-semantics": { "title": "Semantic HTML", "content": "<p>...</p>" } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Одна статья: заголовок и HTML-разметка тела
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// HTML markup, injected into the page as-is or after sanitizing.
    pub content: String,
}

/// Весь JSON-ресурс со статьями, ключ = id статьи
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleCatalog {
    articles: HashMap<String, Article>,
}

impl ArticleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, id: impl Into<String>, article: Article) {
        self.articles.insert(id.into(), article);
    }

    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.get(id)
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}
