use crate::shared::error::WidgetError;
use async_trait::async_trait;
use contracts::domain::article::ArticleCatalog;
use gloo_net::http::Request;

/// Where article content comes from.
#[async_trait(?Send)]
pub trait ArticleSource {
    async fn fetch_catalog(&self) -> Result<ArticleCatalog, WidgetError>;
}

/// Reads the static JSON document over HTTP, fresh on every call.
#[derive(Debug, Clone)]
pub struct HttpArticleSource {
    url: String,
}

impl HttpArticleSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait(?Send)]
impl ArticleSource for HttpArticleSource {
    async fn fetch_catalog(&self) -> Result<ArticleCatalog, WidgetError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| WidgetError::Request(e.to_string()))?;

        if !response.ok() {
            return Err(WidgetError::HttpStatus(response.status()));
        }

        let catalog: ArticleCatalog = response
            .json()
            .await
            .map_err(|e| WidgetError::Parse(e.to_string()))?;

        Ok(catalog)
    }
}
