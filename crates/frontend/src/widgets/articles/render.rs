//! Markup written into article containers.

use contracts::domain::article::Article;

pub const NOT_FOUND_HTML: &str = "<p>Article not found.</p>";
pub const FAILED_HTML: &str = "<p>Failed to load article.</p>";

/// How far the fetched article markup is trusted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContentTrust {
    /// Run through an HTML sanitizer before injection.
    #[default]
    Sanitized,
    /// Injected verbatim.
    Trusted,
}

impl ContentTrust {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sanitized" => Some(ContentTrust::Sanitized),
            "trusted" => Some(ContentTrust::Trusted),
            _ => None,
        }
    }
}

/// Elements kept on top of ammonia's defaults. Article bodies demonstrate
/// widget markup, so interactive controls stay.
const EXTRA_TAGS: &[&str] = &["button", "details", "summary", "section", "nav", "main"];
const EXTRA_ATTRIBUTES: &[&str] = &["class", "id", "role", "hidden", "tabindex"];
const EXTRA_ATTRIBUTE_PREFIXES: &[&str] = &["aria-", "data-"];

fn sanitizer() -> ammonia::Builder<'static> {
    let mut builder = ammonia::Builder::default();
    builder
        .add_tags(EXTRA_TAGS)
        .add_generic_attributes(EXTRA_ATTRIBUTES)
        .add_generic_attribute_prefixes(EXTRA_ATTRIBUTE_PREFIXES);
    builder
}

pub fn render_article(article: &Article, trust: ContentTrust) -> String {
    let html = format!("<h3>{}</h3>{}", article.title, article.content);
    match trust {
        ContentTrust::Trusted => html,
        ContentTrust::Sanitized => sanitizer().clean(&html).to_string(),
    }
}
