use super::ArticleSource;
use crate::error::Result;
use crate::model::ArticleRecord;

/// A fixed list of articles. Ids are renumbered to list positions on enumeration.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    name: String,
    articles: Vec<ArticleRecord>,
}

impl StaticSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            articles: Vec::new(),
        }
    }

    pub fn with_article(mut self, article: ArticleRecord) -> Self {
        self.articles.push(article);
        self
    }

    /// Adds an article with just a title and optional meta text.
    pub fn with(self, title: &str, meta: Option<&str>) -> Self {
        let id = self.articles.len();
        let mut article = ArticleRecord::new(id, title);
        article.meta = meta.map(str::to_string);
        self.with_article(article)
    }
}

impl ArticleSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn articles(&self) -> Result<Vec<ArticleRecord>> {
        Ok(self
            .articles
            .iter()
            .cloned()
            .enumerate()
            .map(|(i, mut a)| {
                a.id = crate::model::ArticleId(i);
                a
            })
            .collect())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// The article list of a small blog index, in page order.
    pub fn blog_index() -> StaticSource {
        StaticSource::new("articles")
            .with("Getting Started with Rust", Some("rust beginners"))
            .with("Dark Mode in CSS", Some("css design"))
            .with("Why I Moved to Rust", Some("opinion"))
            .with("Writing a Static Site", Some("jekyll rust tooling"))
            .with("Notes on Typography", None)
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::blog_index;
    use super::*;
    use crate::model::ArticleId;

    #[test]
    fn ids_follow_list_order() {
        let articles = blog_index().articles().unwrap();
        let ids: Vec<ArticleId> = articles.iter().map(|a| a.id).collect();
        assert_eq!(ids, (0..5).map(ArticleId).collect::<Vec<_>>());
    }

    #[test]
    fn renumbers_explicit_records() {
        let source = StaticSource::new("x").with_article(ArticleRecord::new(42, "Only"));
        assert_eq!(source.articles().unwrap()[0].id, ArticleId(0));
    }
}
