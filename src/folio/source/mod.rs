//! # Article Sources
//!
//! The search component needs "the list of articles on the page". Rather than
//! querying a document, it asks an [`ArticleSource`]: a named provider of
//! record-like views, enumerated once when the component is built.
//!
//! - [`posts::PostsDir`]: the Markdown posts of a blog checkout, newest first
//! - [`memory::StaticSource`]: a fixed list, for tests and embedding

use crate::error::Result;
use crate::model::ArticleRecord;

pub mod memory;
pub mod posts;

pub trait ArticleSource {
    /// Name of the list, used in logs and messages
    fn name(&self) -> &str;

    /// Enumerate the records in document order. Ids are positions in this list.
    fn articles(&self) -> Result<Vec<ArticleRecord>>;
}
