//! Stand-ins for the page elements the components touch.
//!
//! Components never query a document. Whatever they mutate is handed to them: a
//! [`ClassList`] for elements whose classes they toggle, a [`ListView`] for the
//! article list they re-render. A browser binding implements the same shapes over
//! real elements; tests use these directly.

use crate::model::{ArticleId, ArticleRecord};

/// An ordered set of class names, as on an element's `classList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    classes: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for class in classes {
            list.add(&class.into());
        }
        list
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Flips `class` and returns whether it is now present.
    pub fn toggle(&mut self, class: &str) -> bool {
        if self.contains(class) {
            self.remove(class);
            false
        } else {
            self.add(class);
            true
        }
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The container the article search renders into.
pub trait ListView {
    /// Remove every rendered item.
    fn clear(&mut self);

    /// Append one item after the ones already rendered.
    fn append(&mut self, article: &ArticleRecord);
}

/// A [`ListView`] that records which articles are rendered, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedList {
    items: Vec<ArticleId>,
}

impl RenderedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[ArticleId] {
        &self.items
    }
}

impl ListView for RenderedList {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn append(&mut self, article: &ArticleRecord) {
        self.items.push(article.id);
    }
}
