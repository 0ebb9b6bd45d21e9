//! # Article Search
//!
//! [`search`] is the engine: a case-insensitive substring filter over the article
//! list that keeps page order and does no ranking. [`SiteSearch`] is the page
//! behavior around it: it holds the query, decides which events trigger a search,
//! and re-renders the whole list on every search.
//!
//! Re-rendering clears the list view and appends each match in order. There is no
//! diffing; blog indexes are small.

use crate::dom::ListView;
use crate::error::Result;
use crate::model::{ArticleId, ArticleRecord};
use crate::source::ArticleSource;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which text of an article the query is matched against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchFields {
    Title,
    #[default]
    TitleAndMeta,
}

/// Which input events run a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchTrigger {
    /// Every change to the input re-runs the search.
    #[default]
    Live,
    /// Only Enter and the search button run it.
    #[serde(rename = "enter")]
    EnterOnly,
}

impl fmt::Display for SearchTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchTrigger::Live => f.write_str("live"),
            SearchTrigger::EnterOnly => f.write_str("enter"),
        }
    }
}

impl FromStr for SearchTrigger {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "live" => Ok(SearchTrigger::Live),
            "enter" => Ok(SearchTrigger::EnterOnly),
            other => Err(format!(
                "Unknown search trigger: {} (expected live or enter)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    pub trigger: SearchTrigger,
    pub fields: MatchFields,
}

/// Keys the search input reacts to. Everything else is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Other,
}

/// Returns the articles whose title (or meta text, with
/// [`MatchFields::TitleAndMeta`]) contains `query`, ignoring case.
///
/// The result keeps the order of `articles`. An empty query matches everything.
pub fn search<'a>(
    query: &str,
    articles: &'a [ArticleRecord],
    fields: MatchFields,
) -> Vec<&'a ArticleRecord> {
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|article| matches(article, &needle, fields))
        .collect()
}

fn matches(article: &ArticleRecord, needle: &str, fields: MatchFields) -> bool {
    if article.title.to_lowercase().contains(needle) {
        return true;
    }
    match (fields, &article.meta) {
        (MatchFields::TitleAndMeta, Some(meta)) => meta.to_lowercase().contains(needle),
        _ => false,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub query: String,
    pub matches: Vec<ArticleId>,
}

/// The search box, its buttons, and the article list they filter.
pub struct SiteSearch<V: ListView> {
    articles: Vec<ArticleRecord>,
    state: SearchState,
    view: V,
    options: SearchOptions,
}

impl<V: ListView> SiteSearch<V> {
    /// Enumerates the articles once. Returns `None` when there are none, which
    /// leaves the page untouched.
    pub fn create<A: ArticleSource>(
        source: &A,
        view: V,
        options: SearchOptions,
    ) -> Result<Option<Self>> {
        let articles = source.articles()?;
        if articles.is_empty() {
            debug!("No articles in {}, search disabled", source.name());
            return Ok(None);
        }

        let matches = articles.iter().map(|a| a.id).collect();
        Ok(Some(Self {
            articles,
            state: SearchState {
                query: String::new(),
                matches,
            },
            view,
            options,
        }))
    }

    /// The input's value changed.
    pub fn on_input(&mut self, value: &str) {
        self.state.query = value.to_string();
        if self.options.trigger == SearchTrigger::Live {
            self.search();
        }
    }

    /// A key was pressed in the input.
    pub fn on_key(&mut self, key: Key) {
        if key == Key::Enter {
            self.search();
        }
    }

    pub fn on_search_click(&mut self) {
        self.search();
    }

    /// The clear button empties the query and shows every article again.
    pub fn on_clear(&mut self) {
        self.state.query.clear();
        self.search();
    }

    /// Recomputes the matches for the current query and re-renders the list.
    pub fn search(&mut self) -> &[ArticleId] {
        let found = search(&self.state.query, &self.articles, self.options.fields);

        self.view.clear();
        for article in &found {
            self.view.append(article);
        }

        self.state.matches = found.iter().map(|a| a.id).collect();
        &self.state.matches
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn articles(&self) -> &[ArticleRecord] {
        &self.articles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::RenderedList;
    use crate::source::memory::fixtures::blog_index;
    use crate::source::memory::StaticSource;

    fn all_articles() -> Vec<ArticleRecord> {
        blog_index().articles().unwrap()
    }

    fn titles<'a>(found: &[&'a ArticleRecord]) -> Vec<&'a str> {
        found.iter().map(|a| a.title.as_str()).collect()
    }

    fn ids(found: &[&ArticleRecord]) -> Vec<ArticleId> {
        found.iter().map(|a| a.id).collect()
    }

    #[test]
    fn empty_query_matches_everything_in_order() {
        let articles = all_articles();
        let found = search("", &articles, MatchFields::TitleAndMeta);
        assert_eq!(ids(&found), articles.iter().map(|a| a.id).collect::<Vec<_>>());
    }

    #[test]
    fn matching_ignores_case() {
        let articles = all_articles();
        let upper = search("RUST", &articles, MatchFields::Title);
        let lower = search("rust", &articles, MatchFields::Title);
        assert_eq!(ids(&upper), ids(&lower));
        assert_eq!(
            titles(&lower),
            vec!["Getting Started with Rust", "Why I Moved to Rust"]
        );
    }

    #[test]
    fn meta_only_counts_when_enabled() {
        let articles = all_articles();
        let title_only = search("jekyll", &articles, MatchFields::Title);
        let with_meta = search("jekyll", &articles, MatchFields::TitleAndMeta);
        assert!(title_only.is_empty());
        assert_eq!(titles(&with_meta), vec!["Writing a Static Site"]);
    }

    #[test]
    fn results_are_an_ordered_subset() {
        let articles = all_articles();
        for query in ["", "r", "rust", "s", "zzz", "O"] {
            let found = search(query, &articles, MatchFields::TitleAndMeta);
            let positions: Vec<usize> = found.iter().map(|a| a.id.0).collect();
            assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", query);
            assert!(positions.iter().all(|p| *p < articles.len()));
        }
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        let articles = all_articles();
        assert!(search("haskell", &articles, MatchFields::TitleAndMeta).is_empty());
    }

    #[test]
    fn empty_source_disables_search() {
        let source = StaticSource::new("articles");
        let search = SiteSearch::create(&source, RenderedList::new(), SearchOptions::default())
            .unwrap();
        assert!(search.is_none());
    }

    #[test]
    fn live_trigger_renders_on_every_input() {
        let mut search =
            SiteSearch::create(&blog_index(), RenderedList::new(), SearchOptions::default())
                .unwrap()
                .unwrap();

        search.on_input("r");
        let after_r = search.view().items().to_vec();
        search.on_input("rust");
        assert_eq!(search.view().items(), &[ArticleId(0), ArticleId(2), ArticleId(3)]);
        assert!(after_r.len() >= search.view().items().len());
        assert_eq!(search.state().matches, search.view().items());
    }

    #[test]
    fn enter_only_trigger_waits_for_enter_or_button() {
        let options = SearchOptions {
            trigger: SearchTrigger::EnterOnly,
            fields: MatchFields::Title,
        };
        let mut search = SiteSearch::create(&blog_index(), RenderedList::new(), options)
            .unwrap()
            .unwrap();

        search.on_input("dark");
        assert!(search.view().items().is_empty());
        assert_eq!(search.state().matches.len(), 5);

        search.on_key(Key::Other);
        assert!(search.view().items().is_empty());

        search.on_key(Key::Enter);
        assert_eq!(search.view().items(), &[ArticleId(1)]);

        search.on_input("notes");
        search.on_search_click();
        assert_eq!(search.view().items(), &[ArticleId(4)]);
    }

    #[test]
    fn no_match_clears_rendered_list() {
        let mut search =
            SiteSearch::create(&blog_index(), RenderedList::new(), SearchOptions::default())
                .unwrap()
                .unwrap();
        search.on_input("rust");
        assert!(!search.view().items().is_empty());
        search.on_input("haskell");
        assert!(search.view().items().is_empty());
        assert!(search.state().matches.is_empty());
    }

    #[test]
    fn clear_restores_full_list_in_order() {
        let mut search =
            SiteSearch::create(&blog_index(), RenderedList::new(), SearchOptions::default())
                .unwrap()
                .unwrap();
        search.on_input("css");
        assert_eq!(search.view().items(), &[ArticleId(1)]);

        search.on_clear();
        assert_eq!(search.state().query, "");
        assert_eq!(
            search.view().items(),
            &(0..5).map(ArticleId).collect::<Vec<_>>()[..]
        );
    }

    #[test]
    fn trigger_names_round_trip_through_str() {
        assert_eq!("live".parse::<SearchTrigger>().unwrap(), SearchTrigger::Live);
        assert_eq!("enter".parse::<SearchTrigger>().unwrap(), SearchTrigger::EnterOnly);
        assert_eq!(SearchTrigger::EnterOnly.to_string(), "enter");
        assert!("keyup".parse::<SearchTrigger>().is_err());
    }
}
