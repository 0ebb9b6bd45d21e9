use crate::commands::{CmdMessage, CmdResult};
use crate::components::search::{SearchOptions, SearchTrigger, SiteSearch};
use crate::dom::RenderedList;
use crate::error::Result;
use crate::source::ArticleSource;

/// Filters the articles of `source` by `query`, the way the search box on the blog
/// index does. An empty query lists every article.
pub fn run<A: ArticleSource>(source: &A, query: &str, options: SearchOptions) -> Result<CmdResult> {
    let mut search = match SiteSearch::create(source, RenderedList::new(), options)? {
        Some(search) => search,
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("No posts found."));
            return Ok(result);
        }
    };

    search.on_input(query);
    if options.trigger == SearchTrigger::EnterOnly {
        search.on_search_click();
    }

    let listed = search
        .view()
        .items()
        .iter()
        .filter_map(|id| search.articles().get(id.0).cloned())
        .collect::<Vec<_>>();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info(format!("No posts match \"{}\".", query)));
    }
    Ok(result.with_listed_articles(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::search::MatchFields;
    use crate::source::memory::fixtures::blog_index;
    use crate::source::memory::StaticSource;

    fn titles(result: &CmdResult) -> Vec<&str> {
        result
            .listed_articles
            .iter()
            .map(|a| a.title.as_str())
            .collect()
    }

    #[test]
    fn matches_titles_and_meta_in_page_order() {
        let result = run(&blog_index(), "rust", SearchOptions::default()).unwrap();
        assert_eq!(
            titles(&result),
            vec![
                "Getting Started with Rust",
                "Why I Moved to Rust",
                "Writing a Static Site"
            ]
        );
        assert!(result.messages.is_empty());
    }

    #[test]
    fn title_only_skips_meta() {
        let options = SearchOptions {
            fields: MatchFields::Title,
            ..SearchOptions::default()
        };
        let result = run(&blog_index(), "rust", options).unwrap();
        assert_eq!(result.listed_articles.len(), 2);
    }

    #[test]
    fn enter_trigger_still_searches() {
        let options = SearchOptions {
            trigger: SearchTrigger::EnterOnly,
            ..SearchOptions::default()
        };
        let result = run(&blog_index(), "TYPOGRAPHY", options).unwrap();
        assert_eq!(titles(&result), vec!["Notes on Typography"]);
    }

    #[test]
    fn empty_query_lists_everything() {
        let result = run(&blog_index(), "", SearchOptions::default()).unwrap();
        assert_eq!(result.listed_articles.len(), 5);
    }

    #[test]
    fn reports_no_match() {
        let result = run(&blog_index(), "haskell", SearchOptions::default()).unwrap();
        assert!(result.listed_articles.is_empty());
        assert_eq!(result.messages[0].content, "No posts match \"haskell\".");
    }

    #[test]
    fn reports_empty_source() {
        let result = run(&StaticSource::new("empty"), "x", SearchOptions::default()).unwrap();
        assert_eq!(result.messages[0].content, "No posts found.");
    }
}
