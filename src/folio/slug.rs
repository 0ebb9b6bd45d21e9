//! Text helpers shared by the scaffolder and the page components.
//!
//! - [`kebab_case`]: slugs, filenames and derived heading ids
//! - [`split_tags`]: the raw tags answer into tokens
//! - [`id_to_title`]: heading ids back into link text

use deunicode::deunicode;

/// Converts arbitrary text into lower-case words joined by single hyphens.
///
/// Words break on any run of non-alphanumeric characters, on a lower-to-upper case
/// change (`helloWorld`), before the last capital of an acronym (`XMLHttp`) and
/// between letters and digits (`v2`). Accented and other non-ASCII letters are
/// transliterated to ASCII first (`Café` -> `cafe`, `Straße` -> `strasse`), then
/// apostrophes are dropped, so `don't` stays one word.
///
/// The output only contains lower-case alphanumeric words and hyphens, so running it
/// again yields the same string.
pub fn kebab_case(input: &str) -> String {
    words(input).join("-")
}

fn words(input: &str) -> Vec<String> {
    let cleaned: String = deunicode(input)
        .chars()
        .filter(|c| !matches!(c, '\'' | '’'))
        .collect();

    let mut raw = Vec::new();
    for segment in cleaned
        .split(|c: char| !c.is_alphanumeric())
        .filter(|s| !s.is_empty())
    {
        split_segment(segment, &mut raw);
    }

    raw.into_iter()
        .map(|w| {
            w.to_lowercase()
                .chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|w| !w.is_empty())
        .collect()
}

fn split_segment(segment: &str, out: &mut Vec<String>) {
    let chars: Vec<char> = segment.chars().collect();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && !current.is_empty() && is_boundary(chars[i - 1], c, chars.get(i + 1).copied())
        {
            out.push(std::mem::take(&mut current));
        }
        current.push(c);
    }

    if !current.is_empty() {
        out.push(current);
    }
}

fn is_boundary(prev: char, cur: char, next: Option<char>) -> bool {
    (prev.is_lowercase() && cur.is_uppercase())
        || (prev.is_uppercase() && cur.is_uppercase() && next.is_some_and(|n| n.is_lowercase()))
        || (prev.is_alphabetic() && cur.is_numeric())
        || (prev.is_numeric() && cur.is_alphabetic())
}

/// Splits a raw tags answer on any run of whitespace and/or commas.
/// Empty tokens are dropped; order is preserved.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns a heading id into link text: hyphens become spaces and the first
/// character is upper-cased (`getting-started` -> `Getting started`).
pub fn id_to_title(id: &str) -> String {
    let normalised = id.split('-').collect::<Vec<_>>().join(" ");
    let mut chars = normalised.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kebab_basic_title() {
        assert_eq!(kebab_case("Hello World"), "hello-world");
        assert_eq!(kebab_case("  Hello,   World!  "), "hello-world");
    }

    #[test]
    fn kebab_splits_case_changes_and_digits() {
        assert_eq!(kebab_case("helloWorld"), "hello-world");
        assert_eq!(kebab_case("XMLHttpRequest"), "xml-http-request");
        assert_eq!(kebab_case("Rust 2024 edition"), "rust-2024-edition");
        assert_eq!(kebab_case("v2"), "v-2");
    }

    #[test]
    fn kebab_drops_apostrophes_and_separators() {
        assert_eq!(kebab_case("Don't Panic"), "dont-panic");
        assert_eq!(kebab_case("__FOO_BAR__"), "foo-bar");
        assert_eq!(kebab_case("a -- b"), "a-b");
    }

    #[test]
    fn kebab_folds_accents_to_ascii() {
        assert_eq!(kebab_case("Café Notes"), "cafe-notes");
        assert_eq!(kebab_case("Straße"), "strasse");
        assert_eq!(kebab_case("Ünïcödé Straße"), "unicode-strasse");
        assert_eq!(kebab_case("Crème Brûlée’s Secret"), "creme-brulees-secret");
    }

    #[test]
    fn kebab_of_nothing_is_empty() {
        assert_eq!(kebab_case(""), "");
        assert_eq!(kebab_case("!!! ---"), "");
    }

    #[test]
    fn kebab_is_idempotent() {
        let inputs = [
            "Hello World",
            "helloWorld",
            "XMLHttpRequest",
            "Rust 2024 edition",
            "Don't Panic",
            "already-kebab-case",
            "Ünïcödé Straße",
            "Café Notes",
            "Straße",
            "İstanbul Notes",
            "mixed_Snake-andKebab 42things",
        ];
        for input in inputs {
            let once = kebab_case(input);
            assert_eq!(kebab_case(&once), once, "not idempotent for {:?}", input);
        }
    }

    #[test]
    fn split_tags_handles_commas_and_whitespace() {
        assert_eq!(split_tags("foo, bar  baz"), vec!["foo", "bar", "baz"]);
        assert_eq!(split_tags(",foo,,bar,\tbaz\n"), vec!["foo", "bar", "baz"]);
    }

    #[test]
    fn split_tags_of_blank_answer_is_empty() {
        assert!(split_tags("").is_empty());
        assert!(split_tags(" ,, ").is_empty());
    }

    #[test]
    fn id_to_title_capitalises_first_letter() {
        assert_eq!(id_to_title("getting-started"), "Getting started");
        assert_eq!(id_to_title("faq"), "Faq");
        assert_eq!(id_to_title(""), "");
    }
}
