//! Questions asked by `folio new`.
//!
//! One line per answer. The slug question offers the kebab-cased title as its
//! default, so pressing Enter accepts it. End of input answers every remaining
//! question with its default, which lets answers be piped in.

use colored::*;
use folio::error::Result;
use folio::model::PostAnswers;
use folio::slug::kebab_case;
use std::io::{BufRead, Write};

pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks one question. Returns the trimmed answer, or `default` when the answer is
    /// blank or input has ended.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> Result<String> {
        match default {
            Some(d) if !d.is_empty() => write!(
                self.output,
                "{} {} {} ",
                "?".green().bold(),
                question.bold(),
                format!("({})", d).dimmed()
            )?,
            _ => write!(self.output, "{} {} ", "?".green().bold(), question.bold())?,
        }
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 {
            writeln!(self.output)?;
        }

        let answer = line.trim();
        if answer.is_empty() {
            Ok(default.unwrap_or_default().to_string())
        } else {
            Ok(answer.to_string())
        }
    }

    pub fn ask_post(&mut self) -> Result<PostAnswers> {
        let title = self.ask("Title:", None)?;
        let slug = self.ask("Slug:", Some(&kebab_case(&title)))?;
        let description = self.ask("Description:", None)?;
        let image_url = self.ask("Image URL:", None)?;
        let tags = self.ask("Tags (space or comma separated):", None)?;

        Ok(PostAnswers {
            title,
            slug,
            description,
            image_url,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answers_for(input: &str) -> (PostAnswers, String) {
        let mut output = Vec::new();
        let answers = Prompter::new(Cursor::new(input.as_bytes()), &mut output)
            .ask_post()
            .unwrap();
        (answers, String::from_utf8(output).unwrap())
    }

    #[test]
    fn reads_one_answer_per_line() {
        let (answers, output) =
            answers_for("Hello World\n\nA test.\n/images/x.png\nfoo, bar  baz\n");
        assert_eq!(answers.title, "Hello World");
        assert_eq!(answers.slug, "hello-world");
        assert_eq!(answers.description, "A test.");
        assert_eq!(answers.image_url, "/images/x.png");
        assert_eq!(answers.tags, "foo, bar  baz");
        assert!(output.contains("Title:"));
        assert!(output.contains("(hello-world)"));
    }

    #[test]
    fn explicit_slug_wins() {
        let (answers, _) = answers_for("Hello World\nhi\n\n\n\n");
        assert_eq!(answers.slug, "hi");
    }

    #[test]
    fn end_of_input_uses_defaults() {
        let (answers, _) = answers_for("Only A Title\n");
        assert_eq!(answers.slug, "only-a-title");
        assert_eq!(answers.description, "");
        assert_eq!(answers.tags, "");
    }
}
