use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

fn folio(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("folio").unwrap();
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("FOLIO_LOG");
    cmd
}

fn find_post(dir: &Path, suffix: &str) -> Option<PathBuf> {
    fs::read_dir(dir)
        .ok()?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .find(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(suffix))
        })
}

#[test]
fn test_new_writes_dated_post() {
    let temp_dir = tempfile::tempdir().unwrap();
    folio(temp_dir.path()).arg("init").assert().success();

    folio(temp_dir.path())
        .arg("new")
        .write_stdin("Hello World\n\nA test.\n/images/x.png\nfoo, bar  baz\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created post:"));

    let post = find_post(&temp_dir.path().join("_posts"), "-hello-world.md")
        .expect("post was not written");
    let name = post.file_name().unwrap().to_str().unwrap().to_string();
    assert_eq!(name.len(), "2024-01-02-hello-world.md".len());

    let content = fs::read_to_string(&post).unwrap();
    assert_eq!(
        content,
        "---\ntitle: Hello World\ndescription: >-\n  A test.\nimage: /images/x.png\ntags:\n  - foo\n  - bar\n  - baz\n---\n"
    );
}

#[test]
fn test_new_refuses_to_overwrite() {
    let temp_dir = tempfile::tempdir().unwrap();
    let drafts = temp_dir.path().join("drafts");
    fs::create_dir(&drafts).unwrap();
    let answers = "Same Title\n\n\n\n\n";

    folio(temp_dir.path())
        .args(["new", "--output-dir", "drafts"])
        .write_stdin(answers)
        .assert()
        .success();
    let post = find_post(&drafts, "-same-title.md").unwrap();
    fs::write(&post, "edited by hand").unwrap();

    folio(temp_dir.path())
        .args(["new", "--output-dir", "drafts"])
        .write_stdin(answers)
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(fs::read_to_string(&post).unwrap(), "edited by hand");

    folio(temp_dir.path())
        .args(["new", "--output-dir", "drafts", "--force"])
        .write_stdin(answers)
        .assert()
        .success();
    assert!(fs::read_to_string(&post)
        .unwrap()
        .starts_with("---\ntitle: Same Title\n"));
}

#[test]
fn test_new_without_posts_dir_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    folio(temp_dir.path())
        .arg("new")
        .write_stdin("Hello\n\n\n\n\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_search_filters_posts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let posts = temp_dir.path().join("_posts");
    fs::create_dir(&posts).unwrap();
    fs::write(
        posts.join("2024-01-02-rust-notes.md"),
        "---\ntitle: Rust Notes\ndescription: Ownership basics\n---\nBody\n",
    )
    .unwrap();
    fs::write(
        posts.join("2024-02-03-css-tricks.md"),
        "---\ntitle: CSS Tricks\ntags: [design, rust-free]\n---\nBody\n",
    )
    .unwrap();
    fs::write(posts.join("2023-12-01-untitled-thoughts.md"), "No front matter\n").unwrap();

    folio(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("CSS Tricks"))
        .stdout(predicate::str::contains("Rust Notes"))
        .stdout(predicate::str::contains("Untitled thoughts"));

    folio(temp_dir.path())
        .args(["search", "ownership"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust Notes"))
        .stdout(predicate::str::contains("CSS Tricks").not());

    folio(temp_dir.path())
        .args(["search", "haskell"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts match \"haskell\"."));
}

#[test]
fn test_theme_toggle_persists() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout("light\n");

    folio(temp_dir.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to dark"));

    folio(temp_dir.path())
        .arg("theme")
        .assert()
        .success()
        .stdout("dark\n");

    folio(temp_dir.path())
        .args(["theme", "toggle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme set to light"));
}

#[test]
fn test_toc_and_labels() {
    let temp_dir = tempfile::tempdir().unwrap();
    fs::write(
        temp_dir.path().join("post.md"),
        "---\ntitle: Post\n---\n## Getting Started\n\n```rust\nfn main() {}\n```\n\n### Next Steps\n",
    )
    .unwrap();

    folio(temp_dir.path())
        .args(["toc", "post.md"])
        .assert()
        .success()
        .stdout("  📍 Getting started  #getting-started\n    📍 Next steps  #next-steps\n");

    folio(temp_dir.path())
        .args(["labels", "post.md"])
        .assert()
        .success()
        .stdout("block 1  Rust (rust)\n");
}

#[test]
fn test_share_fallback_and_native() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .args(["share", "https://blog.example/p"])
        .assert()
        .success()
        .stdout("open  http://twitter.com/intent/tweet?url=https://blog.example/p\n");

    folio(temp_dir.path())
        .args(["share", "--native", "https://blog.example/p"])
        .assert()
        .success()
        .stdout("share  https://blog.example/p\n");
}

#[test]
fn test_scroll_uses_configured_threshold() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .args(["scroll", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header     compact"))
        .stdout(predicate::str::contains("header-content--mini"));

    folio(temp_dir.path())
        .args(["config", "scroll-threshold", "80"])
        .assert()
        .success();

    folio(temp_dir.path())
        .args(["scroll", "60"])
        .assert()
        .success()
        .stdout(predicate::str::contains("header     full"))
        .stdout(predicate::str::contains("threshold  80px"))
        .stdout(predicate::str::contains("--mini").not());
}

#[test]
fn test_config_set_and_get() {
    let temp_dir = tempfile::tempdir().unwrap();

    folio(temp_dir.path())
        .args(["config", "scroll-threshold", "80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scroll-threshold set to 80"));

    folio(temp_dir.path())
        .args(["config", "scroll-threshold"])
        .assert()
        .success()
        .stdout("80\n");

    folio(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("posts-dir"))
        .stdout(predicate::str::contains("search-trigger    live"));

    folio(temp_dir.path())
        .args(["config", "search-trigger", "keyup"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown search trigger"));

    folio(temp_dir.path())
        .args(["config", "colour"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: colour"));

    folio(temp_dir.path())
        .args(["config", "search-trigger"])
        .assert()
        .success()
        .stdout("live\n");
}

#[test]
fn test_help_lists_groups() {
    let temp_dir = tempfile::tempdir().unwrap();
    folio(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Author Commands:"))
        .stdout(predicate::str::contains("Page Commands:"));
}
