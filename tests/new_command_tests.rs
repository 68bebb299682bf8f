//! Integration tests for `news-fusion new`

mod common;

use common::TestWorkspace;
use predicates::prelude::*;

const PIXEL_PATH: &str = "web/content/articles/technology/2026-02-16-pixel-10-review.md";

fn new_pixel(workspace: &TestWorkspace) -> assert_cmd::assert::Assert {
    workspace
        .cmd()
        .args([
            "new",
            "--title",
            "Pixel 10 review",
            "--category",
            "technology",
            "--source-url",
            "https://9to5google.com/2026/02/16/pixel",
            "--published-at",
            "2026-02-16T08:10:00Z",
        ])
        .assert()
}

#[test]
fn test_new_named_flags() {
    let workspace = TestWorkspace::with_registries();

    new_pixel(&workspace)
        .success()
        .stdout(predicate::str::contains("Created: "))
        .stdout(predicate::str::contains("2026-02-16-pixel-10-review.md"));

    assert_eq!(
        workspace.read_file(PIXEL_PATH),
        "---\n\
         title: \"Pixel 10 review\"\n\
         category: \"technology\"\n\
         source: \"9to5google\"\n\
         publishedAt: \"2026-02-16T08:10:00Z\"\n\
         sourceName: \"Unknown Source\"\n\
         sourceUrl: \"https://9to5google.com/2026/02/16/pixel\"\n\
         thumbnail: \"\"\n\
         summary: \"\"\n\
         ---\n\
         \n\
         Write your markdown content here.\n"
    );
}

#[test]
fn test_new_positional_words() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "--published-at",
            "2026-02-16",
            "Pixel",
            "10",
            "review",
            "technology",
            "https://9to5google.com/x",
            "9to5Google",
            "Hands",
            "on",
        ])
        .assert()
        .success();

    let content = workspace.read_file(PIXEL_PATH);
    assert!(content.contains("title: \"Pixel 10 review\""));
    assert!(content.contains("sourceName: \"9to5Google\""));
    assert!(content.contains("summary: \"Hands on\""));
}

#[test]
fn test_new_refuses_to_overwrite() {
    let workspace = TestWorkspace::with_registries();
    new_pixel(&workspace).success();
    workspace.write_file(PIXEL_PATH, "edited by hand\n");

    new_pixel(&workspace)
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: File already exists"));

    assert_eq!(workspace.read_file(PIXEL_PATH), "edited by hand\n");
}

#[test]
fn test_new_missing_arguments() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args(["new", "--title", "Only a title"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing required arguments: category, sourceUrl"))
        .stderr(predicate::str::contains("Usage:"));

    assert!(workspace.files_under("web/content/articles").is_empty());
}

#[test]
fn test_new_invalid_category() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "--title",
            "Match report",
            "--category",
            "sports",
            "--source-url",
            "https://9to5google.com/x",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category: sports"))
        .stderr(predicate::str::contains("technology, science"));
}

#[test]
fn test_new_unresolvable_source() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "--title",
            "Elsewhere",
            "--category",
            "technology",
            "--source-url",
            "https://example.com/x",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid source: other"))
        .stderr(predicate::str::contains("9to5google, verge"));
}

#[test]
fn test_new_source_name_alone_is_rejected() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "--title",
            "Syndicated",
            "--category",
            "technology",
            "--source-url",
            "https://news.example.com/x",
            "--source-name",
            "The Verge",
            "--published-at",
            "2026-03-01",
        ])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid source: other"))
        .stderr(predicate::str::contains("pass --source verge"));

    assert!(workspace.files_under("web/content/articles").is_empty());
}

#[test]
fn test_new_explicit_source_overrides_domain() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "--title",
            "Override",
            "--category",
            "science",
            "--source-url",
            "https://9to5google.com/x",
            "--source",
            "verge",
            "--published-at",
            "2026-03-01",
        ])
        .assert()
        .success();

    let content = workspace.read_file("web/content/articles/science/2026-03-01-override.md");
    assert!(content.contains("source: \"verge\""));
}

#[test]
fn test_new_explicit_source_is_case_sensitive() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "--title",
            "Override",
            "--category",
            "science",
            "--source-url",
            "https://9to5google.com/x",
            "--source",
            "VERGE",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid source: VERGE"));
}

#[test]
fn test_new_flags_after_positional_words() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "Pixel",
            "technology",
            "https://9to5google.com/x",
            "--published-at",
            "2020-01-01T00:00:00Z",
        ])
        .assert()
        .success();

    assert_eq!(
        workspace.files_under("web/content/articles"),
        vec!["web/content/articles/technology/2020-01-01-pixel.md"]
    );
    let content = workspace.read_file("web/content/articles/technology/2020-01-01-pixel.md");
    assert!(content.contains("publishedAt: \"2020-01-01T00:00:00Z\""));
    assert!(content.contains("sourceName: \"Unknown Source\""));
    assert!(content.contains("summary: \"\""));
}

#[test]
fn test_new_invalid_date() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "--title",
            "Bad date",
            "--category",
            "technology",
            "--source-url",
            "https://9to5google.com/x",
            "--published-at",
            "yesterday",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid publishedAt: yesterday"));
}

#[test]
fn test_new_escapes_quotes_in_title() {
    let workspace = TestWorkspace::with_registries();

    workspace
        .cmd()
        .args([
            "new",
            "--title",
            "The \"best\" phone",
            "--category",
            "technology",
            "--source-url",
            "https://9to5google.com/x",
            "--published-at",
            "2026-02-16",
        ])
        .assert()
        .success();

    let content =
        workspace.read_file("web/content/articles/technology/2026-02-16-the-best-phone.md");
    assert!(content.contains(r#"title: "The \"best\" phone""#));
}

#[test]
fn test_new_then_build_round_trip() {
    let workspace = TestWorkspace::with_registries();
    new_pixel(&workspace).success();

    workspace
        .cmd()
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built 1 articles"));

    let index = workspace.read_file("web/dist/index.html");
    assert!(index.contains("<h2>Pixel 10 review</h2>"));
    assert!(index.contains("9to5Google · 2026-02-16T08:10:00Z"));
    assert!(index.contains("<p>Write your markdown content here.</p>"));
}
