//! Integration tests for vault-widget.

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::time::{Duration, UNIX_EPOCH};
use tempfile::TempDir;
use vault_widget::bookmark::{BookmarkResolver, BookmarkStore};
use vault_widget::core::SizeClass;
use vault_widget::io::FsReader;
use vault_widget::widget::{
    CONTENT_COLOR, DEFAULT_BOOKMARK, MISSING_BOOKMARK_MESSAGE, create_widget,
};

/// Helper to create a vault note and a store bookmarking it.
fn create_vault(content: &str) -> (BookmarkStore, PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let note = temp_dir.path().join("Today.md");
    std::fs::write(&note, content).expect("Failed to write note");

    let store_path = temp_dir.path().join("bookmarks.json");
    let mut store = BookmarkStore::open(&store_path).expect("Failed to open store");
    store
        .add(DEFAULT_BOOKMARK, &note)
        .expect("Failed to add bookmark");
    store.save().expect("Failed to save store");
    (store, store_path, temp_dir)
}

#[test]
fn test_formatter_examples() {
    use vault_widget::format;

    assert_eq!(format(""), "");
    assert_eq!(format("   \n\nHello"), "Hello");
    assert_eq!(format("- [x] Done"), "☑ Done");
    assert_eq!(format("- [ ] Todo"), "□ Todo");
    assert_eq!(format("- [X] A\n- [y] B\n- [] C"), "☑ A\n□ B\n□ C");
    assert_eq!(
        format("- First\n  - Nested\n- Third"),
        "• First\n  • Nested\n• Third"
    );
    assert_eq!(format("☑ Done"), "☑ Done");
    assert_eq!(format("- [x] A - [ ] B"), "☑ A □ B");
}

#[test]
fn test_render_from_reopened_store() {
    let (_store, store_path, _temp) = create_vault("\n\n# Today\n- [x] run\n- [ ] read\n");

    let store = BookmarkStore::open(&store_path).expect("reopen failed");
    assert!(store.bookmark_exists(DEFAULT_BOOKMARK));

    let widget = create_widget(
        &store,
        &FsReader,
        DEFAULT_BOOKMARK,
        Some(SizeClass::Large),
        UNIX_EPOCH + Duration::from_secs(10),
    );

    let text = widget.texts().next().expect("widget has text");
    assert_eq!(text.text, "# Today\n☑ run\n□ read\n");
    assert_eq!(text.color, CONTENT_COLOR);
    assert_eq!(widget.refresh_after, 110);
}

#[test]
fn test_render_deleted_note_is_empty() {
    let (store, _store_path, temp) = create_vault("- [ ] gone soon");
    std::fs::remove_file(temp.path().join("Today.md")).expect("remove failed");

    let widget = create_widget(&store, &FsReader, DEFAULT_BOOKMARK, None, UNIX_EPOCH);
    let text = widget.texts().next().expect("widget has text");
    assert_eq!(text.text, "");
}

#[test]
fn test_render_other_bookmark_missing() {
    let (store, _store_path, _temp) = create_vault("note");

    let widget = create_widget(&store, &FsReader, "Inbox", None, UNIX_EPOCH);
    let text = widget.texts().next().expect("widget has text");
    assert_eq!(text.text, MISSING_BOOKMARK_MESSAGE);
}

mod property_tests {
    use proptest::prelude::*;
    use vault_widget::format;

    fn list_item() -> impl Strategy<Value = String> {
        (0usize..4, 0u8..3, "[a-z]{1,8}").prop_map(|(indent, kind, word)| {
            let marker = match kind {
                0 => "- [x] ",
                1 => "- [ ] ",
                _ => "- ",
            };
            format!("{}{marker}{word}", " ".repeat(indent))
        })
    }

    proptest! {
        #[test]
        fn output_has_no_leading_whitespace(raw in "\\PC*") {
            let formatted = format(&raw);
            prop_assert!(!formatted.starts_with(char::is_whitespace));
        }

        #[test]
        fn text_without_dashes_is_only_trimmed(raw in "[a-z \t\n\\[\\]xX]{0,80}") {
            prop_assert_eq!(format(&raw), raw.trim_start());
        }

        #[test]
        fn formatted_lists_are_stable(items in prop::collection::vec(list_item(), 1..12)) {
            let raw = items.join("\n");
            let once = format(&raw);
            prop_assert_eq!(format(&once), once.clone());
            prop_assert!(!once.contains("- "));
        }

        #[test]
        fn task_markers_are_counted(items in prop::collection::vec(list_item(), 1..12)) {
            let raw = items.join("\n");
            let formatted = format(&raw);
            let checked = raw.matches("- [x]").count();
            let open = raw.matches("- [ ]").count();
            prop_assert_eq!(formatted.matches('☑').count(), checked);
            prop_assert_eq!(formatted.matches('□').count(), open);
            prop_assert_eq!(formatted.lines().count(), raw.lines().count());
        }
    }
}

/// Binary integration tests.
mod cli_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use tempfile::TempDir;
    use vault_widget::widget::MISSING_BOOKMARK_MESSAGE;

    fn vault_widget(store: &std::path::Path) -> Command {
        let mut cmd = Command::cargo_bin("vault-widget").expect("binary exists");
        cmd.env("VAULT_WIDGET_BOOKMARKS", store)
            .env_remove("VAULT_WIDGET_PARAMETER")
            .env_remove("RUST_LOG");
        cmd
    }

    #[test]
    fn test_render_without_bookmark() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = temp_dir.path().join("bookmarks.json");

        vault_widget(&store)
            .args(["render", "--size", "medium"])
            .assert()
            .success()
            .stdout(predicate::str::contains("╭─ medium"))
            .stdout(predicate::str::contains("Bookmark does not exist."));
    }

    #[test]
    fn test_bookmark_then_render() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = temp_dir.path().join("config/bookmarks.json");
        let note = temp_dir.path().join("Today.md");
        std::fs::write(&note, "\n- [x] Done\n- [ ] Todo\n  - sub\n").expect("write note");

        vault_widget(&store)
            .args(["bookmark", "add", "Daily"])
            .arg(&note)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("Added bookmark: Daily"));

        vault_widget(&store)
            .args(["render", "Daily", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""text": "☑ Done\n□ Todo\n  • sub\n""#))
            .stdout(predicate::str::contains(r##""color": "#ED71DB""##));

        vault_widget(&store)
            .args(["bookmark", "ls"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Daily"));
    }

    #[test]
    fn test_widget_parameter_from_env() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = temp_dir.path().join("bookmarks.json");

        vault_widget(&store)
            .env("VAULT_WIDGET_PARAMETER", "Inbox")
            .args(["render", "--format", "json"])
            .assert()
            .success()
            .stdout(predicate::str::contains(MISSING_BOOKMARK_MESSAGE));
    }

    #[test]
    fn test_format_stdin() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = temp_dir.path().join("bookmarks.json");

        vault_widget(&store)
            .arg("format")
            .write_stdin("  - [X] A\n- [y] B\n- [] C")
            .assert()
            .success()
            .stdout("☑ A\n□ B\n□ C\n");
    }

    #[test]
    fn test_remove_missing_bookmark_fails() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = temp_dir.path().join("bookmarks.json");

        vault_widget(&store)
            .args(["bookmark", "remove", "Nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("bookmark not found: Nope"));
    }

    #[test]
    fn test_json_errors_on_stdout() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = temp_dir.path().join("bookmarks.json");

        vault_widget(&store)
            .args(["bookmark", "show", "Nope", "--format", "json"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("\"error\""));
    }

    #[test]
    fn test_remove_bookmark_json() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = temp_dir.path().join("bookmarks.json");
        let note = temp_dir.path().join("Today.md");
        std::fs::write(&note, "- [ ] x").expect("write note");

        vault_widget(&store)
            .args(["bookmark", "add", "Daily"])
            .arg(&note)
            .assert()
            .success();

        let output = vault_widget(&store)
            .args(["bookmark", "remove", "Daily", "--format", "json"])
            .output()
            .expect("run remove");
        assert!(output.status.success());

        let value: serde_json::Value =
            serde_json::from_slice(&output.stdout).expect("remove prints JSON");
        assert_eq!(value["name"], "Daily");
        assert!(value["path"].as_str().is_some_and(|p| p.ends_with("Today.md")));
    }

    #[test]
    fn test_render_rejects_unknown_size() {
        let temp_dir = TempDir::new().expect("temp dir");
        let store = temp_dir.path().join("bookmarks.json");

        vault_widget(&store)
            .args(["render", "--size", "tiny"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("unknown size class: tiny"));
    }
}
