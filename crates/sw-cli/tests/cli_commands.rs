//! Integration tests for the sw CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory holding a complete test story.
fn test_story() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("story.json");
    fs::write(
        &path,
        r#"{
    "start": {
        "story_text": "You wake up in a clearing.",
        "Choice": {"north": "forest", "south": "game_over_cave"},
        "items": ["torch"]
    },
    "forest": {
        "story_text": "Trees crowd in around you.",
        "Choice": {"north": "game_over_cave"}
    },
    "game_over_cave": {
        "story_text": "Darkness swallows you."
    }
}
"#,
    )
    .unwrap();
    (dir, path)
}

fn storyweft() -> Command {
    Command::cargo_bin("storyweft").unwrap()
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_runs_to_game_over() {
    let (_dir, path) = test_story();
    storyweft()
        .args(["play", path.to_str().unwrap()])
        .write_stdin("Ada\nsouth\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Enter your name: ")
                .and(predicate::str::contains("You wake up in a clearing."))
                .and(predicate::str::contains("torch added to inventory"))
                .and(predicate::str::contains("Inventory: torch"))
                .and(predicate::str::contains("Darkness swallows you."))
                .and(predicate::str::contains("Game Over")),
        );
}

#[test]
fn play_reprompts_on_invalid_choice() {
    let (_dir, path) = test_story();
    storyweft()
        .args(["play", path.to_str().unwrap()])
        .write_stdin("Ada\neast\n north \nnorth\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Invalid choice. Please try again")
                .and(predicate::str::contains("Trees crowd in around you."))
                .and(predicate::str::contains("Game Over")),
        );
}

#[test]
fn play_empty_name_falls_back_to_flag() {
    let (_dir, path) = test_story();
    // Blank name line, then straight to the ending.
    storyweft()
        .args(["play", path.to_str().unwrap(), "--name", "Wanderer"])
        .write_stdin("\nsouth\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Game Over"));
}

#[test]
fn play_fails_on_missing_file() {
    storyweft()
        .args(["play", "no-such-story.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}

#[test]
fn play_fails_on_invalid_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "this is not json { {").unwrap();

    storyweft()
        .args(["play", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid story JSON"));
}

#[test]
fn play_fails_on_non_mapping_story() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("list.json");
    fs::write(&path, r#"["not", "a", "story"]"#).unwrap();

    storyweft()
        .args(["play", path.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed story"));
}

#[test]
fn play_fails_on_dangling_destination() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dangling.json");
    fs::write(
        &path,
        r#"{"start": {"story_text": "A door.", "Choice": {"open": "nowhere"}}}"#,
    )
    .unwrap();

    storyweft()
        .args(["play", path.to_str().unwrap()])
        .write_stdin("Ada\nopen\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("story node not found"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_counts_choice_labels() {
    let (_dir, path) = test_story();
    storyweft()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Choice frequency")
                .and(predicate::str::contains("north"))
                .and(predicate::str::contains("south"))
                .and(predicate::str::contains("2 distinct choice labels")),
        );
}

#[test]
fn stats_custom_width() {
    let (_dir, path) = test_story();
    storyweft()
        .args(["stats", path.to_str().unwrap(), "--width", "8"])
        .assert()
        .success()
        .stdout(predicate::str::contains("north"));
}

#[test]
fn stats_story_without_choices() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("flat.json");
    fs::write(&path, r#"{"start": {"story_text": "The end."}}"#).unwrap();

    storyweft()
        .args(["stats", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No choices found"));
}

#[test]
fn stats_fails_on_missing_file() {
    storyweft()
        .args(["stats", "no-such-story.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot read"));
}
