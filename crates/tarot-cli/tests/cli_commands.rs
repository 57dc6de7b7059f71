//! Integration tests for the tarot CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn tarot() -> Command {
    let mut cmd = Command::cargo_bin("tarot").unwrap();
    cmd.env_remove("TAROT_IMAGE_BASE_URL");
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_default_shows_eight_cards() {
    tarot()
        .args(["draw", "--seed", "42"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Full Deck")
                .and(predicate::str::contains(" 8. "))
                .and(predicate::str::contains(" 9. ").not()),
        );
}

#[test]
fn draw_json_major_upright() {
    let json = stdout_json(tarot().args([
        "draw", "-d", "major", "-r", "Upright only", "-n", "5", "--json", "--seed", "1",
    ]));
    let cards = json["drawnCards"].as_array().unwrap();
    assert_eq!(cards.len(), 5);
    assert!(cards.iter().all(|c| c.get("reversed").is_none()));
    assert_eq!(json["message"], "");
}

#[test]
fn draw_too_many_cards_shows_message() {
    tarot()
        .args(["draw", "-d", "Major Arcana only", "-n", "100"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("22. ")
                .and(predicate::str::contains("There are no more cards to display.")),
        );
}

#[test]
fn draw_is_reproducible_with_seed() {
    let args = ["draw", "-n", "10", "--json", "--seed", "7"];
    let first = tarot().args(args).output().unwrap().stdout;
    let second = tarot().args(args).output().unwrap().stdout;
    assert_eq!(first, second);
}

#[test]
fn draw_resolves_image_urls() {
    let json = stdout_json(
        tarot()
            .args(["draw", "-n", "3", "--json"])
            .env("TAROT_IMAGE_BASE_URL", "https://cdn.example.com"),
    );
    for card in json["drawnCards"].as_array().unwrap() {
        let image = card["image"].as_str().unwrap();
        assert!(image.starts_with("https://cdn.example.com/images/"));
    }
}

#[test]
fn draw_rejects_unknown_deck() {
    tarot()
        .args(["draw", "-d", "tiny"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid deck variant"));
}

// ---------------------------------------------------------------------------
// request
// ---------------------------------------------------------------------------

#[test]
fn request_full_deck_with_reversals() {
    let output = tarot()
        .args(["request", "--seed", "3"])
        .write_stdin(
            r#"{"deckSize": "Full Deck", "deckReverse": "Upright and reversed", "numCards": 8}"#,
        )
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cards = json["drawnCards"].as_array().unwrap();
    assert_eq!(cards.len(), 8);
    assert_eq!(json["message"], "");
    for card in cards {
        assert!(card["reversed"].is_string());
        assert!(card.get("key").is_none());
    }
}

#[test]
fn request_null_deck_size_is_missing() {
    tarot()
        .arg("request")
        .write_stdin(r#"{"deckSize": null, "deckReverse": "Upright only"}"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing_parameters"));
}

#[test]
fn request_invalid_json() {
    tarot()
        .arg("request")
        .write_stdin("invalid json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\":\"invalid_request\""));
}

#[test]
fn request_missing_parameters() {
    tarot()
        .arg("request")
        .write_stdin(r#"{"numCards": 5}"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing_parameters"));
}

#[test]
fn request_invalid_deck_options() {
    tarot()
        .arg("request")
        .write_stdin(r#"{"deckSize": "Invalid Deck", "deckReverse": "Upright only"}"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains("invalid_deck_options"));
}

// ---------------------------------------------------------------------------
// options / catalog
// ---------------------------------------------------------------------------

#[test]
fn options_lists_choices() {
    tarot()
        .arg("options")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Major Arcana only")
                .and(predicate::str::contains("Minor Arcana only"))
                .and(predicate::str::contains("Upright and reversed"))
                .and(predicate::str::contains("default 8")),
        );
}

#[test]
fn catalog_lists_major_arcana() {
    tarot()
        .args(["catalog", "-d", "major"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The Fool")
                .and(predicate::str::contains("RWS_Tarot_21_World.jpg"))
                .and(predicate::str::contains("22 cards"))
                .and(predicate::str::contains("of Cups").not()),
        );
}

#[test]
fn catalog_full_deck_count() {
    tarot()
        .arg("catalog")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("78 cards")
                .and(predicate::str::contains("Tarot_Nine_of_Wands.jpg")),
        );
}
