//! Integration tests for the console session - scripted end-to-end visits.
//!
//! Each test feeds a canned input script to the session loop and checks the
//! transcript plus the final case report.

use detective_quest::console::{drive, run_with, SessionOptions, Theme};
use detective_quest::data::Mansion;
use detective_quest::game::{CaseReport, Casebook, GameLevel};

/// Run the classic case with scripted input, returning the transcript and
/// the final report.
fn play(level: GameLevel, script: &str) -> (String, CaseReport) {
    let mut input = script.as_bytes();
    let mut output = Vec::new();
    let options = SessionOptions {
        level,
        theme: Theme::plain(),
        show_journal: false,
        json_report: false,
    };

    let report = run_with(&mut input, &mut output, options).expect("session should run");
    let transcript = String::from_utf8(output).expect("transcript should be utf-8");
    (transcript, report)
}

#[test]
fn master_walkthrough_reports_clues_in_alphabetical_order() {
    // Hall -> Biblioteca (Livro...) -> Estúdio (Carta...), a leaf.
    let (transcript, report) = play(GameLevel::Master, "l\nl\nMordomo\n");

    assert!(transcript.contains("Welcome to the Detective Quest mansion!"));
    assert!(transcript.contains("Playing as: Master Detective"));
    assert!(transcript.contains("You are in: Hall de Entrada"));
    assert!(transcript.contains("You are in: Biblioteca"));
    assert!(transcript.contains("CLUE FOUND: Livro rasgado com sangue"));
    assert!(transcript.contains("You are in: Estúdio"));
    assert!(transcript.contains("CLUE FOUND: Carta suspeita"));
    assert!(transcript.contains("You reached the end of this path!"));

    // The clue report is the in-order walk: Carta before Livro.
    let carta = transcript
        .find("- Carta suspeita")
        .expect("clue report should list Carta suspeita");
    let livro = transcript
        .find("- Livro rasgado com sangue")
        .expect("clue report should list Livro rasgado com sangue");
    assert!(carta < livro, "clue report should be alphabetical");

    assert!(transcript.contains("CLUE -> SUSPECT ASSOCIATIONS:"));
    assert!(transcript.contains("Livro rasgado com sangue -> Mordomo (1 citations)"));
    assert!(transcript.contains("Carta suspeita -> Herdeira (1 citations)"));
    assert!(transcript.contains("MOST CITED SUSPECT:"));

    // One citation is not enough to convict the butler.
    assert!(transcript.contains("Who do you accuse?"));
    assert!(transcript.contains("Insufficient evidence."));

    assert_eq!(report.clues.len(), 2);
    assert_eq!(report.accusation.unwrap().accused, "Mordomo");
}

#[test]
fn invalid_input_reprompts_without_moving() {
    let (transcript, report) = play(GameLevel::Adventurer, "x\nq\n");

    assert!(transcript.contains("Invalid option, try again."));
    // The room banner and menu come back after the bad input.
    assert_eq!(transcript.matches("Choose your path:").count(), 2);
    assert_eq!(transcript.matches("You are in: Hall de Entrada").count(), 2);
    assert!(transcript.contains("Exploration over."));

    assert_eq!(report.stats.rooms_entered, 1);
    assert_eq!(report.stats.steps_taken, 0);
}

#[test]
fn novice_walks_the_mansion_without_collecting() {
    let (transcript, report) = play(GameLevel::Novice, "l\nl\n");

    assert!(transcript.contains("You are in: Biblioteca"));
    assert!(transcript.contains("You reached the end of this path!"));
    assert!(!transcript.contains("CLUE FOUND"));
    assert!(!transcript.contains("CLUES COLLECTED"));
    assert!(!transcript.contains("Who do you accuse?"));

    assert!(report.clues.is_empty());
    assert!(report.associations.is_empty());
    assert!(report.accusation.is_none());
}

#[test]
fn adventurer_reports_clues_but_names_no_suspects() {
    // Hall -> Cozinha (Faca...) -> Depósito (Pegadas...), a leaf.
    let (transcript, report) = play(GameLevel::Adventurer, "r\nl\n");

    assert!(transcript.contains("CLUE FOUND: Faca desaparecida"));
    assert!(transcript.contains("CLUE FOUND: Pegadas estranhas"));
    assert!(transcript.contains("CLUES COLLECTED (ALPHABETICAL ORDER):"));
    assert!(!transcript.contains("CLUE -> SUSPECT ASSOCIATIONS:"));
    assert!(!transcript.contains("Who do you accuse?"));

    assert_eq!(report.clues, vec!["Faca desaparecida", "Pegadas estranhas"]);
    assert!(report.associations.is_empty());
}

#[test]
fn quitting_at_the_hall_leaves_the_case_empty() {
    let (transcript, report) = play(GameLevel::Master, "q\nMordomo\n");

    assert!(transcript.contains("Exploration over."));
    assert!(transcript.contains("No clues were collected."));
    // The association header prints even when nothing was filed, and the
    // most-cited announcement stays silent.
    assert!(transcript.contains("CLUE -> SUSPECT ASSOCIATIONS:"));
    assert!(!transcript.contains("MOST CITED SUSPECT:"));
    assert!(transcript.contains("No clue points at that suspect."));

    assert!(report.most_cited.is_none());
    assert_eq!(report.stats.clues_collected, 0);
}

#[test]
fn input_running_dry_ends_the_session_cleanly() {
    let (transcript, report) = play(GameLevel::Master, "");

    assert!(transcript.contains("Exploration over."));
    assert!(transcript.contains("Who do you accuse?"));
    assert!(transcript.contains("No clue points at that suspect."));
    assert!(report.clues.is_empty());
}

#[test]
fn reinforced_suspect_is_confirmed_in_a_bespoke_case() {
    // Two clue texts that share a hash bucket and implicate the same
    // suspect: the second citation pushes the count to the guilt threshold.
    let mut mansion = Mansion::new();
    let cellar = mansion
        .add_room_with_clue("Porão", "a")
        .expect("room should build");
    let cell = mansion
        .add_room_with_clue("Cela", "k")
        .expect("room should build");
    mansion.connect(cellar, Some(cell), None);

    let mut casebook = Casebook::new();
    casebook.add_rule("a", "Fantasma").expect("rule should build");
    casebook.add_rule("k", "Fantasma").expect("rule should build");

    let mut input = "l\nFantasma\n".as_bytes();
    let mut output = Vec::new();
    let options = SessionOptions {
        level: GameLevel::Master,
        theme: Theme::plain(),
        show_journal: false,
        json_report: false,
    };

    let report = drive(&mut input, &mut output, mansion, cellar, casebook, options)
        .expect("session should run");
    let transcript = String::from_utf8(output).expect("transcript should be utf-8");

    assert!(transcript.contains("MOST CITED SUSPECT: Fantasma (2 citations)"));
    assert!(transcript.contains("Culprit confirmed!"));

    let accusation = report.accusation.expect("an accusation was made");
    assert_eq!(accusation.accused, "Fantasma");
    let most_cited = report.most_cited.expect("one suspect was cited");
    assert_eq!(most_cited.citations, 2);
}

#[test]
fn journal_option_prints_the_session_log() {
    let mut input = "l\nl\nHerdeira\n".as_bytes();
    let mut output = Vec::new();
    let options = SessionOptions {
        level: GameLevel::Master,
        theme: Theme::plain(),
        show_journal: true,
        json_report: false,
    };

    run_with(&mut input, &mut output, options).expect("session should run");
    let transcript = String::from_utf8(output).expect("transcript should be utf-8");

    assert!(transcript.contains("SESSION JOURNAL:"));
    assert!(transcript.contains("exploration started: Hall de Entrada"));
    assert!(transcript.contains("clue found: Livro rasgado com sangue"));
    assert!(transcript.contains("suspect cited: Livro rasgado com sangue -> Mordomo"));
    assert!(transcript.contains("accusation judged: Herdeira: INSUFFICIENT"));
    assert!(transcript.contains("Rooms entered: 3"));
}
