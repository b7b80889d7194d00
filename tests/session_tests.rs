//! Game session integration tests.
//!
//! These tests play whole games through the public API: select, submit,
//! settle, shuffle and reset.

use std::collections::HashSet;

use red_herring::codec::{decode, encode};
use red_herring::core::GameConfig;
use red_herring::puzzle::{Category, Puzzle};
use red_herring::session::{GameSession, Phase, SessionEvent, Submission, WordStatus};

const FRUITS: [&str; 4] = ["Apple", "Banana", "Orange", "Strawberry"];
const ANIMALS: [&str; 4] = ["Elephant", "Tiger", "Giraffe", "Penguin"];
const COUNTRIES: [&str; 4] = ["Canada", "Brazil", "Japan", "Egypt"];
const SPORTS: [&str; 4] = ["Soccer", "Tennis", "Basketball", "Golf"];

fn puzzle() -> Puzzle {
    Puzzle::new([
        Category::new("Fruits", FRUITS),
        Category::new("Animals", ANIMALS),
        Category::new("Countries", COUNTRIES),
        Category::new("Sports", SPORTS),
    ])
}

fn new_session(puzzle: Puzzle) -> GameSession {
    GameSession::new(puzzle, GameConfig::default(), 1234)
}

/// Select the words, submit and settle immediately.
fn guess(session: &mut GameSession, words: &[&str]) -> Submission {
    session.deselect_all();
    for word in words {
        session.select_word(word);
    }
    session.submit_guess()
}

fn guess_and_settle(session: &mut GameSession, words: &[&str]) -> Vec<SessionEvent> {
    match guess(session, words) {
        Submission::Pending(ticket) => session.settle(ticket),
        other => panic!("expected a pending guess, got {other:?}"),
    }
}

#[test]
fn test_correct_guess_solves_category() {
    let mut session = new_session(puzzle());

    let events = guess_and_settle(&mut session, &FRUITS);

    assert_eq!(
        events,
        vec![SessionEvent::CategorySolved {
            category_index: 0,
            name: "Fruits".into()
        }]
    );
    assert!(session.is_solved(0));
    assert!(session.selected().is_empty());
    assert!(!session.is_won());
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.visible_tiles().count(), 12);
    assert!(session
        .tiles()
        .iter()
        .filter(|t| t.category_index == 0)
        .all(|t| !t.visible));
}

#[test]
fn test_one_from_each_is_not_one_off() {
    let mut session = new_session(puzzle());

    let events = guess_and_settle(&mut session, &["Apple", "Tiger", "Canada", "Soccer"]);

    assert_eq!(events, vec![SessionEvent::Incorrect]);
    assert_eq!(session.attempts(), 1);
    assert_eq!(session.failed_guesses().count(), 1);
}

#[test]
fn test_three_fruits_is_one_off() {
    let mut session = new_session(puzzle());

    let events = guess_and_settle(&mut session, &["Apple", "Banana", "Orange", "Tiger"]);

    assert_eq!(
        events,
        vec![SessionEvent::OneOff {
            category_index: 0,
            category_name: "Fruits".into()
        }]
    );
    assert_eq!(session.attempts(), 1);
}

#[test]
fn test_duplicate_guess_counted_once() {
    let mut session = new_session(puzzle());

    guess_and_settle(&mut session, &["Apple", "Tiger", "Canada", "Soccer"]);
    let second = guess(&mut session, &["Soccer", "Canada", "Tiger", "Apple"]);

    assert_eq!(second, Submission::Duplicate);
    assert_eq!(session.attempts(), 1);
    assert_eq!(session.failed_guesses().count(), 1);
    assert!(!session.is_evaluating());
}

#[test]
fn test_win_reveals_hidden_message() {
    let mut session = new_session(puzzle().with_hidden_message("Happy birthday!"));

    guess_and_settle(&mut session, &FRUITS);
    guess_and_settle(&mut session, &ANIMALS);
    guess_and_settle(&mut session, &COUNTRIES);
    assert_eq!(session.hidden_message(), None);

    let events = guess_and_settle(&mut session, &SPORTS);

    assert_eq!(
        events.last(),
        Some(&SessionEvent::Won {
            hidden_message: Some("Happy birthday!".into())
        })
    );
    assert!(session.is_won());
    assert_eq!(session.phase(), Phase::Won);
    assert_eq!(session.hidden_message(), Some("Happy birthday!"));
    assert_eq!(session.visible_tiles().count(), 0);
}

#[test]
fn test_hidden_message_not_revealed_by_failing() {
    let mut session = new_session(puzzle().with_hidden_message("secret"));

    for words in [
        ["Apple", "Tiger", "Canada", "Soccer"],
        ["Banana", "Giraffe", "Brazil", "Tennis"],
        ["Orange", "Penguin", "Japan", "Golf"],
        ["Strawberry", "Elephant", "Egypt", "Basketball"],
        ["Apple", "Giraffe", "Japan", "Basketball"],
    ] {
        guess_and_settle(&mut session, &words);
    }

    assert_eq!(session.attempts(), 5);
    assert_eq!(session.hidden_message(), None);
}

#[test]
fn test_solved_order_is_kept() {
    let mut session = new_session(puzzle());

    guess_and_settle(&mut session, &SPORTS);
    guess_and_settle(&mut session, &FRUITS);

    let names: Vec<_> = session
        .solved_categories()
        .map(|(_, c)| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Sports", "Fruits"]);
}

#[test]
fn test_attempts_exhausted_once_and_play_continues() {
    let mut session = new_session(puzzle());
    let wrong = [
        ["Apple", "Tiger", "Canada", "Soccer"],
        ["Banana", "Giraffe", "Brazil", "Tennis"],
        ["Orange", "Penguin", "Japan", "Golf"],
    ];
    for words in wrong {
        let events = guess_and_settle(&mut session, &words);
        assert!(!events
            .iter()
            .any(|e| matches!(e, SessionEvent::AttemptsExhausted { .. })));
    }

    let events = guess_and_settle(&mut session, &["Strawberry", "Elephant", "Egypt", "Basketball"]);
    assert_eq!(
        events,
        vec![
            SessionEvent::Incorrect,
            SessionEvent::AttemptsExhausted {
                attempts: 4,
                max_attempts: 4
            }
        ]
    );
    assert_eq!(session.phase(), Phase::AttemptsExhausted);
    assert!(session.is_exhausted_notice_open());
    assert_eq!(session.attempts_remaining(), 0);

    session.dismiss_exhausted_notice();
    assert!(!session.is_exhausted_notice_open());

    let events = guess_and_settle(&mut session, &["Apple", "Giraffe", "Japan", "Basketball"]);
    assert_eq!(events, vec![SessionEvent::Incorrect]);
    assert_eq!(session.attempts(), 5);

    for words in [FRUITS, ANIMALS, COUNTRIES, SPORTS] {
        guess_and_settle(&mut session, &words);
    }
    assert_eq!(session.phase(), Phase::Won);
}

#[test]
fn test_shuffle_only_moves_visible_tiles() {
    let mut session = new_session(puzzle());
    guess_and_settle(&mut session, &ANIMALS);
    session.select_word("Golf");

    let before = session.tiles().to_vec();
    let mut changed = false;
    for _ in 0..10 {
        assert!(session.shuffle_visible());
        changed |= session.tiles() != before.as_slice();
    }

    assert!(session.selected().is_empty());
    assert!(changed, "ten shuffles never changed the order");
    for (slot, tile) in before.iter().enumerate() {
        if !tile.visible {
            assert_eq!(&session.tiles()[slot], tile);
        }
    }

    let before_words: HashSet<_> = before.iter().map(|t| t.word.clone()).collect();
    let after_words: HashSet<_> = session.tiles().iter().map(|t| t.word.clone()).collect();
    assert_eq!(before_words, after_words);
}

#[test]
fn test_reset_restores_everything() {
    let mut session = new_session(puzzle());
    let miss = guess_and_settle(&mut session, &["Banana", "Tiger", "Canada", "Soccer"]);
    assert_eq!(miss, vec![SessionEvent::Incorrect]);
    guess_and_settle(&mut session, &FRUITS);
    session.select_word("Golf");
    assert_eq!(session.attempts(), 1);
    assert_eq!(session.failed_guesses().count(), 1);
    assert!(session.is_solved(0));

    session.reset();

    assert!(session.selected().is_empty());
    assert_eq!(session.solved_categories().count(), 0);
    assert_eq!(session.attempts(), 0);
    assert_eq!(session.failed_guesses().count(), 0);
    assert_eq!(session.visible_tiles().count(), 16);
    assert_eq!(session.phase(), Phase::Playing);
    assert_eq!(session.word_status("Apple"), WordStatus::Normal);
}

#[test]
fn test_won_session_ignores_input() {
    let mut session = new_session(puzzle());
    for words in [FRUITS, ANIMALS, COUNTRIES, SPORTS] {
        guess_and_settle(&mut session, &words);
    }

    assert!(!session.select_word("Apple"));
    assert_eq!(session.submit_guess(), Submission::Rejected);
}

#[test]
fn test_play_decoded_puzzle() {
    let token = encode(&puzzle().with_title("Round two")).unwrap();
    let mut session = new_session(decode(&token).unwrap());

    assert_eq!(session.title(), Some("Round two"));
    let events = guess_and_settle(&mut session, &COUNTRIES);
    assert!(matches!(
        events.as_slice(),
        [SessionEvent::CategorySolved { category_index: 2, .. }]
    ));
}

#[test]
fn test_snapshot_is_independent() {
    let mut session = new_session(puzzle());
    guess_and_settle(&mut session, &["Apple", "Tiger", "Canada", "Soccer"]);

    let snapshot = session.clone();
    guess_and_settle(&mut session, &["Banana", "Giraffe", "Brazil", "Tennis"]);

    assert_eq!(snapshot.failed_guesses().count(), 1);
    assert_eq!(session.failed_guesses().count(), 2);
}
