//! Integration tests for bestiary counter knowledge.

use alchemist_storage::{Bestiary, CounterKind, UpsertOutcome};

#[test]
fn one_entry_per_monster() {
    let mut bestiary = Bestiary::new();
    assert_eq!(
        bestiary.upsert("Leshen", CounterKind::Sign, "Igni"),
        UpsertOutcome::Added
    );
    assert_eq!(
        bestiary.upsert("LESHEN", CounterKind::Potion, "Samum"),
        UpsertOutcome::Updated
    );
    assert_eq!(bestiary.len(), 1);
    let entry = bestiary.find("leshen").unwrap();
    assert_eq!(entry.monster_name(), "Leshen");
    assert_eq!(entry.effective_sign(), Some("Igni"));
    assert_eq!(entry.effective_potion(), Some("Samum"));
}

#[test]
fn relearning_the_same_counter_changes_nothing() {
    let mut bestiary = Bestiary::new();
    bestiary.upsert("Harpy", CounterKind::Sign, "Aard");
    assert_eq!(
        bestiary.upsert("harpy", CounterKind::Sign, "AARD"),
        UpsertOutcome::Unchanged
    );
    assert_eq!(
        bestiary.find("Harpy").unwrap().effective_sign(),
        Some("Aard")
    );
}

#[test]
fn overwriting_a_slot_replaces_the_value() {
    let mut bestiary = Bestiary::new();
    bestiary.upsert("Wraith", CounterKind::Potion, "Specter oil");
    assert_eq!(
        bestiary.upsert("Wraith", CounterKind::Potion, "Moon dust"),
        UpsertOutcome::Updated
    );
    assert_eq!(
        bestiary.find("Wraith").unwrap().effective_potion(),
        Some("Moon dust")
    );
}

#[test]
fn counter_kind_words() {
    assert_eq!(CounterKind::from_word("sign"), Some(CounterKind::Sign));
    assert_eq!(CounterKind::from_word("POTION"), Some(CounterKind::Potion));
    assert_eq!(CounterKind::from_word("bomb"), None);
    assert_eq!(CounterKind::from_word(""), None);
}

#[test]
fn unknown_monsters_are_absent() {
    let bestiary = Bestiary::new();
    assert!(bestiary.find("Kikimore").is_none());
    assert!(bestiary.is_empty());
}
