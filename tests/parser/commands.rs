//! Integration tests for command recognition.

use alchemist_parser::{Command, CommandKind, recognize};

#[test]
fn every_imperative_family_is_recognized() {
    let cases = [
        ("Geralt loots 5 Vitriol, 2 Rebis", CommandKind::Loot, "5 Vitriol, 2 Rebis"),
        ("Geralt trades 1 Ghoul trophy for 6 Vitriol", CommandKind::Trade, "1 Ghoul trophy for 6 Vitriol"),
        ("Geralt brews Swallow", CommandKind::Brew, "Swallow"),
        ("Geralt learns Igni sign is effective against Harpy", CommandKind::Learn, "Igni sign is effective against Harpy"),
        ("Geralt encounters a Leshen", CommandKind::Encounter, "Leshen"),
    ];
    for (line, kind, rest) in cases {
        assert_eq!(recognize(line), Command::Action(kind, rest), "line: {line}");
    }
}

#[test]
fn queries_trump_everything() {
    assert_eq!(
        recognize("Geralt loots 5 Vitriol?"),
        Command::Query("Geralt loots 5 Vitriol?")
    );
    assert_eq!(recognize("Exit?"), Command::Query("Exit?"));
}

#[test]
fn exit_whole_line_only() {
    assert_eq!(recognize("exit"), Command::Exit);
    assert_eq!(recognize("Exit the tavern"), Command::Unrecognized);
}

#[test]
fn imperatives_are_case_sensitive() {
    assert_eq!(recognize("geralt loots 5 Vitriol"), Command::Unrecognized);
    assert_eq!(recognize("GERALT BREWS SWALLOW"), Command::Unrecognized);
}

#[test]
fn encounter_article_is_required() {
    assert_eq!(recognize("Geralt encounters Leshen"), Command::Unrecognized);
    assert_eq!(
        recognize("Geralt encounters a Leshen"),
        Command::Action(CommandKind::Encounter, "Leshen")
    );
}

#[test]
fn empty_and_noise_lines() {
    assert_eq!(recognize(""), Command::Unrecognized);
    assert_eq!(recognize("Roach neighs"), Command::Unrecognized);
}
