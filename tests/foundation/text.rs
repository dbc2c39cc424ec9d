//! Integration tests for the case-insensitive text helpers.

use std::cmp::Ordering;

use alchemist_foundation::text::{
    cmp_ignore_case, ends_with_question_mark, eq_ignore_case, find_ignore_case,
    split_on_word, strip_prefix_ignore_case, strip_suffix_ignore_case,
};
use proptest::prelude::*;

#[test]
fn question_mark_detection() {
    assert!(ends_with_question_mark("Total potion?"));
    assert!(ends_with_question_mark("What is in Swallow?   "));
    assert!(!ends_with_question_mark("Geralt loots 5 Vitriol"));
    assert!(!ends_with_question_mark(""));
    assert!(!ends_with_question_mark("? but not at the end"));
}

#[test]
fn equality_ignores_ascii_case_only() {
    assert!(eq_ignore_case("Griffin", "gRiFFin"));
    assert!(!eq_ignore_case("Griffin", "Griffon"));
}

#[test]
fn ordering_matches_listings() {
    // The ordering that drives every sorted listing: ascending,
    // case-insensitive.
    let mut names = vec!["Vitriol", "aether", "Rebis", "QUEBRITH"];
    names.sort_by(|a, b| cmp_ignore_case(a, b));
    assert_eq!(names, vec!["aether", "QUEBRITH", "Rebis", "Vitriol"]);
}

#[test]
fn prefix_and_suffix_stripping() {
    assert_eq!(
        strip_prefix_ignore_case("total TROPHY Nekker?", "Total trophy"),
        Some(" Nekker?")
    );
    assert_eq!(strip_prefix_ignore_case("Total", "Total trophy"), None);
    assert_eq!(
        strip_suffix_ignore_case("Griffin TROPHY", " trophy"),
        Some("Griffin")
    );
    assert_eq!(strip_suffix_ignore_case("Griffin", " trophy"), None);
}

#[test]
fn substring_search() {
    assert_eq!(find_ignore_case("Leshen Trophy", " trophy"), Some(6));
    assert_eq!(find_ignore_case("abc", ""), Some(0));
    assert_eq!(find_ignore_case("short", "longer than haystack"), None);
}

#[test]
fn word_splitting() {
    assert_eq!(
        split_on_word("2 Ghoul trophy for 6 Vitriol", "for"),
        Some(("2 Ghoul trophy ", " 6 Vitriol"))
    );
    // Substring occurrences inside words never split.
    assert_eq!(split_on_word("1 forktail scale", "for"), None);
    assert_eq!(split_on_word("", "for"), None);
}

proptest! {
    #[test]
    fn cmp_agrees_with_lowercase_ordering(a in "[ -~]{0,16}", b in "[ -~]{0,16}") {
        let expected = a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase());
        prop_assert_eq!(cmp_ignore_case(&a, &b), expected);
    }

    #[test]
    fn eq_is_consistent_with_cmp(a in "[ -~]{0,16}", b in "[ -~]{0,16}") {
        prop_assert_eq!(
            eq_ignore_case(&a, &b),
            cmp_ignore_case(&a, &b) == Ordering::Equal
        );
    }
}
