//! Integration tests for entry-list tokenization.

use alchemist_parser::{EntryList, parse_entry, parse_entry_multiword};
use alchemist_storage::ItemStack;
use proptest::prelude::*;

#[test]
fn full_list_parse() {
    let stacks: Option<Vec<_>> = EntryList::new("5 Vitriol, 2 Rebis, 1 Quebrith")
        .map(parse_entry)
        .collect();
    assert_eq!(
        stacks,
        Some(vec![
            ItemStack::new("Vitriol", 5),
            ItemStack::new("Rebis", 2),
            ItemStack::new("Quebrith", 1),
        ])
    );
}

#[test]
fn one_bad_entry_poisons_the_list() {
    let stacks: Option<Vec<_>> = EntryList::new("5 Vitriol, zero Rebis")
        .map(parse_entry)
        .collect();
    assert_eq!(stacks, None);

    let stacks: Option<Vec<_>> = EntryList::new("5 Vitriol,, 2 Rebis")
        .map(parse_entry)
        .collect();
    assert_eq!(stacks, None);
}

#[test]
fn multiword_entries_for_trophies() {
    let stacks: Option<Vec<_>> = EntryList::new("2 Nekker trophy, 1 Royal Wyvern trophy")
        .map(parse_entry_multiword)
        .collect();
    assert_eq!(
        stacks,
        Some(vec![
            ItemStack::new("Nekker trophy", 2),
            ItemStack::new("Royal Wyvern trophy", 1),
        ])
    );
}

#[test]
fn single_word_entries_reject_extra_words() {
    assert_eq!(parse_entry("5 black pearl"), None);
    assert_eq!(parse_entry_multiword("5 black pearl"), Some(ItemStack::new("black pearl", 5)));
}

proptest! {
    #[test]
    fn valid_entries_round_trip(qty in 1u64..1_000_000, name in "[A-Za-z]{1,12}") {
        let entry = format!("{qty} {name}");
        prop_assert_eq!(parse_entry(&entry), Some(ItemStack::new(name.as_str(), qty)));
    }

    #[test]
    fn nonpositive_quantities_always_reject(qty in -1_000i64..=0, name in "[A-Za-z]{1,12}") {
        let entry = format!("{qty} {name}");
        prop_assert_eq!(parse_entry(&entry), None);
        prop_assert_eq!(parse_entry_multiword(&entry), None);
    }
}
