//! Integration tests for the formula book.

use alchemist_foundation::ErrorKind;
use alchemist_storage::{Formula, FormulaBook, ItemStack, MAX_COMPONENTS};

#[test]
fn lookup_is_case_insensitive() {
    let mut book = FormulaBook::new();
    book.add(
        Formula::new(
            "Black Blood",
            vec![ItemStack::new("Vitriol", 3), ItemStack::new("Rebis", 2)],
        )
        .unwrap(),
    );
    let found = book.find("black blood").unwrap();
    assert_eq!(found.potion_name(), "Black Blood");
    assert_eq!(found.components().len(), 2);
    assert!(book.knows("BLACK BLOOD"));
    assert!(!book.knows("White Blood"));
}

#[test]
fn components_keep_learned_order() {
    let formula = Formula::new(
        "Swallow",
        vec![
            ItemStack::new("Celandine", 5),
            ItemStack::new("Drowner brain", 1),
        ],
    )
    .unwrap();
    let names: Vec<_> = formula.components().iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Celandine", "Drowner brain"]);
}

#[test]
fn over_cap_reports_capacity_exceeded() {
    let components = (0..=MAX_COMPONENTS)
        .map(|i| ItemStack::new(format!("herb{i}"), 1))
        .collect();
    let err = Formula::new("Overfull", components).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::CapacityExceeded { limit: MAX_COMPONENTS, .. }
    ));
}

#[test]
fn exactly_at_cap_is_fine() {
    let components = (0..MAX_COMPONENTS)
        .map(|i| ItemStack::new(format!("herb{i}"), 1))
        .collect();
    assert!(Formula::new("Full", components).is_ok());
}
