//! Integration tests for inventory behavior through the world.

use alchemist_storage::{ItemKind, World};
use proptest::prelude::*;

#[test]
fn acquisition_order_is_stable() {
    let mut world = World::new();
    world.inventory_mut().add("Vitriol", 5);
    world.inventory_mut().add("Rebis", 2);
    world.inventory_mut().add("vitriol", 1);
    let names: Vec<_> = world
        .inventory()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Vitriol", "Rebis"]);
    assert_eq!(world.inventory().quantity_of("VITRIOL"), 6);
}

#[test]
fn removal_is_all_or_nothing() {
    let mut world = World::new();
    world.inventory_mut().add("Quebrith", 2);
    assert!(!world.inventory_mut().try_remove("Quebrith", 3));
    assert_eq!(world.inventory().quantity_of("Quebrith"), 2);
    assert!(world.inventory_mut().try_remove("quebrith", 2));
    assert_eq!(world.inventory().quantity_of("Quebrith"), 0);
}

#[test]
fn classification_tracks_the_formula_book() {
    use alchemist_storage::Formula;

    let mut world = World::new();
    world.inventory_mut().add("Swallow", 1);
    assert_eq!(world.classify_item("Swallow"), ItemKind::Ingredient);
    world
        .formulas_mut()
        .add(Formula::new("Swallow", Vec::new()).unwrap());
    // Same stack, reclassified the moment the formula exists.
    assert_eq!(world.classify_item("Swallow"), ItemKind::Potion);
    assert_eq!(world.classify_item("Griffin trophy"), ItemKind::Trophy);
}

proptest! {
    #[test]
    fn adds_accumulate(quantities in proptest::collection::vec(1u64..1_000, 1..32)) {
        let mut world = World::new();
        for &q in &quantities {
            world.inventory_mut().add("Vitriol", q);
        }
        prop_assert_eq!(
            world.inventory().quantity_of("vitriol"),
            quantities.iter().sum::<u64>()
        );
        prop_assert_eq!(world.inventory().len(), 1);
    }

    #[test]
    fn remove_never_overdraws(stock in 0u64..100, ask in 0u64..200) {
        let mut world = World::new();
        world.inventory_mut().add("Rebis", stock);
        let removed = world.inventory_mut().try_remove("Rebis", ask);
        prop_assert_eq!(removed, ask <= stock);
        let expected = if removed { stock - ask } else { stock };
        prop_assert_eq!(world.inventory().quantity_of("Rebis"), expected);
    }
}
