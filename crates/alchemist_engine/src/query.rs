//! The five question shapes, answered against the world.
//!
//! Replies are a de facto wire format: exact punctuation, `, `
//! separators, and capitalization are all load-bearing. Listings
//! suppress zero-quantity stacks and sort ascending case-insensitively
//! by name (trophies by monster name); formula contents sort by
//! descending quantity with name as the tiebreaker.

use alchemist_foundation::text;
use alchemist_parser::{Query, parse_query, phrase};
use alchemist_storage::{
    Formula, ItemKind, ItemStack, TROPHY_SUFFIX, World, strip_trophy_suffix,
};

/// Answers one query line.
///
/// A line matching none of the five shapes gets the `INVALID` token.
#[must_use]
pub fn answer(line: &str, world: &World) -> String {
    let Some(query) = parse_query(line) else {
        return phrase::INVALID.to_string();
    };
    match query {
        Query::Effectiveness { monster } => effectiveness(monster, world),
        // The per-name totals report the raw stack, whatever category
        // the name would classify as.
        Query::TotalIngredient { name: Some(name) } | Query::TotalPotion { name: Some(name) } => {
            world.inventory().quantity_of(name).to_string()
        }
        Query::TotalIngredient { name: None } => listing(world, ItemKind::Ingredient),
        Query::TotalPotion { name: None } => listing(world, ItemKind::Potion),
        Query::TotalTrophy {
            monster: Some(monster),
        } => world
            .inventory()
            .quantity_of(&format!("{monster}{TROPHY_SUFFIX}"))
            .to_string(),
        Query::TotalTrophy { monster: None } => trophy_listing(world),
        Query::Contents { potion } => contents(potion, world),
    }
}

/// Known counters for a monster: the potion slot, then the sign slot,
/// sorted ascending case-insensitively before printing.
fn effectiveness(monster: &str, world: &World) -> String {
    let mut counters: Vec<&str> = world.bestiary().find(monster).map_or_else(Vec::new, |e| {
        e.effective_potion()
            .into_iter()
            .chain(e.effective_sign())
            .collect()
    });
    if counters.is_empty() {
        return format!("No knowledge of {monster}");
    }
    counters.sort_by(|a, b| text::cmp_ignore_case(a, b));
    counters.join(", ")
}

/// Nonzero stacks of one classification, `<qty> <name>` ascending by
/// name, or `None`.
fn listing(world: &World, kind: ItemKind) -> String {
    let mut stacks: Vec<&ItemStack> = world
        .inventory()
        .iter()
        .filter(|s| s.quantity > 0 && world.classify_item(&s.name) == kind)
        .collect();
    if stacks.is_empty() {
        return "None".to_string();
    }
    stacks.sort_by(|a, b| text::cmp_ignore_case(&a.name, &b.name));
    let parts: Vec<String> = stacks
        .iter()
        .map(|s| format!("{} {}", s.quantity, s.name))
        .collect();
    parts.join(", ")
}

/// Trophies keyed by monster: the suffix is stripped before both the
/// sort comparison and printing.
fn trophy_listing(world: &World) -> String {
    let mut trophies: Vec<(&str, u64)> = world
        .inventory()
        .iter()
        .filter(|s| s.quantity > 0 && world.classify_item(&s.name) == ItemKind::Trophy)
        .map(|s| (strip_trophy_suffix(&s.name), s.quantity))
        .collect();
    if trophies.is_empty() {
        return "None".to_string();
    }
    trophies.sort_by(|a, b| text::cmp_ignore_case(a.0, b.0));
    let parts: Vec<String> = trophies
        .iter()
        .map(|(monster, quantity)| format!("{quantity} {monster}"))
        .collect();
    parts.join(", ")
}

/// Formula components, descending by quantity, ties ascending by name.
/// A zero-component formula reads the same as a missing one.
fn contents(potion: &str, world: &World) -> String {
    let components: &[ItemStack] = world
        .formulas()
        .find(potion)
        .map_or(&[], Formula::components);
    if components.is_empty() {
        return format!("No formula for {potion}");
    }
    let mut components: Vec<&ItemStack> = components.iter().collect();
    components.sort_by(|a, b| {
        b.quantity
            .cmp(&a.quantity)
            .then_with(|| text::cmp_ignore_case(&a.name, &b.name))
    });
    let parts: Vec<String> = components
        .iter()
        .map(|c| format!("{} {}", c.quantity, c.name))
        .collect();
    parts.join(", ")
}
