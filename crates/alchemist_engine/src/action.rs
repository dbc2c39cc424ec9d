//! The five mutating commands: loot, trade, brew, learn, encounter.
//!
//! Handlers validate before they mutate, with one sanctioned
//! exception: trade checks trophy sufficiency entry by entry before
//! the ingredient list has been parsed, adds ingredients as they
//! parse, and defers trophy removal to the very end. That ordering
//! (and its partial-validation consequences) is part of the observable
//! behavior and must not be "fixed".
//!
//! Domain failures ("Not enough ingredients", "No formula for X") are
//! ordinary `Ok` replies; only malformed input is an error, and the
//! dispatcher renders it as the `INVALID` token.

use alchemist_foundation::text;
use alchemist_parser::{CommandKind, EntryList, entry, phrase};
use alchemist_storage::{CounterKind, Formula, ItemStack, TROPHY_SUFFIX, UpsertOutcome, World};
use thiserror::Error;

/// Marker error for malformed input inside a recognized command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("invalid command")]
pub struct InvalidCommand;

type HandlerResult = Result<String, InvalidCommand>;

const UNPREPARED: &str = "Geralt is unprepared and barely escapes with his life";

/// Runs the handler for a recognized imperative command.
///
/// `rest` is the text after the command's literal prefix.
///
/// # Errors
///
/// Returns [`InvalidCommand`] when the remainder does not fit the
/// command's shape; the dispatcher prints `INVALID` for it.
pub fn run(kind: CommandKind, rest: &str, world: &mut World) -> HandlerResult {
    match kind {
        CommandKind::Loot => loot(rest, world),
        CommandKind::Trade => trade(rest, world),
        CommandKind::Brew => brew(rest, world),
        CommandKind::Learn => learn(rest, world),
        CommandKind::Encounter => encounter(rest, world),
    }
}

/// `Geralt loots <entries>` - the whole list parses before anything is
/// added, so a malformed trailing entry mutates nothing.
fn loot(rest: &str, world: &mut World) -> HandlerResult {
    let mut stacks = Vec::new();
    for item in EntryList::new(rest) {
        stacks.push(entry::parse_entry(item).ok_or(InvalidCommand)?);
    }
    for stack in &stacks {
        world.inventory_mut().add(&stack.name, stack.quantity);
    }
    Ok("Alchemy ingredients obtained".to_string())
}

/// `Geralt trades <trophies> for <ingredients>`.
fn trade(rest: &str, world: &mut World) -> HandlerResult {
    let (trophy_part, ingredient_part) =
        text::split_on_word(rest, phrase::TRADE_SEPARATOR).ok_or(InvalidCommand)?;

    // Sufficiency is checked per trophy entry, before later entries
    // (or the ingredient list) have been looked at.
    let mut payment = Vec::new();
    for item in EntryList::new(trophy_part) {
        let stack = entry::parse_entry_multiword(item).ok_or(InvalidCommand)?;
        if !world.inventory().has_at_least(&stack.name, stack.quantity) {
            return Ok("Not enough trophies".to_string());
        }
        payment.push(stack);
    }

    // Ingredients are added as they parse; a malformed later entry
    // aborts with earlier additions retained.
    for item in EntryList::new(ingredient_part) {
        let stack = entry::parse_entry(item).ok_or(InvalidCommand)?;
        world.inventory_mut().add(&stack.name, stack.quantity);
    }

    // Payment happens last.
    for stack in &payment {
        world.inventory_mut().try_remove(&stack.name, stack.quantity);
    }
    Ok("Trade successful".to_string())
}

/// `Geralt brews <potion>`.
fn brew(rest: &str, world: &mut World) -> HandlerResult {
    let potion = rest.trim();
    let Some(formula) = world.formulas().find(potion) else {
        return Ok(format!("No formula for {potion}"));
    };
    let components: Vec<ItemStack> = formula.components().to_vec();
    if components
        .iter()
        .any(|c| !world.inventory().has_at_least(&c.name, c.quantity))
    {
        return Ok("Not enough ingredients".to_string());
    }
    for component in &components {
        world.inventory_mut().try_remove(&component.name, component.quantity);
    }
    world.inventory_mut().add(potion, 1);
    Ok(format!("Alchemy item created: {potion}"))
}

/// `Geralt learns ...` - two sub-forms, recognized by marker phrase.
fn learn(rest: &str, world: &mut World) -> HandlerResult {
    let sentence = rest.trim();
    if let Some(at) = sentence.find(phrase::EFFECTIVE_AGAINST) {
        let left = &sentence[..at];
        let right = &sentence[at + phrase::EFFECTIVE_AGAINST.len()..];
        return learn_effectiveness(left, right, world);
    }
    if let Some(at) = sentence.find(phrase::CONSISTS_OF) {
        let list = &sentence[at + phrase::CONSISTS_OF.len()..];
        return learn_formula(sentence, list, world);
    }
    Err(InvalidCommand)
}

/// `<counter> <kind> is effective against <enemy>`.
fn learn_effectiveness(left: &str, right: &str, world: &mut World) -> HandlerResult {
    let mut words = left.split_whitespace();
    let counter = words.next().ok_or(InvalidCommand)?;
    let kind_word = words.next().ok_or(InvalidCommand)?;
    if words.next().is_some() {
        return Err(InvalidCommand);
    }
    let kind = CounterKind::from_word(kind_word).ok_or(InvalidCommand)?;
    let enemy = right.trim();
    if enemy.is_empty() {
        return Err(InvalidCommand);
    }
    Ok(match world.bestiary_mut().upsert(enemy, kind, counter) {
        UpsertOutcome::Added => format!("New bestiary entry added: {enemy}"),
        UpsertOutcome::Unchanged => "Already known effectiveness".to_string(),
        UpsertOutcome::Updated => format!("Bestiary entry updated: {enemy}"),
    })
}

/// `<name> potion consists of <components>`.
///
/// An empty component list is legal and records a zero-component
/// formula; a malformed entry creates nothing at all. The duplicate
/// check runs after parsing, so a malformed list is `INVALID` even
/// when the potion is already known.
fn learn_formula(sentence: &str, list: &str, world: &mut World) -> HandlerResult {
    let (name_part, _) =
        text::split_on_word(sentence, phrase::POTION_WORD).ok_or(InvalidCommand)?;
    let potion_name = name_part.trim();
    if potion_name.is_empty() {
        return Err(InvalidCommand);
    }
    let list = list.trim();
    let mut components = Vec::new();
    if !list.is_empty() {
        for item in EntryList::new(list) {
            components.push(entry::parse_entry(item).ok_or(InvalidCommand)?);
        }
    }
    if world.formulas().knows(potion_name) {
        return Ok("Already known formula".to_string());
    }
    let formula = Formula::new(potion_name, components).map_err(|_| InvalidCommand)?;
    world.formulas_mut().add(formula);
    Ok(format!("New alchemy formula obtained: {potion_name}"))
}

/// `Geralt encounters a <monster>`.
///
/// A sign counter is usable whenever known; a potion counter only
/// while at least one unit is held. Winning consumes one unit of the
/// potion (signs cost nothing) and awards one trophy.
fn encounter(rest: &str, world: &mut World) -> HandlerResult {
    let monster = rest.trim();
    let Some(known) = world.bestiary().find(monster) else {
        return Ok(UNPREPARED.to_string());
    };
    let usable_potion = known
        .effective_potion()
        .filter(|p| world.inventory().has_at_least(p, 1))
        .map(str::to_string);
    let has_sign = known.effective_sign().is_some();
    if !has_sign && usable_potion.is_none() {
        return Ok(UNPREPARED.to_string());
    }
    if let Some(potion) = usable_potion {
        world.inventory_mut().try_remove(&potion, 1);
    }
    world
        .inventory_mut()
        .add(&format!("{monster}{TROPHY_SUFFIX}"), 1);
    Ok(format!("Geralt defeats {monster}"))
}
