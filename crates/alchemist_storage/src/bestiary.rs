//! The bestiary: per-monster counter knowledge.
//!
//! Each monster holds two independent counter slots, one for a sign and
//! one for a potion. Either slot may be absent; both are overwritable.
//! The "already known" check is deliberately narrow: only the targeted
//! slot's current value is compared, never the other slot.

use alchemist_foundation::text;

/// Which counter slot a learned effectiveness targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterKind {
    /// A witcher sign; never consumed by an encounter.
    Sign,
    /// A potion; consumed (one unit) when used in an encounter.
    Potion,
}

impl CounterKind {
    /// Parses the kind word from a learn sentence, case-insensitively.
    /// Any word other than `sign` or `potion` is rejected.
    #[must_use]
    pub fn from_word(word: &str) -> Option<Self> {
        if text::eq_ignore_case(word, "sign") {
            Some(Self::Sign)
        } else if text::eq_ignore_case(word, "potion") {
            Some(Self::Potion)
        } else {
            None
        }
    }
}

/// What a counter upsert did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The monster was unknown; a new entry was created.
    Added,
    /// The slot was set or overwritten with a different value.
    Updated,
    /// The slot already held this exact value; nothing changed.
    Unchanged,
}

/// Counter knowledge for one monster.
#[derive(Clone, Debug)]
pub struct BestiaryEntry {
    monster_name: String,
    effective_potion: Option<String>,
    effective_sign: Option<String>,
}

impl BestiaryEntry {
    /// The monster's name, first-seen spelling preserved.
    #[must_use]
    pub fn monster_name(&self) -> &str {
        &self.monster_name
    }

    /// The potion known effective against this monster, if any.
    #[must_use]
    pub fn effective_potion(&self) -> Option<&str> {
        self.effective_potion.as_deref()
    }

    /// The sign known effective against this monster, if any.
    #[must_use]
    pub fn effective_sign(&self) -> Option<&str> {
        self.effective_sign.as_deref()
    }

    fn slot_mut(&mut self, kind: CounterKind) -> &mut Option<String> {
        match kind {
            CounterKind::Sign => &mut self.effective_sign,
            CounterKind::Potion => &mut self.effective_potion,
        }
    }
}

/// The collection of bestiary entries, one per monster.
#[derive(Clone, Debug, Default)]
pub struct Bestiary {
    entries: Vec<BestiaryEntry>,
}

impl Bestiary {
    /// Creates an empty bestiary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a monster's entry by case-insensitive name.
    #[must_use]
    pub fn find(&self, monster_name: &str) -> Option<&BestiaryEntry> {
        self.entries
            .iter()
            .find(|e| text::eq_ignore_case(&e.monster_name, monster_name))
    }

    /// Records that `value` is effective against `monster_name` in the
    /// `kind` slot.
    ///
    /// Creates the entry if the monster is unknown. If the targeted
    /// slot already holds `value` (case-insensitive) nothing changes;
    /// otherwise the slot is overwritten.
    pub fn upsert(&mut self, monster_name: &str, kind: CounterKind, value: &str) -> UpsertOutcome {
        let existing = self
            .entries
            .iter_mut()
            .find(|e| text::eq_ignore_case(&e.monster_name, monster_name));
        let Some(entry) = existing else {
            let mut entry = BestiaryEntry {
                monster_name: monster_name.to_string(),
                effective_potion: None,
                effective_sign: None,
            };
            *entry.slot_mut(kind) = Some(value.to_string());
            self.entries.push(entry);
            return UpsertOutcome::Added;
        };
        let slot = entry.slot_mut(kind);
        if slot
            .as_deref()
            .is_some_and(|current| text::eq_ignore_case(current, value))
        {
            return UpsertOutcome::Unchanged;
        }
        *slot = Some(value.to_string());
        UpsertOutcome::Updated
    }

    /// Number of known monsters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no monster is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
