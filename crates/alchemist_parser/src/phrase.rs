//! The literal sentence templates, as named constants.
//!
//! The accepted command language is a small fixed set of English
//! templates, not general natural language. Keeping the literals here
//! makes recognition testable and gives the line editor a completion
//! table for free.
//!
//! Imperative phrases match case-sensitively (the line must literally
//! begin `Geralt ...`); query phrases and the `Exit` command match
//! case-insensitively.

/// Loot command prefix, entry list follows.
pub const LOOT: &str = "Geralt loots ";

/// Trade command prefix, trophy list + separator + ingredient list follow.
pub const TRADE: &str = "Geralt trades ";

/// Brew command prefix, potion name follows.
pub const BREW: &str = "Geralt brews ";

/// Learn command prefix; the remainder selects one of two sub-forms.
pub const LEARN: &str = "Geralt learns ";

/// Encounter command prefix, monster name follows.
pub const ENCOUNTER: &str = "Geralt encounters a ";

/// Whole-line exit command, case-insensitive.
pub const EXIT: &str = "Exit";

/// Separator word between a trade's trophy and ingredient lists.
pub const TRADE_SEPARATOR: &str = "for";

/// Marker phrase of the learn command's effectiveness sub-form.
pub const EFFECTIVE_AGAINST: &str = "is effective against";

/// Marker phrase of the learn command's formula sub-form.
pub const CONSISTS_OF: &str = "consists of";

/// Word terminating the potion name in the formula sub-form.
pub const POTION_WORD: &str = "potion";

/// Effectiveness query prefix.
pub const QUERY_EFFECTIVE: &str = "What is effective against";

/// Ingredient total query prefix.
pub const QUERY_TOTAL_INGREDIENT: &str = "Total ingredient";

/// Potion total query prefix.
pub const QUERY_TOTAL_POTION: &str = "Total potion";

/// Trophy total query prefix.
pub const QUERY_TOTAL_TROPHY: &str = "Total trophy";

/// Formula contents query prefix.
pub const QUERY_CONTENTS: &str = "What is in";

/// The reply token for unrecognized or malformed input.
pub const INVALID: &str = "INVALID";

/// Every phrase a line may begin with, for tab completion.
pub const COMPLETIONS: &[&str] = &[
    LOOT,
    TRADE,
    BREW,
    LEARN,
    ENCOUNTER,
    QUERY_EFFECTIVE,
    QUERY_TOTAL_INGREDIENT,
    QUERY_TOTAL_POTION,
    QUERY_TOTAL_TROPHY,
    QUERY_CONTENTS,
    EXIT,
];
