#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Pluralize and singularize English nouns.
//!
//! This crate is meant for code generators and ORMs, which need to turn a
//! type name like "Person" into a table name like "People", or a collection
//! name back into an entity name. It is not a general purpose natural
//! language tool. If you need to inflect verbs, adjectives, or articles, or
//! you want the best possible result for arbitrary English text, look at
//! [en-inflexion](https://crates.io/crates/en-inflexion) instead.
//!
//! The rules come from the inflections in Rails' ActiveSupport. They are
//! entirely table-driven, and you can add your own rules or replace the
//! tables altogether.
//!
//! # Examples
//!
//! ```
//! assert_eq!(inflection::plural("person"), "people");
//! assert_eq!(inflection::plural("Person"), "People");
//! assert_eq!(inflection::plural("PERSON"), "PEOPLE");
//! assert_eq!(inflection::plural("FancyPerson"), "FancyPeople");
//!
//! assert_eq!(inflection::singular("people"), "person");
//! assert_eq!(inflection::singular("Buses"), "Bus");
//! ```
//!
//! # How Words Are Inflected
//!
//! There are three kinds of rules:
//!
//! * **Uncountable** words, like "fish" or "equipment", are the same in the
//!   singular and plural. These are matched against the whole word, ignoring
//!   case.
//! * **Irregular** pairs, like "person" and "people", are matched against
//!   the end of the word. This means that "salesperson" becomes
//!   "salespeople".
//! * **Regular** rules are a regex and a replacement, like `(quiz)$` and
//!   `${1}zes`.
//!
//! Uncountable words are checked first, then irregulars, then regular rules.
//! Regular rules are checked starting with the one added *last*, so any rule
//! you add is checked before the built-in rules. The first rule that matches
//! is used and no other rules are checked. If no rule matches, the word is
//! returned unchanged.
//!
//! Each irregular pair and regular rule is checked in upper case, in the case
//! it was written in, and finally ignoring case. This is how "PERSON" becomes
//! "PEOPLE" and "Quiz" becomes "Quizzes".
//!
//! # Custom Rules
//!
//! The free functions in this crate all share a single process-wide
//! [Inflections]. Changes made with [add_plural], [add_irregular], etc. are
//! seen by every caller:
//!
//! ```
//! inflection::add_uncountable("furniture").unwrap();
//! assert_eq!(inflection::plural("furniture"), "furniture");
//!
//! inflection::add_plural("(cact)us$", "${1}i").unwrap();
//! assert_eq!(inflection::plural("Cactus"), "Cacti");
//! ```
//!
//! If you'd rather not share rules, or you need more than one set of rules,
//! create your own [Inflections] and use its methods instead. Rules can also
//! be kept in a file. See [RuleSet::parse] for the format.
//!
//! # Errors
//!
//! Inflecting a word never fails. Changing the rules returns an [Error] if
//! any pattern can't be compiled, in which case the rules are not changed at
//! all.
//!
//! # Logging
//!
//! This crate logs using [tracing](https://docs.rs/tracing). Every recompile
//! is logged at the `debug` level, and every matched word at the `trace`
//! level.

mod compile;
mod error;
mod inflections;
mod rules;
mod rules_file;
mod util;

pub use crate::{
    compile::Matcher,
    error::{Error, Result},
    inflections::Inflections,
    rules::{Irregular, Regular, RuleSet},
};

use once_cell::sync::Lazy;
use std::{
    borrow::Cow,
    sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

// Every change goes through `Inflections::edit`, which only stores the new
// tables once they have compiled. A panic while the write lock is held leaves
// the old tables and matchers in place, so a poisoned lock is safe to reuse.
static INFLECTIONS: Lazy<RwLock<Inflections>> = Lazy::new(|| RwLock::new(Inflections::new()));

fn read() -> RwLockReadGuard<'static, Inflections> {
    INFLECTIONS.read().unwrap_or_else(PoisonError::into_inner)
}

fn write() -> RwLockWriteGuard<'static, Inflections> {
    INFLECTIONS.write().unwrap_or_else(PoisonError::into_inner)
}

/// Returns the plural form of the word using the process-wide rules. See
/// [Inflections::plural].
pub fn plural(word: &str) -> Cow<'_, str> {
    read().plural(word)
}

/// Returns the singular form of the word using the process-wide rules. See
/// [Inflections::singular].
pub fn singular(word: &str) -> Cow<'_, str> {
    read().singular(word)
}

/// Appends a plural rule to the process-wide rules. See
/// [Inflections::add_plural].
pub fn add_plural(find: impl Into<String>, replace: impl Into<String>) -> Result<()> {
    write().add_plural(find, replace)
}

/// Appends a singular rule to the process-wide rules. See
/// [Inflections::add_singular].
pub fn add_singular(find: impl Into<String>, replace: impl Into<String>) -> Result<()> {
    write().add_singular(find, replace)
}

/// Appends an irregular pair to the process-wide rules. See
/// [Inflections::add_irregular].
pub fn add_irregular(singular: impl Into<String>, plural: impl Into<String>) -> Result<()> {
    write().add_irregular(singular, plural)
}

/// Appends an uncountable word to the process-wide rules. See
/// [Inflections::add_uncountable].
pub fn add_uncountable(word: impl Into<String>) -> Result<()> {
    write().add_uncountable(word)
}

/// Returns a copy of the process-wide plural rules. See
/// [Inflections::plurals].
pub fn get_plural() -> Vec<Regular> {
    read().plurals()
}

/// Returns a copy of the process-wide singular rules. See
/// [Inflections::singulars].
pub fn get_singular() -> Vec<Regular> {
    read().singulars()
}

/// Returns a copy of the process-wide irregular pairs. See
/// [Inflections::irregulars].
pub fn get_irregular() -> Vec<Irregular> {
    read().irregulars()
}

/// Returns a copy of the process-wide uncountable words. See
/// [Inflections::uncountables].
pub fn get_uncountable() -> Vec<String> {
    read().uncountables()
}

/// Replaces the process-wide plural rules. See [Inflections::set_plurals].
pub fn set_plural(plurals: Vec<Regular>) -> Result<()> {
    write().set_plurals(plurals)
}

/// Replaces the process-wide singular rules. See
/// [Inflections::set_singulars].
pub fn set_singular(singulars: Vec<Regular>) -> Result<()> {
    write().set_singulars(singulars)
}

/// Replaces the process-wide irregular pairs. See
/// [Inflections::set_irregulars].
pub fn set_irregular(irregulars: Vec<Irregular>) -> Result<()> {
    write().set_irregulars(irregulars)
}

/// Replaces the process-wide uncountable words. See
/// [Inflections::set_uncountables].
pub fn set_uncountable(uncountables: Vec<String>) -> Result<()> {
    write().set_uncountables(uncountables)
}

/// Makes several changes to the process-wide rules with a single recompile.
/// See [Inflections::edit].
pub fn edit<F>(f: F) -> Result<()>
where
    F: FnOnce(&mut RuleSet),
{
    write().edit(f)
}

/// Appends the rules in a rules file to the process-wide rules. See
/// [RuleSet::parse] for the format.
pub fn load_rules(text: &str) -> Result<()> {
    write().load_rules(text)
}
