//! The [Inflections] struct, which owns a [RuleSet] and the matchers compiled
//! from it.
//!
//! # Examples
//!
//! ```
//! use inflection::Inflections;
//!
//! let mut inflections = Inflections::new();
//! assert_eq!(inflections.plural("person"), "people");
//! assert_eq!(inflections.singular("Buses"), "Bus");
//!
//! inflections.add_irregular("criterion", "criteria").unwrap();
//! assert_eq!(inflections.plural("CRITERION"), "CRITERIA");
//! ```
use crate::{
    compile::{compile, Compiled, Matcher},
    error::Result,
    rules::{Irregular, Regular, RuleSet},
};
use std::borrow::Cow;
use tracing::{debug, trace, warn};

/// A set of inflection rules, ready to use.
///
/// Every method that changes the rules recompiles all of the matchers before
/// it returns. If you are making a lot of changes at once, use
/// [Inflections::edit] to recompile only once.
///
/// If a change would produce a pattern that doesn't compile, the method
/// returns an error and the rules are left exactly as they were.
#[derive(Clone, Debug)]
pub struct Inflections {
    rules: RuleSet,
    compiled: Compiled,
}

impl Inflections {
    /// Creates a new `Inflections` using the built-in English rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new `Inflections` with no rules at all. Every word is
    /// returned as-is until you add some.
    pub fn empty() -> Self {
        Self {
            rules: RuleSet::empty(),
            compiled: Compiled {
                plurals: vec![],
                singulars: vec![],
            },
        }
    }

    /// Compiles the given rules, returning an error if any pattern is
    /// invalid.
    pub fn from_rules(rules: RuleSet) -> Result<Self> {
        let compiled = compile_logged(&rules)?;
        Ok(Self { rules, compiled })
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the plural form of the word. If no rule matches, the word is
    /// returned unchanged. The case of the word is preserved, so "person"
    /// becomes "people", "Person" becomes "People", and "PERSON" becomes
    /// "PEOPLE". Whenever possible this method avoids allocating a new
    /// [String](std::string::String).
    pub fn plural<'a>(&self, word: &'a str) -> Cow<'a, str> {
        apply(&self.compiled.plurals, word)
    }

    /// Returns the singular form of the word. If no rule matches, the word
    /// is returned unchanged.
    pub fn singular<'a>(&self, word: &'a str) -> Cow<'a, str> {
        apply(&self.compiled.singulars, word)
    }

    /// Recompiles the matchers from the current rules.
    pub fn rebuild(&mut self) -> Result<()> {
        self.compiled = compile_logged(&self.rules)?;
        Ok(())
    }

    /// Makes any number of changes to the rules and then recompiles once. If
    /// the changed rules don't compile, or `f` panics, the rules are left as
    /// they were.
    ///
    /// ```
    /// use inflection::{Inflections, Irregular, Regular};
    ///
    /// let mut inflections = Inflections::new();
    /// inflections
    ///     .edit(|rules| {
    ///         rules.irregulars.push(Irregular::new("goose", "geese"));
    ///         rules.irregulars.push(Irregular::new("tooth", "teeth"));
    ///         rules.plurals.push(Regular::new("(cact)us$", "${1}i"));
    ///     })
    ///     .unwrap();
    /// assert_eq!(inflections.plural("goose"), "geese");
    /// assert_eq!(inflections.plural("Cactus"), "Cacti");
    /// ```
    pub fn edit<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut RuleSet),
    {
        // The closure works on a copy so that neither an error nor a panic
        // can leave the tables out of step with the compiled matchers.
        let mut rules = self.rules.clone();
        f(&mut rules);
        self.compiled = compile_logged(&rules)?;
        self.rules = rules;
        Ok(())
    }

    /// Appends a regular plural rule. Appended rules are tried before all
    /// existing regular rules.
    pub fn add_plural(
        &mut self,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Result<()> {
        let rule = Regular::new(find, replace);
        self.edit(|rules| rules.plurals.push(rule))
    }

    /// Appends a regular singular rule. Appended rules are tried before all
    /// existing regular rules.
    pub fn add_singular(
        &mut self,
        find: impl Into<String>,
        replace: impl Into<String>,
    ) -> Result<()> {
        let rule = Regular::new(find, replace);
        self.edit(|rules| rules.singulars.push(rule))
    }

    /// Appends an irregular pair. The pair is matched at the end of a word in
    /// upper case, title case, and lower case, whatever case it was written
    /// in.
    pub fn add_irregular(
        &mut self,
        singular: impl Into<String>,
        plural: impl Into<String>,
    ) -> Result<()> {
        let irregular = Irregular::new(singular, plural);
        self.edit(|rules| rules.irregulars.push(irregular))
    }

    /// Appends a word that is the same in the singular and plural.
    pub fn add_uncountable(&mut self, word: impl Into<String>) -> Result<()> {
        let word = word.into();
        self.edit(|rules| rules.uncountables.push(word))
    }

    /// Replaces all of the regular plural rules.
    ///
    /// Beware of rules with an empty `find`. An empty pattern matches every
    /// word, so it will shadow every rule that comes before it in the table.
    pub fn set_plurals(&mut self, plurals: Vec<Regular>) -> Result<()> {
        self.edit(|rules| rules.plurals = plurals)
    }

    /// Replaces all of the regular singular rules. The same warning about
    /// empty patterns as for [Inflections::set_plurals] applies.
    pub fn set_singulars(&mut self, singulars: Vec<Regular>) -> Result<()> {
        self.edit(|rules| rules.singulars = singulars)
    }

    /// Replaces all of the irregular pairs.
    pub fn set_irregulars(&mut self, irregulars: Vec<Irregular>) -> Result<()> {
        self.edit(|rules| rules.irregulars = irregulars)
    }

    /// Replaces all of the uncountable words.
    pub fn set_uncountables(&mut self, uncountables: Vec<String>) -> Result<()> {
        self.edit(|rules| rules.uncountables = uncountables)
    }

    /// Returns a copy of the regular plural rules. Changing the returned
    /// `Vec` has no effect on this `Inflections`.
    pub fn plurals(&self) -> Vec<Regular> {
        self.rules.plurals.clone()
    }

    /// Returns a copy of the regular singular rules.
    pub fn singulars(&self) -> Vec<Regular> {
        self.rules.singulars.clone()
    }

    /// Returns a copy of the irregular pairs.
    pub fn irregulars(&self) -> Vec<Irregular> {
        self.rules.irregulars.clone()
    }

    /// Returns a copy of the uncountable words.
    pub fn uncountables(&self) -> Vec<String> {
        self.rules.uncountables.clone()
    }

    /// The compiled plural matchers, in the order they are tried.
    pub fn plural_matchers(&self) -> &[Matcher] {
        &self.compiled.plurals
    }

    /// The compiled singular matchers, in the order they are tried.
    pub fn singular_matchers(&self) -> &[Matcher] {
        &self.compiled.singulars
    }

    /// Parses a rules file and appends its rules to this `Inflections`,
    /// recompiling once. See [RuleSet::parse] for the file format.
    pub fn load_rules(&mut self, text: &str) -> Result<()> {
        let extra = RuleSet::parse(text)?;
        self.edit(|rules| rules.extend(extra))
    }
}

impl Default for Inflections {
    fn default() -> Self {
        Self::from_rules(RuleSet::default()).expect("Could not compile the built-in rules")
    }
}

fn compile_logged(rules: &RuleSet) -> Result<Compiled> {
    match compile(rules) {
        Ok(compiled) => {
            debug!(
                plural_matchers = compiled.plurals.len(),
                singular_matchers = compiled.singulars.len(),
                "compiled inflection rules"
            );
            Ok(compiled)
        }
        Err(e) => {
            warn!(error = %e, "rejected inflection rules");
            Err(e)
        }
    }
}

fn apply<'a>(matchers: &[Matcher], word: &'a str) -> Cow<'a, str> {
    for (i, matcher) in matchers.iter().enumerate() {
        if let Some(new) = matcher.apply(word) {
            trace!(
                word,
                idx = i,
                regex = matcher.regex().as_str(),
                result = &*new,
                "word matched"
            );
            return new;
        }
    }
    Cow::Borrowed(word)
}
