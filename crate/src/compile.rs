//! Turns a [RuleSet] into the ordered lists of [Matcher]s that are actually
//! applied to words.
//!
//! Both lists are built the same way, and in this order:
//!
//! 1. One case-insensitive whole-word matcher for each uncountable word.
//! 2. Three matchers for each irregular pair, in table order. These match
//!    the upper case, title case, and lower case forms of the word at the end
//!    of the input, so "Salesperson" becomes "Salespeople".
//! 3. Three matchers for each regular rule, starting with the *last* rule in
//!    the table. The variants are the fragment upper-cased, the fragment as
//!    written, and the fragment with `(?i)` prepended.
//!
//! The first matcher that matches a word wins.
use crate::{
    error::{Error, Result},
    rules::{Irregular, Regular, RuleSet},
    util,
};
use regex::Regex;
use std::borrow::Cow;

/// A compiled regex together with the replacement template to apply when it
/// matches.
#[derive(Clone, Debug)]
pub struct Matcher {
    regex: Regex,
    replace: String,
}

impl Matcher {
    fn new(pattern: &str, replace: String) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex, replace })
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn replace(&self) -> &str {
        &self.replace
    }

    /// Returns `None` if the regex doesn't match the word. Otherwise every
    /// match is replaced using the template.
    pub(crate) fn apply<'a>(&self, word: &'a str) -> Option<Cow<'a, str>> {
        if !self.regex.is_match(word) {
            return None;
        }
        Some(self.regex.replace_all(word, self.replace.as_str()))
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Compiled {
    pub(crate) plurals: Vec<Matcher>,
    pub(crate) singulars: Vec<Matcher>,
}

pub(crate) fn compile(rules: &RuleSet) -> Result<Compiled> {
    let irregular_count = rules.irregulars.len() * 3;
    let mut plurals = Vec::with_capacity(
        rules.uncountables.len() + irregular_count + rules.plurals.len() * 3,
    );
    let mut singulars = Vec::with_capacity(
        rules.uncountables.len() + irregular_count + rules.singulars.len() * 3,
    );

    for word in &rules.uncountables {
        let matcher = uncountable_matcher(word)?;
        plurals.push(matcher.clone());
        singulars.push(matcher);
    }

    for Irregular { singular, plural } in &rules.irregulars {
        plurals.extend(irregular_matchers(singular, plural)?);
        singulars.extend(irregular_matchers(plural, singular)?);
    }

    for rule in rules.plurals.iter().rev() {
        plurals.extend(regular_matchers(rule)?);
    }
    for rule in rules.singulars.iter().rev() {
        singulars.extend(regular_matchers(rule)?);
    }

    Ok(Compiled { plurals, singulars })
}

fn uncountable_matcher(word: &str) -> Result<Matcher> {
    Matcher::new(
        &format!("(?i)^({})$", regex::escape(word)),
        "${1}".to_string(),
    )
}

fn irregular_matchers(from: &str, to: &str) -> Result<Vec<Matcher>> {
    let suffix = |w: &str| format!("{}$", regex::escape(w));
    Ok(vec![
        Matcher::new(&suffix(&from.to_uppercase()), to.to_uppercase())?,
        Matcher::new(
            &suffix(&util::titlecase_word(from)),
            util::titlecase_word(to),
        )?,
        Matcher::new(&suffix(&from.to_lowercase()), to.to_lowercase())?,
    ])
}

fn regular_matchers(rule: &Regular) -> Result<Vec<Matcher>> {
    // Compile the fragment as written first so that a bad fragment is
    // reported the way the caller wrote it.
    let as_written = Matcher::new(&rule.find, rule.replace.clone())?;
    let upcased = Matcher::new(
        &util::upcase_pattern(&rule.find),
        util::upcase_template(&rule.replace),
    )?;
    let insensitive = Matcher::new(&format!("(?i){}", rule.find), rule.replace.clone())?;
    Ok(vec![upcased, as_written, insensitive])
}
