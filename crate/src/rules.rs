//! The raw rule tables that drive inflection.
//!
//! A [RuleSet] holds four ordered tables: regular plural rules, regular
//! singular rules, irregular word pairs, and uncountable words. The tables
//! are plain data. They do nothing until they are compiled into an
//! [Inflections](crate::Inflections).
//!
//! Order matters. Regular rules are tried from the *last* entry to the
//! first, so appending a rule lets it override the built-in rules without
//! removing anything.
//!
//! # Examples
//!
//! ```
//! use inflection::{Inflections, Regular, RuleSet};
//!
//! let mut rules = RuleSet::default();
//! rules.plurals.push(Regular::new("(cact)us$", "${1}i"));
//! rules.uncountables.push("furniture".to_string());
//!
//! let inflections = Inflections::from_rules(rules).unwrap();
//! assert_eq!(inflections.plural("cactus"), "cacti");
//! assert_eq!(inflections.plural("furniture"), "furniture");
//! ```

/// A regular rule is a regex fragment and a replacement template.
///
/// The `find` fragment is usually anchored to the end of the word with `$`,
/// though some built-in rules anchor the whole word with `^...$`. The
/// `replace` template can refer to capture groups in `find` as `${1}`,
/// `${2}`, and so on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Regular {
    pub find: String,
    pub replace: String,
}

impl Regular {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self {
            find: find.into(),
            replace: replace.into(),
        }
    }
}

/// A word whose plural can't be expressed by a suffix rule, like "person"
/// and "people". One pair is used for both directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Irregular {
    pub singular: String,
    pub plural: String,
}

impl Irregular {
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: singular.into(),
            plural: plural.into(),
        }
    }
}

/// The four rule tables.
///
/// `RuleSet::default()` returns the built-in English rules, while
/// [RuleSet::empty] returns a rule set with nothing in it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleSet {
    pub plurals: Vec<Regular>,
    pub singulars: Vec<Regular>,
    pub irregulars: Vec<Irregular>,
    pub uncountables: Vec<String>,
}

impl RuleSet {
    pub fn empty() -> Self {
        Self {
            plurals: vec![],
            singulars: vec![],
            irregulars: vec![],
            uncountables: vec![],
        }
    }

    /// Appends every table in `other` to the matching table in this rule
    /// set, keeping the order of both.
    pub fn extend(&mut self, other: RuleSet) {
        self.plurals.extend(other.plurals);
        self.singulars.extend(other.singulars);
        self.irregulars.extend(other.irregulars);
        self.uncountables.extend(other.uncountables);
    }

    pub fn is_empty(&self) -> bool {
        self.plurals.is_empty()
            && self.singulars.is_empty()
            && self.irregulars.is_empty()
            && self.uncountables.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            plurals: regulars_from_pairs(PLURALS),
            singulars: regulars_from_pairs(SINGULARS),
            irregulars: IRREGULARS
                .iter()
                .map(|(s, p)| Irregular::new(*s, *p))
                .collect(),
            uncountables: UNCOUNTABLES.iter().map(|w| w.to_string()).collect(),
        }
    }
}

fn regulars_from_pairs(pairs: &[(&str, &str)]) -> Vec<Regular> {
    pairs.iter().map(|(f, r)| Regular::new(*f, *r)).collect()
}

// These tables come from the inflections in Rails' ActiveSupport. The order
// of the regular rules is significant because they're tried last to first.
const PLURALS: &[(&str, &str)] = &[
    ("([a-z])$", "${1}s"),
    ("s$", "s"),
    ("^(ax|test)is$", "${1}es"),
    ("(octop|vir)us$", "${1}i"),
    ("(octop|vir)i$", "${1}i"),
    ("(alias|status)$", "${1}es"),
    ("(bu)s$", "${1}ses"),
    ("(buffal|tomat)o$", "${1}oes"),
    ("([ti])um$", "${1}a"),
    ("([ti])a$", "${1}a"),
    ("sis$", "ses"),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves"),
    ("(hive)$", "${1}s"),
    ("([^aeiouy]|qu)y$", "${1}ies"),
    ("(x|ch|ss|sh)$", "${1}es"),
    ("(matr|vert|ind)(?:ix|ex)$", "${1}ices"),
    ("^(m|l)ouse$", "${1}ice"),
    ("^(m|l)ice$", "${1}ice"),
    ("^(ox)$", "${1}en"),
    ("^(oxen)$", "${1}"),
    ("(quiz)$", "${1}zes"),
];

const SINGULARS: &[(&str, &str)] = &[
    ("s$", ""),
    ("(ss)$", "${1}"),
    ("(n)ews$", "${1}ews"),
    ("([ti])a$", "${1}um"),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
    ),
    ("(^analy)(sis|ses)$", "${1}sis"),
    ("([^f])ves$", "${1}fe"),
    ("(hive)s$", "${1}"),
    ("(tive)s$", "${1}"),
    ("([lr])ves$", "${1}f"),
    ("([^aeiouy]|qu)ies$", "${1}y"),
    ("(s)eries$", "${1}eries"),
    ("(m)ovies$", "${1}ovie"),
    ("(c)ookies$", "${1}ookie"),
    ("(x|ch|ss|sh)es$", "${1}"),
    ("^(m|l)ice$", "${1}ouse"),
    ("(bus)(es)?$", "${1}"),
    ("(o)es$", "${1}"),
    ("(shoe)s$", "${1}"),
    ("(cris|test)(is|es)$", "${1}is"),
    ("^(a)x[ie]s$", "${1}xis"),
    ("(octop|vir)(us|i)$", "${1}us"),
    ("(alias|status)(es)?$", "${1}"),
    ("^(ox)en", "${1}"),
    ("(vert|ind)ices$", "${1}ex"),
    ("(matr)ices$", "${1}ix"),
    ("(quiz)zes$", "${1}"),
    ("(database)s$", "${1}"),
];

// "mombie" is not a typo on our end. It's in the upstream data and we keep it
// so that the built-in rules behave identically.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("mombie", "mombies"),
];

const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];
