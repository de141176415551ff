//! Reading and writing rules files.
//!
//! A rules file has one rule per line. Each line starts with the table the
//! rule belongs to in angle brackets. Regular rules and irregulars use `=>`
//! to separate the two halves of the rule:
//!
//! ```text
//! # Blank lines and lines starting with "#" are ignored.
//! <plural>      (bu)s$ => ${1}ses
//! <singular>    (bus)(es)?$ => ${1}
//! <singular>    s$ =>                # an empty replacement
//! <irregular>   criterion => criteria
//! <uncountable> furniture
//! ```
//!
//! Rules are added in the order they appear in the file.
use crate::{
    error::{Error, Result},
    rules::{Irregular, Regular, RuleSet},
};
use once_cell::sync::Lazy;
use regex::Regex;

static BLANK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\s*\z").expect("Could not parse blank line regex"));

static COMMENT_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A\s*#").expect("Could not parse comment line regex"));

static RULE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        \A \s*
        < \s* (?P<table>[^>]+?) \s* >   # the table tag
        \s* (?P<find>.*?)               # a pattern or a word
        (?:
            \s+ (?P<arrow>=>)           # the separator
            (?: \s+ (?P<replace>.*?) )? # an optional replacement
        )?
        (?: \s+ \# .* )?                # an optional trailing comment
        \s* \z
    "#,
    )
    .expect("Could not parse rule line regex")
});

impl RuleSet {
    /// Parses the text of a rules file into a new rule set. The patterns are
    /// not compiled here, so an invalid pattern is only reported when the
    /// rule set is turned into an [Inflections](crate::Inflections).
    ///
    /// ```
    /// use inflection::{Irregular, RuleSet};
    ///
    /// let rules = RuleSet::parse("<irregular> goose => geese\n").unwrap();
    /// assert_eq!(rules.irregulars, vec![Irregular::new("goose", "geese")]);
    /// ```
    pub fn parse(text: &str) -> Result<RuleSet> {
        let mut rules = RuleSet::empty();

        for (i, line) in text.lines().enumerate() {
            if BLANK_LINE_RE.is_match(line) || COMMENT_LINE_RE.is_match(line) {
                continue;
            }

            let line_num = i + 1;
            let bad_line = || Error::Parse {
                line: line_num,
                content: line.to_string(),
            };

            let caps = RULE_LINE_RE.captures(line).ok_or_else(bad_line)?;
            let find = caps.name("find").map(|m| m.as_str()).unwrap_or_default();
            if find.is_empty() {
                return Err(bad_line());
            }
            let has_arrow = caps.name("arrow").is_some();
            let replace = caps.name("replace").map(|m| m.as_str()).unwrap_or_default();

            match caps.name("table").map(|m| m.as_str()).unwrap_or_default() {
                "plural" if has_arrow => rules.plurals.push(Regular::new(find, replace)),
                "singular" if has_arrow => rules.singulars.push(Regular::new(find, replace)),
                "irregular" if has_arrow && !replace.is_empty() => {
                    rules.irregulars.push(Irregular::new(find, replace))
                }
                "uncountable" if !has_arrow => rules.uncountables.push(find.to_string()),
                "plural" | "singular" | "irregular" | "uncountable" => return Err(bad_line()),
                table => {
                    return Err(Error::UnknownTable {
                        line: line_num,
                        table: table.to_string(),
                    })
                }
            }
        }

        Ok(rules)
    }

    /// Renders the rule set in the rules file format. Parsing the output
    /// gives back an identical rule set.
    ///
    /// Some rules that can be added with [Inflections](crate::Inflections)
    /// methods have no representation in a rules file, such as a rule with an
    /// empty `find`, a `find` containing ` => ` or ` #`, or a replacement
    /// with leading or trailing whitespace. Rendering any of these returns an
    /// [Error::Unrepresentable] naming the rule.
    pub fn to_rules_file(&self) -> Result<String> {
        let mut lines: Vec<String> = vec![];

        for word in &self.uncountables {
            check_representable("uncountable", word, None)?;
            lines.push(format!("<uncountable> {}", word));
        }
        for Irregular { singular, plural } in &self.irregulars {
            if plural.is_empty() {
                return Err(unrepresentable("irregular", singular, Some(plural.as_str())));
            }
            check_representable("irregular", singular, Some(plural.as_str()))?;
            lines.push(format!("<irregular> {} => {}", singular, plural));
        }
        for (tag, regulars) in [("plural", &self.plurals), ("singular", &self.singulars)] {
            for Regular { find, replace } in regulars {
                check_representable(tag, find, Some(replace.as_str()))?;
                let line = if replace.is_empty() {
                    format!("<{}> {} =>", tag, find)
                } else {
                    format!("<{}> {} => {}", tag, find, replace)
                };
                lines.push(line);
            }
        }

        let mut file = lines.join("\n");
        if !file.is_empty() {
            file.push('\n');
        }
        Ok(file)
    }
}

// The left side of a rule would end early at a separator followed by
// whitespace or the end of the line, or at a comment. The right side would
// end early at a comment. A leading space is added before checking so
// that a separator or comment at the very start is caught too.
static LEFT_SIDE_CUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s(?:=>(?:\s|$)|#)").expect("Could not parse left side cut regex"));

static RIGHT_SIDE_CUT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s#").expect("Could not parse right side cut regex"));

fn check_representable(table: &str, left: &str, right: Option<&str>) -> Result<()> {
    let survives = |side: &str| {
        side.trim() == side && !side.contains(|c: char| c == '\n' || c == '\r')
    };

    let left_ok = !left.is_empty()
        && survives(left)
        && !LEFT_SIDE_CUT_RE.is_match(&format!(" {}", left));
    let right_ok = match right {
        Some(right) => {
            survives(right) && !RIGHT_SIDE_CUT_RE.is_match(&format!(" {}", right))
        }
        None => true,
    };

    if left_ok && right_ok {
        return Ok(());
    }
    Err(unrepresentable(table, left, right))
}

fn unrepresentable(table: &str, left: &str, right: Option<&str>) -> Error {
    let rule = match right {
        Some(right) => format!("{} => {}", left, right),
        None => left.to_string(),
    };
    Error::Unrepresentable {
        table: table.to_string(),
        rule,
    }
}
