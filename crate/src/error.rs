use thiserror::Error;

/// Errors returned when changing a rule set. Inflecting a word never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// A pattern built from a rule could not be compiled. For regular rules
    /// this is the authored `find` fragment or one of its case variants. For
    /// irregulars and uncountables the words are escaped, so this only
    /// happens if the resulting regex is too large.
    #[error("could not compile pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A line in a rules file could not be parsed.
    #[error("line {line} of the rules file is not a valid rule: `{content}`")]
    Parse { line: usize, content: String },

    /// A rule can't be written to a rules file in a way that would parse back
    /// to the same rule.
    #[error("the <{table}> rule `{rule}` can't be written to a rules file")]
    Unrepresentable { table: String, rule: String },

    /// A line in a rules file named a table we don't know about.
    #[error("line {line} of the rules file names an unknown table `<{table}>`")]
    UnknownTable { line: usize, table: String },
}

pub type Result<T> = std::result::Result<T, Error>;
