use std::iter::Peekable;
use std::str::Chars;

// Upper-cases the literal text in a regex fragment. Escape sequences, group
// flags and names, and POSIX classes are copied as-is, since upper-casing
// them would change their meaning ("\d" vs "\D") or make the regex invalid
// ("(?i)", "[[:alpha:]]").
pub(crate) fn upcase_pattern(pattern: &str) -> String {
    let mut upcased = String::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                upcased.push(c);
                if let Some(escaped) = chars.next() {
                    upcased.push(escaped);
                    // Unicode classes and hex escapes can take a braced
                    // argument, like `\p{Greek}` or `\x{1F600}`.
                    if matches!(escaped, 'p' | 'P' | 'x' | 'u' | 'U') && chars.peek() == Some(&'{')
                    {
                        copy_through(&mut chars, &mut upcased, '}');
                    }
                }
            }
            '(' if chars.peek() == Some(&'?') => {
                upcased.push(c);
                for c in chars.by_ref() {
                    upcased.push(c);
                    if matches!(c, ':' | ')' | '>') {
                        break;
                    }
                }
            }
            '[' if chars.peek() == Some(&':') => {
                upcased.push(c);
                copy_through(&mut chars, &mut upcased, ']');
            }
            c => upcased.extend(c.to_uppercase()),
        }
    }

    upcased
}

// Upper-cases a replacement template, leaving references like `${1}`,
// `$name`, and the `$$` escape alone.
pub(crate) fn upcase_template(template: &str) -> String {
    let mut upcased = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            upcased.extend(c.to_uppercase());
            continue;
        }

        upcased.push(c);
        match chars.peek() {
            Some('{') => copy_through(&mut chars, &mut upcased, '}'),
            Some('$') => {
                chars.next();
                upcased.push('$');
            }
            _ => {
                while let Some(&n) = chars.peek() {
                    if !(n.is_ascii_alphanumeric() || n == '_') {
                        break;
                    }
                    upcased.push(n);
                    chars.next();
                }
            }
        }
    }

    upcased
}

fn copy_through(chars: &mut Peekable<Chars<'_>>, to: &mut String, end: char) {
    for c in chars {
        to.push(c);
        if c == end {
            return;
        }
    }
}

pub(crate) fn titlecase_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn upcase_pattern() {
        let tests = [
            ("([a-z])$", "([A-Z])$"),
            ("([^aeiouy]|qu)y$", "([^AEIOUY]|QU)Y$"),
            ("(?:([^f])fe|([lr])f)$", "(?:([^F])FE|([LR])F)$"),
            ("(matr|vert|ind)(?:ix|ex)$", "(MATR|VERT|IND)(?:IX|EX)$"),
            ("^(a)x[ie]s$", "^(A)X[IE]S$"),
            (r"\bfoo\d$", r"\bFOO\d$"),
            (r"(?i)cow$", r"(?i)COW$"),
            (r"(?i:cow)s$", r"(?i:COW)S$"),
            (r"(?P<stem>ox)$", r"(?P<stem>OX)$"),
            (r"\p{Greek}s$", r"\p{Greek}S$"),
            (r"\x{e9}s$", r"\x{e9}S$"),
            ("[[:alpha:]]s$", "[[:alpha:]]S$"),
            (r"a\.b$", r"A\.B$"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(
                super::upcase_pattern(test.0),
                test.1,
                "upcase_pattern({}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn upcase_pattern_matches_plain_upcasing_for_simple_fragments() {
        for pattern in [
            "(octop|vir)us$",
            "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
            "^(ox)en",
        ] {
            assert_eq!(super::upcase_pattern(pattern), pattern.to_uppercase());
        }
    }

    #[test]
    fn upcase_template() {
        let tests = [
            ("${1}ies", "${1}IES"),
            ("${1}${2}ves", "${1}${2}VES"),
            ("ses", "SES"),
            ("$stem-es", "$stem-ES"),
            ("$1", "$1"),
            ("$$s", "$$S"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(
                super::upcase_template(test.0),
                test.1,
                "upcase_template({}) = {}",
                test.0,
                test.1,
            );
        }
    }

    #[test]
    fn titlecase_word() {
        let tests = [
            ("person", "Person"),
            ("PEOPLE", "People"),
            ("cHILD", "Child"),
            ("élan", "Élan"),
            ("x", "X"),
            ("", ""),
        ];
        for test in tests {
            assert_eq!(super::titlecase_word(test.0), test.1);
        }
    }
}
