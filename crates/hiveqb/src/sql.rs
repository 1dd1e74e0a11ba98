//! Shared text formatting for generated statements.
//!
//! Every quoted literal and column list in hiveqb goes through this module, so
//! escaping rules live in one place.

/// Render `value` as a single-quoted string literal.
///
/// Embedded single quotes are backslash-escaped. Backslashes are passed
/// through untouched so octal delimiters like `\001` keep working.
pub fn quote_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for ch in value.chars() {
        if ch == '\'' {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('\'');
    out
}

/// Join items with `sep`, rendering each through `f`.
pub(crate) fn join_with<T>(items: &[T], sep: &str, mut f: impl FnMut(&T, &mut String)) -> String {
    let mut out = String::new();
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        f(item, &mut out);
    }
    out
}

/// Strip leading whitespace and SQL comments to find the first keyword.
pub(crate) fn strip_sql_prefix(sql: &str) -> &str {
    let mut s = sql;
    loop {
        let before = s;
        s = s.trim_start();
        if s.starts_with("--") {
            match s.find('\n') {
                Some(pos) => {
                    s = &s[pos + 1..];
                    continue;
                }
                None => return "",
            }
        }
        if s.starts_with("/*") {
            match s.find("*/") {
                Some(pos) => {
                    s = &s[pos + 2..];
                    continue;
                }
                None => return "",
            }
        }
        if s == before {
            break;
        }
    }
    s
}

/// Case-insensitive keyword match at the start of `sql`, on a word boundary.
pub(crate) fn starts_with_keyword(sql: &str, keyword: &str) -> bool {
    let Some(head) = sql.get(..keyword.len()) else {
        return false;
    };
    if !head.eq_ignore_ascii_case(keyword) {
        return false;
    }
    match sql[keyword.len()..].chars().next() {
        None => true,
        Some(c) => !(c.is_ascii_alphanumeric() || c == '_'),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_plain() {
        assert_eq!(quote_literal("/data/events"), "'/data/events'");
    }

    #[test]
    fn quote_escapes_single_quote() {
        assert_eq!(quote_literal("it's"), r"'it\'s'");
    }

    #[test]
    fn quote_keeps_backslash_escapes() {
        assert_eq!(quote_literal(r"\001"), r"'\001'");
        assert_eq!(quote_literal("\t"), "'\t'");
    }

    #[test]
    fn keyword_detection() {
        assert!(starts_with_keyword("SELECT 1", "SELECT"));
        assert!(starts_with_keyword("set x=1", "SET"));
        assert!(!starts_with_keyword("SETTINGS", "SET"));
        assert!(!starts_with_keyword("SE", "SET"));
    }

    #[test]
    fn prefix_skips_comments() {
        assert_eq!(strip_sql_prefix("  -- hi\n/* x */ DROP TABLE t"), "DROP TABLE t");
        assert_eq!(strip_sql_prefix("-- only a comment"), "");
    }

    #[test]
    fn join_with_separator() {
        let parts = ["a", "b", "c"];
        let out = join_with(&parts, ",", |p, out| out.push_str(p));
        assert_eq!(out, "a,b,c");
    }
}
