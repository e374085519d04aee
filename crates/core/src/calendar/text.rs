//! TEXT value escaping (RFC 5545 section 3.3.11). `ical` hands out and
//! writes property values as they appear on the wire.

/// Escapes a TEXT value for use in a content line.
///
/// Backslashes, semicolons and commas are backslash-escaped, line breaks
/// become the two-character sequence `\n`.
pub fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ';' => escaped.push_str("\\;"),
            ',' => escaped.push_str("\\,"),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => escaped.push_str("\\n"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverses [`escape_text`].
///
/// Unknown escape sequences are kept verbatim.
pub fn unescape_text(value: &str) -> String {
    let mut unescaped = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            unescaped.push(c);
            continue;
        }
        match chars.next() {
            Some('n' | 'N') => unescaped.push('\n'),
            Some(escaped @ ('\\' | ';' | ',')) => unescaped.push(escaped),
            Some(other) => {
                unescaped.push('\\');
                unescaped.push(other);
            }
            None => unescaped.push('\\'),
        }
    }
    unescaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a,b;c\\d"), "a\\,b\\;c\\\\d");
        assert_eq!(escape_text("line one\nline two"), "line one\\nline two");
        assert_eq!(escape_text("crlf\r\nend"), "crlf\\nend");
    }

    #[test]
    fn test_unescape_text() {
        assert_eq!(unescape_text("a\\,b\\;c\\\\d"), "a,b;c\\d");
        assert_eq!(unescape_text("one\\ntwo\\Nthree"), "one\ntwo\nthree");
        assert_eq!(unescape_text("keep \\x as is"), "keep \\x as is");
        assert_eq!(unescape_text("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_escaped_backslash_before_n_stays_literal() {
        assert_eq!(unescape_text("C:\\\\new"), "C:\\new");
    }
}
