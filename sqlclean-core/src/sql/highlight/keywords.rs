//! SQL keyword set
//!
//! Keywords are tested in the order listed here and the first whole-word match
//! wins. Because a match must end on a word boundary, a shorter keyword that
//! is a prefix of a longer one (`IN` / `INNER`) can never shadow it, so the
//! order only matters for readability.

/// Reserved words highlighted as keywords, matched case-insensitively.
pub const KEYWORDS: &[&str] = &[
    "SELECT",
    "FROM",
    "WHERE",
    "JOIN",
    "LEFT",
    "RIGHT",
    "INNER",
    "OUTER",
    "FULL",
    "CROSS",
    "ON",
    "USING",
    "WITH",
    "AS",
    "INSERT",
    "UPDATE",
    "DELETE",
    "MERGE",
    "VALUES",
    "INTO",
    "SET",
    "CREATE",
    "ALTER",
    "DROP",
    "TRUNCATE",
    "TABLE",
    "VIEW",
    "INDEX",
    "PRIMARY",
    "FOREIGN",
    "KEY",
    "REFERENCES",
    "DEFAULT",
    "AND",
    "OR",
    "NOT",
    "NULL",
    "IS",
    "IN",
    "LIKE",
    "BETWEEN",
    "EXISTS",
    "DISTINCT",
    "GROUP",
    "BY",
    "ORDER",
    "ASC",
    "DESC",
    "HAVING",
    "LIMIT",
    "OFFSET",
    "UNION",
    "INTERSECT",
    "EXCEPT",
    "ALL",
    "CASE",
    "WHEN",
    "THEN",
    "ELSE",
    "END",
    "OVER",
    "PARTITION",
    "BEGIN",
    "COMMIT",
    "ROLLBACK",
];

/// Whether `c` can be part of an identifier.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whether `word` is a keyword, ignoring case.
pub fn is_keyword(word: &str) -> bool {
    KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(word))
}

/// Length in bytes of the first keyword that matches at `pos` and ends on a
/// word boundary.
///
/// This only checks the end of the match; whether the character before `pos`
/// allows a keyword to start is the caller's concern.
pub fn keyword_at(line: &str, pos: usize) -> Option<usize> {
    let rest = &line.as_bytes()[pos..];
    KEYWORDS.iter().find_map(|kw| {
        let len = kw.len();
        if rest.len() < len || !rest[..len].eq_ignore_ascii_case(kw.as_bytes()) {
            return None;
        }
        // Matched bytes are ASCII, so `pos + len` is a char boundary.
        let boundary = line[pos + len..]
            .chars()
            .next()
            .map_or(true, |c| !is_word_char(c));
        boundary.then_some(len)
    })
}
