//! Source normaliser for pseudocode copied from exam papers
//!
//! Exam papers are typeset with arrows, relational glyphs, box drawing and
//! Romanian diacritics. [`lint`] rewrites those into the plain spelling the
//! lexer accepts. At every position the longest matching key of the
//! replacement table wins; characters with no entry pass through unchanged.

use rustc_hash::FxHashMap;
use std::sync::OnceLock;

/// Replacement table, `(typeset, plain)`
const REPLACEMENTS: &[(&str, &str)] = &[
    // Relations and arrows
    ("≤", "<="),
    ("≠", "!="),
    ("≥", ">="),
    ("→", "->"),
    ("←", "<-"),
    ("■", "sf"),
    // Symbol font private-use glyphs
    ("\u{F0A3}", "<="),
    ("\u{F0B9}", "!="),
    ("\u{F0DF}", "<-"),
    ("\u{0001}", "<-"),
    ("\u{F0AB}", "<->"),
    ("<-->", "<->"),
    ("<--->", "<->"),
    // Indentation bars
    ("│ ", "    "),
    ("│", "    "),
    ("| ", "    "),
    ("|", "    "),
    // Quotes
    ("’", "'"),
    ("‘", "'"),
    ("”", "\""),
    ("„", "\""),
    // Box corners
    ("┌", ""),
    ("└", ""),
    // Diacritics, comma-below and cedilla forms
    ("ă", "a"),
    ("â", "a"),
    ("î", "i"),
    ("ș", "s"),
    ("ş", "s"),
    ("ț", "t"),
    ("ţ", "t"),
    ("Ă", "A"),
    ("Â", "A"),
    ("Î", "I"),
    ("Ș", "S"),
    ("Ş", "S"),
    ("Ț", "T"),
    ("Ţ", "T"),
];

struct Table {
    map: FxHashMap<&'static str, &'static str>,
    /// Longest key, in characters
    longest: usize,
}

fn table() -> &'static Table {
    static TABLE: OnceLock<Table> = OnceLock::new();
    TABLE.get_or_init(|| {
        let map: FxHashMap<&'static str, &'static str> = REPLACEMENTS.iter().copied().collect();
        let longest = map.keys().map(|k| k.chars().count()).max().unwrap_or(0);
        Table { map, longest }
    })
}

/// Find the longest table key that prefixes `rest`
fn longest_match(table: &Table, rest: &str) -> Option<(usize, &'static str)> {
    let mut best = None;

    // Prefixes of 1..=longest characters, shortest first; a later hit is longer
    for (i, ch) in rest.char_indices().take(table.longest) {
        let end = i + ch.len_utf8();
        if let Some(plain) = table.map.get(&rest[..end]) {
            best = Some((end, *plain));
        }
    }

    best
}

/// Normalise typeset pseudocode into plain source
///
/// The result ends with a newline unless it is empty.
pub fn lint(source: &str) -> String {
    let table = table();
    let mut out = String::with_capacity(source.len() + 1);
    let mut pos = 0;

    while pos < source.len() {
        let rest = &source[pos..];
        match longest_match(table, rest) {
            Some((len, plain)) => {
                out.push_str(plain);
                pos += len;
            }
            None => {
                // `rest` is non-empty, so there is a next character
                let ch = rest.chars().next().unwrap_or_default();
                out.push(ch);
                pos += ch.len_utf8().max(1);
            }
        }
    }

    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    out
}
