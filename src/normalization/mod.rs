use lazy_static::lazy_static;
use regex::Regex;


lazy_static! {
    // ASCII only: `\d` and `\w` would let in non-Latin digits and letters.
    static ref LEGAL_CHARACTERS: Regex = Regex::new(r"^[0-9A-Za-z ]+$").unwrap();
}

/// Whitelist check run on the raw input, before any normalization.
/// Empty input is rejected.
pub fn contains_only_legal_characters(raw: &str) -> bool {
    LEGAL_CHARACTERS.is_match(raw)
}

/// Produces the canonical form of an IBAN: surrounding whitespace trimmed,
/// every space removed and letters uppercased.
pub fn normalize(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|c| *c != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}
