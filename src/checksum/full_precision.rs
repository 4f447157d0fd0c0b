use crate::checksum::letter_value;

/// Number of decimal digits consumed per step of the long division. The
/// partial dividend `remainder * 10^9 + limb` fits a `u64` for any `u32`
/// modulus.
const LIMB_DIGITS: usize = 9;
const LIMB_BASE: u64 = 1_000_000_000;

/// Spells `chars` as a decimal numeral: digits are kept, letters become their
/// two digit value (`A` => `10` ... `Z` => `35`).
pub fn decimal_numeral(chars: impl Iterator<Item = char>) -> Option<String> {
    let mut numeral = String::new();
    for c in chars {
        match c {
            '0'..='9' => numeral.push(c),
            'A'..='Z' => numeral.push_str(&letter_value(c).to_string()),
            _ => return None,
        }
    }
    Some(numeral)
}

/// Exact remainder of an arbitrarily long decimal numeral, by long division
/// over nine digit limbs. An empty numeral is zero.
pub fn remainder_of_numeral(numeral: &str, modulus: u32) -> Option<u32> {
    if modulus == 0 || !numeral.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let modulus = u64::from(modulus);
    let digits = numeral.as_bytes();
    // The leading limb is shorter so that every following one has exactly
    // LIMB_DIGITS digits.
    let head_len = match digits.len() % LIMB_DIGITS {
        0 => LIMB_DIGITS.min(digits.len()),
        len => len,
    };
    let (head, tail) = digits.split_at(head_len);
    let mut remainder = limb_value(head) % modulus;
    for limb in tail.chunks(LIMB_DIGITS) {
        remainder = (remainder * LIMB_BASE + limb_value(limb)) % modulus;
    }
    u32::try_from(remainder).ok()
}

fn limb_value(limb: &[u8]) -> u64 {
    limb.iter()
        .fold(0, |acc, digit| acc * 10 + u64::from(digit - b'0'))
}
