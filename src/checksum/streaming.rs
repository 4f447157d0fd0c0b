use crate::checksum::{letter_value, MODULUS};

/// Folds `chars` into a decimal numeral while keeping only its remainder
/// modulo 97, so the accumulator never exceeds `96 * 100 + 35`.
pub fn streaming_remainder(chars: impl Iterator<Item = char>) -> Option<u32> {
    let mut remainder = 0;
    for c in chars {
        remainder = match c {
            '0'..='9' => (remainder * 10 + c.to_digit(10)?) % MODULUS,
            'A'..='Z' => (remainder * 100 + letter_value(c)) % MODULUS,
            _ => return None,
        };
    }
    Some(remainder)
}
