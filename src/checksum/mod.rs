mod full_precision;
mod streaming;

pub use crate::checksum::full_precision::{decimal_numeral, remainder_of_numeral};
pub use crate::checksum::streaming::streaming_remainder;
use serde::{Deserialize, Serialize};

/// ISO 7064 MOD 97-10: a well-formed IBAN leaves this remainder.
const EXPECTED_REMAINDER: u32 = 1;
const MODULUS: u32 = 97;
/// Country code plus the two check digits.
const HEADER_LENGTH: usize = 4;

/// How the mod-97 remainder of an IBAN is computed. Both strategies give the
/// same result; they only differ in cost.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ChecksumStrategy {
    /// Reduce modulo 97 after every folded character.
    #[default]
    Streaming,
    /// Build the whole decimal numeral and divide it exactly.
    FullPrecision,
}

impl ChecksumStrategy {
    /// Remainder modulo 97 of the numeric form of `canonical` once its header
    /// has been moved to the end.
    ///
    /// Returns `None` when `canonical` is too short to carry a header or holds
    /// anything other than ASCII digits and uppercase letters.
    pub fn remainder(&self, canonical: &str) -> Option<u32> {
        let (header, body) = split_header(canonical)?;
        let rearranged = body.chars().chain(header.chars());
        match self {
            ChecksumStrategy::Streaming => streaming_remainder(rearranged),
            ChecksumStrategy::FullPrecision => {
                let numeral = decimal_numeral(rearranged)?;
                remainder_of_numeral(&numeral, MODULUS)
            }
        }
    }

    pub fn is_valid(&self, canonical: &str) -> bool {
        self.remainder(canonical) == Some(EXPECTED_REMAINDER)
    }
}

fn split_header(canonical: &str) -> Option<(&str, &str)> {
    if canonical.len() < HEADER_LENGTH {
        return None;
    }
    Some((
        canonical.get(..HEADER_LENGTH)?,
        canonical.get(HEADER_LENGTH..)?,
    ))
}

/// `A` is 10, `B` is 11, ... `Z` is 35.
#[inline]
fn letter_value(c: char) -> u32 {
    c as u32 - 'A' as u32 + 10
}
