// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod country_lengths;
mod iban;
mod normalization;
mod observability;
mod specification;

// This is the public API of the IBAN identifiers library
pub use checksum::ChecksumStrategy;
pub use country_lengths::{
    CountryLengthConfig, CountryLengths, CountryLengthsConfig, CountryLengthsError,
    IbanCountries, SWIFT_IBAN_LENGTHS,
};
pub use iban::{
    CreateIbanError, Iban, IbanError, IbanErrorKind, IbanValidator, IbanValidatorBuilder,
};
pub use normalization::normalize;
pub use observability::labels::Labels;
pub use specification::{DissatisfactionReasons, Specification, Validator};

#[cfg(any(feature = "testing", feature = "bench"))]
pub use crate::{
    checksum::{decimal_numeral, remainder_of_numeral, streaming_remainder},
    normalization::contains_only_legal_characters,
};
