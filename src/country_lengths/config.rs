use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};
use thiserror::Error;

const ISO_CODE_LENGTH: usize = 2;

#[serde_as]
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct CountryLengthsConfig {
    #[serde_as(deserialize_as = "DefaultOnNull")]
    #[serde(default)]
    pub countries: Vec<CountryLengthConfig>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CountryLengthConfig {
    pub iso_code: String,
    /// Signed, so a zero or negative length is reported as such instead of
    /// failing deserialization.
    pub iban_length: i64,
}

impl CountryLengthsConfig {
    pub fn new(countries: &[(&str, i64)]) -> Self {
        Self {
            countries: countries
                .iter()
                .map(|(iso_code, iban_length)| CountryLengthConfig {
                    iso_code: iso_code.to_string(),
                    iban_length: *iban_length,
                })
                .collect(),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum CountryLengthsError {
    #[error("Invalid ISO code '{0}' in country length config")]
    InvalidIsoCode(String),

    #[error("Invalid IBAN length {length} for country '{iso_code}'")]
    InvalidIbanLength { iso_code: String, length: i64 },

    #[error("Country '{0}' is declared more than once")]
    DuplicateIsoCode(String),

    #[error("Country length config could not be parsed: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for CountryLengthsError {
    fn from(err: serde_json::Error) -> Self {
        CountryLengthsError::InvalidFormat(err.to_string())
    }
}

impl CountryLengthConfig {
    /// Validated `(ISO code, length)` pair, the code uppercased.
    pub(crate) fn validate(&self) -> Result<(String, usize), CountryLengthsError> {
        let iso_code = self.iso_code.trim();
        if iso_code.len() != ISO_CODE_LENGTH || !iso_code.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(CountryLengthsError::InvalidIsoCode(self.iso_code.clone()));
        }
        let iso_code = iso_code.to_ascii_uppercase();
        match usize::try_from(self.iban_length) {
            Ok(length) if length > 0 => Ok((iso_code, length)),
            _ => Err(CountryLengthsError::InvalidIbanLength {
                iso_code,
                length: self.iban_length,
            }),
        }
    }
}
