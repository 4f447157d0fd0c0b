mod config;
mod swift_registry;

pub use crate::country_lengths::config::{
    CountryLengthConfig, CountryLengthsConfig, CountryLengthsError,
};
pub use crate::country_lengths::swift_registry::SWIFT_IBAN_LENGTHS;
use ahash::AHashMap;
use lazy_static::lazy_static;
use std::sync::Arc;

/// Source of the expected IBAN length per country.
pub trait CountryLengths: Send + Sync {
    /// Total IBAN length (country code, check digits and BBAN) for the given
    /// two letter code, or `None` if the country is not supported.
    fn iban_length(&self, country_code: &str) -> Option<usize>;
}

lazy_static! {
    static ref SWIFT_REGISTRY: Arc<IbanCountries> = Arc::new(IbanCountries::swift_registry());
}

/// Immutable map from ISO country code to IBAN length.
#[derive(Clone, Debug)]
pub struct IbanCountries {
    lengths: AHashMap<String, usize>,
}

impl IbanCountries {
    /// Builds a registry from the bundled SWIFT table.
    pub fn swift_registry() -> Self {
        Self {
            lengths: SWIFT_IBAN_LENGTHS
                .iter()
                .map(|(iso_code, length)| (iso_code.to_string(), *length))
                .collect(),
        }
    }

    /// The bundled SWIFT registry, built once and shared by every caller.
    pub fn shared_default() -> Arc<IbanCountries> {
        Arc::clone(&SWIFT_REGISTRY)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CountryLengthsError> {
        let config: CountryLengthsConfig = serde_json::from_str(json)?;
        Self::try_from(config)
    }

    pub fn len(&self) -> usize {
        self.lengths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lengths.is_empty()
    }

    pub fn country_codes(&self) -> impl Iterator<Item = &str> {
        self.lengths.keys().map(String::as_str)
    }
}

impl TryFrom<CountryLengthsConfig> for IbanCountries {
    type Error = CountryLengthsError;

    fn try_from(config: CountryLengthsConfig) -> Result<Self, Self::Error> {
        let mut lengths = AHashMap::with_capacity(config.countries.len());
        for entry in config.countries.iter() {
            let (iso_code, length) = entry.validate()?;
            if lengths.contains_key(&iso_code) {
                return Err(CountryLengthsError::DuplicateIsoCode(iso_code));
            }
            lengths.insert(iso_code, length);
        }
        Ok(Self { lengths })
    }
}

impl CountryLengths for IbanCountries {
    fn iban_length(&self, country_code: &str) -> Option<usize> {
        self.lengths.get(country_code).copied()
    }
}
