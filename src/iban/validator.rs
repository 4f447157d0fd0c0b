use crate::checksum::ChecksumStrategy;
use crate::country_lengths::{CountryLengths, IbanCountries};
use crate::iban::error::IbanError;
use crate::iban::metrics::ValidatorMetrics;
use crate::normalization::{contains_only_legal_characters, normalize};
use crate::observability::labels::Labels;
use crate::specification::{DissatisfactionReasons, Specification, Validator};
use std::sync::Arc;

const COUNTRY_CODE_LENGTH: usize = 2;

/// Checks raw input against the IBAN rules: allowed characters, known
/// country, length for that country and mod-97 checksum, in that order.
pub struct IbanValidator {
    countries: Arc<dyn CountryLengths>,
    checksum_strategy: ChecksumStrategy,
    metrics: ValidatorMetrics,
}

impl IbanValidator {
    pub fn new(countries: Arc<dyn CountryLengths>) -> Self {
        IbanValidatorBuilder::new().countries(countries).build()
    }

    pub fn builder() -> IbanValidatorBuilder {
        IbanValidatorBuilder::new()
    }

    pub fn checksum_strategy(&self) -> ChecksumStrategy {
        self.checksum_strategy
    }

    /// Returns the normalized IBAN, or the first check it failed.
    pub fn validate(&self, raw: Option<&str>) -> Result<String, IbanError> {
        let result = self.run_checks(raw);
        match &result {
            Ok(_) => self.metrics.accepted.increment(1),
            Err(err) => self.metrics.record_rejection(err.kind()),
        }
        result
    }

    /// Reasons for rejecting `raw`; empty when it is a valid IBAN.
    pub fn dissatisfaction_reasons(&self, raw: Option<&str>) -> DissatisfactionReasons {
        let mut reasons = DissatisfactionReasons::new();
        self.is_satisfied_by(raw, &mut reasons);
        reasons
    }

    fn run_checks(&self, raw: Option<&str>) -> Result<String, IbanError> {
        let raw = raw.ok_or(IbanError::NullInput)?;
        if !contains_only_legal_characters(raw) {
            return Err(IbanError::IllegalCharacters(raw.to_string()));
        }

        let canonical = normalize(raw);
        let expected = match self.expected_length(&canonical) {
            Some(expected) => expected,
            None => return Err(IbanError::UnsupportedCountry(canonical)),
        };

        let actual = canonical.len();
        if actual != expected {
            return Err(IbanError::LengthMismatch {
                iban: canonical,
                expected,
                actual,
            });
        }

        if !self.checksum_strategy.is_valid(&canonical) {
            return Err(IbanError::ChecksumMismatch(canonical));
        }
        Ok(canonical)
    }

    fn expected_length(&self, canonical: &str) -> Option<usize> {
        let country_code = canonical.get(..COUNTRY_CODE_LENGTH)?;
        self.countries.iban_length(country_code)
    }
}

impl Default for IbanValidator {
    fn default() -> Self {
        IbanValidatorBuilder::new().build()
    }
}

impl Specification<str> for IbanValidator {
    fn is_satisfied_by(&self, entity: Option<&str>, reasons: &mut DissatisfactionReasons) -> bool {
        match self.validate(entity) {
            Ok(_) => true,
            Err(err) => {
                reasons.add(err.to_string());
                false
            }
        }
    }
}

impl Validator for IbanValidator {
    fn is_valid_match(&self, candidate: &str) -> bool {
        self.validate(Some(candidate)).is_ok()
    }
}

pub struct IbanValidatorBuilder {
    countries: Arc<dyn CountryLengths>,
    checksum_strategy: ChecksumStrategy,
    labels: Labels,
}

impl IbanValidatorBuilder {
    /// Starts from the bundled SWIFT registry and the streaming checksum.
    pub fn new() -> Self {
        IbanValidatorBuilder {
            countries: IbanCountries::shared_default(),
            checksum_strategy: ChecksumStrategy::default(),
            labels: Labels::empty(),
        }
    }

    pub fn countries(mut self, countries: Arc<dyn CountryLengths>) -> Self {
        self.countries = countries;
        self
    }

    pub fn checksum_strategy(mut self, checksum_strategy: ChecksumStrategy) -> Self {
        self.checksum_strategy = checksum_strategy;
        self
    }

    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn build(self) -> IbanValidator {
        IbanValidator {
            countries: self.countries,
            checksum_strategy: self.checksum_strategy,
            metrics: ValidatorMetrics::new(&self.labels),
        }
    }
}

impl Default for IbanValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
