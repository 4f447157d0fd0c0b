mod error;
mod metrics;
mod validator;

pub use crate::iban::error::{CreateIbanError, IbanError, IbanErrorKind};
pub use crate::iban::validator::{IbanValidator, IbanValidatorBuilder};
use crate::specification::DissatisfactionReasons;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref DEFAULT_VALIDATOR: IbanValidator = IbanValidator::default();
}

/// A validated International Bank Account Number.
///
/// Holds the normalized form (uppercase, no spaces), so two values built from
/// inputs that only differ in case or spacing are equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iban(String);

impl Iban {
    /// Validates `raw` against the bundled SWIFT registry.
    pub fn create(raw: Option<&str>) -> Result<Self, CreateIbanError> {
        Self::create_with(&DEFAULT_VALIDATOR, raw)
    }

    pub fn create_with(
        validator: &IbanValidator,
        raw: Option<&str>,
    ) -> Result<Self, CreateIbanError> {
        let raw = raw.ok_or(CreateIbanError::ArgumentNull)?;
        Self::try_create_with(validator, Some(raw)).map_err(|reasons| {
            CreateIbanError::ArgumentInvalid {
                iban: raw.to_string(),
                reasons,
            }
        })
    }

    /// Like [`Iban::create`], but an absent input is just another rejection reason.
    pub fn try_create(raw: Option<&str>) -> Result<Self, DissatisfactionReasons> {
        Self::try_create_with(&DEFAULT_VALIDATOR, raw)
    }

    pub fn try_create_with(
        validator: &IbanValidator,
        raw: Option<&str>,
    ) -> Result<Self, DissatisfactionReasons> {
        validator
            .validate(raw)
            .map(Iban)
            .map_err(DissatisfactionReasons::from)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    /// Basic Bank Account Number: everything after the check digits.
    pub fn bban(&self) -> &str {
        &self.0[4..]
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Iban {
    type Err = CreateIbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::create(Some(s))
    }
}

impl TryFrom<&str> for Iban {
    type Error = CreateIbanError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::create(Some(value))
    }
}

impl TryFrom<String> for Iban {
    type Error = CreateIbanError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(Some(&value))
    }
}

impl From<Iban> for String {
    fn from(iban: Iban) -> Self {
        iban.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::checksum::ChecksumStrategy;
    use crate::country_lengths::{CountryLengthsConfig, IbanCountries};
    use serde_test::{assert_de_tokens_error, assert_tokens, Token};
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::sync::Arc;

    const INVALID_IBAN: &str = "FI2112345600000784";
    const INVALID_COUNTRY_CODE_IBAN: &str = "F12112345600000785";
    const IBAN_TOO_SHORT: &str = "FI211234560000078";
    const IBAN_TOO_LONG: &str = "FI21123456000007855";

    const VALID_IBAN_FINLAND: &str = "FI2112345600000785";
    const VALID_IBAN_WITH_SPACES: &str = "F I 2 1 1 2 3 4 5 6 0 0 0 0 0 7 8 5";
    const VALID_IBAN_NETHERLANDS: &str = "NL39RABO0300065264";
    const VALID_IBAN_GREAT_BRITAIN: &str = "GB29NWBK60161331926819";

    fn assert_created(raw: &str, expected: &str) {
        let iban = Iban::create(Some(raw)).unwrap();
        assert_eq!(iban.to_string(), expected);

        let iban = Iban::try_create(Some(raw)).unwrap();
        assert_eq!(iban.as_str(), expected);

        let iban: Iban = raw.parse().unwrap();
        let canonical: &str = iban.as_ref();
        assert_eq!(canonical, expected);
    }

    fn assert_rejected(raw: Option<&str>) {
        let reasons = Iban::try_create(raw).unwrap_err();
        assert!(!reasons.is_empty());
        assert!(!reasons.to_string().trim().is_empty());
    }

    #[test]
    fn test_create_null_iban() {
        assert_eq!(Iban::create(None), Err(CreateIbanError::ArgumentNull));
    }

    #[test]
    fn test_try_create_null_iban() {
        assert_rejected(None);
        assert_eq!(
            Iban::try_create(None).unwrap_err().to_string(),
            "IBAN is null."
        );
    }

    #[test]
    fn test_rejected_ibans() {
        let invalid_ibans = vec![
            "",
            INVALID_IBAN,
            INVALID_COUNTRY_CODE_IBAN,
            IBAN_TOO_SHORT,
            IBAN_TOO_LONG,
        ];
        for raw in invalid_ibans {
            assert!(matches!(
                Iban::create(Some(raw)),
                Err(CreateIbanError::ArgumentInvalid { .. })
            ));
            assert!(raw.parse::<Iban>().is_err());
            assert_rejected(Some(raw));
        }
    }

    #[test]
    fn test_invalid_argument_carries_reasons() {
        let err = Iban::create(Some(INVALID_IBAN)).unwrap_err();
        assert_eq!(
            err,
            CreateIbanError::ArgumentInvalid {
                iban: INVALID_IBAN.to_string(),
                reasons: IbanError::ChecksumMismatch(INVALID_IBAN.to_string()).into(),
            }
        );
        assert_eq!(
            err.to_string(),
            "IBAN 'FI2112345600000784' is not valid: IBAN 'FI2112345600000784' contains an invalid checksum."
        );
    }

    #[test]
    fn test_valid_ibans() {
        assert_created(VALID_IBAN_FINLAND, VALID_IBAN_FINLAND);
        assert_created(VALID_IBAN_NETHERLANDS, VALID_IBAN_NETHERLANDS);
        assert_created(VALID_IBAN_GREAT_BRITAIN, VALID_IBAN_GREAT_BRITAIN);
    }

    #[test]
    fn test_iban_with_spaces() {
        assert_created(VALID_IBAN_WITH_SPACES, VALID_IBAN_FINLAND);
        assert_created(&format!(" {}", VALID_IBAN_FINLAND), VALID_IBAN_FINLAND);
        assert_created(&format!("{} ", VALID_IBAN_FINLAND), VALID_IBAN_FINLAND);
    }

    #[test]
    fn test_lower_case_iban_is_upper_cased() {
        assert_created(
            &VALID_IBAN_GREAT_BRITAIN.to_lowercase(),
            VALID_IBAN_GREAT_BRITAIN,
        );
    }

    #[test]
    fn test_equality_ignores_case_and_spaces() {
        let a = Iban::create(Some(VALID_IBAN_FINLAND)).unwrap();
        let b = Iban::create(Some(VALID_IBAN_WITH_SPACES)).unwrap();
        let c = Iban::create(Some("fi21 1234 5600 0007 85")).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, Iban::create(Some(VALID_IBAN_NETHERLANDS)).unwrap());

        let hash = |iban: &Iban| {
            let mut hasher = DefaultHasher::new();
            iban.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(hash(&a), hash(&c));
    }

    #[test]
    fn test_parts() {
        let iban = Iban::create(Some(VALID_IBAN_GREAT_BRITAIN)).unwrap();
        assert_eq!(iban.country_code(), "GB");
        assert_eq!(iban.check_digits(), "29");
        assert_eq!(iban.bban(), "NWBK60161331926819");
        assert_eq!(String::from(iban), VALID_IBAN_GREAT_BRITAIN);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            Iban::try_from("nl39 rabo 0300 0652 64").unwrap().as_str(),
            VALID_IBAN_NETHERLANDS
        );
        assert_eq!(
            Iban::try_from(VALID_IBAN_NETHERLANDS.to_string())
                .unwrap()
                .as_str(),
            VALID_IBAN_NETHERLANDS
        );
        assert!(Iban::try_from(INVALID_IBAN).is_err());
    }

    #[test]
    fn test_create_with_validator() {
        let countries =
            IbanCountries::try_from(CountryLengthsConfig::new(&[("NL", 18)])).unwrap();
        let validator = IbanValidator::builder()
            .countries(Arc::new(countries))
            .checksum_strategy(ChecksumStrategy::FullPrecision)
            .build();

        assert!(Iban::create_with(&validator, Some(VALID_IBAN_NETHERLANDS)).is_ok());
        assert!(Iban::try_create_with(&validator, Some(VALID_IBAN_NETHERLANDS)).is_ok());
        assert!(Iban::create_with(&validator, Some(VALID_IBAN_FINLAND)).is_err());
        assert_eq!(
            Iban::try_create_with(&validator, Some(VALID_IBAN_FINLAND))
                .unwrap_err()
                .to_string(),
            "IBAN 'FI2112345600000785' has an invalid or not supported country code."
        );
        assert_eq!(
            Iban::create_with(&validator, None),
            Err(CreateIbanError::ArgumentNull)
        );
    }

    #[test]
    fn test_serde_tokens() {
        let iban = Iban::create(Some(VALID_IBAN_FINLAND)).unwrap();
        assert_tokens(&iban, &[Token::Str(VALID_IBAN_FINLAND)]);
        assert_de_tokens_error::<Iban>(
            &[Token::Str(INVALID_IBAN)],
            "IBAN 'FI2112345600000784' is not valid: IBAN 'FI2112345600000784' contains an invalid checksum.",
        );
    }

    #[test]
    fn test_serde_normalizes_input() {
        let iban: Iban = serde_json::from_str(r#""gb29 nwbk 6016 1331 9268 19""#).unwrap();
        assert_eq!(iban.as_str(), VALID_IBAN_GREAT_BRITAIN);
        assert_eq!(
            serde_json::to_string(&iban).unwrap(),
            format!("\"{}\"", VALID_IBAN_GREAT_BRITAIN)
        );
        assert!(serde_json::from_str::<Iban>(r#""FI21-1234""#).is_err());
    }
}
