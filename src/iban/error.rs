use crate::specification::DissatisfactionReasons;
use strum::{EnumCount, EnumIter, IntoStaticStr};
use thiserror::Error;

/// Category of a rejection, in the order the checks run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum IbanErrorKind {
    NullInput,
    IllegalCharacter,
    UnsupportedCountry,
    LengthMismatch,
    ChecksumMismatch,
}

impl IbanErrorKind {
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// Reason an input was rejected. Messages carry the raw input for
/// `IllegalCharacters` and the normalized input for every later check.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IbanError {
    #[error("IBAN is null.")]
    NullInput,

    #[error("IBAN '{0}' contains illegal characters.")]
    IllegalCharacters(String),

    #[error("IBAN '{0}' has an invalid or not supported country code.")]
    UnsupportedCountry(String),

    #[error("IBAN '{iban}' is too {}.", too_short_or_long(.actual, .expected))]
    LengthMismatch {
        iban: String,
        expected: usize,
        actual: usize,
    },

    #[error("IBAN '{0}' contains an invalid checksum.")]
    ChecksumMismatch(String),
}

fn too_short_or_long(actual: &usize, expected: &usize) -> &'static str {
    if actual < expected {
        "short"
    } else {
        "long"
    }
}

impl IbanError {
    pub fn kind(&self) -> IbanErrorKind {
        match self {
            IbanError::NullInput => IbanErrorKind::NullInput,
            IbanError::IllegalCharacters(_) => IbanErrorKind::IllegalCharacter,
            IbanError::UnsupportedCountry(_) => IbanErrorKind::UnsupportedCountry,
            IbanError::LengthMismatch { .. } => IbanErrorKind::LengthMismatch,
            IbanError::ChecksumMismatch(_) => IbanErrorKind::ChecksumMismatch,
        }
    }
}

impl From<IbanError> for DissatisfactionReasons {
    fn from(err: IbanError) -> Self {
        let mut reasons = DissatisfactionReasons::new();
        reasons.add(err.to_string());
        reasons
    }
}

/// Error of the strict factories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreateIbanError {
    /// No input was given at all
    #[error("An IBAN is required")]
    ArgumentNull,
    /// The input was given but failed validation
    #[error("IBAN '{iban}' is not valid: {reasons}")]
    ArgumentInvalid {
        iban: String,
        reasons: DissatisfactionReasons,
    },
}

impl From<CreateIbanError> for i64 {
    fn from(value: CreateIbanError) -> i64 {
        match value {
            CreateIbanError::ArgumentNull => -2,
            CreateIbanError::ArgumentInvalid { .. } => -3,
        }
    }
}
