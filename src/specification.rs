use serde::{Deserialize, Serialize};
use std::fmt;

/// Yes/no view of a validator, used where only the verdict matters.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, candidate: &str) -> bool;
}

/// A predicate over `T` that explains why it was not satisfied.
///
/// Every failed evaluation appends exactly one reason to the sink, so the same
/// sink can collect reasons from several evaluations.
pub trait Specification<T: ?Sized> {
    fn is_satisfied_by(&self, entity: Option<&T>, reasons: &mut DissatisfactionReasons) -> bool;
}

/// Ordered list of human-readable reasons for rejecting an input.
/// An empty list means the input was accepted.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(transparent)]
pub struct DissatisfactionReasons(Vec<String>);

impl DissatisfactionReasons {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, reason: impl Into<String>) {
        self.0.push(reason.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// All reasons joined with `\n`, without a trailing newline.
    pub fn separated_with_new_line(&self) -> String {
        self.0.join("\n")
    }
}

impl fmt::Display for DissatisfactionReasons {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.separated_with_new_line())
    }
}

impl From<DissatisfactionReasons> for Vec<String> {
    fn from(reasons: DissatisfactionReasons) -> Self {
        reasons.0
    }
}

impl<S: Into<String>> FromIterator<S> for DissatisfactionReasons {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_empty_reasons() {
        let reasons = DissatisfactionReasons::new();
        assert!(reasons.is_empty());
        assert_eq!(reasons.len(), 0);
        assert_eq!(reasons.to_string(), "");
    }

    #[test]
    fn test_reasons_are_joined_with_new_line() {
        let mut reasons = DissatisfactionReasons::new();
        reasons.add("first");
        reasons.add("second".to_string());
        assert_eq!(reasons.len(), 2);
        assert_eq!(reasons.separated_with_new_line(), "first\nsecond");
        assert_eq!(reasons.to_string(), "first\nsecond");
        assert_eq!(reasons.iter().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_reasons_serialize_as_list() {
        let reasons: DissatisfactionReasons = vec!["a", "b"].into_iter().collect();
        let json = serde_json::to_string(&reasons).unwrap();
        assert_eq!(json, r#"["a","b"]"#);
        let back: DissatisfactionReasons = serde_json::from_str(&json).unwrap();
        assert_eq!(back, reasons);
    }
}
