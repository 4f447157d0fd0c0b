use crate::iban::error::IbanErrorKind;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};
use strum::IntoEnumIterator;

const REASON: &str = "reason";

pub struct ValidatorMetrics {
    pub accepted: Counter,
    // indexed by `IbanErrorKind as usize`
    rejected: Vec<Counter>,
}

impl ValidatorMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidatorMetrics {
            accepted: counter!("iban.validation.accepted", labels.clone()),
            rejected: IbanErrorKind::iter()
                .map(|kind| {
                    counter!(
                        "iban.validation.rejected",
                        labels.clone_with_labels(&[(REASON, kind.as_str())])
                    )
                })
                .collect(),
        }
    }

    pub fn record_rejection(&self, kind: IbanErrorKind) {
        if let Some(counter) = self.rejected.get(kind as usize) {
            counter.increment(1);
        }
    }
}

impl Default for ValidatorMetrics {
    fn default() -> Self {
        ValidatorMetrics::new(&Labels::empty())
    }
}
