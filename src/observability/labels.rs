use metrics::{IntoLabels, Label, SharedString};

/// Tags attached to every metric a validator emits.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn empty() -> Self {
        Labels(vec![])
    }

    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Copy of these labels extended with `additional_labels`; `self` is left untouched.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut labels = self.0.clone();
        labels.extend(additional_labels.iter().map(Label::from));
        Labels(labels)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
