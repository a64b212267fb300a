//! Search-input handling: the draft the user is typing versus the
//! committed location that actually drives a fetch.

#[derive(Debug, Clone)]
pub struct QueryController {
    draft: String,
    committed: String,
}

impl QueryController {
    /// Start with a default location. The initial value counts as the
    /// first committed location, so callers should issue a fetch for it.
    pub fn new(initial: impl Into<String>) -> Self {
        let committed = initial.into();
        Self { draft: committed.clone(), committed }
    }

    /// Record a not-yet-committed candidate. Never triggers a fetch.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The location driving the current or most recent fetch.
    pub fn committed(&self) -> &str {
        &self.committed
    }

    /// Promote the draft to the committed location.
    ///
    /// Returns the new committed value, which the caller passes to the
    /// fetch machine. A draft that trims to empty is a silent no-op
    /// (`None`), not an error.
    pub fn commit(&mut self) -> Option<String> {
        let trimmed = self.draft.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.committed = trimmed.to_string();
        Some(self.committed.clone())
    }
}
