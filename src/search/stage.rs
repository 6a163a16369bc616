use bson::Document;

use super::operator::{SearchOperator, SearchOperatorNode};

/// Stage-level settings of a `$search` aggregation stage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStageOptions {
    index: Option<String>,
    return_stored_source: Option<bool>,
    score_details: Option<bool>,
}

impl SearchStageOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the search index; the server uses `default` when unset.
    #[must_use]
    pub fn index(mut self, index: impl Into<Option<String>>) -> Self {
        self.index = index.into();
        self
    }

    #[must_use]
    pub fn return_stored_source(mut self, value: impl Into<Option<bool>>) -> Self {
        self.return_stored_source = value.into();
        self
    }

    #[must_use]
    pub fn score_details(mut self, value: impl Into<Option<bool>>) -> Self {
        self.score_details = value.into();
        self
    }

    #[must_use]
    pub fn get_index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    #[must_use]
    pub const fn get_return_stored_source(&self) -> Option<bool> {
        self.return_stored_source
    }

    #[must_use]
    pub const fn get_score_details(&self) -> Option<bool> {
        self.score_details
    }
}

/// Builds `{ "$search": { index?, <operator>, returnStoredSource?, scoreDetails? } }`.
#[must_use]
pub fn search_stage(operator: impl Into<SearchOperatorNode>, opts: &SearchStageOptions) -> Document {
    let operator: SearchOperatorNode = operator.into();
    let mut body = Document::new();
    if let Some(index) = &opts.index {
        body.insert("index", index.as_str());
    }
    for (key, value) in operator.to_document() {
        body.insert(key, value);
    }
    if let Some(v) = opts.return_stored_source {
        body.insert("returnStoredSource", v);
    }
    if let Some(v) = opts.score_details {
        body.insert("scoreDetails", v);
    }
    let mut stage = Document::new();
    stage.insert("$search", body);
    stage
}
