use bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::collation::Collation;
use super::fmt_opt;

/// Options for a single update command.
///
/// Semantics:
/// - The options are a carrier only. Nothing here checks how fields relate to
///   each other; `hint` and `hint_string` may both be set and the server
///   decides which one wins.
/// - Every setter stores its argument verbatim. Passing `None` clears the field.
/// - Every getter reports an unset field as `None`, never as a default value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOptions {
    #[serde(default)]
    upsert: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    bypass_document_validation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    collation: Option<Collation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    array_filters: Option<Vec<Document>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint_string: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    comment: Option<Bson>,
    #[serde(default, rename = "let", skip_serializing_if = "Option::is_none")]
    let_vars: Option<Document>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sort: Option<Document>,
}

impl UpdateOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new document when the filter matches nothing.
    #[must_use]
    pub fn upsert(mut self, upsert: bool) -> Self {
        self.upsert = upsert;
        self
    }

    #[must_use]
    pub fn bypass_document_validation(mut self, bypass: impl Into<Option<bool>>) -> Self {
        self.bypass_document_validation = bypass.into();
        self
    }

    /// `None` leaves the choice to the server default collation.
    #[must_use]
    pub fn collation(mut self, collation: impl Into<Option<Collation>>) -> Self {
        self.collation = collation.into();
        self
    }

    #[must_use]
    pub fn array_filters(mut self, filters: impl Into<Option<Vec<Document>>>) -> Self {
        self.array_filters = filters.into();
        self
    }

    /// Index to use, given as an index key pattern.
    #[must_use]
    pub fn hint(mut self, hint: impl Into<Option<Document>>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Index to use, given by name.
    #[must_use]
    pub fn hint_string(mut self, hint: impl Into<Option<String>>) -> Self {
        self.hint_string = hint.into();
        self
    }

    /// Plain-string comment; stored as a string-typed value.
    #[must_use]
    pub fn comment(mut self, comment: impl Into<Option<String>>) -> Self {
        self.comment = comment.into().map(Bson::String);
        self
    }

    #[must_use]
    pub fn comment_value(mut self, comment: impl Into<Option<Bson>>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Top-level variables. Passed to update and delete commands, never to inserts.
    #[must_use]
    pub fn let_vars(mut self, variables: impl Into<Option<Document>>) -> Self {
        self.let_vars = variables.into();
        self
    }

    /// Chooses which document an update-one touches when the filter matches several.
    #[must_use]
    pub fn sort(mut self, sort: impl Into<Option<Document>>) -> Self {
        self.sort = sort.into();
        self
    }

    #[must_use]
    pub const fn is_upsert(&self) -> bool {
        self.upsert
    }

    #[must_use]
    pub const fn get_bypass_document_validation(&self) -> Option<bool> {
        self.bypass_document_validation
    }

    #[must_use]
    pub const fn get_collation(&self) -> Option<&Collation> {
        self.collation.as_ref()
    }

    #[must_use]
    pub fn get_array_filters(&self) -> Option<&[Document]> {
        self.array_filters.as_deref()
    }

    #[must_use]
    pub const fn get_hint(&self) -> Option<&Document> {
        self.hint.as_ref()
    }

    #[must_use]
    pub fn get_hint_string(&self) -> Option<&str> {
        self.hint_string.as_deref()
    }

    #[must_use]
    pub const fn get_comment(&self) -> Option<&Bson> {
        self.comment.as_ref()
    }

    #[must_use]
    pub const fn get_let(&self) -> Option<&Document> {
        self.let_vars.as_ref()
    }

    #[must_use]
    pub const fn get_sort(&self) -> Option<&Document> {
        self.sort.as_ref()
    }
}

impl fmt::Display for UpdateOptions {
    // Field order is fixed; diagnostics and tests depend on it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UpdateOptions{{upsert={}", self.upsert)?;
        f.write_str(", bypassDocumentValidation=")?;
        fmt_opt(f, self.bypass_document_validation)?;
        f.write_str(", collation=")?;
        fmt_opt(f, self.collation.as_ref())?;
        f.write_str(", arrayFilters=")?;
        match &self.array_filters {
            Some(filters) => {
                f.write_str("[")?;
                for (i, d) in filters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{d}")?;
                }
                f.write_str("]")?;
            }
            None => f.write_str("null")?,
        }
        f.write_str(", hint=")?;
        fmt_opt(f, self.hint.as_ref())?;
        f.write_str(", hintString=")?;
        fmt_opt(f, self.hint_string.as_deref())?;
        f.write_str(", comment=")?;
        fmt_opt(f, self.comment.as_ref())?;
        f.write_str(", let=")?;
        fmt_opt(f, self.let_vars.as_ref())?;
        f.write_str(", sort=")?;
        fmt_opt(f, self.sort.as_ref())?;
        f.write_str("}")
    }
}
