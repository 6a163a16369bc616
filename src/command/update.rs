use bson::{Bson, Document, doc};

use crate::options::UpdateOptions;

/// The modification applied by an update: an update-operator document or an aggregation pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateModification {
    Document(Document),
    Pipeline(Vec<Document>),
}

impl From<Document> for UpdateModification {
    fn from(d: Document) -> Self {
        Self::Document(d)
    }
}

impl From<Vec<Document>> for UpdateModification {
    fn from(p: Vec<Document>) -> Self {
        Self::Pipeline(p)
    }
}

impl From<UpdateModification> for Bson {
    fn from(m: UpdateModification) -> Self {
        match m {
            UpdateModification::Document(d) => Self::Document(d),
            UpdateModification::Pipeline(p) => Self::Array(p.into_iter().map(Self::Document).collect()),
        }
    }
}

/// A filter, an update and its options, ready to be encoded as an `update` command.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCommand {
    collection: String,
    filter: Document,
    update: UpdateModification,
    multi: bool,
    options: UpdateOptions,
}

impl UpdateCommand {
    /// Updates at most one matching document.
    #[must_use]
    pub fn one(
        collection: impl Into<String>,
        filter: Document,
        update: impl Into<UpdateModification>,
    ) -> Self {
        Self {
            collection: collection.into(),
            filter,
            update: update.into(),
            multi: false,
            options: UpdateOptions::default(),
        }
    }

    /// Updates every matching document.
    #[must_use]
    pub fn many(
        collection: impl Into<String>,
        filter: Document,
        update: impl Into<UpdateModification>,
    ) -> Self {
        Self { multi: true, ..Self::one(collection, filter, update) }
    }

    #[must_use]
    pub fn options(mut self, options: UpdateOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }

    #[must_use]
    pub const fn filter(&self) -> &Document {
        &self.filter
    }

    #[must_use]
    pub const fn update(&self) -> &UpdateModification {
        &self.update
    }

    #[must_use]
    pub const fn is_multi(&self) -> bool {
        self.multi
    }

    #[must_use]
    pub const fn get_options(&self) -> &UpdateOptions {
        &self.options
    }

    /// Encodes the command document handed to the executor.
    ///
    /// Options pass through untouched. When both hint forms are present the
    /// document form is sent, since the statement has a single `hint` slot.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let opts = &self.options;
        let mut statement = doc! { "q": self.filter.clone(), "u": Bson::from(self.update.clone()) };
        if opts.is_upsert() {
            statement.insert("upsert", true);
        }
        if self.multi {
            statement.insert("multi", true);
        }
        if let Some(collation) = opts.get_collation() {
            statement.insert("collation", collation.to_document());
        }
        if let Some(filters) = opts.get_array_filters() {
            statement.insert(
                "arrayFilters",
                filters.iter().cloned().map(Bson::Document).collect::<Vec<_>>(),
            );
        }
        if let Some(hint) = opts.get_hint() {
            if let Some(name) = opts.get_hint_string() {
                log::debug!(
                    target: "nexus_model::command",
                    "update on {}: hint {hint} sent, hintString '{name}' not sent",
                    self.collection
                );
            }
            statement.insert("hint", hint.clone());
        } else if let Some(name) = opts.get_hint_string() {
            statement.insert("hint", name);
        }
        if let Some(sort) = opts.get_sort() {
            statement.insert("sort", sort.clone());
        }

        let mut command = doc! {
            "update": self.collection.as_str(),
            "updates": [statement],
            "ordered": true,
        };
        if let Some(bypass) = opts.get_bypass_document_validation() {
            command.insert("bypassDocumentValidation", bypass);
        }
        if let Some(comment) = opts.get_comment() {
            command.insert("comment", comment.clone());
        }
        if let Some(vars) = opts.get_let() {
            command.insert("let", vars.clone());
        }
        command
    }
}
