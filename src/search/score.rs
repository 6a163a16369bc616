use bson::{Document, doc};

use super::path::FieldSearchPath;

/// Modifier applied to the relevance score of documents matched by an operator.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchScore {
    /// Multiply the score by a fixed factor.
    Boost { value: f64 },
    /// Multiply the score by a numeric field; `undefined` is used when the field is missing.
    BoostPath { path: FieldSearchPath, undefined: Option<f64> },
    /// Replace the score with a fixed value.
    Constant { value: f64 },
    /// Replace the score with the result of a score expression.
    Function { expression: Document },
}

impl SearchScore {
    #[must_use]
    pub const fn boost(value: f64) -> Self {
        Self::Boost { value }
    }

    #[must_use]
    pub fn boost_path(path: impl Into<FieldSearchPath>) -> Self {
        Self::BoostPath { path: path.into(), undefined: None }
    }

    #[must_use]
    pub fn boost_path_with_undefined(path: impl Into<FieldSearchPath>, undefined: f64) -> Self {
        Self::BoostPath { path: path.into(), undefined: Some(undefined) }
    }

    #[must_use]
    pub const fn constant(value: f64) -> Self {
        Self::Constant { value }
    }

    #[must_use]
    pub fn function(expression: Document) -> Self {
        Self::Function { expression }
    }

    #[must_use]
    pub fn to_document(&self) -> Document {
        match self {
            Self::Boost { value } => doc! { "boost": { "value": *value } },
            Self::BoostPath { path, undefined } => {
                let mut boost = doc! { "path": path.path() };
                if let Some(u) = undefined {
                    boost.insert("undefined", *u);
                }
                doc! { "boost": boost }
            }
            Self::Constant { value } => doc! { "constant": { "value": *value } },
            Self::Function { expression } => doc! { "function": expression.clone() },
        }
    }
}
