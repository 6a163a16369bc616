use bson::Document;
use std::fmt;

use super::compound::CompoundSearchOperator;
use super::exists::ExistsSearchOperator;
use super::in_operator::InSearchOperator;
use super::score::SearchScore;
use super::sealed::Sealed;

/// A predicate that can appear in a search stage.
///
/// The trait is sealed: every implementation lives in this crate so the stage
/// encoder can serialize each one. [`SearchOperator::score`] returns the
/// implementing type, so operator-specific accessors stay available after a
/// score has been attached.
pub trait SearchOperator: Sealed + Clone + fmt::Debug + Into<SearchOperatorNode> {
    /// Attaches `modifier`, replacing any modifier set earlier.
    #[must_use]
    fn score(self, modifier: SearchScore) -> Self;

    fn get_score(&self) -> Option<&SearchScore>;

    /// Single-key document `{ <operator name>: { ... } }`.
    fn to_document(&self) -> Document;
}

/// Closed set of every operator the crate defines.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOperatorNode {
    In(InSearchOperator),
    Exists(ExistsSearchOperator),
    Compound(CompoundSearchOperator),
}

impl Sealed for SearchOperatorNode {}

impl SearchOperator for SearchOperatorNode {
    fn score(self, modifier: SearchScore) -> Self {
        match self {
            Self::In(op) => Self::In(op.score(modifier)),
            Self::Exists(op) => Self::Exists(op.score(modifier)),
            Self::Compound(op) => Self::Compound(op.score(modifier)),
        }
    }

    fn get_score(&self) -> Option<&SearchScore> {
        match self {
            Self::In(op) => op.get_score(),
            Self::Exists(op) => op.get_score(),
            Self::Compound(op) => op.get_score(),
        }
    }

    fn to_document(&self) -> Document {
        match self {
            Self::In(op) => op.to_document(),
            Self::Exists(op) => op.to_document(),
            Self::Compound(op) => op.to_document(),
        }
    }
}

impl From<InSearchOperator> for SearchOperatorNode {
    fn from(op: InSearchOperator) -> Self {
        Self::In(op)
    }
}

impl From<ExistsSearchOperator> for SearchOperatorNode {
    fn from(op: ExistsSearchOperator) -> Self {
        Self::Exists(op)
    }
}

impl From<CompoundSearchOperator> for SearchOperatorNode {
    fn from(op: CompoundSearchOperator) -> Self {
        Self::Compound(op)
    }
}
