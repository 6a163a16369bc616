//! Search-stage operators.
//!
//! Operators are built with the free factory functions ([`in_values`],
//! [`in_null`], [`exists`], [`compound`]), optionally re-scored with
//! [`SearchOperator::score`], and wrapped into a `$search` stage by
//! [`search_stage`].

// Submodules for separation of concerns
mod compound;
mod exists;
mod in_operator;
mod operator;
mod path;
mod score;
mod stage;

mod sealed {
    pub trait Sealed {}
}

pub use compound::{CompoundSearchOperator, compound};
pub use exists::{ExistsSearchOperator, exists};
pub use in_operator::{InSearchOperator, InValue, InValueKind, in_null, in_values};
pub use operator::{SearchOperator, SearchOperatorNode};
pub use path::FieldSearchPath;
pub use score::SearchScore;
pub use stage::{SearchStageOptions, search_stage};
