use bson::{Document, doc};

use super::operator::SearchOperator;
use super::path::FieldSearchPath;
use super::score::SearchScore;
use super::sealed::Sealed;

/// Matches documents in which the field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ExistsSearchOperator {
    path: FieldSearchPath,
    score: Option<SearchScore>,
}

#[must_use]
pub fn exists(path: impl Into<FieldSearchPath>) -> ExistsSearchOperator {
    ExistsSearchOperator { path: path.into(), score: None }
}

impl ExistsSearchOperator {
    #[must_use]
    pub const fn path(&self) -> &FieldSearchPath {
        &self.path
    }
}

impl Sealed for ExistsSearchOperator {}

impl SearchOperator for ExistsSearchOperator {
    fn score(mut self, modifier: SearchScore) -> Self {
        self.score = Some(modifier);
        self
    }

    fn get_score(&self) -> Option<&SearchScore> {
        self.score.as_ref()
    }

    fn to_document(&self) -> Document {
        let mut body = doc! { "path": self.path.to_bson() };
        if let Some(score) = &self.score {
            body.insert("score", score.to_document());
        }
        doc! { "exists": body }
    }
}
