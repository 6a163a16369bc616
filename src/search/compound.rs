use bson::{Bson, Document, doc};

use crate::errors::DbError;

use super::operator::{SearchOperator, SearchOperatorNode};
use super::score::SearchScore;
use super::sealed::Sealed;

/// Combines operators into `must`, `mustNot`, `should` and `filter` clauses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompoundSearchOperator {
    must: Vec<SearchOperatorNode>,
    must_not: Vec<SearchOperatorNode>,
    should: Vec<SearchOperatorNode>,
    filter: Vec<SearchOperatorNode>,
    minimum_should_match: Option<u32>,
    score: Option<SearchScore>,
}

/// Starts an empty compound operator; add clauses with `must`, `must_not`, `should` or `filter`.
///
/// A compound left without clauses encodes as `{"compound": {}}` and is rejected by the server.
#[must_use]
pub fn compound() -> CompoundSearchOperator {
    CompoundSearchOperator::default()
}

fn collect_clauses<O: Into<SearchOperatorNode>>(
    clause: &str,
    operators: impl IntoIterator<Item = O>,
) -> Result<Vec<SearchOperatorNode>, DbError> {
    let nodes: Vec<SearchOperatorNode> = operators.into_iter().map(Into::into).collect();
    if nodes.is_empty() {
        log::warn!("compound '{clause}' clause built without operators");
        return Err(DbError::Construction(format!(
            "compound '{clause}' clause requires at least one operator"
        )));
    }
    Ok(nodes)
}

impl CompoundSearchOperator {
    /// Appends operators every match must satisfy.
    ///
    /// # Errors
    /// Returns [`DbError::Construction`] if `operators` is empty.
    pub fn must<O: Into<SearchOperatorNode>>(
        mut self,
        operators: impl IntoIterator<Item = O>,
    ) -> Result<Self, DbError> {
        self.must.extend(collect_clauses("must", operators)?);
        Ok(self)
    }

    /// Appends operators no match may satisfy.
    ///
    /// # Errors
    /// Returns [`DbError::Construction`] if `operators` is empty.
    pub fn must_not<O: Into<SearchOperatorNode>>(
        mut self,
        operators: impl IntoIterator<Item = O>,
    ) -> Result<Self, DbError> {
        self.must_not.extend(collect_clauses("mustNot", operators)?);
        Ok(self)
    }

    /// Appends operators that raise the score of documents satisfying them.
    ///
    /// # Errors
    /// Returns [`DbError::Construction`] if `operators` is empty.
    pub fn should<O: Into<SearchOperatorNode>>(
        mut self,
        operators: impl IntoIterator<Item = O>,
    ) -> Result<Self, DbError> {
        self.should.extend(collect_clauses("should", operators)?);
        Ok(self)
    }

    /// Appends operators every match must satisfy without affecting its score.
    ///
    /// # Errors
    /// Returns [`DbError::Construction`] if `operators` is empty.
    pub fn filter<O: Into<SearchOperatorNode>>(
        mut self,
        operators: impl IntoIterator<Item = O>,
    ) -> Result<Self, DbError> {
        self.filter.extend(collect_clauses("filter", operators)?);
        Ok(self)
    }

    #[must_use]
    pub fn minimum_should_match(mut self, minimum: u32) -> Self {
        self.minimum_should_match = Some(minimum);
        self
    }

    #[must_use]
    pub fn get_must(&self) -> &[SearchOperatorNode] {
        &self.must
    }

    #[must_use]
    pub fn get_must_not(&self) -> &[SearchOperatorNode] {
        &self.must_not
    }

    #[must_use]
    pub fn get_should(&self) -> &[SearchOperatorNode] {
        &self.should
    }

    #[must_use]
    pub fn get_filter(&self) -> &[SearchOperatorNode] {
        &self.filter
    }

    #[must_use]
    pub const fn get_minimum_should_match(&self) -> Option<u32> {
        self.minimum_should_match
    }
}

fn clause_array(nodes: &[SearchOperatorNode]) -> Bson {
    Bson::Array(nodes.iter().map(|n| Bson::Document(n.to_document())).collect())
}

impl Sealed for CompoundSearchOperator {}

impl SearchOperator for CompoundSearchOperator {
    fn score(mut self, modifier: SearchScore) -> Self {
        self.score = Some(modifier);
        self
    }

    fn get_score(&self) -> Option<&SearchScore> {
        self.score.as_ref()
    }

    fn to_document(&self) -> Document {
        let mut body = Document::new();
        for (key, nodes) in [
            ("must", &self.must),
            ("mustNot", &self.must_not),
            ("should", &self.should),
            ("filter", &self.filter),
        ] {
            if !nodes.is_empty() {
                body.insert(key, clause_array(nodes));
            }
        }
        if let Some(min) = self.minimum_should_match {
            body.insert("minimumShouldMatch", i64::from(min));
        }
        if let Some(score) = &self.score {
            body.insert("score", score.to_document());
        }
        doc! { "compound": body }
    }
}
