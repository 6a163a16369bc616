use bson::oid::ObjectId;
use bson::{Binary, Bson, Document, doc};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::DbError;

use super::operator::SearchOperator;
use super::path::FieldSearchPath;
use super::score::SearchScore;
use super::sealed::Sealed;

/// Kind shared by every value of one `in` operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InValueKind {
    Boolean,
    ObjectId,
    Number,
    Date,
    Uuid,
    String,
    /// Matches documents where the field is null; carries no values.
    Null,
}

mod value_sealed {
    pub trait Sealed {}
}

/// A value type accepted by [`in_values`]. Sealed to the kinds the search server compares.
pub trait InValue: value_sealed::Sealed {
    const KIND: InValueKind;

    fn into_bson(self) -> Bson;
}

macro_rules! in_value {
    ($ty:ty, $kind:ident, |$v:ident| $conv:expr) => {
        impl value_sealed::Sealed for $ty {}

        impl InValue for $ty {
            const KIND: InValueKind = InValueKind::$kind;

            fn into_bson(self) -> Bson {
                let $v = self;
                $conv
            }
        }
    };
}

in_value!(bool, Boolean, |v| Bson::Boolean(v));
in_value!(ObjectId, ObjectId, |v| Bson::ObjectId(v));
in_value!(i32, Number, |v| Bson::Int32(v));
in_value!(i64, Number, |v| Bson::Int64(v));
in_value!(f64, Number, |v| Bson::Double(v));
in_value!(DateTime<Utc>, Date, |v| Bson::DateTime(bson::DateTime::from_chrono(v)));
in_value!(Uuid, Uuid, |v| Bson::Binary(Binary::from_uuid(bson::Uuid::from(v))));
in_value!(String, String, |v| Bson::String(v));
in_value!(&str, String, |v| Bson::String(v.to_owned()));

/// Matches documents whose field holds one of a set of values.
#[derive(Debug, Clone, PartialEq)]
pub struct InSearchOperator {
    path: FieldSearchPath,
    kind: InValueKind,
    values: Vec<Bson>,
    score: Option<SearchScore>,
}

/// Builds an `in` operator over `values`, kept in the given order with duplicates.
///
/// # Errors
/// Returns [`DbError::Construction`] if `values` is empty.
pub fn in_values<T: InValue>(
    path: impl Into<FieldSearchPath>,
    values: impl IntoIterator<Item = T>,
) -> Result<InSearchOperator, DbError> {
    let path = path.into();
    let values: Vec<Bson> = values.into_iter().map(InValue::into_bson).collect();
    if values.is_empty() {
        log::warn!("in operator on path '{path}' built without values");
        return Err(DbError::Construction(format!(
            "in operator on path '{path}' requires at least one value"
        )));
    }
    Ok(InSearchOperator { path, kind: T::KIND, values, score: None })
}

/// Builds an `in` operator matching documents where `path` is null.
#[must_use]
pub fn in_null(path: impl Into<FieldSearchPath>) -> InSearchOperator {
    InSearchOperator { path: path.into(), kind: InValueKind::Null, values: Vec::new(), score: None }
}

impl InSearchOperator {
    #[must_use]
    pub const fn path(&self) -> &FieldSearchPath {
        &self.path
    }

    #[must_use]
    pub const fn kind(&self) -> InValueKind {
        self.kind
    }

    #[must_use]
    pub fn values(&self) -> &[Bson] {
        &self.values
    }

    #[must_use]
    pub fn is_null_check(&self) -> bool {
        self.kind == InValueKind::Null
    }
}

impl Sealed for InSearchOperator {}

impl SearchOperator for InSearchOperator {
    fn score(mut self, modifier: SearchScore) -> Self {
        self.score = Some(modifier);
        self
    }

    fn get_score(&self) -> Option<&SearchScore> {
        self.score.as_ref()
    }

    fn to_document(&self) -> Document {
        let value = match self.values.as_slice() {
            [] => Bson::Null,
            [single] => single.clone(),
            many => Bson::Array(many.to_vec()),
        };
        let mut body = doc! { "path": self.path.to_bson(), "value": value };
        if let Some(score) = &self.score {
            body.insert("score", score.to_document());
        }
        doc! { "in": body }
    }
}
