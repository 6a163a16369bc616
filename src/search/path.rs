use bson::{Bson, doc};
use std::fmt;

/// Locator of a field inside an indexed document, as understood by a search index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldSearchPath {
    path: String,
    multi: Option<String>,
}

impl FieldSearchPath {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), multi: None }
    }

    /// Targets an alternate analyzer declared for this field in the index definition.
    #[must_use]
    pub fn multi(mut self, analyzer: impl Into<String>) -> Self {
        self.multi = Some(analyzer.into());
        self
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    #[must_use]
    pub fn get_multi(&self) -> Option<&str> {
        self.multi.as_deref()
    }

    #[must_use]
    pub fn to_bson(&self) -> Bson {
        match &self.multi {
            Some(multi) => Bson::Document(doc! { "value": self.path.as_str(), "multi": multi.as_str() }),
            None => Bson::String(self.path.clone()),
        }
    }
}

impl From<&str> for FieldSearchPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for FieldSearchPath {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for FieldSearchPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.multi {
            Some(multi) => write!(f, "{} (multi: {multi})", self.path),
            None => f.write_str(&self.path),
        }
    }
}
