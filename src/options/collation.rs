use bson::{Bson, Document};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::fmt_opt;

/// Comparison level applied by a collation. Values match the wire integers 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum CollationStrength {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
    Identical,
}

impl CollationStrength {
    #[must_use]
    pub const fn as_i32(self) -> i32 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
            Self::Tertiary => 3,
            Self::Quaternary => 4,
            Self::Identical => 5,
        }
    }
}

impl From<CollationStrength> for i32 {
    fn from(s: CollationStrength) -> Self {
        s.as_i32()
    }
}

impl TryFrom<i32> for CollationStrength {
    type Error = String;
    fn try_from(v: i32) -> Result<Self, Self::Error> {
        Ok(match v {
            1 => Self::Primary,
            2 => Self::Secondary,
            3 => Self::Tertiary,
            4 => Self::Quaternary,
            5 => Self::Identical,
            other => return Err(format!("unknown collation strength {other}")),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollationCaseFirst {
    Upper,
    Lower,
    Off,
}

impl CollationCaseFirst {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Upper => "upper",
            Self::Lower => "lower",
            Self::Off => "off",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CollationAlternate {
    NonIgnorable,
    Shifted,
}

impl CollationAlternate {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NonIgnorable => "non-ignorable",
            Self::Shifted => "shifted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollationMaxVariable {
    Punct,
    Space,
}

impl CollationMaxVariable {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Punct => "punct",
            Self::Space => "space",
        }
    }
}

/// Locale-aware string comparison settings attached to a command.
///
/// Every field is optional; only the ones that were set are emitted by
/// [`Collation::to_document`], leaving the rest to the server defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    case_level: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    case_first: Option<CollationCaseFirst>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strength: Option<CollationStrength>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    numeric_ordering: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    alternate: Option<CollationAlternate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_variable: Option<CollationMaxVariable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    normalization: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    backwards: Option<bool>,
}

impl Collation {
    #[must_use]
    pub fn builder() -> CollationBuilder {
        CollationBuilder::default()
    }

    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    #[must_use]
    pub const fn case_level(&self) -> Option<bool> {
        self.case_level
    }

    #[must_use]
    pub const fn case_first(&self) -> Option<CollationCaseFirst> {
        self.case_first
    }

    #[must_use]
    pub const fn strength(&self) -> Option<CollationStrength> {
        self.strength
    }

    #[must_use]
    pub const fn numeric_ordering(&self) -> Option<bool> {
        self.numeric_ordering
    }

    #[must_use]
    pub const fn alternate(&self) -> Option<CollationAlternate> {
        self.alternate
    }

    #[must_use]
    pub const fn max_variable(&self) -> Option<CollationMaxVariable> {
        self.max_variable
    }

    #[must_use]
    pub const fn normalization(&self) -> Option<bool> {
        self.normalization
    }

    #[must_use]
    pub const fn backwards(&self) -> Option<bool> {
        self.backwards
    }

    /// Renders the set fields as a command sub-document.
    #[must_use]
    pub fn to_document(&self) -> Document {
        let mut d = Document::new();
        if let Some(locale) = &self.locale {
            d.insert("locale", locale.as_str());
        }
        if let Some(v) = self.case_level {
            d.insert("caseLevel", v);
        }
        if let Some(v) = self.case_first {
            d.insert("caseFirst", v.as_str());
        }
        if let Some(v) = self.strength {
            d.insert("strength", v.as_i32());
        }
        if let Some(v) = self.numeric_ordering {
            d.insert("numericOrdering", v);
        }
        if let Some(v) = self.alternate {
            d.insert("alternate", v.as_str());
        }
        if let Some(v) = self.max_variable {
            d.insert("maxVariable", v.as_str());
        }
        if let Some(v) = self.normalization {
            d.insert("normalization", v);
        }
        if let Some(v) = self.backwards {
            d.insert("backwards", v);
        }
        d
    }
}

impl From<Collation> for Bson {
    fn from(c: Collation) -> Self {
        Self::Document(c.to_document())
    }
}

impl fmt::Display for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Collation{locale=")?;
        match &self.locale {
            Some(l) => write!(f, "'{l}'")?,
            None => f.write_str("null")?,
        }
        f.write_str(", caseLevel=")?;
        fmt_opt(f, self.case_level)?;
        f.write_str(", caseFirst=")?;
        fmt_opt(f, self.case_first.map(CollationCaseFirst::as_str))?;
        f.write_str(", strength=")?;
        fmt_opt(f, self.strength.map(CollationStrength::as_i32))?;
        f.write_str(", numericOrdering=")?;
        fmt_opt(f, self.numeric_ordering)?;
        f.write_str(", alternate=")?;
        fmt_opt(f, self.alternate.map(CollationAlternate::as_str))?;
        f.write_str(", maxVariable=")?;
        fmt_opt(f, self.max_variable.map(CollationMaxVariable::as_str))?;
        f.write_str(", normalization=")?;
        fmt_opt(f, self.normalization)?;
        f.write_str(", backwards=")?;
        fmt_opt(f, self.backwards)?;
        f.write_str("}")
    }
}

#[derive(Debug, Default)]
pub struct CollationBuilder {
    inner: Collation,
}

impl CollationBuilder {
    #[must_use]
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.inner.locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn case_level(mut self, case_level: bool) -> Self {
        self.inner.case_level = Some(case_level);
        self
    }

    #[must_use]
    pub fn case_first(mut self, case_first: CollationCaseFirst) -> Self {
        self.inner.case_first = Some(case_first);
        self
    }

    #[must_use]
    pub fn strength(mut self, strength: CollationStrength) -> Self {
        self.inner.strength = Some(strength);
        self
    }

    #[must_use]
    pub fn numeric_ordering(mut self, numeric_ordering: bool) -> Self {
        self.inner.numeric_ordering = Some(numeric_ordering);
        self
    }

    #[must_use]
    pub fn alternate(mut self, alternate: CollationAlternate) -> Self {
        self.inner.alternate = Some(alternate);
        self
    }

    #[must_use]
    pub fn max_variable(mut self, max_variable: CollationMaxVariable) -> Self {
        self.inner.max_variable = Some(max_variable);
        self
    }

    #[must_use]
    pub fn normalization(mut self, normalization: bool) -> Self {
        self.inner.normalization = Some(normalization);
        self
    }

    #[must_use]
    pub fn backwards(mut self, backwards: bool) -> Self {
        self.inner.backwards = Some(backwards);
        self
    }

    #[must_use]
    pub fn build(self) -> Collation {
        self.inner
    }
}
