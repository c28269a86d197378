//! Secret keywords and the allow-list they are checked against

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Keywords accepted when no list is configured
pub const DEFAULT_SECRET_KEYWORDS: &[&str] = &[
    "anchor", "treasure", "compass", "lantern", "harbor", "summit", "falcon", "ember",
];

const EMPTY_KEYWORD_MESSAGE: &str = "Enter a keyword before submitting.";
const UNKNOWN_KEYWORD_MESSAGE: &str = "Keyword not recognized. Try again.";

/// A submitted keyword, trimmed and lowercased
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Keyword(String);

impl Keyword {
    /// Normalize a raw submission. Blank input is rejected.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let normalized = raw.as_ref().trim().to_lowercase();

        if normalized.is_empty() {
            return Err(DomainError::invalid_keyword(EMPTY_KEYWORD_MESSAGE));
        }

        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Keyword {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Keyword> for String {
    fn from(keyword: Keyword) -> Self {
        keyword.0
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed allow-list of secret keywords
#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    keywords: HashSet<Keyword>,
}

impl KeywordCatalog {
    /// Build a catalog from raw entries; blank entries are skipped
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .filter_map(|k| Keyword::new(k).ok())
                .collect(),
        }
    }

    pub fn contains(&self, keyword: &Keyword) -> bool {
        self.keywords.contains(keyword)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Normalize a submission and check it against the allow-list
    pub fn validate(&self, raw: &str) -> Result<Keyword, DomainError> {
        let keyword = Keyword::new(raw)?;

        if !self.contains(&keyword) {
            return Err(DomainError::invalid_keyword(UNKNOWN_KEYWORD_MESSAGE));
        }

        Ok(keyword)
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_SECRET_KEYWORDS.iter().copied())
    }
}
