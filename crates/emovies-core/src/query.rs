use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Title searched at startup when the config doesn't provide a usable one.
pub const DEFAULT_QUERY: &str = "Jurassic Park";

/// A validated search term: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Err(CoreError::EmptyQuery)
        } else {
            Ok(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Query {
    fn default() -> Self {
        Self(DEFAULT_QUERY.to_string())
    }
}

impl FromStr for Query {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Query {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let q = Query::parse("  The Matrix \n").unwrap();
        assert_eq!(q.as_str(), "The Matrix");
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(Query::parse("Star  Wars").unwrap().as_str(), "Star  Wars");
    }

    #[test]
    fn rejects_empty_and_blank() {
        assert!(matches!(Query::parse(""), Err(CoreError::EmptyQuery)));
        assert!(matches!(Query::parse(" \t\n"), Err(CoreError::EmptyQuery)));
    }

    #[test]
    fn default_is_seed_title() {
        assert_eq!(Query::default().to_string(), "Jurassic Park");
    }
}
