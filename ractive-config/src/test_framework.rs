//! Test frameworks supported by the scaffolded test suite.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Test framework used by the generated project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    /// Mocha with Chai assertions
    #[default]
    Mocha,
    /// Jasmine
    Jasmine,
}

impl TestFramework {
    pub const ALL: [TestFramework; 2] = [TestFramework::Mocha, TestFramework::Jasmine];

    const EXPECTED: &'static str = "mocha, jasmine";

    /// Returns the persisted token for this framework.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestFramework::Mocha => "mocha",
            TestFramework::Jasmine => "jasmine",
        }
    }

    /// Parses a persisted token, which must match [`as_str`](Self::as_str) exactly.
    pub fn from_token(token: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|framework| framework.as_str() == token)
            .ok_or_else(|| Error::unknown("test framework", token, Self::EXPECTED))
    }

    /// Test description used in generated specs.
    pub fn assert_string(&self) -> &'static str {
        match self {
            TestFramework::Mocha => "should assert something",
            TestFramework::Jasmine => "asserts something",
        }
    }

    /// Placeholder expectation used in generated specs.
    pub fn expectation(&self) -> &'static str {
        match self {
            TestFramework::Mocha => "expect(true).to.be.true;",
            TestFramework::Jasmine => "expect(true).toBe(true);",
        }
    }
}

impl fmt::Display for TestFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TestFramework {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mocha" => Ok(TestFramework::Mocha),
            "jasmine" => Ok(TestFramework::Jasmine),
            _ => Err(Error::unknown("test framework", s, Self::EXPECTED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(TestFramework::from_str("mocha").unwrap(), TestFramework::Mocha);
        assert_eq!(TestFramework::from_str("Jasmine").unwrap(), TestFramework::Jasmine);
        assert!(TestFramework::from_str("jest").is_err());
    }

    #[test]
    fn test_from_token_is_exact() {
        assert_eq!(TestFramework::from_token("jasmine").unwrap(), TestFramework::Jasmine);
        assert!(TestFramework::from_token("Jasmine").is_err());
        assert!(TestFramework::from_token("MOCHA").is_err());
    }

    #[test]
    fn test_default_is_mocha() {
        assert_eq!(TestFramework::default(), TestFramework::Mocha);
    }

    #[test]
    fn test_spec_strings() {
        assert_eq!(TestFramework::Mocha.expectation(), "expect(true).to.be.true;");
        assert_eq!(TestFramework::Jasmine.assert_string(), "asserts something");
    }
}
