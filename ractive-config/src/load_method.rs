//! Script loading methods.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// How generated scripts are wired into the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum LoadMethod {
    /// Regular `<script>` tags
    #[serde(rename = "scriptTags")]
    ScriptTags,
    /// AMD modules loaded by Require.js
    #[serde(rename = "AMD")]
    Amd,
    /// CommonJS modules bundled by Browserify
    #[serde(rename = "browserify")]
    Browserify,
}

impl LoadMethod {
    pub const ALL: [LoadMethod; 3] = [
        LoadMethod::ScriptTags,
        LoadMethod::Amd,
        LoadMethod::Browserify,
    ];

    const EXPECTED: &'static str = "scriptTags, AMD, browserify";

    /// Returns the persisted token for this load method.
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadMethod::ScriptTags => "scriptTags",
            LoadMethod::Amd => "AMD",
            LoadMethod::Browserify => "browserify",
        }
    }

    /// Parses a persisted token. Only the exact tokens written by
    /// [`as_str`](Self::as_str) are accepted.
    pub fn from_token(token: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == token)
            .ok_or_else(|| Error::unknown("load method", token, Self::EXPECTED))
    }

    /// Returns the label shown in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            LoadMethod::ScriptTags => "Regular script tags",
            LoadMethod::Amd => "AMD (Require.js)",
            LoadMethod::Browserify => "Browserify",
        }
    }
}

impl fmt::Display for LoadMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LoadMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "scripttags" | "script-tags" | "script_tags" => Ok(LoadMethod::ScriptTags),
            "amd" => Ok(LoadMethod::Amd),
            "browserify" => Ok(LoadMethod::Browserify),
            _ => Err(Error::unknown("load method", s, Self::EXPECTED)),
        }
    }
}
