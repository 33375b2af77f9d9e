//! Client-side router choices and their package table.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// Client-side routing library bundled with the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Router {
    #[serde(rename = "router.js")]
    RouterJs = 0,
    #[serde(rename = "page")]
    Page = 1,
    #[serde(rename = "director")]
    Director = 2,
}

/// Package coordinates for a router.
///
/// `main` is the entry file the bower manifest redirects the package to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouterSpec {
    pub package: &'static str,
    pub version: &'static str,
    pub main: &'static str,
}

/// Indexed by `Router as usize`.
static ROUTER_TABLE: [RouterSpec; 3] = [
    RouterSpec {
        package: "router.js",
        version: "^0.6.2",
        main: "router.js",
    },
    RouterSpec {
        package: "page",
        version: "~1.3.7",
        main: "index.js",
    },
    RouterSpec {
        package: "director",
        version: "~1.2.2",
        main: "build/director.js",
    },
];

impl Router {
    pub const ALL: [Router; 3] = [Router::RouterJs, Router::Page, Router::Director];

    /// Look up the package coordinates for this router.
    pub fn spec(self) -> &'static RouterSpec {
        &ROUTER_TABLE[self as usize]
    }

    /// Returns the answer token for this router (also its package name).
    pub fn as_str(&self) -> &'static str {
        self.spec().package
    }

    /// Returns the label shown in prompts.
    pub fn label(&self) -> &'static str {
        match self {
            Router::RouterJs => "Router.js",
            Router::Page => "Page.js",
            Router::Director => "Director.js",
        }
    }
}

impl fmt::Display for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Router {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Router::ALL
            .into_iter()
            .find(|router| router.as_str() == s)
            .ok_or_else(|| Error::unknown("router", s, "router.js, page, director"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lookup() {
        assert_eq!(Router::RouterJs.spec().main, "router.js");
        assert_eq!(Router::Page.spec().main, "index.js");
        assert_eq!(Router::Director.spec().main, "build/director.js");
        assert_eq!(Router::Page.spec().version, "~1.3.7");
    }

    #[test]
    fn test_token_matches_package() {
        for router in Router::ALL {
            assert_eq!(router.as_str(), router.spec().package);
            let token = serde_json::to_string(&router).unwrap();
            assert_eq!(token, format!("\"{}\"", router.spec().package));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(Router::from_str("page").unwrap(), Router::Page);
        assert_eq!(Router::from_str("router.js").unwrap(), Router::RouterJs);
        assert!(Router::from_str("backbone").is_err());
    }
}
