//! Answers collected from the user, interactively or from an answers file.

use std::{path::Path, str::FromStr};

use ractive_gen_core::classify;
use serde::{Deserialize, Serialize};

use crate::{Error, Feature, LoadMethod, Result, Router, error::SourceContext};

/// Answers to the project generator's questions.
///
/// Answers files use the same keys as the interactive prompts:
///
/// ```toml
/// project = "todo"
/// router = true
/// includedRouter = "page"
/// loadMethod = "AMD"
/// features = ["sass", "normalize"]
/// libsass = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Answers {
    /// Project name.
    pub project: String,
    /// Whether a client-side router is included.
    #[serde(default)]
    pub router: bool,
    /// Router choice, only consulted when `router` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included_router: Option<Router>,
    /// How scripts are loaded.
    #[serde(default = "default_load_method")]
    pub load_method: LoadMethod,
    /// Optional features.
    #[serde(default)]
    pub features: Vec<Feature>,
    /// Use the native libsass binding, only consulted when Sass is selected.
    #[serde(default)]
    pub libsass: bool,
}

fn default_load_method() -> LoadMethod {
    LoadMethod::ScriptTags
}

impl Answers {
    /// Answers with every question at its default.
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            router: false,
            included_router: None,
            load_method: default_load_method(),
            features: Vec::new(),
            libsass: false,
        }
    }

    pub fn with_router(mut self, router: Router) -> Self {
        self.router = true;
        self.included_router = Some(router);
        self
    }

    pub fn with_load_method(mut self, load_method: LoadMethod) -> Self {
        self.load_method = load_method;
        self
    }

    pub fn with_features(mut self, features: impl IntoIterator<Item = Feature>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    pub fn with_libsass(mut self, libsass: bool) -> Self {
        self.libsass = libsass;
        self
    }

    /// Whether `feature` was selected.
    pub fn has_feature(&self, feature: Feature) -> bool {
        self.features.contains(&feature)
    }

    /// The router to include, if any.
    ///
    /// Falls back to Router.js when a router was requested without a choice,
    /// matching the prompt's default.
    pub fn selected_router(&self) -> Option<Router> {
        self.router
            .then(|| self.included_router.unwrap_or(Router::RouterJs))
    }

    /// Check the answers before any file is emitted.
    pub fn validate(&self) -> Result<()> {
        let project = self.project.trim();
        if project.is_empty() {
            return Err(Box::new(Error::EmptyName { what: "project" }));
        }
        // Namespace and slug are both built from the alphanumeric words
        if classify(project).is_empty() {
            return Err(Box::new(Error::NoIdentifier {
                what: "project",
                name: project.to_string(),
            }));
        }
        Ok(())
    }

    /// Read and parse an answers file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        Self::from_str_with_filename(&content, &path.display().to_string())
    }

    /// Parse answers from TOML, reporting errors against `filename`.
    pub fn from_str_with_filename(src: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(src, filename);
        let answers: Answers = toml::from_str(ctx.src()).map_err(|e| ctx.parse_error(e))?;

        if answers.project.trim().is_empty() {
            return Err(ctx.validation_error("project name must not be empty", "project"));
        }
        if classify(&answers.project).is_empty() {
            return Err(ctx.validation_error(
                "project name must contain a letter or digit",
                "project",
            ));
        }

        if !answers.router && answers.included_router.is_some() {
            tracing::warn!(
                file = filename,
                "includedRouter is ignored because router is not enabled"
            );
        }

        Ok(answers)
    }
}

impl FromStr for Answers {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, "answers.toml")
    }
}
