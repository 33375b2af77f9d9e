//! Flags derived from the answers.

use ractive_gen_core::{classify, slugify};
use serde::Serialize;

use crate::{Answers, Feature, LoadMethod, Result, Router, TestFramework};

/// Configuration derived from [`Answers`].
///
/// Every field is a pure function of the answers and the test framework;
/// call [`DerivedConfig::resolve`] again rather than mutating a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedConfig {
    pub project: String,
    /// Identifier form of the project name (`nameSpace` in the settings file).
    pub namespace: String,
    /// Package name form of the project name.
    pub slug: String,
    pub include_sass: bool,
    pub include_modernizr: bool,
    pub include_jquery: bool,
    pub include_normalize: bool,
    /// Compile Sass through the native libsass binding.
    pub use_native_sass: bool,
    /// Compile Sass through the Ruby compiler.
    pub use_source_compiler: bool,
    pub load_method: LoadMethod,
    pub router: Option<Router>,
    pub test_framework: TestFramework,
}

impl DerivedConfig {
    /// Resolve the answers into generation flags.
    ///
    /// Fails when the answers do not validate.
    pub fn resolve(answers: &Answers, test_framework: TestFramework) -> Result<Self> {
        answers.validate()?;

        let include_sass = answers.has_feature(Feature::Sass);
        let project = answers.project.trim().to_string();

        Ok(Self {
            namespace: classify(&project),
            slug: slugify(&project),
            project,
            include_sass,
            include_modernizr: answers.has_feature(Feature::Modernizr),
            include_jquery: answers.has_feature(Feature::Jquery),
            include_normalize: answers.has_feature(Feature::Normalize),
            use_native_sass: include_sass && answers.libsass,
            use_source_compiler: include_sass && !answers.libsass,
            load_method: answers.load_method,
            router: answers.selected_router(),
            test_framework,
        })
    }

    pub fn is_amd(&self) -> bool {
        self.load_method == LoadMethod::Amd
    }

    pub fn is_browserify(&self) -> bool {
        self.load_method == LoadMethod::Browserify
    }

    pub fn is_script_tags(&self) -> bool {
        self.load_method == LoadMethod::ScriptTags
    }

    pub fn is_mocha(&self) -> bool {
        self.test_framework == TestFramework::Mocha
    }
}
