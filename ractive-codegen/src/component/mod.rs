//! Component generator.
//!
//! Adds one Ractive component to an existing project. The caller resolves the
//! project's [`LoadMethod`] from its settings and hands it in; the generator
//! itself never reads `.yo-rc.json`.

mod definition;
mod template;

use eyre::{Result, bail};
use ractive_gen_config::{LoadMethod, TestFramework};
use ractive_gen_core::{camelize, classify};

pub use definition::ComponentDefinition;
pub use template::ComponentTemplate;
pub use test::ComponentTest;

use crate::generation::{FileRegistry, Stage};
use crate::generator::Generator;

/// What to generate for a component.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Component name, used verbatim in file names.
    pub name: String,
    /// Isolate the component from its parent's data.
    pub isolated: bool,
    /// Register the component with `Ractive.components`.
    pub global: bool,
    /// Browserify only: compile the template on the fly and emit just the
    /// `.ract` file.
    pub on_the_fly: bool,
}

impl ComponentSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn isolated(mut self, isolated: bool) -> Self {
        self.isolated = isolated;
        self
    }

    pub fn global(mut self, global: bool) -> Self {
        self.global = global;
        self
    }

    pub fn on_the_fly(mut self, on_the_fly: bool) -> Self {
        self.on_the_fly = on_the_fly;
        self
    }
}

/// Names derived from a component name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentNames {
    /// The name as given, used for file names.
    pub file: String,
    /// PascalCase constructor name.
    pub class: String,
    /// camelCase registration name.
    pub registration: String,
}

impl ComponentNames {
    fn new(name: &str) -> Self {
        Self {
            file: name.to_string(),
            class: classify(name),
            registration: camelize(name),
        }
    }
}

/// Generator for a single component.
#[derive(Debug, Clone)]
pub struct ComponentGenerator {
    load_method: LoadMethod,
    test_framework: TestFramework,
    spec: ComponentSpec,
    names: ComponentNames,
}

impl ComponentGenerator {
    /// Create a generator for `spec` in a project using `load_method`.
    ///
    /// Fails when the component name is empty, has no identifier characters
    /// or contains a path separator.
    pub fn new(load_method: LoadMethod, spec: ComponentSpec) -> Result<Self> {
        let name = spec.name.trim();
        if name.is_empty() {
            bail!("component name must not be empty");
        }
        if name.contains(['/', '\\']) {
            bail!("component name '{}' must not contain a path separator", name);
        }

        let names = ComponentNames::new(name);
        if names.class.is_empty() {
            bail!("component name '{}' has no identifier characters", name);
        }

        Ok(Self {
            load_method,
            test_framework: TestFramework::default(),
            spec,
            names,
        })
    }

    /// Shape the test file for `test_framework` (Mocha by default).
    pub fn with_test_framework(mut self, test_framework: TestFramework) -> Self {
        self.test_framework = test_framework;
        self
    }

    pub fn load_method(&self) -> LoadMethod {
        self.load_method
    }

    pub fn spec(&self) -> &ComponentSpec {
        &self.spec
    }

    pub fn names(&self) -> &ComponentNames {
        &self.names
    }

    /// Only the template is emitted for on-the-fly Browserify components.
    fn template_only(&self) -> bool {
        self.load_method == LoadMethod::Browserify && self.spec.on_the_fly
    }
}

impl Generator for ComponentGenerator {
    fn name(&self) -> &'static str {
        "component"
    }

    fn files(&self) -> Result<FileRegistry> {
        let mut registry = FileRegistry::new();
        let template = ComponentTemplate::new(self.load_method, &self.names);

        if self.template_only() {
            tracing::debug!(component = %self.names.file, "on-the-fly template only");
            if let Some(template) = template {
                registry.register_file(&template, Stage::App);
            }
            return Ok(registry);
        }

        registry.register_file(
            &ComponentDefinition::new(self.load_method, &self.spec, &self.names),
            Stage::App,
        );
        if let Some(template) = template {
            registry.register_file(&template, Stage::App);
        }
        registry.register_file(
            &ComponentTest::new(self.load_method, self.test_framework, &self.names),
            Stage::Tests,
        );

        Ok(registry)
    }
}
