//! Project generator.
//!
//! Resolves the answers once, registers the scaffold in four stages and
//! records the project settings for later component runs.

use std::path::Path;

use eyre::{Result, WrapErr};
use ractive_gen_config::{Answers, DerivedConfig, PersistedSettings, TestFramework};

use crate::files::{
    AppJs, AppTest, BowerManifest, BowerRc, EditorConfig, GitAttributes, GitIgnore, Gruntfile,
    IndexHtml, JsHintRc, MainJs, PackageJson, SpecMain, SpecRunner, Stylesheet,
};
use crate::generation::{FileRegistry, Stage, WriteStats};
use crate::generator::Generator;

/// Options that do not come from the answers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectOptions {
    pub test_framework: TestFramework,
    /// Do not record settings in `.yo-rc.json`.
    pub skip_yo_rc: bool,
    /// Leave the analytics snippet out of `app/index.html`.
    pub skip_analytics: bool,
}

/// Generator for a whole project scaffold.
#[derive(Debug, Clone)]
pub struct ProjectGenerator {
    config: DerivedConfig,
    options: ProjectOptions,
}

impl ProjectGenerator {
    /// Resolve `answers` and prepare the generator.
    ///
    /// Fails before anything is written when the answers do not validate.
    pub fn new(answers: &Answers, options: ProjectOptions) -> Result<Self> {
        let config = DerivedConfig::resolve(answers, options.test_framework)
            .wrap_err("invalid answers")?;
        Ok(Self { config, options })
    }

    pub fn config(&self) -> &DerivedConfig {
        &self.config
    }

    /// Settings recorded for this project.
    pub fn settings(&self) -> PersistedSettings {
        PersistedSettings::from_config(&self.config)
    }

    fn register_app(&self, registry: &mut FileRegistry) {
        let config = &self.config;

        registry.register_file(
            &IndexHtml::new(config).with_analytics(!self.options.skip_analytics),
            Stage::App,
        );
        registry.register_file(&AppJs::new(config), Stage::App);
        if config.is_amd() {
            registry.register_file(&MainJs::new(config), Stage::App);
        }
        for stylesheet in Stylesheet::for_config(config) {
            registry.register_file(&stylesheet, Stage::App);
        }
    }

    fn register_project_files(&self, registry: &mut FileRegistry) {
        let config = &self.config;

        registry.register_file(&EditorConfig, Stage::Project);
        registry.register_file(&GitIgnore::new(config), Stage::Project);
        registry.register_file(&GitAttributes, Stage::Project);
        registry.register_file(&BowerRc, Stage::Project);
        registry.register_file(&JsHintRc::new(config), Stage::Project);
        registry.register_file(&PackageJson::from_config(config), Stage::Project);
        registry.register_file(&Gruntfile::new(config), Stage::Project);
    }

    fn register_tests(&self, registry: &mut FileRegistry) {
        let config = &self.config;

        if config.is_mocha() {
            registry.register_file(&SpecRunner::new(config), Stage::Tests);
        }
        if config.is_amd() {
            registry.register_file(&SpecMain::new(config), Stage::Tests);
        }
        registry.register_file(&AppTest::new(config), Stage::Tests);
    }
}

impl Generator for ProjectGenerator {
    fn name(&self) -> &'static str {
        "app"
    }

    fn files(&self) -> Result<FileRegistry> {
        let mut registry = FileRegistry::new();

        self.register_app(&mut registry);
        self.register_project_files(&mut registry);
        registry.register_file(&BowerManifest::from_config(&self.config), Stage::Dependencies);
        self.register_tests(&mut registry);

        tracing::debug!(files = registry.len(), load_method = %self.config.load_method, "registered project files");
        Ok(registry)
    }

    /// Record the settings, then write every stage in order.
    fn generate(&self, output_dir: &Path) -> Result<WriteStats> {
        let registry = self.files()?;

        if self.options.skip_yo_rc {
            tracing::debug!("skipping settings file");
        } else {
            self.settings()
                .save(output_dir)
                .wrap_err("failed to record project settings")?;
        }

        let stats = registry.write_all(output_dir)?;
        tracing::info!(
            project = %self.config.project,
            written = stats.written.len(),
            "project generated"
        );
        Ok(stats)
    }
}
