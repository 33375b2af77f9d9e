//! Bower dependency manifest assembled from the derived configuration.

use std::path::PathBuf;

use indexmap::IndexMap;
use ractive_gen_config::{DerivedConfig, LoadMethod, TestFramework};
use ractive_gen_core::GeneratedFile;
use serde::Serialize;
use serde_json::{Map, Value, json};

use super::{Dependencies, pretty_json};

const MANIFEST_VERSION: &str = "0.0.0";

const JQUERY: (&str, &str) = ("jQuery", "~1.11.1");
const MODERNIZR: (&str, &str) = ("modernizr", "~2.8.2");
const NORMALIZE_SCSS: &str = "normalize-scss";
const NORMALIZE_CSS: &str = "normalize-css";
const NORMALIZE_VERSION: &str = "~3.0.1";
const REQUIREJS_RACTIVE: (&str, &str) = ("requirejs-ractive", "~0.1.5");
const REQUIREJS: (&str, &str) = ("requirejs", "~2.1.14");
const RACTIVE: (&str, &str) = ("ractive", "~0.5.5");
const CHAI: (&str, &str) = ("chai", "^1.9.1");
const MOCHA: (&str, &str) = ("mocha", "^1.21.4");

/// Entry file redirect for a bower package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MainOverride {
    pub main: String,
}

/// The `bower.json` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BowerManifest {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub dependencies: Dependencies,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overrides: Option<IndexMap<String, MainOverride>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dev_dependencies: Option<Dependencies>,
}

impl BowerManifest {
    /// Assemble the manifest from the derived configuration.
    pub fn from_config(config: &DerivedConfig) -> Self {
        let mut dependencies = Dependencies::new();

        dependencies.add_if(config.include_jquery, JQUERY.0, JQUERY.1);
        dependencies.add_if(config.include_modernizr, MODERNIZR.0, MODERNIZR.1);

        let normalize = if config.include_sass {
            NORMALIZE_SCSS
        } else {
            NORMALIZE_CSS
        };
        dependencies.add_if(config.include_normalize, normalize, NORMALIZE_VERSION);

        let overrides = config.router.map(|router| {
            let spec = router.spec();
            dependencies.add(spec.package, spec.version);

            let mut overrides = IndexMap::new();
            overrides.insert(
                spec.package.to_string(),
                MainOverride {
                    main: spec.main.to_string(),
                },
            );
            overrides
        });

        if config.load_method == LoadMethod::Amd {
            dependencies.add(REQUIREJS_RACTIVE.0, REQUIREJS_RACTIVE.1);
            dependencies.add(REQUIREJS.0, REQUIREJS.1);
        }

        // Browserify bundles ractive from npm instead
        dependencies.add_if(config.load_method != LoadMethod::Browserify, RACTIVE.0, RACTIVE.1);

        let dev_dependencies = (config.test_framework == TestFramework::Mocha).then(|| {
            let mut dev = Dependencies::new();
            dev.add(CHAI.0, CHAI.1);
            dev.add(MOCHA.0, MOCHA.1);
            dev
        });

        Self {
            name: config.slug.clone(),
            version: MANIFEST_VERSION.to_string(),
            private: true,
            dependencies,
            overrides,
            dev_dependencies,
        }
    }

    /// Version range recorded for `package`, if it is a dependency.
    pub fn dependency(&self, package: &str) -> Option<&str> {
        self.dependencies.get(package)
    }

    /// Entry file override recorded for `package`.
    pub fn main_override(&self, package: &str) -> Option<&str> {
        self.overrides
            .as_ref()?
            .get(package)
            .map(|o| o.main.as_str())
    }

    /// The manifest as a JSON document, keys in `bower.json` order.
    pub fn to_json(&self) -> Value {
        let mut document = Map::new();
        document.insert("name".into(), Value::from(self.name.as_str()));
        document.insert("version".into(), Value::from(self.version.as_str()));
        document.insert("private".into(), Value::Bool(self.private));
        document.insert("dependencies".into(), self.dependencies.to_json());
        if let Some(overrides) = &self.overrides {
            let overrides = overrides
                .iter()
                .map(|(package, o)| (package.clone(), json!({ "main": o.main.as_str() })))
                .collect();
            document.insert("overrides".into(), Value::Object(overrides));
        }
        if let Some(dev) = &self.dev_dependencies {
            document.insert("devDependencies".into(), dev.to_json());
        }
        Value::Object(document)
    }
}

impl GeneratedFile for BowerManifest {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("bower.json")
    }

    fn render(&self) -> String {
        pretty_json(&self.to_json())
    }
}
