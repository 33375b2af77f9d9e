//! npm `package.json` carrying the Grunt build toolchain.

use std::path::PathBuf;

use ractive_gen_config::DerivedConfig;
use ractive_gen_core::GeneratedFile;
use serde::Serialize;
use serde_json::{Map, Value, json};

use crate::generation::{Dependencies, pretty_json};

const GRUNT: [(&str, &str); 9] = [
    ("grunt", "~0.4.5"),
    ("grunt-contrib-clean", "~0.5.0"),
    ("grunt-contrib-concat", "~0.4.0"),
    ("grunt-contrib-connect", "~0.8.0"),
    ("grunt-contrib-copy", "~0.5.0"),
    ("grunt-contrib-jshint", "~0.10.0"),
    ("grunt-contrib-uglify", "~0.5.0"),
    ("grunt-contrib-watch", "~0.6.1"),
    ("load-grunt-tasks", "~0.6.0"),
];

/// The `package.json` manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    pub name: String,
    pub version: String,
    pub private: bool,
    #[serde(skip_serializing_if = "Dependencies::is_empty")]
    pub dependencies: Dependencies,
    pub dev_dependencies: Dependencies,
    pub engines: Engines,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Engines {
    pub node: String,
}

impl PackageJson {
    pub fn from_config(config: &DerivedConfig) -> Self {
        let mut dependencies = Dependencies::new();
        dependencies.add_if(config.is_browserify(), "ractive", "~0.5.5");

        let mut dev = Dependencies::new();
        for (name, version) in GRUNT {
            dev.add(name, version);
        }
        dev.add_if(config.use_native_sass, "grunt-sass", "~0.14.0");
        dev.add_if(config.use_source_compiler, "grunt-contrib-sass", "~0.7.3");
        dev.add_if(!config.include_sass, "grunt-contrib-cssmin", "~0.10.0");
        if config.is_mocha() {
            dev.add("grunt-mocha", "~0.4.11");
        } else {
            dev.add("grunt-contrib-jasmine", "~0.7.0");
        }
        dev.add_if(config.is_amd(), "grunt-contrib-requirejs", "~0.4.4");
        dev.add_if(config.is_browserify(), "grunt-browserify", "~2.1.4");
        dev.add_if(config.is_browserify(), "ractify", "~0.3.0");
        dev.add_if(config.include_modernizr, "grunt-modernizr", "~0.5.2");

        Self {
            name: config.slug.clone(),
            version: "0.0.0".to_string(),
            private: true,
            dependencies,
            dev_dependencies: dev,
            engines: Engines {
                node: ">=0.10.0".to_string(),
            },
        }
    }

    /// The manifest as a JSON document, keys in `package.json` order.
    pub fn to_json(&self) -> Value {
        let mut document = Map::new();
        document.insert("name".into(), Value::from(self.name.as_str()));
        document.insert("version".into(), Value::from(self.version.as_str()));
        document.insert("private".into(), Value::Bool(self.private));
        if !self.dependencies.is_empty() {
            document.insert("dependencies".into(), self.dependencies.to_json());
        }
        document.insert("devDependencies".into(), self.dev_dependencies.to_json());
        document.insert("engines".into(), json!({ "node": self.engines.node.as_str() }));
        Value::Object(document)
    }
}

impl GeneratedFile for PackageJson {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("package.json")
    }

    fn render(&self) -> String {
        pretty_json(&self.to_json())
    }
}
