//! Project settings persisted in `.yo-rc.json`.
//!
//! The project generator writes the settings once; the component generator
//! reads them back before it runs.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{DerivedConfig, Error, LoadMethod, Result, TestFramework};

/// File name of the settings store, relative to the project root.
pub const SETTINGS_FILE: &str = ".yo-rc.json";

/// Top-level key our settings live under.
pub const SETTINGS_KEY: &str = "generator-ractive";

/// Settings shared between the project and component generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSettings {
    pub load_method: LoadMethod,
    /// Global namespace object, only recorded for script-tag projects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_space: Option<String>,
    pub test_framework: TestFramework,
}

impl PersistedSettings {
    /// Settings recorded for a freshly generated project.
    pub fn from_config(config: &DerivedConfig) -> Self {
        Self {
            load_method: config.load_method,
            name_space: config
                .is_script_tags()
                .then(|| config.namespace.clone()),
            test_framework: config.test_framework,
        }
    }

    /// Path of the settings file for the project at `dir`.
    pub fn path(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILE)
    }

    /// Load the settings of the project at `dir`.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = Self::path(dir);
        if !path.exists() {
            return Err(Box::new(Error::MissingSettings { path }));
        }

        let document = read_document(&path)?;
        let section = document
            .get(SETTINGS_KEY)
            .and_then(Value::as_object)
            .ok_or_else(|| Error::MissingSetting {
                path: path.clone(),
                key: SETTINGS_KEY,
            })?;

        let load_method = section
            .get("loadMethod")
            .and_then(Value::as_str)
            .ok_or_else(|| Error::MissingSetting {
                path: path.clone(),
                key: "loadMethod",
            })?;
        let load_method = LoadMethod::from_token(load_method)?;

        let test_framework = match section.get("testFramework").and_then(Value::as_str) {
            Some(value) => TestFramework::from_token(value)?,
            None => {
                tracing::warn!(path = %path.display(), "no testFramework recorded, assuming mocha");
                TestFramework::default()
            }
        };

        let name_space = section
            .get("nameSpace")
            .and_then(Value::as_str)
            .map(str::to_string);

        Ok(Self {
            load_method,
            name_space,
            test_framework,
        })
    }

    /// Write the settings of the project at `dir`.
    ///
    /// Keys owned by other generators in an existing file are kept.
    pub fn save(&self, dir: &Path) -> Result<()> {
        let path = Self::path(dir);
        let mut document = if path.exists() {
            read_document(&path)?
        } else {
            Map::new()
        };

        let section = document
            .entry(SETTINGS_KEY)
            .or_insert_with(|| Value::Object(Map::new()));
        if !section.is_object() {
            *section = Value::Object(Map::new());
        }
        if let (Value::Object(section), Value::Object(values)) = (section, self.to_value()) {
            if self.name_space.is_none() {
                section.remove("nameSpace");
            }
            section.extend(values);
        }

        let content = serde_json::to_string_pretty(&Value::Object(document)).map_err(|source| {
            Error::SettingsParse {
                path: path.clone(),
                source,
            }
        })?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&path, content + "\n").map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), load_method = %self.load_method, "saved settings");
        Ok(())
    }

    fn to_value(&self) -> Value {
        let mut values = Map::new();
        values.insert("loadMethod".into(), self.load_method.as_str().into());
        if let Some(name_space) = &self.name_space {
            values.insert("nameSpace".into(), name_space.as_str().into());
        }
        values.insert("testFramework".into(), self.test_framework.as_str().into());
        Value::Object(values)
    }
}

fn read_document(path: &Path) -> Result<Map<String, Value>> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| {
        Box::new(Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })
    })
}
