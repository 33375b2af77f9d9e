//! Editor, VCS and linter configuration files.

use std::path::PathBuf;

use ractive_gen_config::{DerivedConfig, LoadMethod};
use ractive_gen_core::GeneratedFile;
use serde_json::{Map, Value, json};

use crate::generation::pretty_json;

const EDITORCONFIG: &str = "\
# editorconfig.org
root = true

[*]
indent_style = space
indent_size = 2
end_of_line = lf
charset = utf-8
trim_trailing_whitespace = true
insert_final_newline = true

[*.md]
trim_trailing_whitespace = false
";

const GITIGNORE: &str = "\
node_modules
dist
.tmp
.sass-cache
app/bower_components
test/bower_components
";

/// `.editorconfig`
pub struct EditorConfig;

impl GeneratedFile for EditorConfig {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(".editorconfig")
    }

    fn render(&self) -> String {
        EDITORCONFIG.to_string()
    }
}

/// `.gitignore`
pub struct GitIgnore<'a> {
    config: &'a DerivedConfig,
}

impl<'a> GitIgnore<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self { config }
    }
}

impl GeneratedFile for GitIgnore<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(".gitignore")
    }

    fn render(&self) -> String {
        let mut content = GITIGNORE.to_string();
        if self.config.is_browserify() {
            content.push_str("app/scripts/bundle.js\n");
        }
        content
    }
}

/// `.gitattributes`
pub struct GitAttributes;

impl GeneratedFile for GitAttributes {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(".gitattributes")
    }

    fn render(&self) -> String {
        "* text=auto\n".to_string()
    }
}

/// `.bowerrc`, installing bower packages under `app/` where the page loads them.
pub struct BowerRc;

impl GeneratedFile for BowerRc {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(".bowerrc")
    }

    fn render(&self) -> String {
        pretty_json(&json!({ "directory": "app/bower_components" }))
    }
}

/// `.jshintrc` with globals matching the load method and test framework.
pub struct JsHintRc<'a> {
    config: &'a DerivedConfig,
}

impl<'a> JsHintRc<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self { config }
    }

    fn globals(&self) -> Map<String, Value> {
        let config = self.config;
        let mut names: Vec<&str> = match config.load_method {
            LoadMethod::ScriptTags => vec!["Ractive", config.namespace.as_str()],
            LoadMethod::Amd => vec!["define", "require"],
            LoadMethod::Browserify => vec!["require", "module"],
        };
        names.extend(["describe", "it", "expect"]);
        if config.is_script_tags() && config.include_jquery {
            names.push("$");
        }

        names
            .into_iter()
            .filter(|name| !name.is_empty())
            .map(|name| (name.to_string(), Value::Bool(false)))
            .collect()
    }
}

impl GeneratedFile for JsHintRc<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from(".jshintrc")
    }

    fn render(&self) -> String {
        let doc = json!({
            "node": self.config.is_browserify(),
            "browser": true,
            "esnext": true,
            "bitwise": true,
            "camelcase": true,
            "curly": true,
            "eqeqeq": true,
            "immed": true,
            "indent": 2,
            "latedef": true,
            "newcap": true,
            "noarg": true,
            "quotmark": "single",
            "undef": true,
            "unused": true,
            "strict": true,
            "trailing": true,
            "smarttabs": true,
            "globals": self.globals(),
        });
        pretty_json(&doc)
    }
}
