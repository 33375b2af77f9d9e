//! Application script generators, one shape per load method.

use std::path::PathBuf;

use ractive_gen_config::{DerivedConfig, LoadMethod};
use ractive_gen_core::GeneratedFile;

use super::{amd_path, js_string};
use crate::builder::CodeBuilder;

const GREETING_TEMPLATE: &str = "'<h1>Hello from {{name}}!</h1>'";

/// `app/scripts/app.js`, rendered for the configured load method.
pub struct AppJs<'a> {
    config: &'a DerivedConfig,
}

impl<'a> AppJs<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self { config }
    }

    fn ractive_options(&self, b: CodeBuilder) -> CodeBuilder {
        b.line("el: '#app',")
            .line(&format!("template: {},", GREETING_TEMPLATE))
            .block_with_close("data: {", "}", |b| {
                b.line(&format!("name: {}", js_string(&self.config.project)))
            })
    }

    fn script_tags(&self) -> String {
        let ns = &self.config.namespace;
        CodeBuilder::javascript()
            .line("/* global Ractive */")
            .block_with_close("(function (window) {", "}(window));", |b| {
                b.line("'use strict';")
                    .blank()
                    .line(&format!("var {ns} = window.{ns} = window.{ns} || {{}};"))
                    .blank()
                    .block_with_close(&format!("{ns}.app = new Ractive({{"), "});", |b| {
                        self.ractive_options(b)
                    })
            })
            .build()
    }

    fn amd(&self) -> String {
        CodeBuilder::javascript()
            .block_with_close("define(['ractive'], function (Ractive) {", "});", |b| {
                b.line("'use strict';")
                    .blank()
                    .block_with_close("return {", "};", |b| {
                        b.block_with_close("init: function () {", "}", |b| {
                            b.block_with_close("return new Ractive({", "});", |b| {
                                self.ractive_options(b)
                            })
                        })
                    })
            })
            .build()
    }

    fn browserify(&self) -> String {
        CodeBuilder::javascript()
            .line("'use strict';")
            .blank()
            .line("var Ractive = require('ractive');")
            .blank()
            .block_with_close("module.exports = new Ractive({", "});", |b| {
                self.ractive_options(b)
            })
            .build()
    }
}

impl GeneratedFile for AppJs<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("app").join("scripts").join("app.js")
    }

    fn render(&self) -> String {
        match self.config.load_method {
            LoadMethod::ScriptTags => self.script_tags(),
            LoadMethod::Amd => self.amd(),
            LoadMethod::Browserify => self.browserify(),
        }
    }
}

/// `app/scripts/main.js`, the Require.js bootstrap for AMD projects.
pub struct MainJs<'a> {
    config: &'a DerivedConfig,
}

impl<'a> MainJs<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self { config }
    }
}

/// Require.js `paths` entries shared by the app bootstrap and the test runner.
pub(crate) fn require_paths(config: &DerivedConfig, prefix: &str) -> Vec<(&'static str, String)> {
    let mut paths = vec![
        ("ractive", format!("{}/bower_components/ractive/ractive", prefix)),
        ("rv", format!("{}/bower_components/requirejs-ractive/rv", prefix)),
    ];
    if config.include_jquery {
        paths.push(("jquery", format!("{}/bower_components/jQuery/dist/jquery", prefix)));
    }
    if let Some(router) = config.router {
        let spec = router.spec();
        paths.push(("router", amd_path(prefix, spec.package, spec.main)));
    }
    paths
}

pub(crate) fn render_paths(b: CodeBuilder, paths: &[(&'static str, String)]) -> CodeBuilder {
    let last = paths.len().saturating_sub(1);
    b.each(paths.iter().enumerate(), |b, (i, (name, path))| {
        let sep = if i == last { "" } else { "," };
        b.line(&format!("{}: {}{}", name, js_string(path), sep))
    })
}

impl GeneratedFile for MainJs<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("app").join("scripts").join("main.js")
    }

    fn render(&self) -> String {
        let paths = require_paths(self.config, "..");

        CodeBuilder::javascript()
            .block_with_close("require.config({", "});", |b| {
                b.block_with_close("paths: {", "}", |b| render_paths(b, &paths))
            })
            .blank()
            .block_with_close("require(['app'], function (app) {", "});", |b| {
                b.line("'use strict';").blank().line("app.init();")
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use ractive_gen_config::{Answers, Feature, Router, TestFramework};

    use super::*;

    fn config(answers: Answers) -> DerivedConfig {
        DerivedConfig::resolve(&answers, TestFramework::Mocha).unwrap()
    }

    #[test]
    fn test_script_tags_uses_namespace() {
        let config = config(Answers::new("todo list"));
        let js = AppJs::new(&config).render();

        assert!(js.contains("var TodoList = window.TodoList = window.TodoList || {};"));
        assert!(js.contains("TodoList.app = new Ractive({"));
        assert!(js.contains("name: 'todo list'"));
    }

    #[test]
    fn test_amd_defines_module() {
        let config = config(Answers::new("foo").with_load_method(LoadMethod::Amd));
        let js = AppJs::new(&config).render();

        assert!(js.starts_with("define(['ractive'], function (Ractive) {\n"));
        assert!(js.contains("    init: function () {\n"));
        assert!(js.ends_with("});\n"));
    }

    #[test]
    fn test_browserify_requires_ractive() {
        let config = config(Answers::new("foo").with_load_method(LoadMethod::Browserify));
        let js = AppJs::new(&config).render();

        assert!(js.contains("var Ractive = require('ractive');"));
        assert!(js.contains("module.exports = new Ractive({"));
    }

    #[test]
    fn test_main_js_paths() {
        let config = config(
            Answers::new("foo")
                .with_load_method(LoadMethod::Amd)
                .with_features([Feature::Jquery])
                .with_router(Router::Director),
        );
        let js = MainJs::new(&config).render();

        assert!(js.contains("ractive: '../bower_components/ractive/ractive',"));
        assert!(js.contains("jquery: '../bower_components/jQuery/dist/jquery',"));
        assert!(js.contains("router: '../bower_components/director/build/director'\n"));
        assert!(js.contains("app.init();"));
    }

    #[test]
    fn test_main_js_last_path_has_no_comma() {
        let config = config(Answers::new("foo").with_load_method(LoadMethod::Amd));
        let js = MainJs::new(&config).render();

        assert!(js.contains("rv: '../bower_components/requirejs-ractive/rv'\n"));
    }
}
