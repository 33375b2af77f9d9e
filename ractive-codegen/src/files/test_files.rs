//! Test scaffold generators.

use std::path::PathBuf;

use ractive_gen_config::{DerivedConfig, LoadMethod, TestFramework};
use ractive_gen_core::GeneratedFile;

use super::app_scripts::{render_paths, require_paths};
use super::{escape_html, js_string};
use crate::builder::CodeBuilder;

/// `describe`/`it` block asserting the framework's trivial expectation.
pub(crate) fn smoke_test(b: CodeBuilder, framework: TestFramework, subject: &str) -> CodeBuilder {
    b.block_with_close(&format!("describe({}, function () {{", js_string(subject)), "});", |b| {
        b.block_with_close(
            &format!("it({}, function () {{", js_string(framework.assert_string())),
            "});",
            |b| b.line(framework.expectation()),
        )
    })
}

/// `test/spec_runner.html`, the browser runner for Mocha.
pub struct SpecRunner<'a> {
    config: &'a DerivedConfig,
}

impl<'a> SpecRunner<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self { config }
    }
}

impl GeneratedFile for SpecRunner<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("test").join("spec_runner.html")
    }

    fn render(&self) -> String {
        let config = self.config;
        let bower = "../app/bower_components";

        CodeBuilder::javascript()
            .line("<!doctype html>")
            .line("<html>")
            .indent()
            .line("<head>")
            .indent()
            .line(r#"<meta charset="utf-8">"#)
            .line(&format!("<title>{} tests</title>", escape_html(&config.project)))
            .line(&format!(r#"<link rel="stylesheet" href="{bower}/mocha/mocha.css">"#))
            .dedent()
            .line("</head>")
            .line("<body>")
            .indent()
            .line(r#"<div id="mocha"></div>"#)
            .line(&format!(r#"<script src="{bower}/mocha/mocha.js"></script>"#))
            .line(&format!(r#"<script src="{bower}/chai/chai.js"></script>"#))
            .line("<script>mocha.setup('bdd'); var expect = chai.expect;</script>")
            .apply(|b| match config.load_method {
                LoadMethod::ScriptTags => b
                    .line(&format!(r#"<script src="{bower}/ractive/ractive.js"></script>"#))
                    .line(r#"<script src="../app/scripts/app.js"></script>"#)
                    .line(r#"<script src="app_test.js"></script>"#)
                    .line("<script>mocha.run();</script>"),
                LoadMethod::Amd => b.line(&format!(
                    r#"<script data-main="spec_main" src="{bower}/requirejs/require.js"></script>"#
                )),
                LoadMethod::Browserify => b
                    .line(r#"<script src="bundle_test.js"></script>"#)
                    .line("<script>mocha.run();</script>"),
            })
            .dedent()
            .line("</body>")
            .dedent()
            .line("</html>")
            .build()
    }
}

/// `test/app_test.js`, shaped for the load method.
pub struct AppTest<'a> {
    config: &'a DerivedConfig,
}

impl<'a> AppTest<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self { config }
    }
}

impl GeneratedFile for AppTest<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("test").join("app_test.js")
    }

    fn render(&self) -> String {
        let config = self.config;
        let subject = config.project.as_str();
        let framework = config.test_framework;

        let code = match config.load_method {
            LoadMethod::ScriptTags => CodeBuilder::javascript()
                .line("'use strict';")
                .blank()
                .apply(|b| smoke_test(b, framework, subject)),
            LoadMethod::Amd => CodeBuilder::javascript().block_with_close(
                "define(['app'], function (app) {",
                "});",
                |b| b.line("'use strict';").blank().apply(|b| smoke_test(b, framework, subject)),
            ),
            LoadMethod::Browserify => CodeBuilder::javascript()
                .line("'use strict';")
                .blank()
                .line("var app = require('../app/scripts/app');")
                .blank()
                .apply(|b| smoke_test(b, framework, subject)),
        };
        code.build()
    }
}

/// `test/spec_main.js`, the Require.js bootstrap for AMD test runs.
pub struct SpecMain<'a> {
    config: &'a DerivedConfig,
}

impl<'a> SpecMain<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self { config }
    }
}

impl GeneratedFile for SpecMain<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("test").join("spec_main.js")
    }

    fn render(&self) -> String {
        let config = self.config;
        let paths = require_paths(config, "..");
        let run = if config.is_mocha() {
            "mocha.run();"
        } else {
            "jasmine.getEnv().execute();"
        };

        CodeBuilder::javascript()
            .block_with_close("require.config({", "});", |b| {
                b.line("baseUrl: '../app/scripts',")
                    .block_with_close("paths: {", "}", |b| render_paths(b, &paths))
            })
            .blank()
            .block_with_close("require(['../../test/app_test'], function () {", "});", |b| {
                b.line("'use strict';").blank().line(run)
            })
            .build()
    }
}
