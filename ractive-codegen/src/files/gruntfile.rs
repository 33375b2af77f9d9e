//! Gruntfile.js generator.

use std::path::PathBuf;

use ractive_gen_config::DerivedConfig;
use ractive_gen_core::GeneratedFile;

use crate::builder::CodeBuilder;

/// `Gruntfile.js`, with tasks for the selected styles, loader and test runner.
pub struct Gruntfile<'a> {
    config: &'a DerivedConfig,
}

impl<'a> Gruntfile<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self { config }
    }

    fn sass_task(&self, b: CodeBuilder) -> CodeBuilder {
        b.block_with_close("sass: {", "},", |b| {
            b.when(self.config.use_source_compiler, |b| {
                b.block_with_close("options: {", "},", |b| b.line("bundleExec: false"))
            })
            .block_with_close("dist: {", "}", |b| {
                b.block_with_close("files: {", "}", |b| {
                    b.line("'dist/styles/app.css': 'app/styles/app.scss'")
                })
            })
        })
    }

    fn script_task(&self, b: CodeBuilder) -> CodeBuilder {
        let config = self.config;
        if config.is_amd() {
            b.block_with_close("requirejs: {", "},", |b| {
                b.block_with_close("dist: {", "}", |b| {
                    b.block_with_close("options: {", "}", |b| {
                        b.line("baseUrl: 'app/scripts',")
                            .line("mainConfigFile: 'app/scripts/main.js',")
                            .line("name: 'main',")
                            .line("out: 'dist/scripts/main.js'")
                    })
                })
            })
        } else if config.is_browserify() {
            b.block_with_close("browserify: {", "},", |b| {
                b.block_with_close("dist: {", "}", |b| {
                    b.line("src: 'app/scripts/app.js',")
                        .line("dest: 'app/scripts/bundle.js',")
                        .block_with_close("options: {", "}", |b| b.line("transform: ['ractify']"))
                })
            })
        } else {
            b.block_with_close("uglify: {", "},", |b| {
                b.block_with_close("dist: {", "}", |b| {
                    b.block_with_close("files: {", "}", |b| {
                        b.line("'dist/scripts/app.js': ['app/scripts/**/*.js']")
                    })
                })
            })
        }
    }

    fn test_task(&self, b: CodeBuilder) -> CodeBuilder {
        if self.config.is_mocha() {
            b.block_with_close("mocha: {", "},", |b| {
                b.block_with_close("all: {", "}", |b| {
                    b.line("src: ['test/spec_runner.html'],")
                        .line("options: { run: true }")
                })
            })
        } else {
            b.block_with_close("jasmine: {", "},", |b| {
                b.block_with_close("all: {", "}", |b| {
                    b.line("src: 'app/scripts/**/*.js',")
                        .line("options: { specs: 'test/**/*_test.js' }")
                })
            })
        }
    }

    fn build_tasks(&self) -> Vec<&'static str> {
        let config = self.config;
        let mut tasks = vec!["clean", "jshint"];
        tasks.push(if config.include_sass { "sass" } else { "cssmin" });
        tasks.push(if config.is_amd() {
            "requirejs"
        } else if config.is_browserify() {
            "browserify"
        } else {
            "uglify"
        });
        if config.include_modernizr {
            tasks.push("modernizr");
        }
        tasks.push("copy");
        tasks
    }
}

fn task_list(tasks: &[&str]) -> String {
    tasks
        .iter()
        .map(|task| format!("'{}'", task))
        .collect::<Vec<_>>()
        .join(", ")
}

impl GeneratedFile for Gruntfile<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("Gruntfile.js")
    }

    fn render(&self) -> String {
        let config = self.config;
        let test_runner = if config.is_mocha() { "mocha" } else { "jasmine" };

        CodeBuilder::javascript()
            .line("'use strict';")
            .blank()
            .block_with_close("module.exports = function (grunt) {", "};", |b| {
                b.line("require('load-grunt-tasks')(grunt);")
                    .blank()
                    .block_with_close("grunt.initConfig({", "});", |b| {
                        b.line("clean: ['dist'],")
                            .block_with_close("jshint: {", "},", |b| {
                                b.line("options: { jshintrc: '.jshintrc' },")
                                    .line("all: ['Gruntfile.js', 'app/scripts/**/*.js', 'test/**/*.js']")
                            })
                            .when(config.include_sass, |b| self.sass_task(b))
                            .when(!config.include_sass, |b| {
                                b.block_with_close("cssmin: {", "},", |b| {
                                    b.line("dist: { files: { 'dist/styles/app.css': 'app/styles/app.css' } }")
                                })
                            })
                            .apply(|b| self.script_task(b))
                            .when(config.include_modernizr, |b| {
                                b.block_with_close("modernizr: {", "},", |b| {
                                    b.line("devFile: 'app/bower_components/modernizr/modernizr.js',")
                                        .line("outputFile: 'dist/scripts/modernizr.js'")
                                })
                            })
                            .apply(|b| self.test_task(b))
                            .block_with_close("connect: {", "},", |b| {
                                b.line("options: { port: 9000, hostname: 'localhost' },")
                                    .line("app: { options: { base: 'app', open: true } }")
                            })
                            .block_with_close("watch: {", "},", |b| {
                                b.line("files: ['app/**/*'],")
                                    .line("tasks: ['jshint']")
                            })
                            .block_with_close("copy: {", "}", |b| {
                                b.line("dist: { expand: true, cwd: 'app', src: ['index.html', 'bower_components/**/*'], dest: 'dist' }")
                            })
                    })
                    .blank()
                    .line(&format!("grunt.registerTask('test', ['jshint', '{}']);", test_runner))
                    .line(&format!(
                        "grunt.registerTask('build', [{}]);",
                        task_list(&self.build_tasks())
                    ))
                    .line("grunt.registerTask('serve', ['connect:app', 'watch']);")
                    .line("grunt.registerTask('default', ['test', 'build']);")
            })
            .build()
    }
}

#[cfg(test)]
mod tests {
    use ractive_gen_config::{Answers, Feature, LoadMethod, TestFramework};

    use super::*;

    fn render(answers: Answers, test_framework: TestFramework) -> String {
        let config = DerivedConfig::resolve(&answers, test_framework).unwrap();
        Gruntfile::new(&config).render()
    }

    #[test]
    fn test_default_tasks() {
        let js = render(Answers::new("foo"), TestFramework::Mocha);

        assert!(js.starts_with("'use strict';\n\nmodule.exports = function (grunt) {\n"));
        assert!(js.contains("\n    mocha: {\n"));
        assert!(js.contains("grunt.registerTask('test', ['jshint', 'mocha']);"));
        assert!(js.contains(
            "grunt.registerTask('build', ['clean', 'jshint', 'cssmin', 'uglify', 'copy']);"
        ));
        assert!(!js.contains("sass: {"));
    }

    #[test]
    fn test_amd_sass_jasmine() {
        let js = render(
            Answers::new("foo")
                .with_load_method(LoadMethod::Amd)
                .with_features([Feature::Sass, Feature::Modernizr]),
            TestFramework::Jasmine,
        );

        assert!(js.contains("requirejs: {"));
        assert!(js.contains("sass: {"));
        assert!(js.contains("bundleExec: false"));
        assert!(js.contains("jasmine: {"));
        assert!(js.contains(
            "grunt.registerTask('build', ['clean', 'jshint', 'sass', 'requirejs', 'modernizr', 'copy']);"
        ));
    }

    #[test]
    fn test_browserify_uses_ractify() {
        let js = render(
            Answers::new("foo").with_load_method(LoadMethod::Browserify),
            TestFramework::Mocha,
        );
        assert!(js.contains("transform: ['ractify']"));
        assert!(!js.contains("uglify: {"));
    }
}
