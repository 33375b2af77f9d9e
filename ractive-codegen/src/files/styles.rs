//! Stylesheets: a Sass tree when Sass is selected, plain CSS otherwise.

use std::path::PathBuf;

use ractive_gen_config::DerivedConfig;
use ractive_gen_core::GeneratedFile;

use crate::builder::CodeBuilder;

/// Which stylesheet to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StylesheetKind {
    /// `app.css`, used without Sass.
    Css,
    /// `app.scss`, the Sass entry point.
    Main,
    Defaults,
    Vendor,
    Layout,
}

impl StylesheetKind {
    pub const SASS: [StylesheetKind; 4] = [Self::Main, Self::Defaults, Self::Vendor, Self::Layout];

    pub fn file_name(self) -> &'static str {
        match self {
            Self::Css => "app.css",
            Self::Main => "app.scss",
            Self::Defaults => "_defaults.scss",
            Self::Vendor => "_vendor.scss",
            Self::Layout => "_layout.scss",
        }
    }
}

/// One file under `app/styles/`.
pub struct Stylesheet<'a> {
    kind: StylesheetKind,
    config: &'a DerivedConfig,
}

impl<'a> Stylesheet<'a> {
    pub fn new(kind: StylesheetKind, config: &'a DerivedConfig) -> Self {
        Self { kind, config }
    }

    /// The stylesheets a project with `config` gets.
    pub fn for_config(config: &'a DerivedConfig) -> Vec<Self> {
        if config.include_sass {
            StylesheetKind::SASS
                .into_iter()
                .map(|kind| Self::new(kind, config))
                .collect()
        } else {
            vec![Self::new(StylesheetKind::Css, config)]
        }
    }
}

fn layout_rules(b: CodeBuilder) -> CodeBuilder {
    b.block_with_close("#app {", "}", |b| {
        b.line("max-width: 960px;").line("margin: 0 auto;")
    })
}

impl GeneratedFile for Stylesheet<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("app").join("styles").join(self.kind.file_name())
    }

    fn render(&self) -> String {
        let b = CodeBuilder::javascript();
        let code = match self.kind {
            StylesheetKind::Css => b
                .block_with_close("body {", "}", |b| {
                    b.line("font-family: 'Helvetica Neue', Helvetica, Arial, sans-serif;")
                        .line("color: #333;")
                })
                .blank()
                .apply(layout_rules),
            StylesheetKind::Main => b
                .line("@import 'defaults';")
                .line("@import 'vendor';")
                .line("@import 'layout';"),
            StylesheetKind::Defaults => b
                .line("$font-stack: 'Helvetica Neue', Helvetica, Arial, sans-serif;")
                .line("$text-color: #333;"),
            StylesheetKind::Vendor => b
                .when(self.config.include_normalize, |b| {
                    b.line("@import '../bower_components/normalize-scss/normalize';")
                })
                .when(!self.config.include_normalize, |b| {
                    b.comment("Third-party styles")
                }),
            StylesheetKind::Layout => b
                .block_with_close("body {", "}", |b| {
                    b.line("font-family: $font-stack;").line("color: $text-color;")
                })
                .blank()
                .apply(layout_rules),
        };
        code.build()
    }
}
