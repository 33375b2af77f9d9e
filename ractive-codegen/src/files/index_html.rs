//! app/index.html generator.

use std::path::PathBuf;

use ractive_gen_config::{DerivedConfig, LoadMethod};
use ractive_gen_core::GeneratedFile;

use super::escape_html;
use crate::builder::CodeBuilder;

const ANALYTICS: &str = r#"<script>
  (function(i,s,o,g,r,a,m){i['GoogleAnalyticsObject']=r;i[r]=i[r]||function(){
  (i[r].q=i[r].q||[]).push(arguments)},i[r].l=1*new Date();a=s.createElement(o),
  m=s.getElementsByTagName(o)[0];a.async=1;a.src=g;m.parentNode.insertBefore(a,m)
  })(window,document,'script','//www.google-analytics.com/analytics.js','ga');

  ga('create', 'UA-XXXXX-X');
  ga('send', 'pageview');
</script>"#;

/// The application page.
pub struct IndexHtml<'a> {
    config: &'a DerivedConfig,
    analytics: bool,
}

impl<'a> IndexHtml<'a> {
    pub fn new(config: &'a DerivedConfig) -> Self {
        Self {
            config,
            analytics: true,
        }
    }

    /// Include the Google Analytics snippet.
    pub fn with_analytics(mut self, analytics: bool) -> Self {
        self.analytics = analytics;
        self
    }

    fn scripts(&self, b: CodeBuilder) -> CodeBuilder {
        let config = self.config;
        match config.load_method {
            LoadMethod::ScriptTags => b
                .when(config.include_jquery, |b| {
                    b.line(r#"<script src="bower_components/jQuery/dist/jquery.js"></script>"#)
                })
                .line(r#"<script src="bower_components/ractive/ractive.js"></script>"#)
                .when_some(config.router, |b, router| {
                    let spec = router.spec();
                    b.line(&format!(
                        r#"<script src="bower_components/{}/{}"></script>"#,
                        spec.package, spec.main
                    ))
                })
                .line(r#"<script src="scripts/app.js"></script>"#),
            LoadMethod::Amd => b.line(
                r#"<script data-main="scripts/main" src="bower_components/requirejs/require.js"></script>"#,
            ),
            LoadMethod::Browserify => b.line(r#"<script src="scripts/bundle.js"></script>"#),
        }
    }
}

impl GeneratedFile for IndexHtml<'_> {
    fn relative_path(&self) -> PathBuf {
        PathBuf::from("app").join("index.html")
    }

    fn render(&self) -> String {
        let config = self.config;
        let plain_normalize = config.include_normalize && !config.include_sass;

        let head = CodeBuilder::javascript()
            .line("<!doctype html>")
            .line(r#"<html class="no-js">"#)
            .indent()
            .line("<head>")
            .indent()
            .line(r#"<meta charset="utf-8">"#)
            .line(&format!("<title>{}</title>", escape_html(&config.project)))
            .line(r#"<meta name="viewport" content="width=device-width">"#)
            .when(plain_normalize, |b| {
                b.line(r#"<link rel="stylesheet" href="bower_components/normalize-css/normalize.css">"#)
            })
            .line(r#"<link rel="stylesheet" href="styles/app.css">"#)
            .when(config.include_modernizr, |b| {
                b.line(r#"<script src="bower_components/modernizr/modernizr.js"></script>"#)
            })
            .dedent()
            .line("</head>");

        let body = head
            .line("<body>")
            .indent()
            .line(r#"<div id="app"></div>"#)
            .blank();

        self.scripts(body)
            .when(self.analytics, |b| b.blank().lines(ANALYTICS))
            .dedent()
            .line("</body>")
            .dedent()
            .line("</html>")
            .build()
    }
}
