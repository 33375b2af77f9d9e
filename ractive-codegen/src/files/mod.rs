//! Project file generators.
//!
//! Each type renders one file of a scaffolded project from the
//! [`DerivedConfig`](ractive_gen_config::DerivedConfig).

mod app_scripts;
mod dotfiles;
mod gruntfile;
mod index_html;
mod package_json;
mod styles;
pub(crate) mod test_files;

pub use crate::generation::BowerManifest;
pub use app_scripts::{AppJs, MainJs};
pub use dotfiles::{BowerRc, EditorConfig, GitAttributes, GitIgnore, JsHintRc};
pub use gruntfile::Gruntfile;
pub use index_html::IndexHtml;
pub use package_json::PackageJson;
pub use styles::{Stylesheet, StylesheetKind};
pub use test_files::{AppTest, SpecMain, SpecRunner};

/// Quote `s` as a single-quoted JavaScript string literal.
pub(crate) fn js_string(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for c in s.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(c),
        }
    }
    quoted.push('\'');
    quoted
}

/// Escape text for use in HTML content or attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// AMD module path for a bower package's entry file.
pub(crate) fn amd_path(prefix: &str, package: &str, main: &str) -> String {
    let main = main.strip_suffix(".js").unwrap_or(main);
    format!("{}/bower_components/{}/{}", prefix, package, main)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_js_string() {
        assert_eq!(js_string("foo"), "'foo'");
        assert_eq!(js_string("it's"), r"'it\'s'");
        assert_eq!(js_string(r"a\b"), r"'a\\b'");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & <Jerry>"), "Tom &amp; &lt;Jerry&gt;");
    }

    #[test]
    fn test_amd_path() {
        assert_eq!(
            amd_path("..", "director", "build/director.js"),
            "../bower_components/director/build/director"
        );
        assert_eq!(amd_path("..", "page", "index.js"), "../bower_components/page/index");
    }
}
