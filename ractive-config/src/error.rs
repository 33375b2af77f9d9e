use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for configuration operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting on answers files.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, pointing at `key` when it appears in the source.
    pub fn validation_error(&self, message: impl Into<String>, key: &str) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: self.find_key(key),
            message: message.into(),
        })
    }

    fn find_key(&self, key: &str) -> Option<SourceSpan> {
        self.src
            .lines()
            .scan(0usize, |offset, line| {
                let start = *offset;
                *offset += line.len() + 1;
                Some((start, line))
            })
            .find_map(|(start, line)| {
                let trimmed = line.trim_start();
                let rest = trimmed.strip_prefix(key)?;
                if !rest.trim_start().starts_with('=') {
                    return None;
                }
                let indent = line.len() - trimmed.len();
                Some(SourceSpan::from((start + indent, key.len())))
            })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(ractive::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(ractive::io))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse answers file")]
    #[diagnostic(code(ractive::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("{message}")]
    #[diagnostic(code(ractive::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("{what} name must not be empty")]
    #[diagnostic(code(ractive::empty_name))]
    EmptyName { what: &'static str },

    #[error("{what} name '{name}' has no letters or digits")]
    #[diagnostic(
        code(ractive::no_identifier),
        help("the name is used for the global namespace and the package name")
    )]
    NoIdentifier { what: &'static str, name: String },

    #[error("unknown {kind} '{value}'")]
    #[diagnostic(code(ractive::unknown_value), help("expected one of: {expected}"))]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("failed to parse settings file '{path}'")]
    #[diagnostic(code(ractive::settings))]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no settings found at '{path}'")]
    #[diagnostic(
        code(ractive::missing_settings),
        help("run 'ractive app' to scaffold a project before adding components")
    )]
    MissingSettings { path: PathBuf },

    #[error("settings file '{path}' has no '{key}' entry")]
    #[diagnostic(
        code(ractive::missing_settings),
        help("re-run 'ractive app' without --skip-yo-rc to record the project settings")
    )]
    MissingSetting { path: PathBuf, key: &'static str },
}

impl Error {
    pub(crate) fn unknown(kind: &'static str, value: &str, expected: &'static str) -> Self {
        Error::UnknownValue {
            kind,
            value: value.to_string(),
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_points_at_key() {
        let ctx = SourceContext::new("router = true\nproject = \"\"\n", "answers.toml");
        let err = ctx.validation_error("project name must not be empty", "project");

        match *err {
            Error::Validation { span, .. } => {
                let span = span.expect("span");
                assert_eq!(span.offset(), 14);
                assert_eq!(span.len(), "project".len());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validation_error_without_key() {
        let ctx = SourceContext::new("router = true\n", "answers.toml");
        let err = ctx.validation_error("missing project", "project");

        assert!(matches!(*err, Error::Validation { span: None, .. }));
    }

    #[test]
    fn test_unknown_value_message() {
        let err = Error::unknown("load method", "umd", "scriptTags, AMD, browserify");
        assert_eq!(err.to_string(), "unknown load method 'umd'");
    }
}
