//! Errors raised while loading `blog.toml`.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file `{}`", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed blog.toml")]
    Parse(#[from] toml::de::Error),

    // Displayed in full; a source() would repeat every diagnostic.
    #[error("{0}")]
    Invalid(ConfigDiagnostics),
}

/// How a diagnostic affects loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Loading fails.
    Error,
    /// Logged, loading continues.
    Warning,
}

/// One problem found in a config field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub severity: Severity,
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field.as_str().cyan().bold(), self.message)?;
        if let Some(hint) = &self.hint {
            write!(f, "\n    {} {hint}", "help:".yellow())?;
        }
        Ok(())
    }
}

/// Problems gathered across every section, reported together.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    warnings: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(
        &mut self,
        severity: Severity,
        field: FieldPath,
        message: String,
        hint: Option<String>,
    ) {
        let diagnostic = ConfigDiagnostic {
            severity,
            field,
            message,
            hint,
        };
        match severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Error, field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(Severity::Error, field, message.into(), Some(hint.into()));
    }

    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(Severity::Warning, field, message.into(), None);
    }

    /// Log warnings through the `warning` prefix.
    pub fn print_warnings(&self) {
        for warning in &self.warnings {
            crate::log!("warning"; "{}: {}", warning.field.as_str(), warning.message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of errors; warnings are not counted.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[ConfigDiagnostic] {
        &self.warnings
    }

    /// `Err(self)` when at least one error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.has_errors() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.errors.len();
        let noun = if count == 1 { "problem" } else { "problems" };
        write!(f, "{}", format_args!("{count} {noun} in blog.toml").red().bold())?;
        for error in &self.errors {
            write!(f, "\n  {} {error}", "-".dimmed())?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_read_error_names_path() {
        let err = ConfigError::Read {
            path: PathBuf::from("blog.toml"),
            source: Error::new(ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(err.to_string(), "cannot read config file `blog.toml`");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_warnings_do_not_fail() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("site.page_ids"), "no site identifiers");
        assert!(!diag.has_errors());
        assert_eq!(diag.warnings()[0].severity, Severity::Warning);
        assert!(diag.into_result().is_ok());
    }

    #[test]
    fn test_errors_keep_hint() {
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FieldPath::new("site.lang"), "must not be empty", "set \"en\"");
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.errors()[0].field.as_str(), "site.lang");
        assert_eq!(err.errors()[0].hint.as_deref(), Some("set \"en\""));
    }

    #[test]
    fn test_display_lists_every_error() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("locale.delimiter"), "must not be empty");
        diag.error(FieldPath::new("routes.feed"), "must start with `/`");
        let text = diag.to_string();
        assert!(text.contains("2 problems"));
        assert!(text.contains("locale.delimiter"));
        assert!(text.contains("must start with `/`"));
    }
}
