//! Unified Error Type System
//!
//! Centralized error types for the documentation pipeline.
//!
//! ## Error Categories
//!
//! - **IoFailure**: output tree uncreatable or unwritable, input root unreadable (fatal)
//! - **ConfigurationFailure**: invalid rules, missing event path, missing changelog anchor (fatal)
//! - **ParseDiagnostic**: grammar-level problems. Per-module ones only surface as a
//!   status string; a grammar that cannot be loaded at all aborts the run
//!
//! Structural extractors do not return errors at all. Malformed source degrades to
//! empty or placeholder output so one irregular file cannot halt the build.

use thiserror::Error;

// =============================================================================
// Error Categories
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// File-system level failure, aborts the run
    IoFailure,
    /// Invalid configuration or missing required anchor, aborts the run
    ConfigurationFailure,
    /// Per-module grammar diagnostic
    ParseDiagnostic,
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoFailure => write!(f, "IO_FAILURE"),
            Self::ConfigurationFailure => write!(f, "CONFIGURATION_FAILURE"),
            Self::ParseDiagnostic => write!(f, "PARSE_DIAGNOSTIC"),
        }
    }
}

impl ErrorCategory {
    /// What the operator should look at first
    pub fn hint(&self) -> &'static str {
        match self {
            Self::IoFailure => {
                "check that the source root is readable and the output directory writable"
            }
            Self::ConfigurationFailure => {
                "check luaudoc.toml, LUAUDOC_* variables and the changelog event settings"
            }
            Self::ParseDiagnostic => "check that the Luau grammar matches the tree-sitter version",
        }
    }
}

// =============================================================================
// Application Error
// =============================================================================

#[derive(Debug, Error)]
pub enum DocError {
    // -------------------------------------------------------------------------
    // System Errors (auto From impl)
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // -------------------------------------------------------------------------
    // Domain Errors
    // -------------------------------------------------------------------------
    #[error("Config error: {0}")]
    Config(String),

    #[error("Parse error in {path}: {message}")]
    Parse { message: String, path: String },

    #[error("Invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Changelog error: {0}")]
    Changelog(String),

    #[error("Section anchor '{anchor}' not found in {path}")]
    MissingAnchor { anchor: String, path: String },
}

pub type Result<T> = std::result::Result<T, DocError>;

impl DocError {
    /// Create a pattern error from any displayable cause
    pub fn pattern(pattern: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: cause.to_string(),
        }
    }

    /// Map this error onto the operator-facing taxonomy
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Io(_) | Self::Storage(_) => ErrorCategory::IoFailure,
            Self::Parse { .. } => ErrorCategory::ParseDiagnostic,
            Self::Json(_)
            | Self::Config(_)
            | Self::Pattern { .. }
            | Self::Changelog(_)
            | Self::MissingAnchor { .. } => ErrorCategory::ConfigurationFailure,
        }
    }
}

/// Context extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> Result<T>;

    /// Add context using a closure (lazy evaluation)
    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: std::error::Error + Send + Sync + 'static> ResultExt<T> for std::result::Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> Result<T> {
        self.map_err(|e| DocError::Storage(format!("{}: {}", context.into(), e)))
    }

    fn with_context_fn<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| DocError::Storage(format!("{}: {}", f().into(), e)))
    }
}

// =============================================================================
// Tests
// =============================================================================
