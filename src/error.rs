//! Unified error types for packmatch.
//!
//! The matching engine itself never fails: malformed versions, attributes and
//! patterns degrade to defaults. The types here cover the fallible edges around
//! it, such as configuration loading, vendor registry installation and strict
//! version validation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for packmatch operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PackMatchError {
    /// Errors while parsing user supplied input
    #[error("Failed to parse input: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors around the vendor registry
    #[error("Vendor registry error: {context}")]
    Vendor {
        context: String,
        #[source]
        source: VendorErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Invalid version '{version}': {reason}")]
    InvalidVersion { version: String, reason: String },

    #[error("Invalid attribute '{input}': expected key=value")]
    InvalidAttribute { input: String },

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Specific vendor registry error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum VendorErrorKind {
    #[error("the process-wide vendor registry is already initialized")]
    AlreadyInitialized,

    #[error("Invalid vendor id '{0}' (must be decimal digits)")]
    InvalidId(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for packmatch operations
pub type Result<T> = std::result::Result<T, PackMatchError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PackMatchError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for a version string
    pub fn invalid_version(version: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::parse(
            "version",
            ParseErrorKind::InvalidVersion {
                version: version.into(),
                reason: reason.into(),
            },
        )
    }

    /// Create a parse error for a `key=value` argument
    pub fn invalid_attribute(input: impl Into<String>) -> Self {
        Self::parse(
            "attribute",
            ParseErrorKind::InvalidAttribute {
                input: input.into(),
            },
        )
    }

    /// Create a vendor registry error
    pub fn vendor(context: impl Into<String>, source: VendorErrorKind) -> Self {
        Self::Vendor {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for PackMatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PackMatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for PackMatchError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Each call prepends its context to the existing one, so the final message
/// reads from the outermost caller inwards.
///
/// # Example
///
/// ```ignore
/// use packmatch::error::ErrorContext;
///
/// fn load_aliases(path: &Path) -> Result<VendorConfig> {
///     let content = std::fs::read_to_string(path).context("reading vendor aliases")?;
///     let config: VendorConfig = serde_yaml::from_str(&content)
///         .with_context(|| format!("parsing {}", path.display()))?;
///     Ok(config)
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PackMatchError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: PackMatchError, new_ctx: &str) -> PackMatchError {
    match err {
        PackMatchError::Parse {
            context: existing,
            source,
        } => PackMatchError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PackMatchError::Vendor {
            context: existing,
            source,
        } => PackMatchError::Vendor {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PackMatchError::Io {
            path,
            message,
            source,
        } => PackMatchError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PackMatchError::Config(msg) => PackMatchError::Config(chain_context(new_ctx, &msg)),
        PackMatchError::Validation(msg) => {
            PackMatchError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Returns "`new`: `existing`", or just `new` when nothing was there yet.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
