//! Error surface of the interop crates.
//!
//! Every failure carries an [`ErrorInfo`] whose `code` is stable across releases,
//! so callers match on the code and leave the message for humans.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and diagnostics carried by an [`InteropError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Kebab-case code such as `missing-codec` or `number-parse`.
    pub code: String,
    /// Description of what went wrong.
    pub message: String,
    /// Offending tokens, type names and argument names, keyed by role.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// What the caller can change to succeed, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Starts a payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records `value` under `key`; a repeated key keeps the last value.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a remedy.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

// `message (code: x) | context: [k=v] | hint: h`
impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        let mut entries = self.context.iter();
        if let Some((key, value)) = entries.next() {
            write!(f, " | context: [{key}={value}")?;
            for (key, value) in entries {
                write!(f, ", {key}={value}")?;
            }
            f.write_str("]")?;
        }
        match &self.hint {
            Some(hint) => write!(f, " | hint: {hint}"),
            None => Ok(()),
        }
    }
}

/// Failure of a conversion, a codec or the configuration layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum InteropError {
    /// An argument was absent or outside its domain, such as a radix of 40.
    #[error("invalid argument: {0}")]
    InvalidArgument(ErrorInfo),
    /// The target container cannot hold what the source holds.
    #[error("unsupported conversion: {0}")]
    UnsupportedConversion(ErrorInfo),
    /// A payload could not be written or read back, or no codec is installed.
    #[error("codec error: {0}")]
    Codec(ErrorInfo),
    /// A YAML configuration file was unreadable or invalid.
    #[error("config error: {0}")]
    Config(ErrorInfo),
}

impl InteropError {
    /// Payload of whichever family this error belongs to.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            InteropError::InvalidArgument(info)
            | InteropError::UnsupportedConversion(info)
            | InteropError::Codec(info)
            | InteropError::Config(info) => info,
        }
    }

    /// Codec failure built from a code and any displayable cause.
    pub fn codec(code: impl Into<String>, message: impl ToString) -> Self {
        InteropError::Codec(ErrorInfo::new(code, message.to_string()))
    }
}

/// Turns an absent nullable argument into `missing-argument`.
///
/// Conversions and registrations take `impl Into<Option<&T>>`; this is the single
/// place where `None` becomes an [`InteropError::InvalidArgument`] naming `name`.
pub fn require<T>(value: Option<T>, name: &str) -> Result<T, InteropError> {
    value.ok_or_else(|| {
        InteropError::InvalidArgument(
            ErrorInfo::new("missing-argument", format!("`{name}` must not be absent"))
                .with_context("argument", name),
        )
    })
}
