//! Resolved error values and the library's own error types.

use serde::Serialize;
use std::panic::Location;
use thiserror::Error;

/// Name carried by every error that no resolver recognized.
pub const UNKNOWN_ERROR_NAME: &str = "UnknownProgramError";

/// Message carried by an unknown error synthesized for a code.
pub const UNKNOWN_ERROR_MESSAGE: &str = "this resolver does not recognize this error";

/// Message carried by the error raised when no logs were available.
pub const NO_LOGS_MESSAGE: &str = "Error created without logs and thus without error code";

/// Sentinel code used when no code could be determined at all.
pub const NO_CODE: i64 = -1;

/// Whether a resolution came from a known source or from the fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolutionKind {
    /// A registry or the custom resolver recognized the code.
    Recognized,
    /// Nothing recognized the code.
    Unknown,
}

/// A typed error produced from a program error code.
///
/// `name` is `"<Family>#<ErrorName>"` for registry hits and
/// [`UNKNOWN_ERROR_NAME`] for the fallback. A fresh value is built on every
/// resolution.
///
/// Equality ignores the recorded call site.
#[derive(Debug, Clone, Serialize, Error)]
#[error("{name}: {message}")]
pub struct ResolvedError {
    kind: ResolutionKind,
    code: i64,
    name: String,
    message: String,
    #[serde(skip)]
    call_site: Option<&'static Location<'static>>,
}

impl ResolvedError {
    /// Build a recognized error for `family`, e.g. `AnchorError#ConstraintMut`.
    pub fn recognized(family: &str, code: i64, name: &str, message: impl Into<String>) -> Self {
        Self {
            kind: ResolutionKind::Recognized,
            code,
            name: format!("{family}#{name}"),
            message: message.into(),
            call_site: None,
        }
    }

    /// Build a recognized error with a caller-chosen full name.
    ///
    /// Intended for custom resolvers whose names do not follow the family
    /// format.
    pub fn custom(code: i64, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: ResolutionKind::Recognized,
            code,
            name: name.into(),
            message: message.into(),
            call_site: None,
        }
    }

    /// Build the fallback error for a code nothing recognized.
    pub fn unknown(code: i64) -> Self {
        Self::unknown_with_message(code, UNKNOWN_ERROR_MESSAGE)
    }

    /// Build the error raised when no code could be determined.
    pub fn without_logs() -> Self {
        Self::unknown_with_message(NO_CODE, NO_LOGS_MESSAGE)
    }

    fn unknown_with_message(code: i64, message: &str) -> Self {
        Self {
            kind: ResolutionKind::Unknown,
            code,
            name: UNKNOWN_ERROR_NAME.to_string(),
            message: message.to_string(),
            call_site: None,
        }
    }

    pub fn kind(&self) -> ResolutionKind {
        self.kind
    }

    pub fn code(&self) -> i64 {
        self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True when this is the unknown fallback rather than a recognized error.
    pub fn is_unknown(&self) -> bool {
        self.kind == ResolutionKind::Unknown
    }

    /// Family part of the name, if the name follows `"<Family>#<ErrorName>"`.
    pub fn family(&self) -> Option<&str> {
        self.name.split_once('#').map(|(family, _)| family)
    }

    /// Where the public resolution entry point was called from, if recorded.
    pub fn call_site(&self) -> Option<&'static Location<'static>> {
        self.call_site
    }

    pub(crate) fn with_call_site(mut self, site: Option<&'static Location<'static>>) -> Self {
        self.call_site = site;
        self
    }
}

impl PartialEq for ResolvedError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
            && self.code == other.code
            && self.name == other.name
            && self.message == other.message
    }
}

impl Eq for ResolvedError {}

/// Errors raised while building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two entries share one code.
    #[error("Duplicate code {code} in {family} registry ({first} and {second})")]
    DuplicateCode {
        family: String,
        code: i64,
        first: String,
        second: String,
    },

    /// An entry has an empty name.
    #[error("Entry with code {code} in {family} registry has an empty name")]
    EmptyName { family: String, code: i64 },

    /// The family label is empty or contains the `#` separator.
    #[error("Invalid family label: '{0}'")]
    InvalidFamily(String),
}
