//! Code-to-metadata registries and the adapter that turns them into resolvers.
//!
//! A [`Registry`] is a read-only map from numeric code to [`ErrorMetadata`].
//! A [`RegistryAdapter`] pairs one registry with a family label and is the
//! only thing the resolver chain sees.

use crate::error::{RegistryError, ResolvedError};
use crate::resolver::CodeResolver;
use progerr_catalog::{ANCHOR_FAMILY, AnchorErrorCode, TOKEN_FAMILY, TokenErrorCode};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Metadata for one known code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorMetadata {
    pub code: i64,
    pub name: String,
    pub message: String,
}

impl ErrorMetadata {
    pub fn new(code: i64, name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Immutable mapping from code to metadata for one program family.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: HashMap<i64, ErrorMetadata>,
}

impl Registry {
    /// Build a registry, rejecting duplicate codes and empty names.
    ///
    /// `family` is only used to label errors.
    pub fn from_entries<I>(family: &str, entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = ErrorMetadata>,
    {
        let mut map = HashMap::new();
        for meta in entries {
            if meta.name.is_empty() {
                return Err(RegistryError::EmptyName {
                    family: family.to_string(),
                    code: meta.code,
                });
            }
            match map.entry(meta.code) {
                Entry::Occupied(existing) => {
                    let existing: &ErrorMetadata = existing.get();
                    return Err(RegistryError::DuplicateCode {
                        family: family.to_string(),
                        code: meta.code,
                        first: existing.name.clone(),
                        second: meta.name,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(meta);
                }
            }
        }
        Ok(Self { entries: map })
    }

    /// Pure map read.
    pub fn lookup(&self, code: i64) -> Option<&ErrorMetadata> {
        self.entries.get(&code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries sorted by code.
    pub fn entries(&self) -> Vec<&ErrorMetadata> {
        let mut entries: Vec<_> = self.entries.values().collect();
        entries.sort_by_key(|meta| meta.code);
        entries
    }
}

/// A registry bound to the family label used in resolved names.
#[derive(Clone)]
pub struct RegistryAdapter {
    family: String,
    registry: Arc<Registry>,
}

impl RegistryAdapter {
    /// Pair `registry` with `family`.
    ///
    /// The label must be non-empty and must not contain `#`, since resolved
    /// names are split on it.
    pub fn new(family: impl Into<String>, registry: Arc<Registry>) -> Result<Self, RegistryError> {
        let family = family.into();
        if family.is_empty() || family.contains('#') {
            return Err(RegistryError::InvalidFamily(family));
        }
        Ok(Self { family, registry })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn lookup(&self, code: i64) -> Option<&ErrorMetadata> {
        self.registry.lookup(code)
    }

    /// Build the resolved error for a metadata row of this family.
    pub fn construct(&self, meta: &ErrorMetadata) -> ResolvedError {
        ResolvedError::recognized(&self.family, meta.code, &meta.name, meta.message.as_str())
    }
}

impl CodeResolver for RegistryAdapter {
    fn label(&self) -> &str {
        &self.family
    }

    fn resolve(&self, code: i64) -> Option<ResolvedError> {
        self.lookup(code).map(|meta| self.construct(meta))
    }
}

impl fmt::Debug for RegistryAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryAdapter")
            .field("family", &self.family)
            .field("entries", &self.registry.len())
            .finish()
    }
}

/// Families shipped with the crate, selectable by key in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinFamily {
    /// Anchor framework errors (`AnchorError`).
    Anchor,
    /// SPL Token program errors (`TokenError`).
    Token,
}

impl BuiltinFamily {
    /// Default chain order: the single-program token family comes before
    /// the framework family every Anchor program can emit.
    pub const DEFAULT_ORDER: [BuiltinFamily; 2] = [BuiltinFamily::Token, BuiltinFamily::Anchor];

    /// Configuration key.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Anchor => "anchor",
            Self::Token => "token",
        }
    }

    /// Family label used in resolved names.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Anchor => ANCHOR_FAMILY,
            Self::Token => TOKEN_FAMILY,
        }
    }

    /// Parse a configuration key (case-insensitive).
    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "anchor" => Some(Self::Anchor),
            "token" => Some(Self::Token),
            _ => None,
        }
    }

    /// Shared registry for this family, built on first use.
    pub fn registry(&self) -> Arc<Registry> {
        static ANCHOR: OnceLock<Arc<Registry>> = OnceLock::new();
        static TOKEN: OnceLock<Arc<Registry>> = OnceLock::new();

        match self {
            Self::Anchor => ANCHOR
                .get_or_init(|| {
                    Arc::new(catalog_registry(AnchorErrorCode::all().iter().map(|c| {
                        ErrorMetadata::new(i64::from(c.code_number()), c.name(), c.message())
                    })))
                })
                .clone(),
            Self::Token => TOKEN
                .get_or_init(|| {
                    Arc::new(catalog_registry(TokenErrorCode::all().iter().map(|c| {
                        ErrorMetadata::new(i64::from(c.code_number()), c.name(), c.message())
                    })))
                })
                .clone(),
        }
    }

    /// Adapter over the shared registry.
    pub fn adapter(&self) -> RegistryAdapter {
        RegistryAdapter {
            family: self.label().to_string(),
            registry: self.registry(),
        }
    }
}

impl fmt::Display for BuiltinFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Catalog tables have unique codes by construction (checked by the catalog's
/// own tests), so duplicates are collapsed instead of reported.
fn catalog_registry(entries: impl Iterator<Item = ErrorMetadata>) -> Registry {
    let mut map = HashMap::new();
    for meta in entries {
        map.entry(meta.code).or_insert(meta);
    }
    Registry { entries: map }
}
