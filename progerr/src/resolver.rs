//! The resolver chain and the [`ErrorResolver`] facade.
//!
//! Resolution walks a fixed priority order and stops at the first hit:
//!
//! 1. the caller's custom resolver, if any
//! 2. registry adapters, application families first, then built-in families
//! 3. the unknown-error fallback, when enabled for the call
//!
//! Every public entry point is `#[track_caller]`, so the call site recorded on
//! a resolved error is the caller's line rather than a frame inside the chain.

use crate::error::ResolvedError;
use crate::extract::extract_code;
use crate::registry::{BuiltinFamily, RegistryAdapter};
use std::convert::Infallible;
use std::fmt;
use std::panic::Location;
use thiserror::Error;
use tracing::{debug, trace};

/// Label reported for the custom resolver in logs and chain listings.
pub const CUSTOM_RESOLVER_LABEL: &str = "custom";

/// One strategy in the resolver chain.
pub trait CodeResolver: Send + Sync {
    /// Short label used in diagnostics.
    fn label(&self) -> &str;

    /// Resolve `code`, or decline with `None` so the next resolver runs.
    fn resolve(&self, code: i64) -> Option<ResolvedError>;
}

/// Adapts a closure into a [`CodeResolver`].
pub struct FnResolver<F> {
    label: String,
    resolve: F,
}

impl<F> FnResolver<F>
where
    F: Fn(i64) -> Option<ResolvedError> + Send + Sync,
{
    pub fn new(label: impl Into<String>, resolve: F) -> Self {
        Self {
            label: label.into(),
            resolve,
        }
    }
}

impl<F> CodeResolver for FnResolver<F>
where
    F: Fn(i64) -> Option<ResolvedError> + Send + Sync,
{
    fn label(&self) -> &str {
        &self.label
    }

    fn resolve(&self, code: i64) -> Option<ResolvedError> {
        (self.resolve)(code)
    }
}

/// Anything that may carry the log lines of a failed execution.
pub trait HasLogs {
    fn logs(&self) -> Option<&[String]>;
}

/// A failed execution as reported by a client library: a message and,
/// when the runtime returned them, the program logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ErrorWithLogs {
    pub message: String,
    pub logs: Option<Vec<String>>,
}

impl ErrorWithLogs {
    pub fn new(message: impl Into<String>, logs: Vec<String>) -> Self {
        Self {
            message: message.into(),
            logs: Some(logs),
        }
    }

    pub fn without_logs(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            logs: None,
        }
    }
}

impl HasLogs for ErrorWithLogs {
    fn logs(&self) -> Option<&[String]> {
        self.logs.as_deref()
    }
}

impl HasLogs for Vec<String> {
    fn logs(&self) -> Option<&[String]> {
        Some(self)
    }
}

impl HasLogs for Option<Vec<String>> {
    fn logs(&self) -> Option<&[String]> {
        self.as_deref()
    }
}

/// Builder for [`ErrorResolver`].
pub struct ErrorResolverBuilder {
    custom: Option<Box<dyn CodeResolver>>,
    families: Vec<RegistryAdapter>,
    builtins: Vec<BuiltinFamily>,
    raise_errors: bool,
    capture_call_site: bool,
}

impl ErrorResolverBuilder {
    fn new() -> Self {
        Self {
            custom: None,
            families: Vec::new(),
            builtins: BuiltinFamily::DEFAULT_ORDER.to_vec(),
            raise_errors: false,
            capture_call_site: true,
        }
    }

    /// Install a closure as the highest-priority resolver.
    #[must_use]
    pub fn custom_resolver<F>(self, resolve: F) -> Self
    where
        F: Fn(i64) -> Option<ResolvedError> + Send + Sync + 'static,
    {
        self.custom(FnResolver::new(CUSTOM_RESOLVER_LABEL, resolve))
    }

    /// Install any [`CodeResolver`] as the highest-priority resolver.
    #[must_use]
    pub fn custom(mut self, resolver: impl CodeResolver + 'static) -> Self {
        self.custom = Some(Box::new(resolver));
        self
    }

    /// Append an application family. These run before the built-in families,
    /// in the order they are added.
    #[must_use]
    pub fn family(mut self, adapter: RegistryAdapter) -> Self {
        self.families.push(adapter);
        self
    }

    /// Replace the built-in families and their order. Repeats are dropped.
    #[must_use]
    pub fn builtin_families(mut self, families: impl IntoIterator<Item = BuiltinFamily>) -> Self {
        self.builtins.clear();
        for family in families {
            if !self.builtins.contains(&family) {
                self.builtins.push(family);
            }
        }
        self
    }

    /// Drop every built-in family from the chain.
    #[must_use]
    pub fn without_builtin_families(mut self) -> Self {
        self.builtins.clear();
        self
    }

    /// Make [`ErrorResolver::check_logs`] return resolutions as `Err`.
    #[must_use]
    pub fn raise_errors(mut self, raise: bool) -> Self {
        self.raise_errors = raise;
        self
    }

    /// Record the caller's location on resolved errors.
    #[must_use]
    pub fn capture_call_site(mut self, capture: bool) -> Self {
        self.capture_call_site = capture;
        self
    }

    pub fn build(self) -> ErrorResolver {
        let mut chain: Vec<Box<dyn CodeResolver>> =
            Vec::with_capacity(1 + self.families.len() + self.builtins.len());
        if let Some(custom) = self.custom {
            chain.push(custom);
        }
        for adapter in self.families {
            chain.push(Box::new(adapter));
        }
        for family in self.builtins {
            chain.push(Box::new(family.adapter()));
        }

        ErrorResolver {
            chain,
            raise_errors: self.raise_errors,
            capture_call_site: self.capture_call_site,
        }
    }
}

/// Public entry point: turns codes or logs into [`ResolvedError`]s.
pub struct ErrorResolver {
    chain: Vec<Box<dyn CodeResolver>>,
    raise_errors: bool,
    capture_call_site: bool,
}

impl ErrorResolver {
    /// Resolver with the built-in families and no custom resolver.
    pub fn new() -> Self {
        Self::builder().build()
    }

    pub fn builder() -> ErrorResolverBuilder {
        ErrorResolverBuilder::new()
    }

    /// Resolver with `resolve` as its custom resolver.
    pub fn with_custom_resolver<F>(resolve: F) -> Self
    where
        F: Fn(i64) -> Option<ResolvedError> + Send + Sync + 'static,
    {
        Self::builder().custom_resolver(resolve).build()
    }

    /// Labels of the chain entries in priority order (fallback excluded).
    pub fn chain_labels(&self) -> Vec<&str> {
        self.chain.iter().map(|r| r.label()).collect()
    }

    pub fn raises_errors(&self) -> bool {
        self.raise_errors
    }

    /// Resolve `code`, falling back to an unknown error. Always `Some`.
    #[track_caller]
    pub fn resolve_from_code(&self, code: i64) -> Option<ResolvedError> {
        let site = self.call_site();
        self.resolve_code_at(code, true, site)
    }

    /// Resolve `code`; with `fallback_to_unknown` off, `None` means no
    /// resolver recognized it.
    #[track_caller]
    pub fn resolve_from_code_with(
        &self,
        code: i64,
        fallback_to_unknown: bool,
    ) -> Option<ResolvedError> {
        let site = self.call_site();
        self.resolve_code_at(code, fallback_to_unknown, site)
    }

    /// Extract the code from `logs` and resolve it with fallback enabled.
    ///
    /// `None` when the logs carry no code.
    #[track_caller]
    pub fn resolve_from_logs<S: AsRef<str>>(&self, logs: &[S]) -> Option<ResolvedError> {
        let site = self.call_site();
        self.resolve_logs_at(logs, true, site)
    }

    /// Extract the code from `logs` and resolve it.
    ///
    /// Logs without a code yield `None` regardless of `fallback_to_unknown`.
    #[track_caller]
    pub fn resolve_from_logs_with<S: AsRef<str>>(
        &self,
        logs: &[S],
        fallback_to_unknown: bool,
    ) -> Option<ResolvedError> {
        let site = self.call_site();
        self.resolve_logs_at(logs, fallback_to_unknown, site)
    }

    /// Raise the error behind a failed execution. Never returns `Ok`.
    ///
    /// Failures without logs, or whose logs carry no code, raise an unknown
    /// error with code `-1`.
    #[track_caller]
    pub fn throw_resolved<E: HasLogs + ?Sized>(
        &self,
        failure: &E,
    ) -> Result<Infallible, ResolvedError> {
        let site = self.call_site();
        let resolved = failure
            .logs()
            .and_then(|logs| self.resolve_logs_at(logs, true, site))
            .unwrap_or_else(|| {
                debug!("no program error code available; raising unknown error");
                ResolvedError::without_logs().with_call_site(site)
            });
        Err(resolved)
    }

    /// Resolve `logs`, raising the resolution when the resolver was built
    /// with `raise_errors`.
    ///
    /// Logs without a code are `Ok(None)` in both modes.
    #[track_caller]
    pub fn check_logs<S: AsRef<str>>(
        &self,
        logs: &[S],
    ) -> Result<Option<ResolvedError>, ResolvedError> {
        let site = self.call_site();
        match self.resolve_logs_at(logs, true, site) {
            Some(resolved) if self.raise_errors => Err(resolved),
            other => Ok(other),
        }
    }

    #[track_caller]
    fn call_site(&self) -> Option<&'static Location<'static>> {
        if self.capture_call_site {
            Some(Location::caller())
        } else {
            None
        }
    }

    fn resolve_logs_at<S: AsRef<str>>(
        &self,
        logs: &[S],
        fallback_to_unknown: bool,
        site: Option<&'static Location<'static>>,
    ) -> Option<ResolvedError> {
        let Some(code) = extract_code(logs) else {
            debug!(lines = logs.len(), "no program error code in logs");
            return None;
        };
        self.resolve_code_at(code, fallback_to_unknown, site)
    }

    fn resolve_code_at(
        &self,
        code: i64,
        fallback_to_unknown: bool,
        site: Option<&'static Location<'static>>,
    ) -> Option<ResolvedError> {
        for resolver in &self.chain {
            match resolver.resolve(code) {
                Some(resolved) => {
                    debug!(
                        code,
                        resolver = resolver.label(),
                        name = resolved.name(),
                        "resolved program error"
                    );
                    return Some(resolved.with_call_site(site));
                }
                None => trace!(code, resolver = resolver.label(), "resolver declined"),
            }
        }

        if fallback_to_unknown {
            debug!(code, "no resolver recognized code; using unknown fallback");
            Some(ResolvedError::unknown(code).with_call_site(site))
        } else {
            debug!(code, "no resolver recognized code");
            None
        }
    }
}

impl Default for ErrorResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ErrorResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorResolver")
            .field("chain", &self.chain_labels())
            .field("raise_errors", &self.raise_errors)
            .field("capture_call_site", &self.capture_call_site)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{NO_CODE, NO_LOGS_MESSAGE, ResolutionKind, UNKNOWN_ERROR_MESSAGE};
    use crate::registry::{ErrorMetadata, Registry};
    use progerr_catalog::{AnchorErrorCode, TokenErrorCode};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const MUT_LOGS: [&str; 2] = [
        "Program CwrqeMj2U8tFr1Rhkgwc84tpAsqbt9pTt2a4taoTADPr invoke [1]",
        "Program log: Custom program error: 0x07D0",
    ];

    fn app_family() -> RegistryAdapter {
        let registry = Registry::from_entries(
            "Vault",
            [
                ErrorMetadata::new(6000, "Locked", "Vault is locked"),
                ErrorMetadata::new(2000, "Shadowed", "Never reached for anchor codes"),
            ],
        )
        .unwrap();
        RegistryAdapter::new("VaultError", Arc::new(registry)).unwrap()
    }

    #[test]
    fn test_resolves_anchor_code() {
        let resolver = ErrorResolver::new();
        let code = AnchorErrorCode::ConstraintSeeds;
        let err = resolver
            .resolve_from_code(i64::from(code.code_number()))
            .expect("fallback always resolves");
        assert_eq!(err.code(), 2006);
        assert_eq!(err.name(), "AnchorError#ConstraintSeeds");
        assert_eq!(err.message(), code.message());
        assert_eq!(err.kind(), ResolutionKind::Recognized);
    }

    #[test]
    fn test_resolves_token_code() {
        let resolver = ErrorResolver::new();
        let err = resolver.resolve_from_code(17).unwrap();
        assert_eq!(err.name(), "TokenError#AccountFrozen");
        assert_eq!(err.message(), TokenErrorCode::AccountFrozen.message());
    }

    #[test]
    fn test_unknown_code_with_and_without_fallback() {
        let resolver = ErrorResolver::new();
        let err = resolver.resolve_from_code_with(424_242, true).unwrap();
        assert_eq!(err.code(), 424_242);
        assert!(err.is_unknown());
        assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);

        assert_eq!(resolver.resolve_from_code_with(424_242, false), None);
        assert_eq!(resolver.resolve_from_code_with(-7, false), None);
    }

    #[test]
    fn test_custom_resolver_takes_precedence() {
        let resolver = ErrorResolver::with_custom_resolver(|code| {
            (code == 2000).then(|| ResolvedError::custom(code, "MyProgram#Mut", "custom mut"))
        });
        let err = resolver.resolve_from_code(2000).unwrap();
        assert_eq!(err.name(), "MyProgram#Mut");
        assert_eq!(err.message(), "custom mut");

        // Declined codes fall through to the registries.
        let err = resolver.resolve_from_code(2006).unwrap();
        assert_eq!(err.name(), "AnchorError#ConstraintSeeds");
    }

    #[test]
    fn test_chain_order() {
        let resolver = ErrorResolver::builder()
            .custom_resolver(|_| None)
            .family(app_family())
            .build();
        assert_eq!(
            resolver.chain_labels(),
            vec![CUSTOM_RESOLVER_LABEL, "VaultError", "TokenError", "AnchorError"]
        );
    }

    #[test]
    fn test_application_family_precedes_builtins() {
        let resolver = ErrorResolver::builder().family(app_family()).build();
        assert_eq!(
            resolver.resolve_from_code(2000).unwrap().name(),
            "VaultError#Shadowed"
        );
        assert_eq!(
            resolver.resolve_from_code(6000).unwrap().name(),
            "VaultError#Locked"
        );
    }

    #[test]
    fn test_builtin_family_selection() {
        let resolver = ErrorResolver::builder()
            .builtin_families([BuiltinFamily::Token, BuiltinFamily::Anchor, BuiltinFamily::Token])
            .build();
        assert_eq!(resolver.chain_labels(), vec!["TokenError", "AnchorError"]);

        let anchor_only = ErrorResolver::builder()
            .builtin_families([BuiltinFamily::Anchor])
            .build();
        assert!(anchor_only.resolve_from_code(17).unwrap().is_unknown());

        let empty = ErrorResolver::builder().without_builtin_families().build();
        assert!(empty.chain_labels().is_empty());
        assert_eq!(empty.resolve_from_code_with(2000, false), None);
    }

    #[test]
    fn test_resolve_from_logs() {
        let resolver = ErrorResolver::new();
        let err = resolver.resolve_from_logs(&MUT_LOGS).unwrap();
        assert_eq!(err.code(), 2000);
        assert_eq!(err.name(), "AnchorError#ConstraintMut");
    }

    #[test]
    fn test_logs_without_code_ignore_fallback() {
        let resolver = ErrorResolver::new();
        let logs = ["Program 11111111111111111111111111111111 invoke [1]"];
        assert_eq!(resolver.resolve_from_logs_with(&logs, true), None);
        assert_eq!(resolver.resolve_from_logs_with(&logs, false), None);
    }

    #[test]
    fn test_logs_with_unknown_code() {
        let resolver = ErrorResolver::new();
        let logs = ["Program log: Custom program error: 0x1770"];
        assert!(resolver.resolve_from_logs(&logs).unwrap().is_unknown());
        assert_eq!(resolver.resolve_from_logs_with(&logs, false), None);
    }

    #[test]
    fn test_throw_resolved_with_logs() {
        let resolver = ErrorResolver::new();
        let failure = ErrorWithLogs::new(
            "Transaction simulation failed",
            MUT_LOGS.iter().map(|l| l.to_string()).collect(),
        );
        let Err(err) = resolver.throw_resolved(&failure);
        assert_eq!(err.code(), 2000);
        assert_eq!(err.name(), "AnchorError#ConstraintMut");
        assert_eq!(err.message(), AnchorErrorCode::ConstraintMut.message());
    }

    #[test]
    fn test_throw_resolved_without_logs() {
        let resolver = ErrorResolver::new();
        let Err(err) = resolver.throw_resolved(&ErrorWithLogs::without_logs("boom"));
        assert_eq!(err.code(), NO_CODE);
        assert_eq!(err.message(), NO_LOGS_MESSAGE);
        assert!(err.is_unknown());
    }

    #[test]
    fn test_throw_resolved_logs_without_code() {
        let resolver = ErrorResolver::new();
        let logs = vec!["Program log: panicked".to_string()];
        let Err(err) = resolver.throw_resolved(&logs);
        assert_eq!(err.code(), NO_CODE);
    }

    #[test]
    fn test_throw_resolved_unknown_code_keeps_code() {
        let resolver = ErrorResolver::new();
        let logs: Option<Vec<String>> =
            Some(vec!["Program log: Custom program error: 0x1770".to_string()]);
        let Err(err) = resolver.throw_resolved(&logs);
        assert_eq!(err.code(), 6000);
        assert!(err.is_unknown());
    }

    #[test]
    fn test_check_logs_modes() {
        let returning = ErrorResolver::new();
        let resolved = returning.check_logs(&MUT_LOGS).unwrap().unwrap();
        assert_eq!(resolved.code(), 2000);

        let raising = ErrorResolver::builder().raise_errors(true).build();
        assert!(raising.raises_errors());
        let err = raising.check_logs(&MUT_LOGS).unwrap_err();
        assert_eq!(err.name(), "AnchorError#ConstraintMut");

        let quiet = ["Program log: ok"];
        assert_eq!(raising.check_logs(&quiet), Ok(None));
        assert_eq!(returning.check_logs(&quiet), Ok(None));
    }

    #[test]
    fn test_call_site_points_at_caller() {
        let resolver = ErrorResolver::new();
        let line = line!() + 1;
        let err = resolver.resolve_from_code(2000).unwrap();
        let site = err.call_site().expect("call site captured");
        assert_eq!(site.file(), file!());
        assert_eq!(site.line(), line);

        let line = line!() + 1;
        let Err(err) = resolver.throw_resolved(&ErrorWithLogs::without_logs("x"));
        assert_eq!(err.call_site().map(|s| s.line()), Some(line));
    }

    #[test]
    fn test_call_site_capture_disabled() {
        let resolver = ErrorResolver::builder().capture_call_site(false).build();
        let with_site = ErrorResolver::new().resolve_from_code(2000).unwrap();
        let without_site = resolver.resolve_from_code(2000).unwrap();
        assert!(without_site.call_site().is_none());
        assert_eq!(with_site, without_site);
    }

    #[test]
    fn test_custom_resolver_result_gets_call_site() {
        let resolver =
            ErrorResolver::with_custom_resolver(|code| Some(ResolvedError::custom(code, "X", "y")));
        let line = line!() + 1;
        let err = resolver.resolve_from_code(1).unwrap();
        assert_eq!(err.call_site().map(|s| s.line()), Some(line));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let resolver = ErrorResolver::new();
        for code in [0, 17, 2000, 2006, 5000, 9999, -1] {
            assert_eq!(resolver.resolve_from_code(code), resolver.resolve_from_code(code));
        }
        assert_eq!(
            resolver.resolve_from_logs(&MUT_LOGS),
            resolver.resolve_from_logs(&MUT_LOGS)
        );
    }

    #[test]
    fn test_custom_resolver_consulted_once_per_call() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let resolver = ErrorResolver::with_custom_resolver(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            None
        });
        resolver.resolve_from_code(2000);
        resolver.resolve_from_logs(&MUT_LOGS);
        resolver.resolve_from_logs(&["no code here"]);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_resolver_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ErrorResolver>();
    }

    #[test]
    fn test_debug_lists_chain() {
        let debug = format!("{:?}", ErrorResolver::new());
        assert!(debug.contains("AnchorError"));
        assert!(debug.contains("TokenError"));
    }
}
