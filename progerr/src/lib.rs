//! Program error resolution.
//!
//! Turns the `Custom program error: 0x..` line of a failed execution's logs
//! into a typed [`ResolvedError`] named `<Family>#<ErrorName>`, using a
//! prioritized chain: an optional custom resolver, then registry families,
//! then an unknown-error fallback.
//!
//! ```ignore
//! use progerr::{ErrorResolver, ErrorWithLogs};
//!
//! let resolver = ErrorResolver::new();
//! let failure = ErrorWithLogs::new(
//!     "transaction failed",
//!     vec!["Program log: Custom program error: 0x07D0".to_string()],
//! );
//! let Err(err) = resolver.throw_resolved(&failure);
//! assert_eq!(err.name(), "AnchorError#ConstraintMut");
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod registry;
pub mod resolver;
pub mod testing;

pub use config::{ConfigError, LoadedConfig, RegistryConfig, ResolverConfig};
pub use error::{
    NO_CODE, NO_LOGS_MESSAGE, RegistryError, ResolutionKind, ResolvedError, UNKNOWN_ERROR_MESSAGE,
    UNKNOWN_ERROR_NAME,
};
pub use extract::{ERROR_LINE_MARKER, extract_code};
pub use registry::{BuiltinFamily, ErrorMetadata, Registry, RegistryAdapter};
pub use resolver::{
    CUSTOM_RESOLVER_LABEL, CodeResolver, ErrorResolver, ErrorResolverBuilder, ErrorWithLogs,
    FnResolver, HasLogs,
};

pub use progerr_catalog as catalog;
