//! Test logging setup.
//!
//! Tests call [`init_test_logging`] first thing; only the first call installs
//! the subscriber:
//!
//! ```ignore
//! #[test]
//! fn test_example() {
//!     progerr::testing::init_test_logging();
//!     tracing::info!("captured");
//! }
//! ```
//!
//! # Environment Variables
//!
//! - `PROGERR_TEST_LOG_FILE`: also write every event as JSONL to this path
//! - `PROGERR_TEST_LOG_LEVEL`: filter for the `progerr` target (default: `info`)

use crate::config::EnvParser;
use std::path::Path;
use std::sync::{Mutex, Once};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

static TEST_LOGGING_INIT: Once = Once::new();

/// Install the global test subscriber. Safe to call multiple times.
pub fn init_test_logging() {
    TEST_LOGGING_INIT.call_once(|| {
        let mut parser = EnvParser::new();
        let level = parser.get_log_level("TEST_LOG_LEVEL", "info");
        let log_file = parser
            .get_path("TEST_LOG_FILE", false)
            .value
            .and_then(|path| create_log_file(&path));

        let file_layer = log_file.map(|file| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(Mutex::new(file))
                .with_current_span(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });

        let stderr_layer = tracing_subscriber::fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_level(true)
            .compact();

        let filter = EnvFilter::try_new(format!("progerr={}", level.value))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(stderr_layer);

        let _ = tracing::subscriber::set_global_default(subscriber);

        for error in parser.errors() {
            tracing::warn!(%error, "ignoring invalid test logging variable");
        }
    });
}

fn create_log_file(path: &Path) -> Option<std::fs::File> {
    if let Some(parent) = path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }
    std::fs::File::create(path).ok()
}
