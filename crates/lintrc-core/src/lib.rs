//! lintrc core
//!
//! Registry of named lint-rule profiles for an external lint-execution
//! tool: declarative profile structures, `extends` inheritance with eager
//! validation, ignore-pattern matching, and per-path rule overrides. The
//! registry is built once at startup and read-only afterwards; resolved
//! profiles can be shared across worker threads without coordination.

pub mod config;
pub mod error;
pub mod result;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigRegistry, EcmaVersion, GlobalAccess, IgnoreMatcher, OverrideConfig,
    ParserOptions, ProfileConfig, QuoteStyle, ResolvedOverride, ResolvedProfile, RuleEntry,
    RuleLevel, RuleMap, RuleOptions, RuleSetting, SemiStyle, SourceType,
};
pub use error::{ErrorKind, LintrcError};
pub use result::Result;

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("lintrc=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
