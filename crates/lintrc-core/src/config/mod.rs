//! Profile configuration system
//!
//! This module provides the registry of named lint-rule profiles:
//! - Declarative profile structure (serde types with JSON Schema
//!   generation via schemars)
//! - Profile inheritance via the `extends` field, with eager validation
//!   of every rule level, option payload, and glob pattern
//! - Ignore-pattern matching with gitignore-style shorthand
//! - JSON/JSONC/YAML document loading with upward auto-discovery
//!
//! ## Profile documents
//!
//! A document maps profile names to profile structures and is layered
//! over the built-in `recommended`/`default`/`security` profiles:
//!
//! ```jsonc
//! {
//!   "strict": {
//!     "extends": ["recommended"],
//!     "env": { "node": true, "es2021": true },
//!     "rules": {
//!       "no-console": "error",
//!       "semi": ["error", "always"]
//!     },
//!     "ignorePatterns": ["node_modules/", "dist/"],
//!     "overrides": [
//!       { "files": ["**/*.test.js"], "rules": { "no-console": "off" } }
//!     ],
//!     "globals": { "console": "readonly" }
//!   }
//! }
//! ```
//!
//! ## Resolution
//!
//! [`ConfigRegistry::resolve`] merges the `extends` chain bottom-up
//! (later bases override earlier ones, the profile's own declarations
//! override all of them) and returns an immutable [`ResolvedProfile`].
//! Per-path behavior — ignore checks and override application — lives on
//! the resolved profile, not in the merge.

mod builtin;
mod ignore;
mod loader;
mod merge;
mod profile;
mod registry;
mod rule_options;

pub use builtin::{DEFAULT, RECOMMENDED, SECURITY};
pub use ignore::IgnoreMatcher;
pub use loader::ConfigLoader;
pub use profile::{
    EcmaVersion, EcmaVersionKeyword, GlobalAccess, OverrideConfig, ParserOptions, ProfileConfig,
    RuleEntry, RuleLevel, RuleMap, SourceType,
};
pub use registry::{ConfigRegistry, ResolvedOverride, ResolvedProfile};
pub use rule_options::{QuoteStyle, RuleOptions, RuleSetting, SemiStyle};
