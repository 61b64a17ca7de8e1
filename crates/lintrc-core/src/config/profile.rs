//! Declarative configuration types for lint profiles
//!
//! This module contains the raw, as-written profile structure. Validation
//! (level tokens, option payloads, glob patterns) happens during
//! resolution in the registry, so these types stay permissive enough to
//! round-trip any well-formed profile document.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Enforcement level assigned to a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RuleLevel {
    /// Disable the rule
    Off,
    /// Report without failing the run
    Warn,
    /// Report and fail the run
    Error,
}

impl RuleLevel {
    /// Parse a level token as it appears in a profile document.
    ///
    /// Accepts the string spellings `"off"`/`"warn"`/`"error"` and the
    /// numeric aliases `0`/`1`/`2`. Returns `None` for anything else;
    /// the caller turns that into an `InvalidRuleLevel` with context.
    pub fn from_token(token: &serde_json::Value) -> Option<Self> {
        match token {
            serde_json::Value::String(s) => match s.as_str() {
                "off" => Some(Self::Off),
                "warn" => Some(Self::Warn),
                "error" => Some(Self::Error),
                _ => None,
            },
            serde_json::Value::Number(n) => match n.as_u64() {
                Some(0) => Some(Self::Off),
                Some(1) => Some(Self::Warn),
                Some(2) => Some(Self::Error),
                _ => None,
            },
            _ => None,
        }
    }

    /// Whether the rule is active at this level
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }
}

impl fmt::Display for RuleLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Mutability class of a declared global identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GlobalAccess {
    /// The identifier exists but must not be reassigned
    Readonly,
    /// The identifier may be reassigned
    Writable,
}

/// How source files are parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    /// Top-level code, no module system
    Script,
    /// ECMAScript modules
    Module,
    /// CommonJS modules
    Commonjs,
}

/// Language version keyword forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EcmaVersionKeyword {
    /// Track the most recent supported language version
    Latest,
}

/// Language version: a concrete year or a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum EcmaVersion {
    /// A specific edition year, e.g. `2021`
    Year(u16),
    /// Keyword form, e.g. `"latest"`
    Keyword(EcmaVersionKeyword),
}

/// Language-parsing options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParserOptions {
    /// Language edition to parse with
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "ECMAScript edition year or 'latest'")]
    pub ecma_version: Option<EcmaVersion>,

    /// Module system of the sources
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Source type: 'script', 'module', or 'commonjs'")]
    pub source_type: Option<SourceType>,
}

/// A rule declaration as written in a profile document
///
/// Either a bare level token (`"error"`, `"warn"`, `"off"`, or the numeric
/// aliases `0`/`1`/`2`), or an array whose first element is the level token
/// and whose remaining elements are rule-specific options
/// (`["error", "always"]`). Tokens are validated during resolution so that
/// failures can name the profile and rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleEntry {
    /// `[level, options...]`
    WithOptions(Vec<serde_json::Value>),
    /// Bare level token
    Level(serde_json::Value),
}

impl RuleEntry {
    /// The level token of this entry, if present
    pub fn level_token(&self) -> Option<&serde_json::Value> {
        match self {
            Self::WithOptions(parts) => parts.first(),
            Self::Level(token) => Some(token),
        }
    }

    /// The option payload following the level token
    pub fn option_payload(&self) -> &[serde_json::Value] {
        match self {
            Self::WithOptions(parts) if !parts.is_empty() => &parts[1..],
            _ => &[],
        }
    }
}

impl From<RuleLevel> for RuleEntry {
    fn from(level: RuleLevel) -> Self {
        Self::Level(serde_json::Value::String(level.to_string()))
    }
}

/// Insertion-ordered rule declarations keyed by rule identifier
pub type RuleMap = IndexMap<String, RuleEntry>;

/// Path-scoped rule adjustments applied after the base merge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OverrideConfig {
    /// Glob patterns selecting the files this override applies to
    #[schemars(description = "Glob patterns for files this override applies to")]
    pub files: Vec<String>,

    /// Partial rule mapping merged on top of the base rules for matching files
    #[serde(default)]
    #[schemars(description = "Rules merged over the base mapping for matching files")]
    pub rules: RuleMap,
}

/// A named, self-contained rule-set configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileConfig {
    /// Runtime-environment tags; enabled tags contribute implicit globals
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Environment tags such as 'node' or 'es2021'")]
    pub env: Option<BTreeMap<String, bool>>,

    /// Language-parsing options
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Parser options (ECMAScript edition, source type)")]
    pub parser_options: Option<ParserOptions>,

    /// Ordered base profiles merged beneath this one
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Base profile names, merged in order beneath this profile")]
    pub extends: Option<Vec<String>>,

    /// Rule-bundle namespaces required for namespaced rule identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Plugin namespaces providing namespaced rules")]
    pub plugins: Option<Vec<String>>,

    /// Rule identifier to enforcement level (and optional options)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Rule severity configuration")]
    pub rules: Option<RuleMap>,

    /// Glob patterns excluding matching paths from evaluation entirely
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Glob patterns for paths excluded from evaluation")]
    pub ignore_patterns: Option<Vec<String>>,

    /// Path-scoped rule adjustments, applied in listed order
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Path-scoped rule overrides")]
    pub overrides: Option<Vec<OverrideConfig>>,

    /// Recognized global identifiers and their mutability class
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(description = "Global identifiers and whether they are writable")]
    pub globals: Option<IndexMap<String, GlobalAccess>>,
}
