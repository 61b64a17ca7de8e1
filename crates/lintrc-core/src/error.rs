//! Error types and handling for profile registry operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for profile registry operations
#[derive(Debug, Error)]
pub enum LintrcError {
    /// A profile name (or a base named in `extends`) does not exist
    #[error("Unknown profile: '{profile}'")]
    UnknownProfile { profile: String },

    /// A rule's enforcement level is not one of off/warn/error
    #[error("Invalid rule level for '{rule}' in profile '{profile}': {value}")]
    InvalidRuleLevel {
        profile: String,
        rule: String,
        value: String,
    },

    /// A rule's option payload does not match its registered schema
    #[error("Invalid options for rule '{rule}' in profile '{profile}': {message}")]
    InvalidRuleOptions {
        profile: String,
        rule: String,
        message: String,
    },

    /// Circular inheritance among profiles
    #[error("Cyclic extends chain: {chain}")]
    CyclicExtends { chain: String },

    /// An ignore or override pattern cannot be compiled
    #[error("Malformed glob '{pattern}' in profile '{profile}': {message}")]
    MalformedGlob {
        profile: String,
        pattern: String,
        message: String,
    },

    /// Configuration loading or validation errors
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// File system I/O errors
    #[error("IO error for path '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UnknownProfile,
    InvalidRuleLevel,
    InvalidRuleOptions,
    CyclicExtends,
    MalformedGlob,
    Config,
    Io,
}

impl LintrcError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LintrcError::UnknownProfile { .. } => ErrorKind::UnknownProfile,
            LintrcError::InvalidRuleLevel { .. } => ErrorKind::InvalidRuleLevel,
            LintrcError::InvalidRuleOptions { .. } => ErrorKind::InvalidRuleOptions,
            LintrcError::CyclicExtends { .. } => ErrorKind::CyclicExtends,
            LintrcError::MalformedGlob { .. } => ErrorKind::MalformedGlob,
            LintrcError::ConfigError { .. } => ErrorKind::Config,
            LintrcError::IoError { .. } => ErrorKind::Io,
        }
    }

    /// Create an unknown-profile error
    pub fn unknown_profile(profile: impl Into<String>) -> Self {
        Self::UnknownProfile {
            profile: profile.into(),
        }
    }

    /// Create an invalid-rule-level error
    pub fn invalid_rule_level(
        profile: impl Into<String>,
        rule: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidRuleLevel {
            profile: profile.into(),
            rule: rule.into(),
            value: value.into(),
        }
    }

    /// Create an invalid-rule-options error
    pub fn invalid_rule_options(
        profile: impl Into<String>,
        rule: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidRuleOptions {
            profile: profile.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Create a cyclic-extends error from the visited chain
    pub fn cyclic_extends(chain: impl Into<String>) -> Self {
        Self::CyclicExtends {
            chain: chain.into(),
        }
    }

    /// Create a malformed-glob error
    pub fn malformed_glob(
        profile: impl Into<String>,
        pattern: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::MalformedGlob {
            profile: profile.into(),
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create an IO error with path context
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }
}

/// Convert from std::io::Error
impl From<std::io::Error> for LintrcError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError {
            path: PathBuf::new(),
            source: err,
        }
    }
}
