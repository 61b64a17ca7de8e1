//! Result type alias for profile registry operations

use crate::error::LintrcError;

/// Standard Result type for profile registry operations
pub type Result<T> = std::result::Result<T, LintrcError>;
