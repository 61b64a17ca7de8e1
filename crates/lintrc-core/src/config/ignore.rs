//! Ignore-pattern compilation and path matching
//!
//! Ignore patterns use gitignore-style shorthand: a trailing `/` names a
//! directory and everything beneath it, a bare name matches that name in
//! any directory, and explicit glob patterns are used as written. `*` never
//! crosses a path separator; `**` does.

use glob::{MatchOptions, Pattern};
use std::path::Path;

use crate::error::LintrcError;
use crate::result::Result;

/// Match options shared by ignore and override matching
fn match_options() -> MatchOptions {
    MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::default()
    }
}

/// One source pattern expanded into the glob variants it implies
#[derive(Debug, Clone, PartialEq)]
struct IgnoreEntry {
    source: String,
    patterns: Vec<Pattern>,
}

/// Compiled ignore patterns for one resolved profile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IgnoreMatcher {
    entries: Vec<IgnoreEntry>,
}

impl IgnoreMatcher {
    /// Compile a profile's ignore patterns.
    ///
    /// Fails with `MalformedGlob` naming the profile and the offending
    /// pattern if any pattern cannot be compiled.
    pub fn compile(profile: &str, sources: &[String]) -> Result<Self> {
        let mut entries = Vec::with_capacity(sources.len());

        for source in sources {
            let source = source.trim();
            if source.is_empty() {
                continue;
            }

            let mut variants = Vec::new();
            if let Some(dir) = source.strip_suffix('/') {
                // Directory pattern: "dist/" covers the directory and
                // everything beneath it, at any depth.
                variants.push(format!("{dir}/**"));
                variants.push(format!("**/{dir}/**"));
            } else if !source.contains('/') {
                // Bare name or segment-local glob: match in any directory
                variants.push(source.to_string());
                variants.push(format!("**/{source}"));
            } else {
                variants.push(source.to_string());
            }

            let mut patterns = Vec::with_capacity(variants.len());
            for variant in variants {
                let pattern = Pattern::new(&variant).map_err(|e| {
                    LintrcError::malformed_glob(profile, source, e.to_string())
                })?;
                patterns.push(pattern);
            }

            entries.push(IgnoreEntry {
                source: source.to_string(),
                patterns,
            });
        }

        Ok(Self { entries })
    }

    /// True if the path matches any compiled pattern.
    ///
    /// Unmatched paths return false; matching never fails.
    pub fn is_ignored(&self, path: impl AsRef<Path>) -> bool {
        let normalized = normalize(path.as_ref());
        let options = match_options();

        self.entries.iter().any(|entry| {
            entry
                .patterns
                .iter()
                .any(|pattern| pattern.matches_with(&normalized, options))
        })
    }

    /// The source patterns this matcher was compiled from
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.source.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compile override `files` patterns as written (no gitignore shorthand)
pub(crate) fn compile_override_patterns(profile: &str, sources: &[String]) -> Result<Vec<Pattern>> {
    sources
        .iter()
        .map(|source| {
            Pattern::new(source)
                .map_err(|e| LintrcError::malformed_glob(profile, source, e.to_string()))
        })
        .collect()
}

/// True if the path matches any of the compiled patterns
pub(crate) fn matches_any(patterns: &[Pattern], path: &Path) -> bool {
    let normalized = normalize(path);
    let options = match_options();
    patterns
        .iter()
        .any(|pattern| pattern.matches_with(&normalized, options))
}

/// Relative, forward-slashed form of the path for pattern matching
fn normalize(path: &Path) -> String {
    let text = path.to_string_lossy().replace('\\', "/");
    text.strip_prefix("./").unwrap_or(&text).to_string()
}
