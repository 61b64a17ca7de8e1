//! Profile registry and resolution
//!
//! The registry holds the declarative profiles and resolves a named
//! profile into a self-contained [`ResolvedProfile`]: bases named in
//! `extends` are merged bottom-up (later bases override earlier ones,
//! the profile's own declarations override everything), every rule level
//! and option payload is validated, and every glob is compiled. All
//! configuration errors surface here, before any file is evaluated.
//!
//! A resolved profile is immutable and shareable; parallel readers need
//! no coordination.

use glob::Pattern;
use indexmap::IndexMap;
use std::collections::BTreeMap;
use std::path::Path;

use super::ignore::{IgnoreMatcher, compile_override_patterns, matches_any};
use super::merge::{merge_environment, merge_globals, merge_rules};
use super::profile::{GlobalAccess, OverrideConfig, ParserOptions, ProfileConfig};
use super::rule_options::RuleSetting;
use crate::error::LintrcError;
use crate::result::Result;

/// An override with its patterns compiled and its rules validated
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedOverride {
    /// Source patterns as written
    pub files: Vec<String>,
    patterns: Vec<Pattern>,
    /// Validated rules merged over the base mapping for matching files
    pub rules: IndexMap<String, RuleSetting>,
}

impl ResolvedOverride {
    /// True if this override applies to the given path
    pub fn applies_to(&self, path: impl AsRef<Path>) -> bool {
        matches_any(&self.patterns, path.as_ref())
    }
}

/// A fully merged, validated profile with no unresolved `extends`
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProfile {
    name: String,
    /// Merged environment tags
    pub environment: BTreeMap<String, bool>,
    /// Parser options (own profile wins, else the last base that set them)
    pub parser_options: ParserOptions,
    /// Plugin namespaces collected across the extends chain
    pub plugins: Vec<String>,
    /// Merged and validated rule settings
    pub rules: IndexMap<String, RuleSetting>,
    /// Merged global identifier declarations
    pub globals: IndexMap<String, GlobalAccess>,
    ignore: IgnoreMatcher,
    overrides: Vec<ResolvedOverride>,
}

impl ResolvedProfile {
    /// The profile name this was resolved from
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if the path matches any ignore pattern.
    ///
    /// An ignored path is excluded from evaluation entirely; this check
    /// short-circuits everything else, including overrides.
    pub fn is_ignored(&self, path: impl AsRef<Path>) -> bool {
        self.ignore.is_ignored(path)
    }

    /// The compiled ignore matcher
    pub fn ignore(&self) -> &IgnoreMatcher {
        &self.ignore
    }

    /// Overrides in listed order
    pub fn overrides(&self) -> &[ResolvedOverride] {
        &self.overrides
    }

    /// Effective rules for a specific path.
    ///
    /// Starts from the merged base mapping and applies every override
    /// whose patterns match the path, in listed order; later overrides
    /// win on shared keys.
    pub fn rules_for_path(&self, path: impl AsRef<Path>) -> IndexMap<String, RuleSetting> {
        let path = path.as_ref();
        let mut rules = self.rules.clone();

        for entry in &self.overrides {
            if entry.applies_to(path) {
                merge_rules(&mut rules, entry.rules.clone());
            }
        }

        rules
    }
}

/// Working state accumulated while walking an extends chain
#[derive(Default)]
struct Accumulator {
    environment: BTreeMap<String, bool>,
    parser_options: Option<ParserOptions>,
    plugins: Vec<String>,
    rules: IndexMap<String, RuleSetting>,
    globals: IndexMap<String, GlobalAccess>,
    ignore_patterns: Vec<String>,
    overrides: Vec<OverrideConfig>,
}

/// Named rule-set configurations, resolvable by profile name
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    profiles: IndexMap<String, ProfileConfig>,
}

impl ConfigRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry from a profile mapping
    pub fn from_profiles(profiles: IndexMap<String, ProfileConfig>) -> Self {
        Self { profiles }
    }

    /// Insert or replace a profile
    pub fn insert(&mut self, name: impl Into<String>, profile: ProfileConfig) {
        self.profiles.insert(name.into(), profile);
    }

    /// True if a profile with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.profiles.contains_key(name)
    }

    /// Profile names in declaration order
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// The raw declaration of a profile, if present
    pub fn get(&self, name: &str) -> Option<&ProfileConfig> {
        self.profiles.get(name)
    }

    /// Resolve a named profile into a self-contained configuration.
    ///
    /// Pure read: repeated calls yield structurally identical results.
    /// Fails with `UnknownProfile` when the profile or any transitive base
    /// does not exist, `CyclicExtends` when the extends chain loops,
    /// `InvalidRuleLevel`/`InvalidRuleOptions` for bad rule declarations
    /// anywhere in the chain, and `MalformedGlob` for patterns that do not
    /// compile. All of these are detected here, before any file is
    /// evaluated.
    pub fn resolve(&self, name: &str) -> Result<ResolvedProfile> {
        if name.trim().is_empty() {
            return Err(LintrcError::config_error("profile name must not be empty"));
        }

        tracing::debug!("Resolving profile '{name}'");

        let mut acc = Accumulator::default();
        let mut stack = Vec::new();
        self.merge_into(name, &mut stack, &mut acc)?;

        let ignore = IgnoreMatcher::compile(name, &acc.ignore_patterns)?;

        let mut overrides = Vec::with_capacity(acc.overrides.len());
        for entry in &acc.overrides {
            let patterns = compile_override_patterns(name, &entry.files)?;
            let mut rules = IndexMap::with_capacity(entry.rules.len());
            for (rule, raw) in &entry.rules {
                rules.insert(rule.clone(), RuleSetting::parse(name, rule, raw)?);
            }
            overrides.push(ResolvedOverride {
                files: entry.files.clone(),
                patterns,
                rules,
            });
        }

        Ok(ResolvedProfile {
            name: name.to_string(),
            environment: acc.environment,
            parser_options: acc.parser_options.unwrap_or_default(),
            plugins: acc.plugins,
            rules: acc.rules,
            globals: acc.globals,
            ignore,
            overrides,
        })
    }

    /// Merge one profile (bases first, own declarations on top) into the
    /// accumulator. `stack` holds the names currently being resolved and
    /// detects cycles.
    fn merge_into(
        &self,
        name: &str,
        stack: &mut Vec<String>,
        acc: &mut Accumulator,
    ) -> Result<()> {
        if stack.iter().any(|visited| visited == name) {
            let mut chain = stack.join(" -> ");
            chain.push_str(" -> ");
            chain.push_str(name);
            return Err(LintrcError::cyclic_extends(chain));
        }

        let profile = self
            .profiles
            .get(name)
            .ok_or_else(|| LintrcError::unknown_profile(name))?;

        stack.push(name.to_string());

        if let Some(extends) = &profile.extends {
            for base in extends {
                self.merge_into(base, stack, acc)?;
            }
        }

        if let Some(env) = &profile.env {
            merge_environment(&mut acc.environment, env.clone());
        }

        if let Some(parser_options) = profile.parser_options {
            acc.parser_options = Some(parser_options);
        }

        if let Some(plugins) = &profile.plugins {
            for plugin in plugins {
                if !acc.plugins.contains(plugin) {
                    acc.plugins.push(plugin.clone());
                }
            }
        }

        if let Some(rules) = &profile.rules {
            let mut validated = IndexMap::with_capacity(rules.len());
            for (rule, raw) in rules {
                validated.insert(rule.clone(), RuleSetting::parse(name, rule, raw)?);
            }
            merge_rules(&mut acc.rules, validated);
        }

        if let Some(globals) = &profile.globals {
            merge_globals(&mut acc.globals, globals.clone());
        }

        if let Some(patterns) = &profile.ignore_patterns {
            for pattern in patterns {
                if !acc.ignore_patterns.contains(pattern) {
                    acc.ignore_patterns.push(pattern.clone());
                }
            }
        }

        if let Some(overrides) = &profile.overrides {
            acc.overrides.extend(overrides.iter().cloned());
        }

        stack.pop();
        Ok(())
    }
}
