//! Built-in profiles
//!
//! Three profiles ship with the registry: `recommended`, the shared base
//! carrying core correctness rules, and the two concrete profiles layered
//! on top of it — `default` for general style and quality, `security` for
//! hardening namespaced `security/*` checks plus the dynamic-code bans.

use indexmap::IndexMap;
use std::collections::BTreeMap;

use super::profile::{
    EcmaVersion, EcmaVersionKeyword, GlobalAccess, OverrideConfig, ParserOptions, ProfileConfig,
    RuleEntry, RuleLevel, RuleMap, SourceType,
};
use super::registry::ConfigRegistry;

/// Name of the shared base profile
pub const RECOMMENDED: &str = "recommended";
/// Name of the general style/quality profile
pub const DEFAULT: &str = "default";
/// Name of the security-focused profile
pub const SECURITY: &str = "security";

fn with_option(level: RuleLevel, option: &str) -> RuleEntry {
    RuleEntry::WithOptions(vec![
        serde_json::Value::String(level.to_string()),
        serde_json::Value::String(option.to_string()),
    ])
}

fn rule_map(entries: &[(&str, RuleEntry)]) -> RuleMap {
    entries
        .iter()
        .map(|(name, entry)| (name.to_string(), entry.clone()))
        .collect()
}

fn env(tags: &[&str]) -> BTreeMap<String, bool> {
    tags.iter().map(|tag| (tag.to_string(), true)).collect()
}

/// The node globals both concrete profiles recognize, all readonly
fn node_globals() -> IndexMap<String, GlobalAccess> {
    [
        "console",
        "process",
        "Buffer",
        "__dirname",
        "__filename",
        "module",
        "require",
        "exports",
        "global",
    ]
    .iter()
    .map(|name| (name.to_string(), GlobalAccess::Readonly))
    .collect()
}

fn recommended_profile() -> ProfileConfig {
    ProfileConfig {
        rules: Some(rule_map(&[
            ("no-unused-vars", RuleLevel::Error.into()),
            ("no-undef", RuleLevel::Error.into()),
            ("no-dupe-keys", RuleLevel::Error.into()),
            ("no-unreachable", RuleLevel::Error.into()),
            ("no-const-assign", RuleLevel::Error.into()),
        ])),
        ..ProfileConfig::default()
    }
}

fn default_profile() -> ProfileConfig {
    ProfileConfig {
        env: Some(env(&["node", "es2021"])),
        parser_options: Some(ParserOptions {
            ecma_version: Some(EcmaVersion::Year(2021)),
            source_type: Some(SourceType::Commonjs),
        }),
        extends: Some(vec![RECOMMENDED.to_string()]),
        rules: Some(rule_map(&[
            ("no-console", RuleLevel::Warn.into()),
            ("no-unused-vars", RuleLevel::Error.into()),
            ("no-undef", RuleLevel::Error.into()),
            ("semi", with_option(RuleLevel::Error, "always")),
            ("quotes", with_option(RuleLevel::Error, "single")),
        ])),
        ignore_patterns: Some(vec![
            "node_modules/".to_string(),
            "dist/".to_string(),
            "build/".to_string(),
            "templates/".to_string(),
            "*.min.js".to_string(),
        ]),
        overrides: Some(vec![OverrideConfig {
            // Tooling scripts keep the base rules; the entry exists so
            // the directory is explicitly in scope despite its leading dot.
            files: vec![".claude/**/*.js".to_string()],
            rules: RuleMap::new(),
        }]),
        globals: Some(node_globals()),
        ..ProfileConfig::default()
    }
}

fn security_profile() -> ProfileConfig {
    ProfileConfig {
        env: Some(env(&["node", "es2022"])),
        parser_options: Some(ParserOptions {
            ecma_version: Some(EcmaVersion::Keyword(EcmaVersionKeyword::Latest)),
            source_type: Some(SourceType::Module),
        }),
        extends: Some(vec![RECOMMENDED.to_string()]),
        plugins: Some(vec!["security".to_string()]),
        rules: Some(rule_map(&[
            ("security/detect-child-process", RuleLevel::Error.into()),
            ("security/detect-eval-with-expression", RuleLevel::Error.into()),
            (
                "security/detect-no-csrf-before-method-override",
                RuleLevel::Error.into(),
            ),
            ("security/detect-non-literal-fs-filename", RuleLevel::Warn.into()),
            ("security/detect-non-literal-regexp", RuleLevel::Warn.into()),
            ("security/detect-non-literal-require", RuleLevel::Error.into()),
            ("security/detect-object-injection", RuleLevel::Warn.into()),
            ("security/detect-possible-timing-attacks", RuleLevel::Warn.into()),
            ("security/detect-pseudoRandomBytes", RuleLevel::Error.into()),
            ("security/detect-unsafe-regex", RuleLevel::Error.into()),
            ("no-eval", RuleLevel::Error.into()),
            ("no-implied-eval", RuleLevel::Error.into()),
            ("no-new-func", RuleLevel::Error.into()),
            ("no-script-url", RuleLevel::Error.into()),
            ("prefer-const", RuleLevel::Error.into()),
            ("no-var", RuleLevel::Error.into()),
            ("eqeqeq", RuleLevel::Error.into()),
            ("no-unused-vars", RuleLevel::Error.into()),
            ("no-undef", RuleLevel::Error.into()),
        ])),
        globals: Some(node_globals()),
        ..ProfileConfig::default()
    }
}

impl ConfigRegistry {
    /// Registry pre-populated with the built-in profiles
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(RECOMMENDED, recommended_profile());
        registry.insert(DEFAULT, default_profile());
        registry.insert(SECURITY, security_profile());
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::rule_options::{QuoteStyle, RuleOptions, SemiStyle};

    #[test]
    fn test_builtin_profiles_resolve() {
        let registry = ConfigRegistry::builtin();
        for name in [RECOMMENDED, DEFAULT, SECURITY] {
            let resolved = registry.resolve(name).unwrap();
            assert_eq!(resolved.name(), name);
        }
    }

    #[test]
    fn test_default_inherits_recommended() {
        let registry = ConfigRegistry::builtin();
        let resolved = registry.resolve(DEFAULT).unwrap();

        // From the base
        assert_eq!(
            resolved.rules.get("no-dupe-keys").unwrap().level,
            RuleLevel::Error
        );
        // Own declarations
        assert_eq!(
            resolved.rules.get("no-console").unwrap().level,
            RuleLevel::Warn
        );
        assert_eq!(
            resolved.rules.get("semi").unwrap().options,
            Some(RuleOptions::Semi(SemiStyle::Always))
        );
        assert_eq!(
            resolved.rules.get("quotes").unwrap().options,
            Some(RuleOptions::Quotes(QuoteStyle::Single))
        );
    }

    #[test]
    fn test_default_ignore_patterns() {
        let registry = ConfigRegistry::builtin();
        let resolved = registry.resolve(DEFAULT).unwrap();

        assert!(resolved.is_ignored("node_modules/express/index.js"));
        assert!(resolved.is_ignored("dist/bundle.js"));
        assert!(resolved.is_ignored("vendor/jquery.min.js"));
        assert!(!resolved.is_ignored("src/index.js"));
    }

    #[test]
    fn test_default_override_targets_dot_claude() {
        let registry = ConfigRegistry::builtin();
        let resolved = registry.resolve(DEFAULT).unwrap();

        let overrides = resolved.overrides();
        assert_eq!(overrides.len(), 1);
        assert!(overrides[0].applies_to(".claude/hooks/check.js"));
        assert!(!overrides[0].applies_to("src/check.js"));
    }

    #[test]
    fn test_security_profile_contents() {
        let registry = ConfigRegistry::builtin();
        let resolved = registry.resolve(SECURITY).unwrap();

        assert_eq!(resolved.plugins, vec!["security"]);
        assert_eq!(
            resolved.rules.get("security/detect-unsafe-regex").unwrap().level,
            RuleLevel::Error
        );
        assert_eq!(
            resolved
                .rules
                .get("security/detect-object-injection")
                .unwrap()
                .level,
            RuleLevel::Warn
        );
        assert_eq!(resolved.rules.get("no-eval").unwrap().level, RuleLevel::Error);
        // Base correctness rules come along via extends
        assert_eq!(
            resolved.rules.get("no-unreachable").unwrap().level,
            RuleLevel::Error
        );
        assert_eq!(resolved.environment.get("es2022"), Some(&true));
        assert_eq!(
            resolved.globals.get("process"),
            Some(&GlobalAccess::Readonly)
        );
    }
}
