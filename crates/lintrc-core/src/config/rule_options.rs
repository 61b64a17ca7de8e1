//! Typed option schemas for rules that carry options
//!
//! Rule entries written as `[level, options...]` carry a rule-specific
//! payload. Rules with a registered schema get their payload parsed into a
//! typed variant here, so a bad payload fails at load time instead of when
//! the external tool first evaluates the rule. Rules without a schema
//! (plugin rules the registry has never seen) keep the raw payload.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::profile::{RuleEntry, RuleLevel};
use crate::error::LintrcError;
use crate::result::Result;

/// Semicolon policy for the `semi` rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SemiStyle {
    /// Require a terminating semicolon
    Always,
    /// Forbid unnecessary semicolons
    Never,
}

/// Quote style for the `quotes` rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// Single quotes
    Single,
    /// Double quotes
    Double,
    /// Backtick template literals
    Backtick,
}

/// Validated option payload for a rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleOptions {
    /// `semi`: semicolon policy
    Semi(SemiStyle),
    /// `quotes`: quote style
    Quotes(QuoteStyle),
    /// No registered schema; payload kept as written
    Raw(Vec<serde_json::Value>),
}

/// A validated rule declaration: level plus optional typed options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RuleSetting {
    /// Enforcement level
    pub level: RuleLevel,
    /// Options following the level token, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<RuleOptions>,
}

impl RuleSetting {
    /// Construct a bare setting with no options
    pub fn new(level: RuleLevel) -> Self {
        Self {
            level,
            options: None,
        }
    }

    /// Validate a raw rule entry into a setting.
    ///
    /// `profile` and `rule` are carried into any error so failures name
    /// the offending key.
    pub fn parse(profile: &str, rule: &str, entry: &RuleEntry) -> Result<Self> {
        let token = entry
            .level_token()
            .ok_or_else(|| LintrcError::invalid_rule_level(profile, rule, "(missing)"))?;

        let level = RuleLevel::from_token(token)
            .ok_or_else(|| LintrcError::invalid_rule_level(profile, rule, token.to_string()))?;

        let payload = entry.option_payload();
        let options = if payload.is_empty() {
            None
        } else {
            Some(parse_options(profile, rule, payload)?)
        };

        Ok(Self { level, options })
    }
}

/// Parse an option payload against the rule's registered schema
fn parse_options(profile: &str, rule: &str, payload: &[serde_json::Value]) -> Result<RuleOptions> {
    match rule {
        "semi" => {
            let style = single_option::<SemiStyle>(profile, rule, payload)?;
            Ok(RuleOptions::Semi(style))
        }
        "quotes" => {
            let style = single_option::<QuoteStyle>(profile, rule, payload)?;
            Ok(RuleOptions::Quotes(style))
        }
        _ => Ok(RuleOptions::Raw(payload.to_vec())),
    }
}

/// Parse a schema that takes exactly one positional option
fn single_option<T>(profile: &str, rule: &str, payload: &[serde_json::Value]) -> Result<T>
where
    T: serde::de::DeserializeOwned,
{
    if payload.len() != 1 {
        return Err(LintrcError::invalid_rule_options(
            profile,
            rule,
            format!("expected exactly one option, got {}", payload.len()),
        ));
    }

    serde_json::from_value(payload[0].clone())
        .map_err(|e| LintrcError::invalid_rule_options(profile, rule, e.to_string()))
}
