//! Merge logic for profile resolution
//!
//! Resolution accumulates bases bottom-up: each source merged is *later*
//! in precedence than what the accumulator already holds, so entries from
//! the source overwrite entries already present. Key order of first
//! insertion is preserved so resolved output stays stable across calls.

use indexmap::IndexMap;
use std::collections::BTreeMap;

use super::profile::GlobalAccess;
use super::rule_options::RuleSetting;

/// Overlay a later rule mapping onto the accumulator (later wins)
pub(crate) fn merge_rules(
    target: &mut IndexMap<String, RuleSetting>,
    source: IndexMap<String, RuleSetting>,
) {
    for (rule, setting) in source {
        target.insert(rule, setting);
    }
}

/// Overlay a later globals mapping onto the accumulator (later wins)
pub(crate) fn merge_globals(
    target: &mut IndexMap<String, GlobalAccess>,
    source: IndexMap<String, GlobalAccess>,
) {
    for (name, access) in source {
        target.insert(name, access);
    }
}

/// Overlay later environment tags onto the accumulator (later wins)
pub(crate) fn merge_environment(
    target: &mut BTreeMap<String, bool>,
    source: BTreeMap<String, bool>,
) {
    for (tag, enabled) in source {
        target.insert(tag, enabled);
    }
}
