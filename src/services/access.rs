//! Permission predicate for starting runs

use std::collections::HashSet;

/// Split a comma separated allow-list, dropping blank entries
pub fn parse_allow_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

/// Whether a caller holding `roles` may start a run
///
/// An empty allow-list lets everyone through.
pub fn is_allowed(roles: &HashSet<String>, allow_list: &[String]) -> bool {
    allow_list.is_empty() || allow_list.iter().any(|id| roles.contains(id))
}
