// src/directory/filter.rs
// =============================================================================
// Category and text filtering for the list view.
//
// Both filters are optional and combine with AND:
// - category: exact match against one of the entry's categories
// - search: case-insensitive substring of the name or the description,
//   used as typed (whitespace is not trimmed)
//
// The order of the input is preserved.
// =============================================================================

use std::collections::BTreeSet;

use crate::api::Agent;

/// All categories used by any agent, sorted and without duplicates
pub fn unique_categories(agents: &[Agent]) -> Vec<String> {
    agents
        .iter()
        .flat_map(|agent| agent.category.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn filter_agents<'a>(agents: &'a [Agent], category: Option<&str>, search: &str) -> Vec<&'a Agent> {
    let needle = search.to_lowercase();

    agents
        .iter()
        .filter(|agent| match category {
            Some(selected) => agent.category.iter().any(|c| c == selected),
            None => true,
        })
        .filter(|agent| {
            needle.is_empty()
                || agent.name.to_lowercase().contains(&needle)
                || agent.description.to_lowercase().contains(&needle)
        })
        .collect()
}
