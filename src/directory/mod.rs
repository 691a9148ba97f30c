// src/directory/mod.rs
// =============================================================================
// List-view logic: what the home page of the directory does with the
// entries it downloads.
//
// Submodules:
// - filter: category list, category filter and text search
// - logo: default initials logos for entries without one
// =============================================================================

mod filter;
mod logo;

pub use filter::{filter_agents, unique_categories};
pub use logo::{default_logo, ensure_logo};
