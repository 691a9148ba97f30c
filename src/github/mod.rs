// src/github/mod.rs
// =============================================================================
// This module locates and downloads README files of hosted repositories.
//
// Currently implements:
// - Recognising repository links (owner/project, direct file or root)
// - Guessing README.md under the conventional default branches
// - Using raw.githubusercontent.com to get file contents
//
// Any host with the same URL layout works: the web host and the raw-content
// base are both configurable (see config.rs).
// =============================================================================

mod fetch;
mod source;

pub use fetch::{DocumentFetchResult, DocumentResolver};
pub use source::{RepoLocation, SourceHost};
