// src/detail/mod.rs
// =============================================================================
// Detail-view logic: one entry plus its README.
//
// Submodules:
// - panel: state of the documentation section (tickets drop stale results)
// - render: text / HTML / JSON output of the entry and its documentation
// =============================================================================

mod panel;
mod render;

pub use panel::DocumentPanel;
pub use render::{render_agent, render_documentation, DocumentReport, ReadmeFormat};
