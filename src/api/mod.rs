// src/api/mod.rs
// =============================================================================
// This module talks to the directory backend.
//
// Submodules:
// - models: the JSON records (Agent, Logo, Submission, ...)
// - client: DirectoryClient with one method per endpoint
// =============================================================================

mod client;
mod models;

pub use client::DirectoryClient;
pub use models::{Agent, InitialsLogo, Logo, Submission};
