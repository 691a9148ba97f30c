// src/error.rs
// =============================================================================
// Typed errors for the two places we talk to the network:
// - ApiError: the directory backend (listing, detail, submission)
// - DocumentError: the README resolver
//
// Both render as human-readable messages because every one of them ends up
// printed to the user. main.rs wraps them in anyhow when they are fatal.
// =============================================================================

use thiserror::Error;

/// Failures of the directory backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// `show` was called with an empty id; no request is made
    #[error("No agent ID provided.")]
    MissingId,

    /// The backend answered 404 for a single entry
    #[error("Agent not found or not approved.")]
    NotFound,

    /// Any other non-2xx answer
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// The backend refused a submission and told us why
    #[error("{0}")]
    Rejected(String),

    /// The configured base URL cannot have path segments appended
    #[error("API base URL cannot be used for requests: {0}")]
    BaseUrl(String),

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Why a README could not be loaded.
///
/// "Not a repository link" is deliberately absent: that outcome is a skip,
/// modelled as `DocumentFetchResult::NotApplicable`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("Failed to fetch README from {url}. Status: {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to fetch README from {url}: {reason}")]
    Transport { url: String, reason: String },

    /// Every conventional branch was tried without success
    #[error("Could not find README.md in common branches ({}).", .tried.join("/"))]
    NoReadme { tried: Vec<String> },
}
