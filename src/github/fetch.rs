// src/github/fetch.rs
// =============================================================================
// This module resolves a repository link into README text.
//
// Strategy:
// - Parse the link (see source.rs). Unsupported links are skipped without
//   touching the network.
// - A link to a specific file is fetched once from its raw-content URL.
// - A link to a repository is tried as <branch>/README.md for "main", then
//   "master". The first success wins.
//
// Requests are strictly sequential: a branch is only tried after the
// previous request finished. Nothing is cached, so calling resolve() twice
// repeats the same requests.
//
// Rust concepts:
// - Enums with data: DocumentFetchResult has exactly one of three states
// - async functions: For network I/O
// - Early return from a loop: The first successful branch stops the search
// =============================================================================

use reqwest::Client;
use tracing::{debug, warn};

use super::source::{FileMode, RepoLocation, SourceHost, DEFAULT_BRANCHES};
use crate::error::DocumentError;

/// Outcome of resolving one repository link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFetchResult {
    /// README text, exactly as served
    Content(String),
    /// The link was a repository link but no README could be loaded
    Error(DocumentError),
    /// The link is not a supported repository link; nothing was requested
    NotApplicable,
}

/// Finds and downloads the README behind a repository link.
///
/// Stateless apart from its HTTP client; the client is cheap to clone
/// because reqwest keeps its connection pool behind an Arc.
#[derive(Debug, Clone)]
pub struct DocumentResolver {
    client: Client,
    host: SourceHost,
}

impl DocumentResolver {
    pub fn new(client: Client, host: SourceHost) -> Self {
        Self { client, host }
    }

    // Resolves a repository link into a DocumentFetchResult
    //
    // The mode (direct file or repository root) is decided once from the
    // link and never mixed: a failed direct file does not fall back to the
    // branch search, and vice versa.
    pub async fn resolve(&self, reference: &str) -> DocumentFetchResult {
        let Some(location) = RepoLocation::parse(reference, &self.host.web_host) else {
            debug!(reference, "not a supported repository link, skipping README");
            return DocumentFetchResult::NotApplicable;
        };

        let raw_base = self.host.raw_base.trim_end_matches('/');

        match &location.mode {
            FileMode::DirectFile { raw_path } => {
                self.fetch_direct(&format!("{}/{}", raw_base, raw_path)).await
            }
            FileMode::RepositoryRoot => {
                self.fetch_from_default_branches(&location.candidate_urls(raw_base))
                    .await
            }
        }
    }

    async fn fetch_direct(&self, raw_url: &str) -> DocumentFetchResult {
        if !raw_url.to_lowercase().ends_with(".md") {
            debug!(raw_url, "direct link is not a Markdown file, fetching anyway");
        }

        match fetch_file(&self.client, raw_url).await {
            Ok(text) => DocumentFetchResult::Content(text),
            Err(e) => {
                warn!(error = %e, "could not load README from direct link");
                DocumentFetchResult::Error(e)
            }
        }
    }

    // Tries each candidate in order; any failure (status or transport)
    // just moves on to the next branch
    async fn fetch_from_default_branches(&self, candidates: &[String]) -> DocumentFetchResult {
        for (branch, url) in DEFAULT_BRANCHES.iter().zip(candidates) {
            debug!(url = %url, "trying README candidate");

            match fetch_file(&self.client, url).await {
                Ok(text) => return DocumentFetchResult::Content(text),
                Err(e) => debug!(branch, error = %e, "README candidate failed"),
            }
        }

        warn!(candidates = candidates.len(), "no README found on any default branch");
        DocumentFetchResult::Error(DocumentError::NoReadme {
            tried: DEFAULT_BRANCHES.iter().map(|b| b.to_string()).collect(),
        })
    }
}

// Fetches content from a URL
//
// Returns the body verbatim on a 2xx answer, otherwise an error that says
// whether the server answered (status) or the request never completed
async fn fetch_file(client: &Client, url: &str) -> Result<String, DocumentError> {
    let transport = |e: reqwest::Error| DocumentError::Transport {
        url: url.to_string(),
        reason: e.to_string(),
    };

    let response = client.get(url).send().await.map_err(transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(DocumentError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(transport)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is let-else?
//    - `let Some(x) = expr else { ... };` binds x if the pattern matches
//    - Otherwise the else block runs, and it must leave the function
//      (return, break, continue or panic)
//    - It keeps the "happy path" unindented
//
// 2. Why zip()?
//    - DEFAULT_BRANCHES and candidates have the same order and length
//    - zip() walks both at once, giving (branch, url) pairs
//    - The branch name is only needed for the log line
//
// 3. Why a closure for the transport error?
//    - Both send() and text() can fail with a reqwest::Error
//    - The closure captures `url` so both failures carry it
// -----------------------------------------------------------------------------
