// src/api/client.rs
// =============================================================================
// HTTP client for the directory backend.
//
// Endpoints:
//   GET  /api/agents          -> all approved entries
//   GET  /api/agents/{id}     -> one entry, 404 when unknown or not approved
//   POST /api/submit-agent    -> queue a new entry for review
//
// The backend owns validation and storage; we only send requests and turn
// the answers into Agent records or ApiError values.
// =============================================================================

use reqwest::{Client, StatusCode};
use tracing::{debug, info};
use url::Url;

use super::models::{Agent, ErrorBody, Submission, SubmitAck};
use crate::directory::ensure_logo;
use crate::error::ApiError;

#[derive(Debug, Clone)]
pub struct DirectoryClient {
    client: Client,
    base_url: Url,
}

impl DirectoryClient {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    // Fetches every entry; entries without a logo get a generated one
    pub async fn list_agents(&self) -> Result<Vec<Agent>, ApiError> {
        let url = self.endpoint(&["api", "agents"])?;
        info!(%url, "fetching directory listing");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status().as_u16()));
        }

        let mut agents: Vec<Agent> = response.json().await?;
        agents.iter_mut().for_each(ensure_logo);
        debug!(count = agents.len(), "directory listing loaded");

        Ok(agents)
    }

    pub async fn get_agent(&self, id: &str) -> Result<Agent, ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::MissingId);
        }

        // path segments are percent-encoded by the url crate
        let url = self.endpoint(&["api", "agents", id])?;
        info!(%url, "fetching directory entry");

        let response = self.client.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status if !status.is_success() => Err(ApiError::Status(status.as_u16())),
            _ => {
                let mut agent: Agent = response.json().await?;
                ensure_logo(&mut agent);
                Ok(agent)
            }
        }
    }

    // Posts a submission
    //
    // On rejection the backend usually explains itself in { "message": ... };
    // when it doesn't (or the body isn't JSON) we fall back to the status code
    pub async fn submit_agent(&self, submission: &Submission) -> Result<SubmitAck, ApiError> {
        let url = self.endpoint(&["api", "submit-agent"])?;
        info!(%url, name = %submission.name, "submitting entry");

        let response = self.client.post(url).json(submission).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message)
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| ApiError::Status(status.as_u16()).to_string());
            return Err(ApiError::Rejected(message));
        }

        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::BaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
