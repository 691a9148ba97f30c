// src/submit.rs
// =============================================================================
// The submission form: check the required fields locally, post the entry,
// and turn the answer into the message shown to the user.
//
// Required: name, website, description, logo, category.
// Optional: git repository, pricing, features.
// =============================================================================

use serde::Serialize;
use tracing::warn;

use crate::api::{DirectoryClient, Submission};

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields (*).";
pub const SUCCESS_MESSAGE: &str = "Agent submitted successfully! It will be reviewed shortly.";

/// What the form shows after pressing "submit"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitOutcome {
    pub success: bool,
    pub message: String,
}

// Returns the message to show when a required field is blank
pub fn validate(submission: &Submission) -> Result<(), &'static str> {
    let required = [
        &submission.name,
        &submission.website,
        &submission.description,
        &submission.logo,
        &submission.category,
    ];

    if required.iter().any(|field| field.trim().is_empty()) {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(())
}

// Validates, then posts; never fails, every problem becomes a message
pub async fn submit(client: &DirectoryClient, submission: &Submission) -> SubmitOutcome {
    if let Err(message) = validate(submission) {
        return SubmitOutcome {
            success: false,
            message: message.to_string(),
        };
    }

    match client.submit_agent(submission).await {
        Ok(_) => SubmitOutcome {
            success: true,
            message: SUCCESS_MESSAGE.to_string(),
        },
        Err(e) => {
            warn!(error = %e, "submission failed");
            SubmitOutcome {
                success: false,
                message: format!("Submission failed: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Client;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn complete() -> Submission {
        Submission {
            name: "Notes".into(),
            website: "https://notes.example.com".into(),
            description: "Take notes from your assistant".into(),
            logo: "https://notes.example.com/logo.png".into(),
            category: "Productivity".into(),
            ..Default::default()
        }
    }

    fn client_for(server: &MockServer) -> DirectoryClient {
        DirectoryClient::new(Client::new(), Url::parse(&server.uri()).unwrap())
    }

    #[test]
    fn test_validate_complete_form() {
        assert_eq!(validate(&complete()), Ok(()));
    }

    #[test]
    fn test_validate_blank_required_field() {
        let mut form = complete();
        form.logo = "   ".into();
        assert_eq!(validate(&form), Err(MISSING_FIELDS_MESSAGE));
    }

    #[tokio::test]
    async fn test_invalid_form_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let outcome = submit(&client_for(&server), &Submission::default()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, MISSING_FIELDS_MESSAGE);
    }

    #[tokio::test]
    async fn test_successful_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/submit-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
            .expect(1)
            .mount(&server)
            .await;

        let outcome = submit(&client_for(&server), &complete()).await;

        assert_eq!(
            outcome,
            SubmitOutcome {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
            }
        );
    }

    #[tokio::test]
    async fn test_rejected_submission() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/submit-agent"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({ "message": "Logo must be a URL" })))
            .mount(&server)
            .await;

        let outcome = submit(&client_for(&server), &complete()).await;

        assert!(!outcome.success);
        assert_eq!(outcome.message, "Submission failed: Logo must be a URL");
    }
}
