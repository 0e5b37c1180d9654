use serde::{Deserialize, Serialize};

pub mod postgrest;

pub use postgrest::PostgrestGateway;

pub const UNIQUE_VIOLATION_CODE: &str = "23505";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("a submission already exists for this email")]
    Duplicate,
    #[error("submission failed: {0}")]
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub email: String,
    pub github_url: String,
    pub website_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workshop: Option<String>,
}

pub trait SubmissionGateway: Send + Sync {
    fn submit(&self, submission: &Submission) -> Result<(), SubmissionError>;
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BackendErrorBody {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

pub fn classify_backend_error(status: u16, body: &str) -> SubmissionError {
    let parsed: BackendErrorBody = serde_json::from_str(body).unwrap_or_default();
    if parsed.code.as_deref() == Some(UNIQUE_VIOLATION_CODE) {
        return SubmissionError::Duplicate;
    }
    let detail = parsed
        .message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| body.trim().to_string());
    if detail.is_empty() {
        SubmissionError::Other(format!("backend responded with status {status}"))
    } else {
        SubmissionError::Other(format!("backend responded with status {status}: {detail}"))
    }
}
