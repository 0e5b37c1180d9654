use super::{classify_backend_error, Submission, SubmissionError, SubmissionGateway};
use crate::config::BackendSettings;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PostgrestGateway {
    api_base: String,
    anon_key: String,
    table: String,
    timeout: Duration,
}

impl PostgrestGateway {
    pub fn new(backend: &BackendSettings) -> Self {
        Self {
            api_base: backend.url.clone(),
            anon_key: backend.anon_key.clone(),
            table: backend.table.clone(),
            timeout: Duration::from_secs(backend.timeout_secs),
        }
    }

    pub fn endpoint(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.api_base.trim_end_matches('/'),
            self.table
        )
    }
}

impl SubmissionGateway for PostgrestGateway {
    fn submit(&self, submission: &Submission) -> Result<(), SubmissionError> {
        let body = serde_json::to_value([submission])
            .map_err(|e| SubmissionError::Other(e.to_string()))?;

        let result = ureq::post(&self.endpoint())
            .timeout(self.timeout)
            .set("apikey", &self.anon_key)
            .set("Authorization", &format!("Bearer {}", self.anon_key))
            .set("Prefer", "return=minimal")
            .send_json(body);

        match result {
            Ok(_) => Ok(()),
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(classify_backend_error(status, &body))
            }
            Err(err) => Err(SubmissionError::Other(err.to_string())),
        }
    }
}
