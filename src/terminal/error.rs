use super::draft::DraftField;
use crate::gateway::SubmissionError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("✗ Invalid {field}. Please try again.")]
    Validation { field: DraftField },
    #[error("✗ This email has already been submitted.")]
    DuplicateSubmission,
    #[error("✗ An error occurred. Please try again.")]
    TransportOrOther(String),
    #[error("✗ Invalid answer, type oui/non")]
    InvalidConfirmationAnswer,
}

impl From<SubmissionError> for WizardError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Duplicate => Self::DuplicateSubmission,
            SubmissionError::Other(reason) => Self::TransportOrOther(reason),
        }
    }
}
