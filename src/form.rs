use crate::gateway::{Submission, SubmissionError};
use crate::terminal::validate::{is_valid_absolute_url, is_valid_email};

pub const SUBMISSION_ACCEPTED_MESSAGE: &str = "Votre soumission a été enregistrée avec succès!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub email: String,
    pub github_url: String,
    pub website_url: String,
    pub workshop: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Veuillez entrer une adresse email valide")]
    InvalidEmail,
    #[error("Veuillez entrer une URL GitHub valide")]
    InvalidGithubUrl,
    #[error("Veuillez entrer une URL de site web valide")]
    InvalidWebsiteUrl,
    #[error("Cet email a déjà été soumis")]
    Duplicate,
    #[error("Une erreur est survenue. Veuillez réessayer.")]
    Backend(String),
}

impl From<SubmissionError> for FormError {
    fn from(err: SubmissionError) -> Self {
        match err {
            SubmissionError::Duplicate => Self::Duplicate,
            SubmissionError::Other(reason) => Self::Backend(reason),
        }
    }
}

// Fields are checked in form order and the first failure wins.
pub fn validate_form(input: &FormInput) -> Result<Submission, FormError> {
    if !is_valid_email(&input.email) {
        return Err(FormError::InvalidEmail);
    }
    if !is_valid_absolute_url(&input.github_url) {
        return Err(FormError::InvalidGithubUrl);
    }
    if !is_valid_absolute_url(&input.website_url) {
        return Err(FormError::InvalidWebsiteUrl);
    }
    Ok(Submission {
        email: input.email.clone(),
        github_url: input.github_url.clone(),
        website_url: input.website_url.clone(),
        workshop: input
            .workshop
            .as_ref()
            .map(|w| w.trim().to_string())
            .filter(|w| !w.is_empty()),
    })
}

pub fn parse_form_args(args: &[String]) -> Result<FormInput, String> {
    let mut input = FormInput::default();
    let mut idx = 0;
    while idx < args.len() {
        let flag = args[idx].as_str();
        let value = args
            .get(idx + 1)
            .ok_or_else(|| format!("missing value for `{flag}`"))?
            .clone();
        match flag {
            "--email" => input.email = value,
            "--github" => input.github_url = value,
            "--website" => input.website_url = value,
            "--workshop" => input.workshop = Some(value),
            other => return Err(format!("unknown submit option `{other}`")),
        }
        idx += 2;
    }
    Ok(input)
}
