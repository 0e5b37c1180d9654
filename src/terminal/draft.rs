use super::selection::WORKSHOP_CHOICES;
use crate::gateway::Submission;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Email,
    GithubUrl,
    WebsiteUrl,
}

impl DraftField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::GithubUrl => "github_url",
            Self::WebsiteUrl => "website_url",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "email address",
            Self::GithubUrl => "GitHub URL",
            Self::WebsiteUrl => "website URL",
        }
    }

    pub fn recorded_line(self) -> &'static str {
        match self {
            Self::Email => "✓ Email recorded",
            Self::GithubUrl => "✓ GitHub repository recorded",
            Self::WebsiteUrl => "✓ Website recorded",
        }
    }
}

impl std::fmt::Display for DraftField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionDraft {
    pub email: String,
    pub github_url: String,
    pub website_url: String,
    pub workshop: String,
}

impl Default for SubmissionDraft {
    fn default() -> Self {
        Self {
            email: String::new(),
            github_url: String::new(),
            website_url: String::new(),
            workshop: WORKSHOP_CHOICES[0].to_string(),
        }
    }
}

impl SubmissionDraft {
    pub fn set(&mut self, field: DraftField, value: &str) {
        let slot = match field {
            DraftField::Email => &mut self.email,
            DraftField::GithubUrl => &mut self.github_url,
            DraftField::WebsiteUrl => &mut self.website_url,
        };
        *slot = value.to_string();
    }

    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Email => &self.email,
            DraftField::GithubUrl => &self.github_url,
            DraftField::WebsiteUrl => &self.website_url,
        }
    }

    pub fn to_submission(&self) -> Submission {
        Submission {
            email: self.email.clone(),
            github_url: self.github_url.clone(),
            website_url: self.website_url.clone(),
            workshop: Some(self.workshop.clone()),
        }
    }
}
