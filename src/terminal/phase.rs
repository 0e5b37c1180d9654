#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Boot,
    Welcome,
    Email,
    Github,
    Website,
    Workshop,
    Confirm,
    Submitting,
    Complete,
}

pub const ALL_PHASES: [Phase; 9] = [
    Phase::Boot,
    Phase::Welcome,
    Phase::Email,
    Phase::Github,
    Phase::Website,
    Phase::Workshop,
    Phase::Confirm,
    Phase::Submitting,
    Phase::Complete,
];

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::Welcome => "welcome",
            Self::Email => "email",
            Self::Github => "github",
            Self::Website => "website",
            Self::Workshop => "workshop",
            Self::Confirm => "confirm",
            Self::Submitting => "submitting",
            Self::Complete => "complete",
        }
    }

    pub fn status_label(self) -> &'static str {
        match self {
            Self::Boot | Self::Welcome => "INITIALIZING...",
            Self::Email => "COLLECTING DATA [1/4]",
            Self::Github => "COLLECTING DATA [2/4]",
            Self::Website => "COLLECTING DATA [3/4]",
            Self::Workshop => "COLLECTING DATA [4/4]",
            Self::Confirm | Self::Submitting => "AWAITING TRANSMISSION",
            Self::Complete => "SESSION COMPLETE",
        }
    }

    pub fn accepts_text(self) -> bool {
        matches!(
            self,
            Self::Email | Self::Github | Self::Website | Self::Confirm | Self::Complete
        )
    }

    pub fn is_interactive(self) -> bool {
        self.accepts_text() || self == Self::Workshop
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn status_strip_has_seven_distinct_labels() {
        let labels: BTreeSet<&str> = ALL_PHASES.iter().map(|p| p.status_label()).collect();
        assert_eq!(labels.len(), 7);
        assert_eq!(Phase::Workshop.status_label(), "COLLECTING DATA [4/4]");
    }

    #[test]
    fn scripted_phases_do_not_accept_input() {
        for phase in [Phase::Boot, Phase::Welcome, Phase::Submitting] {
            assert!(!phase.is_interactive(), "{phase} should be non-interactive");
        }
        assert!(Phase::Workshop.is_interactive());
        assert!(!Phase::Workshop.accepts_text());
    }
}
