use super::buffer::{LineCategory, TerminalLine};
use super::draft::SubmissionDraft;
use super::script::{ScriptStep, ScriptedSequence, SequenceCompletion};
use std::time::Duration;

pub const BOOT_CADENCE: Duration = Duration::from_millis(300);
pub const WELCOME_CADENCE: Duration = Duration::from_millis(150);
pub const PHASE_HANDOFF_PAUSE: Duration = Duration::from_millis(500);
pub const AFTERMATH_LEAD_IN: Duration = Duration::from_millis(1000);
pub const AFTERMATH_FAST_CADENCE: Duration = Duration::from_millis(200);
pub const AFTERMATH_SLOW_CADENCE: Duration = Duration::from_millis(400);
const AFTERMATH_FAST_LINES: usize = 12;
const AFTERMATH_ALARM_LINES: std::ops::RangeInclusive<usize> = 2..=11;

pub const EMAIL_PROMPT: &str = "Enter your email:";
pub const GITHUB_PROMPT: &str = "Enter your GitHub repository URL:";
pub const WEBSITE_PROMPT: &str = "Enter your deployed website URL:";
pub const WORKSHOP_PROMPT: &str = "Select your workshop (↑/↓ to move, Enter to confirm):";
pub const CONFIRM_PROMPT: &str = "Confirm submission? (oui/non)";
pub const TRANSMITTING_LINE: &str = "Transmitting data...";
pub const CANCELLED_LINE: &str = "✗ Submission cancelled.";

const BANNER_WIDTH: usize = 39;
const SUMMARY_RULE: &str = "═══════════════════════════════════════";

const BOOT_LINES: [&str; 7] = [
    "PORTAIL BIOS v2.4.1",
    "Checking memory................ OK",
    "Loading kernel modules......... OK",
    "Mounting /dev/students......... OK",
    "Starting network interface..... OK",
    "Establishing secure channel.... OK",
    "System ready.",
];

const AFTERMATH_LINES: [&str; 18] = [
    "Handshake accepted by remote host.",
    "Syncing payload with mainframe...",
    "WARNING: unauthorized access detected",
    "FIREWALL BREACH IN SECTOR 7",
    "Tracing connection origin... 192.168.0.42",
    "ALERT: intrusion countermeasures engaged",
    "Encrypting student records...",
    "ERROR: kernel panic in module portail.ko",
    "Rerouting through proxy chain...",
    "ACCESS DENIED ACCESS DENIED ACCESS DENIED",
    "Self-destruct sequence armed",
    "3... 2... 1...",
    "",
    "Just kidding. Everything is fine.",
    "Your submission is safe and sound.",
    "",
    "Thank you and good luck!",
    "Press Enter to start a new session.",
];

fn banner_row(text: &str) -> String {
    format!("║{text:^width$}║", width = BANNER_WIDTH)
}

pub fn boot_sequence() -> ScriptedSequence {
    ScriptedSequence::uniform(
        BOOT_LINES.iter().map(|line| TerminalLine::system(*line)),
        BOOT_CADENCE,
        PHASE_HANDOFF_PAUSE,
        SequenceCompletion::EnterWelcome,
    )
}

pub fn welcome_lines() -> Vec<TerminalLine> {
    let rule = "═".repeat(BANNER_WIDTH);
    vec![
        TerminalLine::blank(),
        TerminalLine::system(format!("╔{rule}╗")),
        TerminalLine::system(banner_row("")),
        TerminalLine::system(banner_row("PORTAIL ÉTUDIANT")),
        TerminalLine::system(banner_row("Project submission terminal")),
        TerminalLine::system(banner_row("")),
        TerminalLine::system(format!("╚{rule}╝")),
        TerminalLine::blank(),
        TerminalLine::system("Submit your project information for review."),
    ]
}

pub fn welcome_sequence() -> ScriptedSequence {
    ScriptedSequence::uniform(
        welcome_lines(),
        WELCOME_CADENCE,
        PHASE_HANDOFF_PAUSE,
        SequenceCompletion::EnterEmail,
    )
}

pub fn aftermath_line_category(index: usize) -> LineCategory {
    if AFTERMATH_ALARM_LINES.contains(&index) {
        LineCategory::Error
    } else {
        LineCategory::System
    }
}

pub fn aftermath_sequence() -> ScriptedSequence {
    let steps = AFTERMATH_LINES
        .iter()
        .enumerate()
        .map(|(idx, text)| ScriptStep {
            line: TerminalLine::new(*text, aftermath_line_category(idx)),
            delay: if idx < AFTERMATH_FAST_LINES {
                AFTERMATH_FAST_CADENCE
            } else {
                AFTERMATH_SLOW_CADENCE
            },
        })
        .collect();
    ScriptedSequence::new(steps, PHASE_HANDOFF_PAUSE, SequenceCompletion::EnterComplete)
        .with_lead_in(AFTERMATH_LEAD_IN)
}

pub fn submission_success_lines() -> Vec<TerminalLine> {
    vec![
        TerminalLine::success("✓ Transmission complete."),
        TerminalLine::success("✓ Your submission has been recorded successfully!"),
    ]
}

pub fn summary_block(draft: &SubmissionDraft) -> Vec<TerminalLine> {
    vec![
        TerminalLine::system(SUMMARY_RULE),
        TerminalLine::system("RÉCAPITULATIF DES INFORMATIONS"),
        TerminalLine::system(SUMMARY_RULE),
        TerminalLine::system(format!("Email:        {}", draft.email)),
        TerminalLine::system(format!("GitHub:       {}", draft.github_url)),
        TerminalLine::system(format!("Site Web:     {}", draft.website_url)),
        TerminalLine::system(format!("Workshop:     {}", draft.workshop)),
        TerminalLine::system(SUMMARY_RULE),
    ]
}
