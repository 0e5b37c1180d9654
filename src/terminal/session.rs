use super::buffer::{BufferError, LineBuffer, TerminalLine};
use super::draft::{DraftField, SubmissionDraft};
use super::error::WizardError;
use super::phase::Phase;
use super::script::{SequenceCompletion, SequenceEvent, SequenceScheduler};
use super::scripts;
use super::selection::WorkshopSelector;
use super::validate::{is_valid_absolute_url, is_valid_email};
use crate::gateway::{Submission, SubmissionError};
use std::time::Instant;

const INPUT_ECHO_PREFIX: &str = "> ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    Insert(char),
    Backspace,
    Confirm,
    SelectPrev,
    SelectNext,
}

impl TerminalAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Insert(_) => "insert",
            Self::Backspace => "backspace",
            Self::Confirm => "confirm",
            Self::SelectPrev => "select_prev",
            Self::SelectNext => "select_next",
        }
    }
}

/// Work the session hands back to its driver. `Submit` is produced exactly
/// once per affirmative confirmation; the driver must answer it with
/// `finish_submission`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEffect {
    None,
    Submit(Submission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationAnswer {
    Yes,
    No,
}

impl ConfirmationAnswer {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "oui" | "o" | "y" | "yes" => Some(Self::Yes),
            "non" | "n" | "no" => Some(Self::No),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct TerminalSession {
    phase: Phase,
    draft: SubmissionDraft,
    input: String,
    buffer: LineBuffer,
    selector: WorkshopSelector,
    sequences: SequenceScheduler,
    submission_in_flight: bool,
}

impl Default for TerminalSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSession {
    pub fn new() -> Self {
        Self {
            phase: Phase::Boot,
            draft: SubmissionDraft::default(),
            input: String::new(),
            buffer: LineBuffer::new(),
            selector: WorkshopSelector::new(),
            sequences: SequenceScheduler::new(),
            submission_in_flight: false,
        }
    }

    pub fn start(&mut self, now: Instant) {
        self.set_phase(Phase::Boot);
        self.sequences.launch(scripts::boot_sequence(), now);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn selector(&self) -> WorkshopSelector {
        self.selector
    }

    pub fn is_sequence_running(&self) -> bool {
        self.sequences.is_running()
    }

    pub fn is_submission_in_flight(&self) -> bool {
        self.submission_in_flight
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.sequences.next_due()
    }

    pub fn tick(&mut self, now: Instant) {
        while let Some(event) = self.sequences.resume(now) {
            match event {
                SequenceEvent::Line(line) => self.buffer.push(line),
                SequenceEvent::Finished(completion) => self.complete_sequence(completion, now),
            }
        }
    }

    pub fn apply(&mut self, action: TerminalAction, now: Instant) -> SessionEffect {
        match action {
            TerminalAction::Insert(ch) => {
                if self.phase.accepts_text() {
                    self.input.push(ch);
                }
                SessionEffect::None
            }
            TerminalAction::Backspace => {
                if self.phase.accepts_text() {
                    self.input.pop();
                }
                SessionEffect::None
            }
            TerminalAction::Confirm => self.confirm(now),
            TerminalAction::SelectPrev | TerminalAction::SelectNext => {
                if self.phase != Phase::Workshop {
                    return SessionEffect::None;
                }
                if action == TerminalAction::SelectNext {
                    self.selector.move_next();
                } else {
                    self.selector.move_prev();
                }
                let redraw = self.redraw_menu();
                self.report_buffer_error(redraw);
                SessionEffect::None
            }
        }
    }

    pub fn confirm(&mut self, now: Instant) -> SessionEffect {
        let raw = std::mem::take(&mut self.input);
        let answer = raw.trim();
        match self.phase {
            Phase::Boot | Phase::Welcome | Phase::Submitting => SessionEffect::None,
            Phase::Email => self.accept_field(DraftField::Email, answer),
            Phase::Github => self.accept_field(DraftField::GithubUrl, answer),
            Phase::Website => self.accept_field(DraftField::WebsiteUrl, answer),
            Phase::Workshop => {
                self.confirm_workshop();
                SessionEffect::None
            }
            Phase::Confirm => self.answer_confirmation(answer),
            Phase::Complete => {
                self.reset(now);
                SessionEffect::None
            }
        }
    }

    pub fn redraw_menu(&mut self) -> Result<(), BufferError> {
        self.buffer.rewrite_menu(self.selector.render())
    }

    pub fn finish_submission(&mut self, result: Result<(), SubmissionError>, now: Instant) {
        if self.phase != Phase::Submitting || !self.submission_in_flight {
            return;
        }
        self.submission_in_flight = false;
        match result {
            Ok(()) => {
                self.buffer.extend(scripts::submission_success_lines());
                self.sequences.launch(scripts::aftermath_sequence(), now);
            }
            Err(err) => {
                self.push_error(WizardError::from(err));
                self.set_phase(Phase::Complete);
            }
        }
    }

    pub fn shutdown(&mut self) {
        self.sequences.cancel();
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            self.sequences.invalidate();
        }
        self.phase = phase;
    }

    fn complete_sequence(&mut self, completion: SequenceCompletion, now: Instant) {
        match completion {
            SequenceCompletion::EnterWelcome => {
                self.set_phase(Phase::Welcome);
                self.sequences.launch(scripts::welcome_sequence(), now);
            }
            SequenceCompletion::EnterEmail => {
                self.set_phase(Phase::Email);
                self.buffer.push(TerminalLine::prompt(scripts::EMAIL_PROMPT));
            }
            SequenceCompletion::EnterComplete => self.set_phase(Phase::Complete),
        }
    }

    fn accept_field(&mut self, field: DraftField, value: &str) -> SessionEffect {
        if value.is_empty() {
            return SessionEffect::None;
        }
        self.echo(value);
        let valid = match field {
            DraftField::Email => is_valid_email(value),
            DraftField::GithubUrl | DraftField::WebsiteUrl => is_valid_absolute_url(value),
        };
        if !valid {
            self.push_error(WizardError::Validation { field });
            return SessionEffect::None;
        }

        self.draft.set(field, value);
        self.buffer.push(TerminalLine::success(field.recorded_line()));
        match field {
            DraftField::Email => {
                self.set_phase(Phase::Github);
                self.buffer.push(TerminalLine::prompt(scripts::GITHUB_PROMPT));
            }
            DraftField::GithubUrl => {
                self.set_phase(Phase::Website);
                self.buffer.push(TerminalLine::prompt(scripts::WEBSITE_PROMPT));
            }
            DraftField::WebsiteUrl => {
                self.set_phase(Phase::Workshop);
                self.buffer.push(TerminalLine::prompt(scripts::WORKSHOP_PROMPT));
                self.selector.reset();
                let opened = self.buffer.open_menu(self.selector.render()).map(|_| ());
                self.report_buffer_error(opened);
            }
        }
        SessionEffect::None
    }

    fn confirm_workshop(&mut self) {
        let label = self.selector.selected_label();
        self.draft.workshop = label.to_string();
        self.buffer.close_menu();
        self.buffer
            .push(TerminalLine::success(format!("✓ Workshop selected: {label}")));
        self.buffer.extend(scripts::summary_block(&self.draft));
        self.buffer.push(TerminalLine::prompt(scripts::CONFIRM_PROMPT));
        self.set_phase(Phase::Confirm);
    }

    fn answer_confirmation(&mut self, answer: &str) -> SessionEffect {
        if answer.is_empty() {
            return SessionEffect::None;
        }
        self.echo(answer);
        match ConfirmationAnswer::parse(answer) {
            Some(ConfirmationAnswer::Yes) => {
                self.buffer
                    .push(TerminalLine::system(scripts::TRANSMITTING_LINE));
                self.set_phase(Phase::Submitting);
                self.submission_in_flight = true;
                SessionEffect::Submit(self.draft.to_submission())
            }
            Some(ConfirmationAnswer::No) => {
                self.buffer.push(TerminalLine::error(scripts::CANCELLED_LINE));
                self.set_phase(Phase::Complete);
                SessionEffect::None
            }
            None => {
                self.push_error(WizardError::InvalidConfirmationAnswer);
                SessionEffect::None
            }
        }
    }

    fn reset(&mut self, now: Instant) {
        self.sequences.cancel();
        self.buffer.clear();
        self.draft = SubmissionDraft::default();
        self.selector.reset();
        self.input.clear();
        self.submission_in_flight = false;
        self.start(now);
    }

    fn echo(&mut self, value: &str) {
        self.buffer
            .push(TerminalLine::input(format!("{INPUT_ECHO_PREFIX}{value}")));
    }

    fn push_error(&mut self, err: WizardError) {
        self.buffer.push(TerminalLine::error(err.to_string()));
    }

    fn report_buffer_error(&mut self, result: Result<(), BufferError>) {
        if let Err(err) = result {
            self.buffer.push(TerminalLine::error(format!("✗ {err}")));
        }
    }
}
