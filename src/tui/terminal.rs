use crate::gateway::{Submission, SubmissionError, SubmissionGateway};
use crate::shared::logging::{append_app_log, email_fingerprint};
use crate::terminal::view::{project_terminal_view, visible_tail};
use crate::terminal::{
    terminal_key_from_event, LineCategory, Phase, SessionEffect, TerminalKey, TerminalLine,
    TerminalSession,
};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const UI_POLL_INTERVAL: Duration = Duration::from_millis(30);
const CURSOR_BLINK_INTERVAL: Duration = Duration::from_millis(500);

struct SubmissionWorker {
    submission: Submission,
    result_rx: Receiver<Result<(), SubmissionError>>,
}

struct TuiState {
    session: TerminalSession,
    gateway: Arc<dyn SubmissionGateway>,
    log_root: Option<PathBuf>,
    worker: Option<SubmissionWorker>,
    cursor_visible: bool,
    last_cursor_tick: Instant,
}

impl TuiState {
    fn new(gateway: Arc<dyn SubmissionGateway>, log_root: Option<PathBuf>) -> Self {
        Self {
            session: TerminalSession::new(),
            gateway,
            log_root,
            worker: None,
            cursor_visible: true,
            last_cursor_tick: Instant::now(),
        }
    }

    fn advance_cursor_blink_if_needed(&mut self) {
        if self.last_cursor_tick.elapsed() >= CURSOR_BLINK_INTERVAL {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_tick = Instant::now();
        }
    }

    fn cursor_suffix(&self) -> &'static str {
        if self.cursor_visible {
            "█"
        } else {
            " "
        }
    }
}

pub fn run_terminal_tui(
    gateway: Arc<dyn SubmissionGateway>,
    log_root: Option<PathBuf>,
) -> Result<(), String> {
    let mut terminal = setup_terminal()?;
    let mut state = TuiState::new(gateway, log_root);
    state.session.start(Instant::now());

    let result = run_event_loop(&mut terminal, &mut state);
    state.session.shutdown();
    teardown_terminal(&mut terminal)?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &mut TuiState,
) -> Result<(), String> {
    loop {
        state.advance_cursor_blink_if_needed();
        check_submission_result(state);
        state.session.tick(Instant::now());
        draw_terminal_ui(terminal, state)?;

        if !event::poll(UI_POLL_INTERVAL).map_err(|e| format!("failed to poll events: {e}"))? {
            continue;
        }

        let Event::Key(key) = event::read().map_err(|e| format!("failed to read event: {e}"))?
        else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match terminal_key_from_event(key) {
            Some(TerminalKey::Quit) => break,
            Some(TerminalKey::Action(action)) => {
                let previous = state.session.phase();
                let effect = state.session.apply(action, Instant::now());
                log_phase_change(state.log_root.as_deref(), previous, &state.session);
                if let SessionEffect::Submit(submission) = effect {
                    spawn_submission(state, submission);
                }
                state.cursor_visible = true;
                state.last_cursor_tick = Instant::now();
            }
            None => {}
        }
    }

    Ok(())
}

fn spawn_submission(state: &mut TuiState, submission: Submission) {
    let gateway = Arc::clone(&state.gateway);
    let worker_submission = submission.clone();
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let result = gateway.submit(&worker_submission);
        let _ = tx.send(result);
    });
    state.worker = Some(SubmissionWorker {
        submission,
        result_rx: rx,
    });
}

fn check_submission_result(state: &mut TuiState) {
    let Some(worker) = state.worker.take() else {
        return;
    };

    let result = match worker.result_rx.try_recv() {
        Ok(result) => result,
        Err(mpsc::TryRecvError::Empty) => {
            state.worker = Some(worker);
            return;
        }
        Err(mpsc::TryRecvError::Disconnected) => Err(SubmissionError::Other(
            "submission worker disconnected unexpectedly".to_string(),
        )),
    };

    log_submission_outcome(state.log_root.as_deref(), &worker.submission, &result);
    state.session.finish_submission(result, Instant::now());
}

pub fn log_submission_outcome(
    log_root: Option<&Path>,
    submission: &Submission,
    result: &Result<(), SubmissionError>,
) {
    let Some(root) = log_root else {
        return;
    };
    let fingerprint = email_fingerprint(&submission.email);
    match result {
        Ok(()) => append_app_log(
            root,
            "info",
            "submission.accepted",
            &format!("email_sha256={fingerprint}"),
        ),
        Err(SubmissionError::Duplicate) => append_app_log(
            root,
            "warn",
            "submission.duplicate",
            &format!("email_sha256={fingerprint}"),
        ),
        Err(SubmissionError::Other(reason)) => append_app_log(
            root,
            "error",
            "submission.failed",
            &format!("email_sha256={fingerprint} reason={reason}"),
        ),
    }
}

fn log_phase_change(log_root: Option<&Path>, previous: Phase, session: &TerminalSession) {
    let Some(root) = log_root else {
        return;
    };
    let current = session.phase();
    if previous == Phase::Complete && current == Phase::Boot {
        append_app_log(root, "info", "session.reset", "terminal session restarted");
    } else if previous == Phase::Confirm && current == Phase::Complete {
        append_app_log(root, "info", "session.cancelled", "submission cancelled by user");
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedTerminalReport {
    pub phase: Phase,
    pub lines: Vec<TerminalLine>,
    pub submissions: usize,
}

// Timers are fast-forwarded on a virtual clock before every key, so a
// script only has to describe what the user types.
pub fn run_terminal_scripted(
    keys: Vec<KeyEvent>,
    gateway: &dyn SubmissionGateway,
    log_root: Option<&Path>,
) -> ScriptedTerminalReport {
    let mut now = Instant::now();
    let mut session = TerminalSession::new();
    let mut submissions = 0;
    session.start(now);

    for key in keys {
        settle(&mut session, &mut now);
        let action = match terminal_key_from_event(key) {
            Some(TerminalKey::Quit) => break,
            Some(TerminalKey::Action(action)) => action,
            None => continue,
        };
        let previous = session.phase();
        let effect = session.apply(action, now);
        log_phase_change(log_root, previous, &session);
        if let SessionEffect::Submit(submission) = effect {
            submissions += 1;
            let result = gateway.submit(&submission);
            log_submission_outcome(log_root, &submission, &result);
            session.finish_submission(result, now);
        }
    }
    settle(&mut session, &mut now);
    session.shutdown();

    ScriptedTerminalReport {
        phase: session.phase(),
        lines: session.buffer().lines().to_vec(),
        submissions,
    }
}

fn settle(session: &mut TerminalSession, now: &mut Instant) {
    while let Some(due) = session.next_deadline() {
        *now = (*now).max(due);
        session.tick(*now);
    }
}

fn category_style(category: LineCategory) -> Style {
    match category {
        LineCategory::System => Style::default().fg(Color::Green),
        LineCategory::Prompt => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        LineCategory::Input => Style::default().fg(Color::White),
        LineCategory::Error => Style::default().fg(Color::Red),
        LineCategory::Success => Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD),
    }
}

fn draw_terminal_ui(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    state: &TuiState,
) -> Result<(), String> {
    let view = project_terminal_view(&state.session);
    terminal
        .draw(|frame| {
            let sections = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(8),
                    Constraint::Length(3),
                    Constraint::Length(3),
                ])
                .split(frame.area());

            let height = usize::from(sections[0].height.saturating_sub(2));
            let transcript = visible_tail(view.lines, height)
                .iter()
                .map(|line| Line::styled(line.text.clone(), category_style(line.category)))
                .collect::<Vec<_>>();
            let transcript_widget = Paragraph::new(transcript).block(
                Block::default()
                    .title(view.title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Green)),
            );
            frame.render_widget(transcript_widget, sections[0]);

            let status_widget = Paragraph::new(view.hint_text).block(
                Block::default()
                    .title(view.status_label)
                    .borders(Borders::ALL)
                    .border_style(if state.worker.is_some() {
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    }),
            );
            frame.render_widget(status_widget, sections[1]);

            let input_text = match &view.input_line {
                Some(line) => format!("{line}{}", state.cursor_suffix()),
                None => String::new(),
            };
            let input_widget = Paragraph::new(input_text)
                .block(Block::default().title("Input").borders(Borders::ALL));
            frame.render_widget(input_widget, sections[2]);
        })
        .map_err(|e| format!("failed to render terminal UI: {e}"))?;

    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, String> {
    enable_raw_mode().map_err(|e| format!("failed to enable raw mode: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)
        .map_err(|e| format!("failed to enter alternate screen: {e}"))?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend).map_err(|e| format!("failed to initialize terminal: {e}"))
}

fn teardown_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), String> {
    disable_raw_mode().map_err(|e| format!("failed to disable raw mode: {e}"))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, cursor::Show)
        .map_err(|e| format!("failed to leave alternate screen: {e}"))?;
    terminal
        .show_cursor()
        .map_err(|e| format!("failed to restore cursor: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::parse_scripted_terminal_keys;
    use std::sync::Mutex;

    struct CountingGateway {
        calls: Mutex<Vec<Submission>>,
    }

    impl SubmissionGateway for CountingGateway {
        fn submit(&self, submission: &Submission) -> Result<(), SubmissionError> {
            self.calls
                .lock()
                .expect("lock calls")
                .push(submission.clone());
            Ok(())
        }
    }

    #[test]
    fn cursor_blink_toggles_visibility_after_interval() {
        let gateway = Arc::new(CountingGateway {
            calls: Mutex::new(Vec::new()),
        });
        let mut state = TuiState::new(gateway, None);
        assert_eq!(state.cursor_suffix(), "█");

        state.last_cursor_tick = Instant::now() - CURSOR_BLINK_INTERVAL;
        state.advance_cursor_blink_if_needed();
        assert_eq!(state.cursor_suffix(), " ");
    }

    #[test]
    fn scripted_run_plays_success_flavour_through_to_complete() {
        let gateway = CountingGateway {
            calls: Mutex::new(Vec::new()),
        };
        let keys = parse_scripted_terminal_keys(
            "text:a@b.com,enter,text:https://github.com/x/y,enter,text:https://y.com,enter,down,enter,text:oui,enter",
        )
        .expect("keys");

        let report = run_terminal_scripted(keys, &gateway, None);

        assert_eq!(report.phase, Phase::Complete);
        assert_eq!(report.submissions, 1);
        let calls = gateway.calls.lock().expect("lock calls");
        assert_eq!(calls[0].workshop.as_deref(), Some("Workshop 2"));
        let last = report.lines.last().expect("last line");
        assert_eq!(last.text, "Press Enter to start a new session.");
    }
}
