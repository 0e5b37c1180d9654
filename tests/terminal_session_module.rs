use portail::gateway::{Submission, SubmissionError};
use portail::terminal::{
    LineCategory, Phase, SessionEffect, TerminalAction, TerminalSession, WORKSHOP_CHOICES,
};
use std::time::{Duration, Instant};

fn settle(session: &mut TerminalSession, now: &mut Instant) {
    while let Some(due) = session.next_deadline() {
        *now = (*now).max(due);
        session.tick(*now);
    }
}

fn type_and_confirm(session: &mut TerminalSession, text: &str, now: Instant) -> SessionEffect {
    for ch in text.chars() {
        session.apply(TerminalAction::Insert(ch), now);
    }
    session.apply(TerminalAction::Confirm, now)
}

fn session_at_email() -> (TerminalSession, Instant) {
    let mut now = Instant::now();
    let mut session = TerminalSession::new();
    session.start(now);
    settle(&mut session, &mut now);
    assert_eq!(session.phase(), Phase::Email);
    (session, now)
}

fn session_at_workshop() -> (TerminalSession, Instant) {
    let (mut session, now) = session_at_email();
    type_and_confirm(&mut session, "a@b.com", now);
    type_and_confirm(&mut session, "https://github.com/x/y", now);
    type_and_confirm(&mut session, "https://y.com", now);
    assert_eq!(session.phase(), Phase::Workshop);
    (session, now)
}

fn menu_success_count(session: &TerminalSession) -> usize {
    session
        .buffer()
        .menu_lines()
        .expect("menu open")
        .iter()
        .filter(|line| line.category == LineCategory::Success)
        .count()
}

#[test]
fn terminal_session_module_valid_email_appends_success_then_prompt_after_echo() {
    let (mut session, now) = session_at_email();
    let before = session.buffer().len();

    let effect = type_and_confirm(&mut session, "a@b.com", now);

    assert_eq!(effect, SessionEffect::None);
    assert_eq!(session.phase(), Phase::Github);
    assert_eq!(session.draft().email, "a@b.com");
    assert_eq!(session.input(), "");
    let added = &session.buffer().lines()[before..];
    let categories: Vec<LineCategory> = added.iter().map(|line| line.category).collect();
    assert_eq!(
        categories,
        vec![
            LineCategory::Input,
            LineCategory::Success,
            LineCategory::Prompt
        ]
    );
    assert_eq!(added[0].text, "> a@b.com");
}

#[test]
fn terminal_session_module_invalid_email_stays_and_leaves_draft_unset() {
    let (mut session, now) = session_at_email();

    type_and_confirm(&mut session, "not-an-email", now);

    assert_eq!(session.phase(), Phase::Email);
    assert_eq!(session.draft().email, "");
    assert_eq!(session.input(), "");
    let last = session.buffer().last().expect("error line");
    assert_eq!(last.category, LineCategory::Error);
    assert!(last.text.contains("email address"), "{}", last.text);
}

#[test]
fn terminal_session_module_empty_confirm_is_ignored_in_field_phases() {
    let (mut session, now) = session_at_email();
    let before = session.buffer().len();

    session.apply(TerminalAction::Confirm, now);
    type_and_confirm(&mut session, "   ", now);

    assert_eq!(session.buffer().len(), before);
    assert_eq!(session.phase(), Phase::Email);
}

#[test]
fn terminal_session_module_relative_github_url_is_rejected() {
    let (mut session, now) = session_at_email();
    type_and_confirm(&mut session, "a@b.com", now);

    type_and_confirm(&mut session, "github.com/x/y", now);

    assert_eq!(session.phase(), Phase::Github);
    assert_eq!(session.draft().github_url, "");
    assert_eq!(
        session.buffer().last().map(|line| line.category),
        Some(LineCategory::Error)
    );
}

#[test]
fn terminal_session_module_menu_opens_with_first_choice_highlighted() {
    let (session, _) = session_at_workshop();

    let region = session.buffer().menu_region().expect("menu region");
    assert_eq!(region.len, 3);
    assert_eq!(region.end(), session.buffer().len());
    let menu = session.buffer().menu_lines().expect("menu lines");
    assert_eq!(menu[0].text, format!("▶ {}", WORKSHOP_CHOICES[0]));
    assert_eq!(menu[0].category, LineCategory::Success);
    assert_eq!(session.selector().cursor(), 0);
}

#[test]
fn terminal_session_module_three_moves_return_cursor_with_one_highlight_each_step() {
    for action in [TerminalAction::SelectNext, TerminalAction::SelectPrev] {
        let (mut session, now) = session_at_workshop();
        let len_before = session.buffer().len();

        for _ in 0..3 {
            session.apply(action, now);
            assert_eq!(menu_success_count(&session), 1);
        }

        assert_eq!(session.selector().cursor(), 0);
        assert_eq!(session.buffer().len(), len_before);
        assert_eq!(session.phase(), Phase::Workshop);
    }
}

#[test]
fn terminal_session_module_menu_redraw_is_idempotent() {
    let (mut session, now) = session_at_workshop();
    session.apply(TerminalAction::SelectNext, now);

    session.redraw_menu().expect("first redraw");
    let first = session.buffer().menu_lines().expect("menu").to_vec();
    session.redraw_menu().expect("second redraw");
    let second = session.buffer().menu_lines().expect("menu").to_vec();

    assert_eq!(first, second);
    assert_eq!(first[1].category, LineCategory::Success);
}

#[test]
fn terminal_session_module_text_is_dropped_during_workshop_selection() {
    let (mut session, now) = session_at_workshop();
    session.apply(TerminalAction::Insert('z'), now);
    assert_eq!(session.input(), "");
}

#[test]
fn terminal_session_module_end_to_end_duplicate_lands_on_complete_with_error() {
    let (mut session, now) = session_at_workshop();

    session.apply(TerminalAction::Confirm, now);
    assert_eq!(session.phase(), Phase::Confirm);
    assert_eq!(session.buffer().menu_region(), None);
    assert!(session
        .buffer()
        .lines()
        .iter()
        .any(|line| line.text == "Workshop:     Workshop 3"));

    let effect = type_and_confirm(&mut session, "oui", now);
    let SessionEffect::Submit(submission) = effect else {
        panic!("expected a submit effect, got {effect:?}");
    };
    assert_eq!(
        submission,
        Submission {
            email: "a@b.com".to_string(),
            github_url: "https://github.com/x/y".to_string(),
            website_url: "https://y.com".to_string(),
            workshop: Some("Workshop 3".to_string()),
        }
    );
    assert_eq!(session.phase(), Phase::Submitting);
    assert!(session.is_submission_in_flight());

    // Nothing typed while submitting can trigger a second call.
    assert_eq!(
        type_and_confirm(&mut session, "oui", now),
        SessionEffect::None
    );

    session.finish_submission(Err(SubmissionError::Duplicate), now);

    assert_eq!(session.phase(), Phase::Complete);
    let last = session.buffer().last().expect("last line");
    assert_eq!(last.category, LineCategory::Error);
    assert_eq!(last.text, "✗ This email has already been submitted.");
}

#[test]
fn terminal_session_module_transport_failure_uses_distinct_message() {
    let (mut session, now) = session_at_workshop();
    session.apply(TerminalAction::Confirm, now);
    type_and_confirm(&mut session, "yes", now);

    session.finish_submission(
        Err(SubmissionError::Other("connection refused".to_string())),
        now,
    );

    assert_eq!(session.phase(), Phase::Complete);
    let last = session.buffer().last().expect("last line");
    assert_eq!(last.category, LineCategory::Error);
    assert_eq!(last.text, "✗ An error occurred. Please try again.");
}

#[test]
fn terminal_session_module_negative_answer_cancels_without_submitting() {
    let (mut session, now) = session_at_workshop();
    session.apply(TerminalAction::Confirm, now);

    let effect = type_and_confirm(&mut session, "NON", now);

    assert_eq!(effect, SessionEffect::None);
    assert_eq!(session.phase(), Phase::Complete);
    assert_eq!(
        session.buffer().last().map(|line| line.category),
        Some(LineCategory::Error)
    );
}

#[test]
fn terminal_session_module_success_plays_flavour_sequence_then_completes() {
    let (mut session, mut now) = session_at_workshop();
    session.apply(TerminalAction::Confirm, now);
    type_and_confirm(&mut session, "o", now);
    let submitted_at = now;

    session.finish_submission(Ok(()), now);
    let after_success = session.buffer().len();
    assert_eq!(
        session.buffer().last().map(|line| line.category),
        Some(LineCategory::Success)
    );

    session.tick(submitted_at + Duration::from_millis(1199));
    assert_eq!(session.buffer().len(), after_success);
    session.tick(submitted_at + Duration::from_millis(1200));
    assert_eq!(session.buffer().len(), after_success + 1);
    assert_eq!(session.phase(), Phase::Submitting);

    settle(&mut session, &mut now);

    assert_eq!(session.phase(), Phase::Complete);
    let flavour = &session.buffer().lines()[after_success..];
    assert_eq!(flavour.len(), 18);
    for (idx, line) in flavour.iter().enumerate() {
        let expected = if (2..=11).contains(&idx) {
            LineCategory::Error
        } else {
            LineCategory::System
        };
        assert_eq!(line.category, expected, "flavour line {idx}");
    }
    // 1000 lead-in + 12 x 200 + 6 x 400 + 500 pause.
    assert_eq!(now - submitted_at, Duration::from_millis(6300));
}

#[test]
fn terminal_session_module_complete_resets_on_empty_confirm() {
    let (mut session, now) = session_at_workshop();
    session.apply(TerminalAction::SelectNext, now);
    session.apply(TerminalAction::Confirm, now);
    type_and_confirm(&mut session, "non", now);
    assert_eq!(session.phase(), Phase::Complete);

    let reset_at = now + Duration::from_secs(1);
    session.apply(TerminalAction::Confirm, reset_at);

    assert_eq!(session.phase(), Phase::Boot);
    assert!(session.buffer().is_empty());
    assert_eq!(session.draft(), &portail::terminal::SubmissionDraft::default());
    assert_eq!(session.selector().cursor(), 0);
    assert_eq!(session.input(), "");

    session.tick(reset_at + Duration::from_millis(300));
    assert_eq!(session.buffer().len(), 1);
    assert_eq!(session.buffer().lines()[0].text, "PORTAIL BIOS v2.4.1");
}

#[test]
fn terminal_session_module_shutdown_cancels_pending_boot_lines() {
    let start = Instant::now();
    let mut session = TerminalSession::new();
    session.start(start);
    session.tick(start + Duration::from_millis(300));
    assert_eq!(session.buffer().len(), 1);

    session.shutdown();
    session.tick(start + Duration::from_secs(30));

    assert_eq!(session.buffer().len(), 1);
    assert_eq!(session.next_deadline(), None);
    assert!(!session.is_sequence_running());
}
