use super::buffer::TerminalLine;
use super::phase::Phase;
use super::session::TerminalSession;

pub const TERMINAL_TITLE: &str = "PORTAIL ÉTUDIANT :: terminal";
const INPUT_PREFIX: &str = "$ ";

pub struct TerminalViewModel<'a> {
    pub title: &'static str,
    pub status_label: &'static str,
    pub hint_text: &'static str,
    pub lines: &'a [TerminalLine],
    pub input_line: Option<String>,
}

pub fn hint_for_phase(phase: Phase) -> &'static str {
    match phase {
        Phase::Boot | Phase::Welcome => "Booting... | Esc quit",
        Phase::Email | Phase::Github | Phase::Website => "Type then Enter | Esc quit",
        Phase::Workshop => "Up/Down move | Enter select | Esc quit",
        Phase::Confirm => "Type oui or non then Enter | Esc quit",
        Phase::Submitting => "Transmitting... | Esc quit",
        Phase::Complete => "Enter restart | Esc quit",
    }
}

pub fn project_terminal_view(session: &TerminalSession) -> TerminalViewModel<'_> {
    let phase = session.phase();
    TerminalViewModel {
        title: TERMINAL_TITLE,
        status_label: phase.status_label(),
        hint_text: hint_for_phase(phase),
        lines: session.buffer().lines(),
        input_line: phase
            .accepts_text()
            .then(|| format!("{INPUT_PREFIX}{}", session.input())),
    }
}

pub fn visible_tail(lines: &[TerminalLine], height: usize) -> &[TerminalLine] {
    let start = lines.len().saturating_sub(height);
    &lines[start..]
}

pub fn transcript_text(lines: &[TerminalLine]) -> String {
    lines
        .iter()
        .map(|line| format!("[{}] {}", line.category.as_str(), line.text))
        .collect::<Vec<_>>()
        .join("\n")
}
