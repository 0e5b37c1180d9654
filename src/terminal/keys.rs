use super::session::TerminalAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub const SCRIPT_KEYS_ENV: &str = "PORTAIL_TERMINAL_SCRIPT_KEYS";
const TEXT_TOKEN_PREFIX: &str = "text:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalKey {
    Action(TerminalAction),
    Quit,
}

pub fn terminal_key_from_event(key: KeyEvent) -> Option<TerminalKey> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(TerminalKey::Quit);
    }
    let action = match key.code {
        KeyCode::Esc => return Some(TerminalKey::Quit),
        KeyCode::Enter | KeyCode::Char('\n') | KeyCode::Char('\r') => TerminalAction::Confirm,
        KeyCode::Up => TerminalAction::SelectPrev,
        KeyCode::Down => TerminalAction::SelectNext,
        KeyCode::Backspace => TerminalAction::Backspace,
        KeyCode::Char(ch) => TerminalAction::Insert(ch),
        _ => return None,
    };
    Some(TerminalKey::Action(action))
}

/// Parses a headless key script such as `text:a@b.com,enter,down,enter`.
/// `text:` tokens expand to one key press per character.
pub fn parse_scripted_terminal_keys(raw: &str) -> Result<Vec<KeyEvent>, String> {
    let mut keys = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if let Some(text) = token.strip_prefix(TEXT_TOKEN_PREFIX) {
            keys.extend(
                text.chars()
                    .map(|ch| KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE)),
            );
            continue;
        }
        let key = match token.to_ascii_lowercase().as_str() {
            "enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            "esc" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "ctrl-c" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            other => {
                return Err(format!(
                    "invalid {SCRIPT_KEYS_ENV} token `{other}`; valid tokens: enter,up,down,backspace,esc,ctrl-c,text:<chars>"
                ));
            }
        };
        keys.push(key);
    }
    Ok(keys)
}

pub fn load_scripted_terminal_keys() -> Result<Option<Vec<KeyEvent>>, String> {
    let Some(raw) = std::env::var(SCRIPT_KEYS_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
    else {
        return Ok(None);
    };
    parse_scripted_terminal_keys(&raw).map(Some)
}
