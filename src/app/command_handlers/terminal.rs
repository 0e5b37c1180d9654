use crate::app::command_support::{ensure_state_root, load_settings};
use crate::gateway::PostgrestGateway;
use crate::shared::logging::append_app_log;
use crate::terminal::keys::{load_scripted_terminal_keys, SCRIPT_KEYS_ENV};
use crate::terminal::view::transcript_text;
use crate::tui::terminal::{run_terminal_scripted, run_terminal_tui};
use std::io::{self, IsTerminal};
use std::sync::Arc;

pub fn cmd_terminal() -> Result<String, String> {
    let settings = load_settings()?;
    let state_root = ensure_state_root()?;
    let gateway = PostgrestGateway::new(&settings.backend);

    if let Some(keys) = load_scripted_terminal_keys()? {
        append_app_log(
            &state_root,
            "info",
            "terminal.scripted",
            &format!("replaying {} scripted keys", keys.len()),
        );
        let report = run_terminal_scripted(keys, &gateway, Some(&state_root));
        return Ok(format!(
            "{}\nphase={}\nsubmissions={}",
            transcript_text(&report.lines),
            report.phase,
            report.submissions
        ));
    }

    if !io::stdin().is_terminal() || !io::stdout().is_terminal() {
        return Err(format!(
            "terminal mode requires an interactive terminal; set {SCRIPT_KEYS_ENV} for headless runs"
        ));
    }

    append_app_log(&state_root, "info", "terminal.start", "interactive session opened");
    run_terminal_tui(Arc::new(gateway), Some(state_root.clone()))?;
    append_app_log(&state_root, "info", "terminal.exit", "interactive session closed");
    Ok("terminal session closed".to_string())
}
