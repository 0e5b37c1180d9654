use crate::app::command_support::{ensure_state_root, load_settings};
use crate::form::{parse_form_args, validate_form, FormError, SUBMISSION_ACCEPTED_MESSAGE};
use crate::gateway::{PostgrestGateway, SubmissionGateway};
use crate::tui::terminal::log_submission_outcome;

pub fn cmd_submit(args: &[String]) -> Result<String, String> {
    let input = parse_form_args(args)?;
    let submission = validate_form(&input).map_err(|e| e.to_string())?;

    let settings = load_settings()?;
    let state_root = ensure_state_root()?;
    let gateway = PostgrestGateway::new(&settings.backend);

    let result = gateway.submit(&submission);
    log_submission_outcome(Some(&state_root), &submission, &result);
    result.map_err(|e| FormError::from(e).to_string())?;

    Ok(SUBMISSION_ACCEPTED_MESSAGE.to_string())
}
