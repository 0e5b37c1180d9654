use crate::app::cli::{help_text, parse_cli_verb, CliVerb};

pub mod logs;
pub mod settings;
pub mod submit;
pub mod terminal;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    if args.is_empty() {
        return Ok(help_text());
    }

    match parse_cli_verb(args[0].as_str()) {
        CliVerb::Terminal => terminal::cmd_terminal(),
        CliVerb::Submit => submit::cmd_submit(&args[1..]),
        CliVerb::Config => settings::cmd_config(),
        CliVerb::Logs => logs::cmd_logs(),
        CliVerb::Help => Ok(help_text()),
        CliVerb::Unknown => Err(format!("unknown command `{}`", args[0])),
    }
}
