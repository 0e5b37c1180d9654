#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Terminal,
    Submit,
    Config,
    Logs,
    Help,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "terminal" => CliVerb::Terminal,
        "submit" => CliVerb::Submit,
        "config" => CliVerb::Config,
        "logs" => CliVerb::Logs,
        "help" | "--help" | "-h" => CliVerb::Help,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  terminal                             Open the interactive submission terminal"
            .to_string(),
        "  submit --email <e> --github <url> --website <url> [--workshop <w>]".to_string(),
        "                                       Validate and submit the form in one shot"
            .to_string(),
        "  config                               Show the resolved backend configuration"
            .to_string(),
        "  logs                                 Print recent application log entries".to_string(),
        "  help                                 Show this help".to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    cli_help_lines().join("\n")
}
