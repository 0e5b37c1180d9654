use portail::app::command_handlers;

fn output_header() -> &'static str {
    "Portail\nPortail collects student project submissions through a simulated terminal or a one-shot form."
}

fn print_header() {
    println!("{}\n", output_header());
}

fn run() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) != Some("terminal") {
        print_header();
    }
    let output = command_handlers::run_cli(args)?;
    println!("{output}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
