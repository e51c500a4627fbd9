use crate::app::cli::{help_text, parse_cli_verb, CliVerb};

pub mod runs;
pub mod setup;
pub mod steps;
pub mod workflows;

pub fn run_cli(args: Vec<String>) -> Result<String, String> {
    if args.is_empty() {
        return Ok(help_text());
    }

    match parse_cli_verb(args[0].as_str()) {
        CliVerb::Setup => setup::cmd_setup(),
        CliVerb::Workflow => workflows::cmd_workflow(&args[1..]),
        CliVerb::Step => steps::cmd_step(&args[1..]),
        CliVerb::Run => runs::cmd_run(&args[1..]),
        CliVerb::Unknown => Err(format!("unknown command `{}`", args[0])),
    }
}
