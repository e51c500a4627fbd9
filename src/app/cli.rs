#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliVerb {
    Setup,
    Workflow,
    Step,
    Run,
    Unknown,
}

pub fn parse_cli_verb(input: &str) -> CliVerb {
    match input {
        "setup" => CliVerb::Setup,
        "workflow" => CliVerb::Workflow,
        "step" => CliVerb::Step,
        "run" => CliVerb::Run,
        _ => CliVerb::Unknown,
    }
}

pub fn cli_help_lines() -> Vec<String> {
    vec![
        "Commands:".to_string(),
        "  setup                                Initialize the state root and database".to_string(),
        "  workflow list                        List workflows with step and run counts"
            .to_string(),
        "  workflow show <workflow_id>          Show a workflow with steps and recent runs"
            .to_string(),
        "  workflow add <name> [description]    Create a workflow".to_string(),
        "  workflow update <id> <name> [desc]   Rename a workflow".to_string(),
        "  workflow remove <workflow_id>        Delete a workflow with its steps and runs"
            .to_string(),
        "  workflow steps <workflow_id>         Print a workflow's steps as JSON".to_string(),
        "  workflow run <workflow_id>           Execute the workflow's steps in order".to_string(),
        "  workflow seed                        Create the example workflow".to_string(),
        "  step add <workflow_id> <type> <json> Append a delay or http_check step".to_string(),
        "  step remove <step_id>                Delete a step and close the position gap"
            .to_string(),
        "  step move-up <step_id>               Swap a step with its predecessor".to_string(),
        "  step move-down <step_id>             Swap a step with its successor".to_string(),
        "  step reorder <workflow_id> <ids>     Apply a full comma-separated ordering".to_string(),
        "  run list <workflow_id>               List runs for a workflow, newest first"
            .to_string(),
        "  run show <run_id>                    Show a run with its logs".to_string(),
    ]
}

pub(crate) fn help_text() -> String {
    cli_help_lines().join("\n")
}
