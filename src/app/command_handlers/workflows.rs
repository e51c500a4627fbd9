use crate::app::command_support::{
    ensure_state_root, format_timestamp, now_ms, open_store, open_store_at, parse_id,
};
use crate::runner::WorkflowRunner;
use crate::store::{
    validate_workflow_name, RunRecord, StepConfig, StepRecord, WorkflowRecord,
};
use serde::Serialize;

const RECENT_RUN_LIMIT: u32 = 10;

pub fn cmd_workflow(args: &[String]) -> Result<String, String> {
    if args.is_empty() {
        return Err(
            "usage: workflow <list|show|add|update|remove|steps|run|seed> ...".to_string(),
        );
    }

    match args[0].as_str() {
        "list" => {
            if args.len() != 1 {
                return Err("usage: workflow list".to_string());
            }
            let store = open_store()?;
            let workflows = store.list_workflows().map_err(|e| e.to_string())?;
            if workflows.is_empty() {
                return Ok("no workflows".to_string());
            }
            Ok(workflows
                .iter()
                .map(|workflow| {
                    format!(
                        "id={} name={} steps={} runs={}",
                        workflow.id, workflow.name, workflow.step_count, workflow.run_count
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
        "show" => {
            if args.len() != 2 {
                return Err("usage: workflow show <workflow_id>".to_string());
            }
            let workflow_id = parse_id("workflow", &args[1])?;
            let store = open_store()?;
            let view = WorkflowView {
                workflow: store.get_workflow(workflow_id).map_err(|e| e.to_string())?,
                steps: store.list_steps(workflow_id).map_err(|e| e.to_string())?,
                recent_runs: store
                    .list_runs(workflow_id, Some(RECENT_RUN_LIMIT))
                    .map_err(|e| e.to_string())?,
            };
            serde_yaml::to_string(&view).map_err(|e| format!("failed to encode workflow: {e}"))
        }
        "add" => {
            if args.len() < 2 || args.len() > 3 {
                return Err("usage: workflow add <name> [description]".to_string());
            }
            validate_workflow_name(&args[1])?;
            let store = open_store()?;
            let workflow = store
                .create_workflow(&args[1], args.get(2).map(String::as_str), now_ms())
                .map_err(|e| e.to_string())?;
            Ok(format!(
                "workflow added\nid={}\nname={}",
                workflow.id, workflow.name
            ))
        }
        "update" => {
            if args.len() < 3 || args.len() > 4 {
                return Err(
                    "usage: workflow update <workflow_id> <name> [description]".to_string(),
                );
            }
            let workflow_id = parse_id("workflow", &args[1])?;
            validate_workflow_name(&args[2])?;
            let store = open_store()?;
            let workflow = store
                .update_workflow(workflow_id, &args[2], args.get(3).map(String::as_str))
                .map_err(|e| e.to_string())?;
            Ok(format!(
                "workflow updated\nid={}\nname={}",
                workflow.id, workflow.name
            ))
        }
        "remove" => {
            if args.len() != 2 {
                return Err("usage: workflow remove <workflow_id>".to_string());
            }
            let workflow_id = parse_id("workflow", &args[1])?;
            let store = open_store()?;
            store.delete_workflow(workflow_id).map_err(|e| e.to_string())?;
            Ok(format!("workflow removed\nid={workflow_id}"))
        }
        "steps" => {
            if args.len() != 2 {
                return Err("usage: workflow steps <workflow_id>".to_string());
            }
            let workflow_id = parse_id("workflow", &args[1])?;
            let store = open_store()?;
            let steps = store.list_steps(workflow_id).map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&steps).map_err(|e| format!("failed to encode steps: {e}"))
        }
        "run" => {
            if args.len() != 2 {
                return Err("usage: workflow run <workflow_id>".to_string());
            }
            let workflow_id = parse_id("workflow", &args[1])?;
            let paths = ensure_state_root()?;
            let store = open_store_at(&paths)?;
            let runner = WorkflowRunner::new(&store).with_diagnostics_root(&paths.root);
            let run = runner
                .execute(workflow_id, now_ms())
                .map_err(|e| e.to_string())?;

            let mut lines = vec![
                format!("workflow executed with status: {}", run.status),
                format!("run_id={}", run.id),
            ];
            let logs = store.list_run_logs(run.id).map_err(|e| e.to_string())?;
            for log in &logs {
                lines.push(format!(
                    "{} [{}] {}",
                    format_timestamp(log.logged_at),
                    log.level,
                    log.message
                ));
            }
            Ok(lines.join("\n"))
        }
        "seed" => {
            if args.len() != 1 {
                return Err("usage: workflow seed".to_string());
            }
            let store = open_store()?;
            let workflow = store
                .create_workflow(
                    "Example Workflow",
                    Some("A sample workflow with delay and HTTP check steps"),
                    now_ms(),
                )
                .map_err(|e| e.to_string())?;
            let steps = [
                StepConfig::Delay { seconds: 1 },
                StepConfig::HttpCheck {
                    url: "https://example.com".to_string(),
                },
                StepConfig::Delay { seconds: 2 },
            ];
            for config in &steps {
                store
                    .append_step(workflow.id, config)
                    .map_err(|e| e.to_string())?;
            }
            Ok(format!(
                "workflow seeded\nid={}\nname={}\nsteps={}",
                workflow.id,
                workflow.name,
                steps.len()
            ))
        }
        other => Err(format!("unknown workflow subcommand `{other}`")),
    }
}

#[derive(Serialize)]
struct WorkflowView {
    #[serde(flatten)]
    workflow: WorkflowRecord,
    steps: Vec<StepRecord>,
    recent_runs: Vec<RunRecord>,
}
