use crate::app::command_support::{format_timestamp, open_store, parse_id};

pub fn cmd_run(args: &[String]) -> Result<String, String> {
    if args.is_empty() {
        return Err("usage: run <list|show> ...".to_string());
    }

    match args[0].as_str() {
        "list" => {
            if args.len() != 2 {
                return Err("usage: run list <workflow_id>".to_string());
            }
            let workflow_id = parse_id("workflow", &args[1])?;
            let store = open_store()?;
            let runs = store
                .list_runs(workflow_id, None)
                .map_err(|e| e.to_string())?;
            if runs.is_empty() {
                return Ok("no runs".to_string());
            }
            Ok(runs
                .iter()
                .map(|run| {
                    let finished = run
                        .finished_at
                        .map(format_timestamp)
                        .unwrap_or_else(|| "-".to_string());
                    format!(
                        "id={} status={} started={} finished={}",
                        run.id,
                        run.status,
                        format_timestamp(run.started_at),
                        finished
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"))
        }
        "show" => {
            if args.len() != 2 {
                return Err("usage: run show <run_id>".to_string());
            }
            let run_id = parse_id("run", &args[1])?;
            let store = open_store()?;
            let run = store.get_run(run_id).map_err(|e| e.to_string())?;
            let workflow = store
                .get_workflow(run.workflow_id)
                .map_err(|e| e.to_string())?;
            let logs = store.list_run_logs(run_id).map_err(|e| e.to_string())?;

            let mut lines = vec![
                format!("run_id={}", run.id),
                format!("workflow_id={}", workflow.id),
                format!("workflow_name={}", workflow.name),
                format!("status={}", run.status),
                format!("started={}", format_timestamp(run.started_at)),
            ];
            if let Some(finished_at) = run.finished_at {
                lines.push(format!("finished={}", format_timestamp(finished_at)));
            }
            if !logs.is_empty() {
                lines.push("logs:".to_string());
                for log in &logs {
                    let step = log
                        .step_id
                        .map(|id| format!(" step={id}"))
                        .unwrap_or_default();
                    lines.push(format!(
                        "  {} [{}]{} {}",
                        format_timestamp(log.logged_at),
                        log.level,
                        step,
                        log.message
                    ));
                }
            }
            Ok(lines.join("\n"))
        }
        other => Err(format!("unknown run subcommand `{other}`")),
    }
}
