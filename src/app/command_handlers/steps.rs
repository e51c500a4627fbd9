use crate::app::command_support::{open_store, parse_id};
use crate::store::StepConfig;

pub fn cmd_step(args: &[String]) -> Result<String, String> {
    if args.is_empty() {
        return Err("usage: step <add|remove|move-up|move-down|reorder> ...".to_string());
    }

    match args[0].as_str() {
        "add" => {
            if args.len() != 4 {
                return Err(
                    "usage: step add <workflow_id> <delay|http_check> <config_json>".to_string(),
                );
            }
            let workflow_id = parse_id("workflow", &args[1])?;
            let config = StepConfig::parse_request(&args[2], &args[3])?;
            let store = open_store()?;
            let step = store
                .append_step(workflow_id, &config)
                .map_err(|e| e.to_string())?;
            Ok(format!(
                "step added\nworkflow={}\nstep={}\nposition={}",
                step.workflow_id, step.id, step.position
            ))
        }
        "remove" => {
            if args.len() != 2 {
                return Err("usage: step remove <step_id>".to_string());
            }
            let step_id = parse_id("step", &args[1])?;
            let store = open_store()?;
            store.delete_step(step_id).map_err(|e| e.to_string())?;
            Ok(format!("step removed\nstep={step_id}"))
        }
        "move-up" => {
            if args.len() != 2 {
                return Err("usage: step move-up <step_id>".to_string());
            }
            let step_id = parse_id("step", &args[1])?;
            let store = open_store()?;
            if store.move_step_up(step_id).map_err(|e| e.to_string())? {
                Ok(format!("step moved up\nstep={step_id}"))
            } else {
                Ok(format!("step already first\nstep={step_id}"))
            }
        }
        "move-down" => {
            if args.len() != 2 {
                return Err("usage: step move-down <step_id>".to_string());
            }
            let step_id = parse_id("step", &args[1])?;
            let store = open_store()?;
            if store.move_step_down(step_id).map_err(|e| e.to_string())? {
                Ok(format!("step moved down\nstep={step_id}"))
            } else {
                Ok(format!("step already last\nstep={step_id}"))
            }
        }
        "reorder" => {
            if args.len() != 3 {
                return Err("usage: step reorder <workflow_id> <step_id,step_id,...>".to_string());
            }
            let workflow_id = parse_id("workflow", &args[1])?;
            let ordered = parse_step_id_list(&args[2])?;
            let store = open_store()?;
            store
                .reorder_steps(workflow_id, &ordered)
                .map_err(|e| e.to_string())?;
            Ok(format!(
                "steps reordered\nworkflow={}\norder={}",
                workflow_id, args[2]
            ))
        }
        other => Err(format!("unknown step subcommand `{other}`")),
    }
}

fn parse_step_id_list(raw: &str) -> Result<Vec<i64>, String> {
    let mut ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            return Err("step ordering must be a comma-separated list of ids".to_string());
        }
        ids.push(
            part.parse::<i64>()
                .map_err(|_| format!("invalid step id `{part}`"))?,
        );
    }
    Ok(ids)
}
