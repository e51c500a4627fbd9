use rusqlite::Connection;
use stepline::store::{LogLevel, RunStatus, StepConfig, StoreError, WorkflowStore};
use tempfile::tempdir;

fn open_store(dir: &std::path::Path) -> WorkflowStore {
    let store = WorkflowStore::open(&dir.join("stepline.db")).expect("open store");
    store.ensure_schema().expect("ensure schema");
    store
}

fn raw_connection(store: &WorkflowStore) -> Connection {
    Connection::open(store.database_path()).expect("open raw connection")
}

fn count_rows(connection: &Connection, table: &str) -> i64 {
    connection
        .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .expect("count rows")
}

fn delay(seconds: i64) -> StepConfig {
    StepConfig::Delay { seconds }
}

fn http_check(url: &str) -> StepConfig {
    StepConfig::HttpCheck {
        url: url.to_string(),
    }
}

#[test]
fn workflow_create_get_round_trip() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());

    let created = store
        .create_workflow("Deploy checks", Some("nightly"), 1_000)
        .expect("create workflow");
    assert_eq!(created.name, "Deploy checks");
    assert_eq!(created.description.as_deref(), Some("nightly"));
    assert_eq!(created.created_at, 1_000);

    let loaded = store.get_workflow(created.id).expect("get workflow");
    assert_eq!(loaded, created);

    let err = store.get_workflow(9_999).expect_err("missing workflow");
    assert!(matches!(err, StoreError::WorkflowNotFound { workflow_id: 9_999 }));
}

#[test]
fn workflow_listing_is_newest_first_with_counts() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());

    let older = store
        .create_workflow("Older", None, 1_000)
        .expect("create older");
    let newer = store
        .create_workflow("Newer", None, 2_000)
        .expect("create newer");
    store.append_step(older.id, &delay(1)).expect("append step");
    store.append_step(older.id, &delay(2)).expect("append step");
    store.create_run(older.id, 3_000).expect("create run");

    let listed = store.list_workflows().expect("list workflows");
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, newer.id);
    assert_eq!(listed[0].step_count, 0);
    assert_eq!(listed[0].run_count, 0);
    assert_eq!(listed[1].id, older.id);
    assert_eq!(listed[1].step_count, 2);
    assert_eq!(listed[1].run_count, 1);
}

#[test]
fn workflow_update_replaces_name_and_description() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());

    let workflow = store
        .create_workflow("Before", Some("old"), 1_000)
        .expect("create workflow");
    let updated = store
        .update_workflow(workflow.id, "After", None)
        .expect("update workflow");
    assert_eq!(updated.name, "After");
    assert_eq!(updated.description, None);
    assert_eq!(updated.created_at, 1_000);

    let err = store
        .update_workflow(9_999, "Nope", None)
        .expect_err("missing workflow");
    assert!(matches!(err, StoreError::WorkflowNotFound { .. }));
}

#[test]
fn workflow_delete_cascades_to_steps_runs_and_logs() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());

    let workflow = store
        .create_workflow("Doomed", None, 1_000)
        .expect("create workflow");
    let step = store
        .append_step(workflow.id, &delay(1))
        .expect("append step");
    let run = store.create_run(workflow.id, 2_000).expect("create run");
    store
        .append_run_log(run.id, Some(step.id), LogLevel::Info, "Delayed for 1 second(s)", 2_100)
        .expect("append log");

    store.delete_workflow(workflow.id).expect("delete workflow");

    let err = store.get_workflow(workflow.id).expect_err("workflow gone");
    assert!(matches!(err, StoreError::WorkflowNotFound { .. }));

    let connection = raw_connection(&store);
    assert_eq!(count_rows(&connection, "steps"), 0);
    assert_eq!(count_rows(&connection, "runs"), 0);
    assert_eq!(count_rows(&connection, "run_logs"), 0);

    let err = store.delete_workflow(workflow.id).expect_err("double delete");
    assert!(matches!(err, StoreError::WorkflowNotFound { .. }));
}

#[test]
fn steps_append_to_the_end_of_the_sequence() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Ordered", None, 1_000)
        .expect("create workflow");

    let first = store
        .append_step(workflow.id, &delay(1))
        .expect("append first");
    let second = store
        .append_step(workflow.id, &http_check("https://example.com"))
        .expect("append second");
    let third = store
        .append_step(workflow.id, &delay(2))
        .expect("append third");
    assert_eq!((first.position, second.position, third.position), (1, 2, 3));

    let steps = store.list_steps(workflow.id).expect("list steps");
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0].config, delay(1));
    assert_eq!(steps[1].config, http_check("https://example.com"));
    assert_eq!(steps[2].config, delay(2));

    let err = store
        .append_step(9_999, &delay(1))
        .expect_err("missing workflow");
    assert!(matches!(err, StoreError::WorkflowNotFound { .. }));
}

#[test]
fn deleting_a_middle_step_renumbers_survivors() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Renumber", None, 1_000)
        .expect("create workflow");

    let first = store.append_step(workflow.id, &delay(1)).expect("step 1");
    let second = store.append_step(workflow.id, &delay(2)).expect("step 2");
    let third = store
        .append_step(workflow.id, &http_check("https://example.com"))
        .expect("step 3");

    store.delete_step(second.id).expect("delete middle step");

    let steps = store.list_steps(workflow.id).expect("list steps");
    assert_eq!(steps.len(), 2);
    assert_eq!((steps[0].id, steps[0].position), (first.id, 1));
    assert_eq!((steps[1].id, steps[1].position), (third.id, 2));

    let err = store.delete_step(second.id).expect_err("already deleted");
    assert!(matches!(err, StoreError::StepNotFound { .. }));
}

#[test]
fn deleting_a_step_keeps_run_history_unattributed() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("History", None, 1_000)
        .expect("create workflow");
    let step = store.append_step(workflow.id, &delay(1)).expect("step");
    let run = store.create_run(workflow.id, 2_000).expect("run");
    store
        .append_run_log(run.id, Some(step.id), LogLevel::Info, "Delayed for 1 second(s)", 2_100)
        .expect("append log");

    store.delete_step(step.id).expect("delete step");

    let logs = store.list_run_logs(run.id).expect("list logs");
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].step_id, None);
    assert_eq!(logs[0].message, "Delayed for 1 second(s)");
}

#[test]
fn moving_steps_swaps_neighbors_and_stops_at_the_edges() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Movable", None, 1_000)
        .expect("create workflow");

    let first = store.append_step(workflow.id, &delay(1)).expect("step 1");
    let second = store.append_step(workflow.id, &delay(2)).expect("step 2");
    let third = store
        .append_step(workflow.id, &http_check("https://example.com"))
        .expect("step 3");

    assert!(store.move_step_up(third.id).expect("move third up"));
    let order: Vec<i64> = store
        .list_steps(workflow.id)
        .expect("list steps")
        .iter()
        .map(|step| step.id)
        .collect();
    assert_eq!(order, vec![first.id, third.id, second.id]);

    assert!(!store.move_step_up(first.id).expect("first stays put"));
    assert!(!store.move_step_down(second.id).expect("last stays put"));

    assert!(store.move_step_down(first.id).expect("move first down"));
    let order: Vec<i64> = store
        .list_steps(workflow.id)
        .expect("list steps")
        .iter()
        .map(|step| step.id)
        .collect();
    assert_eq!(order, vec![third.id, first.id, second.id]);

    let err = store.move_step_up(9_999).expect_err("missing step");
    assert!(matches!(err, StoreError::StepNotFound { .. }));
}

#[test]
fn reorder_applies_the_supplied_sequence() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Reorder", None, 1_000)
        .expect("create workflow");

    let first = store.append_step(workflow.id, &delay(1)).expect("step 1");
    let second = store.append_step(workflow.id, &delay(2)).expect("step 2");
    let third = store
        .append_step(workflow.id, &http_check("https://example.com"))
        .expect("step 3");

    store
        .reorder_steps(workflow.id, &[third.id, first.id, second.id])
        .expect("reorder steps");

    let steps = store.list_steps(workflow.id).expect("list steps");
    let order: Vec<(i64, i64)> = steps.iter().map(|step| (step.id, step.position)).collect();
    assert_eq!(order, vec![(third.id, 1), (first.id, 2), (second.id, 3)]);
}

#[test]
fn reorder_rejects_foreign_partial_and_duplicate_ids() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Strict", None, 1_000)
        .expect("create workflow");
    let other = store
        .create_workflow("Other", None, 1_000)
        .expect("create other");

    let first = store.append_step(workflow.id, &delay(1)).expect("step 1");
    let second = store.append_step(workflow.id, &delay(2)).expect("step 2");
    let foreign = store.append_step(other.id, &delay(1)).expect("foreign step");

    let err = store
        .reorder_steps(workflow.id, &[first.id, foreign.id])
        .expect_err("foreign id should fail");
    assert!(err.to_string().contains("does not belong"));

    let err = store
        .reorder_steps(workflow.id, &[first.id])
        .expect_err("partial ordering should fail");
    assert!(err.to_string().contains("must list all 2 steps"));

    let err = store
        .reorder_steps(workflow.id, &[first.id, first.id])
        .expect_err("duplicate id should fail");
    assert!(err.to_string().contains("more than once"));

    // Nothing moved.
    let order: Vec<i64> = store
        .list_steps(workflow.id)
        .expect("list steps")
        .iter()
        .map(|step| step.id)
        .collect();
    assert_eq!(order, vec![first.id, second.id]);
}

#[test]
fn run_lifecycle_transitions_once_into_a_terminal_status() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Lifecycle", None, 1_000)
        .expect("create workflow");

    let run = store.create_run(workflow.id, 5_000).expect("create run");
    assert_eq!(run.status, RunStatus::Running);
    assert_eq!(run.started_at, 5_000);
    assert_eq!(run.finished_at, None);

    let finished = store
        .finalize_run(run.id, RunStatus::Succeeded, 6_000)
        .expect("finalize run");
    assert_eq!(finished.status, RunStatus::Succeeded);
    assert_eq!(finished.started_at, 5_000);
    assert_eq!(finished.finished_at, Some(6_000));
    assert_eq!(store.get_run(run.id).expect("get run"), finished);

    let err = store
        .finalize_run(run.id, RunStatus::Failed, 7_000)
        .expect_err("terminal run should not transition");
    assert!(matches!(err, StoreError::InvalidRunTransition { .. }));
    assert!(err.to_string().contains("`succeeded` -> `failed`"));

    let err = store
        .finalize_run(9_999, RunStatus::Failed, 7_000)
        .expect_err("missing run");
    assert!(matches!(err, StoreError::RunNotFound { .. }));

    let err = store.create_run(9_999, 5_000).expect_err("missing workflow");
    assert!(matches!(err, StoreError::WorkflowNotFound { .. }));
}

#[test]
fn runs_list_newest_first_and_honor_the_limit() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Runs", None, 1_000)
        .expect("create workflow");

    let early = store.create_run(workflow.id, 1_000).expect("early run");
    let middle = store.create_run(workflow.id, 2_000).expect("middle run");
    let late = store.create_run(workflow.id, 3_000).expect("late run");

    let all = store.list_runs(workflow.id, None).expect("list runs");
    let ids: Vec<i64> = all.iter().map(|run| run.id).collect();
    assert_eq!(ids, vec![late.id, middle.id, early.id]);

    let limited = store.list_runs(workflow.id, Some(2)).expect("limited runs");
    let ids: Vec<i64> = limited.iter().map(|run| run.id).collect();
    assert_eq!(ids, vec![late.id, middle.id]);

    let err = store.list_runs(9_999, None).expect_err("missing workflow");
    assert!(matches!(err, StoreError::WorkflowNotFound { .. }));
}

#[test]
fn run_logs_keep_recording_order_within_the_same_millisecond() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Logs", None, 1_000)
        .expect("create workflow");
    let run = store.create_run(workflow.id, 2_000).expect("create run");

    store
        .append_run_log(run.id, None, LogLevel::Info, "first", 2_500)
        .expect("append first");
    store
        .append_run_log(run.id, None, LogLevel::Warn, "second", 2_500)
        .expect("append second");
    store
        .append_run_log(run.id, None, LogLevel::Error, "third", 2_400)
        .expect("append third");

    let logs = store.list_run_logs(run.id).expect("list logs");
    let messages: Vec<&str> = logs.iter().map(|log| log.message.as_str()).collect();
    assert_eq!(messages, vec!["third", "first", "second"]);
    assert_eq!(logs[0].level, LogLevel::Error);
    assert_eq!(logs[2].level, LogLevel::Warn);

    let err = store.list_run_logs(9_999).expect_err("missing run");
    assert!(matches!(err, StoreError::RunNotFound { .. }));
}

#[test]
fn undecodable_step_rows_are_reported_with_their_id() {
    let temp = tempdir().expect("temp dir");
    let store = open_store(temp.path());
    let workflow = store
        .create_workflow("Corrupt", None, 1_000)
        .expect("create workflow");
    let step = store.append_step(workflow.id, &delay(1)).expect("step");

    let connection = raw_connection(&store);
    connection
        .execute("UPDATE steps SET config = '{broken' WHERE id = ?1", [step.id])
        .expect("corrupt config column");

    let err = store.get_step(step.id).expect_err("corrupt step should fail");
    assert!(matches!(err, StoreError::InvalidStepConfig { .. }));
    assert!(err.to_string().contains(&format!("step `{}`", step.id)));

    let err = store
        .list_steps(workflow.id)
        .expect_err("listing should surface the bad row");
    assert!(matches!(err, StoreError::InvalidStepConfig { .. }));
}
