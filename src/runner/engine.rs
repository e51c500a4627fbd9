use crate::runner::http_check::probe_url;
use crate::shared::logging::append_runner_log_line;
use crate::store::{
    LogLevel, RunRecord, RunStatus, StepConfig, StepSource, StoreError, WorkflowStore,
    MAX_DELAY_SECONDS, MIN_DELAY_SECONDS,
};
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("unknown workflow `{workflow_id}`")]
    WorkflowNotFound { workflow_id: i64 },
    #[error("run storage failed: {source}")]
    Store {
        #[source]
        source: StoreError,
    },
}

impl From<StoreError> for RunnerError {
    fn from(source: StoreError) -> Self {
        RunnerError::Store { source }
    }
}

/// Synchronous run engine: one run at a time, steps strictly in position
/// order, first failure ends the run.
pub struct WorkflowRunner<'a> {
    store: &'a WorkflowStore,
    diagnostics_root: Option<PathBuf>,
}

impl<'a> WorkflowRunner<'a> {
    pub fn new(store: &'a WorkflowStore) -> Self {
        Self {
            store,
            diagnostics_root: None,
        }
    }

    /// Also append `ts=.. run_id=..` diagnostics lines to `logs/runner.log`
    /// under the given state root. Diagnostics never fail a run.
    pub fn with_diagnostics_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.diagnostics_root = Some(root.into());
        self
    }

    /// Creates a running Run, executes every step in order, and returns the
    /// finished record. Each attempted step leaves one run log; the first
    /// failing step leaves an error log and the run finishes failed with no
    /// later step executed. A run with no steps succeeds immediately.
    pub fn execute(&self, workflow_id: i64, now: i64) -> Result<RunRecord, RunnerError> {
        let workflow = self.store.get_workflow(workflow_id).map_err(|err| match err {
            StoreError::WorkflowNotFound { workflow_id } => {
                RunnerError::WorkflowNotFound { workflow_id }
            }
            other => RunnerError::Store { source: other },
        })?;

        let clock_started = Instant::now();
        let run = self.store.create_run(workflow.id, now)?;
        self.diagnostics(
            run.id,
            now,
            &format!("workflow_id={} transition=running", workflow.id),
        );

        let sources = match self.store.list_step_sources(workflow.id) {
            Ok(sources) => sources,
            Err(err) => {
                // The run exists but its steps cannot be read; close it out
                // before surfacing the storage error.
                let at = elapsed_now(now, clock_started);
                let _ = self
                    .store
                    .append_run_log(run.id, None, LogLevel::Error, &err.to_string(), at);
                let _ = self.store.finalize_run(run.id, RunStatus::Failed, at);
                self.diagnostics(run.id, at, "transition=failed reason=step_load");
                return Err(RunnerError::Store { source: err });
            }
        };

        for source in &sources {
            match execute_step(source) {
                Ok(message) => {
                    let at = elapsed_now(now, clock_started);
                    self.store
                        .append_run_log(run.id, Some(source.id), LogLevel::Info, &message, at)?;
                    self.diagnostics(
                        run.id,
                        at,
                        &format!("step_id={} position={} outcome=ok", source.id, source.position),
                    );
                }
                Err(detail) => {
                    let at = elapsed_now(now, clock_started);
                    self.store
                        .append_run_log(run.id, Some(source.id), LogLevel::Error, &detail, at)?;
                    let finished = self.store.finalize_run(run.id, RunStatus::Failed, at)?;
                    self.diagnostics(
                        run.id,
                        at,
                        &format!("step_id={} transition=failed", source.id),
                    );
                    return Ok(finished);
                }
            }
        }

        let at = elapsed_now(now, clock_started);
        let finished = self.store.finalize_run(run.id, RunStatus::Succeeded, at)?;
        self.diagnostics(run.id, at, "transition=succeeded");
        Ok(finished)
    }

    fn diagnostics(&self, run_id: i64, now: i64, message: &str) {
        let Some(root) = &self.diagnostics_root else {
            return;
        };
        let line = format!("ts={now} run_id={run_id} {message}");
        let _ = append_runner_log_line(root, &line);
    }
}

/// Runs one step. `Ok` carries the info log message, `Err` the failure
/// detail recorded as the error log.
fn execute_step(source: &StepSource) -> Result<String, String> {
    let config = StepConfig::from_parts(&source.kind, &source.config)?;
    match config {
        StepConfig::Delay { seconds } => {
            let seconds = seconds.clamp(MIN_DELAY_SECONDS, MAX_DELAY_SECONDS);
            thread::sleep(Duration::from_secs(seconds as u64));
            Ok(format!("Delayed for {seconds} second(s)"))
        }
        StepConfig::HttpCheck { url } => {
            if url.trim().is_empty() {
                return Err("URL is required for http_check step".to_string());
            }
            match probe_url(&url) {
                Ok(status) => Ok(format!("HTTP {status} from {url}")),
                Err(detail) => Err(format!("HTTP check failed for {url}: {detail}")),
            }
        }
    }
}

fn elapsed_now(base_now: i64, started_at: Instant) -> i64 {
    base_now.saturating_add(started_at.elapsed().as_millis() as i64)
}
