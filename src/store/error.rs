use super::domain::RunStatus;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("sqlite open failed at {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("failed to create database parent {path}: {source}")]
    CreateParent {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("sqlite statement failed: {source}")]
    Sql {
        #[source]
        source: rusqlite::Error,
    },
    #[error("unknown workflow `{workflow_id}`")]
    WorkflowNotFound { workflow_id: i64 },
    #[error("unknown step `{step_id}`")]
    StepNotFound { step_id: i64 },
    #[error("unknown run `{run_id}`")]
    RunNotFound { run_id: i64 },
    #[error("invalid run status `{value}` in database")]
    InvalidRunStatus { value: String },
    #[error("invalid log level `{value}` in database")]
    InvalidLogLevel { value: String },
    #[error("invalid config for step `{step_id}`: {detail}")]
    InvalidStepConfig { step_id: i64, detail: String },
    #[error("run `{run_id}` transition `{from}` -> `{to}` is invalid")]
    InvalidRunTransition {
        run_id: i64,
        from: RunStatus,
        to: RunStatus,
    },
    #[error("reorder validation failed: {0}")]
    InvalidReorder(String),
}
