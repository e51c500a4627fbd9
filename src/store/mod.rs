pub mod domain;
pub mod error;
pub mod repository;

pub use domain::{
    validate_workflow_name, LogLevel, RunLogRecord, RunRecord, RunStatus, StepConfig, StepKind,
    StepRecord, StepSource, WorkflowRecord, WorkflowSummary, MAX_DELAY_SECONDS,
    MAX_WORKFLOW_NAME_CHARS, MIN_DELAY_SECONDS,
};
pub use error::StoreError;
pub use repository::WorkflowStore;
