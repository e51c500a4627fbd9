pub mod engine;
pub mod http_check;

pub use engine::{RunnerError, WorkflowRunner};
pub use http_check::{probe_url, HTTP_CHECK_TIMEOUT};
