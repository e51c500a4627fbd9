use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const MIN_DELAY_SECONDS: i64 = 1;
pub const MAX_DELAY_SECONDS: i64 = 2;

pub const MAX_WORKFLOW_NAME_CHARS: usize = 255;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Running,
    Succeeded,
    Failed,
}

impl RunStatus {
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (RunStatus::Running, RunStatus::Succeeded) | (RunStatus::Running, RunStatus::Failed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Succeeded | RunStatus::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Running => "running",
            RunStatus::Succeeded => "succeeded",
            RunStatus::Failed => "failed",
        }
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Delay,
    HttpCheck,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Delay => "delay",
            StepKind::HttpCheck => "http_check",
        }
    }

    pub fn parse(value: &str) -> Result<Self, String> {
        match value {
            "delay" => Ok(StepKind::Delay),
            "http_check" => Ok(StepKind::HttpCheck),
            other => Err(format!(
                "unknown step type `{other}`, expected one of: delay, http_check"
            )),
        }
    }
}

impl std::fmt::Display for StepKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

fn default_delay_seconds() -> i64 {
    MIN_DELAY_SECONDS
}

/// Per-kind step payload. Serializes as `type` plus a `config` object, which
/// is also the JSON shape `workflow steps` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "config", rename_all = "snake_case")]
pub enum StepConfig {
    Delay {
        #[serde(default = "default_delay_seconds")]
        seconds: i64,
    },
    HttpCheck {
        #[serde(default)]
        url: String,
    },
}

impl StepConfig {
    pub fn kind(&self) -> StepKind {
        match self {
            StepConfig::Delay { .. } => StepKind::Delay,
            StepConfig::HttpCheck { .. } => StepKind::HttpCheck,
        }
    }

    /// JSON body stored in the step's config column.
    pub fn config_json(&self) -> String {
        match self {
            StepConfig::Delay { seconds } => serde_json::json!({ "seconds": seconds }).to_string(),
            StepConfig::HttpCheck { url } => serde_json::json!({ "url": url }).to_string(),
        }
    }

    /// Strict construction for operator input: the kind must be known, delay
    /// seconds must be an integer within range, and the check URL must carry
    /// an http(s) scheme.
    pub fn parse_request(kind: &str, config_json: &str) -> Result<Self, String> {
        let kind = StepKind::parse(kind)?;
        let config: Value = serde_json::from_str(config_json)
            .map_err(|err| format!("step config must be valid json: {err}"))?;
        let fields = config
            .as_object()
            .ok_or_else(|| "step config must be a json object".to_string())?;
        match kind {
            StepKind::Delay => {
                let seconds = fields
                    .get("seconds")
                    .and_then(Value::as_i64)
                    .ok_or_else(|| "delay config requires an integer `seconds`".to_string())?;
                if !(MIN_DELAY_SECONDS..=MAX_DELAY_SECONDS).contains(&seconds) {
                    return Err(format!(
                        "delay `seconds` must be between {MIN_DELAY_SECONDS} and {MAX_DELAY_SECONDS}"
                    ));
                }
                Ok(StepConfig::Delay { seconds })
            }
            StepKind::HttpCheck => {
                let url = fields
                    .get("url")
                    .and_then(Value::as_str)
                    .ok_or_else(|| "http_check config requires a `url`".to_string())?;
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err("http_check `url` must start with http:// or https://".to_string());
                }
                Ok(StepConfig::HttpCheck {
                    url: url.to_string(),
                })
            }
        }
    }

    /// Lenient construction from stored rows. Missing delay seconds default
    /// to the minimum and an empty check URL is allowed through; execution
    /// clamps and guards those. Unknown kinds and unreadable JSON fail here.
    pub fn from_parts(kind: &str, config_json: &str) -> Result<Self, String> {
        let kind =
            StepKind::parse(kind).map_err(|_| format!("Unknown step type: {kind}"))?;
        let config: Value = if config_json.trim().is_empty() {
            Value::Object(serde_json::Map::new())
        } else {
            serde_json::from_str(config_json)
                .map_err(|err| format!("invalid {kind} step config: {err}"))?
        };
        let tagged = serde_json::json!({ "type": kind.as_str(), "config": config });
        serde_json::from_value(tagged).map_err(|err| format!("invalid {kind} step config: {err}"))
    }
}

pub fn validate_workflow_name(name: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("workflow name must not be empty".to_string());
    }
    if name.chars().count() > MAX_WORKFLOW_NAME_CHARS {
        return Err(format!(
            "workflow name must be at most {MAX_WORKFLOW_NAME_CHARS} characters"
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
}

/// Listing row: a workflow plus its step and run counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSummary {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: i64,
    pub step_count: i64,
    pub run_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRecord {
    pub id: i64,
    pub workflow_id: i64,
    pub position: i64,
    #[serde(flatten)]
    pub config: StepConfig,
}

/// Raw step row handed to the run engine. The kind and config stay undecoded
/// so earlier steps execute before a later bad row fails the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSource {
    pub id: i64,
    pub position: i64,
    pub kind: String,
    pub config: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub id: i64,
    pub workflow_id: i64,
    pub status: RunStatus,
    pub started_at: i64,
    pub finished_at: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunLogRecord {
    pub id: i64,
    pub run_id: i64,
    pub step_id: Option<i64>,
    pub level: LogLevel,
    pub message: String,
    pub logged_at: i64,
}
