use crate::config::{
    bootstrap_state_root, default_state_root_path, ConfigError, Settings, StatePaths,
};
use crate::store::{StoreError, WorkflowStore};
use chrono::{LocalResult, TimeZone, Utc};
use std::time::{SystemTime, UNIX_EPOCH};

pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as i64)
        .unwrap_or(0)
}

pub fn map_config_err(err: ConfigError) -> String {
    err.to_string()
}

pub fn map_store_err(err: StoreError) -> String {
    err.to_string()
}

pub fn ensure_state_root() -> Result<StatePaths, String> {
    let root = default_state_root_path().map_err(map_config_err)?;
    let paths = StatePaths::new(root);
    bootstrap_state_root(&paths).map_err(map_config_err)?;
    Ok(paths)
}

pub fn open_store() -> Result<WorkflowStore, String> {
    let paths = ensure_state_root()?;
    open_store_at(&paths)
}

pub fn open_store_at(paths: &StatePaths) -> Result<WorkflowStore, String> {
    let settings = Settings::from_path(&paths.settings_file()).map_err(map_config_err)?;
    let store =
        WorkflowStore::open(&settings.resolve_database_path(paths)).map_err(map_store_err)?;
    store.ensure_schema().map_err(map_store_err)?;
    Ok(store)
}

pub fn parse_id(kind: &str, raw: &str) -> Result<i64, String> {
    raw.parse::<i64>()
        .map_err(|_| format!("invalid {kind} id `{raw}`"))
}

/// Renders an epoch-millisecond stamp for command output.
pub fn format_timestamp(ms: i64) -> String {
    match Utc.timestamp_millis_opt(ms) {
        LocalResult::Single(at) => at.format("%Y-%m-%d %H:%M:%S%.3f UTC").to_string(),
        _ => format!("{ms}"),
    }
}
