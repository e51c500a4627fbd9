pub mod error;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use paths::{
    bootstrap_state_root, default_state_root_path, StatePaths, DATABASE_FILE_NAME,
    DEFAULT_STATE_ROOT_DIR, SETTINGS_FILE_NAME, STATE_ROOT_ENV,
};
pub use settings::Settings;
