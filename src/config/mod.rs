pub mod error;
pub mod load;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use load::load_global_settings;
pub use paths::{
    default_global_config_path, default_state_root, GLOBAL_SETTINGS_FILE_NAME, GLOBAL_STATE_DIR,
};
pub use settings::{
    BackendSettings, Settings, BACKEND_ANON_KEY_ENV, BACKEND_TABLE_ENV, BACKEND_URL_ENV,
    DEFAULT_SUBMISSIONS_TABLE,
};
