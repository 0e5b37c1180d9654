use crate::app::command_support::{load_settings, map_config_err};
use crate::config::default_global_config_path;

pub fn cmd_config() -> Result<String, String> {
    let path = default_global_config_path().map_err(map_config_err)?;
    let settings = load_settings()?;
    let backend = &settings.backend;
    Ok(format!(
        "config={}\nbackend.url={}\nbackend.table={}\nbackend.anon_key={}\nbackend.timeout_secs={}",
        path.display(),
        backend.url,
        backend.table,
        backend.masked_anon_key(),
        backend.timeout_secs
    ))
}
