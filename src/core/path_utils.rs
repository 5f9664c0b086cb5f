/*
 * Locates the per-user directory that holds this application's settings, and
 * formats paths for display.
 */
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/*
 * Returns the platform's local (non-roaming) configuration directory for
 * `app_name`, creating it when missing. `None` when no home directory can be
 * determined or the directory cannot be created.
 */
pub fn get_app_config_dir(app_name: &str) -> Option<PathBuf> {
    let proj_dirs = ProjectDirs::from("", "", app_name)?;
    let config_dir = proj_dirs.config_local_dir();
    if !config_dir.exists() {
        if let Err(e) = fs::create_dir_all(config_dir) {
            log::error!("PathUtils: Failed to create config directory {config_dir:?}: {e}");
            return None;
        }
        log::debug!("PathUtils: Created config directory {config_dir:?}");
    }
    Some(config_dir.to_path_buf())
}

/* The file name of `path`, or the whole path when it has none. */
pub fn describe_source(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
