//! File System Utilities
//!
//! Configuration directory management for the file-backed culture store.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/culture-service/` or `$XDG_CONFIG_HOME/culture-service/`
/// - **macOS**: `~/Library/Application Support/com.cyenx.culture-service/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\cyenx\culture-service\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "cyenx", "culture-service") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}
