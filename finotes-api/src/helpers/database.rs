use crate::config::ApiConfig;
use std::path::{Path, PathBuf};

/// Returns the path to the finotes database based on the operating system
///
/// # Returns
///
/// A PathBuf pointing to the database file
///
/// # Platform-specific paths
///
/// - **macOS**: `~/Library/Application Support/finotes/db.sqlite3`
/// - **Linux**: `~/.local/share/finotes/db.sqlite3`
/// - **Windows**: `%LOCALAPPDATA%\finotes\db.sqlite3`
pub fn get_db_path() -> anyhow::Result<PathBuf> {
    let data_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine local data directory"))?;

    Ok(data_dir.join("finotes").join("db.sqlite3"))
}

/// Database path from the command line, then the config file, then the platform default
pub fn resolve_db_path(cli_path: Option<PathBuf>, config: &ApiConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli_path {
        return Ok(path);
    }

    if let Some(path) = config.database.as_ref().and_then(|db| db.path.as_ref()) {
        return Ok(PathBuf::from(path));
    }

    get_db_path()
}

/// Initialize the database connection
pub fn initialize_database(
    db_path: &Path,
) -> anyhow::Result<std::sync::Arc<crate::database::Database>> {
    let db = crate::database::Database::new(db_path)?;
    Ok(std::sync::Arc::new(db))
}
