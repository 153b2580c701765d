use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use shared_types::{ExtractorSettings, UserProfile};
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub cors: Option<CorsConfig>,
    pub server: Option<ServerConfig>,
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub extractor: ExtractorSettings,
    #[serde(default)]
    pub profile: ProfileDefaults,
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors: Some(CorsConfig {
                allowed_origins: vec!["http://localhost:5173".to_string()],
            }),
            server: Some(ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }),
            database: None,
            extractor: ExtractorSettings::default(),
            profile: ProfileDefaults::default(),
            ledger: LedgerConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub path: Option<String>,
}

/// Profile written to the database the first time the server starts
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ProfileDefaults {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub currency: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@example.com".to_string(),
            phone: "+62 812 3456 7890".to_string(),
            currency: "IDR (Rp)".to_string(),
        }
    }
}

impl From<ProfileDefaults> for UserProfile {
    fn from(defaults: ProfileDefaults) -> Self {
        UserProfile {
            name: defaults.name,
            email: defaults.email,
            phone: defaults.phone,
            currency: defaults.currency,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LedgerConfig {
    /// Currency code reported in summaries
    pub currency: String,
    /// Categories offered when adding an expense by hand
    pub categories: Vec<String>,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency: "IDR".to_string(),
            categories: [
                "Food",
                "Transportation",
                "Bills",
                "Shopping",
                "Entertainment",
                "Health",
                "Education",
                "Other",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }
}

const DEFAULT_CONFIG: &str = r#"
[cors]
allowed_origins = ["http://localhost:5173"]

[server]
host = "127.0.0.1"
port = 8080

[database]
# path = "/path/to/finotes.sqlite3"

[extractor]
# income_marker = "💰"
# expense_marker = "💸"
# Used when a reply carries neither marker: "expense" or "income"
# default_type = "expense"
# category_labels = ["Kategori", "Category"]
# category_keywords = ["food", "electronics", "transportation", "entertainment", "shopping"]
# fallback_category = "other"

[profile]
# name = "Alex Johnson"
# email = "alex.johnson@example.com"
# phone = "+62 812 3456 7890"
# currency = "IDR (Rp)"

[ledger]
# currency = "IDR"
# categories = ["Food", "Transportation", "Bills", "Shopping", "Entertainment", "Health", "Education", "Other"]
"#;

impl ApiConfig {
    /// Load from `path`, or from the platform config directory when `path` is `None`.
    ///
    /// A commented default file is written if nothing exists yet.
    pub fn load(path: Option<&Path>) -> Result<(Self, PathBuf), ConfigError> {
        let config_path = path.map(Path::to_path_buf).unwrap_or_else(get_config_path);

        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        // Create default config file if it doesn't exist
        if !config_path.exists() {
            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| {
                ConfigError::Message(format!("Failed to write default config: {e}"))
            })?;
        }

        let builder = Config::builder()
            .add_source(File::from(config_path.clone()))
            .build()?;

        let config: ApiConfig = builder.try_deserialize()?;

        Ok((config, config_path))
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("finotes").join("api.toml")
    } else {
        PathBuf::from("api.toml")
    }
}
