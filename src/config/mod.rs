use crate::bot::args::is_valid_user_id;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_command_prefix")]
    pub command_prefix: String,
    /// Users allowed to approve tasks. Empty means everyone.
    #[serde(default)]
    pub approvers: Vec<String>,
}

fn default_command_prefix() -> String {
    "!".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file().to_string_lossy().to_string())
    }
}

impl Config {
    pub fn with_database(database: String) -> Self {
        Self {
            database,
            command_prefix: default_command_prefix(),
            approvers: Vec::new(),
        }
    }

    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("staffbot")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".staffbot")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("staffbot.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("staffbot.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)
            .map_err(|e| AppError::Config(format!("failed to parse configuration file: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the bot cannot work with.
    ///
    /// An empty prefix would turn every chat line into a command, and an
    /// approver name that can never be mentioned could never approve.
    pub fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("`database` must not be empty".to_string()));
        }

        if self.command_prefix.is_empty() || self.command_prefix.contains(char::is_whitespace) {
            return Err(AppError::Config(format!(
                "`command_prefix` must be non-empty and contain no spaces, got {:?}",
                self.command_prefix
            )));
        }

        if let Some(bad) = self.approvers.iter().find(|a| !is_valid_user_id(a)) {
            return Err(AppError::Config(format!(
                "`approvers` contains an invalid user name: {bad:?}"
            )));
        }

        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| AppError::Config(format!("failed to serialize configuration: {e}")))
    }

    /// Initialize configuration and database files.
    /// Returns the path of the database that was set up.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("staffbot.sqlite")
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config::with_database(db_path.to_string_lossy().to_string());
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                AppError::Io(io::Error::new(
                    e.kind(),
                    format!("cannot create database {}: {e}", db_path.display()),
                ))
            })?;
        }

        Ok(db_path)
    }
}
