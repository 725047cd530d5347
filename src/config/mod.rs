use crate::core::display::DurationFormats;
use crate::core::session::TrackerSettings;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Keep the running counter across restarts.
    #[serde(default = "default_persist_session")]
    pub persist_session: bool,
    #[serde(default = "default_long_format")]
    pub long_format: String,
    #[serde(default = "default_short_format")]
    pub short_format: String,
    /// 0 disables the reminder.
    #[serde(default = "default_break_reminder")]
    pub break_reminder_minutes: u64,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_persist_session() -> bool {
    true
}
fn default_long_format() -> String {
    "h [hours], m [minutes], s [seconds]".to_string()
}
fn default_short_format() -> String {
    "h[h] m[m] s[s]".to_string()
}
fn default_break_reminder() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            persist_session: default_persist_session(),
            long_format: default_long_format(),
            short_format: default_short_format(),
            break_reminder_minutes: default_break_reminder(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rworktracker")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rworktracker")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rworktracker.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rworktracker.sqlite")
    }

    /// Load the configuration file, or defaults if it does not exist
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<String> {
        let dir = Self::config_dir();

        // DB path: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = expand_tilde(&name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => Self::database_file(),
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save_to(&Self::config_file())?;
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path.to_string_lossy().to_string())
    }

    /// Settings handed to the tracker.
    pub fn tracker_settings(&self) -> TrackerSettings {
        TrackerSettings {
            formats: DurationFormats {
                long: self.long_format.clone(),
                short: self.short_format.clone(),
            },
            break_reminder_secs: self.break_reminder_minutes.saturating_mul(60),
        }
    }

    /// Reject values the tracker cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.database.trim().is_empty() {
            return Err(AppError::Config("'database' must not be empty".into()));
        }
        if self.long_format.trim().is_empty() || self.short_format.trim().is_empty() {
            return Err(AppError::Config("duration formats must not be empty".into()));
        }
        Ok(())
    }
}
