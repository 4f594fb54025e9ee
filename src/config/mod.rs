use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_opening_time")]
    pub opening_time: String,
    #[serde(default = "default_closing_time")]
    pub closing_time: String,
    #[serde(default = "default_slot_interval")]
    pub slot_interval: u32,
    /// Reject bookings overlapping another appointment of the same staff member.
    #[serde(default)]
    pub check_conflicts: bool,
    /// Reject bookings on days the staff member does not work.
    #[serde(default)]
    pub enforce_schedule: bool,
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_opening_time() -> String {
    "09:00".to_string()
}
fn default_closing_time() -> String {
    "18:00".to_string()
}
fn default_slot_interval() -> u32 {
    30
}
fn default_currency() -> String {
    "$".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            opening_time: default_opening_time(),
            closing_time: default_closing_time(),
            slot_interval: default_slot_interval(),
            check_conflicts: false,
            enforce_schedule: false,
            currency: default_currency(),
        }
    }

    /// Return the standard configuration directory (`~/.salonbook`)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".salonbook")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("salonbook.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("salonbook.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parsed opening and closing times.
    pub fn opening_hours(&self) -> AppResult<(NaiveTime, NaiveTime)> {
        let open = parse_time(&self.opening_time)
            .ok_or_else(|| AppError::Config(format!("invalid opening_time '{}'", self.opening_time)))?;
        let close = parse_time(&self.closing_time)
            .ok_or_else(|| AppError::Config(format!("invalid closing_time '{}'", self.closing_time)))?;
        Ok((open, close))
    }

    pub fn validate(&self) -> AppResult<()> {
        let (open, close) = self.opening_hours()?;
        if open >= close {
            return Err(AppError::Config(
                "opening_time must be earlier than closing_time".into(),
            ));
        }
        if self.slot_interval == 0 {
            return Err(AppError::Config("slot_interval must be positive".into()));
        }
        Ok(())
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Self::with_database(db_path.clone());

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
