use crate::errors::{AppError, AppResult};
use crate::models::policy::{DutyPolicy, PolicyPreset};
use crate::utils::time::{parse_duration_to_minutes, parse_lunch_window, parse_required_time};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The duty window must stay within one day.
const MAX_DUTY_LENGTH_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_policy")]
    pub policy: String,
    #[serde(default = "default_lunch_window")]
    pub lunch_window: String,
    #[serde(default = "default_flex_start")]
    pub flex_start: String,
    #[serde(default = "default_flex_latest")]
    pub flex_latest: String,
    #[serde(default = "default_strict_latest")]
    pub strict_latest: String,
    #[serde(default = "default_duty_length")]
    pub duty_length: String,
    #[serde(default = "default_min_work_duration")]
    pub min_work_duration: String,
    #[serde(default = "default_tolerance")]
    pub tolerance_minutes: f64,
}

fn default_policy() -> String {
    PolicyPreset::Canonical.code().to_string()
}
fn default_lunch_window() -> String {
    "12:00-13:00".to_string()
}
fn default_flex_start() -> String {
    "08:30".to_string()
}
fn default_flex_latest() -> String {
    "09:30".to_string()
}
fn default_strict_latest() -> String {
    "09:00".to_string()
}
fn default_duty_length() -> String {
    "9h".to_string()
}
fn default_min_work_duration() -> String {
    "8h".to_string()
}
fn default_tolerance() -> f64 {
    0.1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: default_policy(),
            lunch_window: default_lunch_window(),
            flex_start: default_flex_start(),
            flex_latest: default_flex_latest(),
            strict_latest: default_strict_latest(),
            duty_length: default_duty_length(),
            min_work_duration: default_min_work_duration(),
            tolerance_minutes: default_tolerance(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rdutycheck")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rdutycheck")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rdutycheck.conf")
    }

    /// Load configuration from `path`, or return defaults if the file does not exist
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Write the default configuration to `path`, creating parent directories.
    pub fn init_at(path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        let mut file = fs::File::create(path).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(())
    }

    /// Validate the textual fields and build the policy the reconciler runs on.
    pub fn to_policy(&self, preset_override: Option<PolicyPreset>) -> AppResult<DutyPolicy> {
        let preset = match preset_override {
            Some(p) => p,
            None => PolicyPreset::from_code(&self.policy)?,
        };

        let (lunch_start, lunch_end) = parse_lunch_window(&self.lunch_window).ok_or_else(|| {
            AppError::Config(format!("invalid lunch_window '{}'", self.lunch_window))
        })?;

        let flex_start = parse_required_time(&self.flex_start)?;
        let flex_latest = parse_required_time(&self.flex_latest)?;
        let strict_latest = parse_required_time(&self.strict_latest)?;

        if flex_latest < flex_start || strict_latest < flex_start {
            return Err(AppError::Config(
                "flex_latest and strict_latest must not precede flex_start".into(),
            ));
        }

        let duty_length_minutes = parse_duration_to_minutes(&self.duty_length)?;
        if duty_length_minutes > MAX_DUTY_LENGTH_MINUTES {
            return Err(AppError::Config(format!(
                "duty_length '{}' exceeds 24h",
                self.duty_length
            )));
        }

        let required = parse_duration_to_minutes(&self.min_work_duration)?;
        if required > duty_length_minutes {
            return Err(AppError::Config(format!(
                "min_work_duration '{}' exceeds duty_length '{}'",
                self.min_work_duration, self.duty_length
            )));
        }

        if !self.tolerance_minutes.is_finite() || self.tolerance_minutes < 0.0 {
            return Err(AppError::Config(format!(
                "invalid tolerance_minutes {}",
                self.tolerance_minutes
            )));
        }

        Ok(DutyPolicy {
            preset,
            lunch_start,
            lunch_end,
            flex_start,
            flex_latest,
            strict_latest,
            strict_when_leave_present: preset == PolicyPreset::StrictLeave,
            duty_length_minutes,
            required_minutes: required as f64,
            tolerance_minutes: self.tolerance_minutes,
        })
    }
}
