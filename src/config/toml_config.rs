use crate::core::duration::parse_duration;
use crate::core::timestamp::parse_date;
use crate::core::window::QueryWindow;
use crate::domain::ports::Clock;
use crate::utils::error::{Result, TimekitError};
use crate::utils::validation::{validate_non_empty_string, validate_parses, Validate};
use chrono::TimeDelta;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default)]
    pub window: WindowSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSection {
    #[serde(default = "default_lookback")]
    pub lookback: String,
    pub stop: Option<String>,
}

fn default_lookback() -> String {
    "1h".to_string()
}

impl Default for WindowSection {
    fn default() -> Self {
        Self {
            lookback: default_lookback(),
            stop: None,
        }
    }
}

impl WindowConfig {
    /// 從 TOML 檔案載入 `[window]` 配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        toml::from_str(&processed).map_err(|e| TimekitError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOOKBACK})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn to_query_window(&self, clock: &dyn Clock) -> Result<QueryWindow> {
        QueryWindow::from_lookback_with_clock(
            &self.window.lookback,
            self.window.stop.as_deref(),
            clock,
        )
    }
}

impl Validate for WindowConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("window.lookback", &self.window.lookback)?;
        let span = validate_parses("window.lookback", &self.window.lookback, parse_duration)?;
        if span < TimeDelta::zero() {
            return Err(TimekitError::InvalidConfigValueError {
                field: "window.lookback".to_string(),
                value: self.window.lookback.clone(),
                reason: "Lookback must not be negative".to_string(),
            });
        }

        if let Some(stop) = &self.window.stop {
            validate_parses("window.stop", stop, parse_date)?;
        }

        Ok(())
    }
}
