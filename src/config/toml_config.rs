use crate::config::{parse_timestamp, DEFAULT_GRANULARITY_MINUTES};
use crate::domain::model::SlotWindow;
use crate::domain::ports::ScheduleConfigProvider;
use crate::utils::error::{BookingError, Result};
use crate::utils::validation::validate_url;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub schedule: ScheduleSection,
    pub notifier: Option<NotifierSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSection {
    pub window_start: String,
    pub window_end: String,
    pub granularity_minutes: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierSection {
    pub endpoint: String,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BookingError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);

        let config: TomlConfig =
            toml::from_str(&processed).map_err(|e| BookingError::Config {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;
        config.validate_config()?;
        Ok(config)
    }

    /// Replaces `${VAR}` placeholders with environment values; unknown
    /// variables are left as-is so validation reports them in context.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }

    pub fn validate_config(&self) -> Result<()> {
        // Building the window exercises all schedule-level checks.
        self.window()?;

        if let Some(notifier) = &self.notifier {
            validate_url("notifier.endpoint", &notifier.endpoint)?;
        }
        Ok(())
    }
}

impl ScheduleConfigProvider for TomlConfig {
    fn window(&self) -> Result<SlotWindow> {
        let start = parse_timestamp("schedule.window_start", &self.schedule.window_start)?;
        let end = parse_timestamp("schedule.window_end", &self.schedule.window_end)?;
        let granularity = self
            .schedule
            .granularity_minutes
            .unwrap_or(DEFAULT_GRANULARITY_MINUTES);
        SlotWindow::new(start, end, granularity)
    }

    fn notify_endpoint(&self) -> Option<&str> {
        self.notifier.as_ref().map(|n| n.endpoint.as_str())
    }
}
