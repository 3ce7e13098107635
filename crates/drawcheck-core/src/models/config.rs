/// Configuration models
use crate::utils::validation::validate_email_address;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Runtime configuration, loaded once per cold start
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DrawCheckConfig {
    pub results: ResultsApiConfig,
    pub lookup: LookupConfig,
    pub notification: NotificationConfig,
    #[serde(default)]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultsApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub game_id: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ResultsApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LookupConfig {
    pub table_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    pub sender: String,
    pub recipient: String,
    pub ses_region: String,
}

impl DrawCheckConfig {
    /// Validates configuration is valid
    pub fn validate(&self) -> Result<(), String> {
        if self.results.api_key.trim().is_empty() {
            return Err("Results API key not configured".to_string());
        }

        if self.results.game_id.trim().is_empty() {
            return Err("Game id not configured".to_string());
        }

        let url = Url::parse(&self.results.base_url)
            .map_err(|e| format!("Invalid results API URL {}: {}", self.results.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "Results API URL must be http(s): {}",
                self.results.base_url
            ));
        }

        if self.results.timeout_secs == 0 {
            return Err("Request timeout must be > 0".to_string());
        }

        if self.lookup.table_name.trim().is_empty() {
            return Err("Lookup table name not configured".to_string());
        }

        validate_email_address(&self.notification.sender).map_err(|e| e.to_string())?;
        validate_email_address(&self.notification.recipient).map_err(|e| e.to_string())?;

        if self.notification.ses_region.trim().is_empty() {
            return Err("SES region not configured".to_string());
        }

        Ok(())
    }
}
