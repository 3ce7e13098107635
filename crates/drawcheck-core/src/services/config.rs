/// Configuration service - loads config from environment variables
use crate::constants::{
    DEFAULT_GAME_ID, DEFAULT_LOOKUP_TABLE_NAME, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_RESULTS_API_URL, DEFAULT_SES_REGION,
};
use crate::error::DrawCheckError;
use crate::models::{DrawCheckConfig, LookupConfig, NotificationConfig, ResultsApiConfig};

/// Environment variable-based configuration provider
///
/// Each setting is read from its primary variable first, then from the
/// legacy names older deployments used.
pub struct EnvConfigProvider {
    config: DrawCheckConfig,
}

impl EnvConfigProvider {
    pub fn new() -> Result<Self, DrawCheckError> {
        Self::from_source(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source
    pub fn from_source<F>(lookup: F) -> Result<Self, DrawCheckError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |names: &[&str]| -> Option<String> {
            names
                .iter()
                .filter_map(|name| lookup(name))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let api_key = var(&["API_KEY", "MAGAYO_API_KEY"])
            .ok_or_else(|| DrawCheckError::Config("Missing API_KEY env var".to_string()))?;

        let sender = var(&["SENDER_EMAIL"])
            .ok_or_else(|| DrawCheckError::Config("Missing SENDER_EMAIL env var".to_string()))?;

        let timeout_secs = match var(&["REQUEST_TIMEOUT_SECS"]) {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                DrawCheckError::Config(format!("Invalid REQUEST_TIMEOUT_SECS {}: {}", raw, e))
            })?,
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        let metrics_enabled = var(&["METRICS_ENABLED"])
            .map(|raw| matches!(raw.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        let config = DrawCheckConfig {
            results: ResultsApiConfig {
                base_url: var(&["RESULTS_API_URL"])
                    .unwrap_or_else(|| DEFAULT_RESULTS_API_URL.to_string()),
                api_key,
                game_id: var(&["GAME_ID", "MAGAYO_GAME_ID"])
                    .unwrap_or_else(|| DEFAULT_GAME_ID.to_string()),
                timeout_secs,
            },
            lookup: LookupConfig {
                table_name: var(&["LOOKUP_TABLE_NAME", "DDB_TABLE_NAME"])
                    .unwrap_or_else(|| DEFAULT_LOOKUP_TABLE_NAME.to_string()),
            },
            notification: NotificationConfig {
                recipient: var(&["RECIPIENT_EMAIL"]).unwrap_or_else(|| sender.clone()),
                sender,
                ses_region: var(&["SES_REGION"])
                    .unwrap_or_else(|| DEFAULT_SES_REGION.to_string()),
            },
            metrics_enabled,
        };

        // Validate configuration
        config
            .validate()
            .map_err(|e| DrawCheckError::Config(format!("Invalid configuration: {}", e)))?;

        tracing::info!(
            game_id = %config.results.game_id,
            table = %config.lookup.table_name,
            metrics_enabled = config.metrics_enabled,
            "Configuration validated successfully"
        );

        Ok(Self { config })
    }

    pub fn into_config(self) -> DrawCheckConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn provider(vars: &[(&str, &str)]) -> Result<EnvConfigProvider, DrawCheckError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvConfigProvider::from_source(move |name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults_applied() {
        let config = provider(&[("API_KEY", "secret"), ("SENDER_EMAIL", "me@example.com")])
            .unwrap()
            .into_config();

        assert_eq!(config.results.game_id, "us_pa_pick3_eve");
        assert_eq!(config.results.base_url, "https://www.magayo.com/api/results.php");
        assert_eq!(config.results.timeout_secs, 10);
        assert_eq!(config.lookup.table_name, "LotteryNumbers");
        assert_eq!(config.notification.recipient, "me@example.com");
        assert_eq!(config.notification.ses_region, "us-east-1");
        assert!(!config.metrics_enabled);
    }

    #[test]
    fn test_explicit_values_win() {
        let config = provider(&[
            ("API_KEY", "secret"),
            ("MAGAYO_API_KEY", "legacy"),
            ("GAME_ID", "us_pa_pick3_mid"),
            ("LOOKUP_TABLE_NAME", "Numbers"),
            ("RESULTS_API_URL", "https://api.example.com/results"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("SENDER_EMAIL", "alerts@example.com"),
            ("RECIPIENT_EMAIL", "owner@example.com"),
            ("SES_REGION", "eu-west-1"),
            ("METRICS_ENABLED", "true"),
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.results.api_key, "secret");
        assert_eq!(config.results.game_id, "us_pa_pick3_mid");
        assert_eq!(config.results.base_url, "https://api.example.com/results");
        assert_eq!(config.results.timeout_secs, 5);
        assert_eq!(config.lookup.table_name, "Numbers");
        assert_eq!(config.notification.sender, "alerts@example.com");
        assert_eq!(config.notification.recipient, "owner@example.com");
        assert_eq!(config.notification.ses_region, "eu-west-1");
        assert!(config.metrics_enabled);
    }

    #[test]
    fn test_legacy_names_accepted() {
        let config = provider(&[
            ("MAGAYO_API_KEY", "legacy"),
            ("MAGAYO_GAME_ID", "us_pa_pick3_eve"),
            ("DDB_TABLE_NAME", "OldTable"),
            ("SENDER_EMAIL", "me@example.com"),
        ])
        .unwrap()
        .into_config();

        assert_eq!(config.results.api_key, "legacy");
        assert_eq!(config.lookup.table_name, "OldTable");
    }

    #[test]
    fn test_missing_api_key() {
        let err = provider(&[("SENDER_EMAIL", "me@example.com")]).err().unwrap();
        assert!(err.to_string().contains("API_KEY"));

        let err = provider(&[("API_KEY", "  "), ("SENDER_EMAIL", "me@example.com")])
            .err()
            .unwrap();
        assert!(matches!(err, DrawCheckError::Config(_)));
    }

    #[test]
    fn test_missing_sender() {
        let err = provider(&[("API_KEY", "secret")]).err().unwrap();
        assert!(err.to_string().contains("SENDER_EMAIL"));
    }

    #[test]
    fn test_invalid_timeout() {
        let err = provider(&[
            ("API_KEY", "secret"),
            ("SENDER_EMAIL", "me@example.com"),
            ("REQUEST_TIMEOUT_SECS", "ten"),
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("REQUEST_TIMEOUT_SECS"));
    }

    #[test]
    fn test_invalid_recipient() {
        let err = provider(&[
            ("API_KEY", "secret"),
            ("SENDER_EMAIL", "me@example.com"),
            ("RECIPIENT_EMAIL", "nobody"),
        ])
        .err()
        .unwrap();
        assert!(err.to_string().contains("Invalid configuration"));
    }
}
