/// Results provider client - fetches the latest draw over HTTP
use crate::constants::{API_KEY_PARAM, GAME_PARAM};
use crate::error::DrawCheckError;
use crate::models::{ResultsApiConfig, ResultsResponse};
use crate::utils::logging::redact_api_key;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

#[async_trait]
pub trait ResultsProvider: Send + Sync {
    /// Fetches and decodes the provider's latest results for the configured game
    ///
    /// A network failure, a non-success status or an undecodable body is a
    /// `ResultsFetch` error. An absent `results` field is not.
    async fn fetch_results(&self) -> Result<ResultsResponse, DrawCheckError>;
}

/// HTTP results client backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpResultsProvider {
    client: Client,
    url: Url,
}

impl HttpResultsProvider {
    pub fn new(config: &ResultsApiConfig) -> Result<Self, DrawCheckError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| DrawCheckError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: Self::build_url(config)?,
        })
    }

    /// Appends the credential and game to the configured endpoint
    fn build_url(config: &ResultsApiConfig) -> Result<Url, DrawCheckError> {
        let mut url = Url::parse(&config.base_url).map_err(|e| {
            DrawCheckError::Config(format!(
                "Invalid results API URL {}: {}",
                config.base_url, e
            ))
        })?;

        url.query_pairs_mut()
            .append_pair(API_KEY_PARAM, &config.api_key)
            .append_pair(GAME_PARAM, &config.game_id);

        Ok(url)
    }

    /// Request URL with the credential masked, for logs
    pub fn redacted_url(&self) -> String {
        redact_api_key(self.url.as_str())
    }
}

#[async_trait]
impl ResultsProvider for HttpResultsProvider {
    async fn fetch_results(&self) -> Result<ResultsResponse, DrawCheckError> {
        debug!(url = %self.redacted_url(), "Requesting draw results");

        let response = self
            .client
            .get(self.url.clone())
            .header(http::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                DrawCheckError::ResultsFetch(redact_api_key(&format!(
                    "Request to results API failed: {}",
                    e
                )))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DrawCheckError::ResultsFetch(format!(
                "Results API returned HTTP {}",
                status
            )));
        }

        let body: ResultsResponse = response.json().await.map_err(|e| {
            DrawCheckError::ResultsFetch(redact_api_key(&format!(
                "Failed to decode results response: {}",
                e
            )))
        })?;

        info!(
            status = status.as_u16(),
            has_results = body.results.is_some(),
            "Received draw results"
        );

        Ok(body)
    }
}
