//! Common test utilities and in-memory collaborators for integration tests
#![allow(dead_code)]

use async_trait::async_trait;
use drawcheck_core::error::DrawCheckError;
use drawcheck_core::models::{
    LookupEntry, NotificationMessage, RawResults, ResultsApiConfig, ResultsResponse,
};
use drawcheck_core::services::{EmailSender, LookupStore, ResultsProvider};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

pub const TEST_GAME_ID: &str = "us_pa_pick3_eve";
pub const RESULTS_PATH: &str = "/api/results.php";

/// Results API config pointing at a mock server
pub fn results_config(base_uri: &str) -> ResultsApiConfig {
    ResultsApiConfig {
        base_url: format!("{}{}", base_uri, RESULTS_PATH),
        api_key: "test-key".to_string(),
        game_id: TEST_GAME_ID.to_string(),
        timeout_secs: 2,
    }
}

/// Results provider returning a fixed response
pub struct StaticResultsProvider {
    response: ResultsResponse,
}

impl StaticResultsProvider {
    pub fn with_digits(digits: &[&str]) -> Self {
        Self {
            response: ResultsResponse {
                results: Some(RawResults::List(
                    digits.iter().map(|d| d.to_string()).collect(),
                )),
                draw: None,
                draw_date: None,
            },
        }
    }
}

#[async_trait]
impl ResultsProvider for StaticResultsProvider {
    async fn fetch_results(&self) -> Result<ResultsResponse, DrawCheckError> {
        Ok(self.response.clone())
    }
}

/// Lookup store that always fails and counts calls
#[derive(Default)]
pub struct FailingLookupStore {
    calls: AtomicUsize,
}

impl FailingLookupStore {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupStore for FailingLookupStore {
    async fn lookup(&self, _key: &str) -> Result<Option<LookupEntry>, DrawCheckError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DrawCheckError::LookupStore(
            "ResourceNotFoundException".to_string(),
        ))
    }
}

/// Email sender that records every message it is asked to send
#[derive(Clone, Default)]
pub struct RecordingEmailSender {
    sent: Arc<Mutex<Vec<NotificationMessage>>>,
    fail: bool,
}

impl RecordingEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub async fn sent(&self) -> Vec<NotificationMessage> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, message: &NotificationMessage) -> Result<String, DrawCheckError> {
        self.sent.lock().await.push(message.clone());
        if self.fail {
            return Err(DrawCheckError::Notification(
                "MessageRejected: Email address is not verified".to_string(),
            ));
        }
        Ok(format!("test-message-{}", self.sent.lock().await.len()))
    }
}
