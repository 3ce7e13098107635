use crate::constants::{LOOKUP_KEY_ATTRIBUTE, OWNER_NAME_ATTRIBUTE, UNKNOWN_OWNER};
use crate::error::DrawCheckError;
use crate::models::LookupEntry;
use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;
use tracing::debug;

#[async_trait]
pub trait LookupStore: Send + Sync {
    /// Point read by draw key
    ///
    /// Returns `None` when no entry is stored under `key`
    async fn lookup(&self, key: &str) -> Result<Option<LookupEntry>, DrawCheckError>;
}

/// DynamoDB-backed lookup store
pub struct DynamoDbLookupStore {
    client: aws_sdk_dynamodb::Client,
    table_name: String,
}

impl DynamoDbLookupStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Maps a returned item to an entry, defaulting the owner when the
    /// name attribute is absent or not a string
    fn entry_from_item(key: &str, item: &HashMap<String, AttributeValue>) -> LookupEntry {
        let owner_name = item
            .get(OWNER_NAME_ATTRIBUTE)
            .and_then(|value| value.as_s().ok())
            .cloned()
            .unwrap_or_else(|| UNKNOWN_OWNER.to_string());

        LookupEntry::new(key, owner_name)
    }
}

#[async_trait]
impl LookupStore for DynamoDbLookupStore {
    async fn lookup(&self, key: &str) -> Result<Option<LookupEntry>, DrawCheckError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(LOOKUP_KEY_ATTRIBUTE, AttributeValue::S(key.to_string()))
            .send()
            .await
            .map_err(|e| DrawCheckError::LookupStore(format!("DynamoDB get_item failed: {}", e)))?;

        let entry = result.item().map(|item| Self::entry_from_item(key, item));

        debug!(
            table = %self.table_name,
            key = key,
            found = entry.is_some(),
            "Looked up draw key"
        );

        Ok(entry)
    }
}

/// In-memory lookup store for testing
pub struct InMemoryLookupStore {
    entries: tokio::sync::Mutex<HashMap<String, String>>,
}

impl InMemoryLookupStore {
    pub fn new() -> Self {
        Self {
            entries: tokio::sync::Mutex::new(HashMap::new()),
        }
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: tokio::sync::Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    pub async fn insert(&self, key: &str, owner_name: &str) {
        self.entries
            .lock()
            .await
            .insert(key.to_string(), owner_name.to_string());
    }
}

impl Default for InMemoryLookupStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LookupStore for InMemoryLookupStore {
    async fn lookup(&self, key: &str) -> Result<Option<LookupEntry>, DrawCheckError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(key)
            .map(|owner_name| LookupEntry::new(key, owner_name.clone())))
    }
}
