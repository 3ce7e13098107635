/// SES email sending service
use crate::email::PlainTextComposer;
use crate::error::DrawCheckError;
use crate::models::NotificationMessage;
use crate::utils::logging::{redact_body, redact_email};
use async_trait::async_trait;

#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Sends the notification to the configured recipient, returning the
    /// provider's message id
    async fn send(&self, message: &NotificationMessage) -> Result<String, DrawCheckError>;
}

pub struct SesEmailSender {
    client: aws_sdk_ses::Client,
    composer: PlainTextComposer,
}

impl SesEmailSender {
    pub fn new(client: aws_sdk_ses::Client, composer: PlainTextComposer) -> Self {
        Self { client, composer }
    }
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send(&self, message: &NotificationMessage) -> Result<String, DrawCheckError> {
        use aws_sdk_ses::primitives::Blob;

        let raw_email = self.composer.compose(message)?;

        let raw_message = aws_sdk_ses::types::RawMessage::builder()
            .data(Blob::new(raw_email))
            .build()
            .map_err(|e| {
                DrawCheckError::Notification(format!("Failed to build raw message: {}", e))
            })?;

        let recipient = self.composer.recipient();

        let response = self
            .client
            .send_raw_email()
            .raw_message(raw_message)
            .source(self.composer.sender())
            .destinations(recipient.clone())
            .send()
            .await
            .map_err(|e| {
                DrawCheckError::Notification(format!("SES send_raw_email failed: {}", e))
            })?;

        let message_id = response.message_id().to_string();

        tracing::info!(
            message_id = %message_id,
            to = %redact_email(&recipient),
            body = %redact_body(&message.body),
            "Sent notification via SES"
        );

        Ok(message_id)
    }
}
