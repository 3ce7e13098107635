/// Plain-text email composer using lettre crate
use crate::error::DrawCheckError;
use crate::models::NotificationMessage;
use lettre::message::header::ContentType;
use lettre::message::{Mailbox, Message};
use std::str::FromStr;

/// Builds raw RFC 5322 messages for a fixed sender and recipient
#[derive(Debug, Clone)]
pub struct PlainTextComposer {
    from: Mailbox,
    to: Mailbox,
}

impl PlainTextComposer {
    pub fn new(from: &str, to: &str) -> Result<Self, DrawCheckError> {
        Ok(Self {
            from: Self::to_mailbox(from)?,
            to: Self::to_mailbox(to)?,
        })
    }

    fn to_mailbox(address: &str) -> Result<Mailbox, DrawCheckError> {
        Mailbox::from_str(address)
            .map_err(|e| DrawCheckError::Config(format!("Invalid email address: {}", e)))
    }

    pub fn sender(&self) -> String {
        self.from.email.to_string()
    }

    pub fn recipient(&self) -> String {
        self.to.email.to_string()
    }

    /// Renders the notification as raw MIME bytes ready for SES
    pub fn compose(&self, message: &NotificationMessage) -> Result<Vec<u8>, DrawCheckError> {
        let email = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(&message.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| {
                DrawCheckError::Notification(format!("Failed to build text message: {}", e))
            })?;

        Ok(email.formatted())
    }
}
