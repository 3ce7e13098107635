/// Notification message built from a draw check
use crate::constants::EMAIL_SUBJECT;
use crate::models::LookupEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
}

impl NotificationMessage {
    /// Builds the message announcing `draw_key` and its owner, if any
    pub fn for_draw(draw_key: &str, entry: Option<&LookupEntry>) -> Self {
        let body = match entry {
            Some(entry) => format!(
                "The winning number is {}, and it belongs to {}.",
                draw_key, entry.owner_name
            ),
            None => format!(
                "The winning number is {}, but no matches were found.",
                draw_key
            ),
        };

        Self {
            subject: EMAIL_SUBJECT.to_string(),
            body,
        }
    }
}
