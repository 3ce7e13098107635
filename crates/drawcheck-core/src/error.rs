/// Error types for Drawcheck system
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DrawCheckError {
    #[error("Results fetch error: {0}")]
    ResultsFetch(String),

    #[error("Lookup store error: {0}")]
    LookupStore(String),

    #[error("Notification error: {0}")]
    Notification(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl DrawCheckError {
    /// Short label used for log fields and metric dimensions
    pub fn stage(&self) -> &'static str {
        match self {
            Self::ResultsFetch(_) => "fetch",
            Self::LookupStore(_) => "lookup",
            Self::Notification(_) => "notify",
            Self::Config(_) => "config",
            Self::Validation(_) => "validation",
        }
    }
}

impl From<std::env::VarError> for DrawCheckError {
    fn from(err: std::env::VarError) -> Self {
        Self::Config(err.to_string())
    }
}
