/// Data models for Drawcheck system
pub mod config;
pub mod draw;
pub mod notification;
pub mod response;

// Re-export commonly used types
pub use config::*;
pub use draw::*;
pub use notification::*;
pub use response::*;
