/// Drawcheck Core - Shared library for the Drawcheck lottery notifier
///
/// This crate contains the domain model, configuration, error type and the
/// service traits (results provider, lookup store, email sender, metrics)
/// used by the Drawcheck worker Lambda.
pub mod constants;
pub mod email;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use error::DrawCheckError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
