/// Drawcheck Worker - scheduled draw check Lambda
///
/// This crate wires the core services into the draw check handler and
/// exposes the Lambda entry point.
pub mod context;
pub mod handlers;

// Re-export commonly used items
pub use handlers::{CheckOutcome, DrawCheckHandler, handler};
