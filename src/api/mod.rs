//! Webhook Lambda handler and request processing

pub mod context;
pub mod handler;
pub mod helpers;
pub mod interactive_handler;
pub mod parsing;
pub mod publish;
pub mod slash_handler;

// Re-export the main handler for convenience
pub use context::WebhookContext;
pub use handler::{handler, route};
