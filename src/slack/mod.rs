//! All Slack-specific functionality

pub mod article_blocks;
pub mod command_parser;
pub mod webhook;

pub use webhook::SlackWebhook;
