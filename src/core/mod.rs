//! Configuration and wire models shared by both entry points

pub mod config;
pub mod models;
