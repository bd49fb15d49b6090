//! # Strings Module
//!
//! Centralizes user-facing messages, help text and log lines.

pub mod help;
pub mod logs;
pub mod messages;
