//! # Interface Layer
//!
//! Command handlers invoked by the two binaries.

pub mod commands;
