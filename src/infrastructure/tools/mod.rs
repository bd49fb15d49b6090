//! # Tools Module
//!
//! Process execution used by the bootstrap flow.

pub mod executor;
