//! # Domain Layer
//!
//! Core definitions, types, and traits shared by both scaffolding tools.
//! Independent of the terminal and the process boundary, serving as the contract for
//! the other layers.

pub mod config;
pub mod error;
pub mod paths;
pub mod traits;
pub mod types;
