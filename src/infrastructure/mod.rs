//! # Infrastructure Layer
//!
//! Handles interactions with the outside world: the terminal and child processes.
//! Implements the traits defined in the Domain layer (`PromptChannel`, `DependencyInstaller`).

pub mod terminal;
pub mod tools;
