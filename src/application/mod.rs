//! # Application Layer
//!
//! The prompt engine, the template instantiator, and the two flows built on them.

pub mod bootstrap;
pub mod component;
pub mod instantiator;
pub mod logging;
pub mod prompt;
