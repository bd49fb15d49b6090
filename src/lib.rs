//! # custom-scaffold
//!
//! Shared engine behind the two scaffolding binaries:
//! - `create-custom-webapp`: bootstraps a React web app from a template.
//! - `generate`: generates a UI component file triplet.
//!
//! Layout:
//! - Domain: configuration, types, errors and traits
//! - Infrastructure: terminal channel, dependency installer
//! - Application: prompt engine, template instantiator, flows, logging
//! - Interface: command handlers

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;
pub mod strings;
