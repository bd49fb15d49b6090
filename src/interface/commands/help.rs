//! # Help Command
//!
//! Prints the `generate` menu.

use super::Outcome;
use crate::domain::traits::Reporter;

pub fn handle_help(reporter: &dyn Reporter) -> Outcome {
    reporter.status(crate::strings::help::MENU.trim_end());
    Outcome::Done
}
