//! # Messages
//!
//! Constant strings and format functions for user-facing messages.

// Bootstrap tool
pub const APP_NAME_QUESTION: &str = "What is your application name?";
pub const BOOTSTRAPPING: &str = "Bootstrapping simple React web app";
pub const CUSTOMIZING: &str = "Customizing the app with information provided by user";
pub const INSTALLING: &str = "Installing required dependencies to start the application";
pub const INSTALL_SKIPPED: &str = "Skipping dependency installation, run 'npm install' yourself";
pub const APP_NAME_REQUIRED: &str = "Please provide a name to bootstrap an application.";
pub const APP_QUIT_UNEXPECTEDLY: &str = "Application got quit unexpectedly";

pub fn run_instructions(app_name: &str) -> String {
    format!("In order to run the application, navigate to {app_name} folder and run 'npm start'")
}

pub fn app_exists(app_name: &str) -> String {
    format!("A folder named '{app_name}' already exists here. Use --force to overwrite it.")
}

pub fn invalid_app_name(app_name: &str) -> String {
    format!("'{app_name}' cannot be used as a folder name.")
}

// Generator tool
pub const COMPONENT_NAME_QUESTION: &str = "What is your component name?";
pub const LOCATION_QUESTION: &str = "Where do you want to place your component?";
pub const COMPONENT_NAME_REQUIRED: &str = "\nPlease provide name to generate an component.";
pub const GENERATOR_TERMINATED: &str = "\nGenerator terminated unexpectedly.";

pub fn missing_location(location: &str, output_dir: &str) -> String {
    format!("\nPlease make sure '{location}' directory exist under {output_dir}.")
}

pub fn component_exists(name: &str, location: &str) -> String {
    format!("\n{name} already exist under {location}.")
}

pub fn component_generated(name: &str, location: &str) -> String {
    format!("\n{name} generated successfully under {location}.")
}

pub fn invalid_component_input(value: &str) -> String {
    format!("\n'{value}' is not a valid component name or location.")
}
