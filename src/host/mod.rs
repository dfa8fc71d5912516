//! Terminal host
//!
//! Stands in for the browser environment: reads menu commands and page
//! lifecycle events from stdin and runs the settings dialog as line prompts.

pub mod terminal;

pub use terminal::{HostAction, TerminalEditor, parse_action};
