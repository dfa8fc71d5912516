//! Line-based command input and settings prompts

use eyefilter::config::SettingValue;
use eyefilter::controller::{CommandMenu, MenuCommand, PageEvent, SettingsEditor};
use std::io::{BufRead, Write};
use tracing::warn;

/// Something the user asked the host to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostAction {
    /// Run a registered menu command
    Command(MenuCommand),
    /// Simulate a page lifecycle trigger
    Page(PageEvent),
    /// Print the menu again
    Help,
    /// Leave the command loop
    Quit,
    /// Input that matched nothing
    Unknown(String),
}

/// Interpret one input line, `None` for a blank line
///
/// Accepts a menu position, a full menu label, or a keyword.
pub fn parse_action(line: &str, menu: &CommandMenu) -> Option<HostAction> {
    let input = line.trim();
    if input.is_empty() {
        return None;
    }

    if let Ok(position) = input.parse::<usize>() {
        return Some(
            menu.by_position(position)
                .map_or_else(|| HostAction::Unknown(input.to_string()), HostAction::Command),
        );
    }
    if let Some(command) = menu.find(input) {
        return Some(HostAction::Command(command));
    }

    let action = match input.to_lowercase().as_str() {
        "settings" | "s" => HostAction::Command(MenuCommand::FilterSettings),
        "update" | "u" => HostAction::Command(MenuCommand::UpdateNow),
        "focus" => HostAction::Page(PageEvent::Focus),
        "show" | "visible" => HostAction::Page(PageEvent::VisibilityChange { hidden: false }),
        "hide" | "hidden" => HostAction::Page(PageEvent::VisibilityChange { hidden: true }),
        "help" | "?" => HostAction::Help,
        "quit" | "exit" | "q" => HostAction::Quit,
        _ => HostAction::Unknown(input.to_string()),
    };
    Some(action)
}

/// Settings editor prompting on a terminal
///
/// Each prompt shows the current value in brackets. An empty answer or end of
/// input cancels that field.
pub struct TerminalEditor<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalEditor<R, W> {
    /// Editor reading answers from `input` and writing prompts to `output`
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> SettingsEditor for TerminalEditor<R, W> {
    fn prompt_field(&mut self, label: &str, current: &SettingValue) -> Option<String> {
        let prompted =
            write!(self.output, "{label} [{current}] ").and_then(|()| self.output.flush());
        if let Err(e) = prompted {
            warn!("Failed to write prompt: {}", e);
            return None;
        }

        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => {
                let answer = line.trim_end_matches(['\r', '\n']);
                (!answer.is_empty()).then(|| answer.to_string())
            }
            Err(e) => {
                warn!("Failed to read answer for '{}': {}", label, e);
                None
            }
        }
    }
}
