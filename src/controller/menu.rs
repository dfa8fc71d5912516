//! Host command menu

/// User-invokable actions exposed by the filter controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    /// Open the settings dialog
    FilterSettings,
    /// Re-apply the filter immediately
    UpdateNow,
}

impl MenuCommand {
    /// Commands in registration order
    pub const ALL: [MenuCommand; 2] = [MenuCommand::FilterSettings, MenuCommand::UpdateNow];

    /// Menu label
    pub const fn label(self) -> &'static str {
        match self {
            MenuCommand::FilterSettings => "⚙️ filter settings",
            MenuCommand::UpdateNow => "🔄 update now",
        }
    }
}

/// Host facility commands are registered with
pub trait CommandRegistry {
    /// Register `command` under `label`
    fn register_command(&mut self, label: &str, command: MenuCommand);
}

/// Ordered list of registered commands
#[derive(Debug, Default, Clone)]
pub struct CommandMenu {
    entries: Vec<(String, MenuCommand)>,
}

impl CommandMenu {
    /// Create an empty menu
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered `(label, command)` pairs in registration order
    pub fn entries(&self) -> &[(String, MenuCommand)] {
        &self.entries
    }

    /// Command registered under `label`
    pub fn find(&self, label: &str) -> Option<MenuCommand> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, command)| *command)
    }

    /// Command at a 1-based menu position
    pub fn by_position(&self, position: usize) -> Option<MenuCommand> {
        position
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .map(|(_, command)| *command)
    }
}

impl CommandRegistry for CommandMenu {
    fn register_command(&mut self, label: &str, command: MenuCommand) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| l == label) {
            entry.1 = command;
        } else {
            self.entries.push((label.to_string(), command));
        }
    }
}
