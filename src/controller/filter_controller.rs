//! Filter controller implementation
//!
//! This module implements the controller that seeds settings, decides the day
//! phase, writes the filter rule and keeps the auto-update timer running.

use crate::config::{
    DEFAULT_UPDATE_INTERVAL_MINUTES, FilterSettings, SettingKey, SettingValue, SettingsStore,
};
use crate::error::{EyeFilterError, Result};
use crate::filter::{FilterRule, STYLE_ID, StyleSink};
use crate::schedule::{Clock, DayPhase, DayWindow};
use crate::timer::AutoUpdateTimer;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use super::menu::{CommandRegistry, MenuCommand};

/// Prompts the user for one settings field at a time
pub trait SettingsEditor {
    /// Ask for a new value, pre-filled with `current`
    ///
    /// Returns `None` when the user cancels the prompt.
    fn prompt_field(&mut self, label: &str, current: &SettingValue) -> Option<String>;
}

/// Page lifecycle triggers forwarded by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEvent {
    /// The page window regained focus
    Focus,
    /// The page visibility changed
    VisibilityChange {
        /// Whether the page is now hidden
        hidden: bool,
    },
}

/// Collaborators shared between the controller and its timer thread
struct FilterEngine {
    store: Arc<dyn SettingsStore>,
    styles: Arc<dyn StyleSink>,
    clock: Arc<dyn Clock>,
}

impl FilterEngine {
    fn read(&self, key: SettingKey) -> Result<SettingValue> {
        self.store
            .get(key.as_str())?
            .ok_or(EyeFilterError::MissingSetting(key.as_str()))
    }

    fn is_daytime(&self) -> Result<bool> {
        let window = DayWindow::from_settings(
            &self.read(SettingKey::DayStart)?,
            &self.read(SettingKey::DayEnd)?,
        )?;
        Ok(window.contains(self.clock.now().time()))
    }

    fn apply_filter(&self) -> Result<()> {
        let phase = if self.is_daytime()? {
            DayPhase::Day
        } else {
            DayPhase::Night
        };

        let settings = FilterSettings::load(self.store.as_ref())?;
        let rule = FilterRule::for_phase(&settings, phase);
        self.styles.upsert_style(STYLE_ID, &rule.render())?;

        debug!(
            "Applied {} filter: brightness {}%, sepia {}%",
            phase, rule.brightness, rule.sepia
        );
        Ok(())
    }
}

/// Filter controller
pub struct FilterController {
    engine: Arc<FilterEngine>,
    /// The single auto-update timer, if started
    timer: Option<AutoUpdateTimer>,
    /// Live timer threads started by this controller
    active_timers: Arc<AtomicUsize>,
}

impl FilterController {
    /// Create a controller over the given store, style output and clock
    pub fn new(
        store: Arc<dyn SettingsStore>,
        styles: Arc<dyn StyleSink>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            engine: Arc::new(FilterEngine {
                store,
                styles,
                clock,
            }),
            timer: None,
            active_timers: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Seed every absent setting with its default
    ///
    /// Each key is checked on its own; keys already present are left alone.
    /// Returns whether anything was written.
    pub fn initialize_settings(&self) -> Result<bool> {
        let mut seeded = false;
        for key in SettingKey::ALL {
            if self.engine.store.get(key.as_str())?.is_none() {
                let value = key.default_value();
                debug!("Seeding {} = {}", key, value);
                self.engine.store.set(key.as_str(), value)?;
                seeded = true;
            }
        }
        Ok(seeded)
    }

    /// Whether the clock's current time falls inside the stored day window
    pub fn is_daytime(&self) -> Result<bool> {
        self.engine.is_daytime()
    }

    /// Write the rule for the current phase to the page, replacing the previous one
    pub fn apply_filter(&self) -> Result<()> {
        self.engine.apply_filter()
    }

    /// Auto-update period from `update_interval`
    ///
    /// Unset, zero, negative or non-numeric values fall back to 30 minutes.
    pub fn update_interval(&self) -> Result<Duration> {
        let stored = self.engine.store.get(SettingKey::UpdateInterval.as_str())?;
        let minutes = match stored.as_ref().and_then(SettingValue::as_positive_minutes) {
            Some(minutes) => minutes,
            None => {
                warn!(
                    "Unusable update_interval {:?}, using {} minutes",
                    stored, DEFAULT_UPDATE_INTERVAL_MINUTES
                );
                DEFAULT_UPDATE_INTERVAL_MINUTES
            }
        };
        Ok(Duration::from_secs(minutes.saturating_mul(60)))
    }

    /// Start the auto-update timer, cancelling any running one first
    pub fn setup_auto_update(&mut self) -> Result<()> {
        let interval = self.update_interval()?;
        self.start_timer(interval)
    }

    fn start_timer(&mut self, interval: Duration) -> Result<()> {
        if let Some(mut previous) = self.timer.take() {
            previous.cancel();
        }

        let engine = Arc::clone(&self.engine);
        let timer = AutoUpdateTimer::start(interval, Arc::clone(&self.active_timers), move || {
            if let Err(e) = engine.apply_filter() {
                error!("Scheduled filter update failed: {}", e);
            }
        })?;
        self.timer = Some(timer);

        Ok(())
    }

    /// Number of live auto-update timers (0 or 1)
    pub fn active_timer_count(&self) -> usize {
        self.active_timers.load(Ordering::SeqCst)
    }

    /// Interval of the running timer
    pub fn auto_update_interval(&self) -> Option<Duration> {
        self.timer.as_ref().map(AutoUpdateTimer::interval)
    }

    /// Run the settings dialog
    ///
    /// Every field is prompted with its current value before anything is written.
    /// Cancelled fields keep their stored value. Afterwards the filter is re-applied
    /// and the timer restarted. The timer is restarted even when the new values
    /// cannot be applied, so a fixed value takes effect on the next tick.
    /// Returns the keys that were written.
    pub fn show_settings_dialog(
        &mut self,
        editor: &mut dyn SettingsEditor,
    ) -> Result<Vec<SettingKey>> {
        let current = FilterSettings::load(self.engine.store.as_ref())?;

        let answers: Vec<(SettingKey, Option<String>)> = SettingKey::ALL
            .into_iter()
            .map(|key| (key, editor.prompt_field(key.prompt_label(), current.get(key))))
            .collect();

        let mut written = Vec::with_capacity(answers.len());
        for (key, answer) in answers {
            match answer {
                Some(text) => {
                    self.engine
                        .store
                        .set(key.as_str(), SettingValue::from_input(&text))?;
                    written.push(key);
                }
                None => debug!("Prompt for {} cancelled, keeping current value", key),
            }
        }
        info!("Settings dialog updated {} value(s)", written.len());

        let applied = self.apply_filter();
        self.setup_auto_update()?;
        applied?;

        Ok(written)
    }

    /// Register the two menu commands with the host
    pub fn register_menu(&self, registry: &mut dyn CommandRegistry) {
        for command in MenuCommand::ALL {
            registry.register_command(command.label(), command);
        }
    }

    /// Execute a menu command
    pub fn run_command(
        &mut self,
        command: MenuCommand,
        editor: &mut dyn SettingsEditor,
    ) -> Result<()> {
        debug!("Menu command: {}", command.label());
        match command {
            MenuCommand::FilterSettings => self.show_settings_dialog(editor).map(|_| ()),
            MenuCommand::UpdateNow => self.apply_filter(),
        }
    }

    /// Re-apply the filter when the page is focused or becomes visible
    pub fn handle_page_event(&self, event: PageEvent) -> Result<()> {
        match event {
            PageEvent::Focus | PageEvent::VisibilityChange { hidden: false } => {
                debug!("Page event {:?}, re-applying filter", event);
                self.apply_filter()
            }
            PageEvent::VisibilityChange { hidden: true } => Ok(()),
        }
    }

    /// Startup sequence: seed settings, apply the filter, start the timer
    ///
    /// The timer is started even when the first apply fails; that error is
    /// returned afterwards.
    pub fn start(&mut self) -> Result<()> {
        if self.initialize_settings()? {
            info!("Settings initialized");
        }
        let applied = self.apply_filter();
        self.setup_auto_update()?;
        applied
    }

    /// Cancel the auto-update timer
    pub fn shutdown(&mut self) {
        if let Some(mut timer) = self.timer.take() {
            timer.cancel();
        }
    }
}

impl Drop for FilterController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
