//! Filter controller module
//!
//! This module owns the filter settings and applies the brightness/sepia rule
//! to the page, implementing the core application logic.
//!
//! # Overview
//!
//! The filter controller is the single coordinator that:
//! - **Seeds settings** with defaults, key by key, on first run
//! - **Decides day or night** from the injected clock and the stored day window
//! - **Writes the filter rule** to the page, replacing the previous one
//! - **Runs the auto-update timer** at the stored interval
//! - **Handles the settings dialog** through an injected editor
//! - **Reacts to page events** (focus, visibility) and menu commands
//!
//! # Architecture
//!
//! - `FilterController`: owns the collaborators and the single timer handle
//! - `SettingsEditor`: prompts for one field at a time, `None` means cancelled
//! - `CommandRegistry` / `CommandMenu`: host menu the two commands are registered with
//! - `PageEvent`: lifecycle triggers forwarded by the host
//!
//! # Event Flow
//!
//! ```text
//! start ──────────────┐
//! timer tick ─────────┤
//! focus / visible ────┼──→ apply_filter → is_daytime → FilterRule → StyleSink
//! "update now" ───────┘
//! "filter settings" ──→ show_settings_dialog → SettingsStore → apply_filter + setup_auto_update
//! ```
//!
//! # Invariants
//!
//! - At most one auto-update timer is alive; starting a new one cancels the old one
//! - At most one filter style node exists; applying replaces it by id
//! - Dropping the controller cancels its timer

pub mod filter_controller;
pub mod menu;

pub use filter_controller::{FilterController, PageEvent, SettingsEditor};
pub use menu::{CommandMenu, CommandRegistry, MenuCommand};
