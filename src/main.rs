//! `eyefilter` - Time-of-day page filter
//!
//! Terminal host for the filter controller. Writes the brightness/sepia rule to a
//! user stylesheet and keeps it current until told to quit.

// Host module is only in the binary, not the library
mod host;

use anyhow::{Context, Result};
use eyefilter::{
    config::{ConfigManager, JsonFileStore},
    controller::{CommandMenu, FilterController},
    error::{EyeFilterError, get_user_friendly_error},
    filter::StylesheetFile,
    schedule::SystemClock,
    utils,
};
use host::{HostAction, TerminalEditor, parse_action};
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Main entry point for the application
///
/// Loads configuration, starts the filter controller, then runs the command loop.
fn main() -> Result<()> {
    let home = ConfigManager::ensure_home_dir().context("Failed to create eyefilter directory")?;
    utils::init_logging(&home).context("Failed to initialize logging system")?;

    let config = ConfigManager::load().context("Failed to load application configuration")?;
    let settings_path = config.settings_path(&home);
    let stylesheet_path = config.stylesheet_path(&home);
    info!(
        "Using settings {} and stylesheet {}",
        settings_path.display(),
        stylesheet_path.display()
    );

    let store = JsonFileStore::open(&settings_path).context("Failed to open settings store")?;
    let mut controller = FilterController::new(
        Arc::new(store),
        Arc::new(StylesheetFile::new(&stylesheet_path)),
        Arc::new(SystemClock),
    );

    let mut menu = CommandMenu::new();
    controller.register_menu(&mut menu);

    println!("eyefilter is writing to {}", stylesheet_path.display());
    print_menu(&menu);

    // Keep the menu reachable so bad settings can be fixed from the dialog
    if let Err(e) = controller.start() {
        report_error(&e);
    }

    run_command_loop(&mut controller, &menu).context("Command loop terminated with error")?;

    controller.shutdown();
    info!("eyefilter shutting down");

    Ok(())
}

/// Read commands from stdin until `quit` or end of input
fn run_command_loop(controller: &mut FilterController, menu: &CommandMenu) -> Result<()> {
    let mut input = io::stdin().lock();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            info!("End of input");
            return Ok(());
        }

        let Some(action) = parse_action(&line, menu) else {
            continue;
        };

        let outcome = match action {
            HostAction::Command(command) => {
                let mut editor = TerminalEditor::new(&mut input, io::stdout());
                controller.run_command(command, &mut editor)
            }
            HostAction::Page(event) => controller.handle_page_event(event),
            HostAction::Help => {
                print_menu(menu);
                Ok(())
            }
            HostAction::Quit => return Ok(()),
            HostAction::Unknown(text) => {
                warn!("Unknown command: {}", text);
                println!("unknown command {text:?}, type 'help' for the menu");
                Ok(())
            }
        };

        if let Err(e) = outcome {
            report_error(&e);
        }
    }
}

fn report_error(e: &EyeFilterError) {
    error!("{}", e);
    eprintln!("{}", get_user_friendly_error(e));
}

fn print_menu(menu: &CommandMenu) {
    for (position, (label, _)) in menu.entries().iter().enumerate() {
        println!("  {}. {label}", position + 1);
    }
    println!("  focus | show | hide | help | quit");
}
