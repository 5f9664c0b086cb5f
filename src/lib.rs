/*
 * Streaming word-frequency histogram.
 *
 * `core` holds the engine that reads a text file on its own thread and keeps a
 * live, ranked word tally; `app_logic` holds the controller a UI (or any other
 * caller) drives to start, pause, resume and cancel runs and to observe them.
 */
pub mod app_logic;
pub mod core;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::sync::Once;

static LOGGING_INIT: Once = Once::new();

/*
 * Installs the terminal logger. Safe to call repeatedly; only the first call
 * has any effect. Tests call it first so engine and controller logs show up
 * when a test fails.
 */
pub fn initialize_logging() {
    LOGGING_INIT.call_once(|| {
        let level = if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        };
        if let Err(e) = TermLogger::init(
            level,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ) {
            eprintln!("Failed to initialize logger: {e}");
        }
    });
}
