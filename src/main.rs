// src/main.rs

use crossbeam_channel::{Receiver, unbounded};
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use word_histogram::app_logic::{ControllerEvent, WordFrequencyController};
use word_histogram::core::path_utils::describe_source;
use word_histogram::core::{
    APP_NAME, AppConfig, ConfigManagerOperations, CoreConfigManager, RankedEntry,
};

const BAR_WIDTH: u64 = 50;
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/*
 * Headless front end: processes the file given on the command line (or the
 * last one opened), prints progress, and accepts `p` (pause), `r` (resume)
 * and `c` (cancel) on stdin while running. The final ranking is printed as a
 * bar histogram.
 */
fn main() -> ExitCode {
    word_histogram::initialize_logging();

    let config_manager = Arc::new(CoreConfigManager::new());
    let app_config = config_manager.load_config(APP_NAME).unwrap_or_else(|e| {
        log::warn!("Main: Could not load configuration ({e}), using defaults.");
        AppConfig::default()
    });

    let Some(path) = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| app_config.last_file_path.clone())
    else {
        eprintln!("Usage: word_histogram <text_file>");
        return ExitCode::FAILURE;
    };

    let mut controller = match WordFrequencyController::new(
        app_config.engine.clone(),
        config_manager as Arc<dyn ConfigManagerOperations>,
    ) {
        Ok(controller) => controller,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    println!("Processing {} (p = pause, r = resume, c = cancel)", describe_source(&path));
    controller.open(path);
    if let Err(e) = controller.start() {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    let commands = spawn_stdin_reader();
    let mut failed = false;
    let mut canceled = false;
    while controller.is_processing() {
        controller.wait_for_engine_notification(POLL_INTERVAL);
        for line in commands.try_iter() {
            match line.trim() {
                "p" => controller.pause(),
                "r" => controller.resume(),
                "c" => {
                    controller.cancel();
                    canceled = true;
                }
                "" => {}
                other => println!("Unknown command '{other}' (use p, r or c)"),
            }
        }
        while let Some(event) = controller.try_dequeue_event() {
            match event {
                ControllerEvent::ProgressChanged(p) if p > 0 => println!("{p:>3}%"),
                ControllerEvent::PausedChanged(true) => println!("Paused."),
                ControllerEvent::PausedChanged(false) => println!("Resumed."),
                ControllerEvent::ErrorOccurred(message) => {
                    eprintln!("Error: {message}");
                    failed = true;
                }
                _ => {}
            }
        }
    }

    if canceled {
        println!("Canceled.");
    } else if !failed {
        print_histogram(controller.top_words(), controller.max_count());
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    let spawned = thread::Builder::new()
        .name("stdin-commands".to_string())
        .spawn(move || {
            for line in io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
    if let Err(e) = spawned {
        log::warn!("Main: Interactive commands unavailable: {e}");
    }
    rx
}

fn print_histogram(words: &[RankedEntry], max_count: u64) {
    if words.is_empty() {
        println!("No words found.");
        return;
    }
    let label_width = words.iter().map(|e| e.word.chars().count()).max().unwrap_or(0);
    for entry in words {
        let bar_len = (entry.count * BAR_WIDTH).div_ceil(max_count.max(1)) as usize;
        println!(
            "{:<label_width$} {:>8} {}",
            entry.word,
            entry.count,
            "#".repeat(bar_len)
        );
    }
}
