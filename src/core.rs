/*
 * Platform-agnostic core of the word histogram: tokenization and tallying,
 * ranking, the threaded processing engine and its message types, and the
 * application settings.
 */
pub mod config;
pub mod notifications;
pub mod path_utils;
pub mod processing_engine;
pub mod ranker;
pub mod tokenizer;
pub mod word_tally;

pub use config::{
    APP_NAME, AppConfig, ConfigError, ConfigManagerOperations, CoreConfigManager, EngineSettings,
};

pub use notifications::{
    ControlSignal, EngineEvent, EngineNotification, FinishReason, RankedEntry, RankedSnapshot,
    RunId, RunState,
};

pub use processing_engine::{EngineError, ProcessingEngine};

pub use ranker::top_words;

pub use word_tally::WordTally;
