/*
 * Defines the values exchanged across the thread boundary between the
 * processing engine and its controller: control signals going in, and
 * notifications coming out. Everything here is owned data, so a value handed
 * to another thread never aliases the engine's live tally.
 *
 * Each notification is wrapped in an `EngineEvent` tagged with the run it
 * belongs to, which lets a consumer drop late messages from a run it has
 * already abandoned.
 */
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/*
 * One ranked (word, count) pair. Immutable once created.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RankedEntry {
    pub word: String,
    pub count: u64,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u64) -> Self {
        RankedEntry {
            word: word.into(),
            count,
        }
    }
}

/* Highest count first; ties in first-seen order. */
pub type RankedSnapshot = Vec<RankedEntry>;

/* Identifies one run from Start to its terminal notification. */
pub type RunId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Paused,
    Canceled,
    Finished,
    Errored,
}

impl RunState {
    /* True while a run thread owns the tally (running or paused). */
    pub fn is_active(self) -> bool {
        matches!(self, RunState::Running | RunState::Paused)
    }
}

/* Why a run ended with `Finished`. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    /* The source was read to the end; a final snapshot preceded this. */
    Exhausted,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineNotification {
    /* Percentage 0..=100, non-decreasing within a run, never repeated. */
    Progress(u8),
    TopWords(RankedSnapshot),
    /* Terminal. Exactly one of `Finished` / `Error` per run. */
    Finished(FinishReason),
    /* Terminal. */
    Error(String),
}

impl EngineNotification {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            EngineNotification::Finished(_) | EngineNotification::Error(_)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineEvent {
    pub run_id: RunId,
    pub notification: EngineNotification,
}

/*
 * Commands consumed by the engine host. `Start` supersedes any active run;
 * the others act on the current run and are ignored when none is active.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlSignal {
    Start { run_id: RunId, path: PathBuf },
    Pause,
    Resume,
    Cancel,
}
