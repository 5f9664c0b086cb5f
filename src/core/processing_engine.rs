/*
 * The streaming word-counting engine.
 *
 * A run reads one file in fixed-size byte chunks on a dedicated thread,
 * tokenizes and tallies each chunk, and reports progress and ranked snapshots
 * through a `crossbeam_channel::Sender<EngineEvent>`. Control requests
 * (pause, resume, cancel, restart) arrive from another thread.
 *
 * Synchronization: one `Mutex<EngineState>` covers the control flags, the
 * run state and the tally together, and the pause `Condvar` is tied to that
 * same mutex. The run thread never holds the lock across a file read, and the
 * ranker is invoked under the lock against the live tally.
 *
 * Terminal notifications (`Finished` / `Error`) are only ever sent by the run
 * thread, as its last message, so each run produces exactly one. `cancel` just
 * raises the flag and wakes the thread. `start` cancels and joins the previous
 * run thread before it resets the tally, so two runs never mutate it at once.
 */
use crate::core::config::EngineSettings;
use crate::core::notifications::{
    ControlSignal, EngineEvent, EngineNotification, FinishReason, RankedSnapshot, RunId,
    RunState,
};
use crate::core::ranker;
use crate::core::tokenizer::{ChunkTokenizer, Utf8ChunkDecoder};
use crate::core::word_tally::WordTally;
use crossbeam_channel::{Receiver, Sender};
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};

#[derive(Debug)]
pub enum EngineError {
    SourceUnavailable { path: PathBuf, source: io::Error },
    Read { path: PathBuf, source: io::Error },
    ThreadSpawn(io::Error),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::SourceUnavailable { path, source } => {
                write!(f, "Cannot open file {}: {source}", path.display())
            }
            EngineError::Read { path, source } => {
                write!(f, "Failed to read file {}: {source}", path.display())
            }
            EngineError::ThreadSpawn(e) => write!(f, "Could not start processing thread: {e}"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::SourceUnavailable { source, .. } => Some(source),
            EngineError::Read { source, .. } => Some(source),
            EngineError::ThreadSpawn(e) => Some(e),
        }
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Default)]
struct EngineState {
    run_id: Option<RunId>,
    current_path: Option<PathBuf>,
    run_state: RunState,
    paused: bool,
    canceled: bool,
    tally: WordTally,
}

#[derive(Debug, Default)]
struct EngineShared {
    state: Mutex<EngineState>,
    /* Signalled on resume and on cancel. */
    wake: Condvar,
}

impl EngineShared {
    fn lock(&self) -> MutexGuard<'_, EngineState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub struct ProcessingEngine {
    shared: Arc<EngineShared>,
    settings: EngineSettings,
    notifier: Sender<EngineEvent>,
    worker: Option<JoinHandle<()>>,
}

impl ProcessingEngine {
    pub fn new(settings: EngineSettings, notifier: Sender<EngineEvent>) -> Self {
        ProcessingEngine {
            shared: Arc::new(EngineShared::default()),
            settings: settings.sanitized(),
            notifier,
            worker: None,
        }
    }

    /*
     * Begins a new run over `path`. Any active run is canceled and its thread
     * joined first; that run still delivers its own terminal notification.
     * Opening the file happens on the run thread, so an unreadable source is
     * reported as an `Error` notification rather than through this result.
     * Only a failure to spawn the thread is returned here (and notified).
     */
    pub fn start(&mut self, run_id: RunId, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        self.cancel();
        self.join_worker();

        {
            let mut state = self.shared.lock();
            state.run_id = Some(run_id);
            state.current_path = Some(path.clone());
            state.paused = false;
            state.canceled = false;
            state.tally.clear();
            state.run_state = RunState::Running;
        }
        log::info!("ProcessingEngine: Starting run {run_id} on {path:?}.");

        let run = RunContext {
            shared: Arc::clone(&self.shared),
            notifier: self.notifier.clone(),
            settings: self.settings.clone(),
            run_id,
            path,
        };
        let spawned = thread::Builder::new()
            .name(format!("word-count-run-{run_id}"))
            .spawn(move || run.execute());

        match spawned {
            Ok(handle) => {
                self.worker = Some(handle);
                Ok(())
            }
            Err(e) => {
                log::error!("ProcessingEngine: Failed to spawn run thread: {e}");
                self.shared.lock().run_state = RunState::Errored;
                let err = EngineError::ThreadSpawn(e);
                let _ = self.notifier.send(EngineEvent {
                    run_id,
                    notification: EngineNotification::Error(err.to_string()),
                });
                Err(err)
            }
        }
    }

    /* No-op unless a run is active and not already paused. */
    pub fn pause(&self) {
        let mut state = self.shared.lock();
        if state.run_state == RunState::Running {
            state.paused = true;
            state.run_state = RunState::Paused;
            log::debug!("ProcessingEngine: Run {:?} paused.", state.run_id);
        }
    }

    /* No-op unless a run is paused. */
    pub fn resume(&self) {
        let mut state = self.shared.lock();
        if state.run_state == RunState::Paused {
            state.paused = false;
            state.run_state = RunState::Running;
            self.shared.wake.notify_all();
            log::debug!("ProcessingEngine: Run {:?} resumed.", state.run_id);
        }
    }

    /*
     * No-op unless a run is active. Wakes a paused run; the run thread stops
     * at its next check-point and emits `Finished(Canceled)`.
     */
    pub fn cancel(&self) {
        let mut state = self.shared.lock();
        if state.run_state.is_active() {
            state.canceled = true;
            state.paused = false;
            state.run_state = RunState::Canceled;
            self.shared.wake.notify_all();
            log::debug!("ProcessingEngine: Run {:?} cancel requested.", state.run_id);
        }
    }

    pub fn apply(&mut self, signal: ControlSignal) {
        match signal {
            ControlSignal::Start { run_id, path } => {
                if let Err(e) = self.start(run_id, path) {
                    log::error!("ProcessingEngine: Run {run_id} could not start: {e}");
                }
            }
            ControlSignal::Pause => self.pause(),
            ControlSignal::Resume => self.resume(),
            ControlSignal::Cancel => self.cancel(),
        }
    }

    /*
     * Applies control signals in arrival order until every sender is dropped,
     * then cancels and joins any active run. Intended to be the body of the
     * thread that hosts the engine on behalf of a controller.
     */
    pub fn serve(mut self, commands: Receiver<ControlSignal>) {
        for signal in commands.iter() {
            log::trace!("ProcessingEngine: Received {signal:?}");
            self.apply(signal);
        }
        log::debug!("ProcessingEngine: Command channel closed, shutting down.");
    }

    pub fn run_state(&self) -> RunState {
        self.shared.lock().run_state
    }

    pub fn current_run_id(&self) -> Option<RunId> {
        self.shared.lock().run_id
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.shared.lock().current_path.clone()
    }

    /* Ranked view of the current tally, computed under the lock. */
    pub fn top_words(&self, n: usize) -> RankedSnapshot {
        ranker::top_words(&self.shared.lock().tally, n)
    }

    pub fn word_count(&self, word: &str) -> Option<u64> {
        self.shared.lock().tally.get(word)
    }

    /* Number of tokens tallied in the current (or last) run. */
    pub fn tokens_counted(&self) -> u64 {
        self.shared.lock().tally.total()
    }

    /* Blocks until the current run thread, if any, has exited. */
    pub fn wait_for_run(&mut self) {
        self.join_worker();
    }

    fn join_worker(&mut self) {
        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                log::error!("ProcessingEngine: Run thread panicked.");
            }
        }
    }
}

impl Drop for ProcessingEngine {
    fn drop(&mut self) {
        self.cancel();
        self.join_worker();
    }
}

/*
 * Tracks consumed bytes and yields a percentage only when it grows.
 */
#[derive(Debug)]
struct ProgressTracker {
    total_bytes: u64,
    consumed_bytes: u64,
    last_emitted: Option<u8>,
}

impl ProgressTracker {
    fn new(total_bytes: u64) -> Self {
        ProgressTracker {
            total_bytes,
            consumed_bytes: 0,
            last_emitted: None,
        }
    }

    fn advance(&mut self, bytes: usize) -> Option<u8> {
        self.consumed_bytes = self.consumed_bytes.saturating_add(bytes as u64);
        let percentage = if self.total_bytes == 0 {
            0
        } else {
            let scaled = u128::from(self.consumed_bytes) * 100 / u128::from(self.total_bytes);
            scaled.min(100) as u8
        };
        self.emit_if_grown(percentage)
    }

    /* A known-size source always ends its progress at 100. */
    fn complete(&mut self) -> Option<u8> {
        if self.total_bytes == 0 {
            None
        } else {
            self.emit_if_grown(100)
        }
    }

    fn emit_if_grown(&mut self, percentage: u8) -> Option<u8> {
        match self.last_emitted {
            Some(last) if percentage <= last => None,
            _ => {
                self.last_emitted = Some(percentage);
                Some(percentage)
            }
        }
    }
}

/* Everything a run thread owns. */
struct RunContext {
    shared: Arc<EngineShared>,
    notifier: Sender<EngineEvent>,
    settings: EngineSettings,
    run_id: RunId,
    path: PathBuf,
}

impl RunContext {
    fn execute(self) {
        let terminal = match self.process() {
            Ok(reason) => {
                log::info!("ProcessingEngine: Run {} ended ({reason:?}).", self.run_id);
                EngineNotification::Finished(reason)
            }
            Err(e) => {
                log::error!("ProcessingEngine: Run {} failed: {e}", self.run_id);
                self.shared.lock().run_state = RunState::Errored;
                EngineNotification::Error(e.to_string())
            }
        };
        self.emit(terminal);
    }

    fn process(&self) -> Result<FinishReason> {
        let mut file = File::open(&self.path).map_err(|source| EngineError::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;
        let total_bytes = file.metadata().map(|m| m.len()).unwrap_or(0);
        log::debug!(
            "ProcessingEngine: Run {} reading {total_bytes} bytes in chunks of {}.",
            self.run_id,
            self.settings.chunk_size
        );

        let mut buffer = vec![0u8; self.settings.chunk_size];
        let mut decoder = Utf8ChunkDecoder::new();
        let mut tokenizer = ChunkTokenizer::new();
        let mut progress = ProgressTracker::new(total_bytes);
        let mut chunks: u64 = 0;

        loop {
            if self.wait_at_checkpoint() {
                return Ok(FinishReason::Canceled);
            }

            let read = read_chunk(&mut file, &mut buffer).map_err(|source| EngineError::Read {
                path: self.path.clone(),
                source,
            })?;
            if read == 0 {
                return Ok(self.finish_exhausted(&mut decoder, &mut tokenizer, &mut progress));
            }

            if let Some(percentage) = progress.advance(read) {
                self.emit(EngineNotification::Progress(percentage));
            }

            let text = decoder.decode(&buffer[..read]);
            chunks += 1;
            let snapshot = {
                let mut state = self.shared.lock();
                if state.canceled {
                    return Ok(FinishReason::Canceled);
                }
                tokenizer.feed(&text, &mut state.tally);
                (chunks % u64::from(self.settings.snapshot_interval) == 0)
                    .then(|| ranker::top_words(&state.tally, self.settings.top_n))
            };
            log::trace!("ProcessingEngine: Run {} chunk {chunks} ({read} bytes).", self.run_id);

            if let Some(snapshot) = snapshot {
                self.emit(EngineNotification::TopWords(snapshot));
            }
        }
    }

    /*
     * Blocks while paused. Returns true when the run has been canceled.
     */
    fn wait_at_checkpoint(&self) -> bool {
        let state = self.shared.lock();
        let state = self
            .shared
            .wake
            .wait_while(state, |s| s.paused && !s.canceled)
            .unwrap_or_else(PoisonError::into_inner);
        state.canceled
    }

    fn finish_exhausted(
        &self,
        decoder: &mut Utf8ChunkDecoder,
        tokenizer: &mut ChunkTokenizer,
        progress: &mut ProgressTracker,
    ) -> FinishReason {
        let tail = decoder.finish();
        let snapshot = {
            let mut state = self.shared.lock();
            if state.canceled {
                return FinishReason::Canceled;
            }
            tokenizer.feed(&tail, &mut state.tally);
            tokenizer.finish(&mut state.tally);
            state.run_state = RunState::Finished;
            state.paused = false;
            ranker::top_words(&state.tally, self.settings.top_n)
        };

        if let Some(percentage) = progress.complete() {
            self.emit(EngineNotification::Progress(percentage));
        }
        self.emit(EngineNotification::TopWords(snapshot));
        FinishReason::Exhausted
    }

    fn emit(&self, notification: EngineNotification) {
        let event = EngineEvent {
            run_id: self.run_id,
            notification,
        };
        if self.notifier.send(event).is_err() {
            log::trace!("ProcessingEngine: Run {} has no listener.", self.run_id);
        }
    }
}

fn read_chunk(file: &mut File, buffer: &mut [u8]) -> io::Result<usize> {
    loop {
        match file.read(buffer) {
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            result => return result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notifications::RankedEntry;
    use crate::core::tokenizer;
    use crossbeam_channel::unbounded;
    use rand::Rng;
    use rand::seq::IndexedRandom;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::NamedTempFile;

    const RECV_TIMEOUT: Duration = Duration::from_secs(10);
    const QUIET_PERIOD: Duration = Duration::from_millis(150);

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    fn settings(chunk_size: usize, snapshot_interval: u32, top_n: usize) -> EngineSettings {
        EngineSettings {
            chunk_size,
            snapshot_interval,
            top_n,
        }
    }

    fn engine_with(settings: EngineSettings) -> (ProcessingEngine, Receiver<EngineEvent>) {
        crate::initialize_logging();
        let (tx, rx) = unbounded();
        (ProcessingEngine::new(settings, tx), rx)
    }

    /* Collects notifications of `run_id` up to and including its terminal one. */
    fn collect_run(rx: &Receiver<EngineEvent>, run_id: RunId) -> Vec<EngineNotification> {
        let mut seen = Vec::new();
        loop {
            let event = rx
                .recv_timeout(RECV_TIMEOUT)
                .expect("run did not reach a terminal notification in time");
            if event.run_id != run_id {
                continue;
            }
            let terminal = event.notification.is_terminal();
            seen.push(event.notification);
            if terminal {
                return seen;
            }
        }
    }

    fn assert_quiet(rx: &Receiver<EngineEvent>) {
        if let Ok(extra) = rx.recv_timeout(QUIET_PERIOD) {
            panic!("Unexpected notification after terminal: {extra:?}");
        }
    }

    fn random_corpus(words: usize) -> String {
        let vocabulary = [
            "river", "Stone", "über", "naïve", "café", "LIGHT", "x_1", "東京", "light", "a",
        ];
        let separators = [" ", ", ", ".\n", " -- ", "!"];
        let mut rng = rand::rng();
        let mut text = String::new();
        for _ in 0..words {
            text.push_str(vocabulary.choose(&mut rng).unwrap());
            text.push_str(separators.choose(&mut rng).unwrap());
            if rng.random_bool(0.05) {
                text.push('\u{2014}');
            }
        }
        text
    }

    #[test]
    fn test_single_chunk_example_run() {
        let (mut engine, rx) = engine_with(EngineSettings::default());
        let file = write_temp("The cat sat. The CAT sat!");

        engine.start(1, file.path()).unwrap();
        let notifications = collect_run(&rx, 1);

        assert_eq!(
            notifications,
            vec![
                EngineNotification::Progress(100),
                EngineNotification::TopWords(vec![
                    RankedEntry::new("the", 2),
                    RankedEntry::new("cat", 2),
                    RankedEntry::new("sat", 2),
                ]),
                EngineNotification::Finished(FinishReason::Exhausted),
            ]
        );
        assert_quiet(&rx);
        assert_eq!(engine.run_state(), RunState::Finished);
        assert_eq!(engine.current_path().as_deref(), Some(file.path()));
    }

    #[test]
    fn test_multi_chunk_run_counts_every_token_and_reports_in_order() {
        let (mut engine, rx) = engine_with(settings(7, 3, 5));
        let text = random_corpus(3000);
        let file = write_temp(&text);

        engine.start(7, file.path()).unwrap();
        let notifications = collect_run(&rx, 7);
        assert_quiet(&rx);

        let expected_tokens = tokenizer::tokenize(&text);
        assert_eq!(engine.tokens_counted(), expected_tokens.len() as u64);
        let mut expected = WordTally::new();
        tokenizer::count_words(&text, &mut expected);
        for (word, count) in expected.as_slice() {
            assert_eq!(engine.word_count(word), Some(*count), "count of {word:?}");
        }

        let progress: Vec<u8> = notifications
            .iter()
            .filter_map(|n| match n {
                EngineNotification::Progress(p) => Some(*p),
                _ => None,
            })
            .collect();
        assert!(!progress.is_empty());
        assert!(progress.windows(2).all(|w| w[0] < w[1]), "{progress:?}");
        assert_eq!(progress.last(), Some(&100));

        let snapshots: Vec<&RankedSnapshot> = notifications
            .iter()
            .filter_map(|n| match n {
                EngineNotification::TopWords(s) => Some(s),
                _ => None,
            })
            .collect();
        assert!(snapshots.len() > 1, "expected intermediate snapshots");
        for snapshot in &snapshots {
            assert!(snapshot.len() <= 5);
            assert!(snapshot.windows(2).all(|w| w[0].count >= w[1].count));
        }
        assert_eq!(*snapshots[snapshots.len() - 1], engine.top_words(5));

        let terminals = notifications.iter().filter(|n| n.is_terminal()).count();
        assert_eq!(terminals, 1);
        assert_eq!(
            notifications.last(),
            Some(&EngineNotification::Finished(FinishReason::Exhausted))
        );
    }

    #[test]
    fn test_empty_file_finishes_with_empty_snapshot() {
        let (mut engine, rx) = engine_with(EngineSettings::default());
        let file = write_temp("");

        engine.start(1, file.path()).unwrap();
        let notifications = collect_run(&rx, 1);

        assert_eq!(
            notifications,
            vec![
                EngineNotification::TopWords(Vec::new()),
                EngineNotification::Finished(FinishReason::Exhausted),
            ]
        );
    }

    #[test]
    fn test_missing_file_reports_error_and_no_finished() {
        let (mut engine, rx) = engine_with(EngineSettings::default());
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does_not_exist.txt");

        engine.start(3, &missing).unwrap();
        let notifications = collect_run(&rx, 3);
        assert_quiet(&rx);

        assert_eq!(notifications.len(), 1);
        match &notifications[0] {
            EngineNotification::Error(message) => {
                assert!(message.contains("does_not_exist.txt"), "{message}");
                assert!(message.starts_with("Cannot open file"), "{message}");
            }
            other => panic!("Expected Error, got {other:?}"),
        }
        assert_eq!(engine.run_state(), RunState::Errored);
    }

    #[test]
    fn test_pause_halts_tally_until_resumed() {
        let (mut engine, rx) = engine_with(settings(256, 10, 15));
        let text = "pause resume ".repeat(200_000);
        let file = write_temp(&text);

        engine.start(1, file.path()).unwrap();
        engine.pause();
        assert_eq!(engine.run_state(), RunState::Paused);

        thread::sleep(Duration::from_millis(100));
        let counted_while_paused = engine.tokens_counted();
        thread::sleep(Duration::from_millis(200));
        assert_eq!(engine.tokens_counted(), counted_while_paused);
        assert!(
            rx.try_iter().all(|e| !e.notification.is_terminal()),
            "paused run must not terminate"
        );

        engine.resume();
        assert_eq!(engine.run_state(), RunState::Running);
        let notifications = collect_run(&rx, 1);

        assert_eq!(
            notifications.last(),
            Some(&EngineNotification::Finished(FinishReason::Exhausted))
        );
        assert_eq!(engine.tokens_counted(), 400_000);
        assert_eq!(engine.word_count("pause"), Some(200_000));
    }

    #[test]
    fn test_cancel_while_paused_terminates_once() {
        let (mut engine, rx) = engine_with(settings(16, 1_000_000, 15));
        let file = write_temp(&"word ".repeat(5000));

        engine.start(1, file.path()).unwrap();
        engine.pause();
        engine.cancel();
        assert_eq!(engine.run_state(), RunState::Canceled);

        let notifications = collect_run(&rx, 1);
        assert_eq!(
            notifications.last(),
            Some(&EngineNotification::Finished(FinishReason::Canceled))
        );
        assert!(
            !notifications
                .iter()
                .any(|n| matches!(n, EngineNotification::TopWords(_))),
            "a canceled run emits no final snapshot"
        );
        assert_quiet(&rx);

        // A second cancel after the run is over is ignored.
        engine.cancel();
        assert_quiet(&rx);
        assert_eq!(engine.run_state(), RunState::Canceled);
    }

    #[test]
    fn test_controls_without_run_are_noops() {
        let (engine, rx) = engine_with(EngineSettings::default());

        engine.pause();
        engine.resume();
        engine.cancel();

        assert_eq!(engine.run_state(), RunState::Idle);
        assert!(engine.current_run_id().is_none());
        assert_quiet(&rx);
    }

    #[test]
    fn test_restart_supersedes_previous_run() {
        let (mut engine, rx) = engine_with(settings(64, 10, 15));
        let first = write_temp(&"alpha ".repeat(50_000));
        let second = write_temp("beta gamma beta");

        engine.start(1, first.path()).unwrap();
        engine.start(2, second.path()).unwrap();
        engine.wait_for_run();

        let events: Vec<EngineEvent> = rx.try_iter().collect();
        let first_run_terminals = events
            .iter()
            .filter(|e| e.run_id == 1 && e.notification.is_terminal())
            .count();
        assert_eq!(first_run_terminals, 1);

        // Everything from run 1 arrives before anything from run 2.
        let last_of_first = events.iter().rposition(|e| e.run_id == 1).unwrap();
        let first_of_second = events.iter().position(|e| e.run_id == 2).unwrap();
        assert!(last_of_first < first_of_second);

        let final_snapshot = events
            .iter()
            .filter(|e| e.run_id == 2)
            .filter_map(|e| match &e.notification {
                EngineNotification::TopWords(s) => Some(s.clone()),
                _ => None,
            })
            .last()
            .unwrap();
        assert_eq!(
            final_snapshot,
            vec![RankedEntry::new("beta", 2), RankedEntry::new("gamma", 1)]
        );
        assert_eq!(engine.word_count("alpha"), None);
        assert_eq!(engine.current_run_id(), Some(2));
    }

    #[test]
    fn test_serve_applies_signals_in_order() {
        crate::initialize_logging();
        let (event_tx, event_rx) = unbounded();
        let (command_tx, command_rx) = unbounded();
        let engine = ProcessingEngine::new(EngineSettings::default(), event_tx);
        let host = thread::spawn(move || engine.serve(command_rx));
        let file = write_temp("one two two");

        command_tx
            .send(ControlSignal::Start {
                run_id: 11,
                path: file.path().to_path_buf(),
            })
            .unwrap();
        let notifications = collect_run(&event_rx, 11);
        assert_eq!(
            notifications.last(),
            Some(&EngineNotification::Finished(FinishReason::Exhausted))
        );

        drop(command_tx);
        host.join().unwrap();
    }

    #[test]
    fn test_progress_tracker_is_strictly_increasing_and_clamped() {
        let mut tracker = ProgressTracker::new(10);
        assert_eq!(tracker.advance(1), Some(10));
        assert_eq!(tracker.advance(0), None);
        assert_eq!(tracker.advance(4), Some(50));
        assert_eq!(tracker.advance(10), Some(100));
        assert_eq!(tracker.advance(1), None);
        assert_eq!(tracker.complete(), None);

        let mut unknown = ProgressTracker::new(0);
        assert_eq!(unknown.advance(100), Some(0));
        assert_eq!(unknown.advance(100), None);
        assert_eq!(unknown.complete(), None);
    }
}
