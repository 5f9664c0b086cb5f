use super::observable_state::ObservableState;
use crate::core::{
    APP_NAME, ConfigManagerOperations, ControlSignal, EngineEvent, EngineNotification,
    EngineSettings, FinishReason, ProcessingEngine, RankedEntry, RankedSnapshot, RunId,
};
use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, unbounded};
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

const ENGINE_STOPPED_MESSAGE: &str = "Processing engine stopped unexpectedly";

#[derive(Debug)]
pub enum ControllerError {
    /* `start` was requested before a file was opened. */
    NoFileSelected,
    /* The engine host thread could not be created. */
    EngineUnavailable(io::Error),
}

impl std::fmt::Display for ControllerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ControllerError::NoFileSelected => write!(f, "No file selected"),
            ControllerError::EngineUnavailable(e) => {
                write!(f, "Processing engine unavailable: {e}")
            }
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::EngineUnavailable(e) => Some(e),
            ControllerError::NoFileSelected => None,
        }
    }
}

/*
 * Property-change notifications published to observers. Each is queued only
 * when the underlying value actually changes.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    ProgressChanged(u8),
    ProcessingChanged(bool),
    PausedChanged(bool),
    MaxCountChanged(u64),
    TopWordsChanged(RankedSnapshot),
    /* Ranked data was cleared by a cancel or an error. */
    DataReset,
    ErrorOccurred(String),
}

/*
 * Caller-side front of the processing engine.
 *
 * The engine lives on a host thread that applies `ControlSignal`s in the
 * order they were sent, so every command here returns without waiting for the
 * engine. Engine notifications are pulled in with
 * `process_engine_notifications` / `wait_for_engine_notification` and turned
 * into `ControllerEvent`s that callers drain with `try_dequeue_event`.
 *
 * Each run gets a fresh `RunId`. Once the controller stops tracking a run
 * (cancel, restart) every late notification from that run is dropped, which
 * is what lets `cancel` reset the visible state immediately.
 */
pub struct WordFrequencyController {
    commands: Option<Sender<ControlSignal>>,
    notifications: Receiver<EngineEvent>,
    engine_host: Option<JoinHandle<()>>,
    config_manager: Arc<dyn ConfigManagerOperations>,
    current_file: Option<PathBuf>,
    active_run: Option<RunId>,
    next_run_id: RunId,
    state: ObservableState,
    pending_events: VecDeque<ControllerEvent>,
}

impl WordFrequencyController {
    /*
     * Creates the controller and spawns the engine host thread. The
     * `ConfigManagerOperations` implementation is used to remember the last
     * opened file.
     */
    pub fn new(
        settings: EngineSettings,
        config_manager: Arc<dyn ConfigManagerOperations>,
    ) -> Result<Self, ControllerError> {
        let (command_tx, command_rx) = unbounded();
        let (notification_tx, notification_rx) = unbounded();
        let engine = ProcessingEngine::new(settings, notification_tx);

        let engine_host = thread::Builder::new()
            .name("word-count-engine".to_string())
            .spawn(move || engine.serve(command_rx))
            .map_err(ControllerError::EngineUnavailable)?;
        log::debug!("Controller: Engine host thread started.");

        Ok(WordFrequencyController {
            commands: Some(command_tx),
            notifications: notification_rx,
            engine_host: Some(engine_host),
            config_manager,
            current_file: None,
            active_run: None,
            next_run_id: 1,
            state: ObservableState::new(),
            pending_events: VecDeque::new(),
        })
    }

    /*
     * Selects the file for the next `start`. A run in progress is canceled,
     * since it belongs to the previously selected file.
     */
    pub fn open(&mut self, path: impl Into<PathBuf>) {
        if self.state.is_processing() {
            self.cancel();
        }
        let path = path.into();
        log::info!("Controller: Opened {path:?}.");
        self.remember_last_file(&path);
        self.current_file = Some(path);
    }

    /*
     * Starts processing the opened file, superseding any active run.
     * Fails without touching the engine when no file has been opened.
     */
    pub fn start(&mut self) -> Result<RunId, ControllerError> {
        let path = match &self.current_file {
            Some(path) if !path.as_os_str().is_empty() => path.clone(),
            _ => {
                let err = ControllerError::NoFileSelected;
                log::warn!("Controller: Start requested with no file selected.");
                self.pending_events
                    .push_back(ControllerEvent::ErrorOccurred(err.to_string()));
                return Err(err);
            }
        };

        if self.state.is_processing() {
            self.cancel();
        }

        let run_id = self.next_run_id;
        self.next_run_id += 1;
        self.state.reset_to_idle(&mut self.pending_events);
        self.active_run = Some(run_id);
        self.state.set_processing(true, &mut self.pending_events);
        self.send(ControlSignal::Start { run_id, path });
        Ok(run_id)
    }

    pub fn pause(&mut self) {
        if self.state.is_processing() && !self.state.is_paused() {
            self.state.set_paused(true, &mut self.pending_events);
            self.send(ControlSignal::Pause);
        }
    }

    pub fn resume(&mut self) {
        if self.state.is_processing() && self.state.is_paused() {
            self.state.set_paused(false, &mut self.pending_events);
            self.send(ControlSignal::Resume);
        }
    }

    /*
     * Cancels the active run. The visible state returns to idle and the
     * ranked data is cleared right away; the engine's own acknowledgement
     * arrives later and is ignored.
     */
    pub fn cancel(&mut self) {
        if !self.state.is_processing() {
            return;
        }
        if let Some(run_id) = self.active_run.take() {
            log::info!("Controller: Canceling run {run_id}.");
        }
        self.send(ControlSignal::Cancel);
        self.state.reset_to_idle(&mut self.pending_events);
        self.state.clear_data(&mut self.pending_events);
    }

    pub fn current_file(&self) -> Option<&Path> {
        self.current_file.as_deref()
    }

    pub fn active_run(&self) -> Option<RunId> {
        self.active_run
    }

    pub fn progress(&self) -> u8 {
        self.state.progress()
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing()
    }

    pub fn is_paused(&self) -> bool {
        self.state.is_paused()
    }

    pub fn max_count(&self) -> u64 {
        self.state.max_count()
    }

    pub fn top_words(&self) -> &[RankedEntry] {
        self.state.top_words()
    }

    pub fn try_dequeue_event(&mut self) -> Option<ControllerEvent> {
        self.pending_events.pop_front()
    }

    /* Handles every engine notification already queued. Returns how many. */
    pub fn process_engine_notifications(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.notifications.try_recv() {
            self.handle_engine_event(event);
            handled += 1;
        }
        handled
    }

    /*
     * Blocks up to `timeout` for the next engine notification, then handles it
     * and anything queued behind it. Returns false on timeout, and also when
     * the engine host is gone, in which case an active run is abandoned.
     */
    pub fn wait_for_engine_notification(&mut self, timeout: Duration) -> bool {
        match self.notifications.recv_timeout(timeout) {
            Ok(event) => {
                self.handle_engine_event(event);
                self.process_engine_notifications();
                true
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                self.abandon_run_without_engine();
                false
            }
        }
    }

    pub(crate) fn handle_engine_event(&mut self, event: EngineEvent) {
        if self.active_run != Some(event.run_id) {
            log::trace!(
                "Controller: Ignoring {:?} from inactive run {}.",
                event.notification,
                event.run_id
            );
            return;
        }

        match event.notification {
            EngineNotification::Progress(percentage) => {
                self.state.set_progress(percentage, &mut self.pending_events);
            }
            EngineNotification::TopWords(snapshot) => {
                self.state.set_top_words(snapshot, &mut self.pending_events);
            }
            EngineNotification::Finished(reason) => {
                log::info!("Controller: Run {} finished ({reason:?}).", event.run_id);
                self.active_run = None;
                self.state.reset_to_idle(&mut self.pending_events);
                if reason == FinishReason::Canceled {
                    self.state.clear_data(&mut self.pending_events);
                }
            }
            EngineNotification::Error(message) => {
                log::error!("Controller: Run {} failed: {message}", event.run_id);
                self.active_run = None;
                self.state.reset_to_idle(&mut self.pending_events);
                self.state.clear_data(&mut self.pending_events);
                self.pending_events
                    .push_back(ControllerEvent::ErrorOccurred(message));
            }
        }
    }

    /*
     * No notification can arrive once the engine host has exited, so an
     * active run is reported as failed and the state returns to idle.
     */
    fn abandon_run_without_engine(&mut self) {
        if !self.state.is_processing() {
            return;
        }
        log::error!(
            "Controller: Engine notification channel disconnected during run {:?}.",
            self.active_run
        );
        self.active_run = None;
        self.state.reset_to_idle(&mut self.pending_events);
        self.state.clear_data(&mut self.pending_events);
        self.pending_events
            .push_back(ControllerEvent::ErrorOccurred(ENGINE_STOPPED_MESSAGE.to_string()));
    }

    /*
     * Closes the command channel and joins the host thread. The engine
     * cancels and joins its run when it is dropped there.
     */
    pub(crate) fn stop_engine_host(&mut self) {
        if let Some(commands) = self.commands.take() {
            let _ = commands.send(ControlSignal::Cancel);
        }
        if let Some(host) = self.engine_host.take() {
            if host.join().is_err() {
                log::error!("Controller: Engine host thread panicked.");
            }
        }
    }

    fn send(&self, signal: ControlSignal) {
        match &self.commands {
            Some(commands) => {
                if let Err(e) = commands.send(signal) {
                    log::error!("Controller: Engine host is gone, dropped {:?}.", e.0);
                }
            }
            None => log::error!("Controller: No engine host for {signal:?}."),
        }
    }

    fn remember_last_file(&self, path: &Path) {
        let result = self
            .config_manager
            .load_config(APP_NAME)
            .and_then(|mut config| {
                config.last_file_path = Some(path.to_path_buf());
                self.config_manager.save_config(APP_NAME, &config)
            });
        if let Err(e) = result {
            log::warn!("Controller: Could not remember last file {path:?}: {e}");
        }
    }
}

impl Drop for WordFrequencyController {
    fn drop(&mut self) {
        self.stop_engine_host();
    }
}
