/*
 * This module defines `ObservableState`, the set of properties a UI binds to
 * while a file is being processed: progress, the processing and paused flags,
 * the current ranked words, and the largest count among them (used to scale
 * histogram bars).
 *
 * Every setter compares against the current value and queues a
 * `ControllerEvent` only on an actual change, so observers never see
 * duplicate notifications.
 */
use super::controller::ControllerEvent;
use crate::core::{RankedEntry, RankedSnapshot};
use std::collections::VecDeque;

/* Floor for `max_count`, so bar scaling never divides by zero. */
const MIN_MAX_COUNT: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservableState {
    progress: u8,
    is_processing: bool,
    is_paused: bool,
    max_count: u64,
    top_words: RankedSnapshot,
}

impl Default for ObservableState {
    fn default() -> Self {
        Self::new()
    }
}

impl ObservableState {
    pub fn new() -> Self {
        ObservableState {
            progress: 0,
            is_processing: false,
            is_paused: false,
            max_count: MIN_MAX_COUNT,
            top_words: Vec::new(),
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn is_processing(&self) -> bool {
        self.is_processing
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn max_count(&self) -> u64 {
        self.max_count
    }

    pub fn top_words(&self) -> &[RankedEntry] {
        &self.top_words
    }

    pub fn set_progress(&mut self, progress: u8, events: &mut VecDeque<ControllerEvent>) {
        if self.progress != progress {
            self.progress = progress;
            events.push_back(ControllerEvent::ProgressChanged(progress));
        }
    }

    pub fn set_processing(&mut self, processing: bool, events: &mut VecDeque<ControllerEvent>) {
        if self.is_processing != processing {
            self.is_processing = processing;
            events.push_back(ControllerEvent::ProcessingChanged(processing));
        }
    }

    pub fn set_paused(&mut self, paused: bool, events: &mut VecDeque<ControllerEvent>) {
        if self.is_paused != paused {
            self.is_paused = paused;
            events.push_back(ControllerEvent::PausedChanged(paused));
        }
    }

    /*
     * Replaces the ranked data. `MaxCountChanged` is queued before
     * `TopWordsChanged` so a bar chart can rescale before it redraws.
     */
    pub fn set_top_words(
        &mut self,
        snapshot: RankedSnapshot,
        events: &mut VecDeque<ControllerEvent>,
    ) {
        if self.top_words == snapshot {
            return;
        }
        let max_count = snapshot
            .iter()
            .map(|entry| entry.count)
            .max()
            .unwrap_or(0)
            .max(MIN_MAX_COUNT);
        if self.max_count != max_count {
            self.max_count = max_count;
            events.push_back(ControllerEvent::MaxCountChanged(max_count));
        }
        self.top_words = snapshot.clone();
        events.push_back(ControllerEvent::TopWordsChanged(snapshot));
    }

    /* Back to the idle baseline: not processing, not paused, progress 0. */
    pub fn reset_to_idle(&mut self, events: &mut VecDeque<ControllerEvent>) {
        self.set_processing(false, events);
        self.set_paused(false, events);
        self.set_progress(0, events);
    }

    /* Drops the ranked data and announces the reset. */
    pub fn clear_data(&mut self, events: &mut VecDeque<ControllerEvent>) {
        self.set_top_words(Vec::new(), events);
        events.push_back(ControllerEvent::DataReset);
    }
}
