/*
 * Caller-side orchestration. `WordFrequencyController` owns the engine's
 * host thread, forwards commands to it, and turns engine notifications into
 * de-duplicated property changes held in `ObservableState`.
 * Unit tests for the controller are in `controller_tests.rs`.
 */
pub mod controller;
pub mod observable_state;


pub use controller::{ControllerError, ControllerEvent, WordFrequencyController};
pub use observable_state::ObservableState;
