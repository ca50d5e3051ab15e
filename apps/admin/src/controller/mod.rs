//! Controller layer: backend events, typed command input, and command orchestration.

pub mod events;
pub mod input;
pub mod orchestration;
