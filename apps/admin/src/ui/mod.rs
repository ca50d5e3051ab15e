//! Terminal front end: app shell and table rendering.

pub mod app;
pub mod table;

pub use app::{AdminApp, LoopControl};
