//! Backend worker thread: owns the async runtime and the member source.

pub mod commands;
pub mod runtime;
