// LogTally - lib.rs
//
// Library entry point, exposing all modules for integration testing
// and for the two binaries (`logtally`, `logtally-assistant`).

pub mod app;
pub mod core;
pub mod platform;
pub mod ui;
pub mod util;
