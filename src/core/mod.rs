// LogTally - core/mod.rs
//
// Core business logic layer.
// Dependencies: util (error types, constants) only.
// Must NOT depend on: app, ui, platform.

pub mod export;
pub mod filter;
pub mod model;
pub mod parser;
pub mod summary;
