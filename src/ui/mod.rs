// LogTally - ui/mod.rs
//
// Presentation layer: text report rendering and terminal colours.
// Depends on core types only; no I/O beyond the writer it is handed.

pub mod report;
pub mod theme;
