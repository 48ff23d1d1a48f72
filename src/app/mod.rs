// LogTally - app/mod.rs
//
// Application layer: wires core, ui, and util together for each binary.

pub mod analyse;
pub mod assistant;
