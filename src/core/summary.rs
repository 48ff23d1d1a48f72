// LogTally - core/summary.rs
//
// Per-level record counts. Core layer: pure logic, no I/O.

use crate::core::model::{Level, LogRecord};
use std::collections::HashMap;

/// Count of records per observed level token.
///
/// Keys are the uppercased level tokens exactly as parsed, including
/// tokens outside [`Level`]. Ordering is imposed by the report, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelCounts {
    counts: HashMap<String, usize>,
}

impl LevelCounts {
    /// Count for an arbitrary level token; 0 when never observed.
    pub fn get(&self, level: &str) -> usize {
        self.counts.get(level).copied().unwrap_or(0)
    }

    /// Count for a known level; 0 when never observed.
    pub fn count_of(&self, level: Level) -> usize {
        self.get(level.as_str())
    }

    /// Known levels paired with their counts, in display order.
    pub fn known(&self) -> impl Iterator<Item = (Level, usize)> + '_ {
        Level::ALL.into_iter().map(|l| (l, self.count_of(l)))
    }

    /// Total number of records counted, across all tokens.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct level tokens observed.
    pub fn distinct_levels(&self) -> usize {
        self.counts.len()
    }
}

/// Count records per level token.
pub fn count_by_level(records: &[LogRecord]) -> LevelCounts {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for record in records {
        *counts.entry(record.level.clone()).or_insert(0) += 1;
    }

    tracing::debug!(
        records = records.len(),
        levels = counts.len(),
        "Counted records by level"
    );

    LevelCounts { counts }
}
