//! Status panel: the on-screen receiver of score, line and level reports.

use tracing::info;

use crate::core::StatusSink;
use crate::types::{Status, START_LEVEL};

/// Holds the figures the side panel shows.
///
/// The session pushes a report at start, per scored row and per level up;
/// the panel keeps only the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPanel {
    latest: Status,
    reports: u64,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            latest: Status {
                score: 0,
                lines: 0,
                level: START_LEVEL,
            },
            reports: 0,
        }
    }

    pub fn latest(&self) -> Status {
        self.latest
    }

    /// Number of reports received so far
    pub fn reports(&self) -> u64 {
        self.reports
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusSink for StatusPanel {
    fn report(&mut self, status: Status) {
        info!(
            score = status.score,
            lines = status.lines,
            level = status.level,
            "status"
        );
        self.latest = status;
        self.reports += 1;
    }
}
