//! Scoring module - points, lines, level and fall speed
//!
//! Rows score on an arithmetic ladder within one clearing pass: the first row
//! is worth 100, each further row in the same pass 50 more. Reaching
//! `1000 * level` points moves up one level, which shortens the fall interval.

use crate::types::{Status, LEVEL_SCORE_STEP, ROW_CLEAR_BASE, START_LEVEL};

/// Points for the `nth` row (1-based) cleared in one pass
pub fn row_clear_points(nth: u32) -> u32 {
    debug_assert!(nth >= 1);
    ROW_CLEAR_BASE + ROW_CLEAR_BASE * (nth - 1) / 2
}

/// Fall interval after reaching `level`, given the interval before it.
///
/// Levels below 4 divide by `level / 2`, later ones by `level / 4`. The
/// result is rounded half to even and never drops below one tick.
pub fn next_fall_interval(current: u32, level: u32) -> u32 {
    let divisor = if level < 4 {
        level as f64 / 2.0
    } else {
        level as f64 / 4.0
    };
    let scaled = (current as f64 / divisor).round_ties_even();
    (scaled as u32).max(1)
}

/// Score, lines, level and speed of one game
#[derive(Debug, Clone, PartialEq)]
pub struct Progression {
    score: u32,
    lines: u32,
    level: u32,
    /// Ticks between forced descents
    fall_interval: u32,
    /// Scales with level; nothing reads it yet.
    time_scale: f64,
}

impl Progression {
    pub fn new(fall_interval: u32) -> Self {
        Self {
            score: 0,
            lines: 0,
            level: START_LEVEL,
            fall_interval: fall_interval.max(1),
            time_scale: 1.0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fall_interval(&self) -> u32 {
        self.fall_interval
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    pub fn status(&self) -> Status {
        Status {
            score: self.score,
            lines: self.lines,
            level: self.level,
        }
    }

    /// Credit the `nth` row of the current clearing pass.
    ///
    /// Returns `true` if the new score crossed the level threshold and the
    /// level advanced.
    pub fn score_row_clear(&mut self, nth: u32) -> bool {
        self.score = self.score.saturating_add(row_clear_points(nth));
        self.lines += 1;

        if self.score >= LEVEL_SCORE_STEP.saturating_mul(self.level) {
            self.advance_level();
            return true;
        }
        false
    }

    /// Move up one level and speed up the fall
    pub fn advance_level(&mut self) {
        self.level += 1;
        self.fall_interval = next_fall_interval(self.fall_interval, self.level);
        self.time_scale *= self.level as f64 / 2.0;
    }
}
