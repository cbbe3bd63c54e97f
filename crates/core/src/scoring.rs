//! Scoring module - line clear points, leveling and the gravity schedule
//!
//! Classic rules: points are `multiplier[lines] * (level + 1)`, a level is
//! gained every `LINES_PER_LEVEL` lines with overflow carried into the next
//! level's quota.

use crate::types::{GRAVITY_LEVEL, LINES_PER_LEVEL, LINE_MULTIPLIERS, MAX_LEVEL};

/// Level bookkeeping after a clear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    pub lines_remaining: u32,
}

impl LevelProgress {
    /// Level 0 with a full quota
    pub fn start() -> Self {
        Self {
            level: 0,
            lines_remaining: LINES_PER_LEVEL,
        }
    }

    /// Account for `cleared` lines
    ///
    /// Reaching the quota exactly counts as a level-up. Lines past the quota
    /// are taken off the next level's quota.
    pub fn advance(self, cleared: u32) -> Self {
        if cleared >= self.lines_remaining {
            let overflow = cleared - self.lines_remaining;
            Self {
                level: (self.level + 1).min(MAX_LEVEL),
                lines_remaining: LINES_PER_LEVEL.saturating_sub(overflow).max(1),
            }
        } else {
            Self {
                lines_remaining: self.lines_remaining - cleared,
                ..self
            }
        }
    }
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self::start()
    }
}

/// Calculate line clear score
///
/// `lines`: lines cleared in one tick; counts above 4 score as 4
/// `level`: current level (0-based)
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_MULTIPLIERS.len() - 1);
    LINE_MULTIPLIERS[idx].saturating_mul(level + 1)
}

/// Ticks per gravity descent at `level`; levels past the table use the last entry
pub fn gravity_ticks(level: u32) -> u32 {
    let idx = (level as usize).min(GRAVITY_LEVEL.len() - 1);
    GRAVITY_LEVEL[idx]
}
