//! Scoring and speed policy: line-clear points, level thresholds, and the
//! level-derived drop interval.

use brick_tetris_types::{DROP_INTERVALS_MS, LEVEL_STEP_POINTS, LINE_SCORES, MAX_LEVEL};

/// Points for clearing `lines` rows at once.
pub fn line_clear_score(lines: usize) -> u32 {
    if lines < LINE_SCORES.len() {
        LINE_SCORES[lines]
    } else {
        LINE_SCORES[LINE_SCORES.len() - 1]
    }
}

/// Level for a total score: one level per `LEVEL_STEP_POINTS`, starting at 1,
/// capped at `MAX_LEVEL`.
pub fn level_for_score(score: u32) -> u32 {
    (1 + score / LEVEL_STEP_POINTS).min(MAX_LEVEL)
}

/// Automatic drop interval for a level, in milliseconds.
pub fn drop_interval_ms(level: u32) -> u64 {
    let index = (level.max(1) as usize - 1).min(DROP_INTERVALS_MS.len() - 1);
    DROP_INTERVALS_MS[index]
}
