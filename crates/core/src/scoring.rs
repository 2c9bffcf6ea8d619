//! Scoring module - line-clear points, leveling and fall speed
//!
//! Classic scoring: the base points for 1-4 simultaneous lines are multiplied by the
//! current level (levels start at 1). Every 10 cumulative lines raise the level by one
//! and speed gravity up by a factor of 0.75.

use crate::types::{LEVEL_SPEED_FACTOR, LINES_PER_LEVEL, SOFT_DROP_MULTIPLIER};

/// Base points for clearing `lines` rows in one pass.
///
/// There is no entry for 0 lines (or for more than 4), so callers cannot
/// accidentally score an empty pass.
pub fn line_clear_points(lines: usize) -> Option<u32> {
    match lines {
        1 => Some(40),
        2 => Some(100),
        3 => Some(300),
        4 => Some(1200),
        _ => None,
    }
}

/// Calculate line clear score
/// lines: number of lines cleared in one pass
/// level: current level (1-based)
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    line_clear_points(lines).map_or(0, |base| base.saturating_mul(level))
}

/// Level management
/// A level is gained once cumulative lines reach `level * 10`.
pub fn should_level_up(total_lines: u32, level: u32) -> bool {
    total_lines / LINES_PER_LEVEL >= level
}

/// Fall speed after one level up.
pub fn next_fall_speed_ms(speed_ms: f32) -> f32 {
    speed_ms * LEVEL_SPEED_FACTOR
}

/// Gravity interval while soft drop is held.
pub fn soft_drop_speed_ms(speed_ms: f32) -> f32 {
    speed_ms / SOFT_DROP_MULTIPLIER
}

/// Convert a fractional speed into a whole-millisecond timer duration.
///
/// Rounds up: a timer with a fractional duration fires on the first whole
/// millisecond at or past it. Never returns 0.
pub fn timer_duration_ms(speed_ms: f32) -> u32 {
    (speed_ms.ceil() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_line_scores() {
        assert_eq!(calculate_line_score(1, 1), 40);
        assert_eq!(calculate_line_score(2, 1), 100);
        assert_eq!(calculate_line_score(3, 1), 300);
        assert_eq!(calculate_line_score(4, 1), 1200);

        assert_eq!(calculate_line_score(1, 5), 40 * 5);
        assert_eq!(calculate_line_score(4, 3), 3600);
    }

    #[test]
    fn test_zero_lines_has_no_table_entry() {
        assert_eq!(line_clear_points(0), None);
        assert_eq!(calculate_line_score(0, 7), 0);
    }

    #[test]
    fn test_level_threshold() {
        assert!(!should_level_up(9, 1));
        assert!(should_level_up(10, 1));
        assert!(!should_level_up(10, 2));
        assert!(should_level_up(20, 2));
        assert!(should_level_up(35, 2));
    }

    #[test]
    fn test_speeds() {
        assert_eq!(next_fall_speed_ms(700.0), 525.0);
        assert_eq!(soft_drop_speed_ms(700.0), 70.0);
        assert_eq!(timer_duration_ms(700.0), 700);
        assert_eq!(timer_duration_ms(393.75), 394);
        assert_eq!(timer_duration_ms(0.2), 1);
    }
}
