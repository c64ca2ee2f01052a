//! d20 stat checks
//!
//! A check rolls one d20, adds a bonus derived from the stat being tested and
//! compares the total against a difficulty. Inputs are never range-checked; the
//! formula is defined for every integer.

use crate::domain::value_objects::RollOutcome;

/// Faces on the check die
pub const D20_SIDES: i64 = 20;

/// Stat value that gives no bonus
const BASELINE_STAT: i64 = 10;

/// Bonus a stat adds to the roll: `floor((stat - 10) / 2)`
///
/// Rounds toward negative infinity, so a stat of 7 gives -2 rather than -1.
pub fn stat_bonus(stat_value: i64) -> i64 {
    stat_value.saturating_sub(BASELINE_STAT).div_euclid(2)
}

/// Resolve a check from an already-rolled die face
///
/// A natural 20 succeeds regardless of the total.
pub fn resolve_check(raw: i64, stat_value: i64, difficulty: i64) -> RollOutcome {
    let bonus = stat_bonus(stat_value);
    let total = raw + bonus;
    let is_critical = raw == D20_SIDES;
    let is_fumble = raw == 1;

    RollOutcome {
        roll: raw,
        bonus,
        total,
        difficulty,
        is_success: total >= difficulty || is_critical,
        is_critical,
        is_fumble,
    }
}
