//! The daily cycle: once-per-calendar-day resets and inactivity penalties.
//!
//! All day boundaries are UTC midnight. The cycle is idempotent per UTC
//! calendar date and must run before any other engine call is trusted for
//! "today"; the api layer settles it lazily on reads and inside every
//! mutating transaction.

use chrono::NaiveTime;

use crate::exercise::MIN_DAILY_STRENGTH;
use crate::pet::PetState;
use crate::quest::QuestBoard;
use crate::stage::resolve_stage;
use crate::stats::STAMINA_MAX;
use crate::types::Timestamp;

/// Mood lost on a day that missed the exercise target.
pub const DAILY_MOOD_PENALTY: i32 = 10;

/// Strength lost on a missed day, but only once mood is fully depleted.
pub const DAILY_STRENGTH_PENALTY: i32 = 10;

/// Result of one daily cycle run.
#[derive(Debug, Clone)]
pub struct DailyCycleOutcome {
    pub pet: PetState,
    /// True when the cycle had already run for `now`'s date: the pet is
    /// returned unchanged.
    pub already_checked: bool,
    /// Whether yesterday's exercise met [`MIN_DAILY_STRENGTH`].
    pub met_requirement: bool,
    pub total_strength_yesterday: i32,
}

/// Whether the daily cycle has already run for the UTC date of `now`.
pub fn already_checked_for(last_daily_check_at: Option<Timestamp>, now: Timestamp) -> bool {
    last_daily_check_at.is_some_and(|checked| checked.date_naive() >= now.date_naive())
}

/// The half-open UTC window `[yesterday 00:00, today 00:00)` relative to
/// `now`, over which yesterday's exercise logs are summed.
pub fn yesterday_window(now: Timestamp) -> (Timestamp, Timestamp) {
    let today_start = now.date_naive().and_time(NaiveTime::MIN).and_utc();
    let yesterday_start = today_start - chrono::Duration::days(1);
    (yesterday_start, today_start)
}

/// Run the daily cycle for `now`.
///
/// `total_strength_yesterday` is the caller-supplied sum of
/// `duration_seconds / 10` over exercise logs inside [`yesterday_window`].
///
/// On the first run of a date this resets the daily budget (stamina back
/// to max, counters to zero, quest board to its day-start shape) and, when
/// yesterday missed the target, docks mood by [`DAILY_MOOD_PENALTY`] —
/// and strength too, once mood has hit zero. This is the only place
/// inactivity can lower a stat.
pub fn run_daily_cycle(
    mut pet: PetState,
    now: Timestamp,
    total_strength_yesterday: i32,
) -> DailyCycleOutcome {
    let met_requirement = total_strength_yesterday >= MIN_DAILY_STRENGTH;

    if already_checked_for(pet.last_daily_check_at, now) {
        return DailyCycleOutcome {
            pet,
            already_checked: true,
            met_requirement,
            total_strength_yesterday,
        };
    }

    pet.stamina = STAMINA_MAX;
    pet.daily_exercise_seconds = 0;
    pet.daily_steps = 0;
    pet.quests = QuestBoard::day_start();
    pet.last_reset_at = Some(now);

    if !met_requirement {
        pet.mood = (pet.mood - DAILY_MOOD_PENALTY).max(0);
        if pet.mood == 0 && pet.strength > 0 {
            pet.strength = (pet.strength - DAILY_STRENGTH_PENALTY).max(0);
        }
    }

    pet.last_daily_check_at = Some(now);
    pet.stage = resolve_stage(pet.level, pet.breakthrough_completed);

    DailyCycleOutcome {
        pet,
        already_checked: false,
        met_requirement,
        total_strength_yesterday,
    }
}
