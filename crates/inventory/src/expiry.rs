//! Expiration rule.
//!
//! An item counts as expired when `now + shelf_life_days * 86400 <= now`.
//! Both sides read the same instant, so any positive shelf life yields
//! `false`: this asks "was it already expired when received", not "will it
//! expire before some deadline". Kept exactly as is; callers and tests rely
//! on the predicate rather than on a corrected one.

use chrono::{DateTime, TimeDelta, Utc};

pub const SECONDS_PER_DAY: i64 = 86_400;

/// Instant at which stock received at `now` stops being good.
///
/// `None` when the result falls outside the representable date range.
pub fn expires_at(now: DateTime<Utc>, shelf_life_days: u32) -> Option<DateTime<Utc>> {
    let seconds = i64::from(shelf_life_days) * SECONDS_PER_DAY;
    TimeDelta::try_seconds(seconds).and_then(|delta| now.checked_add_signed(delta))
}

/// Evaluate the expiration predicate at `now`.
///
/// An unrepresentable expiration instant is treated as "far future".
pub fn is_expired_at(shelf_life_days: u32, now: DateTime<Utc>) -> bool {
    expires_at(now, shelf_life_days).is_some_and(|at| at <= now)
}
