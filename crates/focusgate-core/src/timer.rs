//! Focus/break session timer.
//!
//! The timer is a wall-clock state machine persisted as a [`TimerRecord`].
//! There is no internal thread and no cached state: every reader derives the
//! current phase from the persisted record and the current time, so any
//! number of independent callers converge on the same transition. Whichever
//! caller persists last wins.
//!
//! ## Phase Transitions
//!
//! ```text
//! focus <-> break   (flip when now reaches end_time)
//! ```
//!
//! Absence of a record is the implicit third state: disabled.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Focus,
    Break,
}

impl Phase {
    fn flipped(self) -> Phase {
        match self {
            Phase::Focus => Phase::Break,
            Phase::Break => Phase::Focus,
        }
    }

    /// Capitalized phase name for countdown rendering.
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Focus => "Focus",
            Phase::Break => "Break",
        }
    }
}

/// One running focus/break session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerRecord {
    pub phase: Phase,
    /// When the current phase ends. In the future at the moment the record
    /// was produced; once `now >= end_time` the record is stale and must be
    /// advanced before use.
    pub end_time: DateTime<Utc>,
    /// Focus phase length in minutes.
    pub focus_duration: u64,
    /// Break phase length in minutes.
    pub break_duration: u64,
}

impl TimerRecord {
    /// Begin a session: focus phase ending `focus_duration` minutes from now.
    pub fn start(now: DateTime<Utc>, focus_duration: u64, break_duration: u64) -> Self {
        Self {
            phase: Phase::Focus,
            end_time: add_minutes(now, focus_duration),
            focus_duration,
            break_duration,
        }
    }

    fn phase_minutes(&self, phase: Phase) -> u64 {
        match phase {
            Phase::Focus => self.focus_duration,
            Phase::Break => self.break_duration,
        }
    }

    /// Pure transition function. Identity while `now < end_time`; otherwise
    /// the phase flips exactly once and the new phase runs its full duration
    /// from `now`. No multi-phase catch-up happens in a single call: callers
    /// that poll with increasing `now` converge over multiple calls.
    ///
    /// Callers persist the result only if it differs from the input.
    #[must_use]
    pub fn advance(&self, now: DateTime<Utc>) -> TimerRecord {
        if now < self.end_time {
            return self.clone();
        }
        let next = self.phase.flipped();
        TimerRecord {
            phase: next,
            end_time: add_minutes(now, self.phase_minutes(next)),
            ..self.clone()
        }
    }

    /// Remaining time in the current phase, clamped to zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> Duration {
        (self.end_time - now).max(Duration::zero())
    }

    /// `m:ss` countdown string for presentation.
    pub fn format_remaining(&self, now: DateTime<Utc>) -> String {
        let secs = self.remaining(now).num_seconds();
        format!("{}:{:02}", secs / 60, secs % 60)
    }
}

fn add_minutes(at: DateTime<Utc>, minutes: u64) -> DateTime<Utc> {
    i64::try_from(minutes)
        .ok()
        .and_then(Duration::try_minutes)
        .and_then(|d| at.checked_add_signed(d))
        .unwrap_or(DateTime::<Utc>::MAX_UTC)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 4, 12, 0, 0).unwrap()
    }

    #[test]
    fn start_opens_focus_phase() {
        let record = TimerRecord::start(t0(), 25, 10);
        assert_eq!(record.phase, Phase::Focus);
        assert_eq!(record.end_time, t0() + Duration::minutes(25));
    }

    #[test]
    fn advance_is_identity_before_expiry() {
        let record = TimerRecord::start(t0(), 25, 10);
        let later = t0() + Duration::minutes(24);
        assert_eq!(record.advance(later), record);
        assert_eq!(record.advance(t0()), record);
    }

    #[test]
    fn advance_flips_to_break_after_expiry() {
        let record = TimerRecord::start(t0(), 25, 10);
        let now = t0() + Duration::minutes(26);
        let advanced = record.advance(now);
        assert_eq!(advanced.phase, Phase::Break);
        assert_eq!(advanced.end_time, now + Duration::minutes(10));
    }

    #[test]
    fn advance_flips_exactly_at_end_time() {
        let record = TimerRecord::start(t0(), 25, 10);
        let advanced = record.advance(record.end_time);
        assert_eq!(advanced.phase, Phase::Break);
    }

    #[test]
    fn advance_flips_once_no_matter_how_stale() {
        let record = TimerRecord::start(t0(), 25, 10);
        let now = t0() + Duration::hours(3);
        let advanced = record.advance(now);
        assert_eq!(advanced.phase, Phase::Break);
        assert_eq!(advanced.end_time, now + Duration::minutes(10));
    }

    #[test]
    fn repeated_advance_converges() {
        let record = TimerRecord::start(t0(), 25, 10);

        let at_26 = t0() + Duration::minutes(26);
        let on_break = record.advance(at_26);
        assert_eq!(on_break.phase, Phase::Break);

        let at_40 = t0() + Duration::minutes(40);
        let back_to_focus = on_break.advance(at_40);
        assert_eq!(back_to_focus.phase, Phase::Focus);
        assert_eq!(back_to_focus.end_time, at_40 + Duration::minutes(25));

        // A fresh read of the already-advanced record stays put.
        assert_eq!(back_to_focus.advance(at_40), back_to_focus);
    }

    #[test]
    fn remaining_clamps_to_zero() {
        let record = TimerRecord::start(t0(), 25, 10);
        assert_eq!(
            record.remaining(t0() + Duration::minutes(30)),
            Duration::zero()
        );
        assert_eq!(record.format_remaining(t0()), "25:00");
        assert_eq!(
            record.format_remaining(t0() + Duration::seconds(24 * 60 + 55)),
            "0:05"
        );
    }

    proptest! {
        #[test]
        fn advance_before_expiry_is_idempotent(
            focus_min in 1u64..600,
            break_min in 1u64..600,
            offset_secs in 0i64..59,
        ) {
            let record = TimerRecord::start(t0(), focus_min, break_min);
            let now = record.end_time - Duration::seconds(offset_secs + 1);
            prop_assert_eq!(record.advance(now), record);
        }

        #[test]
        fn advance_past_expiry_flips_phase_once(
            focus_min in 1u64..600,
            break_min in 1u64..600,
            stale_secs in 0i64..1_000_000,
        ) {
            let record = TimerRecord::start(t0(), focus_min, break_min);
            let now = record.end_time + Duration::seconds(stale_secs);
            let advanced = record.advance(now);
            prop_assert_eq!(advanced.phase, Phase::Break);
            prop_assert_eq!(
                advanced.end_time,
                now + Duration::minutes(break_min as i64)
            );
        }
    }
}
