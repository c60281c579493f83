//! Time-gated self-update
//!
//! Before any command runs, wrench decides whether its own update check is
//! due. The decision is a pure function of the persisted timestamp, the
//! configured interval, and the disable marker; all side effects (state
//! file I/O, child processes, the relaunch) live in [`relaunch`].

pub mod relaunch;

use std::path::Path;

use anyhow::{Context, Result};

use crate::utils::paths;

const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Persisted update-check state.
///
/// Stored as a single base-10 integer (epoch milliseconds) in the
/// `last-update-check` file. Anything unreadable or unparsable is treated
/// as "never checked" so a corrupt file forces a check instead of a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateState {
    pub last_check_epoch_ms: i64,
}

impl UpdateState {
    /// Load the state from the wrench home.
    pub fn load(home: &Path) -> Self {
        let last_check_epoch_ms = std::fs::read_to_string(home.join(paths::UPDATE_STATE_FILE))
            .ok()
            .and_then(|content| content.trim().parse::<i64>().ok())
            .filter(|ms| *ms >= 0)
            .unwrap_or(0);
        Self {
            last_check_epoch_ms,
        }
    }

    /// Overwrite the persisted state with `now_ms`.
    pub fn store(home: &Path, now_ms: i64) -> Result<()> {
        let path = home.join(paths::UPDATE_STATE_FILE);
        std::fs::write(&path, format!("{}\n", now_ms))
            .with_context(|| format!("Failed to write update state: {}", path.display()))
    }
}

/// Decide whether an update check is due.
///
/// Pure: no clock reads, no file reads, no side effects. The disable flag
/// short-circuits everything, including the first-run case. A clock that
/// moved backwards (`now_ms < last`) simply delays the next check.
pub fn should_check(now_ms: i64, last_check_epoch_ms: i64, interval_hours: u64, disabled: bool) -> bool {
    if disabled {
        return false;
    }
    now_ms - last_check_epoch_ms >= interval_hours as i64 * MILLIS_PER_HOUR
}

/// Existence-only check of the disable marker; content is irrelevant.
pub fn updates_disabled(home: &Path) -> bool {
    home.join(paths::DISABLE_UPDATES_FILE).exists()
}

/// Current time in epoch milliseconds.
pub fn now_epoch_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = MILLIS_PER_HOUR;

    #[test]
    fn test_due_exactly_at_interval_boundary() {
        assert!(should_check(4 * HOUR, 0, 4, false));
        assert!(!should_check(4 * HOUR - 1, 0, 4, false));
        assert!(should_check(4 * HOUR + 1, 0, 4, false));
    }

    #[test]
    fn test_first_run_forces_check() {
        // Missing state file loads as 0, and any now >= interval is due.
        assert!(should_check(5 * HOUR, 0, 4, false));
    }

    #[test]
    fn test_recent_check_not_due() {
        let now = 100 * HOUR;
        assert!(!should_check(now, now - 1000, 4, false));
    }

    #[test]
    fn test_disable_flag_wins_over_everything() {
        assert!(!should_check(1_000 * HOUR, 0, 4, true));
        assert!(!should_check(0, 0, 0, true));
    }

    #[test]
    fn test_backwards_clock_delays_not_crashes() {
        // now is before the recorded check; not due, no panic.
        assert!(!should_check(HOUR, 10 * HOUR, 4, false));
    }

    #[test]
    fn test_pure_and_idempotent() {
        let first = should_check(9 * HOUR, HOUR, 4, false);
        let second = should_check(9 * HOUR, HOUR, 4, false);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn test_state_load_missing_file_is_zero() {
        let tmp = tempfile::tempdir().unwrap();
        assert_eq!(UpdateState::load(tmp.path()).last_check_epoch_ms, 0);
    }

    #[test]
    fn test_state_load_garbage_is_zero() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(paths::UPDATE_STATE_FILE), "not-a-number").unwrap();
        assert_eq!(UpdateState::load(tmp.path()).last_check_epoch_ms, 0);
    }

    #[test]
    fn test_state_load_negative_is_zero() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(paths::UPDATE_STATE_FILE), "-5\n").unwrap();
        assert_eq!(UpdateState::load(tmp.path()).last_check_epoch_ms, 0);
    }

    #[test]
    fn test_state_store_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        UpdateState::store(tmp.path(), 42).unwrap();
        UpdateState::store(tmp.path(), 7_000).unwrap();
        assert_eq!(UpdateState::load(tmp.path()).last_check_epoch_ms, 7_000);
    }

    #[test]
    fn test_disable_marker_is_existence_only() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(!updates_disabled(tmp.path()));
        std::fs::write(tmp.path().join(paths::DISABLE_UPDATES_FILE), "").unwrap();
        assert!(updates_disabled(tmp.path()));
    }
}
