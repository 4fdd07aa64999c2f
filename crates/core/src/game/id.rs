use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;

use crate::types::GameId;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

/// Next process-unique game id.
///
/// Ids follow the wall clock in milliseconds and never repeat within a
/// process: each id is `max(now_ms, previous + 1)`.
pub fn next_game_id() -> GameId {
    let now = Utc::now().timestamp_millis();
    let mut last = LAST_ID.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_ID.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}
