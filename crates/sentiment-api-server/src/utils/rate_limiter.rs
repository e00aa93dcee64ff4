use parking_lot::{Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tracing::debug;

use crate::utils::error::ApiError;

/// Single-slot gate: one accepted request per `min_interval`, shared by all callers.
///
/// Not a sliding window or token bucket. Only the timestamp of the last
/// accepted request is kept.
pub struct RateLimiter {
    min_interval: Duration,
    last_request: Mutex<Option<Instant>>,
}

/// Held between the check and the commit of a request.
///
/// Holding the permit keeps the gate locked, so validation can run between
/// `check` and `record` without another request slipping through.
/// Dropping it without `record` leaves the last timestamp untouched.
pub struct RateLimitPermit<'a> {
    slot: MutexGuard<'a, Option<Instant>>,
    now: Instant,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_request: Mutex::new(None),
        }
    }

    pub fn check(&self) -> Result<RateLimitPermit<'_>, ApiError> {
        self.check_at(Instant::now())
    }

    pub fn check_at(&self, now: Instant) -> Result<RateLimitPermit<'_>, ApiError> {
        let slot = self.last_request.lock();

        if let Some(last) = *slot {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.min_interval {
                let wait = self.min_interval - elapsed;
                debug!("Rejecting request, {:?} since last accepted", elapsed);
                return Err(ApiError::RateLimited { wait });
            }
        }

        Ok(RateLimitPermit { slot, now })
    }

    /// Check and record in one step
    pub fn check_and_update(&self) -> Result<(), ApiError> {
        self.check()?.record();
        Ok(())
    }

    pub fn check_and_update_at(&self, now: Instant) -> Result<(), ApiError> {
        self.check_at(now)?.record();
        Ok(())
    }

    #[cfg(test)]
    pub fn last_request(&self) -> Option<Instant> {
        *self.last_request.lock()
    }
}

impl RateLimitPermit<'_> {
    pub fn record(mut self) {
        *self.slot = Some(self.now);
    }
}
