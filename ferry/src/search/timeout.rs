//! Timeout tracking for search
//!
//! The solver checks the clock between iterations, never inside a move, so a
//! timed-out search stops on a consistent frontier.

use crate::{FerryError, ResourceLimits};
use std::time::Instant;

pub struct TimeoutTracker {
    start_time: Instant,
}

impl TimeoutTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start_time.elapsed().as_millis() as u64
    }

    /// Returns an error if elapsed time exceeds `max_search_time_ms`
    pub fn check_timeout(&self, limits: &ResourceLimits) -> Result<(), FerryError> {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > limits.max_search_time_ms {
            return Err(FerryError::ResourceLimitExceeded {
                limit_name: "max_search_time_ms".to_string(),
                limit_value: limits.max_search_time_ms.to_string(),
                actual_value: elapsed_ms.to_string(),
                suggestion: format!(
                    "Search took {}ms, exceeding the limit of {}ms. Reduce the number of passengers or increase the timeout.",
                    elapsed_ms, limits.max_search_time_ms
                ),
            });
        }
        Ok(())
    }
}

impl Default for TimeoutTracker {
    fn default() -> Self {
        Self::new()
    }
}
