//! Deadline timer that raises a [`StopFlag`] when a time limit expires.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::search::SearchError;
use crate::sync::StopFlag;

/// Calculate the duration from now until a deadline, if the deadline is in the future.
///
/// Returns `None` if the deadline has already passed.
#[inline]
fn duration_until(deadline: Instant) -> Option<Duration> {
    let now = Instant::now();
    if deadline > now {
        Some(deadline - now)
    } else {
        None
    }
}

/// A timer that signals a stop flag when a deadline is reached.
///
/// The timer thread parks until the deadline and can be cancelled early,
/// in which case the flag is left untouched.
pub struct DeadlineTimer {
    handle: Option<JoinHandle<()>>,
    cancelled: Arc<AtomicBool>,
    stop_flag: StopFlag,
}

impl DeadlineTimer {
    /// Create and start a timer that will signal after the given duration.
    ///
    /// Returns `Ok(None)` if the duration is zero (no timer needed), and an
    /// error if the timer thread could not be started.
    pub fn start(duration: Duration, stop_flag: StopFlag) -> io::Result<Option<Self>> {
        if duration.is_zero() {
            return Ok(None);
        }
        Self::start_at(Instant::now().checked_add(duration), stop_flag)
    }

    /// Create and start a timer that will signal at the given deadline.
    ///
    /// Returns `Ok(None)` if the deadline is not set, or has already passed,
    /// in which case the flag is raised immediately.
    pub fn start_at(
        deadline: Option<Instant>,
        stop_flag: StopFlag,
    ) -> io::Result<Option<Self>> {
        let Some(deadline) = deadline else {
            return Ok(None);
        };
        if duration_until(deadline).is_none() {
            stop_flag.stop();
            return Ok(None);
        }

        let cancelled = Arc::new(AtomicBool::new(false));
        let thread_cancelled = Arc::clone(&cancelled);
        let thread_flag = stop_flag.clone();
        let handle = thread::Builder::new()
            .name("queens-deadline".to_string())
            .spawn(move || loop {
                if thread_cancelled.load(Ordering::Acquire) {
                    return;
                }
                match duration_until(deadline) {
                    Some(remaining) => thread::park_timeout(remaining),
                    None => {
                        debug!("deadline reached, raising stop flag");
                        thread_flag.stop();
                        return;
                    }
                }
            })
            .map_err(|err| {
                warn!("failed to start deadline timer: {err}");
                err
            })?;

        Ok(Some(DeadlineTimer {
            handle: Some(handle),
            cancelled,
            stop_flag,
        }))
    }

    /// Cancel the timer without triggering the stop flag.
    pub fn cancel(mut self) {
        self.shutdown();
    }

    /// Check if the timer has triggered.
    #[must_use]
    pub fn is_triggered(&self) -> bool {
        self.stop_flag.is_stopped()
    }

    fn shutdown(&mut self) {
        self.cancelled.store(true, Ordering::Release);
        if let Some(handle) = self.handle.take() {
            handle.thread().unpark();
            let _ = handle.join();
        }
    }
}

impl Drop for DeadlineTimer {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Arm a timer for an optional time limit. A zero limit raises the flag at
/// once; a timer thread that cannot be started fails the search instead of
/// silently running without a limit.
pub fn arm(
    limit: Option<Duration>,
    stop_flag: &StopFlag,
) -> Result<Option<DeadlineTimer>, SearchError> {
    match limit {
        None => Ok(None),
        Some(limit) if limit.is_zero() => {
            stop_flag.stop();
            Ok(None)
        }
        Some(limit) => DeadlineTimer::start(limit, stop_flag.clone())
            .map_err(|err| SearchError::timer_spawn(&err)),
    }
}
