/*!
 * Process Control Block
 * Identity, progress and timing bookkeeping for one simulated process
 */

use super::builder::ProcessBuilder;
use super::core::types::{ProcessInfo, ProcessState};
use super::workload::Workload;
use crate::core::id::Pid;
use crate::core::types::{Clock, Priority};
use std::fmt;

/// A stateful unit of work
///
/// Created `Ready` with no progress. Only the request protocol, the driver
/// and `reset` change `state` and `used`; `pid`, `burst` and the workload are
/// fixed at construction.
pub struct Process<T = i64> {
    pub(super) pid: Pid,
    pub(super) state: ProcessState,
    pub(super) burst: Clock,
    pub(super) used: Clock,
    pub(super) workload: Option<Workload<T>>,
    pub(super) priority: Option<Priority>,
    pub(super) arrival_time: Clock,
    pub(super) start_time: Option<Clock>,
    pub(super) finish_time: Option<Clock>,
}

impl<T> Process<T> {
    /// Start building a process with the given id
    #[inline]
    pub fn builder(pid: impl Into<Pid>) -> ProcessBuilder<T> {
        ProcessBuilder::new(pid)
    }

    #[inline(always)]
    #[must_use]
    pub fn pid(&self) -> &Pid {
        &self.pid
    }

    #[inline]
    #[must_use]
    pub fn workload(&self) -> Option<&Workload<T>> {
        self.workload.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    #[inline]
    #[must_use]
    pub const fn arrival_time(&self) -> Clock {
        self.arrival_time
    }

    #[inline]
    #[must_use]
    pub const fn start_time(&self) -> Option<Clock> {
        self.start_time
    }

    #[inline]
    #[must_use]
    pub const fn finish_time(&self) -> Option<Clock> {
        self.finish_time
    }

    /// Clocks still needed before the workload runs
    #[inline(always)]
    #[must_use]
    pub const fn remaining(&self) -> Clock {
        self.burst - self.used
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self.state, ProcessState::Ready)
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_terminated(&self) -> bool {
        matches!(self.state, ProcessState::Terminated)
    }

    /// Stamp the first execution time. Set-once: later calls are ignored.
    ///
    /// Returns `true` if this call recorded the stamp.
    pub fn mark_started(&mut self, at: Clock) -> bool {
        if self.start_time.is_some() {
            return false;
        }
        self.start_time = Some(at);
        true
    }

    /// Record completion time; assigned by whoever schedules the process
    pub fn set_finish_time(&mut self, at: Clock) {
        self.finish_time = Some(at);
    }

    /// Snapshot for reporting and serialization
    #[must_use]
    pub fn info(&self) -> ProcessInfo {
        ProcessInfo {
            pid: self.pid.clone(),
            state: self.state,
            burst: self.burst,
            used: self.used,
            arrival_time: self.arrival_time,
            priority: self.priority,
            start_time: self.start_time,
            finish_time: self.finish_time,
        }
    }
}

impl<T> fmt::Debug for Process<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Process")
            .field("pid", &self.pid)
            .field("state", &self.state)
            .field("burst", &self.burst)
            .field("used", &self.used)
            .field("workload", &self.workload)
            .field("priority", &self.priority)
            .field("arrival_time", &self.arrival_time)
            .field("start_time", &self.start_time)
            .field("finish_time", &self.finish_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_time_is_set_once() {
        let mut p = Process::<i64>::builder("A").with_burst(3).build().unwrap();
        assert_eq!(p.start_time(), None);
        assert!(p.mark_started(4));
        assert!(!p.mark_started(9));
        assert_eq!(p.start_time(), Some(4));
    }

    #[test]
    fn test_info_reflects_fields() {
        let mut p = Process::<i64>::builder("B")
            .with_burst(6)
            .with_arrival_time(2)
            .with_priority(3)
            .build()
            .unwrap();
        p.set_finish_time(11);

        let info = p.info();
        assert_eq!(info.pid.as_str(), "B");
        assert_eq!(info.burst, 6);
        assert_eq!(info.arrival_time, 2);
        assert_eq!(info.priority, Some(3));
        assert_eq!(info.finish_time, Some(11));
        assert!(info.is_ready());
    }
}
