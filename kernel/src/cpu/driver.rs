/*!
 * Execution Driver
 * Advances processes clock by clock and keeps cumulative logical time
 */

use super::types::{CpuError, CpuResult, CpuStats};
use crate::core::limits::CPU_REQUESTER_LABEL;
use crate::core::types::Clock;
use crate::process::{Caller, Process, ProcessResult, Runnable};
use tracing::{debug, instrument, warn};

/// Simplified CPU
///
/// Only time spent running a process is counted. The driver moves processes
/// into `Running`/`Terminated` through their own `execute`; returning a
/// partially run process to the ready queue is the scheduler's job.
#[derive(Debug)]
pub struct Cpu {
    caller: Caller,
    stats: CpuStats,
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            caller: Caller::new(CPU_REQUESTER_LABEL),
            stats: CpuStats::default(),
        }
    }

    /// Run `process` for one clock
    ///
    /// The first run of a process stamps its start time with the current
    /// cumulative time.
    ///
    /// # Errors
    /// `CpuError::ProcessFinished` if the process is already terminated.
    #[instrument(level = "debug", skip_all, fields(pid = %process.pid(), at = self.stats.run_time))]
    pub fn run<T>(&mut self, process: &mut Process<T>, args: &[T]) -> CpuResult<Option<T>> {
        self.admit(process)?;

        let before = process.used();
        let outcome = process.execute(args);
        self.account(process, before);

        Ok(outcome?)
    }

    /// Run `process` for up to `clocks` clocks through the request protocol,
    /// advancing time by the clocks actually consumed
    #[instrument(level = "debug", skip_all, fields(pid = %process.pid(), clocks = clocks, at = self.stats.run_time))]
    pub fn run_for<T>(
        &mut self,
        process: &mut Process<T>,
        args: &[T],
        clocks: Clock,
    ) -> CpuResult<Option<T>> {
        self.admit(process)?;

        let before = process.used();
        let outcome: ProcessResult<Option<T>> = process.receive_request(&self.caller, args, clocks);
        self.account(process, before);

        Ok(outcome?)
    }

    /// Cumulative logical time
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> Clock {
        self.stats.run_time
    }

    #[inline]
    #[must_use]
    pub const fn stats(&self) -> CpuStats {
        self.stats
    }

    fn admit<T>(&mut self, process: &mut Process<T>) -> CpuResult<()> {
        if process.mark_started(self.stats.run_time) {
            debug!(pid = %process.pid(), start = self.stats.run_time, "Process started");
        }
        if process.is_terminated() {
            self.stats.rejected += 1;
            warn!(pid = %process.pid(), "Refusing to run finished process");
            return Err(CpuError::ProcessFinished {
                pid: process.pid().clone(),
            });
        }
        Ok(())
    }

    // `used` only grows during a run, so the delta is the clocks consumed,
    // including steps taken before a workload failure
    fn account<T>(&mut self, process: &Process<T>, before: Clock) {
        let consumed = process.used() - before;
        self.stats.run_time += consumed;
        self.stats.steps += consumed;
        if consumed > 0 && process.is_terminated() {
            self.stats.completions += 1;
        }
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
