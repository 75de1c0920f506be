/*!
 * Process Builder
 * Builder pattern for Process construction
 */

use super::control::Process;
use super::core::types::{ProcessResult, ProcessState};
use super::validation::validate_burst;
use super::workload::Workload;
use crate::core::id::Pid;
use crate::core::types::{Clock, Priority};

/// Builder for Process
pub struct ProcessBuilder<T> {
    pid: Pid,
    burst: Clock,
    workload: Option<Workload<T>>,
    priority: Option<Priority>,
    arrival_time: Clock,
}

impl<T> ProcessBuilder<T> {
    pub fn new(pid: impl Into<Pid>) -> Self {
        Self {
            pid: pid.into(),
            burst: 0,
            workload: None,
            priority: None,
            arrival_time: 0,
        }
    }

    /// Total clocks the process needs (required, at least 1)
    pub fn with_burst(mut self, burst: Clock) -> Self {
        self.burst = burst;
        self
    }

    /// Function evaluated when the burst completes
    pub fn with_workload(mut self, workload: Workload<T>) -> Self {
        self.workload = Some(workload);
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_arrival_time(mut self, arrival_time: Clock) -> Self {
        self.arrival_time = arrival_time;
        self
    }

    /// Build the Process in `Ready` state with no progress
    pub fn build(self) -> ProcessResult<Process<T>> {
        validate_burst(&self.pid, self.burst)?;

        Ok(Process {
            pid: self.pid,
            state: ProcessState::Ready,
            burst: self.burst,
            used: 0,
            workload: self.workload,
            priority: self.priority,
            arrival_time: self.arrival_time,
            start_time: None,
            finish_time: None,
        })
    }
}
