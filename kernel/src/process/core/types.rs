/*!
 * Process Types
 * State machine, errors and snapshots for simulated processes
 */

use crate::core::id::Pid;
use crate::core::serde::is_none;
use crate::core::types::{Clock, Priority};
use crate::process::workload::WorkloadError;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Process operation result
///
/// # Must Use
/// Protocol misuse surfaces here and must not be silently dropped
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Process protocol errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Process {pid} is not ready (state: {state})")]
    #[diagnostic(
        code(process::not_ready),
        help("A terminated process must be reset before it accepts another request.")
    )]
    NotReady { pid: Pid, state: ProcessState },

    #[error("Invalid burst for process {pid}: {burst}")]
    #[diagnostic(
        code(process::invalid_burst),
        help("A process needs at least one clock of work.")
    )]
    InvalidBurst { pid: Pid, burst: Clock },

    #[error("Invalid workload arity: {arity} (max {max})")]
    #[diagnostic(
        code(process::invalid_arity),
        help("Workloads take between one argument and the configured maximum.")
    )]
    InvalidArity { arity: usize, max: usize },

    #[error("Process {pid} expects {expected} arguments, got {actual}")]
    #[diagnostic(
        code(process::arity_mismatch),
        help("Send exactly as many arguments as the target's workload declares.")
    )]
    ArityMismatch {
        pid: Pid,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Workload(#[from] WorkloadError),
}

/// Process state
///
/// `Ready -> Running -> {Ready | Terminated}`; `Terminated` is absorbing until
/// the process is reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Waiting for a request or a driver step
    #[default]
    Ready,
    /// Inside a clock step
    Running,
    /// Burst completed; rejects further clocks until reset
    Terminated,
}

impl ProcessState {
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Terminated => "terminated",
        }
    }
}

impl fmt::Display for ProcessState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Point-in-time view of a process, detached from its workload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessInfo {
    pub pid: Pid,
    pub state: ProcessState,
    pub burst: Clock,
    pub used: Clock,
    pub arrival_time: Clock,
    #[serde(skip_serializing_if = "is_none", default)]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "is_none", default)]
    pub start_time: Option<Clock>,
    #[serde(skip_serializing_if = "is_none", default)]
    pub finish_time: Option<Clock>,
}

impl ProcessInfo {
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

    /// Clocks still needed to complete the current run
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> Clock {
        self.burst.saturating_sub(self.used)
    }
}
