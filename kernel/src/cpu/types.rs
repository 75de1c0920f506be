/*!
 * CPU Types
 * Driver errors and statistics
 */

use crate::core::id::Pid;
use crate::core::serde::is_zero_u64;
use crate::core::types::Clock;
use crate::process::ProcessError;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type CpuResult<T> = Result<T, CpuError>;

/// Driver-level errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum CpuError {
    #[error("Process {pid} has already finished its burst")]
    #[diagnostic(
        code(cpu::process_finished),
        help("The scheduler must detect completion and reset the process before running it again.")
    )]
    ProcessFinished { pid: Pid },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),
}

/// Driver statistics snapshot
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CpuStats {
    /// Cumulative logical time
    pub run_time: Clock,
    /// Clock steps delivered to processes
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub steps: u64,
    /// Bursts that completed under this driver
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub completions: u64,
    /// Runs refused because the process had already finished
    #[serde(skip_serializing_if = "is_zero_u64", default)]
    pub rejected: u64,
}
