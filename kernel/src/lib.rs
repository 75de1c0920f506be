/*!
 * Process Simulation Kernel
 * Turn-based CPU process model: request/execute/result protocol and driver
 */

pub mod core;
pub mod cpu;
pub mod instance;
pub mod monitoring;
pub mod process;
pub mod reporting;

// Re-exports
pub use crate::core::{Clock, KernelError, KernelResult, Pid, Priority, SerializableError};
pub use cpu::{Cpu, CpuError, CpuStats};
pub use instance::{load_instance, parse_instance, Instance, InstanceError, ProcessSink};
pub use monitoring::init_tracing;
pub use process::{
    Caller, Process, ProcessBuilder, ProcessError, ProcessInfo, ProcessResult, ProcessState,
    Requester, Runnable, Workload, WorkloadError, WorkloadResult,
};
pub use reporting::{compute_stats, render_instance_table, Report, ReportError, StatRow};
