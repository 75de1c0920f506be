/*!
 * Process Module
 * Process state machine, workloads and the request protocol
 */

pub mod builder;
pub mod caller;
pub mod control;
pub mod core;
pub mod protocol;
mod validation;
pub mod workload;

// Re-export for convenience
pub use builder::ProcessBuilder;
pub use caller::Caller;
pub use control::Process;
pub use self::core::{ProcessError, ProcessInfo, ProcessResult, ProcessState, Requester, Runnable};
pub use workload::{Workload, WorkloadError, WorkloadResult};
