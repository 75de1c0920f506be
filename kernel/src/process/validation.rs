/*!
 * Process Validation
 * Construction-time and request-time contract checks
 */

use super::core::types::{ProcessError, ProcessResult};
use crate::core::id::Pid;
use crate::core::limits::MAX_WORKLOAD_ARITY;
use crate::core::types::Clock;

/// A workload must take at least one argument and no more than the limit
pub(super) fn validate_arity(arity: usize) -> ProcessResult<()> {
    if arity == 0 || arity > MAX_WORKLOAD_ARITY {
        return Err(ProcessError::InvalidArity {
            arity,
            max: MAX_WORKLOAD_ARITY,
        });
    }
    Ok(())
}

/// A burst of zero would complete before the first clock
pub(super) fn validate_burst(pid: &Pid, burst: Clock) -> ProcessResult<()> {
    if burst == 0 {
        return Err(ProcessError::InvalidBurst {
            pid: pid.clone(),
            burst,
        });
    }
    Ok(())
}

/// Requests must carry exactly the argument count the workload declared
pub(super) fn validate_args(pid: &Pid, expected: usize, actual: usize) -> ProcessResult<()> {
    if expected != actual {
        return Err(ProcessError::ArityMismatch {
            pid: pid.clone(),
            expected,
            actual,
        });
    }
    Ok(())
}
