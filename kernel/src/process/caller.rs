/*!
 * External Caller
 * A requester that is not itself a process
 */

use super::core::traits::Requester;
use crate::core::id::Pid;

/// Issues requests on behalf of code outside the process model, such as a
/// scheduler loop or a test harness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    pid: Pid,
}

impl Caller {
    pub fn new(pid: impl Into<Pid>) -> Self {
        Self { pid: pid.into() }
    }
}

impl<T> Requester<T> for Caller {
    #[inline]
    fn requester_id(&self) -> &Pid {
        &self.pid
    }
}
