/*!
 * Process Traits
 * Request/execute/result protocol between simulated processes
 */

use super::types::{ProcessResult, ProcessState};
use crate::core::id::Pid;
use crate::core::types::Clock;

/// Anything that can ask a process for work and receive its result
///
/// Processes, the CPU driver and external callers (tests, schedulers) all
/// implement this. Requests are plain synchronous calls: the requester holds
/// `&self` while the target is borrowed `&mut`, so a process can never be
/// driven re-entrantly or by two callers at once.
pub trait Requester<T> {
    /// Identity reported in protocol logs
    fn requester_id(&self) -> &Pid;

    /// Ask `target` to advance by up to `clocks` steps using `args`
    ///
    /// Returns the workload's value if the target's burst completed during
    /// this request, `None` otherwise.
    fn send_request<R>(&self, args: &[T], target: &mut R, clocks: Clock) -> ProcessResult<Option<T>>
    where
        R: Runnable<T>,
    {
        target.receive_request(self, args, clocks)
    }

    /// Delivery hook for results; the base protocol hands them back unchanged
    #[inline]
    fn receive_result(&self, result: Option<T>) -> Option<T> {
        result
    }
}

/// A unit of work driven one clock at a time
pub trait Runnable<T> {
    /// Handle a request: consume `min(clocks, burst - used)` steps, then send
    /// the last step's result back to `requester`
    ///
    /// # Errors
    /// `ProcessError::NotReady` if the process is not `Ready`
    fn receive_request<Q>(&mut self, requester: &Q, args: &[T], clocks: Clock) -> ProcessResult<Option<T>>
    where
        Q: Requester<T> + ?Sized;

    /// Advance exactly one clock
    fn execute(&mut self, args: &[T]) -> ProcessResult<Option<T>>;

    /// Return to `Ready` with zero progress
    fn reset(&mut self);

    fn state(&self) -> ProcessState;

    fn used(&self) -> Clock;

    fn burst(&self) -> Clock;

    /// Hand a result to `target`; an extension point for accounting layers
    #[inline]
    fn send_result<Q>(&self, target: &Q, result: Option<T>) -> Option<T>
    where
        Q: Requester<T> + ?Sized,
    {
        target.receive_result(result)
    }
}
