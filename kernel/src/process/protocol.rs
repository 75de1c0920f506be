/*!
 * Request Protocol
 * Request -> execute -> result handling for processes
 */

use super::control::Process;
use super::core::traits::{Requester, Runnable};
use super::core::types::{ProcessError, ProcessResult, ProcessState};
use super::validation::validate_args;
use crate::core::id::Pid;
use crate::core::types::Clock;
use tracing::{debug, trace, warn};

impl<T> Process<T> {
    fn not_ready(&self) -> ProcessError {
        ProcessError::NotReady {
            pid: self.pid.clone(),
            state: self.state,
        }
    }

    fn check_args(&self, args: &[T]) -> ProcessResult<()> {
        match &self.workload {
            Some(workload) => validate_args(&self.pid, workload.arity(), args.len()),
            None => Ok(()),
        }
    }
}

impl<T> Requester<T> for Process<T> {
    #[inline]
    fn requester_id(&self) -> &Pid {
        &self.pid
    }
}

impl<T> Runnable<T> for Process<T> {
    fn receive_request<Q>(&mut self, requester: &Q, args: &[T], clocks: Clock) -> ProcessResult<Option<T>>
    where
        Q: Requester<T> + ?Sized,
    {
        if self.state != ProcessState::Ready {
            warn!(
                pid = %self.pid,
                requester = %requester.requester_id(),
                state = %self.state,
                "Rejected request to process that is not ready"
            );
            return Err(self.not_ready());
        }
        self.check_args(args)?;

        // Clocks beyond the remaining burst are discarded
        let steps = clocks.min(self.remaining());
        debug!(
            pid = %self.pid,
            requester = %requester.requester_id(),
            clocks,
            steps,
            used = self.used,
            burst = self.burst,
            "Request accepted"
        );

        let mut result = None;
        for _ in 0..steps {
            result = self.execute(args)?;
        }

        Ok(self.send_result(requester, result))
    }

    fn execute(&mut self, args: &[T]) -> ProcessResult<Option<T>> {
        if self.state == ProcessState::Terminated {
            return Err(self.not_ready());
        }
        self.check_args(args)?;

        self.state = ProcessState::Running;
        self.used += 1;
        trace!(pid = %self.pid, used = self.used, burst = self.burst, "Clock step");

        if self.used < self.burst {
            self.state = ProcessState::Ready;
            return Ok(None);
        }

        // `used` stays at `burst` until reset so completion remains observable
        self.state = ProcessState::Terminated;
        debug!(pid = %self.pid, burst = self.burst, "Burst completed");

        match &self.workload {
            Some(workload) => workload.invoke(args).map(Some),
            None => Ok(None),
        }
    }

    fn reset(&mut self) {
        debug!(pid = %self.pid, previous = %self.state, used = self.used, "Process reset");
        self.used = 0;
        self.state = ProcessState::Ready;
    }

    #[inline]
    fn state(&self) -> ProcessState {
        self.state
    }

    #[inline]
    fn used(&self) -> Clock {
        self.used
    }

    #[inline]
    fn burst(&self) -> Clock {
        self.burst
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::workload::{Workload, WorkloadError};

    fn sum(burst: Clock) -> Process<i64> {
        let workload = Workload::new("sum", 2, |args: &[i64]| Ok(args[0] + args[1])).unwrap();
        Process::builder("sum")
            .with_burst(burst)
            .with_workload(workload)
            .build()
            .unwrap()
    }

    #[test]
    fn test_partial_steps_return_ready() {
        let mut p = sum(3);
        assert_eq!(p.execute(&[1, 2]).unwrap(), None);
        assert_eq!(p.state(), ProcessState::Ready);
        assert_eq!(p.used(), 1);
    }

    #[test]
    fn test_final_step_invokes_workload() {
        let mut p = sum(2);
        p.execute(&[1, 2]).unwrap();
        assert_eq!(p.execute(&[10, 5]).unwrap(), Some(15));
        assert_eq!(p.state(), ProcessState::Terminated);
        assert_eq!(p.used(), 2);
    }

    #[test]
    fn test_execute_after_termination_fails() {
        let mut p = sum(1);
        p.execute(&[0, 0]).unwrap();
        let err = p.execute(&[0, 0]).unwrap_err();
        assert!(matches!(err, ProcessError::NotReady { state: ProcessState::Terminated, .. }));
        assert_eq!(p.used(), 1);
    }

    #[test]
    fn test_zero_clocks_is_a_no_op() {
        let parent = sum(1);
        let mut p = sum(4);
        assert_eq!(parent.send_request(&[1, 1], &mut p, 0).unwrap(), None);
        assert_eq!(p.used(), 0);
        assert_eq!(p.state(), ProcessState::Ready);
    }

    #[test]
    fn test_wrong_argument_count_consumes_nothing() {
        let parent = sum(1);
        let mut p = sum(4);
        let err = parent.send_request(&[1], &mut p, 4).unwrap_err();
        assert!(matches!(err, ProcessError::ArityMismatch { expected: 2, actual: 1, .. }));
        assert_eq!(p.used(), 0);
    }

    #[test]
    fn test_workload_error_leaves_process_terminated() {
        let failing = Workload::new("fail", 1, |_: &[i64]| Err(WorkloadError::undefined("x"))).unwrap();
        let mut p = Process::builder(1u32)
            .with_burst(2)
            .with_workload(failing)
            .build()
            .unwrap();
        let parent = sum(1);

        let err = parent.send_request(&[7], &mut p, 5).unwrap_err();
        assert_eq!(err, ProcessError::Workload(WorkloadError::undefined("x")));
        assert_eq!(p.state(), ProcessState::Terminated);
        assert_eq!(p.used(), 2);
    }

    #[test]
    fn test_reset_restores_ready() {
        let mut p = sum(1);
        p.execute(&[2, 2]).unwrap();
        p.reset();
        assert_eq!(p.state(), ProcessState::Ready);
        assert_eq!(p.used(), 0);
        assert_eq!(p.burst(), 1);
    }
}
