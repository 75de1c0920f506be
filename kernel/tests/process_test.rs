/*!
 * Process Protocol Tests
 * Request/execute/result scenarios between communicating processes
 */

mod common;

use common::{div_process, parent, prod_process, sum_process};
use pretty_assertions::assert_eq;
use procsim_kernel::{Caller, ProcessError, ProcessState, Requester, Runnable, WorkloadError};

#[test]
fn test_sum_completes_within_budget() {
    let parent = parent();
    let mut sum = sum_process("sum");

    let result = parent.send_request(&[1, 3], &mut sum, 5).unwrap();

    assert_eq!(result, Some(4));
    assert_eq!(sum.used(), sum.burst());
    assert_eq!(sum.used(), 5);
    assert_eq!(sum.state(), ProcessState::Terminated);
}

#[test]
fn test_prod_completes_over_two_requests() {
    let parent = parent();
    let mut prod = prod_process("prod");

    let result = parent.send_request(&[4, 2], &mut prod, 5).unwrap();
    assert_eq!(result, None);
    assert_eq!(prod.used(), 5);
    assert_eq!(prod.burst() - prod.used(), 3);
    assert_eq!(prod.state(), ProcessState::Ready);

    let result = parent.send_request(&[4, 2], &mut prod, 3).unwrap();
    assert_eq!(result, Some(8));
    assert_eq!(prod.state(), ProcessState::Terminated);
}

#[test]
fn test_div_then_reset() {
    let parent = parent();
    let mut div = div_process("div");

    let result = parent.send_request(&[3, 1], &mut div, 8).unwrap();
    assert_eq!(result, Some(3));

    div.reset();
    assert_eq!(div.used(), 0);
    assert_eq!(div.state(), ProcessState::Ready);
}

#[test]
fn test_composite_expression() {
    // 20/4 + (4*3) + 1
    let parent = parent();
    let mut div = div_process("div");
    let mut prod = prod_process("prod");
    let mut sum = sum_process("sum");

    let quotient = parent.send_request(&[20, 4], &mut div, 8).unwrap().unwrap();
    let product = parent.send_request(&[4, 3], &mut prod, 8).unwrap().unwrap();
    let partial = parent
        .send_request(&[quotient, product], &mut sum, 5)
        .unwrap()
        .unwrap();
    assert_eq!(partial, 17);

    // The sum process just terminated; reusing it needs a reset
    let err = parent.send_request(&[partial, 1], &mut sum, 5).unwrap_err();
    assert!(matches!(
        err,
        ProcessError::NotReady {
            state: ProcessState::Terminated,
            ..
        }
    ));

    sum.reset();
    let total = parent.send_request(&[partial, 1], &mut sum, 5).unwrap();
    assert_eq!(total, Some(18));
}

#[test]
fn test_processes_chain_requests() {
    // A process with a workload can itself be the requester
    let div = div_process("div");
    let mut sum = sum_process("sum");

    assert_eq!(div.send_request(&[2, 2], &mut sum, 5).unwrap(), Some(4));
    assert_eq!(div.state(), ProcessState::Ready);
    assert_eq!(div.used(), 0);
}

#[test]
fn test_excess_clocks_are_discarded() {
    let caller = Caller::new("harness");
    let mut prod = prod_process("prod");

    caller.send_request(&[1, 1], &mut prod, 6).unwrap();
    let result = caller.send_request(&[5, 5], &mut prod, 100).unwrap();

    assert_eq!(result, Some(25));
    assert_eq!(prod.used(), 8);
}

#[test]
fn test_zero_clocks_leave_process_untouched() {
    let caller = Caller::new("harness");
    let mut sum = sum_process("sum");
    caller.send_request(&[1, 1], &mut sum, 2).unwrap();

    assert_eq!(caller.send_request(&[1, 1], &mut sum, 0).unwrap(), None);
    assert_eq!(sum.used(), 2);
    assert_eq!(sum.state(), ProcessState::Ready);
}

#[test]
fn test_completion_uses_arguments_of_final_request() {
    let caller = Caller::new("harness");
    let mut sum = sum_process("sum");

    caller.send_request(&[100, 100], &mut sum, 4).unwrap();
    assert_eq!(caller.send_request(&[1, 2], &mut sum, 1).unwrap(), Some(3));
}

#[test]
fn test_workload_failure_reaches_requester() {
    let parent = parent();
    let mut div = div_process("div");

    let err = parent.send_request(&[1, 0], &mut div, 8).unwrap_err();

    assert_eq!(
        err,
        ProcessError::Workload(WorkloadError::undefined("division by zero"))
    );
    assert_eq!(div.state(), ProcessState::Terminated);
}

#[test]
fn test_receive_result_is_pass_through() {
    let parent = parent();
    let sum = sum_process("sum");

    assert_eq!(Requester::<i64>::receive_result(&parent, Some(9)), Some(9));
    assert_eq!(sum.send_result(&parent, Some(9)), Some(9));
    assert_eq!(sum.send_result(&parent, None), None);
}
