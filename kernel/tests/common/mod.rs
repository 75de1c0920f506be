/*!
 * Shared test workloads
 */

#![allow(dead_code)]

use procsim_kernel::{Clock, Process, Workload, WorkloadError};

pub fn sum() -> Workload<i64> {
    Workload::new("sum", 2, |args: &[i64]| {
        args[0]
            .checked_add(args[1])
            .ok_or_else(|| WorkloadError::overflow("sum"))
    })
    .unwrap()
}

pub fn prod() -> Workload<i64> {
    Workload::new("prod", 2, |args: &[i64]| {
        args[0]
            .checked_mul(args[1])
            .ok_or_else(|| WorkloadError::overflow("prod"))
    })
    .unwrap()
}

pub fn div() -> Workload<i64> {
    Workload::new("div", 2, |args: &[i64]| {
        if args[1] == 0 {
            return Err(WorkloadError::undefined("division by zero"));
        }
        Ok(args[0] / args[1])
    })
    .unwrap()
}

/// Weighted workloads used across the scenarios: sum takes 5 clocks,
/// product and division take 8
pub fn sum_process(pid: &str) -> Process<i64> {
    with_workload(pid, 5, sum())
}

pub fn prod_process(pid: &str) -> Process<i64> {
    with_workload(pid, 8, prod())
}

pub fn div_process(pid: &str) -> Process<i64> {
    with_workload(pid, 8, div())
}

pub fn with_workload(pid: &str, burst: Clock, workload: Workload<i64>) -> Process<i64> {
    Process::builder(pid)
        .with_burst(burst)
        .with_workload(workload)
        .build()
        .unwrap()
}

/// A process used only to issue requests
pub fn parent() -> Process<i64> {
    Process::builder("parent").with_burst(1).build().unwrap()
}
