/*!
 * Workloads
 * The unit of work a process computes once its burst completes
 */

use super::core::types::{ProcessError, ProcessResult};
use super::validation::validate_arity;
use crate::core::data_structures::InlineString;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Failure raised by a workload function itself
///
/// The process protocol never catches these: they reach the original
/// requester exactly as the workload produced them.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum WorkloadError {
    #[error("Undefined operation: {0}")]
    #[diagnostic(code(workload::undefined))]
    Undefined(InlineString),

    #[error("Arithmetic overflow in {0}")]
    #[diagnostic(code(workload::overflow))]
    Overflow(InlineString),

    #[error("Workload failed: {0}")]
    #[diagnostic(code(workload::failed))]
    Failed(InlineString),
}

impl WorkloadError {
    pub fn undefined(reason: impl Into<InlineString>) -> Self {
        Self::Undefined(reason.into())
    }

    pub fn overflow(operation: impl Into<InlineString>) -> Self {
        Self::Overflow(operation.into())
    }

    pub fn failed(reason: impl Into<InlineString>) -> Self {
        Self::Failed(reason.into())
    }
}

pub type WorkloadResult<T> = Result<T, WorkloadError>;

type WorkloadFn<T> = dyn Fn(&[T]) -> WorkloadResult<T> + Send + Sync;

/// A pure function of fixed arity stored on a process
///
/// Cloning shares the underlying closure, so the same workload can back
/// several processes.
pub struct Workload<T> {
    name: InlineString,
    arity: usize,
    func: Arc<WorkloadFn<T>>,
}

impl<T> Workload<T> {
    /// Wrap `func`, declaring how many arguments every request must carry
    pub fn new<F>(name: impl Into<InlineString>, arity: usize, func: F) -> ProcessResult<Self>
    where
        F: Fn(&[T]) -> WorkloadResult<T> + Send + Sync + 'static,
    {
        validate_arity(arity)?;
        Ok(Self {
            name: name.into(),
            arity,
            func: Arc::new(func),
        })
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[inline(always)]
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Evaluate the function; callers have already checked the argument count
    pub(crate) fn invoke(&self, args: &[T]) -> ProcessResult<T> {
        (self.func)(args).map_err(ProcessError::from)
    }
}

impl<T> Clone for Workload<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            arity: self.arity,
            func: Arc::clone(&self.func),
        }
    }
}

impl<T> fmt::Debug for Workload<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workload")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}
