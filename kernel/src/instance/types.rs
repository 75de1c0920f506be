/*!
 * Instance Types
 * Loaded process instances and loader errors
 */

use crate::core::data_structures::InlineString;
use crate::core::id::Pid;
use crate::process::{Process, ProcessError};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type InstanceResult<T> = Result<T, InstanceError>;

/// Instance loading errors; row errors carry their 1-based line number
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum InstanceError {
    #[error("Cannot read instance {path}: {message}")]
    #[diagnostic(code(instance::io), help("Check that the file exists and is readable."))]
    Io {
        path: InlineString,
        message: InlineString,
    },

    #[error("Instance has no header row")]
    #[diagnostic(
        code(instance::missing_header),
        help("The first row names the columns: id, burst, arrival and optionally priority.")
    )]
    MissingHeader,

    #[error("Header has {columns} columns, expected {min} or {max}")]
    #[diagnostic(code(instance::invalid_header))]
    InvalidHeader {
        columns: usize,
        min: usize,
        max: usize,
    },

    #[error("Line {line}: {reason}")]
    #[diagnostic(code(instance::malformed_row))]
    MalformedRow { line: usize, reason: InlineString },

    #[error("Line {line}: duplicate process id {pid}")]
    #[diagnostic(
        code(instance::duplicate_pid),
        help("Every process in an instance needs a unique id.")
    )]
    DuplicatePid { line: usize, pid: Pid },

    #[error("Line {line}: {source}")]
    #[diagnostic(code(instance::invalid_process))]
    InvalidProcess {
        line: usize,
        #[source]
        source: ProcessError,
    },
}

/// Receives processes handed over by the loader
///
/// Schedulers implement this; a plain `Vec` does for tests and tools.
pub trait ProcessSink<T> {
    fn add_process(&mut self, process: Process<T>);
}

impl<T> ProcessSink<T> for Vec<Process<T>> {
    fn add_process(&mut self, process: Process<T>) {
        self.push(process);
    }
}

/// A parsed instance: column headers plus processes in file order
#[derive(Debug)]
pub struct Instance<T = i64> {
    pub(super) headers: Vec<InlineString>,
    pub(super) processes: Vec<Process<T>>,
}

impl<T> Instance<T> {
    #[inline]
    pub fn headers(&self) -> &[InlineString] {
        &self.headers
    }

    #[inline]
    pub fn processes(&self) -> &[Process<T>] {
        &self.processes
    }

    /// Whether the instance carries a priority column
    #[inline]
    #[must_use]
    pub fn has_priorities(&self) -> bool {
        self.headers.len() == crate::core::limits::MAX_INSTANCE_COLUMNS
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Hand every process to `sink` in file order, returning how many moved
    pub fn register_into<S>(self, sink: &mut S) -> usize
    where
        S: ProcessSink<T> + ?Sized,
    {
        let count = self.processes.len();
        for process in self.processes {
            sink.add_process(process);
        }
        count
    }
}
