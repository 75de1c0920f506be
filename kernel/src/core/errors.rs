/*!
 * Error Types
 * Unified error handling with thiserror, miette, and serde support
 */

use super::data_structures::InlineString;
use crate::cpu::CpuError;
use crate::instance::InstanceError;
use crate::process::{ProcessError, WorkloadError};
use crate::reporting::ReportError;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified kernel error type with miette diagnostics
#[derive(Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum KernelError {
    #[error("Process error: {0}")]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error("CPU error: {0}")]
    #[diagnostic(transparent)]
    Cpu(#[from] CpuError),

    #[error("Instance error: {0}")]
    #[diagnostic(transparent)]
    Instance(#[from] InstanceError),

    #[error("Report error: {0}")]
    #[diagnostic(transparent)]
    Report(#[from] ReportError),
}

impl From<WorkloadError> for KernelError {
    fn from(err: WorkloadError) -> Self {
        KernelError::Process(err.into())
    }
}

/// Serializable error representation for JSON output
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct SerializableError {
    pub error_type: InlineString,
    pub message: InlineString,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<InlineString>,
}

impl From<&KernelError> for SerializableError {
    fn from(err: &KernelError) -> Self {
        let error_type = match err {
            KernelError::Process(_) => "process_error",
            KernelError::Cpu(_) => "cpu_error",
            KernelError::Instance(_) => "instance_error",
            KernelError::Report(_) => "report_error",
        };
        SerializableError {
            error_type: error_type.into(),
            message: err.to_string().into(),
            code: err.code().map(|c| c.to_string().into()),
        }
    }
}

impl From<KernelError> for SerializableError {
    fn from(err: KernelError) -> Self {
        SerializableError::from(&err)
    }
}
