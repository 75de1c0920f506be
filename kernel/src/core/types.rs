/*!
 * Core Types
 * Common types used across the kernel
 */

/// Logical clock value; one unit is one step of simulated execution
pub type Clock = u64;

/// Priority level (0-255), carried for scheduling policies built on top
pub type Priority = u8;

/// Common result type for kernel operations
pub type KernelResult<T> = Result<T, super::errors::KernelError>;
