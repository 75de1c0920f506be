/*!
 * CPU Module
 * Execution driver for simulated processes
 */

pub mod driver;
pub mod types;

pub use driver::Cpu;
pub use types::{CpuError, CpuResult, CpuStats};
