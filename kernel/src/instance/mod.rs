/*!
 * Instance Module
 * Loading process instances and handing them to a scheduler
 */

pub mod loader;
pub mod types;

pub use loader::{load_instance, parse_instance};
pub use types::{Instance, InstanceError, InstanceResult, ProcessSink};
