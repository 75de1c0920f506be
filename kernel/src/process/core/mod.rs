/*!
 * Process Core Types and Traits
 * Fundamental types and trait definitions for the request protocol
 */

pub mod traits;
pub mod types;

pub use traits::*;
pub use types::*;
