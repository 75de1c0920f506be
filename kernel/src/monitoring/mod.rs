/*!
 * Monitoring Module
 * Logging setup
 */

pub mod tracer;

pub use tracer::{init_tracing, init_tracing_with, json_requested, TRACE_JSON_ENV};
