/*!
 * Reporting Module
 * Instance tables and finished-process statistics
 */

pub mod stats;
pub mod table;

pub use stats::{compute_stats, Report, ReportError, ReportResult, StatRow};
pub use table::{render_instance_table, TextTable};
