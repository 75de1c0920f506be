/*!
 * Kernel Limits
 * Compile-time bounds shared by the process model, the loader and reporting
 */

/// Largest argument tuple a workload may declare
pub const MAX_WORKLOAD_ARITY: usize = 16;

/// Instance files carry id, burst and arrival columns
pub const MIN_INSTANCE_COLUMNS: usize = 3;

/// ...plus an optional priority column
pub const MAX_INSTANCE_COLUMNS: usize = 4;

/// Column headers of the finished-process statistics table
pub const STATS_HEADERS: [&str; 7] = [
    "PID",
    "Burst",
    "Arrival",
    "Start",
    "Finish",
    "Total Time",
    "Waiting",
];

/// Label the execution driver uses when it issues requests itself
pub const CPU_REQUESTER_LABEL: &str = "cpu";
