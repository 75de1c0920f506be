/*!
 * Finished-Process Statistics
 * Turnaround and waiting times over a set of completed processes
 */

use super::table::TextTable;
use crate::core::data_structures::InlineString;
use crate::core::id::Pid;
use crate::core::limits::STATS_HEADERS;
use crate::core::types::Clock;
use crate::process::{Process, ProcessInfo};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ReportError {
    #[error("Process {pid} has no start time")]
    #[diagnostic(code(report::missing_start), help("Only processes run by a CPU can be reported."))]
    MissingStart { pid: Pid },

    #[error("Process {pid} has no finish time")]
    #[diagnostic(
        code(report::missing_finish),
        help("The scheduler assigns finish times when a process terminates.")
    )]
    MissingFinish { pid: Pid },

    #[error("Process {pid} has inconsistent times: {reason}")]
    #[diagnostic(code(report::inconsistent_times))]
    InconsistentTimes { pid: Pid, reason: InlineString },

    #[error("Failed to serialize report: {0}")]
    #[diagnostic(code(report::serialization))]
    Serialization(InlineString),
}

/// Statistics of one finished process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StatRow {
    pub pid: Pid,
    pub burst: Clock,
    pub arrival_time: Clock,
    pub start_time: Clock,
    pub finish_time: Clock,
    /// `finish_time - arrival_time`
    pub total_time: Clock,
    /// `total_time - burst`
    pub waiting_time: Clock,
}

impl TryFrom<&ProcessInfo> for StatRow {
    type Error = ReportError;

    fn try_from(info: &ProcessInfo) -> ReportResult<Self> {
        let pid = info.pid.clone();
        let start_time = info
            .start_time
            .ok_or_else(|| ReportError::MissingStart { pid: pid.clone() })?;
        let finish_time = info
            .finish_time
            .ok_or_else(|| ReportError::MissingFinish { pid: pid.clone() })?;

        let total_time = finish_time.checked_sub(info.arrival_time).ok_or_else(|| {
            ReportError::InconsistentTimes {
                pid: pid.clone(),
                reason: "finishes before it arrives".into(),
            }
        })?;
        let waiting_time = total_time.checked_sub(info.burst).ok_or_else(|| {
            ReportError::InconsistentTimes {
                pid: pid.clone(),
                reason: "turnaround shorter than its burst".into(),
            }
        })?;

        Ok(Self {
            pid,
            burst: info.burst,
            arrival_time: info.arrival_time,
            start_time,
            finish_time,
            total_time,
            waiting_time,
        })
    }
}

/// Per-process rows plus the mean waiting time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Report {
    pub rows: Vec<StatRow>,
    /// `None` when no process was reported
    pub mean_waiting: Option<f64>,
}

impl Report {
    pub fn from_infos<'a, I>(infos: I) -> ReportResult<Self>
    where
        I: IntoIterator<Item = &'a ProcessInfo>,
    {
        let rows = infos
            .into_iter()
            .map(StatRow::try_from)
            .collect::<ReportResult<Vec<_>>>()?;

        let mean_waiting = if rows.is_empty() {
            None
        } else {
            let sum: Clock = rows.iter().map(|r| r.waiting_time).sum();
            Some(sum as f64 / rows.len() as f64)
        };

        Ok(Self { rows, mean_waiting })
    }

    pub fn render_table(&self) -> String {
        let mut table = TextTable::new(STATS_HEADERS);
        for row in &self.rows {
            table.add_row([
                row.pid.to_string(),
                row.burst.to_string(),
                row.arrival_time.to_string(),
                row.start_time.to_string(),
                row.finish_time.to_string(),
                row.total_time.to_string(),
                row.waiting_time.to_string(),
            ]);
        }
        table.draw()
    }

    pub fn to_json(&self) -> ReportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| ReportError::Serialization(e.to_string().into()))
    }
}

/// Compute statistics for finished processes
pub fn compute_stats<'a, T, I>(processes: I) -> ReportResult<Report>
where
    T: 'a,
    I: IntoIterator<Item = &'a Process<T>>,
{
    let infos: Vec<ProcessInfo> = processes.into_iter().map(Process::info).collect();
    Report::from_infos(&infos)
}
