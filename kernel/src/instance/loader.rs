/*!
 * Instance Loader
 * Parses comma-separated process instances
 *
 * Format: a header row, then one row per process:
 * `id, burst, arrival[, priority]`. Blank lines are ignored and unquoted
 * fields are trimmed. Fields may be wrapped in double quotes to carry commas,
 * with `""` standing for a literal quote.
 */

use super::types::{Instance, InstanceError, InstanceResult};
use crate::core::data_structures::InlineString;
use crate::core::id::Pid;
use crate::core::limits::{MAX_INSTANCE_COLUMNS, MIN_INSTANCE_COLUMNS};
use crate::core::types::{Clock, Priority};
use crate::process::Process;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Read and parse an instance file
pub fn load_instance<T>(path: impl AsRef<Path>) -> InstanceResult<Instance<T>> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|e| InstanceError::Io {
        path: path.display().to_string().into(),
        message: e.to_string().into(),
    })?;

    let instance = parse_instance(&source)?;
    info!(
        path = %path.display(),
        processes = instance.len(),
        priorities = instance.has_priorities(),
        "Instance loaded"
    );
    Ok(instance)
}

/// Parse instance text
pub fn parse_instance<T>(source: &str) -> InstanceResult<Instance<T>> {
    let mut rows = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = rows.next().ok_or(InstanceError::MissingHeader)?;
    let headers = split_fields(header_line, header)?;
    if !(MIN_INSTANCE_COLUMNS..=MAX_INSTANCE_COLUMNS).contains(&headers.len()) {
        return Err(InstanceError::InvalidHeader {
            columns: headers.len(),
            min: MIN_INSTANCE_COLUMNS,
            max: MAX_INSTANCE_COLUMNS,
        });
    }

    let mut seen = HashSet::new();
    let mut processes = Vec::new();
    for (line, row) in rows {
        let process = parse_row(line, row, headers.len())?;
        if !seen.insert(process.pid().clone()) {
            return Err(InstanceError::DuplicatePid {
                line,
                pid: process.pid().clone(),
            });
        }
        debug!(line, pid = %process.pid(), "Parsed process row");
        processes.push(process);
    }

    Ok(Instance { headers, processes })
}

fn split_fields(line: usize, row: &str) -> InstanceResult<Vec<InlineString>> {
    let mut fields = Vec::new();
    let mut chars = row.chars().peekable();

    loop {
        while chars.next_if(|c| *c == ' ' || *c == '\t').is_some() {}

        let mut field = String::new();
        let last = if chars.next_if_eq(&'"').is_some() {
            loop {
                match chars.next() {
                    Some('"') if chars.next_if_eq(&'"').is_some() => field.push('"'),
                    Some('"') => break,
                    Some(c) => field.push(c),
                    None => return Err(malformed(line, "unterminated quoted field")),
                }
            }
            while chars.next_if(|c| c.is_whitespace()).is_some() {}
            match chars.next() {
                None => true,
                Some(',') => false,
                Some(c) => {
                    return Err(malformed(
                        line,
                        format!("unexpected '{}' after quoted field", c),
                    ))
                }
            }
        } else {
            let mut last = true;
            for c in chars.by_ref() {
                if c == ',' {
                    last = false;
                    break;
                }
                field.push(c);
            }
            let trimmed_len = field.trim_end().len();
            field.truncate(trimmed_len);
            last
        };

        fields.push(InlineString::from(field));
        if last {
            return Ok(fields);
        }
    }
}

fn parse_row<T>(line: usize, row: &str, columns: usize) -> InstanceResult<Process<T>> {
    let fields = split_fields(line, row)?;
    if fields.len() != columns {
        return Err(malformed(
            line,
            format!("expected {} fields, found {}", columns, fields.len()),
        ));
    }

    if fields[0].is_empty() {
        return Err(malformed(line, "empty process id"));
    }
    let pid = Pid::from(fields[0].as_str());
    let burst: Clock = parse_field(line, "burst", fields[1].as_str())?;
    let arrival: Clock = parse_field(line, "arrival time", fields[2].as_str())?;

    let mut builder = Process::builder(pid)
        .with_burst(burst)
        .with_arrival_time(arrival);
    if let Some(raw) = fields.get(3) {
        let priority: Priority = parse_field(line, "priority", raw.as_str())?;
        builder = builder.with_priority(priority);
    }

    builder
        .build()
        .map_err(|source| InstanceError::InvalidProcess { line, source })
}

fn parse_field<N: FromStr>(line: usize, name: &str, raw: &str) -> InstanceResult<N> {
    raw.parse()
        .map_err(|_| malformed(line, format!("invalid {} '{}'", name, raw)))
}

fn malformed(line: usize, reason: impl Into<InlineString>) -> InstanceError {
    InstanceError::MalformedRow {
        line,
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_column_instance() {
        let instance: Instance =
            parse_instance("PID,Burst,Arrival\nA,5,0\nB, 3 ,2\n").unwrap();
        assert_eq!(instance.len(), 2);
        assert!(!instance.has_priorities());
        assert_eq!(instance.processes()[1].pid().as_str(), "B");
        assert_eq!(instance.processes()[1].remaining(), 3);
        assert_eq!(instance.processes()[1].arrival_time(), 2);
    }

    #[test]
    fn test_priority_column() {
        let instance: Instance = parse_instance("id,burst,arrival,priority\n1,4,0,2\n").unwrap();
        assert!(instance.has_priorities());
        assert_eq!(instance.processes()[0].priority(), Some(2));
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let instance: Instance = parse_instance("\r\nid,burst,arrival\r\n\r\n1,1,0\r\n").unwrap();
        assert_eq!(instance.len(), 1);
    }

    #[test]
    fn test_errors_report_line_numbers() {
        let err = parse_instance::<i64>("id,burst,arrival\n1,x,0\n").unwrap_err();
        assert_eq!(
            err,
            InstanceError::MalformedRow {
                line: 2,
                reason: "invalid burst 'x'".into()
            }
        );

        let err = parse_instance::<i64>("id,burst,arrival\n1,2,0\n\n1,3,1\n").unwrap_err();
        assert!(matches!(err, InstanceError::DuplicatePid { line: 4, .. }));

        let err = parse_instance::<i64>("id,burst,arrival\n1,0,0\n").unwrap_err();
        assert!(matches!(err, InstanceError::InvalidProcess { line: 2, .. }));
    }

    #[test]
    fn test_header_validation() {
        assert_eq!(
            parse_instance::<i64>("").unwrap_err(),
            InstanceError::MissingHeader
        );
        assert!(matches!(
            parse_instance::<i64>("id,burst\n"),
            Err(InstanceError::InvalidHeader { columns: 2, .. })
        ));
    }

    #[test]
    fn test_quoted_fields() {
        let instance: Instance =
            parse_instance("\"id\",\"burst, clocks\",arrival\n\"io, \"\"disk\"\"\" , 3,1\n").unwrap();
        assert_eq!(instance.headers()[1].as_str(), "burst, clocks");
        assert_eq!(instance.processes()[0].pid().as_str(), "io, \"disk\"");
        assert_eq!(instance.processes()[0].remaining(), 3);
    }

    #[test]
    fn test_bad_quoting_reports_line() {
        let err = parse_instance::<i64>("id,burst,arrival\n\"A,2,0\n").unwrap_err();
        assert_eq!(
            err,
            InstanceError::MalformedRow {
                line: 2,
                reason: "unterminated quoted field".into()
            }
        );

        let err = parse_instance::<i64>("id,burst,arrival\n\"A\"x,2,0\n").unwrap_err();
        assert!(matches!(err, InstanceError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_priority_out_of_range() {
        let err = parse_instance::<i64>("id,burst,arrival,priority\n1,2,0,300\n").unwrap_err();
        assert!(matches!(err, InstanceError::MalformedRow { line: 2, .. }));
    }
}
