/*!
 * Process Simulator - Main Entry Point
 *
 * Loads a process instance and prints it for inspection.
 */

use clap::Parser;
use miette::IntoDiagnostic;
use procsim_kernel::monitoring::{init_tracing, init_tracing_with};
use procsim_kernel::{
    load_instance, render_instance_table, Instance, KernelResult, ProcessInfo, ReportError,
    SerializableError,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Instance file: header row, then `id,burst,arrival[,priority]` rows
    #[arg(value_name = "FILE")]
    instance: PathBuf,

    /// Print the loaded processes as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON (also enabled by PROCSIM_TRACE_JSON)
    #[arg(long)]
    trace_json: bool,
}

fn main() -> miette::Result<()> {
    let args = Args::parse();
    if args.trace_json {
        init_tracing_with(true);
    } else {
        init_tracing();
    }

    let output = match render(&args) {
        Ok(output) => output,
        Err(err) if args.json => {
            error!(error = %err, "Failed to load instance");
            let json = serde_json::to_string(&SerializableError::from(&err)).into_diagnostic()?;
            eprintln!("{}", json);
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    println!("{}", output);
    Ok(())
}

fn render(args: &Args) -> KernelResult<String> {
    let instance: Instance = load_instance(&args.instance)?;
    info!(processes = instance.len(), "Instance ready");

    if args.json {
        let infos: Vec<ProcessInfo> = instance.processes().iter().map(|p| p.info()).collect();
        let json = serde_json::to_string_pretty(&infos)
            .map_err(|e| ReportError::Serialization(e.to_string().into()))?;
        Ok(json)
    } else {
        Ok(render_instance_table(&instance))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use procsim_kernel::{InstanceError, KernelError};
    use std::io::Write;

    fn args(path: &std::path::Path, json: bool) -> Args {
        let mut argv = vec!["procsim".to_string(), path.display().to_string()];
        if json {
            argv.push("--json".to_string());
        }
        Args::parse_from(argv)
    }

    #[test]
    fn test_render_json_lists_processes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,burst,arrival\nA,3,0\nB,2,1").unwrap();

        let output = render(&args(file.path(), true)).unwrap();
        let infos: Vec<ProcessInfo> = serde_json::from_str(&output).unwrap();
        assert_eq!(infos.len(), 2);
        assert_eq!(infos[1].pid.as_str(), "B");
    }

    #[test]
    fn test_missing_file_becomes_serializable_instance_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = render(&args(&dir.path().join("missing.csv"), true)).unwrap_err();
        assert!(matches!(err, KernelError::Instance(InstanceError::Io { .. })));

        let serializable = SerializableError::from(&err);
        assert_eq!(serializable.error_type.as_str(), "instance_error");
        assert!(serializable.code.is_some());
    }
}
