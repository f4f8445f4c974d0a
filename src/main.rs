//! Battery cycle-count CLI.
//!
//! Streams a sysdiagnose `.tar.gz` report, finds the most recent
//! `BDC_Daily_version_*` log under `logs/BatteryBDC/`, and prints its
//! last recorded cycle count and charging timestamp.
//!
//! # Output Format
//!
//! The report values are written to stdout; warnings (skipped unsafe
//! paths, malformed candidate names) and the scan summary go to stderr.
//!
//! # Exit Codes
//!
//! - `0`: Success
//! - `1`: Extraction failed (archive, selection, or CSV error)
//! - `2`: Invalid arguments or configuration error

use std::env;
use std::process;

use bdclog::{read_cycle_report, ExtractConfig, GzipFileSource, ScanStats};

fn print_usage(exe: &std::ffi::OsStr) {
    eprintln!(
        "usage: {} [OPTIONS] <sysdiagnose.tar.gz>

OPTIONS:
    --target-dir=<path>     Archive directory holding the daily logs
                            (default: logs/BatteryBDC/)
    --prefix=<name>         Daily-log filename prefix
                            (default: BDC_Daily_version)
    --timestamp-column=<n>  CSV column holding the charge timestamp
                            (default: TimeStamp)
    --cycle-column=<n>      CSV column holding the cycle count
                            (default: CycleCount)
    --max-entry-bytes=<N>   Largest accepted entry payload
                            (default: 67108864)
    --help, -h              Show this help message",
        exe.to_string_lossy()
    );
}

fn main() {
    let mut args = env::args_os();
    let exe = args.next().unwrap_or_else(|| "bdclog".into());
    let mut cfg = ExtractConfig::default();
    let mut path: Option<std::path::PathBuf> = None;

    for arg in args {
        if let Some(flag) = arg.to_str() {
            if flag == "--help" || flag == "-h" {
                print_usage(&exe);
                return;
            }
            if let Some(value) = flag.strip_prefix("--target-dir=") {
                cfg.target_dir = value.to_string();
                continue;
            }
            if let Some(value) = flag.strip_prefix("--prefix=") {
                cfg.file_prefix = value.to_string();
                continue;
            }
            if let Some(value) = flag.strip_prefix("--timestamp-column=") {
                cfg.timestamp_column = value.to_string();
                continue;
            }
            if let Some(value) = flag.strip_prefix("--cycle-column=") {
                cfg.cycle_count_column = value.to_string();
                continue;
            }
            if let Some(value) = flag.strip_prefix("--max-entry-bytes=") {
                cfg.max_entry_bytes = match value.parse() {
                    Ok(n) => n,
                    Err(_) => {
                        eprintln!("invalid --max-entry-bytes value: {}", value);
                        process::exit(2);
                    }
                };
                continue;
            }
            if flag.starts_with("--") {
                eprintln!("unknown option: {}", flag);
                print_usage(&exe);
                process::exit(2);
            }
        }
        if path.is_some() {
            eprintln!("unexpected extra argument");
            print_usage(&exe);
            process::exit(2);
        }
        path = Some(arg.into());
    }

    let Some(path) = path else {
        print_usage(&exe);
        process::exit(2);
    };

    if let Err(err) = cfg.validate() {
        eprintln!("configuration error: {err}");
        process::exit(2);
    }

    println!("Parsing sysdiagnose report: {}", path.display());

    let source = GzipFileSource::new(path);
    let mut stats = ScanStats::new();
    let report = read_cycle_report(&source, &cfg, &mut stats);

    for name in stats.unsafe_samples() {
        eprintln!("warning: skipping potentially unsafe path: {name}");
    }
    if stats.malformed_candidates() > 0 {
        eprintln!(
            "warning: {} candidate filename(s) had an unparseable date",
            stats.malformed_candidates()
        );
    }
    eprintln!("{stats}");

    match report {
        Ok(report) => {
            println!("Latest daily log: {}", report.file_name);
            println!("Battery Cycle Count: {}", report.cycle_count);
            println!("Last Charging Date: {}", report.timestamp);
        }
        Err(err) => {
            eprintln!("error: {err}");
            process::exit(1);
        }
    }
}
