//! Command-line argument parsing for the fleet report binary.

use std::env;
use std::path::PathBuf;

/// Parsed command-line options.
#[derive(Debug, Default)]
pub struct CliOptions {
    /// TOML scenario file.
    pub scenario: Option<PathBuf>,
    /// Built-in preset name.
    pub preset: Option<String>,
    /// Destination for the amortisation schedule CSV.
    pub amortisation_out: Option<PathBuf>,
    /// Destination for the weekly availability CSV.
    pub availability_out: Option<PathBuf>,
    /// Print usage and exit.
    pub help: bool,
}

/// Parses the process arguments.
///
/// # Errors
///
/// Returns a message describing the first invalid argument.
pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_options(&args)
}

/// Parses an argument list without the program name.
///
/// # Errors
///
/// Returns a message for unknown flags, missing values, repeated flags, or
/// when `--scenario` and `--preset` are combined.
pub fn parse_options(args: &[String]) -> Result<CliOptions, String> {
    let mut i = 0usize;
    let mut opts = CliOptions::default();

    while i < args.len() {
        match args[i].as_str() {
            "--scenario" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --scenario (expected a TOML file path)",
                )?;
                if opts.scenario.replace(PathBuf::from(path)).is_some() {
                    return Err("--scenario provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--amortisation-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --amortisation-out (expected a file path)",
                )?;
                if opts.amortisation_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--amortisation-out provided more than once".to_string());
                }
            }
            "--availability-out" => {
                i += 1;
                let path = args.next_or_err(
                    i,
                    "missing value for --availability-out (expected a file path)",
                )?;
                if opts.availability_out.replace(PathBuf::from(path)).is_some() {
                    return Err("--availability-out provided more than once".to_string());
                }
            }
            "--help" | "-h" => {
                opts.help = true;
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.scenario.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--scenario` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    if opts.scenario.is_none() && opts.preset.is_none() {
        opts.preset = Some("baseline".to_string());
    }

    Ok(opts)
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

/// Prints usage to stderr.
pub fn print_usage() {
    eprintln!("fleet-storage — depot battery, truck availability and financing report");
    eprintln!();
    eprintln!("Usage: fleet-storage [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>           Load scenario from TOML config file");
    eprintln!("  --preset <name>             Use a built-in preset (baseline, night_shift, evening_depot)");
    eprintln!("  --amortisation-out <path>   Export the amortisation schedule to CSV");
    eprintln!("  --availability-out <path>   Export the weekly availability grid to CSV");
    eprintln!("  --help                      Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the baseline preset is used.");
}
