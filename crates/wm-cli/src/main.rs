//! Ward Mining - ADC ward event dashboard builder
//!
//! Reads an ADC event workbook, reconstructs per-patient daily cases and
//! writes a single-page interactive HTML dashboard.

use clap::Parser;
use std::path::PathBuf;
use tracing::error;
use wm_cli::logging::{init_logging, LogConfig, LogFormat, LogLevel};
use wm_cli::{run, ExitCode, ReportOverrides, Settings};
use wm_report::ReportTheme;

/// Build an interactive process-mining dashboard from an ADC event workbook
#[derive(Parser, Debug)]
#[command(name = "ward-mining")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Event workbook (.xlsx/.xls/.ods); defaults to ADC系統_總表V2.xlsx next to the executable
    #[arg(long, short = 'i', env = "WM_INPUT")]
    input: Option<PathBuf>,

    /// Dashboard output path
    #[arg(long, short = 'o', env = "WM_OUTPUT")]
    output: Option<PathBuf>,

    /// Report configuration JSON
    #[arg(long, env = "WM_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// Page subtitle
    #[arg(long)]
    subtitle: Option<String>,

    /// Color theme (light, dark, auto)
    #[arg(long, value_parser = parse_theme)]
    theme: Option<ReportTheme>,

    /// Seed for flow-network node colors
    #[arg(long, env = "WM_COLOR_SEED")]
    color_seed: Option<u64>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    /// Log format on stderr (human, jsonl)
    #[arg(long, value_parser = parse_log_format)]
    log_format: Option<LogFormat>,
}

fn parse_theme(s: &str) -> Result<ReportTheme, String> {
    s.parse()
}

fn parse_log_format(s: &str) -> Result<LogFormat, String> {
    s.parse()
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version print to stdout and exit 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(ExitCode::ArgsError.as_i32());
        }
    };

    // Without -v/-q the environment decides the level
    let cli_level = (cli.verbose > 0 || cli.quiet)
        .then(|| LogLevel::from_verbosity(cli.verbose, cli.quiet));
    init_logging(&LogConfig::from_env(cli_level, cli.log_format));

    let exit_code = execute(cli);
    std::process::exit(exit_code.as_i32());
}

fn execute(cli: Cli) -> ExitCode {
    let overrides = ReportOverrides {
        title: cli.title,
        subtitle: cli.subtitle,
        theme: cli.theme,
        color_seed: cli.color_seed,
    };

    let settings = match Settings::resolve(cli.input, cli.output, cli.config.as_deref(), overrides)
    {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, code = ExitCode::ArgsError.code_name(), "Invalid configuration");
            return ExitCode::ArgsError;
        }
    };

    match run(&settings) {
        Ok(_) => ExitCode::Clean,
        Err(e) => {
            let code = e.exit_code();
            error!(error = %e, code = code.code_name(), "Dashboard not generated");
            code
        }
    }
}
