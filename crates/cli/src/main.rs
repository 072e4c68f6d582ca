//! LS-8 interpreter CLI.
//!
//! Loads one program file, runs it to halt, and exits. It performs:
//! 1. **Argument parsing:** Exactly one program path plus optional flags.
//! 2. **Load:** Parses the program text into memory at address 0.
//! 3. **Run:** Executes until `HLT`; on a fatal error dumps machine state and exits with code 1.

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ls8_core::sim::loader;
use ls8_core::{Config, Cpu};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ls8",
    version,
    about = "Run an LS-8 program",
    long_about = "Run an LS-8 program.\n\nThe program file holds one 8-digit binary byte per line; `#` starts a comment.\n\nExamples:\n  ls8 programs/mult.ls8\n  ls8 --trace --stats programs/call.ls8"
)]
struct Cli {
    /// Program file to load at address 0.
    program: PathBuf,

    /// JSON configuration file (see `ls8_core::config::Config`).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print a TRACE line to stderr before every instruction.
    #[arg(short, long)]
    trace: bool,

    /// Print execution statistics to stderr after the run.
    #[arg(short, long)]
    stats: bool,

    /// Log filter for diagnostics on stderr (e.g. `debug`, `ls8_core=trace`).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let mut config = match cli.config.as_deref().map(Config::from_json_file) {
        Some(Ok(config)) => config,
        Some(Err(e)) => {
            eprintln!("[!] FATAL: {e}");
            return ExitCode::FAILURE;
        }
        None => Config::default(),
    };
    config.general.trace_instructions |= cli.trace;

    let mut cpu = Cpu::new(&config);

    if let Err(e) = loader::load_program(&mut cpu, &cli.program) {
        tracing::debug!(program = %cli.program.display(), %e, "load failed");
        eprintln!("[!] FATAL: {e}");
        return ExitCode::FAILURE;
    }

    let result = cpu.run();
    if cli.stats {
        cpu.stats().print();
    }

    match result {
        Ok(()) => {
            let _ = std::io::stdout().flush();
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("\n[!] FATAL: {e}");
            cpu.dump_state();
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber; the filter comes only from the command line.
fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
