//! # paperloc
//!
//! Command-line drivers for the paper tables, built on paperloclib.
//!
//! Each binary is a single batch job:
//!
//! ```bash
//! # DaisyNFS metrics, or \daisy... macros in paper/data/loc-cmds.tex
//! DAISY_NFSD_PATH=~/daisy-nfsd daisy-loc
//! DAISY_NFSD_PATH=~/daisy-nfsd daisy-loc --latex paper/data
//!
//! # Perennial, GooseLang and GoTxn tables
//! gotxn-loc --latex paper/data
//!
//! # Linux vs GoNFS largefile throughput
//! largefile-table fig/
//! ```
//!
//! Logging goes to stderr at `warn` unless `RUST_LOG` is set; `--debug`
//! shows every pattern and tool invocation.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use console::Style;
use log::LevelFilter;

/// Base command shared by every binary: version, `--debug`.
pub fn base_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .version(env!("CARGO_PKG_VERSION"))
        .about(about)
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .action(ArgAction::SetTrue)
                .help("Log every pattern and tool invocation"),
        )
}

/// `--latex DIR`
pub fn latex_arg() -> Arg {
    Arg::new("latex")
        .long("latex")
        .value_name("DIR")
        .value_parser(clap::value_parser!(PathBuf))
        .help("Write LaTeX to this directory instead of printing a table")
}

/// Directory given with `--latex`, if any.
pub fn latex_dir(matches: &ArgMatches) -> Option<PathBuf> {
    matches.get_one::<PathBuf>("latex").cloned()
}

/// Set up `env_logger`. `RUST_LOG` wins unless `--debug` is given.
pub fn init_logger(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else if env::var("RUST_LOG").is_ok() {
        env_logger::init();
        return;
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new().filter_level(level).init();
}

/// Parse arguments, set up logging and run `body`, mapping errors to exit 1.
pub fn run(command: Command, body: impl FnOnce(&ArgMatches) -> anyhow::Result<()>) -> ExitCode {
    let matches = command.get_matches();
    init_logger(matches.get_flag("debug"));

    match body(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let label = Style::new().red().bold().for_stderr().apply_to("Error:");
            eprintln!("{label} {e}");
            ExitCode::FAILURE
        }
    }
}
