//! Largefile throughput of Linux and GoNFS on SSD and NVMe.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgMatches};
use paperloc::{base_command, run};
use paperloclib::output::table::render_tab_separated;
use paperloclib::pipelines::largefile_table;

fn largefile(matches: &ArgMatches) -> anyhow::Result<()> {
    let dir = matches
        .get_one::<PathBuf>("dir")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("."));
    let table = largefile_table(&dir)?;
    print!("{}", render_tab_separated(&table.rows()));
    Ok(())
}

fn main() -> ExitCode {
    let command = base_command(
        "largefile-table",
        "Print the largefile benchmark comparison table",
    )
    .arg(
        Arg::new("dir")
            .value_name("DIR")
            .value_parser(clap::value_parser!(PathBuf))
            .default_value(".")
            .help("Directory holding bench.data and aws-spectre/bench.data"),
    );
    run(command, largefile)
}
