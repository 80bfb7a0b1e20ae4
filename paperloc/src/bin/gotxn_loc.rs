//! Lines of code tables for GoTxn, Perennial and GooseLang.

use std::process::ExitCode;

use clap::ArgMatches;
use paperloc::{base_command, latex_arg, latex_dir, run};
use paperloclib::output::latex;
use paperloclib::pipelines::gotxn::{GOOSELANG_LATEX, IMPL_LATEX, PERENNIAL_LATEX};
use paperloclib::{GoTxnReport, GoTxnRoots, TextTable};

fn gotxn_loc(matches: &ArgMatches) -> anyhow::Result<()> {
    let report = GoTxnReport::collect(&GoTxnRoots::from_env()?)?;

    let Some(dir) = latex_dir(matches) else {
        println!("Lines of code in Perennial");
        println!("{}", TextTable::from_components(&report.perennial).render());
        println!("Lines of code in GooseLang");
        println!("{}", TextTable::from_components(&report.gooselang).render());
        println!("Lines of code for GoTxn");
        print!("{}", TextTable::from_layers(&report.implementation).render());
        return Ok(());
    };

    latex::write_file(
        &dir,
        PERENNIAL_LATEX,
        &latex::component_table(&report.perennial),
    )?;
    latex::write_file(
        &dir,
        GOOSELANG_LATEX,
        &latex::component_table(&report.gooselang),
    )?;
    latex::write_file(
        &dir,
        IMPL_LATEX,
        &latex::layer_table(&report.implementation),
    )?;
    Ok(())
}

fn main() -> ExitCode {
    let command = base_command(
        "gotxn-loc",
        "Count lines of code and proof in GoTxn and Perennial",
    )
    .arg(latex_arg());
    run(command, gotxn_loc)
}
