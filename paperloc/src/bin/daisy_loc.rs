//! Spec, code and proof sizes for DaisyNFS.

use std::process::ExitCode;

use clap::ArgMatches;
use paperloc::{base_command, latex_arg, latex_dir, run};
use paperloclib::output::{latex, table};
use paperloclib::pipelines::daisy::{DaisyCounts, LATEX_FILE, MACRO_PREFIX};
use paperloclib::{ProjectId, ProjectRoot, ToolConfig};

fn daisy_loc(matches: &ArgMatches) -> anyhow::Result<()> {
    let root = ProjectRoot::from_env(ProjectId::DaisyNfsd)?;
    let tools = ToolConfig::from_env();
    let metrics = DaisyCounts::collect(&root, &tools)?.metrics();

    match latex_dir(matches) {
        Some(dir) => {
            latex::write_file(&dir, LATEX_FILE, &latex::metric_macros(MACRO_PREFIX, &metrics))?;
        }
        None => print!("{}", table::render_metrics(&metrics)),
    }
    Ok(())
}

fn main() -> ExitCode {
    let command = base_command("daisy-loc", "Count lines of spec, code and proof in DaisyNFS")
        .arg(latex_arg());
    run(command, daisy_loc)
}
