use clap::ArgMatches;

use utils::error::{DistilError, Result};
use utils::runlog::RunLog;

use crate::config::{Config, OutputOpt};

pub fn handle_options(m: &ArgMatches) -> Result<Config> {
    let mut output_opt = OutputOpt::new();
    if let Some(s) = m.value_of("output") {
        output_opt.set_filename(s);
    }
    let tsv_files: Vec<String> = m
        .values_of("tsv_files")
        .map(|v| v.map(|s| s.to_owned()).collect())
        .unwrap_or_default();
    if tsv_files.is_empty() {
        return Err(DistilError::usage("no input tables given"));
    }
    let runlog = RunLog::new(m.value_of("log"))?;
    Ok(Config::new(output_opt, tsv_files, runlog))
}
