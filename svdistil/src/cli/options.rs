use clap::ArgMatches;

use utils::error::{DistilError, Result};
use utils::runlog::RunLog;

use crate::config::{Config, OutputOpt, DEFAULT_MIN_QUAL_THRESHOLD};

pub fn handle_options(m: &ArgMatches) -> Result<Config> {
    let mut output_opt = OutputOpt::new();
    if let Some(s) = m.value_of("output") {
        output_opt.set_filename(s);
    }
    let qual = match m.value_of("qual") {
        Some(s) => s
            .parse::<f64>()
            .map_err(|e| DistilError::usage(format!("invalid QUAL threshold '{}': {}", s, e)))?,
        None => DEFAULT_MIN_QUAL_THRESHOLD,
    };
    let vcf_files: Vec<String> = m
        .values_of("vcf_files")
        .map(|v| v.map(|s| s.to_owned()).collect())
        .unwrap_or_default();
    if vcf_files.is_empty() {
        return Err(DistilError::usage("no input VCF files given"));
    }
    let runlog = RunLog::new(m.value_of("log"))?;
    let mut conf = Config::new(output_opt, vcf_files, runlog);
    conf.set_pass_only(m.is_present("pass")).set_qual_threshold(qual);
    Ok(conf)
}
