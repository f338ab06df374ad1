use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use utils::caller::caller_label;
use utils::compress::{open_bufreader, open_bufwriter};
use utils::error::{DistilError, Result};

use crate::bed::BedRecord;
use crate::config::Config;
use crate::vcf::{self, LineResult};

struct FileCounts {
	written: usize,
	valid: usize,
	skipped: usize,
}

pub fn process(mut conf: Config) -> Result<()> {
	let mut runlog = conf.runlog().expect("Run log context is not set");
	let mut out: Box<dyn Write> = match conf.output().filename() {
		Some(s) => open_bufwriter(s)?,
		None => Box::new(BufWriter::new(io::stdout())),
	};
	for fname in conf.vcf_files() {
		info!("Processing VCF file from {}", fname);
		runlog.info(&format!("processing VCF file from {}", fname));
		let counts = process_file(fname, &conf, &mut out)?;
		if counts.skipped > 0 {
			runlog.warn(&format!("{}: skipped {} malformed lines", fname, counts.skipped));
		}
		runlog.info(&format!(
			"{}: {} variants written, {} valid records, {} lines skipped",
			fname, counts.written, counts.valid, counts.skipped
		));
	}
	out.flush()?;
	Ok(())
}

// One pass over a single VCF: parse, filter, emit. Malformed lines are
// counted and skipped; a file where nothing parses at all is fatal.
fn process_file(fname: &str, conf: &Config, out: &mut dyn Write) -> Result<FileCounts> {
	let rdr = open_bufreader(fname)?;
	let label = caller_label(Path::new(fname));
	let mut counts = FileCounts { written: 0, valid: 0, skipped: 0 };
	for (idx, line) in rdr.lines().enumerate() {
		let line = line
			.map_err(|e| io::Error::new(e.kind(), format!("error reading {}: {}", fname, e)))?;
		if line.is_empty() || vcf::is_header(&line) {
			continue;
		}
		match vcf::parse_data_line(&line) {
			LineResult::Parsed(var) => match BedRecord::from_variant(&var, &label) {
				Ok(bed) => {
					counts.valid += 1;
					if var.passes_filter(conf.pass_only()) && var.passes_qual(conf.qual_threshold()) {
						writeln!(out, "{}", bed)?;
						counts.written += 1;
					}
				}
				Err(reason) => {
					counts.skipped += 1;
					warn!("{}: skipping line {}: {}", fname, idx + 1, reason);
				}
			},
			LineResult::Skipped(reason) => {
				counts.skipped += 1;
				warn!("{}: skipping line {}: {}", fname, idx + 1, reason);
			}
		}
	}
	if counts.valid == 0 && counts.skipped > 0 {
		return Err(DistilError::malformed(format!(
			"no valid VCF records in {} ({} malformed lines)",
			fname, counts.skipped
		)));
	}
	Ok(counts)
}
