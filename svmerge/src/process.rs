use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use utils::caller::caller_label;
use utils::compress::{open_bufreader, open_bufwriter};
use utils::error::{DistilError, Result};

use crate::config::Config;
use crate::table;

pub fn process(mut conf: Config) -> Result<()> {
	let mut runlog = conf.runlog().expect("Run log context is not set");
	// Open every input before writing anything; a missing table must fail
	// the whole merge with no partial output.
	let mut inputs = Vec::with_capacity(conf.tsv_files().len());
	for fname in conf.tsv_files() {
		let rdr = open_bufreader(fname)?;
		inputs.push((fname.to_owned(), rdr));
	}
	let mut out: Box<dyn Write> = match conf.output().filename() {
		Some(s) => open_bufwriter(s)?,
		None => Box::new(BufWriter::new(io::stdout())),
	};
	let mut total = 0;
	for (fname, rdr) in inputs {
		info!("Merging table from {}", fname);
		runlog.info(&format!("merging table from {}", fname));
		total += merge_file(&fname, rdr, &mut out)?;
	}
	out.flush()?;
	runlog.info(&format!("wrote {} merged rows", total));
	Ok(())
}

// Concatenate one table onto the output, tagging every row with its source.
// Rows from different callers are never deduplicated; the source column is
// what lets downstream consensus see which caller supports which interval.
fn merge_file(fname: &str, rdr: Box<dyn BufRead>, out: &mut dyn Write) -> Result<usize> {
	let source = caller_label(Path::new(fname));
	let mut n = 0;
	for (idx, line) in rdr.lines().enumerate() {
		let line = line
			.map_err(|e| io::Error::new(e.kind(), format!("error reading {}: {}", fname, e)))?;
		if line.is_empty() || line.starts_with('#') {
			continue;
		}
		// A bad row is fatal: silently dropping a caller's calls would
		// corrupt any downstream consensus.
		let row = table::parse_row(&line)
			.map_err(|reason| DistilError::malformed(format!("{} line {}: {}", fname, idx + 1, reason)))?;
		let label = row.label.as_deref().unwrap_or(&source);
		writeln!(out, "{}\t{}\t{}\t{}\t{}", row.chrom, row.start, row.end, label, source)?;
		n += 1;
	}
	Ok(n)
}
