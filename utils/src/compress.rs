use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Error, ErrorKind, Read, Result, Write};
use std::path::Path;

use flate2::read::MultiGzDecoder;

fn test_open_file(path: &Path) -> Result<File> {
	match File::open(path) {
		Ok(handle) => Ok(handle),
		Err(error) => Err(Error::new(ErrorKind::Other, format!("Error opening {} for input: {}", path.display(), error))),
	}
}

// Sniff the gzip magic rather than trusting the file name; bgzf compressed
// VCFs carry the same magic bytes as plain gzip.
fn is_gzipped(path: &Path) -> Result<bool> {
	let mut f = test_open_file(path)?;
	let mut buf = [0; 3];
	let n = match f.read(&mut buf) {
		Ok(num) => num,
		Err(error) => return Err(Error::new(ErrorKind::Other, format!("Error reading from {}: {}", path.display(), error))),
	};
	Ok(n == 3 && buf[0] == 0x1f && buf[1] == 0x8b && buf[2] == 0x08)
}

pub fn open_bufreader<P: AsRef<Path>>(name: P) -> Result<Box<dyn BufRead>> {
	let path = name.as_ref();
	let gzipped = is_gzipped(path)?;
	let f = test_open_file(path)?;
	if gzipped {
		// MultiGzDecoder handles the concatenated members written by bgzip
		Ok(Box::new(BufReader::new(MultiGzDecoder::new(f))))
	} else {
		Ok(Box::new(BufReader::new(f)))
	}
}

pub fn open_bufwriter<P: AsRef<Path>>(path: P) -> Result<Box<dyn Write>> {
	let file = File::create(path)?;
	Ok(Box::new(BufWriter::new(file)))
}
