use std::env;
use std::io::{self, Write};

use chrono::Local;

use crate::compress::open_bufwriter;

/// Progress log context, passed explicitly to the processing functions
/// rather than held as global state. When no log file was requested every
/// call is a no-op.
pub struct RunLog {
	out: Option<Box<dyn Write>>,
}

impl RunLog {
	/// Open the log file (if requested) and record the program start and
	/// the invoking command line.
	pub fn new(path: Option<&str>) -> io::Result<Self> {
		let mut rl = match path {
			Some(p) => RunLog { out: Some(open_bufwriter(p)?) },
			None => RunLog { out: None },
		};
		rl.info("program started");
		let args: Vec<String> = env::args().collect();
		let cmdline = args.join(" ");
		rl.info(&format!("command line: {}", cmdline));
		Ok(rl)
	}

	pub fn from_writer(w: Box<dyn Write>) -> Self {
		RunLog { out: Some(w) }
	}

	pub fn is_active(&self) -> bool {
		self.out.is_some()
	}

	pub fn info(&mut self, msg: &str) {
		self.write_entry("INFO", msg)
	}

	pub fn warn(&mut self, msg: &str) {
		self.write_entry("WARNING", msg)
	}

	fn write_entry(&mut self, level: &str, msg: &str) {
		if let Some(w) = self.out.as_mut() {
			let ts = Local::now().format("%m-%d-%Y %H:%M:%S");
			if writeln!(w, "{} {} - {}", ts, level, msg).is_err() {
				warn!("Could not write to run log");
			}
		}
	}
}
