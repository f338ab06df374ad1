use utils::runlog::RunLog;

#[derive(Default)]
pub struct OutputOpt {
	filename: Option<String>,
}

impl OutputOpt {
	pub fn new() -> Self { Default::default() }
	pub fn set_filename<S: AsRef<str>>(&mut self, fname: S) -> &mut Self {
		self.filename = Some(fname.as_ref().to_owned());
		self
	}
	pub fn filename(&self) -> Option<&str> { self.filename.as_ref().map(|s| s.as_str()) }
}

pub struct Config {
	tsv_files: Vec<String>,
	output: OutputOpt,
	runlog: Option<RunLog>,
}

impl Config {
	pub fn new(output: OutputOpt, tsv_files: Vec<String>, runlog: RunLog) -> Self {
		Self { tsv_files, output, runlog: Some(runlog) }
	}
	pub fn tsv_files(&self) -> &[String] { &self.tsv_files }
	pub fn output(&self) -> &OutputOpt { &self.output }
	pub fn runlog(&mut self) -> Option<RunLog> { self.runlog.take() }
}
