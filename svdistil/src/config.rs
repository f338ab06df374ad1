use utils::runlog::RunLog;

pub const DEFAULT_MIN_QUAL_THRESHOLD: f64 = 0.0;

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
	vcf_files: Vec<String>,
	pass_only: bool,
	qual_threshold: f64,
	output: OutputOpt,
	runlog: Option<RunLog>,
}

impl Config {
	pub fn new(output: OutputOpt, vcf_files: Vec<String>, runlog: RunLog) -> Self {
		Self { vcf_files, pass_only: false, qual_threshold: DEFAULT_MIN_QUAL_THRESHOLD, output, runlog: Some(runlog) }
	}
	pub fn set_pass_only(&mut self, b: bool) -> &mut Self { self.pass_only = b; self }
	pub fn set_qual_threshold(&mut self, q: f64) -> &mut Self { self.qual_threshold = q; self }
	pub fn pass_only(&self) -> bool { self.pass_only }
	pub fn qual_threshold(&self) -> f64 { self.qual_threshold }
	pub fn vcf_files(&self) -> &[String] { &self.vcf_files }
	pub fn output(&self) -> &OutputOpt { &self.output }
	pub fn runlog(&mut self) -> Option<RunLog> { self.runlog.take() }
}
