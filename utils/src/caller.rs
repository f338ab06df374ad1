use std::path::Path;

/// Derive the caller (or source) label from a file name following the
/// `<sample>.<caller>.vcf[.gz]` naming convention used for per-caller
/// outputs. Falls back to the file stem when no caller name is embedded.
pub fn caller_label(path: &Path) -> String {
	let name = path.file_name().and_then(|s| s.to_str()).unwrap_or("");
	let mut stem = name;
	for suffix in &[".gz", ".vcf", ".tsv", ".bed", ".txt"] {
		if let Some(s) = stem.strip_suffix(suffix) {
			stem = s;
		}
	}
	match stem.rsplit_once('.') {
		Some((_, caller)) if !caller.is_empty() => caller.to_owned(),
		_ => {
			if stem.is_empty() {
				name.to_owned()
			} else {
				stem.to_owned()
			}
		}
	}
}
