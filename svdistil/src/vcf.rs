use std::collections::HashMap;

// CHROM, POS, ID, REF, ALT, QUAL, FILTER, INFO
pub const MIN_VCF_COLUMNS: usize = 8;

/// One parsed VCF data line. Genotype columns beyond INFO are ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantRecord {
	pub chrom: String,
	pub pos: u64,
	pub id: String,
	pub ref_allele: String,
	pub alt_allele: String,
	pub qual: Option<f64>,
	pub filter: String,
	pub info: HashMap<String, Option<String>>,
}

/// Outcome of parsing a single data line. A malformed line is reported with
/// a reason so the caller can decide whether to keep going or abort.
#[derive(Debug, Clone, PartialEq)]
pub enum LineResult {
	Parsed(VariantRecord),
	Skipped(String),
}

pub fn is_header(line: &str) -> bool {
	line.starts_with('#')
}

/// Parse the semicolon separated INFO column into a key to optional value
/// map. Flag entries (no '=') map to None. A bare "." means no annotations.
pub fn parse_info(s: &str) -> HashMap<String, Option<String>> {
	let mut map = HashMap::new();
	if s == "." {
		return map;
	}
	for item in s.split(';') {
		if item.is_empty() {
			continue;
		}
		match item.split_once('=') {
			Some((k, v)) => map.insert(k.to_owned(), Some(v.to_owned())),
			None => map.insert(item.to_owned(), None),
		};
	}
	map
}

pub fn parse_data_line(line: &str) -> LineResult {
	let fields: Vec<&str> = line.split('\t').collect();
	if fields.len() < MIN_VCF_COLUMNS {
		return LineResult::Skipped(format!(
			"expected at least {} tab separated columns, found {}",
			MIN_VCF_COLUMNS,
			fields.len()
		));
	}
	let chrom = fields[0];
	if chrom.is_empty() {
		return LineResult::Skipped("missing CHROM".to_owned());
	}
	let pos = match fields[1].parse::<u64>() {
		Ok(p) if p > 0 => p,
		Ok(p) => return LineResult::Skipped(format!("POS must be positive, found {}", p)),
		Err(_) => return LineResult::Skipped(format!("non-numeric POS '{}'", fields[1])),
	};
	let qual = match fields[5] {
		"." => None,
		s => match s.parse::<f64>() {
			Ok(q) => Some(q),
			Err(_) => return LineResult::Skipped(format!("non-numeric QUAL '{}'", s)),
		},
	};
	LineResult::Parsed(VariantRecord {
		chrom: chrom.to_owned(),
		pos,
		id: fields[2].to_owned(),
		ref_allele: fields[3].to_owned(),
		alt_allele: fields[4].to_owned(),
		qual,
		filter: fields[6].to_owned(),
		info: parse_info(fields[7]),
	})
}

impl VariantRecord {
	/// End coordinate (1-based, inclusive) of the variant. Taken from the
	/// INFO END field when present; otherwise the variant is treated as a
	/// single base event ending at POS.
	pub fn sv_end(&self) -> Result<u64, String> {
		match self.info.get("END") {
			Some(Some(v)) => match v.parse::<u64>() {
				Ok(end) if end >= self.pos => Ok(end),
				Ok(end) => Err(format!("INFO END {} before POS {}", end, self.pos)),
				Err(_) => Err(format!("non-numeric INFO END '{}'", v)),
			},
			Some(None) => Err("INFO END present without a value".to_owned()),
			None => Ok(self.pos),
		}
	}

	/// FILTER check: exact, case sensitive match against "PASS" when
	/// pass_only is set, otherwise everything is kept.
	pub fn passes_filter(&self, pass_only: bool) -> bool {
		!pass_only || self.filter == "PASS"
	}

	/// A missing QUAL (".") only passes the default zero threshold.
	pub fn passes_qual(&self, threshold: f64) -> bool {
		match self.qual {
			Some(q) => q >= threshold,
			None => threshold <= 0.0,
		}
	}
}
