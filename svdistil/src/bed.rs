use std::fmt;

use crate::vcf::VariantRecord;

/// One BED interval row: 0-based half-open coordinates plus a provenance
/// label naming the caller (or source file) the variant came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BedRecord {
	pub chrom: String,
	pub start: u64,
	pub end: u64,
	pub label: String,
}

impl BedRecord {
	/// VCF coordinates are 1-based; BED starts are 0-based, so start is
	/// POS - 1 and end is the (inclusive) SV end, which is already the
	/// exclusive bound after the shift.
	pub fn from_variant(var: &VariantRecord, label: &str) -> Result<Self, String> {
		let end = var.sv_end()?;
		Ok(Self { chrom: var.chrom.clone(), start: var.pos - 1, end, label: label.to_owned() })
	}
}

impl fmt::Display for BedRecord {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{}\t{}\t{}\t{}", self.chrom, self.start, self.end, self.label)
	}
}
