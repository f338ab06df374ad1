/// One row of a distilled SV table: `CHROM\tSTART\tEND[\tLABEL]` with
/// 0-based half-open coordinates. The label column is optional on input;
/// rows without one are tagged from their source file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
	pub chrom: String,
	pub start: u64,
	pub end: u64,
	pub label: Option<String>,
}

pub fn parse_row(line: &str) -> Result<TableRow, String> {
	let fields: Vec<&str> = line.split('\t').collect();
	if fields.len() < 3 {
		return Err(format!("expected at least 3 tab separated columns, found {}", fields.len()));
	}
	if fields[0].is_empty() {
		return Err("missing chromosome".to_owned());
	}
	let start = fields[1]
		.parse::<u64>()
		.map_err(|_| format!("non-numeric start '{}'", fields[1]))?;
	let end = fields[2]
		.parse::<u64>()
		.map_err(|_| format!("non-numeric end '{}'", fields[2]))?;
	if start > end {
		return Err(format!("start {} greater than end {}", start, end));
	}
	Ok(TableRow {
		chrom: fields[0].to_owned(),
		start,
		end,
		label: fields.get(3).map(|s| (*s).to_owned()),
	})
}
