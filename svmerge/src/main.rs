use std::process::exit;

use log::error;

use svmerge::{cli, process, PROGRAM_NAME};
use utils::error::DistilError;

fn exit_with_error(e: &DistilError) -> ! {
	error!("{}", e);
	eprintln!("{} ERROR: {}, exiting", PROGRAM_NAME, e);
	exit(e.exit_status())
}

fn main() {
	let conf = match cli::process_cli() {
		Ok(c) => c,
		Err(e) => exit_with_error(&e),
	};
	if let Err(e) = process::process(conf) {
		exit_with_error(&e)
	}
}
