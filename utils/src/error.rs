use std::io;

use thiserror::Error;

pub const EXIT_FILE_IO_ERROR: i32 = 1;
pub const EXIT_COMMAND_LINE_ERROR: i32 = 2;
pub const EXIT_FILE_CONTENT_ERROR: i32 = 3;

/// Error taxonomy shared by the svdistil tools. Each category maps to a
/// distinct process exit status.
#[derive(Error, Debug)]
pub enum DistilError {
	#[error("{0}")]
	Usage(String),
	#[error("{0}")]
	Io(#[from] io::Error),
	#[error("{0}")]
	MalformedInput(String),
}

impl DistilError {
	pub fn usage<S: Into<String>>(msg: S) -> Self {
		DistilError::Usage(msg.into())
	}

	pub fn malformed<S: Into<String>>(msg: S) -> Self {
		DistilError::MalformedInput(msg.into())
	}

	pub fn exit_status(&self) -> i32 {
		match self {
			DistilError::Usage(_) => EXIT_COMMAND_LINE_ERROR,
			DistilError::Io(_) => EXIT_FILE_IO_ERROR,
			DistilError::MalformedInput(_) => EXIT_FILE_CONTENT_ERROR,
		}
	}
}

pub type Result<T> = std::result::Result<T, DistilError>;
