#[macro_use]
extern crate log;

pub mod caller;
pub mod compress;
pub mod error;
pub mod log_level;
pub mod runlog;
