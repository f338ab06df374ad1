#[macro_use]
extern crate log;

pub mod cli;
pub mod config;
pub mod process;
pub mod table;

pub const PROGRAM_NAME: &str = "svmerge";
