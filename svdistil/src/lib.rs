#[macro_use]
extern crate log;

pub mod cli;
pub mod config;
pub mod process;
pub mod vcf;
pub mod bed;

pub const PROGRAM_NAME: &str = "svdistil";
