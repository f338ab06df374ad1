use clap::{crate_version, Arg, Command};

pub(super) fn cli_model() -> Command<'static> {
    Command::new("svdistil")
        .version(crate_version!())
        .author("Bernie Pope <bjpope@unimelb.edu.au>")
        .about("Convert DNA structural variants in VCF files into BED format")
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Silence all output"),
        )
        .arg(
            Arg::new("timestamp")
                .short('T')
                .long("timestamp")
                .takes_value(true)
                .value_name("GRANULARITY")
                .possible_values(["none", "sec", "ms", "us", "ns"])
                .default_value("none")
                .help("Prepend log entries with a timestamp"),
        )
        .arg(
            Arg::new("loglevel")
                .short('v')
                .long("loglevel")
                .takes_value(true)
                .value_name("LOGLEVEL")
                .possible_values(["none", "error", "warn", "info", "debug", "trace"])
                .ignore_case(true)
                .default_value("warn")
                .help("Set log level"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .takes_value(true)
                .value_name("LOG_FILE")
                .help("Record program progress in LOG_FILE"),
        )
        .arg(
            Arg::new("pass")
                .short('p')
                .long("pass")
                .help("Only keep variants whose FILTER field is PASS"),
        )
        .arg(
            Arg::new("qual")
                .long("qual")
                .takes_value(true)
                .value_name("MIN_QUAL_THRESHOLD")
                .help("Minimum QUAL threshold, variants below this will be discarded [default: 0.0]"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .takes_value(true)
                .value_name("PATH")
                .help("Set output file name [default: stdout]"),
        )
        .arg(
            Arg::new("vcf_files")
                .takes_value(true)
                .value_name("VCF_FILE")
                .multiple_values(true)
                .required(true)
                .help("Input VCF files"),
        )
}
