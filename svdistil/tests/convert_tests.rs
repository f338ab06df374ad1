use std::fs::File;
use std::io::Write;
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;

use svdistil::config::{Config, OutputOpt};
use svdistil::process;
use utils::runlog::RunLog;

const HEADER: &str = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";

fn convert(inputs: Vec<String>, pass_only: bool, qual: f64, out_path: &Path) -> utils::error::Result<()> {
    let mut output = OutputOpt::new();
    output.set_filename(out_path.to_str().unwrap());
    let runlog = RunLog::new(None).unwrap();
    let mut conf = Config::new(output, inputs, runlog);
    conf.set_pass_only(pass_only).set_qual_threshold(qual);
    process::process(conf)
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|s| s.to_owned())
        .collect()
}

#[test]
fn converts_gzip_compressed_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.lumpy.vcf.gz");
    let f = File::create(&input).unwrap();
    let mut enc = GzEncoder::new(f, Compression::default());
    write!(enc, "{}chr1\t100\trs1\tA\t<DEL>\t50\tPASS\tEND=200;SVTYPE=DEL\n", HEADER).unwrap();
    enc.finish().unwrap();
    let out_path = dir.path().join("out.bed");
    convert(vec![input.to_str().unwrap().to_owned()], true, 0.0, &out_path).unwrap();
    assert_eq!(read_lines(&out_path), vec!["chr1\t99\t200\tlumpy"]);
}

#[test]
fn qual_threshold_discards_low_scoring_variants() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.delly.vcf");
    std::fs::write(
        &input,
        format!(
            "{}chr1\t10\t.\tA\t<DEL>\t5\tPASS\tEND=30\nchr1\t40\t.\tC\t<DEL>\t95\tPASS\tEND=60\nchr1\t70\t.\tG\t<DEL>\t.\tPASS\tEND=90\n",
            HEADER
        ),
    )
    .unwrap();
    let out_path = dir.path().join("out.bed");
    convert(vec![input.to_str().unwrap().to_owned()], false, 20.0, &out_path).unwrap();
    assert_eq!(read_lines(&out_path), vec!["chr1\t39\t60\tdelly"]);
}

#[test]
fn files_are_processed_in_the_order_given() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.lumpy.vcf");
    let second = dir.path().join("b.delly.vcf");
    std::fs::write(&first, format!("{}chr9\t1\t.\tA\tT\t1\tPASS\t.\n", HEADER)).unwrap();
    std::fs::write(&second, format!("{}chr1\t1\t.\tA\tT\t1\tPASS\t.\n", HEADER)).unwrap();
    let out_path = dir.path().join("out.bed");
    convert(
        vec![
            first.to_str().unwrap().to_owned(),
            second.to_str().unwrap().to_owned(),
        ],
        false,
        0.0,
        &out_path,
    )
    .unwrap();
    // no re-sorting: output follows the command line order
    assert_eq!(read_lines(&out_path), vec!["chr9\t0\t1\tlumpy", "chr1\t0\t1\tdelly"]);
}

#[test]
fn empty_vcf_with_only_headers_produces_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.manta.vcf");
    std::fs::write(&input, HEADER).unwrap();
    let out_path = dir.path().join("out.bed");
    convert(vec![input.to_str().unwrap().to_owned()], false, 0.0, &out_path).unwrap();
    assert!(read_lines(&out_path).is_empty());
}
