use std::path::Path;

use svmerge::config::{Config, OutputOpt};
use svmerge::process;
use utils::runlog::RunLog;

fn merge(inputs: Vec<String>, out_path: &Path) -> utils::error::Result<()> {
    let mut output = OutputOpt::new();
    output.set_filename(out_path.to_str().unwrap());
    let runlog = RunLog::new(None).unwrap();
    process::process(Config::new(output, inputs, runlog))
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|s| s.to_owned())
        .collect()
}

#[test]
fn merges_converter_output_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let header = "##fileformat=VCFv4.2\n#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n";
    let vcf_a = dir.path().join("sample.lumpy.vcf");
    let vcf_b = dir.path().join("sample.delly.vcf");
    std::fs::write(
        &vcf_a,
        format!("{}chr1\t100\trs1\tA\t<DEL>\t50\tPASS\tEND=200\nchr2\t10\t.\tC\t<DUP>\t9\tPASS\tEND=110\n", header),
    )
    .unwrap();
    std::fs::write(&vcf_b, format!("{}chr1\t100\trs9\tA\t<DEL>\t40\tPASS\tEND=200\n", header)).unwrap();

    // convert each caller's VCF, then merge the two tables
    let mut tables = Vec::new();
    for vcf in [&vcf_a, &vcf_b] {
        let table = vcf.with_extension("tsv");
        let mut output = svdistil::config::OutputOpt::new();
        output.set_filename(table.to_str().unwrap());
        let conf = svdistil::config::Config::new(
            output,
            vec![vcf.to_str().unwrap().to_owned()],
            RunLog::new(None).unwrap(),
        );
        svdistil::process::process(conf).unwrap();
        tables.push(table.to_str().unwrap().to_owned());
    }

    let out_path = dir.path().join("merged.tsv");
    merge(tables, &out_path).unwrap();
    let lines = read_lines(&out_path);
    // row counts add up: 2 + 1
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "chr1\t99\t200\tlumpy\tlumpy");
    assert_eq!(lines[2], "chr1\t99\t200\tdelly\tdelly");
}

#[test]
fn row_counts_are_summed_across_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let mut inputs = Vec::new();
    for (name, rows) in [("a.lumpy.tsv", 1usize), ("b.delly.tsv", 2), ("c.manta.tsv", 3)] {
        let path = dir.path().join(name);
        let mut body = String::new();
        for i in 0..rows {
            body.push_str(&format!("chr1\t{}\t{}\tx\n", i, i + 1));
        }
        std::fs::write(&path, body).unwrap();
        inputs.push(path.to_str().unwrap().to_owned());
    }
    let out_path = dir.path().join("merged.tsv");
    merge(inputs, &out_path).unwrap();
    assert_eq!(read_lines(&out_path).len(), 6);
}

#[test]
fn nonexistent_input_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("merged.tsv");
    let err = merge(vec!["/no/such/table.tsv".to_owned()], &out_path).unwrap_err();
    assert_eq!(err.exit_status(), utils::error::EXIT_FILE_IO_ERROR);
    assert!(!out_path.exists());
}
