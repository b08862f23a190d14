//! End-to-end tests driving the `lane-merge` binary.

use std::fs;
use std::io::Write as _;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn lane_merge() -> Command {
    Command::cargo_bin("lane-merge").expect("binary builds")
}

/// Tar archive holding the given (path, content) members.
fn build_tar(members: &[(&str, &[u8])]) -> Vec<u8> {
    let mut builder = tar::Builder::new(Vec::new());
    for (name, content) in members {
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append_data(&mut header, name, *content).unwrap();
    }
    builder.into_inner().unwrap()
}

fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

fn touch(dir: &Path, name: &str) {
    fs::write(dir.join(name), b"gz").unwrap();
}

#[test]
fn test_verify_reports_pair_and_singleton() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "A_R1.fastq.gz");
    touch(dir.path(), "A_R2.fastq.gz");
    touch(dir.path(), "B_R1.fastq.gz");

    lane_merge()
        .arg("verify")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("2 samples, 3 output files"))
        .stdout(predicate::str::contains("complete (R1+R2): 1"))
        .stdout(predicate::str::contains("incomplete:       1"));
}

#[test]
fn test_verify_json_output() {
    let dir = tempfile::tempdir().unwrap();
    touch(dir.path(), "A_R1.fastq.gz");
    touch(dir.path(), "A_R2.fastq.gz");

    let output = lane_merge()
        .arg("verify")
        .arg(dir.path())
        .args(["--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["total_files"], 2);
    assert_eq!(report["no_outputs"], false);
    assert!(report["samples"]["A"]["directions"]
        .as_array()
        .unwrap()
        .iter()
        .any(|d| d == "forward"));
}

#[test]
fn test_verify_empty_directory_mentions_no_outputs() {
    let dir = tempfile::tempdir().unwrap();

    lane_merge()
        .arg("verify")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("no merge outputs found"));
}

#[test]
fn test_run_fails_on_missing_source() {
    let dir = tempfile::tempdir().unwrap();

    lane_merge()
        .arg("run")
        .arg(dir.path().join("absent"))
        .args(["--output"])
        .arg(dir.path().join("merged"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("source directory not found"));
}

#[test]
fn test_run_merges_archive_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("archives");
    let output = dir.path().join("merged");
    fs::create_dir_all(&source).unwrap();

    let tar_bytes = build_tar(&[
        ("run/S1_EKD001_L001_1.fastq.gz", b"AAAA" as &[u8]),
        ("run/S1_EKD001_L002_1.fastq.gz", b"BB"),
        ("run/S1_EKD001_L001_2.fastq.gz", b"CCC"),
    ]);
    fs::write(source.join("batch.tar.gz"), gzip(&tar_bytes)).unwrap();

    lane_merge()
        .arg("run")
        .arg(&source)
        .args(["--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 ok, 0 failed"))
        .stdout(predicate::str::contains("complete (R1+R2): 1"));

    assert_eq!(fs::read(output.join("S1_R1.fastq.gz")).unwrap(), b"AAAABB");
    assert_eq!(fs::read(output.join("S1_R2.fastq.gz")).unwrap(), b"CCC");
}

#[test]
fn test_run_exits_zero_with_corrupt_archive_in_batch() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("archives");
    let output = dir.path().join("merged");
    fs::create_dir_all(&source).unwrap();

    fs::write(
        source.join("a-broken.tar"),
        b"not a tar archive; padding so the header read has something to chew on...........",
    )
    .unwrap();
    fs::write(
        source.join("b-good.tar"),
        build_tar(&[
            ("S2_EKD7_1.fastq.gz", b"fwd" as &[u8]),
            ("S2_EKD7_2.fastq.gz", b"rev"),
        ]),
    )
    .unwrap();

    lane_merge()
        .arg("run")
        .arg(&source)
        .args(["--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 ok, 1 failed"))
        .stdout(predicate::str::contains("FAILED"))
        .stdout(predicate::str::contains("complete (R1+R2): 1"));
}

#[test]
fn test_run_skip_existing_preserves_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("archives");
    let output = dir.path().join("merged");
    fs::create_dir_all(&source).unwrap();

    fs::write(
        source.join("one.tar"),
        build_tar(&[("A_EKD1_1.fastq.gz", b"new bytes" as &[u8])]),
    )
    .unwrap();

    fs::create_dir_all(&output).unwrap();
    fs::write(output.join("A_R1.fastq.gz"), b"previous run").unwrap();

    lane_merge()
        .arg("run")
        .arg(&source)
        .args(["--output"])
        .arg(&output)
        .arg("--skip-existing")
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped (existing)"));

    assert_eq!(
        fs::read(output.join("A_R1.fastq.gz")).unwrap(),
        b"previous run"
    );
}

#[test]
fn test_classify_previews_grouping() {
    lane_merge()
        .arg("classify")
        .arg("sampleA_EKD12_L001_1.fastq.gz")
        .arg("sampleA_EKD12_L001_2.fastq.gz")
        .arg("sampleB_EKD9.fastq.gz")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 files into 2 samples"))
        .stdout(predicate::str::contains("sampleA:"))
        .stdout(predicate::str::contains("forward: 1 lanes"))
        .stdout(predicate::str::contains("reverse: 1 lanes"))
        .stdout(predicate::str::contains("unknown: 1 lanes"));
}

#[test]
fn test_classify_custom_delimiter() {
    lane_merge()
        .arg("classify")
        .args(["--delimiter", "__"])
        .arg("tumor__runA_1.fastq.gz")
        .assert()
        .success()
        .stdout(predicate::str::contains("tumor:"));
}
