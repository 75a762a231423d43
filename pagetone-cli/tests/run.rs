//! End-to-end runs over temporary directories.

use std::fs;
use std::path::Path;

use pagetone_cli::{run, Cli};

fn cli(input: &Path, outfile: &Path) -> Cli {
    Cli {
        path: input.to_path_buf(),
        outfile: outfile.to_path_buf(),
        strip_proper_nouns: false,
    }
}

fn fields(line: &str) -> (String, Vec<f64>) {
    let mut parts = line.split(',');
    let filename = parts.next().unwrap().to_string();
    let scores = parts.map(|p| p.parse::<f64>().unwrap()).collect();
    (filename, scores)
}

#[test]
fn writes_one_row_per_file_in_filename_order() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(
        input.path().join("b.txt"),
        "You are great! She helped her.",
    )
    .unwrap();
    fs::write(input.path().join("a.txt"), "").unwrap();
    let outfile = output.path().join("metrics.csv");

    let summary = run(&cli(input.path(), &outfile)).unwrap();
    assert_eq!(summary.rows_written, 2);
    assert_eq!(summary.files_failed, 0);

    let written = fs::read_to_string(&outfile).unwrap();
    let mut lines = written.lines();
    assert_eq!(
        lines.next(),
        Some("filename,readability,negative_polarity,exclamation_ratio,second_person_ratio,gender_balance")
    );

    // Empty file: every metric at its neutral value, row still present
    let (name, scores) = fields(lines.next().unwrap());
    assert_eq!(name, "a.txt");
    assert_eq!(scores, vec![0.0, 0.0, 0.0, 0.0, 1.0]);

    let (name, scores) = fields(lines.next().unwrap());
    assert_eq!(name, "b.txt");
    assert!((scores[2] - 0.5).abs() < 1e-12);
    assert!((scores[3] - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(scores[4], 0.0);

    assert_eq!(lines.next(), None);
}

#[test]
fn repeated_runs_are_byte_identical() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("one.txt"), "Apply today! You belong here.").unwrap();
    fs::write(input.path().join("two.txt"), "Dr. Chen runs the lab. It is great.").unwrap();

    let first = output.path().join("first.csv");
    let second = output.path().join("second.csv");
    run(&cli(input.path(), &first)).unwrap();
    run(&cli(input.path(), &second)).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn unreadable_file_fails_its_row_and_the_run_continues() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("good.txt"), "Fine words here.").unwrap();
    fs::write(input.path().join("broken.txt"), [0xff, 0xfe, 0x00]).unwrap();
    let outfile = output.path().join("metrics.csv");

    let summary = run(&cli(input.path(), &outfile)).unwrap();
    assert_eq!(summary.rows_written, 1);
    assert_eq!(summary.files_failed, 1);

    let written = fs::read_to_string(&outfile).unwrap();
    assert!(written.contains("good.txt"));
    assert!(!written.contains("broken.txt"));
}

#[test]
fn subdirectories_are_skipped_not_failed() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(input.path().join("page.txt"), "Welcome!").unwrap();
    fs::create_dir(input.path().join("assets")).unwrap();
    let outfile = output.path().join("metrics.csv");

    let summary = run(&cli(input.path(), &outfile)).unwrap();
    assert_eq!(summary.rows_written, 1);
    assert_eq!(summary.files_failed, 0);
}

#[test]
fn missing_input_directory_fails_the_run() {
    let scratch = tempfile::tempdir().unwrap();
    let outfile = scratch.path().join("metrics.csv");
    let missing = scratch.path().join("not-there");
    assert!(run(&cli(&missing, &outfile)).is_err());
}

#[test]
fn proper_noun_stripping_changes_only_readability() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    fs::write(
        input.path().join("names.txt"),
        "We met Bartholomew Vanderbilt-Rothschild. We met Konstantinopolous again.",
    )
    .unwrap();

    let kept_path = output.path().join("kept.csv");
    let stripped_path = output.path().join("stripped.csv");
    run(&cli(input.path(), &kept_path)).unwrap();
    let mut stripping = cli(input.path(), &stripped_path);
    stripping.strip_proper_nouns = true;
    run(&stripping).unwrap();

    let kept = fs::read_to_string(&kept_path).unwrap();
    let stripped = fs::read_to_string(&stripped_path).unwrap();
    let (_, kept_scores) = fields(kept.lines().nth(1).unwrap());
    let (_, stripped_scores) = fields(stripped.lines().nth(1).unwrap());
    assert!(stripped_scores[0] < kept_scores[0]);
    assert_eq!(kept_scores[1..], stripped_scores[1..]);
}
