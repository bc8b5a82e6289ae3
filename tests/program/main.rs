use std::{
    io::{self, Write},
    process::{Command, Output, Stdio},
};

use bitalg::{run, BitSet, Error};

fn output_of(input: &str) -> Result<String, Error> {
    let mut out = Vec::new();
    run(input.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

fn run_binary(input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bitalg"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

#[test]
fn concrete_scenario() {
    let input = "3 3 5 1\n1 2 3\n2 3 4\n1 2 3 4 5\n1\n";
    assert_eq!(output_of(input).unwrap(), "2 3 4\n");
}

#[test]
fn all_empty_prints_newline() {
    assert_eq!(output_of("0 0 0 0").unwrap(), "\n");
}

#[test]
fn large_values_survive_pipeline() {
    let input = "2 1 3 0\n5 1000\n77\n5 77 1000\n";
    assert_eq!(output_of(input).unwrap(), "5 77 1000\n");
}

#[test]
fn empty_intersection_operand_empties_result() {
    let input = "2 2 0 0\n1 2\n3 4\n";
    assert_eq!(output_of(input).unwrap(), "\n");
}

#[test]
fn subtrahend_beyond_result_is_ignored() {
    let input = "1 0 1 1\n9\n9\n4000\n";
    assert_eq!(output_of(input).unwrap(), "9\n");
}

#[test]
fn malformed_input_produces_no_output() {
    let mut out = Vec::new();
    let err = run("1 0 0 0 abc".as_bytes(), &mut out).unwrap_err();

    assert!(matches!(err, Error::Input(_)));
    assert!(out.is_empty());
}

#[test]
fn truncated_input_is_an_error() {
    assert!(matches!(output_of("2 0 0 0 1"), Err(Error::Input(_))));
    assert!(matches!(output_of(""), Err(Error::Input(_))));
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn write_failure_is_an_output_error() {
    let err = run("1 1 1 0 3 3 3".as_bytes(), BrokenPipe).unwrap_err();

    match err {
        Error::Output(source) => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn evaluate_matches_run() {
    let s0: BitSet = [1, 2, 3].into_iter().collect();
    let s1: BitSet = [2, 3, 4].into_iter().collect();
    let s2: BitSet = [1, 2, 3, 4, 5].into_iter().collect();
    let s3: BitSet = [1].into_iter().collect();

    let result = bitalg::evaluate(&s0, &s1, &s2, &s3);
    assert_eq!(result.to_string(), "2 3 4");
}

#[test]
fn binary_succeeds() {
    let output = run_binary("3 3 5 1 1 2 3 2 3 4 1 2 3 4 5 1");

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "2 3 4\n");
}

#[test]
fn binary_reports_input_error() {
    let output = run_binary("4 x");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Input error\n");
}

#[test]
fn binary_usage_error_is_distinct_from_output_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_bitalg"))
        .arg("--no-such-flag")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(2));
}
