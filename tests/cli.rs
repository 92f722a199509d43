use std::io::{self, Write};
use std::process::Command;

use classic_sorts::cli::{format_array, parse_numbers, run};
use classic_sorts::{Algorithm, Error};

fn run_to_string(algorithm: Algorithm, numbers: &mut [i32]) -> String {
    let mut out = Vec::new();
    run(algorithm, numbers, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn parse_accepts_signed_numbers() {
    let numbers = parse_numbers(&["5", "-3", "+9", "0", "-2147483648", "2147483647"]).unwrap();
    assert_eq!(numbers, vec![5, -3, 9, 0, i32::MIN, i32::MAX]);
}

#[test]
fn parse_empty() {
    let no_args: [&str; 0] = [];
    assert!(parse_numbers(&no_args).unwrap().is_empty());
}

#[test]
fn parse_fails_fast_on_first_bad_number() {
    let err = parse_numbers(&["1", "two", "3.5"]).unwrap_err();
    match err {
        Error::InvalidNumber {
            position, value, ..
        } => {
            assert_eq!(position, 2);
            assert_eq!(value, "two");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn parse_rejects_overflow() {
    let err = parse_numbers(&["2147483648"]).unwrap_err();
    assert!(matches!(err, Error::InvalidNumber { position: 1, .. }));
    assert!(err.to_string().contains("2147483648"));
}

#[test]
fn format() {
    assert_eq!(format_array(&[]), "");
    assert_eq!(format_array(&[7]), "7");
    assert_eq!(format_array(&[3, -1, 2]), "3, -1, 2");
}

#[test]
fn run_prints_name_before_and_after() {
    let mut numbers = vec![5, -3, 9, 0];
    let out = run_to_string(Algorithm::QuickSort, &mut numbers);

    assert_eq!(out, "quickSort\n5, -3, 9, 0\n-3, 0, 5, 9\n");
    assert_eq!(numbers, vec![-3, 0, 5, 9]);
}

#[test]
fn run_every_sort() {
    for algorithm in Algorithm::SORTS {
        let mut numbers = vec![4, 4, 2, 1, 0, 8, 7, 7];
        let out = run_to_string(algorithm, &mut numbers);

        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                algorithm.name(),
                "4, 4, 2, 1, 0, 8, 7, 7",
                "0, 1, 2, 4, 4, 7, 7, 8"
            ]
        );
    }
}

#[test]
fn run_empty_is_noop() {
    let mut numbers: Vec<i32> = Vec::new();
    let out = run_to_string(Algorithm::HeapSort, &mut numbers);
    assert_eq!(out, "heapSort\n\n\n");
}

#[test]
fn run_build_heap() {
    let mut numbers = vec![1, 2, 3, 4, 5, 6, 7];
    let out = run_to_string(Algorithm::BuildHeap, &mut numbers);
    assert_eq!(out, "buildHeap\n1, 2, 3, 4, 5, 6, 7\n7, 5, 6, 4, 2, 1, 3\n");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn run_reports_write_failure() {
    let mut numbers = vec![2, 1];
    let result = run(Algorithm::InsertionSort, &mut numbers, &mut BrokenPipe);

    match result {
        Err(Error::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::BrokenPipe),
        other => panic!("unexpected result: {other:?}"),
    }
}

// --- binary ---

fn sorter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_sorter"))
}

#[test]
fn binary_sorts() {
    let output = sorter()
        .args(["mergeSort", "3", "-1", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "mergeSort\n3, -1, 2\n-1, 2, 3\n"
    );
}

#[test]
fn binary_accepts_alias() {
    let output = sorter().args(["selection_sort", "2", "1"]).output().unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "selectionSort\n2, 1\n1, 2\n"
    );
}

#[test]
fn binary_rejects_bad_number_before_printing() {
    let output = sorter().args(["bubbleSort", "1", "x"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid number 'x' at position 2"), "{stderr}");
}

#[test]
fn binary_rejects_unknown_algorithm() {
    let output = sorter().args(["bogoSort", "1"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)
        .unwrap()
        .contains("unknown algorithm 'bogoSort'"));
}

#[test]
fn binary_requires_algorithm() {
    let output = sorter().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn binary_rejects_hyphen_garbage() {
    for bad in ["-x", "--foo"] {
        let output = sorter().args(["quickSort", "3", bad, "2"]).output().unwrap();

        assert_eq!(output.status.code(), Some(1), "{bad}");
        assert!(output.stdout.is_empty());
        let stderr = String::from_utf8(output.stderr).unwrap();
        assert!(
            stderr.contains(&format!("invalid number '{bad}' at position 2")),
            "{stderr}"
        );
    }
}

#[test]
fn binary_rejects_leading_hyphen_garbage() {
    let output = sorter().args(["heapSort", "-x"]).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn binary_verbose_logs_to_stderr_only() {
    let output = sorter()
        .env_remove("RUST_LOG")
        .args(["-v", "quickSort", "3", "1", "2"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "quickSort\n3, 1, 2\n1, 2, 3\n"
    );
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("DEBUG"), "{stderr}");
    assert!(!stderr.contains("TRACE"), "{stderr}");
}

#[test]
fn binary_very_verbose_traces() {
    let output = sorter()
        .env_remove("RUST_LOG")
        .args(["-vv", "mergeSort", "2", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(output.stdout.iter().filter(|&&b| b == b'\n').count(), 3);
    assert!(String::from_utf8(output.stderr).unwrap().contains("TRACE"));
}

#[test]
fn binary_rust_log_overrides_verbose() {
    let output = sorter()
        .env("RUST_LOG", "off")
        .args(["-v", "quickSort", "3", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}

#[test]
fn binary_quiet_by_default() {
    let output = sorter()
        .env_remove("RUST_LOG")
        .args(["quickSort", "3", "1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output.stderr.is_empty());
}
