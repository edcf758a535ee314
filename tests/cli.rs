//! End-to-end runs of the `passgen` binary.

use std::process::{Command, Output};

fn passgen(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_passgen"))
        .args(args)
        .output()
        .expect("failed to run passgen")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

fn password(output: &Output) -> String {
    stdout(output)
        .strip_prefix("Generated password: ")
        .and_then(|s| s.strip_suffix('\n'))
        .expect("unexpected stdout")
        .to_string()
}

#[test]
fn all_classes_sixteen_chars() {
    let output = passgen(&["-L", "16", "-u", "-l", "-n", "-s"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stderr(&output).is_empty());

    let password = password(&output);
    assert_eq!(password.len(), 16);
    assert!(password.bytes().all(|b| (33..=126).contains(&b)));
}

#[test]
fn long_flags_with_default_length() {
    let output = passgen(&["--upper", "--lower"]);
    assert_eq!(output.status.code(), Some(0));

    let password = password(&output);
    assert_eq!(password.len(), 8);
    assert!(password.bytes().all(|b| b.is_ascii_alphabetic()));
}

#[test]
fn upper_only() {
    let output = passgen(&["--length", "40", "-u"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(password(&output).bytes().all(|b| b.is_ascii_uppercase()));
}

#[test]
fn no_classes_fails() {
    let output = passgen(&["-L", "12"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(stderr(&output), "Error: illegal choices\n");
}

#[test]
fn short_length_fails() {
    let output = passgen(&["-L", "7", "-u", "-l"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(stderr(&output), "Error: minimum length is 8\n");
}

#[test]
fn length_error_wins_over_empty_charset() {
    let output = passgen(&["-L", "3"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: minimum length is 8\n");
}

#[test]
fn negative_length_fails_validation() {
    let output = passgen(&["-L", "-5", "-n"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Error: minimum length is 8\n");
}

#[test]
fn help_goes_to_stderr() {
    let output = passgen(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());

    let help = stderr(&output);
    assert!(help.contains("passgen -L 16 -u -l -n -s"));
    assert!(help.contains("--symbol"));
}

#[test]
fn version_goes_to_stdout() {
    let output = passgen(&["-V"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        format!("passgen {}\n", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let output = passgen(&["--clipboard"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}

#[test]
fn debug_logs_never_include_the_password() {
    let output = passgen(&["--debug", "-L", "32", "-l", "-n"]);
    assert_eq!(output.status.code(), Some(0));

    let password = password(&output);
    let log = stderr(&output);
    assert!(log.contains("candidates"));
    assert!(!log.contains(&password));
}

#[test]
fn consecutive_runs_differ() {
    let a = password(&passgen(&["-L", "32", "-u", "-l", "-n", "-s"]));
    let b = password(&passgen(&["-L", "32", "-u", "-l", "-n", "-s"]));
    assert_ne!(a, b);
}
