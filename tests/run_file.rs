use std::{env, fs, path::PathBuf};

use monty::{run_file, Fault, MontyError};

/// Writes `program` to a file in the temp directory and returns its path
fn program_file(name: &str, program: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("monty-{}-{}.m", std::process::id(), name));
    fs::write(&path, program).unwrap();
    path
}

fn run(name: &str, program: &str) -> (String, Result<(), MontyError>) {
    let path = program_file(name, program);
    let mut out = Vec::new();
    let result = run_file(&path, &mut out);
    fs::remove_file(&path).unwrap();
    (String::from_utf8(out).unwrap(), result)
}

#[test]
fn runs_a_whole_file() {
    let program = "\
push 1
push 2
push 3
pall
# comment line

add
pint
queue
push 10
pall
";
    let (output, result) = run("whole", program);
    result.unwrap();
    assert_eq!(output, "3\n2\n1\n5\n5\n1\n10\n");
}

#[test]
fn output_before_a_fault_is_kept() {
    let (output, result) = run("fault", "push 65\npchar\npop\npint\npall\n");
    assert_eq!(output, "A\n");

    let err = result.unwrap_err();
    assert_eq!(err.fault(), Some(&Fault::Underflow(monty::token::Op::Pint)));
    assert_eq!(err.to_string(), "L4: can't pint, stack empty");
}

#[test]
fn windows_line_endings() {
    let (output, result) = run("crlf", "push 1\r\npush 2\r\nadd\r\npall\r\n");
    result.unwrap();
    assert_eq!(output, "3\n");
}

#[test]
fn missing_file() {
    let path = env::temp_dir().join("monty-does-not-exist.m");
    let err = run_file(&path, Vec::<u8>::new()).unwrap_err();
    assert!(matches!(err, MontyError::OpenFile(_)));
    assert_eq!(
        err.to_string(),
        format!("Error: Can't open file {}", path.display())
    );
}

#[test]
fn invalid_utf8_is_replaced() {
    let path = env::temp_dir().join(format!("monty-{}-latin1.m", std::process::id()));
    fs::write(&path, b"push 1\n\xffop\npall\n").unwrap();
    let mut out = Vec::new();
    let err = run_file(&path, &mut out).unwrap_err();
    fs::remove_file(&path).unwrap();

    assert_eq!(err.to_string(), "L2: unknown instruction \u{FFFD}op");
    assert!(out.is_empty());
}
