use std::{
    env, fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

fn monty<I, S>(dir: &Path, args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_monty"))
        .current_dir(dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

/// Writes `program` into the temp dir under a name unique to this process
fn program_file(name: &str, program: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("monty-cli-{}-{}", std::process::id(), name));
    fs::write(&path, program).unwrap();
    path
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn usage_without_a_file() {
    let output = monty(&env::temp_dir(), Vec::<&str>::new());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Usage: monty file\n");
    assert_eq!(stdout(&output), "");
}

#[test]
fn usage_with_two_files() {
    let first = program_file("first.m", "push 1\npall\n");
    let second = program_file("second.m", "push 2\npall\n");
    let output = monty(&env::temp_dir(), [&first, &second]);
    fs::remove_file(&first).unwrap();
    fs::remove_file(&second).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "Usage: monty file\n");
    assert_eq!(stdout(&output), "");
}

#[test]
fn successful_run_exits_zero() {
    let path = program_file("ok.m", "push 1\npush 2\nadd\npall\n");
    let output = monty(&env::temp_dir(), [&path]);
    fs::remove_file(&path).unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn fault_splits_stdout_and_stderr() {
    let path = program_file("fault.m", "push 1\npall\npint\nnop\npall\n");
    let output = monty(&env::temp_dir(), [&path]);
    fs::remove_file(&path).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1\n1\n");
    assert_eq!(stderr(&output), "L4: unknown instruction nop\n");
}

#[test]
fn missing_file() {
    let path = env::temp_dir().join(format!("monty-cli-{}-missing.m", std::process::id()));
    let output = monty(&env::temp_dir(), [&path]);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stderr(&output),
        format!("Error: Can't open file {}\n", path.display())
    );
    assert_eq!(stdout(&output), "");
}

#[test]
fn file_name_starting_with_a_hyphen() {
    let dir = env::temp_dir();
    let name = format!("-monty-cli-{}.m", std::process::id());
    fs::write(dir.join(&name), "push 7\npint\n").unwrap();
    let output = monty(&dir, [&name]);
    fs::remove_file(dir.join(&name)).unwrap();

    assert!(output.status.success(), "{}", stderr(&output));
    assert_eq!(stdout(&output), "7\n");
}
