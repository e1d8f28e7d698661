//! Runs the built `jspector` binary.

use std::io::Write;
use std::process::{Command, Stdio};

fn jspector() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_jspector"));
    command.env_remove("JSPECTOR_LOG").env_remove("RUST_LOG");
    command
}

fn run_stdin(command: &mut Command, source: &str) -> std::process::Output {
    let mut child = command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn jspector");
    child
        .stdin
        .take()
        .expect("piped stdin")
        .write_all(source.as_bytes())
        .expect("write stdin");
    child.wait_with_output().expect("wait for jspector")
}

#[test]
fn stdin_to_stdout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let output = run_stdin(
        jspector().current_dir(dir.path()).arg("--client"),
        "var x = 0; x++;",
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "const Proxy = require('jspector');\nvar x = new Proxy.Variable(0);\nx.set(x.get() + 1);\n"
    );
}

#[test]
fn parse_error_exits_non_zero() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("broken.js"), "let = ;").expect("write input");

    let output = jspector()
        .current_dir(dir.path())
        .args(["--no-color", "broken.js"])
        .output()
        .expect("run jspector");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("broken.js:1:"), "unexpected stderr: {stderr}");
}

#[test]
fn out_dir_receives_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("app.cjs"), "var ready = true;").expect("write input");

    let output = jspector()
        .current_dir(dir.path())
        .args(["--out-dir", "dist", "--namespace", "Spy", "app.cjs"])
        .output()
        .expect("run jspector");

    assert!(output.status.success());
    let written =
        std::fs::read_to_string(dir.path().join("dist").join("app.cjs")).expect("output file");
    assert_eq!(written, "var ready = new Spy.Variable(true);\n");
}

#[test]
fn version_flag() {
    let output = jspector().arg("--version").output().expect("run jspector");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("jspector "));
}
