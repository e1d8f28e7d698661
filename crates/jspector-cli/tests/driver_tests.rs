use super::*;
use std::fs;

struct Captured {
    outcome: DriverOutcome,
    stdout: String,
    stderr: String,
}

fn run_with(args: &CliArgs, cwd: &Path, stdin: &str) -> Captured {
    let mut input = stdin.as_bytes();
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let outcome = {
        let mut io = DriverIo {
            stdin: &mut input,
            stdout: &mut stdout,
            stderr: &mut stderr,
            color: false,
        };
        run(args, cwd, &mut io).expect("driver should not fail")
    };
    Captured {
        outcome,
        stdout: String::from_utf8(stdout).expect("utf-8 stdout"),
        stderr: String::from_utf8(stderr).expect("utf-8 stderr"),
    }
}

#[test]
fn rewrites_stdin_to_stdout() {
    let dir = tempfile::tempdir().expect("temp dir");
    let captured = run_with(&CliArgs::default(), dir.path(), "var a = 1; a += 2;");

    assert_eq!(
        captured.outcome,
        DriverOutcome {
            processed: 1,
            failed: 0
        }
    );
    assert_eq!(
        captured.stdout,
        "var a = new Proxy.Variable(1);\na.set(a.get() + 2);\n"
    );
    assert!(captured.stderr.is_empty());
}

#[test]
fn stdin_parse_error_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let captured = run_with(&CliArgs::default(), dir.path(), "var = ;");

    assert!(!captured.outcome.success());
    assert!(captured.stdout.is_empty());
    assert!(captured.stderr.starts_with("<stdin>:1:5 - error: "));
    assert!(captured.stderr.ends_with("\nFound 1 error.\n"));
}

#[test]
fn rewrites_directory_into_out_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("lib")).expect("create src");
    fs::write(src.join("main.js"), "function main() { return 1; }").expect("write main");
    fs::write(src.join("lib").join("util.mjs"), "var x;").expect("write util");
    fs::write(src.join("notes.txt"), "not a script").expect("write notes");

    let args = CliArgs {
        inputs: vec![PathBuf::from("src")],
        out_dir: Some(PathBuf::from("out")),
        client: true,
        ..CliArgs::default()
    };
    let captured = run_with(&args, dir.path(), "");

    assert_eq!(captured.outcome.processed, 2);
    assert!(captured.outcome.success());
    assert!(captured.stdout.is_empty());

    let main = fs::read_to_string(dir.path().join("out").join("main.js")).expect("main output");
    assert_eq!(
        main,
        "const Proxy = require('jspector');\n\
         const main = new Proxy.Function(function main() {\n  return 1;\n});\n"
    );
    let util = fs::read_to_string(dir.path().join("out").join("lib").join("util.mjs"))
        .expect("util output");
    assert_eq!(
        util,
        "const Proxy = require('jspector');\nvar x = new Proxy.Variable();\n"
    );
    assert!(!dir.path().join("out").join("notes.txt").exists());
}

#[test]
fn bad_file_does_not_stop_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("a.js"), "var a = ;").expect("write a");
    fs::write(dir.path().join("b.js"), "b = 2;").expect("write b");

    let args = CliArgs {
        inputs: vec![PathBuf::from("a.js"), PathBuf::from("b.js")],
        ..CliArgs::default()
    };
    let captured = run_with(&args, dir.path(), "");

    assert_eq!(
        captured.outcome,
        DriverOutcome {
            processed: 2,
            failed: 1
        }
    );
    assert_eq!(captured.stdout, "b.set(2);\n");
    assert!(captured.stderr.starts_with("a.js:1:9 - error: "));
}

#[test]
fn config_file_in_cwd_is_used() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join(config::CONFIG_FILE_NAME),
        r#"{ "namespace": "Spy", "indent": "    " }"#,
    )
    .expect("write config");

    let captured = run_with(
        &CliArgs::default(),
        dir.path(),
        "function f() { return 1; }",
    );
    assert_eq!(
        captured.stdout,
        "const f = new Spy.Function(function f() {\n    return 1;\n});\n"
    );
}

#[test]
fn dump_ast_writes_json() {
    let dir = tempfile::tempdir().expect("temp dir");
    let args = CliArgs {
        dump_ast: true,
        ..CliArgs::default()
    };
    let captured = run_with(&args, dir.path(), "x++;");

    let tree: serde_json::Value =
        serde_json::from_str(&captured.stdout).expect("stdout should be JSON");
    assert_eq!(tree["type"], "Program");
    assert_eq!(tree["body"][0]["type"], "ExpressionStatement");
    assert_eq!(tree["body"][0]["expression"]["type"], "CallExpression");
}

#[test]
fn emit_runtime_without_inputs_skips_stdin() {
    let dir = tempfile::tempdir().expect("temp dir");
    let args = CliArgs {
        emit_runtime: Some(PathBuf::from("vendor/jspector.js")),
        ..CliArgs::default()
    };
    let captured = run_with(&args, dir.path(), "this is not javascript (");

    assert_eq!(captured.outcome, DriverOutcome::default());
    let written =
        fs::read_to_string(dir.path().join("vendor").join("jspector.js")).expect("runtime");
    assert_eq!(written, runtime::RUNTIME_SOURCE);
    assert!(written.contains("module.exports"));
    assert!(written.contains("this.value = cloneValue(initialValue);"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = discover_sources(&[PathBuf::from("nope.js")], dir.path())
        .expect_err("missing input should fail");
    assert!(err.to_string().contains("nope.js"));
}

#[test]
fn output_path_for_tree_dump() {
    assert_eq!(
        output_path(Path::new("out"), Path::new("a/b.js"), true),
        PathBuf::from("out/a/b.js.json")
    );
    assert_eq!(
        output_path(Path::new("out"), Path::new("b.js"), false),
        PathBuf::from("out/b.js")
    );
}

#[test]
fn same_named_files_keep_their_directories() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::create_dir_all(dir.path().join("a")).expect("create a");
    fs::create_dir_all(dir.path().join("b")).expect("create b");
    fs::write(dir.path().join("a").join("x.js"), "var a = 1;").expect("write a/x.js");
    fs::write(dir.path().join("b").join("x.js"), "var b = 2;").expect("write b/x.js");

    let args = CliArgs {
        inputs: vec![PathBuf::from("a/x.js"), PathBuf::from("./b/x.js")],
        out_dir: Some(PathBuf::from("out")),
        ..CliArgs::default()
    };
    let captured = run_with(&args, dir.path(), "");
    assert!(captured.outcome.success());

    let out = dir.path().join("out");
    assert_eq!(
        fs::read_to_string(out.join("a").join("x.js")).expect("a output"),
        "var a = new Proxy.Variable(1);\n"
    );
    assert_eq!(
        fs::read_to_string(out.join("b").join("x.js")).expect("b output"),
        "var b = new Proxy.Variable(2);\n"
    );
    assert!(!out.join("x.js").exists());
}

#[test]
fn colliding_outputs_are_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    for root in ["one", "two"] {
        fs::create_dir_all(dir.path().join(root)).expect("create input dir");
        fs::write(dir.path().join(root).join("x.js"), "var x;").expect("write x.js");
    }

    let args = CliArgs {
        inputs: vec![PathBuf::from("one"), PathBuf::from("two")],
        out_dir: Some(PathBuf::from("out")),
        ..CliArgs::default()
    };
    let mut input: &[u8] = b"";
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let mut io = DriverIo {
        stdin: &mut input,
        stdout: &mut stdout,
        stderr: &mut stderr,
        color: false,
    };
    let err = run(&args, dir.path(), &mut io).expect_err("colliding outputs should fail");
    assert!(err.to_string().contains("would overwrite"), "unexpected error: {err}");
    assert!(!dir.path().join("out").exists());
}

#[test]
fn colliding_inputs_are_fine_without_out_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("x.js"), "x = 1;").expect("write x.js");

    let args = CliArgs {
        inputs: vec![PathBuf::from("x.js"), PathBuf::from("x.js")],
        ..CliArgs::default()
    };
    let captured = run_with(&args, dir.path(), "");
    assert_eq!(captured.stdout, "x.set(1);\nx.set(1);\n");
}

#[test]
fn unreadable_file_does_not_stop_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("a.js"), [0xff, 0xfe, b'x']).expect("write a");
    fs::write(dir.path().join("b.js"), "b = 2;").expect("write b");

    let args = CliArgs {
        inputs: vec![PathBuf::from("a.js"), PathBuf::from("b.js")],
        ..CliArgs::default()
    };
    let captured = run_with(&args, dir.path(), "");

    assert_eq!(
        captured.outcome,
        DriverOutcome {
            processed: 2,
            failed: 1
        }
    );
    assert_eq!(captured.stdout, "b.set(2);\n");
    assert!(captured.stderr.starts_with("a.js - error: failed to read file: "));
    assert!(captured.stderr.ends_with("\nFound 1 error.\n"));
}

#[test]
fn file_output_path_stays_below_out_dir() {
    let cwd = Path::new("/work");
    assert_eq!(
        file_output_path(Path::new("/work/src/app.js"), cwd),
        PathBuf::from("src/app.js")
    );
    assert_eq!(
        file_output_path(Path::new("/work/../shared/app.js"), cwd),
        PathBuf::from("app.js")
    );
    assert_eq!(
        file_output_path(Path::new("/elsewhere/app.js"), cwd),
        PathBuf::from("app.js")
    );
}
