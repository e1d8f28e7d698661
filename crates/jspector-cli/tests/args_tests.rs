use clap::Parser;
use std::path::Path;

use super::CliArgs;

#[test]
fn parses_defaults() {
    let args = CliArgs::try_parse_from(["jspector"]).expect("default args should parse");

    assert!(args.inputs.is_empty());
    assert!(args.out_dir.is_none());
    assert!(args.config.is_none());
    assert!(args.namespace.is_none());
    assert!(!args.client);
    assert!(!args.unwrap_call_arguments);
    assert!(!args.dump_ast);
}

#[test]
fn parses_common_flags() {
    let args = CliArgs::try_parse_from([
        "jspector",
        "--out-dir",
        "dist",
        "--client",
        "--namespace",
        "Spy",
        "--runtime-module",
        "./runtime.js",
        "--unwrap-call-arguments",
        "--emit-runtime",
        "dist/runtime.js",
        "src",
        "main.js",
    ])
    .expect("flagged args should parse");

    assert_eq!(args.out_dir.as_deref(), Some(Path::new("dist")));
    assert!(args.client);
    assert_eq!(args.namespace.as_deref(), Some("Spy"));
    assert_eq!(args.runtime_module.as_deref(), Some("./runtime.js"));
    assert!(args.unwrap_call_arguments);
    assert_eq!(args.emit_runtime.as_deref(), Some(Path::new("dist/runtime.js")));
    assert_eq!(
        args.inputs,
        vec![Path::new("src").to_path_buf(), Path::new("main.js").to_path_buf()]
    );
}

#[test]
fn accepts_camel_case_aliases() {
    let args = CliArgs::try_parse_from(["jspector", "--outDir", "out", "--dumpAst"])
        .expect("aliases should parse");

    assert_eq!(args.out_dir.as_deref(), Some(Path::new("out")));
    assert!(args.dump_ast);
}

#[test]
fn rejects_unknown_flag() {
    assert!(CliArgs::try_parse_from(["jspector", "--target", "es5"]).is_err());
}
