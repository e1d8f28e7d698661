use super::*;

#[test]
fn parses_full_config() {
    let config = parse_config(
        r#"{
            "namespace": "Spy",
            "runtimeModule": "./spy",
            "injectClient": true,
            "unwrapCallArguments": true,
            "outDir": "out",
            "indent": "\t"
        }"#,
    )
    .expect("config should parse");

    assert_eq!(config.namespace.as_deref(), Some("Spy"));
    assert_eq!(config.runtime_module.as_deref(), Some("./spy"));
    assert_eq!(config.inject_client, Some(true));
    assert_eq!(config.unwrap_call_arguments, Some(true));
    assert_eq!(config.out_dir.as_deref(), Some(Path::new("out")));
    assert_eq!(config.indent.as_deref(), Some("\t"));
}

#[test]
fn empty_config_is_all_defaults() {
    let config = parse_config("{}").expect("empty object is valid");
    assert_eq!(config, JspectorConfig::default());
}

#[test]
fn rejects_unknown_keys() {
    assert!(parse_config(r#"{ "nameSpace": "P" }"#).is_err());
}

#[test]
fn load_resolves_out_dir_against_config_directory() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, r#"{ "outDir": "build" }"#).expect("write config");

    assert_eq!(find_config(dir.path()).as_deref(), Some(path.as_path()));
    let config = load_config(&path).expect("config should load");
    assert_eq!(config.out_dir, Some(dir.path().join("build")));
}

#[test]
fn missing_config_is_not_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = load_for_args(&CliArgs::default(), dir.path()).expect("no config is fine");
    assert_eq!(config, JspectorConfig::default());
}

#[test]
fn flags_override_file_values() {
    let config = JspectorConfig {
        namespace: Some("FromFile".to_string()),
        runtime_module: Some("file-runtime".to_string()),
        inject_client: Some(false),
        out_dir: Some(PathBuf::from("file-out")),
        indent: Some("    ".to_string()),
        ..JspectorConfig::default()
    };
    let args = CliArgs {
        namespace: Some("FromFlag".to_string()),
        client: true,
        out_dir: Some(PathBuf::from("flag-out")),
        ..CliArgs::default()
    };
    let cwd = Path::new("/work");

    let resolved = resolve_options(&args, &config, cwd);
    assert_eq!(resolved.transform.names.namespace, "FromFlag");
    assert_eq!(resolved.transform.names.runtime_module, "file-runtime");
    assert!(resolved.transform.inject_client);
    assert!(!resolved.transform.unwrap_call_arguments);
    assert_eq!(resolved.transform.printer.indent, "    ");
    assert_eq!(resolved.out_dir, Some(cwd.join("flag-out")));
}

#[test]
fn defaults_without_config_or_flags() {
    let resolved = resolve_options(
        &CliArgs::default(),
        &JspectorConfig::default(),
        Path::new("/work"),
    );
    assert_eq!(resolved.transform, TransformOptions::default());
    assert!(resolved.out_dir.is_none());
}
