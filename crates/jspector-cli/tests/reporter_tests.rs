use super::*;
use jspector_parser::parse_program;

#[test]
fn formats_location_message_and_snippet() {
    let source = "var = ;";
    let error = parse_program(source).expect_err("invalid source");
    let reporter = Reporter::new(false);

    let formatted = reporter.format_parse_error("input.js", source, &error);
    assert_eq!(
        formatted,
        format!("input.js:1:5 - error: {}\n\n1 var = ;\n      ~", error.message)
    );
}

#[test]
fn snippet_uses_the_error_line() {
    let source = "var a = 1;\nvar b = );\n";
    let error = parse_program(source).expect_err("invalid source");
    let reporter = Reporter::new(false);

    let formatted = reporter.format_parse_error("app.js", source, &error);
    assert!(formatted.starts_with("app.js:2:9 - error: "));
    assert!(formatted.contains("\n2 var b = );\n"));
}

#[test]
fn missing_line_omits_snippet() {
    let error = parse_program("var = ;").expect_err("invalid source");
    let reporter = Reporter::new(false);

    let formatted = reporter.format_parse_error("<stdin>", "", &error);
    assert_eq!(formatted, format!("<stdin>:1:5 - error: {}", error.message));
}

#[test]
fn file_error_has_no_location() {
    let reporter = Reporter::new(false);
    assert_eq!(
        reporter.format_file_error("lib/bad.js", "stream did not contain valid UTF-8"),
        "lib/bad.js - error: stream did not contain valid UTF-8"
    );
}
