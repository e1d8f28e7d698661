//! End-to-end tests: source in, instrumented source out.

use jspector_transforms::{
    PassStats, ProxyNames, TransformError, TransformOptions, transform, transform_with_stats,
};

fn rewrite(source: &str) -> String {
    transform(source, &TransformOptions::default()).expect("source should transform")
}

fn rewrite_with(source: &str, options: &TransformOptions) -> String {
    transform(source, options).expect("source should transform")
}

// =============================================================================
// Declarators
// =============================================================================

#[test]
fn test_declaration_without_initializer() {
    assert_eq!(rewrite("var a;"), "var a = new Proxy.Variable();\n");
}

#[test]
fn test_literal_initializer() {
    assert_eq!(rewrite("var a = 42;"), "var a = new Proxy.Variable(42);\n");
    assert_eq!(
        rewrite("let s = 'hi', t;"),
        "let s = new Proxy.Variable('hi'), t = new Proxy.Variable();\n"
    );
}

#[test]
fn test_function_valued_initializers_use_function_proxy() {
    assert_eq!(
        rewrite("var a = x => x;"),
        "var a = new Proxy.Function(x => x);\n"
    );
    assert_eq!(
        rewrite("var f = function (n) { return n; };"),
        "var f = new Proxy.Function(function (n) {\n  return n;\n});\n"
    );
}

#[test]
fn test_destructuring_declarator_is_left_alone() {
    assert_eq!(rewrite("var {a} = o;"), "var {a} = o;\n");
}

#[test]
fn test_for_in_head_is_left_alone() {
    assert_eq!(rewrite("for (var k in o) f(k);"), "for (var k in o) f(k);\n");
}

#[test]
fn test_for_head_declarator_and_update() {
    assert_eq!(
        rewrite("for (var i = 0; i < 3; i++) {}"),
        "for (var i = new Proxy.Variable(0); i < 3; i.set(i.get() + 1)) {}\n"
    );
}

// =============================================================================
// Call sites
// =============================================================================

#[test]
fn test_function_literal_arguments_are_wrapped() {
    assert_eq!(
        rewrite("users.fn(function (u) { return u.name; }, 3, y);"),
        "users.fn(new Proxy.Function(function (u) {\n  return u.name;\n}), 3, y);\n"
    );
}

#[test]
fn test_function_literal_callee_is_wrapped() {
    assert_eq!(
        rewrite("(x => x + 1)(0);"),
        "new Proxy.Function(x => x + 1)(0);\n"
    );
}

#[test]
fn test_nested_call_sites_are_wrapped() {
    assert_eq!(
        rewrite("a(function () { b(c => c); });"),
        "a(new Proxy.Function(function () {\n  b(new Proxy.Function(c => c));\n}));\n"
    );
}

#[test]
fn test_call_inside_wrapped_initializer_is_wrapped() {
    assert_eq!(
        rewrite("var a = f(x => x);"),
        "var a = new Proxy.Variable(f(new Proxy.Function(x => x)));\n"
    );
}

#[test]
fn test_identifier_call_arguments_untouched_by_default() {
    assert_eq!(
        rewrite("var x = 1; [].push(x);"),
        "var x = new Proxy.Variable(1);\n[].push(x);\n"
    );
}

#[test]
fn test_unwrap_call_arguments() {
    let options = TransformOptions {
        unwrap_call_arguments: true,
        ..TransformOptions::default()
    };
    assert_eq!(
        rewrite_with("var x = 1; [].push(x);", &options),
        "var x = new Proxy.Variable(1);\n[].push(x.get());\n"
    );
    // Function proxies are callable and stay as they are.
    assert_eq!(
        rewrite_with("var f = () => 1; g(f, z);", &options),
        "var f = new Proxy.Function(() => 1);\ng(f, z);\n"
    );
}

// =============================================================================
// Function declarations
// =============================================================================

#[test]
fn test_function_declaration_becomes_const_binding() {
    assert_eq!(
        rewrite("function sum(x, y) { return x + y; }"),
        "const sum = new Proxy.Function(function sum(x, y) {\n  return x + y;\n});\n"
    );
}

#[test]
fn test_nested_function_body_is_rewritten() {
    assert_eq!(
        rewrite("function outer() { var inner = 1; function helper() {} return inner; }"),
        "const outer = new Proxy.Function(function outer() {\n  \
         var inner = new Proxy.Variable(1);\n  \
         const helper = new Proxy.Function(function helper() {});\n  \
         return inner;\n});\n"
    );
}

// =============================================================================
// Writes
// =============================================================================

#[test]
fn test_plain_assignment() {
    assert_eq!(
        rewrite("var x = 42; x = 0;"),
        "var x = new Proxy.Variable(42);\nx.set(0);\n"
    );
    assert_eq!(
        rewrite("var x = 0; if (ok) x = 1;"),
        "var x = new Proxy.Variable(0);\nif (ok) x.set(1);\n"
    );
}

#[test]
fn test_chained_assignment() {
    assert_eq!(rewrite("a = b = 1;"), "a.set(b.set(1));\n");
}

#[test]
fn test_compound_assignment() {
    assert_eq!(
        rewrite("var x = 0; x += 2;"),
        "var x = new Proxy.Variable(0);\nx.set(x.get() + 2);\n"
    );
    assert_eq!(rewrite("x -= 1;"), "x.set(x.get() - 1);\n");
    assert_eq!(rewrite("x *= 3;"), "x.set(x.get() * 3);\n");
    assert_eq!(rewrite("x /= 4;"), "x.set(x.get() / 4);\n");
    assert_eq!(rewrite("x %= 2;"), "x.set(x.get() % 2);\n");
}

#[test]
fn test_unsupported_compound_assignments_pass_through() {
    assert_eq!(rewrite("x **= 2;"), "x **= 2;\n");
    assert_eq!(rewrite("x |= 1;"), "x |= 1;\n");
    assert_eq!(rewrite("x += y;"), "x += y;\n");
}

#[test]
fn test_member_assignment_passes_through() {
    assert_eq!(rewrite("o.a = 1;"), "o.a = 1;\n");
    assert_eq!(
        rewrite("class A { m() { this.x = 1; } }"),
        "class A {\n  m() {\n    this.x = 1;\n  }\n}\n"
    );
}

#[test]
fn test_increment_and_decrement() {
    let expected = "var x = new Proxy.Variable(0);\nx.set(x.get() + 1);\n";
    assert_eq!(rewrite("var x = 0; ++x;"), expected);
    assert_eq!(rewrite("var x = 0; x++;"), expected);
    assert_eq!(rewrite("x--;"), "x.set(x.get() - 1);\n");
    assert_eq!(rewrite("--x;"), "x.set(x.get() - 1);\n");
    assert_eq!(rewrite("o.count++;"), "o.count++;\n");
}

// =============================================================================
// Constructor arguments
// =============================================================================

#[test]
fn test_identifier_initializer_is_unwrapped() {
    assert_eq!(
        rewrite("var x = 1; var y = x;"),
        "var x = new Proxy.Variable(1);\nvar y = new Proxy.Variable(x.get());\n"
    );
}

#[test]
fn test_non_identifier_initializer_is_untouched() {
    assert_eq!(
        rewrite("var y = x + 1;"),
        "var y = new Proxy.Variable(x + 1);\n"
    );
}

// =============================================================================
// Options
// =============================================================================

#[test]
fn test_client_import_is_prepended_once() {
    let options = TransformOptions::default().with_client(true);
    assert_eq!(
        rewrite_with("var a = 1; function f() { var b; }", &options),
        "const Proxy = require('jspector');\n\
         var a = new Proxy.Variable(1);\n\
         const f = new Proxy.Function(function f() {\n  var b = new Proxy.Variable();\n});\n"
    );
}

#[test]
fn test_no_client_import_by_default() {
    assert!(!rewrite("var a = 1;").contains("require"));
}

#[test]
fn test_custom_names() {
    let options = TransformOptions {
        inject_client: true,
        names: ProxyNames {
            namespace: "Spy".to_string(),
            runtime_module: "./spy-runtime".to_string(),
        },
        ..TransformOptions::default()
    };
    assert_eq!(
        rewrite_with("var y = x;", &options),
        "const Spy = require('./spy-runtime');\nvar y = new Spy.Variable(x.get());\n"
    );
}

#[test]
fn test_options_deserialize_from_camel_case_json() {
    let options: TransformOptions = serde_json::from_str(
        r#"{
            "injectClient": true,
            "namespace": "P",
            "unwrapCallArguments": true,
            "printer": { "indent": "    " }
        }"#,
    )
    .expect("valid options");
    assert!(options.inject_client);
    assert!(options.unwrap_call_arguments);
    assert_eq!(options.names.namespace, "P");
    assert_eq!(options.names.runtime_module, "jspector");
    assert_eq!(options.printer.indent, "    ");
    assert_eq!(options.printer.new_line, "\n");
}

#[test]
fn test_printer_options_are_used() {
    let mut options = TransformOptions::default();
    options.printer.indent = "    ".to_string();
    assert_eq!(
        rewrite_with("function f() { return 1; }", &options),
        "const f = new Proxy.Function(function f() {\n    return 1;\n});\n"
    );
}

// =============================================================================
// Stats and errors
// =============================================================================

#[test]
fn test_pass_stats() {
    let output = transform_with_stats(
        "var a = 1; a = 2; a++; function f() {} g(() => 0);",
        &TransformOptions::default(),
    )
    .expect("source should transform");
    assert_eq!(
        output.stats,
        PassStats {
            declarators_wrapped: 1,
            function_literals_wrapped: 1,
            call_arguments_unwrapped: 0,
            functions_hoisted: 1,
            assignments_rewritten: 1,
            updates_rewritten: 1,
            constructor_arguments_unwrapped: 0,
            client_injected: false,
        }
    );
    assert_eq!(output.stats.total(), 5);
}

#[test]
fn test_parse_error_is_reported_with_position() {
    let err = transform("var = ;", &TransformOptions::default()).expect_err("invalid source");
    let TransformError::Parse(parse_error) = err;
    assert_eq!(parse_error.position.line, 1);
    assert_eq!(parse_error.position.column, 5);
}

#[test]
fn test_output_is_deterministic() {
    let source = "var a = 1; function f(x) { return x; } a += 2; f(a);";
    assert_eq!(rewrite(source), rewrite(source));
}
