use super::*;
use jspector_parser::parse_program;

fn print(source: &str) -> String {
    let program = parse_program(source).expect("source should parse");
    print_program(&program)
}

#[test]
fn test_variable_declarations() {
    assert_eq!(print("var a = 1, b;"), "var a = 1, b;\n");
    assert_eq!(print("let o = {};"), "let o = {};\n");
}

#[test]
fn test_anonymous_function_argument() {
    assert_eq!(
        print("users.fn(function(u) { return u.name; });"),
        "users.fn(function (u) {\n  return u.name;\n});\n"
    );
}

#[test]
fn test_arrow_callee_is_parenthesized() {
    assert_eq!(print("(x => x + 1)(0);"), "(x => x + 1)(0);\n");
    assert_eq!(print("(function () {})();"), "(function () {})();\n");
}

#[test]
fn test_arrow_at_statement_start_is_parenthesized() {
    assert_eq!(
        print("async (a, b) => { await a; };"),
        "(async (a, b) => {\n  await a;\n});\n"
    );
}

#[test]
fn test_arrow_returning_object_literal() {
    assert_eq!(
        print("var f = () => ({a: 1});"),
        "var f = () => ({\n  a: 1\n});\n"
    );
}

#[test]
fn test_single_statement_bodies_stay_inline() {
    assert_eq!(
        print("while (++i <= x) acc.push(i);"),
        "while (++i <= x) acc.push(i);\n"
    );
    assert_eq!(
        print("if (a) b(); else { c(); }"),
        "if (a) b(); else {\n  c();\n}\n"
    );
    assert_eq!(print("do x++; while (x < 5);"), "do x++; while (x < 5);\n");
}

#[test]
fn test_precedence_parentheses() {
    assert_eq!(print("(a + b) * c;"), "(a + b) * c;\n");
    assert_eq!(print("a - (b - c);"), "a - (b - c);\n");
    assert_eq!(print("a - b - c;"), "a - b - c;\n");
    assert_eq!(print("a ** b ** c;"), "a ** b ** c;\n");
    assert_eq!(print("(a ** b) ** c;"), "(a ** b) ** c;\n");
    assert_eq!(print("(a || b) && c;"), "(a || b) && c;\n");
    assert_eq!(print("(a ? b : c) ? d : e;"), "(a ? b : c) ? d : e;\n");
}

#[test]
fn test_unary_spacing() {
    assert_eq!(print("!(a && b);"), "!(a && b);\n");
    assert_eq!(print("typeof x;"), "typeof x;\n");
    assert_eq!(print("- -x;"), "- -x;\n");
    assert_eq!(print("void (a + b);"), "void (a + b);\n");
}

#[test]
fn test_object_literal_is_multiline() {
    assert_eq!(print("({a: 1, b});"), "({\n  a: 1,\n  b\n});\n");
    assert_eq!(
        print("({get a() { return 1; }});"),
        "({\n  get a() {\n    return 1;\n  }\n});\n"
    );
}

#[test]
fn test_generator_and_class() {
    assert_eq!(
        print("function* g() { yield 1; }"),
        "function* g() {\n  yield 1;\n}\n"
    );
    assert_eq!(
        print("class A extends B { constructor() { super(); } static m() {} }"),
        "class A extends B {\n  constructor() {\n    super();\n  }\n  static m() {}\n}\n"
    );
}

#[test]
fn test_switch_statement() {
    assert_eq!(
        print("switch (x) { case 1: a(); break; default: b(); }"),
        "switch (x) {\n  case 1:\n    a();\n    break;\n  default:\n    b();\n}\n"
    );
}

#[test]
fn test_try_statement() {
    assert_eq!(
        print("try { a(); } catch (e) { b(); } finally { c(); }"),
        "try {\n  a();\n} catch (e) {\n  b();\n} finally {\n  c();\n}\n"
    );
}

#[test]
fn test_for_statements() {
    assert_eq!(
        print("for (var i = 0; i < n; i++) {}"),
        "for (var i = 0; i < n; i++) {}\n"
    );
    assert_eq!(print("for (const k in o) f(k);"), "for (const k in o) f(k);\n");
    assert_eq!(
        print("label: for (;;) break label;"),
        "label: for (; ; ) break label;\n"
    );
}

#[test]
fn test_new_and_member_callees() {
    assert_eq!(print("new (foo())();"), "new (foo())();\n");
    assert_eq!(print("new Foo;"), "new Foo();\n");
    assert_eq!(print("new F(x => x + 1)(0);"), "new F(x => x + 1)(0);\n");
    assert_eq!(print("(1).toString();"), "(1).toString();\n");
}

#[test]
fn test_optional_chain_and_template() {
    assert_eq!(print("a?.b?.[c]?.(d);"), "a?.b?.[c]?.(d);\n");
    assert_eq!(print("`a${b}c`;"), "`a${b}c`;\n");
    assert_eq!(print("tag`x`;"), "tag`x`;\n");
}

#[test]
fn test_sequences_are_parenthesized() {
    assert_eq!(print("x = (1, 2);"), "x = (1, 2);\n");
    assert_eq!(print("a, b;"), "(a, b);\n");
}

#[test]
fn test_array_holes() {
    assert_eq!(print("[a, , b];"), "[a, , b];\n");
}

#[test]
fn test_emit_to_string_for_expression() {
    let read = Node::call(Node::member(Node::ident("x"), "get"), Vec::new());
    assert_eq!(Printer::emit_to_string(&read), "x.get()");
}

#[test]
fn test_custom_indent_and_new_line() {
    let program = parse_program("if (a) { b(); }").expect("parse");
    let mut printer = Printer::new(PrinterOptions {
        indent: "\t".to_string(),
        new_line: "\r\n".to_string(),
    });
    printer.emit(&program);
    assert_eq!(printer.get_output(), "if (a) {\r\n\tb();\r\n}\r\n");
}

#[test]
fn test_printer_options_deserialize_with_defaults() {
    let options: PrinterOptions =
        serde_json::from_str(r#"{ "indent": "    " }"#).expect("valid options");
    assert_eq!(options.indent, "    ");
    assert_eq!(options.new_line, "\n");
}
