use super::*;
use jspector_emitter::Printer;

fn render(node: &Node) -> String {
    Printer::emit_to_string(node)
}

#[test]
fn test_proxy_construct_without_body() {
    let names = ProxyNames::default();
    let factory = NodeFactory::new(&names);
    let node = factory.synthesize(Skeleton::ProxyConstruct {
        kind: ProxyKind::Variable,
        body: None,
    });
    assert_eq!(render(&node), "new Proxy.Variable()");
}

#[test]
fn test_proxy_construct_with_function_body() {
    let names = ProxyNames::default();
    let factory = NodeFactory::new(&names);
    let arrow = Node::ArrowFunctionExpression {
        params: vec![Node::ident("x")],
        body: Box::new(Node::ident("x")),
        expression: true,
        is_async: false,
    };
    assert_eq!(ProxyKind::for_value(Some(&arrow)), ProxyKind::Function);
    let node = factory.synthesize(Skeleton::ProxyConstruct {
        kind: ProxyKind::Function,
        body: Some(arrow),
    });
    assert_eq!(render(&node), "new Proxy.Function(x => x)");
}

#[test]
fn test_named_proxy_declaration() {
    let names = ProxyNames::default();
    let factory = NodeFactory::new(&names);
    let node = factory.synthesize(Skeleton::NamedProxyDeclaration {
        name: "f".to_string(),
        kind: ProxyKind::Function,
        body: Node::ident("g"),
    });
    assert_eq!(render(&node), "const f = new Proxy.Function(g);");
}

#[test]
fn test_accessors() {
    let names = ProxyNames::default();
    let factory = NodeFactory::new(&names);
    let read = factory.synthesize(Skeleton::AccessorRead {
        name: "x".to_string(),
    });
    assert_eq!(render(&read), "x.get()");

    let write = factory.synthesize(Skeleton::AccessorWrite {
        name: "x".to_string(),
        value: Node::number("0"),
    });
    assert_eq!(render(&write), "x.set(0)");

    let update = factory.synthesize(Skeleton::CompoundUpdate {
        name: "x".to_string(),
        operator: BinaryOperator::Mul,
        value: Node::number("3"),
    });
    assert_eq!(render(&update), "x.set(x.get() * 3)");
}

#[test]
fn test_custom_namespace() {
    let names = ProxyNames {
        namespace: "Spy".to_string(),
        runtime_module: "./spy.js".to_string(),
    };
    let factory = NodeFactory::new(&names);
    let node = factory.make_new_expression(ProxyNames::VARIABLE_TYPE, vec![Node::number("1")]);
    assert_eq!(render(&node), "new Spy.Variable(1)");
    assert_eq!(
        render(&factory.make_client_import()),
        "const Spy = require('./spy.js');"
    );
}

#[test]
fn test_string_literal_escaping() {
    let names = ProxyNames::default();
    let factory = NodeFactory::new(&names);
    let literal = factory.make_string_literal("it's\\here");
    assert_eq!(render(&literal), r"'it\'s\\here'");
}

#[test]
fn test_proxy_kind_for_missing_or_plain_value() {
    assert_eq!(ProxyKind::for_value(None), ProxyKind::Variable);
    assert_eq!(
        ProxyKind::for_value(Some(&Node::number("42"))),
        ProxyKind::Variable
    );
}
