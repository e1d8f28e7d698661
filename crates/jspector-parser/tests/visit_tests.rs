use super::*;
use crate::parse_program;

fn program(source: &str) -> Node {
    parse_program(source).expect("source should parse")
}

#[test]
fn test_walk_visits_in_declared_order() {
    let root = program("a = b + c;");
    let mut names = Vec::new();
    walk(&root, &mut |node| {
        if let Some(name) = node.identifier_name() {
            names.push(name.to_string());
        }
    });
    assert_eq!(names, ["a", "b", "c"]);
}

#[test]
fn test_replace_passes_parent_kind() {
    let mut root = program("f(x);");
    let mut parents = Vec::new();
    replace(&mut root, &mut |node: &mut Node, parent: Option<NodeKind>| {
        if node.identifier_name().is_some() {
            parents.push(parent);
        }
        None
    });
    assert_eq!(
        parents,
        [Some(NodeKind::CallExpression), Some(NodeKind::CallExpression)]
    );
}

#[test]
fn test_replacement_children_are_visited() {
    let mut root = program("x;");
    let mut seen = Vec::new();
    replace(&mut root, &mut |node: &mut Node, _parent: Option<NodeKind>| {
        match node {
            Node::Identifier { name } if name.as_str() == "x" => {
                Some(Node::call(Node::ident("wrap"), vec![Node::ident("inner")]))
            }
            Node::Identifier { name } => {
                seen.push(name.clone());
                None
            }
            _ => None,
        }
    });
    assert_eq!(seen, ["wrap", "inner"]);
}

#[test]
fn test_in_place_edit_without_replacement() {
    let mut root = program("y;");
    replace(&mut root, &mut |node: &mut Node, _parent: Option<NodeKind>| {
        if let Node::Identifier { name } = node {
            name.push('2');
        }
        None
    });
    let Node::Program { body } = &root else {
        panic!("expected program");
    };
    assert_eq!(body[0], Node::expr_stmt(Node::ident("y2")));
}
