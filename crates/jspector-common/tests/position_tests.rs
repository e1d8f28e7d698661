use super::*;

#[test]
fn test_first_line_positions() {
    let map = LineMap::build("var a;");
    assert_eq!(map.line_count(), 1);
    assert_eq!(map.position(0), Position { line: 1, column: 1 });
    assert_eq!(map.position(4), Position { line: 1, column: 5 });
}

#[test]
fn test_positions_after_newlines() {
    let map = LineMap::build("a;\nbb;\n\nc;");
    assert_eq!(map.line_count(), 4);
    assert_eq!(map.position(3), Position { line: 2, column: 1 });
    assert_eq!(map.position(5), Position { line: 2, column: 3 });
    assert_eq!(map.position(8), Position { line: 4, column: 1 });
}

#[test]
fn test_position_display() {
    assert_eq!(Position { line: 3, column: 9 }.to_string(), "3:9");
}
