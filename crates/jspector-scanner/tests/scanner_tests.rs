use super::*;

fn scan_all(source: &str) -> Vec<(SyntaxKind, String)> {
    let mut scanner = ScannerState::new(source);
    let mut tokens = Vec::new();
    loop {
        let kind = scanner.scan();
        if kind == SyntaxKind::EndOfFileToken {
            break;
        }
        tokens.push((kind, scanner.token_value().to_string()));
    }
    tokens
}

fn kinds(source: &str) -> Vec<SyntaxKind> {
    scan_all(source).into_iter().map(|(kind, _)| kind).collect()
}

#[test]
fn test_scan_variable_statement() {
    assert_eq!(
        scan_all("var a = 42;"),
        vec![
            (SyntaxKind::VarKeyword, "var".to_string()),
            (SyntaxKind::Identifier, "a".to_string()),
            (SyntaxKind::EqualsToken, "=".to_string()),
            (SyntaxKind::NumericLiteral, "42".to_string()),
            (SyntaxKind::SemicolonToken, ";".to_string()),
        ]
    );
}

#[test]
fn test_scan_compound_operators_longest_match() {
    assert_eq!(
        kinds("x += 1; y >>>= 2; z **= 3; w ??= 4; a?.b"),
        vec![
            SyntaxKind::Identifier,
            SyntaxKind::PlusEqualsToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::SemicolonToken,
            SyntaxKind::Identifier,
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::SemicolonToken,
            SyntaxKind::Identifier,
            SyntaxKind::AsteriskAsteriskEqualsToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::SemicolonToken,
            SyntaxKind::Identifier,
            SyntaxKind::QuestionQuestionEqualsToken,
            SyntaxKind::NumericLiteral,
            SyntaxKind::SemicolonToken,
            SyntaxKind::Identifier,
            SyntaxKind::QuestionDotToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_scan_update_and_arrow() {
    assert_eq!(
        kinds("++x; x--; x => x"),
        vec![
            SyntaxKind::PlusPlusToken,
            SyntaxKind::Identifier,
            SyntaxKind::SemicolonToken,
            SyntaxKind::Identifier,
            SyntaxKind::MinusMinusToken,
            SyntaxKind::SemicolonToken,
            SyntaxKind::Identifier,
            SyntaxKind::EqualsGreaterThanToken,
            SyntaxKind::Identifier,
        ]
    );
}

#[test]
fn test_contextual_keywords_are_identifiers() {
    for text in ["let", "of", "get", "set", "async", "await", "yield", "static"] {
        let mut scanner = ScannerState::new(text);
        let kind = scanner.scan();
        assert!(kind.is_contextual_keyword(), "{text} should be contextual");
        assert!(kind.is_identifier(), "{text} should bind like an identifier");
    }
    assert!(!SyntaxKind::VarKeyword.is_identifier());
    assert!(SyntaxKind::VarKeyword.is_identifier_or_keyword());
}

#[test]
fn test_scan_string_literals_keep_raw_text() {
    let tokens = scan_all(r#"'it\'s' "two""#);
    assert_eq!(tokens[0], (SyntaxKind::StringLiteral, r"'it\'s'".to_string()));
    assert_eq!(tokens[1], (SyntaxKind::StringLiteral, "\"two\"".to_string()));
}

#[test]
fn test_unterminated_string_reports_error() {
    let mut scanner = ScannerState::new("'abc\n");
    scanner.scan();
    let error = scanner.take_error().expect("expected scan error");
    assert_eq!(error.pos, 0);
    assert!(error.message.contains("Unterminated"));
}

#[test]
fn test_scan_numbers() {
    let tokens = scan_all("0x1F 1_000 3.14 .5 1e-3 10n");
    let values: Vec<_> = tokens.into_iter().map(|(_, value)| value).collect();
    assert_eq!(values, vec!["0x1F", "1_000", "3.14", ".5", "1e-3", "10n"]);
}

#[test]
fn test_comments_set_line_break_flag() {
    let mut scanner = ScannerState::new("a /* x\n y */ b // tail\nc");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert!(!scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "b");
    assert!(scanner.has_preceding_line_break());
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "c");
    assert!(scanner.has_preceding_line_break());
}

#[test]
fn test_rescan_slash_as_regex() {
    let mut scanner = ScannerState::new("/[/]ab\\/c/gi.test");
    assert_eq!(scanner.scan(), SyntaxKind::SlashToken);
    assert_eq!(
        scanner.rescan_slash_token(),
        SyntaxKind::RegularExpressionLiteral
    );
    assert_eq!(scanner.token_value(), "/[/]ab\\/c/gi");
    assert_eq!(scanner.scan(), SyntaxKind::DotToken);
}

#[test]
fn test_template_chunks() {
    let mut scanner = ScannerState::new("`a${x}b${y}c`");
    assert_eq!(scanner.scan(), SyntaxKind::TemplateHead);
    assert_eq!(scanner.token_value(), "a");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.rescan_template_token(), SyntaxKind::TemplateMiddle);
    assert_eq!(scanner.token_value(), "b");
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.scan(), SyntaxKind::CloseBraceToken);
    assert_eq!(scanner.rescan_template_token(), SyntaxKind::TemplateTail);
    assert_eq!(scanner.token_value(), "c");
    assert_eq!(scanner.scan(), SyntaxKind::EndOfFileToken);
}

#[test]
fn test_save_and_restore_state() {
    let mut scanner = ScannerState::new("(a, b) => a");
    scanner.scan();
    let snapshot = scanner.save_state();
    while scanner.scan() != SyntaxKind::EqualsGreaterThanToken {}
    scanner.restore_state(snapshot);
    assert_eq!(scanner.token(), SyntaxKind::OpenParenToken);
    assert_eq!(scanner.scan(), SyntaxKind::Identifier);
    assert_eq!(scanner.token_value(), "a");
}
