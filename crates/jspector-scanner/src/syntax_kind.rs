//! Token kinds produced by the scanner.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    Unknown,
    EndOfFileToken,

    // Literals
    NumericLiteral,
    StringLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateHead,
    TemplateMiddle,
    TemplateTail,

    Identifier,

    // Punctuation
    OpenBraceToken,
    CloseBraceToken,
    OpenParenToken,
    CloseParenToken,
    OpenBracketToken,
    CloseBracketToken,
    DotToken,
    DotDotDotToken,
    SemicolonToken,
    CommaToken,
    QuestionDotToken,
    LessThanToken,
    GreaterThanToken,
    LessThanEqualsToken,
    GreaterThanEqualsToken,
    EqualsEqualsToken,
    ExclamationEqualsToken,
    EqualsEqualsEqualsToken,
    ExclamationEqualsEqualsToken,
    EqualsGreaterThanToken,
    PlusToken,
    MinusToken,
    AsteriskToken,
    AsteriskAsteriskToken,
    SlashToken,
    PercentToken,
    PlusPlusToken,
    MinusMinusToken,
    LessThanLessThanToken,
    GreaterThanGreaterThanToken,
    GreaterThanGreaterThanGreaterThanToken,
    AmpersandToken,
    BarToken,
    CaretToken,
    ExclamationToken,
    TildeToken,
    AmpersandAmpersandToken,
    BarBarToken,
    QuestionToken,
    ColonToken,
    QuestionQuestionToken,

    // Assignments
    EqualsToken,
    PlusEqualsToken,
    MinusEqualsToken,
    AsteriskEqualsToken,
    AsteriskAsteriskEqualsToken,
    SlashEqualsToken,
    PercentEqualsToken,
    LessThanLessThanEqualsToken,
    GreaterThanGreaterThanEqualsToken,
    GreaterThanGreaterThanGreaterThanEqualsToken,
    AmpersandEqualsToken,
    BarEqualsToken,
    CaretEqualsToken,
    AmpersandAmpersandEqualsToken,
    BarBarEqualsToken,
    QuestionQuestionEqualsToken,

    // Reserved words
    BreakKeyword,
    CaseKeyword,
    CatchKeyword,
    ClassKeyword,
    ConstKeyword,
    ContinueKeyword,
    DebuggerKeyword,
    DefaultKeyword,
    DeleteKeyword,
    DoKeyword,
    ElseKeyword,
    ExtendsKeyword,
    FalseKeyword,
    FinallyKeyword,
    ForKeyword,
    FunctionKeyword,
    IfKeyword,
    InKeyword,
    InstanceOfKeyword,
    NewKeyword,
    NullKeyword,
    ReturnKeyword,
    SuperKeyword,
    SwitchKeyword,
    ThisKeyword,
    ThrowKeyword,
    TrueKeyword,
    TryKeyword,
    TypeOfKeyword,
    VarKeyword,
    VoidKeyword,
    WhileKeyword,
    WithKeyword,

    // Contextual keywords (also valid identifiers)
    LetKeyword,
    StaticKeyword,
    YieldKeyword,
    AsyncKeyword,
    AwaitKeyword,
    OfKeyword,
    GetKeyword,
    SetKeyword,
}

impl SyntaxKind {
    /// Map identifier text to its keyword kind, if any.
    #[must_use]
    pub fn from_keyword(text: &str) -> Option<Self> {
        let kind = match text {
            "break" => Self::BreakKeyword,
            "case" => Self::CaseKeyword,
            "catch" => Self::CatchKeyword,
            "class" => Self::ClassKeyword,
            "const" => Self::ConstKeyword,
            "continue" => Self::ContinueKeyword,
            "debugger" => Self::DebuggerKeyword,
            "default" => Self::DefaultKeyword,
            "delete" => Self::DeleteKeyword,
            "do" => Self::DoKeyword,
            "else" => Self::ElseKeyword,
            "extends" => Self::ExtendsKeyword,
            "false" => Self::FalseKeyword,
            "finally" => Self::FinallyKeyword,
            "for" => Self::ForKeyword,
            "function" => Self::FunctionKeyword,
            "if" => Self::IfKeyword,
            "in" => Self::InKeyword,
            "instanceof" => Self::InstanceOfKeyword,
            "new" => Self::NewKeyword,
            "null" => Self::NullKeyword,
            "return" => Self::ReturnKeyword,
            "super" => Self::SuperKeyword,
            "switch" => Self::SwitchKeyword,
            "this" => Self::ThisKeyword,
            "throw" => Self::ThrowKeyword,
            "true" => Self::TrueKeyword,
            "try" => Self::TryKeyword,
            "typeof" => Self::TypeOfKeyword,
            "var" => Self::VarKeyword,
            "void" => Self::VoidKeyword,
            "while" => Self::WhileKeyword,
            "with" => Self::WithKeyword,
            "let" => Self::LetKeyword,
            "static" => Self::StaticKeyword,
            "yield" => Self::YieldKeyword,
            "async" => Self::AsyncKeyword,
            "await" => Self::AwaitKeyword,
            "of" => Self::OfKeyword,
            "get" => Self::GetKeyword,
            "set" => Self::SetKeyword,
            _ => return None,
        };
        Some(kind)
    }

    #[must_use]
    pub const fn is_reserved_word(self) -> bool {
        (self as u16) >= (Self::BreakKeyword as u16) && (self as u16) <= (Self::WithKeyword as u16)
    }

    #[must_use]
    pub const fn is_contextual_keyword(self) -> bool {
        (self as u16) >= (Self::LetKeyword as u16) && (self as u16) <= (Self::SetKeyword as u16)
    }

    /// Identifiers plus contextual keywords, which bind like identifiers.
    #[must_use]
    pub const fn is_identifier(self) -> bool {
        matches!(self, Self::Identifier) || self.is_contextual_keyword()
    }

    /// Anything usable as a property name after `.` or in an object literal key.
    #[must_use]
    pub const fn is_identifier_or_keyword(self) -> bool {
        self.is_identifier() || self.is_reserved_word()
    }

    #[must_use]
    pub const fn is_assignment_operator(self) -> bool {
        (self as u16) >= (Self::EqualsToken as u16)
            && (self as u16) <= (Self::QuestionQuestionEqualsToken as u16)
    }

    #[must_use]
    pub const fn is_template_start(self) -> bool {
        matches!(self, Self::NoSubstitutionTemplateLiteral | Self::TemplateHead)
    }
}
