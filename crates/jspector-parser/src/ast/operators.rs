//! Operator enums with their source spelling.

use jspector_scanner::SyntaxKind;
use serde::{Serialize, Serializer};

macro_rules! serialize_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.as_str())
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

serialize_as_str!(
    UnaryOperator,
    UpdateOperator,
    BinaryOperator,
    LogicalOperator,
    AssignmentOperator,
);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Minus,
    Plus,
    Not,
    BitNot,
    TypeOf,
    Void,
    Delete,
}

impl UnaryOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minus => "-",
            Self::Plus => "+",
            Self::Not => "!",
            Self::BitNot => "~",
            Self::TypeOf => "typeof",
            Self::Void => "void",
            Self::Delete => "delete",
        }
    }

    #[must_use]
    pub const fn from_token(kind: SyntaxKind) -> Option<Self> {
        Some(match kind {
            SyntaxKind::MinusToken => Self::Minus,
            SyntaxKind::PlusToken => Self::Plus,
            SyntaxKind::ExclamationToken => Self::Not,
            SyntaxKind::TildeToken => Self::BitNot,
            SyntaxKind::TypeOfKeyword => Self::TypeOf,
            SyntaxKind::VoidKeyword => Self::Void,
            SyntaxKind::DeleteKeyword => Self::Delete,
            _ => return None,
        })
    }

    /// Word operators need a space before their operand.
    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::TypeOf | Self::Void | Self::Delete)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum UpdateOperator {
    Increment,
    Decrement,
}

impl UpdateOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increment => "++",
            Self::Decrement => "--",
        }
    }

    #[must_use]
    pub const fn from_token(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::PlusPlusToken => Some(Self::Increment),
            SyntaxKind::MinusMinusToken => Some(Self::Decrement),
            _ => None,
        }
    }

    /// Binary operator applying this update's unit delta.
    #[must_use]
    pub const fn delta_operator(self) -> BinaryOperator {
        match self {
            Self::Increment => BinaryOperator::Add,
            Self::Decrement => BinaryOperator::Sub,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Equal,
    NotEqual,
    StrictEqual,
    StrictNotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
    ShiftLeft,
    ShiftRight,
    ShiftRightUnsigned,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Exp,
    BitOr,
    BitXor,
    BitAnd,
    In,
    InstanceOf,
}

impl BinaryOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::StrictEqual => "===",
            Self::StrictNotEqual => "!==",
            Self::LessThan => "<",
            Self::LessThanEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterThanEqual => ">=",
            Self::ShiftLeft => "<<",
            Self::ShiftRight => ">>",
            Self::ShiftRightUnsigned => ">>>",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Exp => "**",
            Self::BitOr => "|",
            Self::BitXor => "^",
            Self::BitAnd => "&",
            Self::In => "in",
            Self::InstanceOf => "instanceof",
        }
    }

    #[must_use]
    pub const fn from_token(kind: SyntaxKind) -> Option<Self> {
        Some(match kind {
            SyntaxKind::EqualsEqualsToken => Self::Equal,
            SyntaxKind::ExclamationEqualsToken => Self::NotEqual,
            SyntaxKind::EqualsEqualsEqualsToken => Self::StrictEqual,
            SyntaxKind::ExclamationEqualsEqualsToken => Self::StrictNotEqual,
            SyntaxKind::LessThanToken => Self::LessThan,
            SyntaxKind::LessThanEqualsToken => Self::LessThanEqual,
            SyntaxKind::GreaterThanToken => Self::GreaterThan,
            SyntaxKind::GreaterThanEqualsToken => Self::GreaterThanEqual,
            SyntaxKind::LessThanLessThanToken => Self::ShiftLeft,
            SyntaxKind::GreaterThanGreaterThanToken => Self::ShiftRight,
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Self::ShiftRightUnsigned,
            SyntaxKind::PlusToken => Self::Add,
            SyntaxKind::MinusToken => Self::Sub,
            SyntaxKind::AsteriskToken => Self::Mul,
            SyntaxKind::SlashToken => Self::Div,
            SyntaxKind::PercentToken => Self::Rem,
            SyntaxKind::AsteriskAsteriskToken => Self::Exp,
            SyntaxKind::BarToken => Self::BitOr,
            SyntaxKind::CaretToken => Self::BitXor,
            SyntaxKind::AmpersandToken => Self::BitAnd,
            SyntaxKind::InKeyword => Self::In,
            SyntaxKind::InstanceOfKeyword => Self::InstanceOf,
            _ => return None,
        })
    }

    /// Binding power; higher binds tighter. Logical operators sit below 3.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::BitOr => 3,
            Self::BitXor => 4,
            Self::BitAnd => 5,
            Self::Equal | Self::NotEqual | Self::StrictEqual | Self::StrictNotEqual => 6,
            Self::LessThan
            | Self::LessThanEqual
            | Self::GreaterThan
            | Self::GreaterThanEqual
            | Self::In
            | Self::InstanceOf => 7,
            Self::ShiftLeft | Self::ShiftRight | Self::ShiftRightUnsigned => 8,
            Self::Add | Self::Sub => 9,
            Self::Mul | Self::Div | Self::Rem => 10,
            Self::Exp => 11,
        }
    }

    #[must_use]
    pub const fn is_keyword(self) -> bool {
        matches!(self, Self::In | Self::InstanceOf)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    Or,
    And,
    Coalesce,
}

impl LogicalOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Or => "||",
            Self::And => "&&",
            Self::Coalesce => "??",
        }
    }

    #[must_use]
    pub const fn from_token(kind: SyntaxKind) -> Option<Self> {
        match kind {
            SyntaxKind::BarBarToken => Some(Self::Or),
            SyntaxKind::AmpersandAmpersandToken => Some(Self::And),
            SyntaxKind::QuestionQuestionToken => Some(Self::Coalesce),
            _ => None,
        }
    }

    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Or | Self::Coalesce => 1,
            Self::And => 2,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AssignmentOperator {
    Assign,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    RemAssign,
    ExpAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    ShiftRightUnsignedAssign,
    BitOrAssign,
    BitXorAssign,
    BitAndAssign,
    OrAssign,
    AndAssign,
    CoalesceAssign,
}

impl AssignmentOperator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assign => "=",
            Self::AddAssign => "+=",
            Self::SubAssign => "-=",
            Self::MulAssign => "*=",
            Self::DivAssign => "/=",
            Self::RemAssign => "%=",
            Self::ExpAssign => "**=",
            Self::ShiftLeftAssign => "<<=",
            Self::ShiftRightAssign => ">>=",
            Self::ShiftRightUnsignedAssign => ">>>=",
            Self::BitOrAssign => "|=",
            Self::BitXorAssign => "^=",
            Self::BitAndAssign => "&=",
            Self::OrAssign => "||=",
            Self::AndAssign => "&&=",
            Self::CoalesceAssign => "??=",
        }
    }

    #[must_use]
    pub const fn from_token(kind: SyntaxKind) -> Option<Self> {
        Some(match kind {
            SyntaxKind::EqualsToken => Self::Assign,
            SyntaxKind::PlusEqualsToken => Self::AddAssign,
            SyntaxKind::MinusEqualsToken => Self::SubAssign,
            SyntaxKind::AsteriskEqualsToken => Self::MulAssign,
            SyntaxKind::SlashEqualsToken => Self::DivAssign,
            SyntaxKind::PercentEqualsToken => Self::RemAssign,
            SyntaxKind::AsteriskAsteriskEqualsToken => Self::ExpAssign,
            SyntaxKind::LessThanLessThanEqualsToken => Self::ShiftLeftAssign,
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Self::ShiftRightAssign,
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => {
                Self::ShiftRightUnsignedAssign
            }
            SyntaxKind::BarEqualsToken => Self::BitOrAssign,
            SyntaxKind::CaretEqualsToken => Self::BitXorAssign,
            SyntaxKind::AmpersandEqualsToken => Self::BitAndAssign,
            SyntaxKind::BarBarEqualsToken => Self::OrAssign,
            SyntaxKind::AmpersandAmpersandEqualsToken => Self::AndAssign,
            SyntaxKind::QuestionQuestionEqualsToken => Self::CoalesceAssign,
            _ => return None,
        })
    }

    /// The single-character arithmetic operator of `+=`, `-=`, `*=`, `/=`
    /// and `%=`. Every other operator (plain, exponent, shift, bitwise,
    /// logical) returns `None`.
    #[must_use]
    pub const fn arithmetic_operator(self) -> Option<BinaryOperator> {
        match self {
            Self::AddAssign => Some(BinaryOperator::Add),
            Self::SubAssign => Some(BinaryOperator::Sub),
            Self::MulAssign => Some(BinaryOperator::Mul),
            Self::DivAssign => Some(BinaryOperator::Div),
            Self::RemAssign => Some(BinaryOperator::Rem),
            _ => None,
        }
    }
}
