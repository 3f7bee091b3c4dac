//! Operator tokens carried by expression nodes.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    EqualsEquals,
    ExclamationEquals,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    AmpersandAmpersand,
    BarBar,
    Ampersand,
    Bar,
    Caret,
    LessThanLessThan,
    GreaterThanGreaterThan,
    GreaterThanGreaterThanGreaterThan,
    Equals,
    PlusEquals,
    MinusEquals,
    AsteriskEquals,
    SlashEquals,
    PercentEquals,
    AmpersandEquals,
    BarEquals,
    CaretEquals,
    LessThanLessThanEquals,
    GreaterThanGreaterThanEquals,
    GreaterThanGreaterThanGreaterThanEquals,
    Comma,
    InstanceOf,
    In,
}

impl BinaryOperator {
    /// Source spelling of the operator token.
    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Asterisk => "*",
            BinaryOperator::Slash => "/",
            BinaryOperator::Percent => "%",
            BinaryOperator::LessThan => "<",
            BinaryOperator::GreaterThan => ">",
            BinaryOperator::LessThanEquals => "<=",
            BinaryOperator::GreaterThanEquals => ">=",
            BinaryOperator::EqualsEquals => "==",
            BinaryOperator::ExclamationEquals => "!=",
            BinaryOperator::EqualsEqualsEquals => "===",
            BinaryOperator::ExclamationEqualsEquals => "!==",
            BinaryOperator::AmpersandAmpersand => "&&",
            BinaryOperator::BarBar => "||",
            BinaryOperator::Ampersand => "&",
            BinaryOperator::Bar => "|",
            BinaryOperator::Caret => "^",
            BinaryOperator::LessThanLessThan => "<<",
            BinaryOperator::GreaterThanGreaterThan => ">>",
            BinaryOperator::GreaterThanGreaterThanGreaterThan => ">>>",
            BinaryOperator::Equals => "=",
            BinaryOperator::PlusEquals => "+=",
            BinaryOperator::MinusEquals => "-=",
            BinaryOperator::AsteriskEquals => "*=",
            BinaryOperator::SlashEquals => "/=",
            BinaryOperator::PercentEquals => "%=",
            BinaryOperator::AmpersandEquals => "&=",
            BinaryOperator::BarEquals => "|=",
            BinaryOperator::CaretEquals => "^=",
            BinaryOperator::LessThanLessThanEquals => "<<=",
            BinaryOperator::GreaterThanGreaterThanEquals => ">>=",
            BinaryOperator::GreaterThanGreaterThanGreaterThanEquals => ">>>=",
            BinaryOperator::Comma => ",",
            BinaryOperator::InstanceOf => "instanceof",
            BinaryOperator::In => "in",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixOperator {
    Plus,
    Minus,
    Tilde,
    Exclamation,
    PlusPlus,
    MinusMinus,
}

impl PrefixOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            PrefixOperator::Plus => "+",
            PrefixOperator::Minus => "-",
            PrefixOperator::Tilde => "~",
            PrefixOperator::Exclamation => "!",
            PrefixOperator::PlusPlus => "++",
            PrefixOperator::MinusMinus => "--",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PostfixOperator {
    PlusPlus,
    MinusMinus,
}

impl PostfixOperator {
    pub const fn as_str(self) -> &'static str {
        match self {
            PostfixOperator::PlusPlus => "++",
            PostfixOperator::MinusMinus => "--",
        }
    }
}
