//! Implementation methods for AST enum types.
//!
//! Token spellings used here are the canonical source spellings; they are what
//! downstream tools see as operator and literal labels.

use core::fmt;
use std::fmt::{Display, Formatter};

use crate::nodes::{
    AssignmentOperatorKind, ElementaryType, LiteralToken, OperatorKind, SubDenomination,
    UnaryOperatorKind,
};

impl UnaryOperatorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            UnaryOperatorKind::Not => "!",
            UnaryOperatorKind::BitNot => "~",
            UnaryOperatorKind::Neg => "-",
            UnaryOperatorKind::Inc => "++",
            UnaryOperatorKind::Dec => "--",
            UnaryOperatorKind::Delete => "delete",
        }
    }
}

impl OperatorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            OperatorKind::Pow => "**",
            OperatorKind::Add => "+",
            OperatorKind::Sub => "-",
            OperatorKind::Mul => "*",
            OperatorKind::Div => "/",
            OperatorKind::Mod => "%",
            OperatorKind::And => "&&",
            OperatorKind::Or => "||",
            OperatorKind::Eq => "==",
            OperatorKind::Ne => "!=",
            OperatorKind::Lt => "<",
            OperatorKind::Le => "<=",
            OperatorKind::Gt => ">",
            OperatorKind::Ge => ">=",
            OperatorKind::BitAnd => "&",
            OperatorKind::BitOr => "|",
            OperatorKind::BitXor => "^",
            OperatorKind::Shl => "<<",
            OperatorKind::Sar => ">>",
            OperatorKind::Shr => ">>>",
        }
    }
}

impl AssignmentOperatorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            AssignmentOperatorKind::Assign => "=",
            AssignmentOperatorKind::AssignBitOr => "|=",
            AssignmentOperatorKind::AssignBitXor => "^=",
            AssignmentOperatorKind::AssignBitAnd => "&=",
            AssignmentOperatorKind::AssignShl => "<<=",
            AssignmentOperatorKind::AssignSar => ">>=",
            AssignmentOperatorKind::AssignShr => ">>>=",
            AssignmentOperatorKind::AssignAdd => "+=",
            AssignmentOperatorKind::AssignSub => "-=",
            AssignmentOperatorKind::AssignMul => "*=",
            AssignmentOperatorKind::AssignDiv => "/=",
            AssignmentOperatorKind::AssignMod => "%=",
        }
    }
}

impl LiteralToken {
    /// Fixed spelling of the token, `None` for tokens without one (numbers, strings).
    #[must_use]
    pub const fn as_str(&self) -> Option<&'static str> {
        match self {
            LiteralToken::TrueLiteral => Some("true"),
            LiteralToken::FalseLiteral => Some("false"),
            LiteralToken::Number | LiteralToken::StringLiteral => None,
        }
    }
}

impl SubDenomination {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            SubDenomination::Wei => "wei",
            SubDenomination::Szabo => "szabo",
            SubDenomination::Finney => "finney",
            SubDenomination::Ether => "ether",
            SubDenomination::Seconds => "seconds",
            SubDenomination::Minutes => "minutes",
            SubDenomination::Hours => "hours",
            SubDenomination::Days => "days",
            SubDenomination::Weeks => "weeks",
            SubDenomination::Years => "years",
        }
    }
}

impl Display for ElementaryType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ElementaryType::Address => write!(f, "address"),
            ElementaryType::Bool => write!(f, "bool"),
            ElementaryType::String => write!(f, "string"),
            ElementaryType::Var => write!(f, "var"),
            ElementaryType::Byte => write!(f, "byte"),
            ElementaryType::Bytes => write!(f, "bytes"),
            ElementaryType::FixedBytes(size) => write!(f, "bytes{size}"),
            ElementaryType::Int(None) => write!(f, "int"),
            ElementaryType::Int(Some(bits)) => write!(f, "int{bits}"),
            ElementaryType::UInt(None) => write!(f, "uint"),
            ElementaryType::UInt(Some(bits)) => write!(f, "uint{bits}"),
            ElementaryType::Fixed(None) => write!(f, "fixed"),
            ElementaryType::Fixed(Some((bits, decimals))) => write!(f, "fixed{bits}x{decimals}"),
            ElementaryType::UFixed(None) => write!(f, "ufixed"),
            ElementaryType::UFixed(Some((bits, decimals))) => {
                write!(f, "ufixed{bits}x{decimals}")
            }
        }
    }
}
