//! Type Information
//!
//! Display model of the types resolved by semantic analysis. The exporter never
//! reasons about types; it only needs their canonical display string, which is what
//! [`TypeInfo`]'s `Display` produces (`uint256`, `int_const 7`,
//! `struct C.S storage ref`, `mapping(address => uint256)`).
//!
//! Reference types (arrays, `bytes`, `string`, structs) print their data location
//! unless printed as the base of another type, where the short form is used.

use core::fmt;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum DataLocation {
    Storage,
    Memory,
    CallData,
}

#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum MagicKind {
    Block,
    Message,
    Transaction,
}

impl MagicKind {
    #[must_use = "returns the string representation without modifying self"]
    pub const fn as_str(&self) -> &'static str {
        match self {
            MagicKind::Block => "block",
            MagicKind::Message => "msg",
            MagicKind::Transaction => "tx",
        }
    }
}

/// Where a reference type lives, and whether it is a storage pointer or a storage reference.
#[derive(Debug, Eq, PartialEq, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct ReferenceLocation {
    pub location: DataLocation,
    pub is_pointer: bool,
}

impl ReferenceLocation {
    pub const STORAGE_REF: ReferenceLocation = ReferenceLocation {
        location: DataLocation::Storage,
        is_pointer: false,
    };
    pub const STORAGE_POINTER: ReferenceLocation = ReferenceLocation {
        location: DataLocation::Storage,
        is_pointer: true,
    };
    pub const MEMORY: ReferenceLocation = ReferenceLocation {
        location: DataLocation::Memory,
        is_pointer: false,
    };
    pub const CALLDATA: ReferenceLocation = ReferenceLocation {
        location: DataLocation::CallData,
        is_pointer: false,
    };
}

impl Display for ReferenceLocation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match (self.location, self.is_pointer) {
            (DataLocation::Storage, true) => write!(f, "storage pointer"),
            (DataLocation::Storage, false) => write!(f, "storage ref"),
            (DataLocation::Memory, _) => write!(f, "memory"),
            (DataLocation::CallData, _) => write!(f, "calldata"),
        }
    }
}

#[derive(Debug, Eq, PartialEq, Clone, Hash, Serialize, Deserialize)]
pub enum TypeInfo {
    Integer {
        signed: bool,
        bits: u16,
    },
    Address,
    Bool,
    FixedBytes(u8),
    /// Integer-valued compile-time constant, holding its decimal value.
    IntegerConstant(String),
    RationalConstant {
        numerator: String,
        denominator: String,
    },
    StringLiteral(String),
    Bytes(ReferenceLocation),
    String(ReferenceLocation),
    Array {
        base: Box<TypeInfo>,
        /// `None` for dynamically-sized arrays.
        length: Option<u64>,
        location: ReferenceLocation,
    },
    Contract {
        name: String,
        is_library: bool,
    },
    Struct {
        canonical_name: String,
        location: ReferenceLocation,
    },
    Enum {
        canonical_name: String,
    },
    /// Components may be empty, as in `(a, , b)`.
    Tuple(Vec<Option<TypeInfo>>),
    Function {
        parameters: Vec<TypeInfo>,
        returns: Vec<TypeInfo>,
        is_constant: bool,
        is_payable: bool,
    },
    Mapping {
        key: Box<TypeInfo>,
        value: Box<TypeInfo>,
    },
    /// The type of a type expression, e.g. the callee of `uint(x)`.
    TypeType(Box<TypeInfo>),
    Modifier(Vec<TypeInfo>),
    Module(String),
    Magic(MagicKind),
}

impl TypeInfo {
    #[must_use]
    pub fn uint(bits: u16) -> Self {
        TypeInfo::Integer {
            signed: false,
            bits,
        }
    }

    #[must_use]
    pub fn int(bits: u16) -> Self {
        TypeInfo::Integer { signed: true, bits }
    }

    #[must_use]
    pub fn int_const(value: impl Into<String>) -> Self {
        TypeInfo::IntegerConstant(value.into())
    }

    /// Display string without the data location of reference types.
    #[must_use]
    pub fn to_short_string(&self) -> String {
        match self {
            TypeInfo::Bytes(_) => "bytes".to_string(),
            TypeInfo::String(_) => "string".to_string(),
            TypeInfo::Array { base, length, .. } => match length {
                Some(length) => format!("{}[{length}]", base.to_short_string()),
                None => format!("{}[]", base.to_short_string()),
            },
            TypeInfo::Struct { canonical_name, .. } => format!("struct {canonical_name}"),
            other => other.to_string(),
        }
    }
}

fn join(types: &[TypeInfo]) -> String {
    types
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TypeInfo::Bytes(location)
            | TypeInfo::String(location)
            | TypeInfo::Array { location, .. }
            | TypeInfo::Struct { location, .. } => {
                write!(f, "{} {location}", self.to_short_string())
            }
            TypeInfo::Integer { signed: true, bits } => write!(f, "int{bits}"),
            TypeInfo::Integer {
                signed: false,
                bits,
            } => write!(f, "uint{bits}"),
            TypeInfo::Address => write!(f, "address"),
            TypeInfo::Bool => write!(f, "bool"),
            TypeInfo::FixedBytes(size) => write!(f, "bytes{size}"),
            TypeInfo::IntegerConstant(value) => write!(f, "int_const {value}"),
            TypeInfo::RationalConstant {
                numerator,
                denominator,
            } => write!(f, "rational_const {numerator} / {denominator}"),
            TypeInfo::StringLiteral(value) => write!(f, "literal_string \"{value}\""),
            TypeInfo::Contract {
                name,
                is_library: true,
            } => write!(f, "library {name}"),
            TypeInfo::Contract {
                name,
                is_library: false,
            } => write!(f, "contract {name}"),
            TypeInfo::Enum { canonical_name } => write!(f, "enum {canonical_name}"),
            TypeInfo::Tuple(components) => {
                let components = components
                    .iter()
                    .map(|component| component.as_ref().map(ToString::to_string).unwrap_or_default())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "tuple({components})")
            }
            TypeInfo::Function {
                parameters,
                returns,
                is_constant,
                is_payable,
            } => {
                write!(f, "function ({})", join(parameters))?;
                if *is_constant {
                    write!(f, " constant")?;
                }
                if *is_payable {
                    write!(f, " payable")?;
                }
                if !returns.is_empty() {
                    write!(f, " returns ({})", join(returns))?;
                }
                Ok(())
            }
            TypeInfo::Mapping { key, value } => write!(f, "mapping({key} => {value})"),
            TypeInfo::TypeType(actual) => write!(f, "type({actual})"),
            TypeInfo::Modifier(parameters) => write!(f, "modifier ({})", join(parameters)),
            TypeInfo::Module(path) => write!(f, "module \"{path}\""),
            TypeInfo::Magic(kind) => write!(f, "{}", kind.as_str()),
        }
    }
}
