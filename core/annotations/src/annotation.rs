//! Per-node results of name and type resolution.
//!
//! Every field is optional in the sense that analysis may not have produced it;
//! missing values fall back to their `Default` (empty string, empty list, `false`,
//! `None`). Dumps may therefore omit any field.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use solast_ast::nodes::Location;

use crate::type_info::TypeInfo;

/// Value-category facts computed for expressions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpressionFlags {
    pub is_constant: bool,
    pub is_pure: bool,
    pub is_lvalue: bool,
    pub lvalue_requested: bool,
}

/// A Solidity identifier referenced from inside an assembly block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    pub name: String,
    /// Where the identifier occurs inside the assembly text.
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub declaration: Option<u32>,
}

/// Node-kind specific annotation payload.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnnotationExtra {
    #[default]
    None,
    SourceUnit {
        #[serde(default)]
        path: String,
        /// Exported names mapped to the declarations they denote.
        #[serde(default)]
        exported_symbols: BTreeMap<String, Vec<u32>>,
    },
    Import {
        #[serde(default)]
        absolute_path: String,
        #[serde(default)]
        source_unit: Option<u32>,
    },
    Contract {
        #[serde(default)]
        linearized_base_contracts: Vec<u32>,
        #[serde(default)]
        contract_dependencies: Vec<u32>,
        #[serde(default)]
        is_fully_implemented: bool,
    },
    /// Structs and enums.
    UserDefinedType {
        #[serde(default)]
        canonical_name: String,
    },
    UserDefinedTypeName {
        #[serde(default)]
        contract_scope: Option<u32>,
    },
    FunctionCall {
        #[serde(default)]
        is_type_conversion: bool,
        #[serde(default)]
        is_struct_constructor_call: bool,
    },
    BinaryOperation {
        #[serde(default)]
        common_type: Option<TypeInfo>,
    },
    Return {
        /// The parameter list of the function this statement returns from.
        #[serde(default)]
        function_return_parameters: Option<u32>,
    },
    VariableDeclarationStatement {
        /// Declaration each tuple component is assigned to.
        #[serde(default)]
        assignments: Vec<Option<u32>>,
    },
    InlineAssembly {
        #[serde(default)]
        external_references: Vec<ExternalReference>,
    },
}

/// Everything analysis recorded about one node.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    /// The declaration opening the scope the node is declared in.
    pub scope: Option<u32>,
    #[serde(rename = "type")]
    pub type_info: Option<TypeInfo>,
    pub referenced_declaration: Option<u32>,
    pub overloaded_declarations: Vec<u32>,
    pub flags: ExpressionFlags,
    pub extra: AnnotationExtra,
}

impl Annotation {
    #[must_use]
    pub fn with_scope(mut self, scope: u32) -> Self {
        self.scope = Some(scope);
        self
    }

    #[must_use]
    pub fn with_type(mut self, type_info: TypeInfo) -> Self {
        self.type_info = Some(type_info);
        self
    }

    #[must_use]
    pub fn with_referenced_declaration(mut self, declaration: u32) -> Self {
        self.referenced_declaration = Some(declaration);
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: ExpressionFlags) -> Self {
        self.flags = flags;
        self
    }

    #[must_use]
    pub fn with_extra(mut self, extra: AnnotationExtra) -> Self {
        self.extra = extra;
        self
    }
}
