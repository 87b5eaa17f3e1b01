use core::fmt;
use std::{
    fmt::{Display, Formatter},
    sync::Arc,
};

use serde::{Deserialize, Serialize};

/// Byte range of a node inside its originating source file.
///
/// Offsets are signed: a negative offset means the position is unknown (nodes
/// synthesized by analysis passes carry `-1`).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Location {
    pub start: i32,
    pub end: i32,
    pub source_name: Option<Arc<str>>,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            start: -1,
            end: -1,
            source_name: None,
        }
    }
}

impl Location {
    #[must_use]
    pub fn new(start: i32, end: i32, source_name: Option<Arc<str>>) -> Self {
        Self {
            start,
            end,
            source_name,
        }
    }

    #[must_use]
    pub fn in_source(source_name: &Arc<str>, start: i32, end: i32) -> Self {
        Self::new(start, end, Some(source_name.clone()))
    }

    #[must_use]
    pub fn is_known(&self) -> bool {
        self.start >= 0 && self.end >= 0
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match &self.source_name {
            Some(name) => write!(f, "{name}:{}..{}", self.start, self.end),
            None => write!(f, "<unknown>:{}..{}", self.start, self.end),
        }
    }
}

#[macro_export]
macro_rules! ast_node {
    (
        $(#[$outer:meta])*
        $struct_vis:vis struct $name:ident {
            $(
                $(#[$field_attr:meta])*
                $field_vis:vis $field_name:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
        $struct_vis struct $name {
            pub id: u32,
            pub location: $crate::nodes::Location,
            $(
                $(#[$field_attr])*
                $field_vis $field_name : $field_ty,
            )*
        }
    };
}

macro_rules! ast_nodes {
    (
        $(
            $(#[$outer:meta])*
            $struct_vis:vis struct $name:ident { $($fields:tt)* }
        )+
    ) => {
        $(
            ast_node! {
                $(#[$outer])*
                $struct_vis struct $name { $($fields)* }
            }
        )+
    };
}

macro_rules! ast_enum {
    (
        $(#[$outer:meta])*
        $enum_vis:vis enum $name:ident {
            $(
                $(#[$arm_attr:meta])*
                $arm:ident ( $inner:ty ) ,
            )*
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
        $enum_vis enum $name {
            $(
                $(#[$arm_attr])*
                $arm ( $inner ) ,
            )*
        }

        impl $name {
            #[must_use]
            pub fn id(&self) -> u32 {
                match self {
                    $(
                        $name::$arm(n) => n.id,
                    )*
                }
            }

            #[must_use]
            pub fn location(&self) -> &Location {
                match self {
                    $(
                        $name::$arm(n) => &n.location,
                    )*
                }
            }
        }
    };
}

macro_rules! ast_enums {
    (
        $(
            $(#[$outer:meta])*
            $enum_vis:vis enum $name:ident { $($arms:tt)* }
        )+
    ) => {
        $(
            ast_enum! {
                $(#[$outer])*
                $enum_vis enum $name { $($arms)* }
            }
        )+

        /// Any node of the tree, grouped by syntactic category.
        #[derive(Clone, PartialEq, Eq, Debug)]
        pub enum AstNode {
            $(
                $name($name),
            )+
        }

        impl AstNode {
            #[must_use]
            pub fn id(&self) -> u32 {
                match self {
                    $(
                        AstNode::$name(node) => node.id(),
                    )+
                }
            }

            #[must_use]
            pub fn location(&self) -> &Location {
                match self {
                    $(
                        AstNode::$name(node) => node.location(),
                    )+
                }
            }
        }

        $(
            impl From<$name> for AstNode {
                fn from(node: $name) -> Self {
                    AstNode::$name(node)
                }
            }
        )+
    };
}

ast_enums! {

    pub enum Ast {
        SourceUnit(Arc<SourceUnit>),
    }

    pub enum Directive {
        Pragma(Arc<PragmaDirective>),
        Import(Arc<ImportDirective>),
        UsingFor(Arc<UsingForDirective>),
    }

    pub enum Definition {
        Contract(Arc<ContractDefinition>),
        Struct(Arc<StructDefinition>),
        Enum(Arc<EnumDefinition>),
        Function(Arc<FunctionDefinition>),
        Variable(Arc<VariableDeclaration>),
        Modifier(Arc<ModifierDefinition>),
        Event(Arc<EventDefinition>),
    }

    /// Nodes that only ever appear as parts of a declaration.
    pub enum Component {
        InheritanceSpecifier(Arc<InheritanceSpecifier>),
        EnumValue(Arc<EnumValue>),
        ParameterList(Arc<ParameterList>),
        ModifierInvocation(Arc<ModifierInvocation>),
    }

    /// The type-name supertype. Only its concrete variants can be constructed.
    pub enum TypeName {
        Elementary(Arc<ElementaryTypeName>),
        UserDefined(Arc<UserDefinedTypeName>),
        Function(Arc<FunctionTypeName>),
        Mapping(Arc<Mapping>),
        Array(Arc<ArrayTypeName>),
    }

    pub enum Statement {
        InlineAssembly(Arc<InlineAssembly>),
        Block(Arc<Block>),
        Placeholder(Arc<PlaceholderStatement>),
        If(Arc<IfStatement>),
        While(Arc<WhileStatement>),
        For(Arc<ForStatement>),
        Continue(Arc<Continue>),
        Break(Arc<Break>),
        Return(Arc<Return>),
        Throw(Arc<Throw>),
        VariableDeclaration(Arc<VariableDeclarationStatement>),
        Expression(Arc<ExpressionStatement>),
    }

    pub enum Expression {
        Conditional(Arc<Conditional>),
        Assignment(Arc<Assignment>),
        Tuple(Arc<TupleExpression>),
        UnaryOperation(Arc<UnaryOperation>),
        BinaryOperation(Arc<BinaryOperation>),
        FunctionCall(Arc<FunctionCall>),
        New(Arc<NewExpression>),
        MemberAccess(Arc<MemberAccess>),
        IndexAccess(Arc<IndexAccess>),
        Identifier(Arc<Identifier>),
        ElementaryTypeName(Arc<ElementaryTypeNameExpression>),
        Literal(Arc<Literal>),
    }
}

/// Top-level entry of a source unit or a contract body.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Item {
    Directive(Directive),
    Definition(Definition),
}

/// One `{foreign as local}` entry of an import directive.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SymbolAlias {
    pub foreign: Arc<Identifier>,
    pub local: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum Visibility {
    /// Not yet resolved to a concrete visibility by declaration analysis.
    #[default]
    Default,
    Private,
    Internal,
    Public,
    External,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum StorageLocation {
    #[default]
    Default,
    Storage,
    Memory,
    CallData,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum UnaryOperatorKind {
    Not,
    BitNot,
    Neg,
    Inc,
    Dec,
    Delete,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum OperatorKind {
    Pow,
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    And,
    Or,
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Sar,
    Shr,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum AssignmentOperatorKind {
    Assign,
    AssignBitOr,
    AssignBitXor,
    AssignBitAnd,
    AssignShl,
    AssignSar,
    AssignShr,
    AssignAdd,
    AssignSub,
    AssignMul,
    AssignDiv,
    AssignMod,
}

/// Token a literal was scanned from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LiteralToken {
    TrueLiteral,
    FalseLiteral,
    Number,
    StringLiteral,
}

/// Unit suffix of a number literal (`1 ether`, `2 days`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SubDenomination {
    Wei,
    Szabo,
    Finney,
    Ether,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Years,
}

/// Elementary type keyword, with its size suffix where the keyword has one.
///
/// `None` sizes stand for the unsized spelling (`uint`, `fixed`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ElementaryType {
    Address,
    Bool,
    String,
    Var,
    Byte,
    Bytes,
    FixedBytes(u8),
    Int(Option<u16>),
    UInt(Option<u16>),
    Fixed(Option<(u16, u8)>),
    UFixed(Option<(u16, u8)>),
}

ast_nodes! {

    pub struct SourceUnit {
        pub nodes: Vec<Item>,
    }

    pub struct PragmaDirective {
        pub literals: Vec<String>,
    }

    pub struct ImportDirective {
        pub path: String,
        /// `import "x" as alias;`, empty when there is no unit alias.
        pub unit_alias: String,
        pub symbol_aliases: Vec<SymbolAlias>,
    }

    pub struct UsingForDirective {
        pub library_name: Arc<UserDefinedTypeName>,
        /// `None` for `using L for *;`
        pub type_name: Option<TypeName>,
    }

    pub struct ContractDefinition {
        pub name: String,
        pub is_library: bool,
        pub base_contracts: Vec<Arc<InheritanceSpecifier>>,
        pub sub_nodes: Vec<Item>,
    }

    pub struct InheritanceSpecifier {
        pub base_name: Arc<UserDefinedTypeName>,
        pub arguments: Vec<Expression>,
    }

    pub struct StructDefinition {
        pub name: String,
        pub visibility: Visibility,
        pub members: Vec<Arc<VariableDeclaration>>,
    }

    pub struct EnumDefinition {
        pub name: String,
        pub visibility: Visibility,
        pub members: Vec<Arc<EnumValue>>,
    }

    pub struct EnumValue {
        pub name: String,
    }

    pub struct ParameterList {
        pub parameters: Vec<Arc<VariableDeclaration>>,
    }

    pub struct FunctionDefinition {
        pub name: String,
        pub visibility: Visibility,
        pub is_constructor: bool,
        pub is_declared_const: bool,
        pub is_payable: bool,
        pub parameters: Arc<ParameterList>,
        pub return_parameters: Arc<ParameterList>,
        pub modifiers: Vec<Arc<ModifierInvocation>>,
        /// `None` for functions declared without an implementation.
        pub body: Option<Arc<Block>>,
    }

    pub struct VariableDeclaration {
        pub name: String,
        /// `None` for `var` declarations.
        pub type_name: Option<TypeName>,
        pub value: Option<Expression>,
        pub visibility: Visibility,
        pub is_indexed: bool,
        pub is_constant: bool,
        pub storage_location: StorageLocation,
    }

    pub struct ModifierDefinition {
        pub name: String,
        pub visibility: Visibility,
        pub parameters: Arc<ParameterList>,
        pub body: Arc<Block>,
    }

    pub struct ModifierInvocation {
        pub name: Arc<Identifier>,
        pub arguments: Vec<Expression>,
    }

    pub struct EventDefinition {
        pub name: String,
        pub parameters: Arc<ParameterList>,
        pub is_anonymous: bool,
    }

    pub struct ElementaryTypeName {
        pub type_name: ElementaryType,
    }

    pub struct UserDefinedTypeName {
        pub name_path: Vec<String>,
    }

    pub struct FunctionTypeName {
        pub parameter_types: Arc<ParameterList>,
        pub return_parameter_types: Arc<ParameterList>,
        pub visibility: Visibility,
        pub is_declared_const: bool,
        pub is_payable: bool,
    }

    pub struct Mapping {
        pub key_type: Arc<ElementaryTypeName>,
        pub value_type: TypeName,
    }

    pub struct ArrayTypeName {
        pub base_type: TypeName,
        pub length: Option<Expression>,
    }

    pub struct InlineAssembly {
        /// Source text of the assembly block.
        pub operations: String,
    }

    pub struct Block {
        pub statements: Vec<Statement>,
    }

    pub struct PlaceholderStatement {}

    pub struct IfStatement {
        pub condition: Expression,
        pub true_body: Statement,
        pub false_body: Option<Statement>,
    }

    pub struct WhileStatement {
        pub condition: Expression,
        pub body: Statement,
        pub is_do_while: bool,
    }

    pub struct ForStatement {
        pub initialization: Option<Statement>,
        pub condition: Option<Expression>,
        pub loop_expression: Option<Arc<ExpressionStatement>>,
        pub body: Statement,
    }

    pub struct Continue {}

    pub struct Break {}

    pub struct Return {
        pub expression: Option<Expression>,
    }

    pub struct Throw {}

    pub struct VariableDeclarationStatement {
        /// Omitted tuple components (`var (, b) = f();`) are `None`.
        pub declarations: Vec<Option<Arc<VariableDeclaration>>>,
        pub initial_value: Option<Expression>,
    }

    pub struct ExpressionStatement {
        pub expression: Expression,
    }

    pub struct Conditional {
        pub condition: Expression,
        pub true_expression: Expression,
        pub false_expression: Expression,
    }

    pub struct Assignment {
        pub left_hand_side: Expression,
        pub operator: AssignmentOperatorKind,
        pub right_hand_side: Expression,
    }

    pub struct TupleExpression {
        pub components: Vec<Option<Expression>>,
        pub is_inline_array: bool,
    }

    pub struct UnaryOperation {
        pub operator: UnaryOperatorKind,
        pub sub_expression: Expression,
        pub is_prefix: bool,
    }

    pub struct BinaryOperation {
        pub left_expression: Expression,
        pub operator: OperatorKind,
        pub right_expression: Expression,
    }

    pub struct FunctionCall {
        pub expression: Expression,
        pub arguments: Vec<Expression>,
        /// Argument names of a named-argument call, in call order.
        pub names: Vec<String>,
    }

    pub struct NewExpression {
        pub type_name: TypeName,
    }

    pub struct MemberAccess {
        pub expression: Expression,
        pub member_name: String,
    }

    pub struct IndexAccess {
        pub base_expression: Expression,
        pub index_expression: Option<Expression>,
    }

    pub struct Identifier {
        pub name: String,
    }

    pub struct ElementaryTypeNameExpression {
        pub type_name: ElementaryType,
    }

    pub struct Literal {
        pub token: LiteralToken,
        /// Raw literal bytes; string literals may hold arbitrary bytes (`"\xff"`).
        pub value: Vec<u8>,
        pub sub_denomination: Option<SubDenomination>,
    }

}
