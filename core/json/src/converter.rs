use std::io;

use serde_json::{Map, Value};
use solast_annotations::{
    annotated_ast::AnnotatedAst,
    annotation::{Annotation, AnnotationExtra, ExternalReference},
};
use solast_ast::nodes::{
    Assignment, Ast, AstNode, BinaryOperation, Block, Component, Conditional, ContractDefinition,
    Definition, Directive, ElementaryTypeNameExpression, EnumDefinition, EventDefinition,
    Expression, ExpressionStatement, ForStatement, FunctionCall, FunctionDefinition,
    FunctionTypeName, Identifier, IfStatement, ImportDirective, IndexAccess, InheritanceSpecifier,
    InlineAssembly, Item, Literal, Location, MemberAccess, ModifierDefinition, ModifierInvocation,
    NewExpression, ParameterList, Return, SourceUnit, Statement, StorageLocation,
    StructDefinition, TupleExpression, TypeName, UnaryOperation, UserDefinedTypeName,
    UsingForDirective, VariableDeclaration, VariableDeclarationStatement, Visibility,
    WhileStatement,
};
use tracing::{debug, instrument};

use crate::{
    config::ConverterConfig,
    context::VisitContext,
    document::{Attribute, Document},
    ensure_sufficient_stack,
    errors::ConversionError,
    reference, src_location,
};

/// Emitted for expressions and variables analysis left without a type.
pub const UNKNOWN_TYPE: &str = "Unknown";

type ConversionResult<T> = Result<T, ConversionError>;

/// Converts nodes of one annotated compilation into documents.
///
/// The converter only reads the tree and its annotations, so one `AnnotatedAst` can be
/// shared by converters running on several threads.
pub struct AstJsonConverter<'a> {
    ast: &'a AnnotatedAst,
    config: ConverterConfig,
}

impl<'a> AstJsonConverter<'a> {
    #[must_use]
    pub fn new(ast: &'a AnnotatedAst, config: ConverterConfig) -> Self {
        Self { ast, config }
    }

    #[must_use]
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Converts the subtree rooted at `node`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError`] if a node of the subtree carries a visibility or storage
    /// location that has no output label.
    #[instrument(level = "debug", skip_all, fields(node_id = node.id()))]
    pub fn to_document(&self, node: &AstNode) -> ConversionResult<Document> {
        self.visit_node(node, VisitContext::default())
    }

    /// Converts a whole source unit.
    ///
    /// # Errors
    ///
    /// See [`AstJsonConverter::to_document`].
    pub fn source_unit_document(&self, unit: &SourceUnit) -> ConversionResult<Document> {
        self.visit_source_unit(unit)
    }

    /// Converts `node` and lays the result out in the configured schema variant.
    ///
    /// # Errors
    ///
    /// See [`AstJsonConverter::to_document`].
    pub fn to_json(&self, node: &AstNode) -> ConversionResult<Value> {
        Ok(self.to_document(node)?.render(self.config.schema))
    }

    /// # Errors
    ///
    /// See [`AstJsonConverter::to_document`].
    pub fn to_json_string(&self, node: &AstNode, pretty: bool) -> ConversionResult<String> {
        let value = self.to_json(node)?;
        let text = if pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(text)
    }

    /// Writes the compact serialization of `node` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Serialization`] if writing fails, or any error of
    /// [`AstJsonConverter::to_document`].
    pub fn print<W: io::Write>(&self, writer: W, node: &AstNode) -> ConversionResult<()> {
        let value = self.to_json(node)?;
        serde_json::to_writer(writer, &value)?;
        Ok(())
    }

    fn document(&self, id: u32, location: &Location, node_type: &'static str) -> Document {
        Document::new(
            id,
            src_location::encode(location, &self.config.source_indices),
            node_type,
        )
    }

    fn annotation(&self, id: u32) -> &'a Annotation {
        self.ast.annotation(id)
    }

    fn scope(&self, id: u32) -> Attribute {
        Attribute::Reference(self.annotation(id).scope)
    }

    fn type_string(&self, id: u32) -> Value {
        if let Some(type_info) = self.ast.get_node_typeinfo(id) {
            Value::from(type_info.to_string())
        } else {
            debug!(node_id = id, "node has no resolved type");
            Value::from(UNKNOWN_TYPE)
        }
    }

    fn visibility(id: u32, visibility: Visibility) -> ConversionResult<&'static str> {
        match visibility {
            Visibility::Private => Ok("private"),
            Visibility::Internal => Ok("internal"),
            Visibility::Public => Ok("public"),
            Visibility::External => Ok("external"),
            Visibility::Default => Err(ConversionError::UnknownVisibility { id, visibility }),
        }
    }

    fn storage_location(id: u32, location: StorageLocation) -> ConversionResult<&'static str> {
        match location {
            StorageLocation::Default => Ok("default"),
            StorageLocation::Storage => Ok("storage"),
            StorageLocation::Memory => Ok("memory"),
            StorageLocation::CallData => {
                Err(ConversionError::UnknownStorageLocation { id, location })
            }
        }
    }

    fn visit_node(&self, node: &AstNode, ctx: VisitContext) -> ConversionResult<Document> {
        match node {
            AstNode::Ast(Ast::SourceUnit(unit)) => self.visit_source_unit(unit),
            AstNode::Directive(directive) => self.visit_directive(directive, ctx),
            AstNode::Definition(definition) => self.visit_definition(definition, ctx),
            AstNode::Component(component) => self.visit_component(component, ctx),
            AstNode::TypeName(type_name) => self.visit_type_name(type_name, ctx),
            AstNode::Statement(statement) => self.visit_statement(statement, ctx),
            AstNode::Expression(expression) => self.visit_expression(expression, ctx),
        }
    }

    fn visit_items(&self, items: &[Item], ctx: VisitContext) -> ConversionResult<Vec<Document>> {
        items
            .iter()
            .map(|item| match item {
                Item::Directive(directive) => self.visit_directive(directive, ctx),
                Item::Definition(definition) => self.visit_definition(definition, ctx),
            })
            .collect()
    }

    fn visit_expressions(
        &self,
        expressions: &[Expression],
        ctx: VisitContext,
    ) -> ConversionResult<Vec<Document>> {
        expressions
            .iter()
            .map(|expression| self.visit_expression(expression, ctx))
            .collect()
    }

    fn visit_optional_expression(
        &self,
        expression: Option<&Expression>,
        ctx: VisitContext,
    ) -> ConversionResult<Option<Document>> {
        expression
            .map(|expression| self.visit_expression(expression, ctx))
            .transpose()
    }

    fn visit_optional_statement(
        &self,
        statement: Option<&Statement>,
        ctx: VisitContext,
    ) -> ConversionResult<Option<Document>> {
        statement
            .map(|statement| self.visit_statement(statement, ctx))
            .transpose()
    }

    fn visit_optional_type_name(
        &self,
        type_name: Option<&TypeName>,
        ctx: VisitContext,
    ) -> ConversionResult<Option<Document>> {
        type_name
            .map(|type_name| self.visit_type_name(type_name, ctx))
            .transpose()
    }

    fn visit_source_unit(&self, unit: &SourceUnit) -> ConversionResult<Document> {
        let (absolute_path, exported_symbols) = match &self.annotation(unit.id).extra {
            AnnotationExtra::SourceUnit {
                path,
                exported_symbols,
            } => (
                path.clone(),
                exported_symbols
                    .iter()
                    .map(|(name, ids)| (name.clone(), reference::ids(ids)))
                    .collect::<Map<String, Value>>(),
            ),
            _ => {
                debug!(node_id = unit.id, "source unit has no path annotation");
                (String::new(), Map::new())
            }
        };
        let nodes = self.visit_items(&unit.nodes, VisitContext::default())?;
        Ok(self
            .document(unit.id, &unit.location, "SourceUnit")
            .attribute("absolutePath", absolute_path)
            .attribute("exportedSymbols", Value::Object(exported_symbols))
            .attribute("nodes", nodes))
    }

    fn visit_directive(
        &self,
        directive: &Directive,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        match directive {
            Directive::Pragma(pragma) => Ok(self
                .document(pragma.id, &pragma.location, "PragmaDirective")
                .attribute("literals", Value::from(pragma.literals.clone()))),
            Directive::Import(import) => Ok(self.visit_import_directive(import)),
            Directive::UsingFor(using) => self.visit_using_for_directive(using, ctx),
        }
    }

    fn visit_import_directive(&self, import: &ImportDirective) -> Document {
        let (absolute_path, source_unit) = match &self.annotation(import.id).extra {
            AnnotationExtra::Import {
                absolute_path,
                source_unit,
            } => (absolute_path.clone(), *source_unit),
            _ => (String::new(), None),
        };
        let symbol_aliases = import
            .symbol_aliases
            .iter()
            .map(|alias| {
                vec![
                    ("foreign", self.visit_identifier(&alias.foreign).into()),
                    ("local", Attribute::Value(Value::from(alias.local.clone()))),
                ]
            })
            .collect();
        self.document(import.id, &import.location, "ImportDirective")
            .attribute("file", import.path.clone())
            .attribute("absolutePath", absolute_path)
            .attribute("SourceUnit", Attribute::Reference(source_unit))
            .attribute("scope", self.scope(import.id))
            .attribute("unitAlias", import.unit_alias.clone())
            .attribute("symbolAliases", Attribute::Records(symbol_aliases))
    }

    fn visit_using_for_directive(
        &self,
        using: &UsingForDirective,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let library_name = self.visit_user_defined_type_name(&using.library_name);
        let type_name = match &using.type_name {
            Some(type_name) => self.visit_type_name(type_name, ctx)?.into(),
            None => Attribute::from("*"),
        };
        Ok(self
            .document(using.id, &using.location, "UsingForDirective")
            .attribute("libraryNames", library_name)
            .attribute("typeName", type_name))
    }

    fn visit_definition(
        &self,
        definition: &Definition,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        match definition {
            Definition::Contract(contract) => self.visit_contract_definition(contract, ctx),
            Definition::Struct(def) => self.visit_struct_definition(def, ctx),
            Definition::Enum(def) => self.visit_enum_definition(def),
            Definition::Function(func) => self.visit_function_definition(func, ctx),
            Definition::Variable(var) => self.visit_variable_declaration(var, ctx),
            Definition::Modifier(modifier) => self.visit_modifier_definition(modifier, ctx),
            Definition::Event(event) => self.visit_event_definition(event, ctx),
        }
    }

    fn visit_contract_definition(
        &self,
        contract: &ContractDefinition,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let (linearized_base_contracts, contract_dependencies, is_fully_implemented) =
            match &self.annotation(contract.id).extra {
                AnnotationExtra::Contract {
                    linearized_base_contracts,
                    contract_dependencies,
                    is_fully_implemented,
                } => (
                    linearized_base_contracts.clone(),
                    contract_dependencies.clone(),
                    *is_fully_implemented,
                ),
                _ => {
                    debug!(node_id = contract.id, "contract has no inheritance annotation");
                    (Vec::new(), Vec::new(), false)
                }
            };
        let base_contracts = contract
            .base_contracts
            .iter()
            .map(|base| self.visit_inheritance_specifier(base, ctx))
            .collect::<ConversionResult<Vec<_>>>()?;
        let nodes = self.visit_items(&contract.sub_nodes, ctx)?;
        Ok(self
            .document(contract.id, &contract.location, "ContractDefinition")
            .attribute("name", contract.name.clone())
            .attribute("isLibrary", contract.is_library)
            .attribute("fullyImplemented", is_fully_implemented)
            .attribute(
                "linearizedBaseContracts",
                Attribute::References(linearized_base_contracts),
            )
            .attribute(
                "contractDependencies",
                Attribute::References(contract_dependencies),
            )
            .attribute("baseContracts", base_contracts)
            .attribute("nodes", nodes)
            .attribute("scope", self.scope(contract.id)))
    }

    fn canonical_name(&self, id: u32) -> String {
        match &self.annotation(id).extra {
            AnnotationExtra::UserDefinedType { canonical_name } => canonical_name.clone(),
            _ => String::new(),
        }
    }

    fn visit_struct_definition(
        &self,
        def: &StructDefinition,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let visibility = Self::visibility(def.id, def.visibility)?;
        let members = def
            .members
            .iter()
            .map(|member| self.visit_variable_declaration(member, ctx))
            .collect::<ConversionResult<Vec<_>>>()?;
        Ok(self
            .document(def.id, &def.location, "StructDefinition")
            .attribute("name", def.name.clone())
            .attribute("visibility", visibility)
            .attribute("canonicalName", self.canonical_name(def.id))
            .attribute("members", members)
            .attribute("scope", self.scope(def.id)))
    }

    fn visit_enum_definition(&self, def: &EnumDefinition) -> ConversionResult<Document> {
        let visibility = Self::visibility(def.id, def.visibility)?;
        let members: Vec<Document> = def
            .members
            .iter()
            .map(|value| {
                self.document(value.id, &value.location, "EnumValue")
                    .attribute("name", value.name.clone())
            })
            .collect();
        Ok(self
            .document(def.id, &def.location, "EnumDefinition")
            .attribute("name", def.name.clone())
            .attribute("visibility", visibility)
            .attribute("canonicalName", self.canonical_name(def.id))
            .attribute("members", members)
            .attribute("scope", self.scope(def.id)))
    }

    fn visit_function_definition(
        &self,
        func: &FunctionDefinition,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let visibility = Self::visibility(func.id, func.visibility)?;
        let parameters = self.visit_parameter_list(&func.parameters, ctx)?;
        let return_parameters = self.visit_parameter_list(&func.return_parameters, ctx)?;
        let modifiers = func
            .modifiers
            .iter()
            .map(|invocation| self.visit_modifier_invocation(invocation, ctx))
            .collect::<ConversionResult<Vec<_>>>()?;
        let body = func
            .body
            .as_ref()
            .map(|body| self.visit_block(body, ctx))
            .transpose()?;
        Ok(self
            .document(func.id, &func.location, "FunctionDefinition")
            .attribute("name", func.name.clone())
            .attribute("constant", func.is_declared_const)
            .attribute("payable", func.is_payable)
            .attribute("visibility", visibility)
            .attribute("parameters", parameters)
            .attribute("isConstructor", func.is_constructor)
            .attribute("returnParameters", return_parameters)
            .attribute("modifiers", modifiers)
            .attribute("body", body)
            .attribute("isImplemented", func.is_implemented())
            .attribute("scope", self.scope(func.id)))
    }

    fn visit_variable_declaration(
        &self,
        var: &VariableDeclaration,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let storage_location = Self::storage_location(var.id, var.storage_location)?;
        let visibility = Self::visibility(var.id, var.visibility)?;
        let value = self.visit_optional_expression(var.value.as_ref(), ctx)?;
        let type_name = self.visit_optional_type_name(var.type_name.as_ref(), ctx)?;
        let mut document = self
            .document(var.id, &var.location, "VariableDeclaration")
            .attribute("name", var.name.clone())
            .attribute("type", self.type_string(var.id))
            .attribute("constant", var.is_constant)
            .attribute("storageLocation", storage_location)
            .attribute("visibility", visibility)
            .attribute("value", value)
            .attribute("scope", self.scope(var.id))
            .attribute("typeName", type_name);
        if ctx.in_event() {
            document.set("indexed", var.is_indexed);
        }
        Ok(document)
    }

    fn visit_modifier_definition(
        &self,
        modifier: &ModifierDefinition,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let visibility = Self::visibility(modifier.id, modifier.visibility)?;
        let parameters = self.visit_parameter_list(&modifier.parameters, ctx)?;
        let body = self.visit_block(&modifier.body, ctx)?;
        Ok(self
            .document(modifier.id, &modifier.location, "ModifierDefinition")
            .attribute("name", modifier.name.clone())
            .attribute("visibility", visibility)
            .attribute("parameters", parameters)
            .attribute("body", body))
    }

    fn visit_event_definition(
        &self,
        event: &EventDefinition,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let parameters = self.visit_parameter_list(&event.parameters, ctx.entering_event())?;
        Ok(self
            .document(event.id, &event.location, "EventDefinition")
            .attribute("name", event.name.clone())
            .attribute("parameters", parameters)
            .attribute("isAnonymous", event.is_anonymous)
            .attribute("scope", self.scope(event.id)))
    }

    fn visit_component(
        &self,
        component: &Component,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        match component {
            Component::InheritanceSpecifier(specifier) => {
                self.visit_inheritance_specifier(specifier, ctx)
            }
            Component::EnumValue(value) => Ok(self
                .document(value.id, &value.location, "EnumValue")
                .attribute("name", value.name.clone())),
            Component::ParameterList(list) => self.visit_parameter_list(list, ctx),
            Component::ModifierInvocation(invocation) => {
                self.visit_modifier_invocation(invocation, ctx)
            }
        }
    }

    fn visit_inheritance_specifier(
        &self,
        specifier: &InheritanceSpecifier,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let base_name = self.visit_user_defined_type_name(&specifier.base_name);
        let arguments = self.visit_expressions(&specifier.arguments, ctx)?;
        Ok(self
            .document(specifier.id, &specifier.location, "InheritanceSpecifier")
            .attribute("baseName", base_name)
            .attribute("arguments", arguments))
    }

    fn visit_parameter_list(
        &self,
        list: &ParameterList,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let parameters = list
            .parameters
            .iter()
            .map(|parameter| self.visit_variable_declaration(parameter, ctx))
            .collect::<ConversionResult<Vec<_>>>()?;
        Ok(self
            .document(list.id, &list.location, "ParameterList")
            .attribute("parameters", parameters))
    }

    fn visit_modifier_invocation(
        &self,
        invocation: &ModifierInvocation,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let modifier_name = self.visit_identifier(&invocation.name);
        let arguments = self.visit_expressions(&invocation.arguments, ctx)?;
        Ok(self
            .document(invocation.id, &invocation.location, "ModifierInvocation")
            .attribute("modifierName", modifier_name)
            .attribute("arguments", arguments))
    }

    fn visit_type_name(
        &self,
        type_name: &TypeName,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        match type_name {
            TypeName::Elementary(elementary) => Ok(self
                .document(elementary.id, &elementary.location, "ElementaryTypeName")
                .attribute("name", elementary.type_name.to_string())),
            TypeName::UserDefined(user_defined) => {
                Ok(self.visit_user_defined_type_name(user_defined))
            }
            TypeName::Function(func) => self.visit_function_type_name(func, ctx),
            TypeName::Mapping(mapping) => {
                let key_type = self.visit_type_name(
                    &TypeName::Elementary(mapping.key_type.clone()),
                    ctx,
                )?;
                let value_type = self.visit_type_name(&mapping.value_type, ctx)?;
                Ok(self
                    .document(mapping.id, &mapping.location, "Mapping")
                    .attribute("keyType", key_type)
                    .attribute("valueType", value_type))
            }
            TypeName::Array(array) => {
                let base_type = self.visit_type_name(&array.base_type, ctx)?;
                let length = self.visit_optional_expression(array.length.as_ref(), ctx)?;
                Ok(self
                    .document(array.id, &array.location, "ArrayTypeName")
                    .attribute("baseType", base_type)
                    .attribute("length", length))
            }
        }
    }

    fn visit_user_defined_type_name(&self, type_name: &UserDefinedTypeName) -> Document {
        let annotation = self.annotation(type_name.id);
        let contract_scope = match &annotation.extra {
            AnnotationExtra::UserDefinedTypeName { contract_scope } => *contract_scope,
            _ => None,
        };
        self.document(type_name.id, &type_name.location, "UserDefinedTypeName")
            .attribute("name", type_name.name())
            .attribute(
                "referencedDeclaration",
                Attribute::Reference(annotation.referenced_declaration),
            )
            .attribute("contractScope", Attribute::Reference(contract_scope))
    }

    fn visit_function_type_name(
        &self,
        func: &FunctionTypeName,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let visibility = Self::visibility(func.id, func.visibility)?;
        let parameter_types = self.visit_parameter_list(&func.parameter_types, ctx)?;
        let return_parameter_types = self.visit_parameter_list(&func.return_parameter_types, ctx)?;
        Ok(self
            .document(func.id, &func.location, "FunctionTypeName")
            .attribute("payable", func.is_payable)
            .attribute("visibility", visibility)
            .attribute("constant", func.is_declared_const)
            .attribute("parameterTypes", parameter_types)
            .attribute("returnParameterTypes", return_parameter_types))
    }

    fn visit_statement(
        &self,
        statement: &Statement,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        ensure_sufficient_stack(|| self.visit_statement_kind(statement, ctx))
    }

    fn visit_statement_kind(
        &self,
        statement: &Statement,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        match statement {
            Statement::InlineAssembly(assembly) => Ok(self.visit_inline_assembly(assembly)),
            Statement::Block(block) => self.visit_block(block, ctx),
            Statement::Placeholder(stmt) => {
                Ok(self.document(stmt.id, &stmt.location, "PlaceholderStatement"))
            }
            Statement::If(stmt) => self.visit_if_statement(stmt, ctx),
            Statement::While(stmt) => self.visit_while_statement(stmt, ctx),
            Statement::For(stmt) => self.visit_for_statement(stmt, ctx),
            Statement::Continue(stmt) => Ok(self.document(stmt.id, &stmt.location, "Continue")),
            Statement::Break(stmt) => Ok(self.document(stmt.id, &stmt.location, "Break")),
            Statement::Return(stmt) => self.visit_return(stmt, ctx),
            Statement::Throw(stmt) => Ok(self.document(stmt.id, &stmt.location, "Throw")),
            Statement::VariableDeclaration(stmt) => {
                self.visit_variable_declaration_statement(stmt, ctx)
            }
            Statement::Expression(stmt) => self.visit_expression_statement(stmt, ctx),
        }
    }

    fn visit_inline_assembly(&self, assembly: &InlineAssembly) -> Document {
        let external_references: &[ExternalReference] =
            match &self.annotation(assembly.id).extra {
                AnnotationExtra::InlineAssembly {
                    external_references,
                } => external_references,
                _ => &[],
            };
        let external_references: Vec<Value> = external_references
            .iter()
            .map(|external| {
                let mut entry = Map::new();
                entry.insert(
                    "declaration".to_string(),
                    reference::id_or_null(external.declaration),
                );
                entry.insert(
                    "src".to_string(),
                    Value::from(src_location::encode(
                        &external.location,
                        &self.config.source_indices,
                    )),
                );
                let mut object = Map::new();
                object.insert(external.name.clone(), Value::Object(entry));
                Value::Object(object)
            })
            .collect();
        self.document(assembly.id, &assembly.location, "InlineAssembly")
            .attribute("operations", assembly.operations.clone())
            .attribute("externalReferences", Value::Array(external_references))
    }

    fn visit_block(&self, block: &Block, ctx: VisitContext) -> ConversionResult<Document> {
        let statements = block
            .statements
            .iter()
            .map(|statement| self.visit_statement(statement, ctx))
            .collect::<ConversionResult<Vec<_>>>()?;
        Ok(self
            .document(block.id, &block.location, "Block")
            .attribute("statements", statements))
    }

    fn visit_if_statement(
        &self,
        stmt: &IfStatement,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let condition = self.visit_expression(&stmt.condition, ctx)?;
        let true_body = self.visit_statement(&stmt.true_body, ctx)?;
        let false_body = self.visit_optional_statement(stmt.false_body.as_ref(), ctx)?;
        Ok(self
            .document(stmt.id, &stmt.location, "IfStatement")
            .attribute("condition", condition)
            .attribute("trueBody", true_body)
            .attribute("falseBody", false_body))
    }

    fn visit_while_statement(
        &self,
        stmt: &WhileStatement,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let node_type = if stmt.is_do_while {
            "DoWhileStatement"
        } else {
            "WhileStatement"
        };
        let condition = self.visit_expression(&stmt.condition, ctx)?;
        let body = self.visit_statement(&stmt.body, ctx)?;
        Ok(self
            .document(stmt.id, &stmt.location, node_type)
            .attribute("condition", condition)
            .attribute("body", body))
    }

    fn visit_for_statement(
        &self,
        stmt: &ForStatement,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let init_expression = self.visit_optional_statement(stmt.initialization.as_ref(), ctx)?;
        let condition = self.visit_optional_expression(stmt.condition.as_ref(), ctx)?;
        let loop_expression = stmt
            .loop_expression
            .as_ref()
            .map(|expression| self.visit_expression_statement(expression, ctx))
            .transpose()?;
        let body = self.visit_statement(&stmt.body, ctx)?;
        Ok(self
            .document(stmt.id, &stmt.location, "ForStatement")
            .attribute("initExpression", init_expression)
            .attribute("condition", condition)
            .attribute("loopExpression", loop_expression)
            .attribute("body", body))
    }

    fn visit_return(&self, stmt: &Return, ctx: VisitContext) -> ConversionResult<Document> {
        let function_return_parameters = match &self.annotation(stmt.id).extra {
            AnnotationExtra::Return {
                function_return_parameters,
            } => *function_return_parameters,
            _ => None,
        };
        let expression = self.visit_optional_expression(stmt.expression.as_ref(), ctx)?;
        Ok(self
            .document(stmt.id, &stmt.location, "Return")
            .attribute("expression", expression)
            .attribute(
                "functionReturnParameters",
                Attribute::Reference(function_return_parameters),
            ))
    }

    fn visit_variable_declaration_statement(
        &self,
        stmt: &VariableDeclarationStatement,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let declaration_ids = match &self.annotation(stmt.id).extra {
            AnnotationExtra::VariableDeclarationStatement { assignments } => {
                reference::ids_or_null(assignments)
            }
            _ => Value::Array(Vec::new()),
        };
        let declarations = stmt
            .declarations
            .iter()
            .map(|declaration| {
                declaration
                    .as_ref()
                    .map(|declaration| self.visit_variable_declaration(declaration, ctx))
                    .transpose()
            })
            .collect::<ConversionResult<Vec<_>>>()?;
        let initial_value = self.visit_optional_expression(stmt.initial_value.as_ref(), ctx)?;
        Ok(self
            .document(stmt.id, &stmt.location, "VariableDeclarationStatement")
            .attribute("declarationIDs", declaration_ids)
            .attribute("declarations", declarations)
            .attribute("initialValue", initial_value))
    }

    fn visit_expression_statement(
        &self,
        stmt: &ExpressionStatement,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let expression = self.visit_expression(&stmt.expression, ctx)?;
        Ok(self
            .document(stmt.id, &stmt.location, "ExpressionStatement")
            .attribute("expression", expression))
    }

    fn visit_expression(
        &self,
        expression: &Expression,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        ensure_sufficient_stack(|| self.visit_expression_kind(expression, ctx))
    }

    fn visit_expression_kind(
        &self,
        expression: &Expression,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        match expression {
            Expression::Conditional(expr) => self.visit_conditional(expr, ctx),
            Expression::Assignment(expr) => self.visit_assignment(expr, ctx),
            Expression::Tuple(expr) => self.visit_tuple_expression(expr, ctx),
            Expression::UnaryOperation(expr) => self.visit_unary_operation(expr, ctx),
            Expression::BinaryOperation(expr) => self.visit_binary_operation(expr, ctx),
            Expression::FunctionCall(expr) => self.visit_function_call(expr, ctx),
            Expression::New(expr) => self.visit_new_expression(expr, ctx),
            Expression::MemberAccess(expr) => self.visit_member_access(expr, ctx),
            Expression::IndexAccess(expr) => self.visit_index_access(expr, ctx),
            Expression::Identifier(expr) => Ok(self.visit_identifier(expr)),
            Expression::ElementaryTypeName(expr) => {
                Ok(self.visit_elementary_type_name_expression(expr))
            }
            Expression::Literal(expr) => Ok(self.visit_literal(expr)),
        }
    }

    fn visit_conditional(
        &self,
        expr: &Conditional,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let condition = self.visit_expression(&expr.condition, ctx)?;
        let true_expression = self.visit_expression(&expr.true_expression, ctx)?;
        let false_expression = self.visit_expression(&expr.false_expression, ctx)?;
        Ok(self
            .document(expr.id, &expr.location, "Conditional")
            .attribute("condition", condition)
            .attribute("trueExpression", true_expression)
            .attribute("falseExpression", false_expression))
    }

    fn visit_assignment(&self, expr: &Assignment, ctx: VisitContext) -> ConversionResult<Document> {
        let left_hand_side = self.visit_expression(&expr.left_hand_side, ctx)?;
        let right_hand_side = self.visit_expression(&expr.right_hand_side, ctx)?;
        Ok(self
            .document(expr.id, &expr.location, "Assignment")
            .attribute("operator", expr.operator.as_str())
            .attribute("type", self.type_string(expr.id))
            .attribute("leftHandSide", left_hand_side)
            .attribute("rightHandSide", right_hand_side))
    }

    fn visit_tuple_expression(
        &self,
        expr: &TupleExpression,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let components = expr
            .components
            .iter()
            .map(|component| self.visit_optional_expression(component.as_ref(), ctx))
            .collect::<ConversionResult<Vec<_>>>()?;
        Ok(self
            .document(expr.id, &expr.location, "TupleExpression")
            .attribute("isInlineArray", expr.is_inline_array)
            .attribute("components", components))
    }

    fn visit_unary_operation(
        &self,
        expr: &UnaryOperation,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let sub_expression = self.visit_expression(&expr.sub_expression, ctx)?;
        Ok(self
            .document(expr.id, &expr.location, "UnaryOperation")
            .attribute("prefix", expr.is_prefix)
            .attribute("operator", expr.operator.as_str())
            .attribute("type", self.type_string(expr.id))
            .attribute("subExpression", sub_expression))
    }

    fn visit_binary_operation(
        &self,
        expr: &BinaryOperation,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let common_type = match &self.annotation(expr.id).extra {
            AnnotationExtra::BinaryOperation {
                common_type: Some(common_type),
            } => Value::from(common_type.to_string()),
            _ => {
                debug!(node_id = expr.id, "binary operation has no common type");
                Value::from(UNKNOWN_TYPE)
            }
        };
        let left_expression = self.visit_expression(&expr.left_expression, ctx)?;
        let right_expression = self.visit_expression(&expr.right_expression, ctx)?;
        Ok(self
            .document(expr.id, &expr.location, "BinaryOperation")
            .attribute("operator", expr.operator.as_str())
            .attribute("type", self.type_string(expr.id))
            .attribute("commonType", common_type)
            .attribute("leftExpression", left_expression)
            .attribute("rightExpression", right_expression))
    }

    fn visit_function_call(
        &self,
        expr: &FunctionCall,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let (is_type_conversion, is_struct_constructor_call) =
            match &self.annotation(expr.id).extra {
                AnnotationExtra::FunctionCall {
                    is_type_conversion,
                    is_struct_constructor_call,
                } => (*is_type_conversion, *is_struct_constructor_call),
                _ => (false, false),
            };
        let arguments = self.visit_expressions(&expr.arguments, ctx)?;
        let expression = self.visit_expression(&expr.expression, ctx)?;
        Ok(self
            .document(expr.id, &expr.location, "FunctionCall")
            .attribute("type_conversion", is_type_conversion)
            .attribute("isStructContstructorCall", is_struct_constructor_call)
            .attribute("type", self.type_string(expr.id))
            .attribute("arguments", arguments)
            .attribute("expression", expression)
            .attribute("names", Value::from(expr.names.clone())))
    }

    fn visit_new_expression(
        &self,
        expr: &NewExpression,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let type_name = self.visit_type_name(&expr.type_name, ctx)?;
        Ok(self
            .document(expr.id, &expr.location, "NewExpression")
            .attribute("type", self.type_string(expr.id))
            .attribute("typeName", type_name))
    }

    fn visit_member_access(
        &self,
        expr: &MemberAccess,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let expression = self.visit_expression(&expr.expression, ctx)?;
        Ok(self
            .document(expr.id, &expr.location, "MemberAccess")
            .attribute("memberName", expr.member_name.clone())
            .attribute("type", self.type_string(expr.id))
            .attribute("expression", expression)
            .attribute(
                "referencedDeclaration",
                Attribute::Reference(self.annotation(expr.id).referenced_declaration),
            ))
    }

    fn visit_index_access(
        &self,
        expr: &IndexAccess,
        ctx: VisitContext,
    ) -> ConversionResult<Document> {
        let base_expression = self.visit_expression(&expr.base_expression, ctx)?;
        let index_expression =
            self.visit_optional_expression(expr.index_expression.as_ref(), ctx)?;
        Ok(self
            .document(expr.id, &expr.location, "IndexAccess")
            .attribute("type", self.type_string(expr.id))
            .attribute("baseExpression", base_expression)
            .attribute("indexExpression", index_expression))
    }

    fn visit_identifier(&self, expr: &Identifier) -> Document {
        let annotation = self.annotation(expr.id);
        self.document(expr.id, &expr.location, "Identifier")
            .attribute("value", expr.name.clone())
            .attribute("type", self.type_string(expr.id))
            .attribute(
                "referencedDeclaration",
                Attribute::Reference(annotation.referenced_declaration),
            )
            .attribute(
                "overloadedDeclarations",
                Attribute::References(annotation.overloaded_declarations.clone()),
            )
    }

    fn visit_elementary_type_name_expression(
        &self,
        expr: &ElementaryTypeNameExpression,
    ) -> Document {
        let flags = self.annotation(expr.id).flags;
        self.document(expr.id, &expr.location, "ElementaryTypeNameExpression")
            .attribute("value", expr.type_name.to_string())
            .attribute("type", self.type_string(expr.id))
            .attribute("isConstant", flags.is_constant)
            .attribute("isPure", flags.is_pure)
            .attribute("isLValue", flags.is_lvalue)
            .attribute("lValueRequested", flags.lvalue_requested)
    }

    fn visit_literal(&self, expr: &Literal) -> Document {
        let value = if let Ok(text) = std::str::from_utf8(&expr.value) {
            Value::from(text)
        } else {
            debug!(node_id = expr.id, "literal value is not valid UTF-8");
            Value::Null
        };
        let token = expr.token.as_str().map_or(Value::Null, Value::from);
        let sub_denomination = expr
            .sub_denomination
            .map_or(Value::Null, |sub_denomination| {
                Value::from(sub_denomination.as_str())
            });
        self.document(expr.id, &expr.location, "Literal")
            .attribute("token", token)
            .attribute("value", value)
            .attribute("hexvalue", hex::encode(&expr.value))
            .attribute("subdenomination", sub_denomination)
            .attribute("type", self.type_string(expr.id))
    }
}
