use std::sync::Arc;

use super::nodes::{
    Ast, AstNode, Block, Component, Definition, Directive, ElementaryTypeName,
    Expression, ExpressionStatement, FunctionDefinition, Identifier, Item, Literal, LiteralToken,
    Location, ParameterList, SourceUnit, Statement, TypeName, UserDefinedTypeName,
    VariableDeclaration,
};

impl SourceUnit {
    #[must_use]
    pub fn new(id: u32, location: Location) -> Self {
        SourceUnit {
            id,
            location,
            nodes: Vec::new(),
        }
    }
}

impl FunctionDefinition {
    #[must_use]
    pub fn is_implemented(&self) -> bool {
        self.body.is_some()
    }
}

impl UserDefinedTypeName {
    /// Dotted spelling of the referenced name (`Lib.Struct`).
    #[must_use]
    pub fn name(&self) -> String {
        self.name_path.join(".")
    }
}

impl Identifier {
    #[must_use]
    pub fn new(id: u32, name: String, location: Location) -> Self {
        Identifier { id, location, name }
    }
}

impl Literal {
    #[must_use]
    pub fn new(id: u32, token: LiteralToken, value: Vec<u8>, location: Location) -> Self {
        Literal {
            id,
            location,
            token,
            value,
            sub_denomination: None,
        }
    }
}

impl Item {
    #[must_use]
    pub fn id(&self) -> u32 {
        match self {
            Item::Directive(directive) => directive.id(),
            Item::Definition(definition) => definition.id(),
        }
    }

    #[must_use]
    pub fn to_node(&self) -> AstNode {
        match self {
            Item::Directive(directive) => AstNode::Directive(directive.clone()),
            Item::Definition(definition) => AstNode::Definition(definition.clone()),
        }
    }
}

fn parameter_list(list: &Arc<ParameterList>) -> AstNode {
    AstNode::Component(Component::ParameterList(list.clone()))
}

fn variable(declaration: &Arc<VariableDeclaration>) -> AstNode {
    AstNode::Definition(Definition::Variable(declaration.clone()))
}

fn identifier(identifier: &Arc<Identifier>) -> AstNode {
    AstNode::Expression(Expression::Identifier(identifier.clone()))
}

fn block(block: &Arc<Block>) -> AstNode {
    AstNode::Statement(Statement::Block(block.clone()))
}

fn user_defined(name: &Arc<UserDefinedTypeName>) -> AstNode {
    AstNode::TypeName(TypeName::UserDefined(name.clone()))
}

fn elementary(name: &Arc<ElementaryTypeName>) -> AstNode {
    AstNode::TypeName(TypeName::Elementary(name.clone()))
}

fn expression_statement(statement: &Arc<ExpressionStatement>) -> AstNode {
    AstNode::Statement(Statement::Expression(statement.clone()))
}

fn expressions(children: &mut Vec<AstNode>, expressions: &[Expression]) {
    children.extend(expressions.iter().cloned().map(AstNode::Expression));
}

impl AstNode {
    /// Structurally owned children, in source order.
    ///
    /// Weak links (resolved declarations, scopes) are not children; they live in
    /// the annotations of later passes.
    #[must_use]
    #[allow(clippy::too_many_lines)]
    pub fn children(&self) -> Vec<AstNode> {
        let mut children = Vec::new();
        match self {
            AstNode::Ast(Ast::SourceUnit(unit)) => {
                children.extend(unit.nodes.iter().map(Item::to_node));
            }
            AstNode::Directive(directive) => match directive {
                Directive::Pragma(_) => {}
                Directive::Import(import) => {
                    children.extend(
                        import
                            .symbol_aliases
                            .iter()
                            .map(|alias| identifier(&alias.foreign)),
                    );
                }
                Directive::UsingFor(using) => {
                    children.push(user_defined(&using.library_name));
                    children.extend(using.type_name.clone().map(AstNode::TypeName));
                }
            },
            AstNode::Definition(definition) => match definition {
                Definition::Contract(contract) => {
                    children.extend(contract.base_contracts.iter().map(|base| {
                        AstNode::Component(Component::InheritanceSpecifier(base.clone()))
                    }));
                    children.extend(contract.sub_nodes.iter().map(Item::to_node));
                }
                Definition::Struct(def) => {
                    children.extend(def.members.iter().map(variable));
                }
                Definition::Enum(def) => {
                    children.extend(
                        def.members
                            .iter()
                            .map(|value| AstNode::Component(Component::EnumValue(value.clone()))),
                    );
                }
                Definition::Function(func) => {
                    children.push(parameter_list(&func.parameters));
                    children.push(parameter_list(&func.return_parameters));
                    children.extend(func.modifiers.iter().map(|invocation| {
                        AstNode::Component(Component::ModifierInvocation(invocation.clone()))
                    }));
                    children.extend(func.body.as_ref().map(block));
                }
                Definition::Variable(var) => {
                    children.extend(var.type_name.clone().map(AstNode::TypeName));
                    children.extend(var.value.clone().map(AstNode::Expression));
                }
                Definition::Modifier(modifier) => {
                    children.push(parameter_list(&modifier.parameters));
                    children.push(block(&modifier.body));
                }
                Definition::Event(event) => {
                    children.push(parameter_list(&event.parameters));
                }
            },
            AstNode::Component(component) => match component {
                Component::InheritanceSpecifier(specifier) => {
                    children.push(user_defined(&specifier.base_name));
                    expressions(&mut children, &specifier.arguments);
                }
                Component::EnumValue(_) => {}
                Component::ParameterList(list) => {
                    children.extend(list.parameters.iter().map(variable));
                }
                Component::ModifierInvocation(invocation) => {
                    children.push(identifier(&invocation.name));
                    expressions(&mut children, &invocation.arguments);
                }
            },
            AstNode::TypeName(type_name) => match type_name {
                TypeName::Elementary(_) | TypeName::UserDefined(_) => {}
                TypeName::Function(func) => {
                    children.push(parameter_list(&func.parameter_types));
                    children.push(parameter_list(&func.return_parameter_types));
                }
                TypeName::Mapping(mapping) => {
                    children.push(elementary(&mapping.key_type));
                    children.push(AstNode::TypeName(mapping.value_type.clone()));
                }
                TypeName::Array(array) => {
                    children.push(AstNode::TypeName(array.base_type.clone()));
                    children.extend(array.length.clone().map(AstNode::Expression));
                }
            },
            AstNode::Statement(statement) => match statement {
                Statement::InlineAssembly(_)
                | Statement::Placeholder(_)
                | Statement::Continue(_)
                | Statement::Break(_)
                | Statement::Throw(_) => {}
                Statement::Block(b) => {
                    children.extend(b.statements.iter().cloned().map(AstNode::Statement));
                }
                Statement::If(stmt) => {
                    children.push(AstNode::Expression(stmt.condition.clone()));
                    children.push(AstNode::Statement(stmt.true_body.clone()));
                    children.extend(stmt.false_body.clone().map(AstNode::Statement));
                }
                Statement::While(stmt) => {
                    children.push(AstNode::Expression(stmt.condition.clone()));
                    children.push(AstNode::Statement(stmt.body.clone()));
                }
                Statement::For(stmt) => {
                    children.extend(stmt.initialization.clone().map(AstNode::Statement));
                    children.extend(stmt.condition.clone().map(AstNode::Expression));
                    children.extend(stmt.loop_expression.as_ref().map(expression_statement));
                    children.push(AstNode::Statement(stmt.body.clone()));
                }
                Statement::Return(stmt) => {
                    children.extend(stmt.expression.clone().map(AstNode::Expression));
                }
                Statement::VariableDeclaration(stmt) => {
                    children.extend(stmt.declarations.iter().flatten().map(variable));
                    children.extend(stmt.initial_value.clone().map(AstNode::Expression));
                }
                Statement::Expression(stmt) => {
                    children.push(AstNode::Expression(stmt.expression.clone()));
                }
            },
            AstNode::Expression(expression) => match expression {
                Expression::Identifier(_)
                | Expression::ElementaryTypeName(_)
                | Expression::Literal(_) => {}
                Expression::Conditional(expr) => expressions(
                    &mut children,
                    &[
                        expr.condition.clone(),
                        expr.true_expression.clone(),
                        expr.false_expression.clone(),
                    ],
                ),
                Expression::Assignment(expr) => expressions(
                    &mut children,
                    &[expr.left_hand_side.clone(), expr.right_hand_side.clone()],
                ),
                Expression::Tuple(expr) => {
                    children.extend(
                        expr.components
                            .iter()
                            .flatten()
                            .cloned()
                            .map(AstNode::Expression),
                    );
                }
                Expression::UnaryOperation(expr) => {
                    children.push(AstNode::Expression(expr.sub_expression.clone()));
                }
                Expression::BinaryOperation(expr) => expressions(
                    &mut children,
                    &[expr.left_expression.clone(), expr.right_expression.clone()],
                ),
                Expression::FunctionCall(expr) => {
                    expressions(&mut children, &expr.arguments);
                    children.push(AstNode::Expression(expr.expression.clone()));
                }
                Expression::New(expr) => {
                    children.push(AstNode::TypeName(expr.type_name.clone()));
                }
                Expression::MemberAccess(expr) => {
                    children.push(AstNode::Expression(expr.expression.clone()));
                }
                Expression::IndexAccess(expr) => {
                    children.push(AstNode::Expression(expr.base_expression.clone()));
                    children.extend(expr.index_expression.clone().map(AstNode::Expression));
                }
            },
        }
        children
    }
}
