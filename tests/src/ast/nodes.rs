use std::sync::Arc;

use solast_ast::nodes::{
    AssignmentOperatorKind, AstNode, Definition, ElementaryType, Item, LiteralToken, Location,
    OperatorKind, SubDenomination, UnaryOperatorKind, UserDefinedTypeName,
};

use crate::fixtures::simple_contract;

#[test]
fn test_location_in_source() {
    let source: Arc<str> = Arc::from("a.sol");
    let loc = Location::in_source(&source, 3, 10);
    assert_eq!(loc.start, 3);
    assert_eq!(loc.end, 10);
    assert_eq!(loc.source_name.as_deref(), Some("a.sol"));
    assert!(loc.is_known());
    assert_eq!(format!("{loc}"), "a.sol:3..10");
}

#[test]
fn test_location_default_is_unknown() {
    let loc = Location::default();
    assert_eq!(loc.start, -1);
    assert_eq!(loc.end, -1);
    assert!(loc.source_name.is_none());
    assert!(!loc.is_known());
    assert_eq!(format!("{loc}"), "<unknown>:-1..-1");
}

#[test]
fn test_elementary_type_spelling() {
    assert_eq!(ElementaryType::UInt(None).to_string(), "uint");
    assert_eq!(ElementaryType::UInt(Some(256)).to_string(), "uint256");
    assert_eq!(ElementaryType::Int(Some(8)).to_string(), "int8");
    assert_eq!(ElementaryType::FixedBytes(32).to_string(), "bytes32");
    assert_eq!(ElementaryType::Bytes.to_string(), "bytes");
    assert_eq!(ElementaryType::Fixed(Some((128, 18))).to_string(), "fixed128x18");
    assert_eq!(ElementaryType::UFixed(None).to_string(), "ufixed");
    assert_eq!(ElementaryType::Var.to_string(), "var");
}

#[test]
fn test_operator_spelling() {
    assert_eq!(OperatorKind::Pow.as_str(), "**");
    assert_eq!(OperatorKind::Shr.as_str(), ">>>");
    assert_eq!(OperatorKind::And.as_str(), "&&");
    assert_eq!(UnaryOperatorKind::Delete.as_str(), "delete");
    assert_eq!(UnaryOperatorKind::BitNot.as_str(), "~");
    assert_eq!(AssignmentOperatorKind::AssignShr.as_str(), ">>>=");
    assert_eq!(AssignmentOperatorKind::Assign.as_str(), "=");
}

#[test]
fn test_literal_token_spelling() {
    assert_eq!(LiteralToken::TrueLiteral.as_str(), Some("true"));
    assert_eq!(LiteralToken::FalseLiteral.as_str(), Some("false"));
    assert_eq!(LiteralToken::Number.as_str(), None);
    assert_eq!(LiteralToken::StringLiteral.as_str(), None);
    assert_eq!(SubDenomination::Finney.as_str(), "finney");
    assert_eq!(SubDenomination::Years.as_str(), "years");
}

#[test]
fn test_user_defined_type_name_joins_path() {
    let name = UserDefinedTypeName {
        id: 1,
        location: Location::default(),
        name_path: vec!["Lib".into(), "Point".into()],
    };
    assert_eq!(name.name(), "Lib.Point");
}

#[test]
fn test_children_follow_source_order() {
    let ast = simple_contract();
    let function = ast.find_node(5).unwrap();
    let ids: Vec<u32> = function.children().iter().map(AstNode::id).collect();
    assert_eq!(ids, [6, 7, 8]);

    let assignment = ast.find_node(10).unwrap();
    let ids: Vec<u32> = assignment.children().iter().map(AstNode::id).collect();
    assert_eq!(ids, [11, 12]);

    let identifier = ast.find_node(11).unwrap();
    assert!(identifier.children().is_empty());
}

#[test]
fn test_item_accessors() {
    let ast = simple_contract();
    let unit = &ast.source_units()[0];
    let Item::Definition(Definition::Contract(contract)) = &unit.nodes[0] else {
        panic!("expected contract C");
    };
    assert_eq!(unit.nodes[0].id(), 2);
    assert_eq!(contract.name, "C");
    let ids: Vec<u32> = contract.sub_nodes.iter().map(Item::id).collect();
    assert_eq!(ids, [3, 5]);
    assert!(matches!(
        &contract.sub_nodes[1],
        Item::Definition(Definition::Function(func)) if func.is_implemented()
    ));
}
