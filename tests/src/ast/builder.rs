use std::sync::Arc;

use solast_annotations::{
    annotated_ast::AnnotatedAst, annotation::Annotation, errors::AnnotationError,
    type_info::TypeInfo,
};
use solast_ast::{
    builder::Builder,
    errors::AstError,
    nodes::{
        ContractDefinition, Definition, Item, Location, SourceUnit,
    },
};

use crate::fixtures::{kitchen_sink, simple_contract};

fn contract(id: u32, name: &str) -> Item {
    Item::Definition(Definition::Contract(Arc::new(ContractDefinition {
        id,
        location: Location::default(),
        name: name.to_string(),
        is_library: false,
        base_contracts: Vec::new(),
        sub_nodes: Vec::new(),
    })))
}

#[test]
fn test_arena_indexes_every_node() {
    let ast = simple_contract();
    let arena = ast.arena();
    assert_eq!(arena.len(), 12);
    assert!(!arena.is_empty());
    for id in 1..=12 {
        assert!(arena.contains(id), "node {id} is missing");
    }
    assert!(!arena.contains(13));
    assert!(arena.find_node(0).is_none());
}

#[test]
fn test_arena_parent_links() {
    let ast = simple_contract();
    let arena = ast.arena();
    assert_eq!(arena.find_parent_node(1), None);
    assert_eq!(arena.find_parent_node(2), Some(1));
    assert_eq!(arena.find_parent_node(4), Some(3));
    assert_eq!(arena.find_parent_node(8), Some(5));
    assert_eq!(arena.find_parent_node(11), Some(10));
    assert_eq!(arena.find_parent_node(12), Some(10));
}

#[test]
fn test_arena_subtree_len() {
    let ast = simple_contract();
    let arena = ast.arena();
    assert_eq!(arena.subtree_len(1), 12);
    assert_eq!(arena.subtree_len(5), 8);
    assert_eq!(arena.subtree_len(12), 1);
    assert_eq!(arena.subtree_len(99), 0);
}

#[test]
fn test_duplicate_node_id_is_rejected() {
    let mut unit = SourceUnit::new(1, Location::default());
    unit.nodes.push(contract(2, "A"));
    unit.nodes.push(contract(2, "B"));
    let mut builder = Builder::new();
    builder.add_source_unit(Arc::new(unit));
    let error = builder.build_ast().unwrap_err();
    assert!(matches!(error, AstError::DuplicateNodeId { id: 2, .. }));
    assert!(error.to_string().contains("node id 2 is used twice"));
}

#[test]
fn test_zero_is_an_ordinary_node_id() {
    let mut unit = SourceUnit::new(0, Location::default());
    unit.nodes.push(contract(1, "A"));
    let mut builder = Builder::new();
    builder.add_source_unit(Arc::new(unit));
    let arena = builder.build_ast().unwrap();
    assert_eq!(arena.len(), 2);
    assert!(arena.contains(0));
    assert_eq!(arena.find_parent_node(1), Some(0));
    assert_eq!(arena.find_parent_node(0), None);
}

#[test]
fn test_ids_shared_across_source_units_are_rejected() {
    let first = SourceUnit::new(1, Location::default());
    let second = SourceUnit::new(1, Location::default());
    let mut builder = Builder::new();
    builder.add_source_unit(Arc::new(first));
    builder.add_source_unit(Arc::new(second));
    assert!(builder.build_ast().is_err());
}

#[test]
fn test_next_node_id_is_unique_and_non_zero() {
    let first = Builder::next_node_id();
    let second = Builder::next_node_id();
    assert_ne!(first, 0);
    assert!(second > first);
}

#[test]
fn test_annotation_of_unknown_node_is_rejected() {
    let mut ast = simple_contract();
    let error = ast
        .annotate(42, Annotation::default().with_scope(1))
        .unwrap_err();
    assert!(matches!(error, AnnotationError::UnknownNode { id: 42 }));
}

#[test]
fn test_unannotated_node_reads_as_empty() {
    let ast = simple_contract();
    assert!(!ast.is_annotated(4));
    assert_eq!(ast.annotation(4), &Annotation::default());
    assert_eq!(ast.get_node_typeinfo(4), None);
    assert_eq!(ast.get_node_typeinfo(11), Some(&TypeInfo::uint(256)));
    assert_eq!(ast.annotation(11).referenced_declaration, Some(3));
}

#[test]
fn test_annotate_replaces_previous_annotation() {
    let mut ast = simple_contract();
    ast.annotate(11, Annotation::default().with_type(TypeInfo::Bool))
        .unwrap();
    assert_eq!(ast.get_node_typeinfo(11), Some(&TypeInfo::Bool));
    assert_eq!(ast.annotation(11).referenced_declaration, None);
    assert_eq!(ast.annotated_ids(), [1, 2, 3, 5, 10, 11, 12]);
}

#[test]
fn test_find_source_unit_by_name() {
    let sink = kitchen_sink();
    let b = sink.ast.find_source_unit("b.sol").unwrap();
    assert!(matches!(
        &b.nodes[1],
        Item::Definition(Definition::Contract(contract)) if contract.name == "L"
    ));
    assert!(sink.ast.find_source_unit("c.sol").is_none());
}

#[test]
fn test_empty_annotated_ast() {
    let ast = AnnotatedAst::default();
    assert!(ast.source_units().is_empty());
    assert!(ast.arena().is_empty());
    assert!(ast.annotated_ids().is_empty());
}
