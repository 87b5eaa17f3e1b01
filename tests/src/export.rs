use std::{collections::BTreeMap, sync::Arc};

use serde_json::json;
use solast::{
    CompilationDump, default_config, default_source_indices, export_all,
    export_named_source_unit, export_source_unit, load_compilation, load_compilation_file,
    source_name,
};
use solast_annotations::{
    annotation::{Annotation, AnnotationExtra},
    type_info::TypeInfo,
};
use solast_ast::nodes::{
    ContractDefinition, Definition, Item, Location, OperatorKind, SourceUnit, Visibility,
};
use solast_json::config::SchemaVariant;

use crate::{
    fixtures::{Fixture, SOURCE, annotated, kitchen_sink, simple_contract},
    utils::{compact, find_first, get_test_data_path},
};

fn storage_dump_path() -> std::path::PathBuf {
    get_test_data_path().join("dumps").join("storage.json")
}

#[test]
fn test_export_all_is_keyed_by_sorted_source_name() -> anyhow::Result<()> {
    let sink = kitchen_sink();
    let config = default_config(&sink.ast);
    let exported = export_all(&sink.ast, &config)?;
    let names: Vec<&str> = exported.keys().map(String::as_str).collect();
    assert_eq!(names, ["a.sol", "b.sol"]);
    assert_eq!(exported["b.sol"]["nodeType"], "SourceUnit");
    assert_eq!(exported["b.sol"]["absolutePath"], "b.sol");
    Ok(())
}

#[test]
fn test_default_source_indices_follow_sorted_names() {
    let sink = kitchen_sink();
    let indices = default_source_indices(&sink.ast);
    assert_eq!(indices.len(), 2);
    assert_eq!(indices.get("a.sol"), Some(0));
    assert_eq!(indices.get("b.sol"), Some(1));
}

#[test]
fn test_export_named_source_unit() -> anyhow::Result<()> {
    let ast = simple_contract();
    let config = default_config(&ast);
    let value = export_named_source_unit(&ast, "a.sol", &config)?;
    assert_eq!(value, compact(&ast, 1));

    let error = export_named_source_unit(&ast, "missing.sol", &config).unwrap_err();
    assert_eq!(error.to_string(), "no source unit named missing.sol");
    Ok(())
}

#[test]
fn test_export_in_legacy_layout() -> anyhow::Result<()> {
    let ast = simple_contract();
    let config = default_config(&ast).with_schema(SchemaVariant::Legacy);
    assert!(config.is_legacy());
    let value = export_source_unit(&ast, &ast.source_units()[0], &config)?;
    assert_eq!(value["name"], "SourceUnit");
    assert_eq!(value["attributes"]["absolutePath"], "a.sol");
    assert_eq!(value["children"][0]["name"], "ContractDefinition");
    Ok(())
}

#[test]
fn test_source_name_fallbacks() {
    let named = SourceUnit::new(1, Location::default());
    let anonymous = SourceUnit::new(2, Location::default());
    let ast = annotated(
        vec![named, anonymous],
        vec![(
            1,
            Annotation::default().with_extra(AnnotationExtra::SourceUnit {
                path: "from_annotation.sol".into(),
                exported_symbols: BTreeMap::new(),
            }),
        )],
    );
    let names: Vec<String> = ast
        .source_units()
        .iter()
        .map(|unit| source_name(&ast, unit))
        .collect();
    assert_eq!(names, ["from_annotation.sol", "2"]);

    let source: Arc<str> = Arc::from("located.sol");
    let located = SourceUnit::new(3, Location::in_source(&source, 0, 0));
    let ast = annotated(vec![located], Vec::new());
    assert_eq!(source_name(&ast, &ast.source_units()[0]), "located.sol");
}

#[test]
fn test_dump_round_trip_preserves_export() -> anyhow::Result<()> {
    let sink = kitchen_sink();
    let dump = CompilationDump::from_ast(&sink.ast);
    assert_eq!(dump.sources.len(), 2);
    let text = serde_json::to_string(&dump)?;
    let reloaded = load_compilation(&text)?;
    assert_eq!(reloaded.arena().len(), sink.ast.arena().len());
    assert_eq!(reloaded.annotated_ids(), sink.ast.annotated_ids());
    assert_eq!(
        export_all(&reloaded, &default_config(&reloaded))?,
        export_all(&sink.ast, &default_config(&sink.ast))?
    );
    Ok(())
}

#[test]
fn test_empty_dump_exports_nothing() -> anyhow::Result<()> {
    let ast = load_compilation("{}")?;
    assert!(ast.source_units().is_empty());
    assert!(export_all(&ast, &default_config(&ast))?.is_empty());
    Ok(())
}

#[test]
fn test_malformed_dump_is_rejected() {
    let error = load_compilation("{\"sources\": 3}").unwrap_err();
    assert_eq!(error.to_string(), "failed to parse compilation dump");
}

#[test]
fn test_dump_with_duplicate_ids_is_rejected() {
    let dump = CompilationDump {
        sources: vec![
            SourceUnit::new(1, Location::default()),
            SourceUnit::new(1, Location::default()),
        ],
        annotations: BTreeMap::new(),
    };
    let error = dump.into_annotated_ast().unwrap_err();
    assert_eq!(error.to_string(), "invalid syntax tree");
}

#[test]
fn test_dump_annotating_unknown_node_is_rejected() {
    let text = json!({
        "sources": [{"id": 1, "location": {"start": 0, "end": 0, "source_name": "a.sol"}, "nodes": []}],
        "annotations": {"7": {"scope": 1}}
    })
    .to_string();
    let error = load_compilation(&text).unwrap_err();
    assert_eq!(error.to_string(), "invalid annotation table");
    assert!(format!("{error:#}").contains("node 7"));
}

#[test]
fn test_load_dump_file() -> anyhow::Result<()> {
    let ast = load_compilation_file(&storage_dump_path())?;
    assert_eq!(ast.arena().len(), 14);
    let exported = export_all(&ast, &default_config(&ast))?;
    let unit = &exported["storage.sol"];
    assert_eq!(unit["exportedSymbols"], json!({"Storage": [2]}));
    assert_eq!(unit["src"], "0:78:0");

    let assignment = find_first(unit, "Assignment");
    assert_eq!(assignment["leftHandSide"]["referencedDeclaration"], 3);
    assert_eq!(assignment["rightHandSide"]["referencedDeclaration"], 7);
    assert_eq!(assignment["type"], "uint256");

    let parameter = &find_first(unit, "FunctionDefinition")["parameters"]["parameters"][0];
    assert_eq!(parameter["scope"], 5);
    assert_eq!(parameter["typeName"]["name"], "uint256");
    Ok(())
}

#[test]
fn test_load_missing_dump_file() {
    let path = get_test_data_path().join("dumps").join("missing.json");
    let error = load_compilation_file(&path).unwrap_err();
    assert!(error.to_string().starts_with("failed to read"));
}

#[test]
fn test_source_units_sharing_a_name_are_rejected() {
    let source: Arc<str> = Arc::from("dup.sol");
    let first = SourceUnit::new(1, Location::in_source(&source, 0, 0));
    let second = SourceUnit::new(2, Location::in_source(&source, 0, 0));
    let ast = annotated(vec![first, second], Vec::new());
    let error = export_all(&ast, &default_config(&ast)).unwrap_err();
    assert_eq!(
        error.to_string(),
        "source units 1 and 2 are both named dup.sol"
    );
}

/// `uint total = a + 1 + 1 + ...;` nests far deeper than serde_json's default limit.
#[test]
fn test_deeply_nested_expression_loads_and_exports() -> anyhow::Result<()> {
    const TERMS: usize = 200;
    let uint256 = TypeInfo::uint(256);
    let mut fx = Fixture::new(SOURCE);
    let unit_id = fx.id();
    let unit_loc = fx.loc();
    let contract_id = fx.id();
    let contract_loc = fx.loc();

    let mut sum = fx.ident_expr("a", None, Some(uint256.clone()));
    for _ in 1..TERMS {
        let term = fx.number("1");
        sum = fx.binary(sum, OperatorKind::Add, term, uint256.clone());
    }
    let type_name = fx.uint_type();
    let mut total = Arc::unwrap_or_clone(fx.variable(
        "total",
        Some(type_name),
        Visibility::Internal,
        Some(contract_id),
        Some(uint256),
    ));
    total.value = Some(sum);

    let contract = ContractDefinition {
        id: contract_id,
        location: contract_loc,
        name: "Deep".into(),
        is_library: false,
        base_contracts: Vec::new(),
        sub_nodes: vec![Item::Definition(Definition::Variable(Arc::new(total)))],
    };
    let mut unit = SourceUnit::new(unit_id, unit_loc);
    unit.nodes
        .push(Item::Definition(Definition::Contract(Arc::new(contract))));
    let ast = fx.finish(vec![unit]);

    let text = serde_json::to_string(&CompilationDump::from_ast(&ast))?;
    let reloaded = load_compilation(&text)?;
    assert_eq!(reloaded.arena().len(), ast.arena().len());

    let exported = export_all(&reloaded, &default_config(&reloaded))?;
    let mut operand = &find_first(&exported[SOURCE], "VariableDeclaration")["value"];
    let mut depth = 0;
    while operand["nodeType"] == "BinaryOperation" {
        assert_eq!(operand["rightExpression"]["value"], "1");
        operand = &operand["leftExpression"];
        depth += 1;
    }
    assert_eq!(depth, TERMS - 1);
    assert_eq!(operand["nodeType"], "Identifier");
    assert_eq!(operand["value"], "a");
    Ok(())
}
