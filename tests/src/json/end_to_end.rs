use solast_json::{config::SchemaVariant, converter::AstJsonConverter};

use crate::{
    fixtures::simple_contract,
    utils::{compact, legacy},
};

const IDENTIFIER: &str = concat!(
    r#"{"id":11,"src":"43:1:0","nodeType":"Identifier","value":"x","type":"uint256","#,
    r#""referencedDeclaration":3,"overloadedDeclarations":[]}"#
);

const LITERAL: &str = concat!(
    r#"{"id":12,"src":"47:1:0","nodeType":"Literal","token":null,"value":"1","#,
    r#""hexvalue":"31","subdenomination":null,"type":"int_const 1"}"#
);

fn body() -> String {
    let assignment = format!(
        r#"{{"id":10,"src":"43:5:0","nodeType":"Assignment","operator":"=","type":"uint256","leftHandSide":{IDENTIFIER},"rightHandSide":{LITERAL}}}"#
    );
    format!(
        r#"{{"id":8,"src":"41:10:0","nodeType":"Block","statements":[{{"id":9,"src":"43:5:0","nodeType":"ExpressionStatement","expression":{assignment}}}]}}"#
    )
}

fn function() -> String {
    let parameters = r#"{"id":6,"src":"31:2:0","nodeType":"ParameterList","parameters":[]}"#;
    let return_parameters = r#"{"id":7,"src":"41:0:0","nodeType":"ParameterList","parameters":[]}"#;
    format!(
        concat!(
            r#"{{"id":5,"src":"21:30:0","nodeType":"FunctionDefinition","name":"f","#,
            r#""constant":false,"payable":false,"visibility":"public","parameters":{},"#,
            r#""isConstructor":false,"returnParameters":{},"modifiers":[],"body":{},"#,
            r#""isImplemented":true,"scope":2}}"#
        ),
        parameters,
        return_parameters,
        body()
    )
}

const STATE_VARIABLE: &str = concat!(
    r#"{"id":3,"src":"13:6:0","nodeType":"VariableDeclaration","name":"x","type":"uint256","#,
    r#""constant":false,"storageLocation":"default","visibility":"internal","value":null,"#,
    r#""scope":2,"typeName":{"id":4,"src":"13:4:0","nodeType":"ElementaryTypeName","name":"uint"}}"#
);

fn source_unit() -> String {
    let contract = format!(
        concat!(
            r#"{{"id":2,"src":"0:53:0","nodeType":"ContractDefinition","name":"C","#,
            r#""isLibrary":false,"fullyImplemented":true,"linearizedBaseContracts":[2],"#,
            r#""contractDependencies":[],"baseContracts":[],"nodes":[{},{}],"scope":1}}"#
        ),
        STATE_VARIABLE,
        function()
    );
    format!(
        r#"{{"id":1,"src":"0:53:0","nodeType":"SourceUnit","absolutePath":"a.sol","exportedSymbols":{{"C":[2]}},"nodes":[{contract}]}}"#
    )
}

#[test]
fn test_simple_contract_compact() {
    let ast = simple_contract();
    assert_eq!(compact(&ast, 1).to_string(), source_unit());
}

#[test]
fn test_simple_contract_subtrees() {
    let ast = simple_contract();
    assert_eq!(compact(&ast, 11).to_string(), IDENTIFIER);
    assert_eq!(compact(&ast, 12).to_string(), LITERAL);
    assert_eq!(compact(&ast, 3).to_string(), STATE_VARIABLE);
    assert_eq!(compact(&ast, 5).to_string(), function());
}

#[test]
fn test_simple_contract_legacy_identifier() {
    let ast = simple_contract();
    assert_eq!(
        legacy(&ast, 11).to_string(),
        concat!(
            r#"{"id":11,"src":"43:1:0","name":"Identifier","attributes":{"value":"x","#,
            r#""type":"uint256","referencedDeclaration":3,"overloadedDeclarations":[]}}"#
        )
    );
}

#[test]
fn test_print_writes_compact_text() {
    let ast = simple_contract();
    let converter = AstJsonConverter::new(&ast, solast::default_config(&ast));
    let node = ast.find_node(1).unwrap();
    let mut out = Vec::new();
    converter.print(&mut out, node).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), source_unit());
    assert_eq!(converter.config().schema, SchemaVariant::Compact);
}

#[test]
fn test_pretty_and_compact_strings_agree() {
    let ast = simple_contract();
    let converter = AstJsonConverter::new(&ast, solast::default_config(&ast));
    let node = ast.find_node(5).unwrap();
    let pretty = converter.to_json_string(node, true).unwrap();
    let plain = converter.to_json_string(node, false).unwrap();
    assert!(pretty.contains('\n'));
    assert!(!plain.contains('\n'));
    let pretty: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    let plain: serde_json::Value = serde_json::from_str(&plain).unwrap();
    assert_eq!(pretty, plain);
}
