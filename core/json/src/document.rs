//! The per-node output object.
//!
//! A [`Document`] keeps its attributes typed until it is rendered, so the same tree of
//! documents can be laid out in either [`SchemaVariant`] and inspected by tests without
//! re-parsing JSON.

use serde_json::{Map, Value};

use crate::{config::SchemaVariant, ensure_sufficient_stack, reference};

/// Value of one named attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// Scalar, enumerated label, list of scalars or map.
    Value(Value),
    /// Weak link to another node, `None` when unresolved.
    Reference(Option<u32>),
    References(Vec<u32>),
    /// Embedded child document, `None` for an absent optional child.
    Node(Option<Box<Document>>),
    /// Embedded child documents; entries may be absent.
    Nodes(Vec<Option<Document>>),
    /// List of small objects whose fields are attributes themselves.
    Records(Vec<Vec<(&'static str, Attribute)>>),
}

impl From<Value> for Attribute {
    fn from(value: Value) -> Self {
        Attribute::Value(value)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::Value(Value::from(value))
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Attribute::Value(Value::from(value))
    }
}

impl From<bool> for Attribute {
    fn from(value: bool) -> Self {
        Attribute::Value(Value::from(value))
    }
}

impl From<Document> for Attribute {
    fn from(document: Document) -> Self {
        Attribute::Node(Some(Box::new(document)))
    }
}

impl From<Option<Document>> for Attribute {
    fn from(document: Option<Document>) -> Self {
        Attribute::Node(document.map(Box::new))
    }
}

impl From<Vec<Document>> for Attribute {
    fn from(documents: Vec<Document>) -> Self {
        Attribute::Nodes(documents.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<Document>>> for Attribute {
    fn from(documents: Vec<Option<Document>>) -> Self {
        Attribute::Nodes(documents)
    }
}

impl Attribute {
    /// Embedded documents held directly by this attribute, in order.
    fn embedded(&self) -> Vec<&Document> {
        match self {
            Attribute::Value(_) | Attribute::Reference(_) | Attribute::References(_) => Vec::new(),
            Attribute::Node(node) => node.as_deref().into_iter().collect(),
            Attribute::Nodes(nodes) => nodes.iter().flatten().collect(),
            Attribute::Records(records) => records
                .iter()
                .flatten()
                .flat_map(|(_, field)| field.embedded())
                .collect(),
        }
    }

    fn render(&self, schema: SchemaVariant) -> Value {
        match self {
            Attribute::Value(value) => value.clone(),
            Attribute::Reference(id) => reference::id_or_null(*id),
            Attribute::References(ids) => reference::ids(ids),
            Attribute::Node(node) => node
                .as_ref()
                .map_or(Value::Null, |document| document.render(schema)),
            Attribute::Nodes(nodes) => Value::Array(
                nodes
                    .iter()
                    .map(|node| {
                        node.as_ref()
                            .map_or(Value::Null, |document| document.render(schema))
                    })
                    .collect(),
            ),
            Attribute::Records(records) => Value::Array(
                records
                    .iter()
                    .map(|fields| {
                        Value::Object(
                            fields
                                .iter()
                                .map(|(key, field)| ((*key).to_string(), field.render(schema)))
                                .collect(),
                        )
                    })
                    .collect(),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: u32,
    src: String,
    node_type: &'static str,
    attributes: Vec<(&'static str, Attribute)>,
}

impl Document {
    #[must_use]
    pub fn new(id: u32, src: String, node_type: &'static str) -> Self {
        Self {
            id,
            src,
            node_type,
            attributes: Vec::new(),
        }
    }

    /// Builder form of [`Document::set`].
    #[must_use]
    pub fn attribute(mut self, key: &'static str, value: impl Into<Attribute>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets `key`. An existing entry keeps its position and takes the new value.
    pub fn set(&mut self, key: &'static str, value: impl Into<Attribute>) {
        let value = value.into();
        if let Some(entry) = self.attributes.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.attributes.push((key, value));
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn src(&self) -> &str {
        &self.src
    }

    #[must_use]
    pub fn node_type(&self) -> &'static str {
        self.node_type
    }

    #[must_use]
    pub fn attributes(&self) -> &[(&'static str, Attribute)] {
        &self.attributes
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find_map(|(k, value)| (*k == key).then_some(value))
    }

    /// Directly embedded child documents in attribute order.
    #[must_use]
    pub fn children(&self) -> Vec<&Document> {
        self.attributes
            .iter()
            .flat_map(|(_, value)| value.embedded())
            .collect()
    }

    /// This document and all its descendants, pre-order.
    #[must_use]
    pub fn descendants(&self) -> Vec<&Document> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(document) = stack.pop() {
            result.push(document);
            stack.extend(document.children().into_iter().rev());
        }
        result
    }

    #[must_use]
    pub fn render(&self, schema: SchemaVariant) -> Value {
        match schema {
            SchemaVariant::Compact => self.render_compact(),
            SchemaVariant::Legacy => self.render_legacy(),
        }
    }

    fn render_compact(&self) -> Value {
        ensure_sufficient_stack(|| {
            let mut object = Map::new();
            object.insert("id".to_string(), Value::from(self.id));
            object.insert("src".to_string(), Value::from(self.src.clone()));
            object.insert("nodeType".to_string(), Value::from(self.node_type));
            for (key, value) in &self.attributes {
                object.insert((*key).to_string(), value.render(SchemaVariant::Compact));
            }
            Value::Object(object)
        })
    }

    fn render_legacy(&self) -> Value {
        ensure_sufficient_stack(|| self.render_legacy_object())
    }

    fn render_legacy_object(&self) -> Value {
        let mut attributes = Map::new();
        let mut children = Vec::new();
        for (key, value) in &self.attributes {
            match value {
                Attribute::Node(Some(document)) => {
                    children.push(document.render_legacy());
                }
                Attribute::Nodes(nodes) if nodes.iter().any(Option::is_some) => {
                    children.extend(nodes.iter().flatten().map(Document::render_legacy));
                }
                _ => {
                    attributes.insert((*key).to_string(), value.render(SchemaVariant::Legacy));
                }
            }
        }
        let mut object = Map::new();
        object.insert("id".to_string(), Value::from(self.id));
        object.insert("src".to_string(), Value::from(self.src.clone()));
        object.insert("name".to_string(), Value::from(self.node_type));
        object.insert("attributes".to_string(), Value::Object(attributes));
        if !children.is_empty() {
            object.insert("children".to_string(), Value::Array(children));
        }
        Value::Object(object)
    }
}
