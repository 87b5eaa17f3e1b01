//! Conversion settings, fixed for the lifetime of a converter.

use std::{collections::BTreeMap, str::FromStr};

use crate::errors::SourceIndexError;

/// Layout of the emitted documents.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    /// `{id, src, nodeType, <attributes>}`
    #[default]
    Compact,
    /// `{id, src, name, attributes: {..}, children: [..]}`, embedded documents moved
    /// into `children`.
    Legacy,
}

/// Source file name to the small integer used in `src` strings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceIndices {
    indices: BTreeMap<String, u32>,
}

impl SourceIndices {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Numbers the given names by their position in sorted order, duplicates ignored.
    #[must_use]
    pub fn from_sorted_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort();
        names.dedup();
        names
            .into_iter()
            .zip(0u32..)
            .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, index: u32) {
        self.indices.insert(name.into(), index);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<u32> {
        self.indices.get(name).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.indices.iter().map(|(name, index)| (name.as_str(), *index))
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for SourceIndices {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self {
            indices: iter
                .into_iter()
                .map(|(name, index)| (name.into(), index))
                .collect(),
        }
    }
}

/// One `NAME=INDEX` assignment. The name may itself contain `=`; the last one separates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceIndexEntry {
    pub name: String,
    pub index: u32,
}

impl FromStr for SourceIndexEntry {
    type Err = SourceIndexError;

    fn from_str(pair: &str) -> Result<Self, Self::Err> {
        let Some((name, index)) = pair.rsplit_once('=') else {
            return Err(SourceIndexError::MissingSeparator(pair.to_string()));
        };
        if name.is_empty() {
            return Err(SourceIndexError::EmptyName(pair.to_string()));
        }
        let index = index
            .trim()
            .parse::<u32>()
            .map_err(|source| SourceIndexError::InvalidIndex {
                pair: pair.to_string(),
                source,
            })?;
        Ok(Self {
            name: name.to_string(),
            index,
        })
    }
}

impl FromIterator<SourceIndexEntry> for SourceIndices {
    fn from_iter<T: IntoIterator<Item = SourceIndexEntry>>(iter: T) -> Self {
        iter.into_iter()
            .map(|entry| (entry.name, entry.index))
            .collect()
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConverterConfig {
    pub schema: SchemaVariant,
    pub source_indices: SourceIndices,
}

impl ConverterConfig {
    #[must_use]
    pub fn new(schema: SchemaVariant, source_indices: SourceIndices) -> Self {
        Self {
            schema,
            source_indices,
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: SchemaVariant) -> Self {
        self.schema = schema;
        self
    }

    #[must_use]
    pub fn with_source_indices(mut self, source_indices: SourceIndices) -> Self {
        self.source_indices = source_indices;
        self
    }

    #[must_use]
    pub fn is_legacy(&self) -> bool {
        self.schema == SchemaVariant::Legacy
    }
}
