//! `src` attribute encoding: `"<start>:<length>:<sourceIndex>"`.
//!
//! The length is `-1` unless both offsets are known. The source index is `-1` when the
//! location names no source or a source missing from the index table.

use core::fmt;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use solast_ast::nodes::Location;

use crate::{config::SourceIndices, errors::SrcLocationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SrcLocation {
    pub start: i64,
    pub length: i64,
    pub source_index: i64,
}

impl SrcLocation {
    #[must_use]
    pub fn from_location(location: &Location, indices: &SourceIndices) -> Self {
        let source_index = location
            .source_name
            .as_deref()
            .and_then(|name| indices.get(name))
            .map_or(-1, i64::from);
        let length = if location.is_known() {
            i64::from(location.end) - i64::from(location.start)
        } else {
            -1
        };
        Self {
            start: i64::from(location.start),
            length,
            source_index,
        }
    }

    /// End offset, when both the start and the length are known.
    #[must_use]
    pub fn end(&self) -> Option<i64> {
        (self.start >= 0 && self.length >= 0).then_some(self.start + self.length)
    }
}

/// Encodes `location` as a `src` string.
#[must_use]
pub fn encode(location: &Location, indices: &SourceIndices) -> String {
    SrcLocation::from_location(location, indices).to_string()
}

impl Display for SrcLocation {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.length, self.source_index)
    }
}

impl FromStr for SrcLocation {
    type Err = SrcLocationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = text.split(':').collect();
        let [start, length, source_index] = parts.as_slice() else {
            return Err(SrcLocationError::Malformed(text.to_string()));
        };
        let number = |field: &'static str, value: &str| {
            value
                .parse::<i64>()
                .map_err(|source| SrcLocationError::InvalidNumber {
                    field,
                    text: text.to_string(),
                    source,
                })
        };
        Ok(Self {
            start: number("start", start)?,
            length: number("length", length)?,
            source_index: number("source index", source_index)?,
        })
    }
}
