//! A minimal model of gRPC call metadata.
//!
//! gRPC metadata is a multimap from string keys to values that are either
//! ASCII strings or (for `-bin` suffixed keys) raw bytes. The decoder only
//! needs lookups, but transports differ in how they hand the map over, so
//! this model stays independent of any one client library; adapters convert
//! into it.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single metadata value: an ASCII string or a raw byte sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetadataValue {
    /// An ASCII header value.
    Ascii(String),
    /// A binary header value, conventionally under a `-bin` suffixed key.
    Binary(Vec<u8>),
}

impl MetadataValue {
    /// The raw bytes, if this is a binary value.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Binary(bytes) => Some(bytes),
            Self::Ascii(_) => None,
        }
    }

    /// The string form, if this is an ASCII value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Ascii(s) => Some(s),
            Self::Binary(_) => None,
        }
    }
}

/// An ordered multimap of call metadata.
///
/// Lookups on an absent key yield an empty slice, never an error; values
/// under one key keep their insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    entries: HashMap<String, Vec<MetadataValue>>,
}

impl Metadata {
    /// Create an empty metadata map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an ASCII value under `key`.
    pub fn insert_ascii(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(MetadataValue::Ascii(value.into()));
    }

    /// Append a binary value under `key`.
    pub fn insert_bin(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries
            .entry(key.into())
            .or_default()
            .push(MetadataValue::Binary(value.into()));
    }

    /// All values under `key`, in insertion order. Empty for an absent key.
    pub fn get(&self, key: &str) -> &[MetadataValue] {
        self.entries.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys are present.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_key_yields_empty_slice() {
        let md = Metadata::new();
        assert!(md.get("grpc-status-details-bin").is_empty());
    }

    #[test]
    fn values_keep_insertion_order() {
        let mut md = Metadata::new();
        md.insert_ascii("x-request-id", "a");
        md.insert_ascii("x-request-id", "b");
        let values = md.get("x-request-id");
        assert_eq!(values.len(), 2);
        assert_eq!(values[0].as_str(), Some("a"));
        assert_eq!(values[1].as_str(), Some("b"));
    }

    #[test]
    fn binary_and_ascii_values_are_distinct() {
        let mut md = Metadata::new();
        md.insert_bin("k-bin", vec![1, 2, 3]);
        md.insert_ascii("k", "v");
        assert_eq!(md.get("k-bin")[0].as_bytes(), Some(&[1u8, 2, 3][..]));
        assert_eq!(md.get("k-bin")[0].as_str(), None);
        assert_eq!(md.get("k")[0].as_bytes(), None);
        assert_eq!(md.len(), 2);
    }
}
