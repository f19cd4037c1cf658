//! Detail registry — maps fully-qualified type names to decoder functions.

use std::collections::HashMap;

use prost::DecodeError;

/// A decoder for one detail message type: serialized bytes in, a decoded
/// value out.
pub type DecodeFn<T> = fn(&[u8]) -> Result<T, DecodeError>;

/// A mapping from fully-qualified protobuf type names (e.g.
/// `"google.rpc.BadRequest"`) to decoder functions producing `T`.
///
/// A registry is just data: construction performs no validation, and entries
/// that never match a payload are dead weight. It is immutable during a
/// decode call and, holding only plain `fn` pointers, is `Send + Sync` and
/// safe to share across any number of concurrent decodes.
///
/// ```
/// use grpcdetails_core::{DecodeFn, DetailRegistry};
/// use grpcdetails_protos::rpc::BadRequest;
/// use prost::Message;
///
/// let decode: DecodeFn<BadRequest> = |bytes| BadRequest::decode(bytes);
/// let registry = DetailRegistry::from([("google.rpc.BadRequest", decode)]);
/// assert_eq!(registry.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct DetailRegistry<T> {
    decoders: HashMap<String, DecodeFn<T>>,
}

impl<T> DetailRegistry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Register a decoder for `type_name`, replacing any previous entry for
    /// the same name.
    pub fn register(&mut self, type_name: impl Into<String>, decoder: DecodeFn<T>) {
        self.decoders.insert(type_name.into(), decoder);
    }

    /// Look up the decoder for `type_name`.
    pub fn decoder_for(&self, type_name: &str) -> Option<DecodeFn<T>> {
        self.decoders.get(type_name).copied()
    }

    /// Returns `true` if a decoder is registered for `type_name`.
    pub fn contains(&self, type_name: &str) -> bool {
        self.decoders.contains_key(type_name)
    }

    /// The registered type names, in no particular order.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.decoders.keys().map(String::as_str)
    }

    /// Number of registered decoders.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Returns `true` if no decoders are registered.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

impl<T> Default for DetailRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: Into<String>> FromIterator<(S, DecodeFn<T>)> for DetailRegistry<T> {
    fn from_iter<I: IntoIterator<Item = (S, DecodeFn<T>)>>(iter: I) -> Self {
        Self {
            decoders: iter
                .into_iter()
                .map(|(name, decoder)| (name.into(), decoder))
                .collect(),
        }
    }
}

impl<T, S: Into<String>, const N: usize> From<[(S, DecodeFn<T>); N]> for DetailRegistry<T> {
    fn from(entries: [(S, DecodeFn<T>); N]) -> Self {
        entries.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grpcdetails_protos::rpc::RequestInfo;
    use prost::Message;

    fn decode_request_info(bytes: &[u8]) -> Result<RequestInfo, DecodeError> {
        RequestInfo::decode(bytes)
    }

    #[test]
    fn register_and_lookup() {
        let mut reg = DetailRegistry::new();
        reg.register("google.rpc.RequestInfo", decode_request_info);
        assert!(reg.contains("google.rpc.RequestInfo"));
        assert!(reg.decoder_for("google.rpc.RequestInfo").is_some());
        assert!(reg.decoder_for("google.rpc.Help").is_none());
    }

    #[test]
    fn later_registration_wins() {
        let mut reg: DetailRegistry<RequestInfo> = DetailRegistry::new();
        reg.register("google.rpc.RequestInfo", |_| {
            Err(DecodeError::new("first"))
        });
        reg.register("google.rpc.RequestInfo", decode_request_info);
        assert_eq!(reg.len(), 1);
        let decoder = reg.decoder_for("google.rpc.RequestInfo").unwrap();
        assert!(decoder(&[]).is_ok());
    }

    #[test]
    fn from_mapping_literal() {
        let reg = DetailRegistry::from([(
            "google.rpc.RequestInfo",
            decode_request_info as DecodeFn<RequestInfo>,
        )]);
        assert_eq!(reg.len(), 1);
        assert_eq!(
            reg.type_names().collect::<Vec<_>>(),
            vec!["google.rpc.RequestInfo"]
        );
    }

    #[test]
    fn empty_registry() {
        let reg: DetailRegistry<RequestInfo> = DetailRegistry::default();
        assert!(reg.is_empty());
        assert!(!reg.contains("google.rpc.RequestInfo"));
    }
}
