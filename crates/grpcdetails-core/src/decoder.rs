//! The status-detail decoding pipeline.
//!
//! Decode order:
//! 1. Locate the binary blob under `"grpc-status-details-bin"` in the error's
//!    trailing metadata → returns `Ok(None)` when absent or mis-typed.
//! 2. Parse the blob as a `google.rpc.Status` envelope → a parse fault
//!    propagates unchanged.
//! 3. Resolve each packed payload against the registry, dropping payloads of
//!    unknown type and keeping envelope order.

use grpcdetails_protos::rpc::Status;
use prost::{DecodeError, Message};

use crate::metadata::{Metadata, MetadataValue};
use crate::registry::DetailRegistry;

/// The reserved metadata key carrying the serialized `google.rpc.Status`.
///
/// Fixed and case-sensitive; this is the interoperability contract with gRPC
/// servers that follow the standard error-details convention.
pub const STATUS_DETAILS_KEY: &str = "grpc-status-details-bin";

/// A transport-level error that may carry trailing metadata.
///
/// Transports that keep metadata in their own types (tonic, for one) convert
/// into [`Metadata`] in their adapter crate; `Metadata` itself implements
/// this trait so a bare map can be decoded directly.
pub trait TrailingMetadata {
    /// The trailing metadata attached to the error, if any.
    fn trailing_metadata(&self) -> Option<&Metadata>;
}

impl TrailingMetadata for Metadata {
    fn trailing_metadata(&self) -> Option<&Metadata> {
        Some(self)
    }
}

/// The output of a successful decode: the full parsed envelope plus every
/// detail payload the registry could resolve, in envelope order.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedStatus<T> {
    /// The parsed `google.rpc.Status`, with `code`, `message`, and the raw
    /// packed payloads intact regardless of registry coverage.
    pub status: Status,
    /// The resolved detail messages. Payloads whose type name had no
    /// registry entry are absent, not replaced by placeholders.
    pub details: Vec<T>,
}

/// Decode the error-details envelope out of `error`'s trailing metadata,
/// resolving payloads with `registry`.
///
/// Returns `Ok(None)` when the error carries no metadata, the reserved key
/// has no value, or its first value is ASCII rather than binary — absence of
/// the convention is a normal outcome, not a fault. A malformed envelope, or
/// a registered decoder failing on a payload's bytes, surfaces as
/// `Err(DecodeError)` unchanged.
///
/// ```
/// use grpcdetails_core::{decode_status_details, DecodeFn, DetailRegistry, Metadata};
/// use grpcdetails_protos::rpc::Help;
/// use prost::Message;
///
/// let decode_help: DecodeFn<Help> = |bytes| Help::decode(bytes);
/// let registry = DetailRegistry::from([("google.rpc.Help", decode_help)]);
///
/// let metadata = Metadata::new();
/// assert!(decode_status_details(&metadata, &registry).unwrap().is_none());
/// ```
pub fn decode_status_details<E, T>(
    error: &E,
    registry: &DetailRegistry<T>,
) -> Result<Option<DecodedStatus<T>>, DecodeError>
where
    E: TrailingMetadata + ?Sized,
{
    let Some(metadata) = error.trailing_metadata() else {
        return Ok(None);
    };
    // Only the first value matters; the convention writes exactly one.
    let Some(value) = metadata.get(STATUS_DETAILS_KEY).first() else {
        return Ok(None);
    };
    let MetadataValue::Binary(blob) = value else {
        // A string under a -bin key is a mis-set header, treated as absent.
        return Ok(None);
    };

    let status = Status::decode(blob.as_slice())?;

    let mut details = Vec::with_capacity(status.details.len());
    for payload in &status.details {
        if let Some(decode) = registry.decoder_for(payload.type_name()) {
            details.push(decode(&payload.value)?);
        }
    }

    Ok(Some(DecodedStatus { status, details }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use grpcdetails_protos::protobuf::Any;
    use grpcdetails_protos::rpc::{help, Help, LocalizedMessage};

    fn decode_help(bytes: &[u8]) -> Result<Help, DecodeError> {
        Help::decode(bytes)
    }

    fn help_registry() -> DetailRegistry<Help> {
        let mut reg = DetailRegistry::new();
        reg.register("google.rpc.Help", decode_help);
        reg
    }

    fn metadata_with_status(status: &Status) -> Metadata {
        let mut md = Metadata::new();
        md.insert_bin(STATUS_DETAILS_KEY, status.encode_to_vec());
        md
    }

    #[test]
    fn missing_key_decodes_to_none() {
        let mut md = Metadata::new();
        md.insert_ascii("content-type", "application/grpc");
        let result = decode_status_details(&md, &help_registry()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn ascii_value_under_reserved_key_decodes_to_none() {
        let mut md = Metadata::new();
        md.insert_ascii(STATUS_DETAILS_KEY, "not binary");
        let result = decode_status_details(&md, &help_registry()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn malformed_envelope_propagates_decode_error() {
        let mut md = Metadata::new();
        // 0xff opens a field with an invalid wire type.
        md.insert_bin(STATUS_DETAILS_KEY, vec![0xff, 0xff, 0xff, 0xff]);
        let result = decode_status_details(&md, &help_registry());
        assert!(result.is_err());
    }

    #[test]
    fn unknown_payload_types_are_dropped() {
        let status = Status {
            code: 5,
            message: "NOT_FOUND".into(),
            details: vec![
                Any::from_msg(&LocalizedMessage {
                    locale: "en-US".into(),
                    message: "not found".into(),
                }),
                Any::from_msg(&Help {
                    links: vec![help::Link {
                        description: "docs".into(),
                        url: "https://example.com/docs".into(),
                    }],
                }),
            ],
        };
        let md = metadata_with_status(&status);

        let decoded = decode_status_details(&md, &help_registry())
            .unwrap()
            .expect("details should be present");
        assert_eq!(decoded.status.code, 5);
        // LocalizedMessage has no registry entry and is silently skipped.
        assert_eq!(decoded.details.len(), 1);
        assert_eq!(decoded.details[0].links[0].url, "https://example.com/docs");
        // The envelope keeps both raw payloads.
        assert_eq!(decoded.status.details.len(), 2);
    }

    #[test]
    fn empty_registry_keeps_envelope_fields() {
        let status = Status {
            code: 13,
            message: "INTERNAL: boom".into(),
            details: vec![Any::from_msg(&Help::default())],
        };
        let md = metadata_with_status(&status);

        let registry: DetailRegistry<Help> = DetailRegistry::new();
        let decoded = decode_status_details(&md, &registry).unwrap().unwrap();
        assert!(decoded.details.is_empty());
        assert_eq!(decoded.status.code, 13);
        assert_eq!(decoded.status.message, "INTERNAL: boom");
    }

    #[test]
    fn known_type_with_corrupt_bytes_propagates() {
        let status = Status {
            code: 3,
            message: "INVALID_ARGUMENT".into(),
            details: vec![Any {
                type_url: "type.googleapis.com/google.rpc.Help".into(),
                value: vec![0xff, 0xff],
            }],
        };
        let md = metadata_with_status(&status);

        let result = decode_status_details(&md, &help_registry());
        assert!(result.is_err());
    }
}
