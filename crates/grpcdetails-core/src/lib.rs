//! grpcdetails-core — pull `google.rpc` error details out of gRPC trailing
//! metadata.
//!
//! Servers following the standard rich-error convention serialize a
//! `google.rpc.Status` — code, message, and a list of type-tagged payloads —
//! into the trailing metadata key `"grpc-status-details-bin"`. This crate
//! recovers the typed detail messages from that blob:
//! - [`Metadata`] / [`MetadataValue`] — a transport-neutral metadata model
//! - [`DetailRegistry`] — type name → decoder function mapping
//! - [`decode_status_details`] — the pipeline, generic over the registry
//! - [`decode_google_status_details`] — the same pipeline with the default
//!   ten-type [`google_registry`]
//!
//! ```
//! use grpcdetails_core::{decode_google_status_details, GoogleErrorDetail, Metadata,
//!     STATUS_DETAILS_KEY};
//! use grpcdetails_protos::protobuf::Any;
//! use grpcdetails_protos::rpc::{ErrorInfo, Status};
//! use prost::Message;
//!
//! let status = Status {
//!     code: 9,
//!     message: "FAILED_PRECONDITION".into(),
//!     details: vec![Any::from_msg(&ErrorInfo {
//!         reason: "SERVICE_DISABLED".into(),
//!         domain: "example.com".into(),
//!         metadata: Default::default(),
//!     })],
//! };
//! let mut trailers = Metadata::new();
//! trailers.insert_bin(STATUS_DETAILS_KEY, status.encode_to_vec());
//!
//! let decoded = decode_google_status_details(&trailers).unwrap().unwrap();
//! assert_eq!(decoded.status.code, 9);
//! assert!(matches!(&decoded.details[0], GoogleErrorDetail::ErrorInfo(info)
//!     if info.reason == "SERVICE_DISABLED"));
//! ```

pub mod decoder;
pub mod google;
pub mod metadata;
pub mod registry;

pub use decoder::{decode_status_details, DecodedStatus, TrailingMetadata, STATUS_DETAILS_KEY};
pub use google::{decode_google_status_details, google_registry, GoogleErrorDetail};
pub use metadata::{Metadata, MetadataValue};
pub use registry::{DecodeFn, DetailRegistry};
