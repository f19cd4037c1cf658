//! grpcdetails-tonic — decode `google.rpc` error details straight off a
//! [`tonic::Status`].
//!
//! tonic keeps call metadata in its own [`MetadataMap`]; this crate converts
//! that into the transport-neutral [`Metadata`] model and exposes both decode
//! entry points as methods on `tonic::Status` via [`StatusExt`].
//!
//! ```no_run
//! use grpcdetails_tonic::StatusExt;
//!
//! # fn handle(status: tonic::Status) {
//! match status.decode_details() {
//!     Ok(Some(decoded)) => {
//!         for detail in &decoded.details {
//!             println!("detail: {detail:?}");
//!         }
//!     }
//!     Ok(None) => { /* server did not use the convention */ }
//!     Err(err) => eprintln!("corrupt status details: {err}"),
//! }
//! # }
//! ```

use grpcdetails_core::{
    decode_google_status_details, decode_status_details, DecodedStatus, DetailRegistry,
    GoogleErrorDetail, Metadata,
};
use prost::DecodeError;
use tonic::metadata::{KeyAndValueRef, MetadataMap};

/// Convert a tonic [`MetadataMap`] into the transport-neutral [`Metadata`]
/// model.
///
/// Entries that fail tonic's own value validation (non-ASCII text, invalid
/// base64 under a `-bin` key) are skipped with a warning; to the decoder
/// they then simply look absent.
pub fn metadata_from_map(map: &MetadataMap) -> Metadata {
    let mut metadata = Metadata::new();
    for entry in map.iter() {
        match entry {
            KeyAndValueRef::Ascii(key, value) => match value.to_str() {
                Ok(text) => metadata.insert_ascii(key.as_str(), text),
                Err(_) => {
                    tracing::warn!("skipping non-ASCII metadata value for '{}'", key.as_str());
                }
            },
            KeyAndValueRef::Binary(key, value) => match value.to_bytes() {
                Ok(bytes) => metadata.insert_bin(key.as_str(), bytes.to_vec()),
                Err(_) => {
                    tracing::warn!(
                        "skipping undecodable binary metadata value for '{}'",
                        key.as_str()
                    );
                }
            },
        }
    }
    metadata
}

/// Decode entry points on [`tonic::Status`].
pub trait StatusExt {
    /// Decode the error-details envelope from this status's metadata with an
    /// explicit registry.
    ///
    /// `Ok(None)` when the status does not carry the convention; a malformed
    /// envelope or a failing registered decoder propagates the
    /// [`DecodeError`] unchanged.
    fn decode_details_with<T>(
        &self,
        registry: &DetailRegistry<T>,
    ) -> Result<Option<DecodedStatus<T>>, DecodeError>;

    /// [`StatusExt::decode_details_with`] against the default registry of
    /// the ten standard `google.rpc` detail types.
    fn decode_details(&self) -> Result<Option<DecodedStatus<GoogleErrorDetail>>, DecodeError>;
}

impl StatusExt for tonic::Status {
    fn decode_details_with<T>(
        &self,
        registry: &DetailRegistry<T>,
    ) -> Result<Option<DecodedStatus<T>>, DecodeError> {
        let metadata = metadata_from_map(self.metadata());
        decode_status_details(&metadata, registry)
    }

    fn decode_details(&self) -> Result<Option<DecodedStatus<GoogleErrorDetail>>, DecodeError> {
        let metadata = metadata_from_map(self.metadata());
        decode_google_status_details(&metadata)
    }
}
