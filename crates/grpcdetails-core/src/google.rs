//! The default registry covering the ten standard `google.rpc` detail types.

use std::sync::LazyLock;

use grpcdetails_protos::rpc::{
    BadRequest, DebugInfo, ErrorInfo, Help, LocalizedMessage, PreconditionFailure, QuotaFailure,
    RequestInfo, ResourceInfo, RetryInfo,
};
use prost::{DecodeError, Message};
use serde::{Deserialize, Serialize};

use crate::decoder::{decode_status_details, DecodedStatus, TrailingMetadata};
use crate::registry::DetailRegistry;

/// A decoded standard error detail, one variant per `google.rpc` type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GoogleErrorDetail {
    /// `google.rpc.RetryInfo`
    RetryInfo(RetryInfo),
    /// `google.rpc.DebugInfo`
    DebugInfo(DebugInfo),
    /// `google.rpc.QuotaFailure`
    QuotaFailure(QuotaFailure),
    /// `google.rpc.PreconditionFailure`
    PreconditionFailure(PreconditionFailure),
    /// `google.rpc.BadRequest`
    BadRequest(BadRequest),
    /// `google.rpc.RequestInfo`
    RequestInfo(RequestInfo),
    /// `google.rpc.ResourceInfo`
    ResourceInfo(ResourceInfo),
    /// `google.rpc.Help`
    Help(Help),
    /// `google.rpc.LocalizedMessage`
    LocalizedMessage(LocalizedMessage),
    /// `google.rpc.ErrorInfo`
    ErrorInfo(ErrorInfo),
}

impl GoogleErrorDetail {
    /// The fully-qualified type name of the wrapped message.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::RetryInfo(_) => "google.rpc.RetryInfo",
            Self::DebugInfo(_) => "google.rpc.DebugInfo",
            Self::QuotaFailure(_) => "google.rpc.QuotaFailure",
            Self::PreconditionFailure(_) => "google.rpc.PreconditionFailure",
            Self::BadRequest(_) => "google.rpc.BadRequest",
            Self::RequestInfo(_) => "google.rpc.RequestInfo",
            Self::ResourceInfo(_) => "google.rpc.ResourceInfo",
            Self::Help(_) => "google.rpc.Help",
            Self::LocalizedMessage(_) => "google.rpc.LocalizedMessage",
            Self::ErrorInfo(_) => "google.rpc.ErrorInfo",
        }
    }
}

static GOOGLE_REGISTRY: LazyLock<DetailRegistry<GoogleErrorDetail>> =
    LazyLock::new(google_registry);

/// Build a fresh registry covering the ten standard `google.rpc` detail
/// types.
///
/// Useful as a starting point when registering additional project-specific
/// types; [`decode_google_status_details`] uses a shared instance of this
/// mapping.
pub fn google_registry() -> DetailRegistry<GoogleErrorDetail> {
    DetailRegistry::from([
        (
            "google.rpc.RetryInfo",
            (|b| RetryInfo::decode(b).map(GoogleErrorDetail::RetryInfo))
                as crate::registry::DecodeFn<GoogleErrorDetail>,
        ),
        (
            "google.rpc.DebugInfo",
            |b| DebugInfo::decode(b).map(GoogleErrorDetail::DebugInfo),
        ),
        (
            "google.rpc.QuotaFailure",
            |b| QuotaFailure::decode(b).map(GoogleErrorDetail::QuotaFailure),
        ),
        (
            "google.rpc.PreconditionFailure",
            |b| PreconditionFailure::decode(b).map(GoogleErrorDetail::PreconditionFailure),
        ),
        (
            "google.rpc.BadRequest",
            |b| BadRequest::decode(b).map(GoogleErrorDetail::BadRequest),
        ),
        (
            "google.rpc.RequestInfo",
            |b| RequestInfo::decode(b).map(GoogleErrorDetail::RequestInfo),
        ),
        (
            "google.rpc.ResourceInfo",
            |b| ResourceInfo::decode(b).map(GoogleErrorDetail::ResourceInfo),
        ),
        (
            "google.rpc.Help",
            |b| Help::decode(b).map(GoogleErrorDetail::Help),
        ),
        (
            "google.rpc.LocalizedMessage",
            |b| LocalizedMessage::decode(b).map(GoogleErrorDetail::LocalizedMessage),
        ),
        (
            "google.rpc.ErrorInfo",
            |b| ErrorInfo::decode(b).map(GoogleErrorDetail::ErrorInfo),
        ),
    ])
}

/// [`decode_status_details`] with the registry fixed to the ten standard
/// `google.rpc` detail types.
pub fn decode_google_status_details<E>(
    error: &E,
) -> Result<Option<DecodedStatus<GoogleErrorDetail>>, DecodeError>
where
    E: TrailingMetadata + ?Sized,
{
    decode_status_details(error, &GOOGLE_REGISTRY)
}
