//! The `google.rpc` package: the `Status` envelope and the ten standard
//! error-detail messages from `error_details.proto`.

use std::collections::HashMap;

use prost::{Message, Name};
use serde::{Deserialize, Serialize};

use crate::protobuf::{Any, Duration};

/// The canonical gRPC error envelope.
///
/// `code` is a `google.rpc.Code` value, `message` a developer-facing
/// description, and `details` an ordered list of packed error-detail
/// messages.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct Status {
    /// The status code (a `google.rpc.Code` enum value).
    #[prost(int32, tag = "1")]
    pub code: i32,
    /// Developer-facing error message in English.
    #[prost(string, tag = "2")]
    pub message: String,
    /// Messages carrying the error details, each packed as an `Any`.
    #[prost(message, repeated, tag = "3")]
    pub details: Vec<Any>,
}

/// Describes when a failed request may be retried.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct RetryInfo {
    /// Minimum delay clients should wait before retrying.
    #[prost(message, optional, tag = "1")]
    pub retry_delay: Option<Duration>,
}

/// Server-side debugging information, such as a stack trace.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct DebugInfo {
    /// Stack trace entries, most recent call first.
    #[prost(string, repeated, tag = "1")]
    pub stack_entries: Vec<String>,
    /// Additional debugging detail.
    #[prost(string, tag = "2")]
    pub detail: String,
}

/// Describes how a quota check failed.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct QuotaFailure {
    /// All quota violations for the failed request.
    #[prost(message, repeated, tag = "1")]
    pub violations: Vec<quota_failure::Violation>,
}

/// Nested message types in `QuotaFailure`.
pub mod quota_failure {
    use serde::{Deserialize, Serialize};

    /// A single quota violation.
    #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
    pub struct Violation {
        /// The subject on which the quota check failed, e.g.
        /// `"clientip:1.2.3.4"`.
        #[prost(string, tag = "1")]
        pub subject: String,
        /// Description of how the quota check failed.
        #[prost(string, tag = "2")]
        pub description: String,
    }
}

/// Describes what preconditions have failed.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct PreconditionFailure {
    /// All precondition violations.
    #[prost(message, repeated, tag = "1")]
    pub violations: Vec<precondition_failure::Violation>,
}

/// Nested message types in `PreconditionFailure`.
pub mod precondition_failure {
    use serde::{Deserialize, Serialize};

    /// A single failed precondition.
    #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
    pub struct Violation {
        /// The type of the violation, e.g. `"TOS"` for terms of service.
        #[prost(string, tag = "1")]
        pub r#type: String,
        /// The subject relative to the type, e.g. `"google.com/cloud"`.
        #[prost(string, tag = "2")]
        pub subject: String,
        /// Description of why the precondition failed.
        #[prost(string, tag = "3")]
        pub description: String,
    }
}

/// Describes violations in a client request, typically field validation
/// errors on an `INVALID_ARGUMENT` status.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct BadRequest {
    /// All violations in the request.
    #[prost(message, repeated, tag = "1")]
    pub field_violations: Vec<bad_request::FieldViolation>,
}

/// Nested message types in `BadRequest`.
pub mod bad_request {
    use serde::{Deserialize, Serialize};

    /// A single bad-request field violation.
    #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
    pub struct FieldViolation {
        /// Path to the offending field, e.g. `"violations.field"`.
        #[prost(string, tag = "1")]
        pub field: String,
        /// Description of why the field is bad.
        #[prost(string, tag = "2")]
        pub description: String,
    }
}

/// Metadata about the request that clients can attach when reporting an
/// issue.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct RequestInfo {
    /// An opaque string usable by the server to identify the request.
    #[prost(string, tag = "1")]
    pub request_id: String,
    /// Any data that was used to serve this request.
    #[prost(string, tag = "2")]
    pub serving_data: String,
}

/// Describes the resource that is being accessed.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct ResourceInfo {
    /// The type of the resource, e.g. `"sql table"` or a type URL.
    #[prost(string, tag = "1")]
    pub resource_type: String,
    /// The name of the resource being accessed.
    #[prost(string, tag = "2")]
    pub resource_name: String,
    /// The owner of the resource, if applicable.
    #[prost(string, tag = "3")]
    pub owner: String,
    /// What error is encountered when accessing this resource.
    #[prost(string, tag = "4")]
    pub description: String,
}

/// Links to documentation or resources that may help with the error.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct Help {
    /// URLs pointing to additional context on the error.
    #[prost(message, repeated, tag = "1")]
    pub links: Vec<help::Link>,
}

/// Nested message types in `Help`.
pub mod help {
    use serde::{Deserialize, Serialize};

    /// A URL pointing to a helpful resource.
    #[derive(Clone, PartialEq, Serialize, Deserialize, ::prost::Message)]
    pub struct Link {
        /// Description of what the link offers.
        #[prost(string, tag = "1")]
        pub description: String,
        /// The URL of the link.
        #[prost(string, tag = "2")]
        pub url: String,
    }
}

/// A localized error message safe to show to users.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct LocalizedMessage {
    /// BCP-47 locale, e.g. `"en-US"`.
    #[prost(string, tag = "1")]
    pub locale: String,
    /// The localized message in the given locale.
    #[prost(string, tag = "2")]
    pub message: String,
}

/// Structured cause of the error, identified by a stable reason within an
/// error domain.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct ErrorInfo {
    /// The reason of the error, a constant within `domain`.
    #[prost(string, tag = "1")]
    pub reason: String,
    /// The logical grouping for `reason`, typically a service name.
    #[prost(string, tag = "2")]
    pub domain: String,
    /// Additional structured details about the error.
    #[prost(map = "string, string", tag = "3")]
    pub metadata: HashMap<String, String>,
}

macro_rules! impl_rpc_name {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl Name for $ty {
                const NAME: &'static str = stringify!($ty);
                const PACKAGE: &'static str = "google.rpc";

                fn full_name() -> String {
                    concat!("google.rpc.", stringify!($ty)).to_string()
                }

                fn type_url() -> String {
                    concat!("type.googleapis.com/google.rpc.", stringify!($ty)).to_string()
                }
            }
        )+
    };
}

impl_rpc_name!(
    Status,
    RetryInfo,
    DebugInfo,
    QuotaFailure,
    PreconditionFailure,
    BadRequest,
    RequestInfo,
    ResourceInfo,
    Help,
    LocalizedMessage,
    ErrorInfo,
);
