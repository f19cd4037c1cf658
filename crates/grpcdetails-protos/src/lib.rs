//! grpcdetails-protos — protobuf schemas for the gRPC error-details convention.
//!
//! Hand-maintained `prost` renderings of the messages the convention is built
//! on, mirroring the upstream proto packages:
//! - [`protobuf`] — well-known types: [`Any`](protobuf::Any) and
//!   [`Duration`](protobuf::Duration)
//! - [`rpc`] — [`Status`](rpc::Status) and the ten standard `google.rpc`
//!   error-detail messages
//!
//! Every message implements [`prost::Name`] with its canonical
//! `type.googleapis.com/…` type URL, so packing and unpacking through
//! [`Any`](protobuf::Any) round-trips against servers that follow the
//! standard convention.

pub mod protobuf;
pub mod rpc;

pub use protobuf::{Any, Duration};
pub use rpc::Status;
