//! Well-known types from the `google.protobuf` package.

use prost::{DecodeError, Message, Name};
use serde::{Deserialize, Serialize};

/// `Any` carries an arbitrary serialized message together with a URL that
/// names its type.
///
/// The URL has the shape `type.googleapis.com/<fully-qualified-name>`; only
/// the part after the last `/` identifies the message type.
#[derive(Clone, PartialEq, Serialize, Deserialize, Message)]
pub struct Any {
    /// Type URL of the packed message, e.g.
    /// `"type.googleapis.com/google.rpc.BadRequest"`.
    #[prost(string, tag = "1")]
    pub type_url: String,
    /// Serialized bytes of the packed message.
    #[prost(bytes = "vec", tag = "2")]
    pub value: Vec<u8>,
}

impl Any {
    /// Pack a message into an `Any`, deriving the type URL from
    /// [`prost::Name`].
    pub fn from_msg<M>(msg: &M) -> Self
    where
        M: Name,
    {
        Self {
            type_url: M::type_url(),
            value: msg.encode_to_vec(),
        }
    }

    /// The fully-qualified type name declared by the type URL — everything
    /// after the last `/`, or the whole URL if it contains none.
    pub fn type_name(&self) -> &str {
        self.type_url
            .rsplit('/')
            .next()
            .unwrap_or(self.type_url.as_str())
    }

    /// Unpack into a concrete message type.
    ///
    /// Fails with a [`DecodeError`] if the declared type name does not match
    /// `M`, or if the payload bytes do not decode as `M`.
    pub fn to_msg<M>(&self) -> Result<M, DecodeError>
    where
        M: Name + Default,
    {
        let expected = M::full_name();
        if self.type_name() != expected {
            return Err(DecodeError::new(format!(
                "expected message of type {}, but type URL is {}",
                expected, self.type_url
            )));
        }
        M::decode(self.value.as_slice())
    }
}

impl Name for Any {
    const NAME: &'static str = "Any";
    const PACKAGE: &'static str = "google.protobuf";

    fn full_name() -> String {
        "google.protobuf.Any".to_string()
    }

    fn type_url() -> String {
        "type.googleapis.com/google.protobuf.Any".to_string()
    }
}

/// A signed span of time, as used by `RetryInfo.retry_delay`.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Message)]
pub struct Duration {
    /// Whole seconds; may be negative.
    #[prost(int64, tag = "1")]
    pub seconds: i64,
    /// Fractional seconds in nanoseconds; same sign as `seconds`.
    #[prost(int32, tag = "2")]
    pub nanos: i32,
}

impl Name for Duration {
    const NAME: &'static str = "Duration";
    const PACKAGE: &'static str = "google.protobuf";

    fn full_name() -> String {
        "google.protobuf.Duration".to_string()
    }

    fn type_url() -> String {
        "type.googleapis.com/google.protobuf.Duration".to_string()
    }
}
