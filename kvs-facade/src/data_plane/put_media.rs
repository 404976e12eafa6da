//! PutMedia extension for the media-ingest surface.
//!
//! The external operation dictionary does not carry PutMedia, so the pool
//! wraps every media-ingest client with an extension that advertises the
//! operation and issues it through the transport's raw descriptor-call
//! mechanism. Registration happens once, at client construction, into a
//! per-client descriptor table; no shared or global dictionary is mutated.

use crate::error::UpstreamError;
use crate::transport::{
    AuthMode, CallArgs, CallResponse, HeaderBinding, OperationDescriptor, TransportClient,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Operation name registered by the extension.
pub const PUT_MEDIA: &str = "PutMedia";

const FRAGMENT_TIMECODE_TYPE_MEMBER: &str = "FragmentTimecodeType";
const PRODUCER_START_TIMESTAMP_MEMBER: &str = "ProducerStartTimestamp";
const PAYLOAD_MEMBER: &str = "Payload";

/// Whether fragment timecodes in the uploaded payload are absolute timestamps
/// or relative to the producer start timestamp. Serializes to the wire enum
/// values `ABSOLUTE`/`RELATIVE`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FragmentTimecodeType {
    Absolute,
    Relative,
}

impl FragmentTimecodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FragmentTimecodeType::Absolute => "ABSOLUTE",
            FragmentTimecodeType::Relative => "RELATIVE",
        }
    }
}

/// Builds the PutMedia wire descriptor: `POST /putMedia` with header-bound
/// inputs, a streamed request/response payload, and an unsigned body.
pub fn put_media_descriptor() -> OperationDescriptor {
    OperationDescriptor {
        name: PUT_MEDIA.to_string(),
        http_method: "POST".to_string(),
        request_uri: "/putMedia".to_string(),
        header_bindings: vec![
            HeaderBinding::new(
                FRAGMENT_TIMECODE_TYPE_MEMBER,
                "x-amzn-fragment-timecode-type",
            ),
            HeaderBinding::new(
                PRODUCER_START_TIMESTAMP_MEMBER,
                "x-amzn-producer-start-timestamp",
            ),
            HeaderBinding::new("StreamARN", "x-amzn-stream-arn"),
            HeaderBinding::new("StreamName", "x-amzn-stream-name"),
        ],
        required_members: vec![
            FRAGMENT_TIMECODE_TYPE_MEMBER.to_string(),
            PRODUCER_START_TIMESTAMP_MEMBER.to_string(),
        ],
        payload_member: Some(PAYLOAD_MEMBER.to_string()),
        response_payload_member: Some(PAYLOAD_MEMBER.to_string()),
        error_kinds: vec![
            "ResourceNotFoundException".to_string(),
            "NotAuthorizedException".to_string(),
            "InvalidEndpointException".to_string(),
            "ClientLimitExceededException".to_string(),
            "ConnectionLimitExceededException".to_string(),
            "InvalidArgumentException".to_string(),
        ],
        auth: AuthMode::V4UnsignedBody,
    }
}

/// Media-ingest client with a per-instance table of registered extra
/// operations. Everything the inner client advertises passes through
/// untouched.
struct MediaIngestClient {
    inner: Arc<dyn TransportClient>,
    registered: HashMap<String, OperationDescriptor>,
}

/// Applies the one-time PutMedia augmentation to a freshly constructed
/// media-ingest client.
pub(crate) fn extend_media_ingest(inner: Arc<dyn TransportClient>) -> Arc<dyn TransportClient> {
    let mut registered = HashMap::new();
    registered.insert(PUT_MEDIA.to_string(), put_media_descriptor());
    Arc::new(MediaIngestClient { inner, registered })
}

#[async_trait]
impl TransportClient for MediaIngestClient {
    fn operation_names(&self) -> Vec<String> {
        let mut names = self.inner.operation_names();
        for name in self.registered.keys() {
            if !names.iter().any(|existing| existing == name) {
                names.push(name.clone());
            }
        }
        names
    }

    async fn call(&self, operation: &str, args: CallArgs) -> Result<CallResponse, UpstreamError> {
        match self.registered.get(operation) {
            Some(descriptor) => self.inner.call_raw(descriptor, args).await,
            None => self.inner.call(operation, args).await,
        }
    }

    async fn call_raw(
        &self,
        descriptor: &OperationDescriptor,
        args: CallArgs,
    ) -> Result<CallResponse, UpstreamError> {
        self.inner.call_raw(descriptor, args).await
    }
}
