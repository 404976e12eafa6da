//! Collaborator seam: the transport traits the facade routes through, plus the
//! operation-descriptor types used by the raw call mechanism.
//!
//! Everything wire-level lives behind these traits: request serialization,
//! signing, retry, credentials, and the chunked-streaming body mechanics of
//! PutMedia. The facade only decides *which* client to call and forwards the
//! caller's arguments unchanged.

use crate::error::UpstreamError;
use crate::surface::ServiceSurface;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Reserved call-argument key carrying a human-assigned stream name.
pub const STREAM_NAME_ARG: &str = "StreamName";

/// Reserved call-argument key carrying a durable stream ARN.
pub const STREAM_ARN_ARG: &str = "StreamARN";

/// Keyword-style call arguments, as the external operation dictionary shapes
/// them. The facade inspects the reserved [`STREAM_NAME_ARG`]/[`STREAM_ARN_ARG`]
/// keys for data-plane operations and forwards the map untouched.
pub type CallArgs = serde_json::Map<String, serde_json::Value>;

/// Operation response as returned by the transport. For streaming responses
/// the transport surfaces the payload however its data dictionary specifies;
/// the facade does not interpret it.
pub type CallResponse = serde_json::Value;

/// How the request is authenticated on the wire.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    /// Standard SigV4 request signing.
    V4,
    /// SigV4 with an unsigned request body, required for streamed payloads.
    V4UnsignedBody,
}

/// Binds one input member to an HTTP header.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct HeaderBinding {
    pub member: String,
    pub header: String,
}

impl HeaderBinding {
    pub fn new(member: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            header: header.into(),
        }
    }
}

/// Wire description of one operation, sufficient for a transport's generic
/// call mechanism to issue it without a data-dictionary entry.
///
/// This is how the PutMedia extension teaches the media-ingest client an
/// operation the external dictionary does not carry.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct OperationDescriptor {
    pub name: String,
    pub http_method: String,
    pub request_uri: String,
    pub header_bindings: Vec<HeaderBinding>,
    pub required_members: Vec<String>,
    /// Input member streamed as the request body, when any.
    pub payload_member: Option<String>,
    /// Output member carrying the response body stream, when any.
    pub response_payload_member: Option<String>,
    /// Error shape names this operation is declared to raise.
    pub error_kinds: Vec<String>,
    pub auth: AuthMode,
}

/// A live client bound to one service surface and one endpoint.
///
/// Instances are owned by the facade's client pool and never mutated after
/// construction; the one-time PutMedia augmentation wraps the media-ingest
/// client before it enters the pool.
#[async_trait]
pub trait TransportClient: Send + Sync {
    /// Operation names this client advertises, from its data dictionary.
    fn operation_names(&self) -> Vec<String>;

    /// Issues one dictionary-described operation.
    async fn call(&self, operation: &str, args: CallArgs) -> Result<CallResponse, UpstreamError>;

    /// Issues one operation described by an explicit descriptor instead of the
    /// data dictionary.
    async fn call_raw(
        &self,
        descriptor: &OperationDescriptor,
        args: CallArgs,
    ) -> Result<CallResponse, UpstreamError>;
}

/// Session/credentials context able to construct transport clients.
///
/// `endpoint` of `None` means the surface's default endpoint; data-plane
/// surfaces are usually connected with an explicit resolved endpoint.
pub trait TransportSession: Send + Sync {
    fn connect(
        &self,
        surface: ServiceSurface,
        endpoint: Option<&str>,
    ) -> Result<Arc<dyn TransportClient>, UpstreamError>;
}
