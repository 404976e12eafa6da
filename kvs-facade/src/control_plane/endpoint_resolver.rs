//! Per-(ARN, operation) data-endpoint resolution with append-only memoization.

use crate::error::UpstreamError;
use crate::observability::events;
use crate::transport::{CallArgs, TransportClient, STREAM_ARN_ARG};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

const COMPONENT: &str = "endpoint_resolver";

/// Control-plane operation that resolves a data endpoint for one stream and
/// one API.
pub const GET_DATA_ENDPOINT: &str = "GetDataEndpoint";

const API_NAME_ARG: &str = "APIName";
const DATA_ENDPOINT_MEMBER: &str = "DataEndpoint";

/// Converts a catalog operation name to the control plane's `APIName` enum
/// convention: `GetMedia` goes on the wire as `GET_MEDIA`.
fn api_name(operation: &str) -> String {
    let chars: Vec<char> = operation.chars().collect();
    let mut wire = String::with_capacity(operation.len() + 4);
    for (index, &c) in chars.iter().enumerate() {
        if c.is_ascii_uppercase() && index > 0 {
            let prev = chars[index - 1];
            let starts_word = chars
                .get(index + 1)
                .is_some_and(|next| next.is_ascii_lowercase());
            if prev.is_ascii_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_ascii_uppercase() && starts_word)
            {
                wire.push('_');
            }
        }
        wire.push(c.to_ascii_uppercase());
    }
    wire
}

/// Cache key: the exact pair as supplied by the dispatcher. The operation is
/// converted to the wire convention only for the upstream call, not in the key.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct EndpointKey {
    stream_arn: String,
    operation: String,
}

/// Append-only memo of (stream ARN, operation) to endpoint URL. Same
/// no-invalidation contract as the identity resolver.
pub(crate) struct EndpointResolver {
    endpoints: Mutex<HashMap<EndpointKey, String>>,
}

impl EndpointResolver {
    pub(crate) fn new() -> Self {
        Self {
            endpoints: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the endpoint URL for `(stream_arn, operation)`, issuing at most
    /// one `GetDataEndpoint` per pair on this resolver.
    ///
    /// The control-plane convention wants `APIName` in SCREAMING_SNAKE_CASE;
    /// the cache key keeps the caller's exact spelling. Concurrent first
    /// resolutions follow the same first-insert-wins rule as the identity
    /// resolver.
    pub(crate) async fn resolve(
        &self,
        control: &Arc<dyn TransportClient>,
        stream_arn: &str,
        operation: &str,
    ) -> Result<String, UpstreamError> {
        let key = EndpointKey {
            stream_arn: stream_arn.to_string(),
            operation: operation.to_string(),
        };
        if let Some(endpoint) = self.endpoints.lock().await.get(&key) {
            debug!(
                event = events::ENDPOINT_RESOLVE_HIT,
                component = COMPONENT,
                stream_arn,
                operation,
                endpoint = %endpoint,
                "resolved from cache"
            );
            return Ok(endpoint.clone());
        }

        debug!(
            event = events::ENDPOINT_RESOLVE_MISS,
            component = COMPONENT,
            stream_arn,
            operation,
            "fetching data endpoint"
        );
        let mut args = CallArgs::new();
        args.insert(
            STREAM_ARN_ARG.to_string(),
            Value::String(stream_arn.to_string()),
        );
        args.insert(
            API_NAME_ARG.to_string(),
            Value::String(api_name(operation)),
        );
        let response = control.call(GET_DATA_ENDPOINT, args).await?;
        let endpoint = response
            .get(DATA_ENDPOINT_MEMBER)
            .and_then(Value::as_str)
            .ok_or_else(|| {
                UpstreamError::new(
                    GET_DATA_ENDPOINT,
                    format!("response missing {DATA_ENDPOINT_MEMBER}"),
                )
            })?
            .to_string();

        let mut endpoints = self.endpoints.lock().await;
        Ok(endpoints.entry(key).or_insert(endpoint).clone())
    }
}
