//! Stream-name to ARN resolution, memoized per name for the process lifetime.

use crate::error::UpstreamError;
use crate::observability::events;
use crate::transport::{CallArgs, TransportClient, STREAM_NAME_ARG};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

const COMPONENT: &str = "resource_identity";

/// Control-plane operation that describes a stream by name.
pub const DESCRIBE_STREAM: &str = "DescribeStream";

const STREAM_INFO_MEMBER: &str = "StreamInfo";
const STREAM_ARN_MEMBER: &str = "StreamARN";

/// Append-only memo of stream name to ARN.
///
/// Once a name resolves, the mapping is held for the facade's lifetime; a
/// stream deleted and recreated under the same name keeps routing to the stale
/// ARN. Recreate the facade to pick up the new stream.
pub(crate) struct ResourceIdentityResolver {
    arns: Mutex<HashMap<String, String>>,
}

impl ResourceIdentityResolver {
    pub(crate) fn new() -> Self {
        Self {
            arns: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the ARN for `stream_name`, issuing at most one `DescribeStream`
    /// per name on this resolver.
    ///
    /// The lock is not held across the upstream call; concurrent first
    /// resolutions of one name may both reach upstream, and the first value
    /// inserted wins for every caller.
    pub(crate) async fn resolve(
        &self,
        control: &Arc<dyn TransportClient>,
        stream_name: &str,
    ) -> Result<String, UpstreamError> {
        if let Some(arn) = self.arns.lock().await.get(stream_name) {
            debug!(
                event = events::IDENTITY_RESOLVE_HIT,
                component = COMPONENT,
                stream_name,
                stream_arn = %arn,
                "resolved from cache"
            );
            return Ok(arn.clone());
        }

        debug!(
            event = events::IDENTITY_RESOLVE_MISS,
            component = COMPONENT,
            stream_name,
            "describing stream"
        );
        let mut args = CallArgs::new();
        args.insert(
            STREAM_NAME_ARG.to_string(),
            Value::String(stream_name.to_string()),
        );
        let response = control.call(DESCRIBE_STREAM, args).await?;
        let arn = response
            .get(STREAM_INFO_MEMBER)
            .and_then(|info| info.get(STREAM_ARN_MEMBER))
            .and_then(Value::as_str)
            .ok_or_else(|| {
                UpstreamError::new(
                    DESCRIBE_STREAM,
                    format!("response missing {STREAM_INFO_MEMBER}.{STREAM_ARN_MEMBER}"),
                )
            })?
            .to_string();

        let mut arns = self.arns.lock().await;
        Ok(arns
            .entry(stream_name.to_string())
            .or_insert(arn)
            .clone())
    }
}
