//! Mock transport collaborators shared by the integration tests.

use async_trait::async_trait;
use kvs_facade::{
    CallArgs, CallResponse, OperationDescriptor, ServiceSurface, TransportClient,
    TransportSession, UpstreamError, DESCRIBE_STREAM, GET_DATA_ENDPOINT,
};
use serde_json::json;
use std::sync::{Arc, Mutex};

pub const TEST_ARN: &str = "arn:x";
pub const TEST_ENDPOINT: &str = "https://ep";

/// Stream name the mock control plane reports as nonexistent.
pub const MISSING_STREAM: &str = "missing";

pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[derive(Clone, Debug)]
pub struct CallRecord {
    pub surface: ServiceSurface,
    pub endpoint: Option<String>,
    pub operation: String,
    pub args: CallArgs,
    pub raw: bool,
}

#[derive(Default)]
pub struct Recorder {
    pub connects: Mutex<Vec<(ServiceSurface, Option<String>)>>,
    pub calls: Mutex<Vec<CallRecord>>,
}

impl Recorder {
    pub fn call_sequence(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("recorder lock")
            .iter()
            .map(|record| record.operation.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("recorder lock").len()
    }

    pub fn connect_count(&self) -> usize {
        self.connects.lock().expect("recorder lock").len()
    }

    pub fn calls_for(&self, operation: &str) -> Vec<CallRecord> {
        self.calls
            .lock()
            .expect("recorder lock")
            .iter()
            .filter(|record| record.operation == operation)
            .cloned()
            .collect()
    }

    pub fn last_call(&self) -> CallRecord {
        self.calls
            .lock()
            .expect("recorder lock")
            .last()
            .expect("at least one recorded call")
            .clone()
    }
}

struct MockClient {
    surface: ServiceSurface,
    endpoint: Option<String>,
    recorder: Arc<Recorder>,
}

impl MockClient {
    fn record(&self, operation: &str, args: &CallArgs, raw: bool) {
        self.recorder.calls.lock().expect("recorder lock").push(CallRecord {
            surface: self.surface,
            endpoint: self.endpoint.clone(),
            operation: operation.to_string(),
            args: args.clone(),
            raw,
        });
    }
}

#[async_trait]
impl TransportClient for MockClient {
    fn operation_names(&self) -> Vec<String> {
        let names: &[&str] = match self.surface {
            ServiceSurface::Control => &[
                DESCRIBE_STREAM,
                GET_DATA_ENDPOINT,
                "ListStreams",
                "DeleteStream",
            ],
            ServiceSurface::MediaIngest => &["GetMedia"],
            ServiceSurface::MediaArchive => &["GetMediaForFragmentList", "ListFragments"],
        };
        names.iter().map(|name| name.to_string()).collect()
    }

    async fn call(&self, operation: &str, args: CallArgs) -> Result<CallResponse, UpstreamError> {
        self.record(operation, &args, false);
        match (self.surface, operation) {
            (ServiceSurface::Control, DESCRIBE_STREAM) => {
                let name = args
                    .get("StreamName")
                    .and_then(|value| value.as_str())
                    .unwrap_or_default();
                if name == MISSING_STREAM {
                    return Err(UpstreamError::new(DESCRIBE_STREAM, "stream not found")
                        .with_kind("ResourceNotFoundException"));
                }
                Ok(json!({ "StreamInfo": { "StreamARN": TEST_ARN } }))
            }
            (ServiceSurface::Control, GET_DATA_ENDPOINT) => {
                Ok(json!({ "DataEndpoint": TEST_ENDPOINT }))
            }
            (ServiceSurface::Control, _) => Ok(json!({ "StreamInfoList": [] })),
            _ => Ok(json!({
                "BoundEndpoint": self.endpoint,
                "Operation": operation,
            })),
        }
    }

    async fn call_raw(
        &self,
        descriptor: &OperationDescriptor,
        args: CallArgs,
    ) -> Result<CallResponse, UpstreamError> {
        self.record(&descriptor.name, &args, true);
        Ok(json!({
            "BoundEndpoint": self.endpoint,
            "Operation": descriptor.name,
            "Payload": "",
        }))
    }
}

pub struct MockSession {
    recorder: Arc<Recorder>,
}

impl MockSession {
    pub fn new() -> (Arc<Recorder>, Arc<dyn TransportSession>) {
        let recorder = Arc::new(Recorder::default());
        let session: Arc<dyn TransportSession> = Arc::new(Self {
            recorder: recorder.clone(),
        });
        (recorder, session)
    }
}

impl TransportSession for MockSession {
    fn connect(
        &self,
        surface: ServiceSurface,
        endpoint: Option<&str>,
    ) -> Result<Arc<dyn TransportClient>, UpstreamError> {
        self.recorder
            .connects
            .lock()
            .expect("recorder lock")
            .push((surface, endpoint.map(str::to_string)));
        Ok(Arc::new(MockClient {
            surface,
            endpoint: endpoint.map(str::to_string),
            recorder: self.recorder.clone(),
        }))
    }
}
