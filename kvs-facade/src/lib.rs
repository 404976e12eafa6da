//! # kvs-facade
//!
//! `kvs-facade` is a unifying client facade over the three Kinesis Video
//! service surfaces: the `kinesisvideo` control plane and the
//! `kinesis-video-media` / `kinesis-video-archived-media` data planes. Any
//! operation advertised by any surface can be invoked by name against one
//! [`KinesisVideoFacade`] and it routes itself: control-plane calls go to the
//! default endpoint, data-plane calls first resolve the stream's ARN and the
//! operation-specific data endpoint through the control plane.
//!
//! Wire transport, serialization, request signing, credentials, and retry live
//! behind the [`TransportSession`]/[`TransportClient`] collaborator traits;
//! this crate only decides which client to call and forwards the caller's
//! arguments unchanged.
//!
//! ## Caching contract
//!
//! Stream ARNs, data endpoints, and transport clients are resolved lazily,
//! cached per key, and never invalidated for the facade's lifetime. Deleting
//! and recreating a stream therefore leaves the facade routing to stale
//! endpoints; construct a new facade when that happens.
//!
//! ```
//! use std::sync::Arc;
//! use kvs_facade::{
//!     CallArgs, CallResponse, FacadeError, KinesisVideoFacade, OperationDescriptor,
//!     ServiceSurface, TransportClient, TransportSession, UpstreamError, PUT_MEDIA,
//! };
//!
//! # struct StaticClient {
//! #     names: Vec<&'static str>,
//! # }
//! #
//! # #[async_trait::async_trait]
//! # impl TransportClient for StaticClient {
//! #     fn operation_names(&self) -> Vec<String> {
//! #         self.names.iter().map(|name| name.to_string()).collect()
//! #     }
//! #
//! #     async fn call(
//! #         &self,
//! #         _operation: &str,
//! #         _args: CallArgs,
//! #     ) -> Result<CallResponse, UpstreamError> {
//! #         Ok(serde_json::json!({ "StreamInfoList": [] }))
//! #     }
//! #
//! #     async fn call_raw(
//! #         &self,
//! #         _descriptor: &OperationDescriptor,
//! #         _args: CallArgs,
//! #     ) -> Result<CallResponse, UpstreamError> {
//! #         Ok(serde_json::json!({}))
//! #     }
//! # }
//! #
//! # struct StaticSession;
//! #
//! # impl TransportSession for StaticSession {
//! #     fn connect(
//! #         &self,
//! #         surface: ServiceSurface,
//! #         _endpoint: Option<&str>,
//! #     ) -> Result<Arc<dyn TransportClient>, UpstreamError> {
//! #         let names = match surface {
//! #             ServiceSurface::Control => {
//! #                 vec!["DescribeStream", "GetDataEndpoint", "ListStreams"]
//! #             }
//! #             ServiceSurface::MediaIngest => vec!["GetMedia"],
//! #             ServiceSurface::MediaArchive => vec!["GetMediaForFragmentList"],
//! #         };
//! #         Ok(Arc::new(StaticClient { names }))
//! #     }
//! # }
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let session: Arc<dyn TransportSession> = Arc::new(StaticSession);
//! let facade = KinesisVideoFacade::new(session).await.unwrap();
//!
//! // Control-plane operations forward directly to the default client.
//! let streams = facade.invoke("ListStreams", CallArgs::new()).await.unwrap();
//! assert!(streams.get("StreamInfoList").is_some());
//!
//! // The PutMedia extension registers itself on the media-ingest surface.
//! assert_eq!(facade.surface_of(PUT_MEDIA), Some(ServiceSurface::MediaIngest));
//!
//! // Unknown names degrade to a distinct, network-free error.
//! assert!(matches!(
//!     facade.invoke("NotARealOperation", CallArgs::new()).await,
//!     Err(FacadeError::NoSuchOperation(_))
//! ));
//! # });
//! ```
//!
//! ## Internal architecture map
//!
//! - API facade: outward [`KinesisVideoFacade`] dispatch surface
//! - Control plane: operation catalog, ARN resolver, endpoint resolver
//! - Data plane: transport-client pool and the PutMedia extension
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events. Library code emits events and
//! does not unconditionally initialize a global subscriber; binaries and tests
//! are responsible for one-time `tracing_subscriber` initialization at process
//! boundaries.

mod control_plane;
mod data_plane;
mod error;
mod facade;
#[doc(hidden)]
pub mod observability;
mod surface;
mod transport;

pub use control_plane::{DESCRIBE_STREAM, GET_DATA_ENDPOINT};
pub use data_plane::{put_media_descriptor, FragmentTimecodeType, PUT_MEDIA};
pub use error::{FacadeError, UpstreamError};
pub use facade::KinesisVideoFacade;
pub use surface::ServiceSurface;
pub use transport::{
    AuthMode, CallArgs, CallResponse, HeaderBinding, OperationDescriptor, TransportClient,
    TransportSession, STREAM_ARN_ARG, STREAM_NAME_ARG,
};
