//! Data-plane layer.
//!
//! Owns the transport-client pool keyed by (surface, endpoint) and the
//! PutMedia extension applied to media-ingest clients at construction time.

pub(crate) mod client_pool;
pub(crate) mod put_media;

pub use put_media::{put_media_descriptor, FragmentTimecodeType, PUT_MEDIA};
