//! Static enumeration of the three Kinesis Video service surfaces.

use std::fmt::{Display, Formatter};

/// One of the three service surfaces the facade unifies.
///
/// [`ServiceSurface::Control`] owns metadata operations (describe a stream,
/// resolve a data endpoint) and is reached at the default endpoint. The two
/// data-plane surfaces require a per-stream, per-operation endpoint resolved
/// through the control plane before they can be called.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ServiceSurface {
    /// `kinesisvideo` — the control plane.
    Control,
    /// `kinesis-video-media` — media ingestion; receives the PutMedia extension.
    MediaIngest,
    /// `kinesis-video-archived-media` — archived-media retrieval.
    MediaArchive,
}

impl ServiceSurface {
    /// All surfaces in catalog-registration order, control plane first.
    pub const ALL: [ServiceSurface; 3] = [
        ServiceSurface::Control,
        ServiceSurface::MediaIngest,
        ServiceSurface::MediaArchive,
    ];

    /// Wire-level service name understood by transport sessions.
    pub fn service_name(&self) -> &'static str {
        match self {
            ServiceSurface::Control => "kinesisvideo",
            ServiceSurface::MediaIngest => "kinesis-video-media",
            ServiceSurface::MediaArchive => "kinesis-video-archived-media",
        }
    }

    /// Whether operations on this surface need a resolved endpoint first.
    pub fn is_data_plane(&self) -> bool {
        !matches!(self, ServiceSurface::Control)
    }
}

impl Display for ServiceSurface {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.service_name())
    }
}
