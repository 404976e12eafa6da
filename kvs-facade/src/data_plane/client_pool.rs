//! Transport-client pool keyed by (surface, endpoint override).

use crate::data_plane::put_media;
use crate::error::UpstreamError;
use crate::observability::{events, fields};
use crate::surface::ServiceSurface;
use crate::transport::{TransportClient, TransportSession};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

const COMPONENT: &str = "client_pool";

/// Pool key. `endpoint: None` is the surface's default endpoint and is a
/// distinct, stable key from any explicit endpoint string.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct ClientKey {
    surface: ServiceSurface,
    endpoint: Option<String>,
}

/// Memoizing owner of one transport client per (surface, endpoint) pair.
///
/// Clients are constructed lazily, cached forever, and never mutated after
/// creation; the media-ingest surface gets the PutMedia extension applied
/// exactly once, before its client enters the pool.
pub(crate) struct ClientPool {
    session: Arc<dyn TransportSession>,
    clients: Mutex<HashMap<ClientKey, Arc<dyn TransportClient>>>,
}

impl ClientPool {
    pub(crate) fn new(session: Arc<dyn TransportSession>) -> Self {
        Self {
            session,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached client for `(surface, endpoint)` or connects a new
    /// one. The pool lock is held across `connect`, so each key constructs at
    /// most once; construction failures propagate verbatim and leave no entry.
    pub(crate) async fn get(
        &self,
        surface: ServiceSurface,
        endpoint: Option<&str>,
    ) -> Result<Arc<dyn TransportClient>, UpstreamError> {
        let key = ClientKey {
            surface,
            endpoint: endpoint.map(str::to_string),
        };

        let mut clients = self.clients.lock().await;
        if let Some(client) = clients.get(&key) {
            debug!(
                event = events::CLIENT_REUSE,
                component = COMPONENT,
                surface = surface.service_name(),
                endpoint = fields::endpoint_label(endpoint),
                "reusing pooled client"
            );
            return Ok(client.clone());
        }

        let client = self.session.connect(surface, endpoint)?;
        let client = match surface {
            ServiceSurface::MediaIngest => put_media::extend_media_ingest(client),
            _ => client,
        };
        debug!(
            event = events::CLIENT_CREATE,
            component = COMPONENT,
            surface = surface.service_name(),
            endpoint = fields::endpoint_label(endpoint),
            "constructed new client"
        );
        clients.insert(key, client.clone());
        Ok(client)
    }
}
