//! The dispatcher: one call surface over all three Kinesis Video services.

use crate::control_plane::endpoint_resolver::EndpointResolver;
use crate::control_plane::operation_catalog::OperationCatalog;
use crate::control_plane::resource_identity::ResourceIdentityResolver;
use crate::data_plane::client_pool::ClientPool;
use crate::error::FacadeError;
use crate::observability::{events, fields};
use crate::surface::ServiceSurface;
use crate::transport::{
    CallArgs, CallResponse, TransportSession, STREAM_ARN_ARG, STREAM_NAME_ARG,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "facade";

/// Unifying client facade over the Kinesis Video control plane and the two
/// data-plane surfaces.
///
/// Any operation advertised by any surface can be invoked by name through
/// [`invoke`](Self::invoke). Control-plane operations go straight to the
/// default client; data-plane operations first resolve the stream's ARN and
/// the operation-specific data endpoint through the control plane, then run
/// against a client bound to that endpoint. ARNs, endpoints, and clients are
/// cached for the facade's lifetime and never invalidated: if a stream is
/// deleted and recreated, construct a new facade.
pub struct KinesisVideoFacade {
    catalog: OperationCatalog,
    clients: ClientPool,
    resource_identities: ResourceIdentityResolver,
    endpoints: EndpointResolver,
}

impl KinesisVideoFacade {
    /// Builds the facade: connects the default client for every surface and
    /// registers their advertised operations (including the PutMedia
    /// extension's) in the catalog.
    ///
    /// Fails when a default client cannot be constructed or when two surfaces
    /// advertise the same operation name.
    pub async fn new(session: Arc<dyn TransportSession>) -> Result<Self, FacadeError> {
        let clients = ClientPool::new(session);
        let mut surfaces = Vec::with_capacity(ServiceSurface::ALL.len());
        for surface in ServiceSurface::ALL {
            let client = clients.get(surface, None).await?;
            surfaces.push((surface, client));
        }
        let catalog = OperationCatalog::build(&surfaces)?;

        Ok(Self {
            catalog,
            clients,
            resource_identities: ResourceIdentityResolver::new(),
            endpoints: EndpointResolver::new(),
        })
    }

    /// Returns which surface owns `operation`, or `None` for names that are
    /// not operations at all.
    pub fn surface_of(&self, operation: &str) -> Option<ServiceSurface> {
        self.catalog.lookup(operation)
    }

    /// Invokes `operation` with keyword-style `args` against whichever surface
    /// owns it.
    ///
    /// For data-plane operations exactly one of the reserved
    /// [`STREAM_NAME_ARG`]/[`STREAM_ARN_ARG`] arguments must be present (a key
    /// bound to an empty string counts as absent). The arguments are forwarded
    /// to the owning client exactly as supplied, reserved keys included.
    ///
    /// This layer never retries and never translates errors: upstream failures
    /// from resolution or from the forwarded call surface verbatim as
    /// [`FacadeError::Upstream`].
    pub async fn invoke(
        &self,
        operation: &str,
        args: CallArgs,
    ) -> Result<CallResponse, FacadeError> {
        let Some(surface) = self.catalog.lookup(operation) else {
            debug!(
                event = events::DISPATCH_UNKNOWN_OPERATION,
                component = COMPONENT,
                operation,
                "operation not in catalog"
            );
            return Err(FacadeError::NoSuchOperation(operation.to_string()));
        };

        if !surface.is_data_plane() {
            let client = self.clients.get(surface, None).await?;
            debug!(
                event = events::DISPATCH_FORWARD,
                component = COMPONENT,
                operation,
                surface = fields::surface_label(surface),
                endpoint = fields::DEFAULT_ENDPOINT,
                "forwarding control-plane call"
            );
            return Ok(client.call(operation, args).await?);
        }

        // One control client serves both resolution steps.
        let control = self.clients.get(ServiceSurface::Control, None).await?;
        let stream_name = reserved_arg(&args, STREAM_NAME_ARG);
        let stream_arn = reserved_arg(&args, STREAM_ARN_ARG);
        let resolved_arn = match (stream_name, stream_arn) {
            (Some(_), Some(_)) | (None, None) => {
                warn!(
                    event = events::DISPATCH_BAD_ARGUMENTS,
                    component = COMPONENT,
                    operation,
                    surface = fields::surface_label(surface),
                    "need exactly one of StreamName or StreamARN"
                );
                return Err(FacadeError::Configuration(format!(
                    "one of {STREAM_NAME_ARG} or {STREAM_ARN_ARG} must be defined \
                     to determine the service endpoint"
                )));
            }
            (Some(name), None) => self.resource_identities.resolve(&control, name).await?,
            (None, Some(arn)) => arn.to_string(),
        };
        let endpoint = self
            .endpoints
            .resolve(&control, &resolved_arn, operation)
            .await?;
        let client = self.clients.get(surface, Some(&endpoint)).await?;
        debug!(
            event = events::DISPATCH_FORWARD,
            component = COMPONENT,
            operation,
            surface = fields::surface_label(surface),
            stream_arn = %resolved_arn,
            endpoint = %endpoint,
            "forwarding resolved data-plane call"
        );
        Ok(client.call(operation, args).await?)
    }
}

/// Reads a reserved argument as a non-empty string. A key bound to an empty
/// string behaves as absent, matching the facade this one replaces.
fn reserved_arg<'a>(args: &'a CallArgs, key: &str) -> Option<&'a str> {
    args.get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
