//! Operation catalog: the allow-list mapping operation names to owning surfaces.

use crate::error::FacadeError;
use crate::observability::events;
use crate::surface::ServiceSurface;
use crate::transport::TransportClient;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "operation_catalog";

/// Read-only map from operation name to owning surface, built once at facade
/// construction by interrogating one representative client per surface.
pub(crate) struct OperationCatalog {
    operations: HashMap<String, ServiceSurface>,
}

impl OperationCatalog {
    /// Registers every operation advertised by the given clients.
    ///
    /// A name advertised by two surfaces fails the build: none of the real
    /// surfaces are documented to collide, so a collision means a broken data
    /// dictionary rather than something worth routing ambiguously.
    pub(crate) fn build(
        surfaces: &[(ServiceSurface, Arc<dyn TransportClient>)],
    ) -> Result<Self, FacadeError> {
        let mut operations: HashMap<String, ServiceSurface> = HashMap::new();
        for (surface, client) in surfaces {
            let names = client.operation_names();
            debug!(
                event = events::CATALOG_REGISTER_SURFACE,
                component = COMPONENT,
                surface = surface.service_name(),
                operations = names.len(),
                "registering surface operations"
            );
            for name in names {
                if let Some(first) = operations.insert(name.clone(), *surface) {
                    if first != *surface {
                        warn!(
                            event = events::CATALOG_COLLISION,
                            component = COMPONENT,
                            operation = %name,
                            first = first.service_name(),
                            second = surface.service_name(),
                            "operation advertised by two surfaces"
                        );
                        return Err(FacadeError::OperationCollision {
                            operation: name,
                            first,
                            second: *surface,
                        });
                    }
                }
            }
        }
        Ok(Self { operations })
    }

    /// Looks up the owning surface for one operation name. `None` means the
    /// name is not an operation at all, distinct from any call failure.
    pub(crate) fn lookup(&self, operation: &str) -> Option<ServiceSurface> {
        self.operations.get(operation).copied()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.operations.len()
    }
}
