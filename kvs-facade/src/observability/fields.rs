//! Value-format helpers for structured log fields.

use crate::surface::ServiceSurface;

/// Endpoint label logged when a client runs against the service default.
pub const DEFAULT_ENDPOINT: &str = "default";

/// Stable log label for a surface.
pub fn surface_label(surface: ServiceSurface) -> &'static str {
    surface.service_name()
}

/// Stable log label for an optional endpoint override.
pub fn endpoint_label(endpoint: Option<&str>) -> &str {
    endpoint.unwrap_or(DEFAULT_ENDPOINT)
}
