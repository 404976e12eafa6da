//! Canonical structured event names used across `kvs-facade`.

// Catalog build events.
pub const CATALOG_REGISTER_SURFACE: &str = "catalog_register_surface";
pub const CATALOG_COLLISION: &str = "catalog_collision";

// Control-plane resolution events.
pub const IDENTITY_RESOLVE_HIT: &str = "identity_resolve_hit";
pub const IDENTITY_RESOLVE_MISS: &str = "identity_resolve_miss";
pub const ENDPOINT_RESOLVE_HIT: &str = "endpoint_resolve_hit";
pub const ENDPOINT_RESOLVE_MISS: &str = "endpoint_resolve_miss";

// Client-pool events.
pub const CLIENT_CREATE: &str = "client_create";
pub const CLIENT_REUSE: &str = "client_reuse";

// Dispatch events.
pub const DISPATCH_FORWARD: &str = "dispatch_forward";
pub const DISPATCH_UNKNOWN_OPERATION: &str = "dispatch_unknown_operation";
pub const DISPATCH_BAD_ARGUMENTS: &str = "dispatch_bad_arguments";
