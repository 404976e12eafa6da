//! Control-plane layer.
//!
//! Owns the operation catalog built from each surface's advertised operation
//! names, and the two memoizing resolvers that turn a stream name into its ARN
//! and an (ARN, operation) pair into a data endpoint. Resolver caches are
//! append-only for the process lifetime; see the crate docs for the
//! no-invalidation contract.

pub(crate) mod endpoint_resolver;
pub(crate) mod operation_catalog;
pub(crate) mod resource_identity;

pub use endpoint_resolver::GET_DATA_ENDPOINT;
pub use resource_identity::DESCRIBE_STREAM;
