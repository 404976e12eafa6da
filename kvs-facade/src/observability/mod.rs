//! Observability layer.
//!
//! The crate emits `tracing` events with canonical names and field keys and
//! never installs a global subscriber; binaries and tests own one-time
//! subscriber initialization at process boundaries.

pub mod events;
pub mod fields;
