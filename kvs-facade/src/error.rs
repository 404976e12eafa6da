//! Error taxonomy for the facade: caller mistakes, unknown operations, and
//! verbatim upstream failures.

use crate::surface::ServiceSurface;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Failure reported by a transport collaborator (control-plane call, client
/// construction, or the final forwarded operation call).
///
/// The facade propagates these verbatim: no wrapping, no retry, no
/// translation. `kind` carries the service's declared error shape name when
/// the transport knows it (for example `ResourceNotFoundException`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpstreamError {
    pub operation: String,
    pub kind: Option<String>,
    pub message: String,
}

impl UpstreamError {
    pub fn new(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            kind: None,
            message: message.into(),
        }
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

impl Display for UpstreamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            Some(kind) => write!(f, "{} failed ({kind}): {}", self.operation, self.message),
            None => write!(f, "{} failed: {}", self.operation, self.message),
        }
    }
}

impl Error for UpstreamError {}

/// Failures surfaced by [`KinesisVideoFacade`](crate::KinesisVideoFacade).
#[derive(Debug)]
pub enum FacadeError {
    /// The operation name is not advertised by any service surface. Raised
    /// before any network call so probing for non-operations degrades
    /// gracefully.
    NoSuchOperation(String),
    /// The caller supplied both or neither of the reserved `StreamName` /
    /// `StreamARN` arguments for a data-plane operation. Raised before any
    /// network call; never retried.
    Configuration(String),
    /// Two surfaces advertised the same operation name at catalog build time.
    /// The source this facade replaces silently let the last registration win;
    /// registration now fails loudly instead.
    OperationCollision {
        operation: String,
        first: ServiceSurface,
        second: ServiceSurface,
    },
    /// A collaborator call failed; carried verbatim.
    Upstream(UpstreamError),
}

impl Display for FacadeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FacadeError::NoSuchOperation(operation) => {
                write!(f, "no such operation: {operation}")
            }
            FacadeError::Configuration(message) => write!(f, "{message}"),
            FacadeError::OperationCollision {
                operation,
                first,
                second,
            } => write!(
                f,
                "operation {operation} advertised by both {first} and {second}"
            ),
            FacadeError::Upstream(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FacadeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FacadeError::Upstream(err) => Some(err),
            _ => None,
        }
    }
}

impl From<UpstreamError> for FacadeError {
    fn from(err: UpstreamError) -> Self {
        FacadeError::Upstream(err)
    }
}

impl FacadeError {
    /// Returns the upstream failure when this error is a verbatim carrier.
    pub fn as_upstream(&self) -> Option<&UpstreamError> {
        match self {
            FacadeError::Upstream(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{FacadeError, UpstreamError};
    use crate::surface::ServiceSurface;
    use std::error::Error;

    #[test]
    fn upstream_display_includes_kind_when_present() {
        let plain = UpstreamError::new("DescribeStream", "connection reset");
        assert_eq!(plain.to_string(), "DescribeStream failed: connection reset");

        let kinded = plain.with_kind("ResourceNotFoundException");
        assert_eq!(
            kinded.to_string(),
            "DescribeStream failed (ResourceNotFoundException): connection reset"
        );
    }

    #[test]
    fn facade_error_exposes_upstream_source() {
        let err = FacadeError::from(UpstreamError::new("GetDataEndpoint", "timed out"));
        assert!(err.source().is_some());
        assert!(err.as_upstream().is_some());
    }

    #[test]
    fn collision_display_names_both_surfaces() {
        let err = FacadeError::OperationCollision {
            operation: "GetMedia".to_string(),
            first: ServiceSurface::MediaIngest,
            second: ServiceSurface::MediaArchive,
        };
        assert_eq!(
            err.to_string(),
            "operation GetMedia advertised by both kinesis-video-media and kinesis-video-archived-media"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn configuration_error_has_no_source() {
        let err = FacadeError::Configuration("bad arguments".to_string());
        assert!(err.source().is_none());
        assert!(err.as_upstream().is_none());
    }
}
