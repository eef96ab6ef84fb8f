use crate::descriptor::{LimitId, ShapeKind};
use crate::fetch::FetchError;
use std::error;
use std::fmt;

//--------------------------------------------------------------------------------------------------

/// Error returned by a probe pass.
///
/// Under the default error policy only `InvalidArgument` is ever returned: per-descriptor failures
/// are recorded in the snapshot instead.
#[derive(Debug)]
pub enum ProbeError {
    /// The probe pass could not start (e.g. no runtime context was given).
    InvalidArgument(&'static str),
    /// A descriptor's fetch failed and the policy asked for propagation.
    FetchFailed {
        id: LimitId,
        name: &'static str,
        cause: FetchError,
    },
    /// An applicable descriptor has no fetch callback for its shape, and the policy asked for
    /// propagation.
    UnsupportedShape {
        id: LimitId,
        name: &'static str,
        shape: ShapeKind,
    },
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ProbeError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            ProbeError::FetchFailed { id, name, cause } => {
                write!(f, "failed to fetch {} ({}): {}", name, id, cause)
            }
            ProbeError::UnsupportedShape { id, name, shape } => write!(
                f,
                "no fetch callback for {:?} values (needed by {} ({}))",
                shape, name, id
            ),
        }
    }
}

impl error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ProbeError::FetchFailed { cause, .. } => Some(cause),
            _ => None,
        }
    }
}

//--------------------------------------------------------------------------------------------------

/// Error returned when a version string is not recognized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseVersionError(pub String);

impl ParseVersionError {
    pub(crate) fn new(input: &str) -> ParseVersionError {
        ParseVersionError(input.to_string())
    }
}

impl fmt::Display for ParseVersionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "unrecognized version string: {:?}", self.0)
    }
}

impl error::Error for ParseVersionError {}
