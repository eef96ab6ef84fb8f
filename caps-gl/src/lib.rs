//! OpenGL backend of `autograph-caps`: the registry of GL limits, fetch callbacks built on
//! `glGet*`, and identification of the current context.
#[macro_use]
extern crate log;

pub mod api;
mod context;
mod fetch;
mod limits;
mod params;

pub use self::api::Gl;
pub use self::context::{query_context, ContextError, ContextInfo};
pub use self::fetch::gl_fetch_callbacks;
pub use self::limits::LIMITS;
pub use self::params::ImplementationParameters;

use autograph_caps::{CapabilityProbe, CapabilitySnapshot, ProbeConfig, ProbeError};
use std::error;
use std::fmt;

/// Error returned by `query_limits`.
#[derive(Debug)]
pub enum QueryError {
    Context(ContextError),
    Probe(ProbeError),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            QueryError::Context(e) => write!(f, "{}", e),
            QueryError::Probe(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for QueryError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            QueryError::Context(e) => Some(e),
            QueryError::Probe(e) => Some(e),
        }
    }
}

impl From<ContextError> for QueryError {
    fn from(e: ContextError) -> Self {
        QueryError::Context(e)
    }
}

impl From<ProbeError> for QueryError {
    fn from(e: ProbeError) -> Self {
        QueryError::Probe(e)
    }
}

//--------------------------------------------------------------------------------------------------

/// Identifies the current context and probes every limit of `LIMITS` on it.
///
/// Must be called on the thread where the context is current.
pub fn query_limits(
    gl: &Gl,
    config: &ProbeConfig,
) -> Result<(ContextInfo, CapabilitySnapshot), QueryError> {
    let info = query_context(gl)?;
    let fetch = gl_fetch_callbacks(gl);
    let snapshot = CapabilityProbe::new(*config).probe(Some(&info.runtime), LIMITS, &fetch)?;
    Ok((info, snapshot))
}

impl ImplementationParameters {
    /// Queries the current context and extracts the parameters from the resulting snapshot.
    pub fn populate(gl: &Gl) -> Result<ImplementationParameters, QueryError> {
        let (_, snapshot) = query_limits(gl, &ProbeConfig::default())?;
        Ok(ImplementationParameters::from_snapshot(&snapshot))
    }
}
