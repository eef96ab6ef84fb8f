use crate::extensions::Extensions;
use crate::version::Version;

/// Version and extension support of the runtime being probed.
///
/// Built once before a probe pass and never modified by it.
#[derive(Clone, Debug)]
pub struct RuntimeContext {
    pub version: Version,
    pub extensions: Extensions,
}

impl RuntimeContext {
    pub fn new(version: Version, extensions: Extensions) -> RuntimeContext {
        RuntimeContext {
            version,
            extensions,
        }
    }

    pub fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }
}
