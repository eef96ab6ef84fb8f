//! Capability probing for graphics runtimes.
//!
//! A registry of [ProbeDescriptor]s describes which implementation limits exist, under which
//! API versions or extensions they can be queried, and the shape of their value.
//! [CapabilityProbe] walks such a registry against a [RuntimeContext] and fills a
//! [CapabilitySnapshot] through caller-provided [FetchCallbacks].
#[macro_use]
extern crate log;

mod context;
mod descriptor;
mod error;
mod extensions;
mod fetch;
mod probe;
mod settings;
mod snapshot;
mod version;

pub use self::context::RuntimeContext;
pub use self::descriptor::{LimitId, ProbeDescriptor, Requirement, Shape, ShapeKind, ShapeKinds};
pub use self::error::{ParseVersionError, ProbeError};
pub use self::extensions::Extensions;
pub use self::fetch::{FetchCallbacks, FetchError};
pub use self::probe::{probe, CapabilityProbe};
pub use self::settings::{load_environment_config, ErrorPolicy, ProbeConfig};
pub use self::snapshot::{ArrayStorage, CapabilitySnapshot, LimitValue, ProbeFailure};
pub use self::version::{Api, ApiSet, Profile, Version};
