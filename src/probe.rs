use crate::context::RuntimeContext;
use crate::descriptor::{LimitId, ProbeDescriptor, Shape};
use crate::error::ProbeError;
use crate::fetch::{FetchCallbacks, FetchError};
use crate::settings::{ErrorPolicy, ProbeConfig};
use crate::snapshot::{ArrayStorage, CapabilitySnapshot, LimitValue, ProbeFailure};
use ordered_float::OrderedFloat;

//--------------------------------------------------------------------------------------------------

/// Runs probe passes over descriptor registries.
///
/// A pass is synchronous and sequential: callbacks are invoked one at a time, on the calling
/// thread, which must be the thread owning the runtime context. Nothing is kept between passes.
#[derive(Copy, Clone, Debug, Default)]
pub struct CapabilityProbe {
    config: ProbeConfig,
}

impl CapabilityProbe {
    pub fn new(config: ProbeConfig) -> CapabilityProbe {
        CapabilityProbe { config }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    /// Probes every descriptor of `registry` that applies to `context`.
    ///
    /// Fails with `InvalidArgument` before any fetch if `context` is `None`. Otherwise, with the
    /// `CatchAndLog` policy, always returns a (possibly partial) snapshot: inapplicable descriptors,
    /// failed fetches and descriptors without a matching callback are simply absent from it.
    pub fn probe(
        &self,
        context: Option<&RuntimeContext>,
        registry: &[ProbeDescriptor],
        fetch: &FetchCallbacks,
    ) -> Result<CapabilitySnapshot, ProbeError> {
        let context = context.ok_or(ProbeError::InvalidArgument("no runtime context"))?;
        let propagate = self.config.error_policy == ErrorPolicy::Propagate;

        let mut snapshot = CapabilitySnapshot::new();
        let mut num_applicable = 0;

        for desc in registry {
            if !desc.is_applicable(context) {
                debug!("{} ({}): not applicable to {}", desc.name, desc.id, context.version);
                continue;
            }
            num_applicable += 1;

            if snapshot.contains(desc.id) {
                debug!("{} ({}): duplicate descriptor, skipped", desc.name, desc.id);
                continue;
            }

            let kind = desc.shape.kind();
            let result = match dispatch(desc, fetch) {
                Some(result) => result,
                None => {
                    if propagate {
                        return Err(ProbeError::UnsupportedShape {
                            id: desc.id,
                            name: desc.name,
                            shape: kind,
                        });
                    }
                    snapshot.record_skipped(desc.id, kind.flag());
                    continue;
                }
            };

            match result {
                Ok(value) => {
                    snapshot.insert(desc.id, value);
                }
                Err(error) => {
                    if propagate {
                        return Err(ProbeError::FetchFailed {
                            id: desc.id,
                            name: desc.name,
                            cause: error,
                        });
                    }
                    if error.is_mechanism() {
                        error!("{} ({}): {}", desc.name, desc.id, error);
                    } else {
                        warn!("{} ({}): {}", desc.name, desc.id, error);
                    }
                    snapshot.record_failure(ProbeFailure {
                        id: desc.id,
                        name: desc.name,
                        error,
                    });
                }
            }
        }

        let missing = snapshot.missing_callbacks();
        if !missing.is_empty() {
            let kinds: Vec<_> = missing.kinds().collect();
            warn!(
                "no fetch callback for {:?} values: {} applicable limit(s) skipped",
                kinds,
                snapshot.skipped().len()
            );
        }

        if num_applicable == 0 && !registry.is_empty() && self.config.warn_on_empty {
            warn!(
                "none of the {} descriptors applies to {} with {} extension(s): context and registry mismatch?",
                registry.len(),
                context.version,
                context.extensions.len()
            );
        }

        debug!(
            "probed {} limits for {}: {} applicable, {} determined, {} failed",
            registry.len(),
            context.version,
            num_applicable,
            snapshot.len(),
            snapshot.failures().len()
        );

        Ok(snapshot)
    }
}

/// Probes `registry` with the default configuration (catch and log).
pub fn probe(
    context: Option<&RuntimeContext>,
    registry: &[ProbeDescriptor],
    fetch: &FetchCallbacks,
) -> Result<CapabilitySnapshot, ProbeError> {
    CapabilityProbe::default().probe(context, registry, fetch)
}

//--------------------------------------------------------------------------------------------------

/// Invokes the callback matching the descriptor's shape. Returns `None` if there is none.
fn dispatch(
    desc: &ProbeDescriptor,
    fetch: &FetchCallbacks,
) -> Option<Result<LimitValue, FetchError>> {
    let id = desc.id;
    match desc.shape {
        Shape::Int => fetch.int.as_deref().map(|f| f(id).map(LimitValue::Int)),
        Shape::Float => fetch
            .float
            .as_deref()
            .map(|f| f(id).map(|v| LimitValue::Float(OrderedFloat(v)))),
        Shape::IntArray(n) => fetch
            .int_array
            .as_deref()
            .map(|f| fetch_array(id, n, f).map(LimitValue::IntArray)),
        Shape::FloatArray(n) => fetch.float_array.as_deref().map(|f| {
            fetch_array(id, n, f)
                .map(|values| LimitValue::FloatArray(values.into_iter().map(OrderedFloat).collect()))
        }),
        Shape::String => fetch
            .string
            .as_deref()
            .map(|f| f(id).map(LimitValue::String)),
    }
}

/// Allocates exactly `len` elements, lets the callback fill them, and checks the element count.
fn fetch_array<T: Copy + Default>(
    id: LimitId,
    len: usize,
    f: &dyn Fn(LimitId, &mut [T]) -> Result<usize, FetchError>,
) -> Result<ArrayStorage<T>, FetchError> {
    let mut storage: ArrayStorage<T> = ArrayStorage::from_elem(T::default(), len);
    let written = f(id, &mut storage[..])?;
    if written != len {
        return Err(FetchError::ShapeMismatch {
            expected: len,
            actual: written,
        });
    }
    Ok(storage)
}
