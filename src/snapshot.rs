use crate::descriptor::{LimitId, ShapeKinds};
use crate::fetch::FetchError;
use fxhash::FxHashMap;
use ordered_float::OrderedFloat;
use smallvec::SmallVec;

/// Arrays of limits are short (ranges, viewport dimensions, work group sizes).
pub type ArrayStorage<T> = SmallVec<[T; 4]>;

/// Value of a limit, typed per shape.
///
/// Floats are stored as returned, NaN included. `OrderedFloat` makes all NaNs compare equal.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum LimitValue {
    Int(i32),
    Float(OrderedFloat<f32>),
    IntArray(ArrayStorage<i32>),
    FloatArray(ArrayStorage<OrderedFloat<f32>>),
    String(String),
}

impl LimitValue {
    pub fn as_int(&self) -> Option<i32> {
        match *self {
            LimitValue::Int(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match *self {
            LimitValue::Float(v) => Some(v.into_inner()),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            LimitValue::IntArray(v) => Some(&v[..]),
            _ => None,
        }
    }

    pub fn as_float_array(&self) -> Option<&[OrderedFloat<f32>]> {
        match self {
            LimitValue::FloatArray(v) => Some(&v[..]),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            LimitValue::String(s) => Some(s),
            _ => None,
        }
    }
}

/// A descriptor whose fetch failed during a probe pass.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProbeFailure {
    pub id: LimitId,
    pub name: &'static str,
    pub error: FetchError,
}

//--------------------------------------------------------------------------------------------------

/// Result of a probe pass: the value of every limit that could be determined.
///
/// A missing entry is the only signal that a limit could not be determined, whatever the reason
/// (inapplicable, failed fetch, no callback). The diagnostics kept alongside the values are
/// informative only and do not take part in comparisons.
#[derive(Clone, Debug, Default)]
pub struct CapabilitySnapshot {
    values: FxHashMap<LimitId, LimitValue>,
    failures: Vec<ProbeFailure>,
    skipped: Vec<LimitId>,
    missing_callbacks: ShapeKinds,
}

impl PartialEq for CapabilitySnapshot {
    fn eq(&self, other: &CapabilitySnapshot) -> bool {
        self.values == other.values && self.missing_callbacks == other.missing_callbacks
    }
}

impl Eq for CapabilitySnapshot {}

impl CapabilitySnapshot {
    pub(crate) fn new() -> CapabilitySnapshot {
        CapabilitySnapshot::default()
    }

    pub fn get(&self, id: LimitId) -> Option<&LimitValue> {
        self.values.get(&id)
    }

    pub fn contains(&self, id: LimitId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn get_int(&self, id: LimitId) -> Option<i32> {
        self.get(id).and_then(LimitValue::as_int)
    }

    pub fn get_float(&self, id: LimitId) -> Option<f32> {
        self.get(id).and_then(LimitValue::as_float)
    }

    pub fn get_int_array(&self, id: LimitId) -> Option<&[i32]> {
        self.get(id).and_then(LimitValue::as_int_array)
    }

    pub fn get_float_array(&self, id: LimitId) -> Option<&[OrderedFloat<f32>]> {
        self.get(id).and_then(LimitValue::as_float_array)
    }

    pub fn get_str(&self, id: LimitId) -> Option<&str> {
        self.get(id).and_then(LimitValue::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the determined limits, in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (LimitId, &LimitValue)> {
        let mut entries: Vec<_> = self.values.iter().map(|(id, v)| (*id, v)).collect();
        entries.sort_by_key(|(id, _)| *id);
        entries.into_iter()
    }

    /// Descriptors whose fetch failed, in registry order.
    pub fn failures(&self) -> &[ProbeFailure] {
        &self.failures
    }

    /// Applicable descriptors skipped because no callback handles their shape.
    pub fn skipped(&self) -> &[LimitId] {
        &self.skipped
    }

    /// Shape kinds that were needed but had no callback.
    pub fn missing_callbacks(&self) -> ShapeKinds {
        self.missing_callbacks
    }

    //----------------------------------------------------------------------------------------------
    pub(crate) fn insert(&mut self, id: LimitId, value: LimitValue) {
        self.values.insert(id, value);
    }

    pub(crate) fn record_failure(&mut self, failure: ProbeFailure) {
        self.failures.push(failure);
    }

    pub(crate) fn record_skipped(&mut self, id: LimitId, missing: ShapeKinds) {
        self.skipped.push(id);
        self.missing_callbacks |= missing;
    }
}
