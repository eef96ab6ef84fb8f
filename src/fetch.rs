use crate::descriptor::{LimitId, ShapeKind};
use std::error;
use std::fmt;

//--------------------------------------------------------------------------------------------------

/// Error returned by a fetch callback.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FetchError {
    /// The runtime rejected the query (e.g. `GL_INVALID_ENUM`). Expected on drivers that
    /// advertise a feature without implementing every query of it.
    Rejected { code: u32 },
    /// An array fetch wrote a number of elements different from the descriptor's length.
    ShapeMismatch { expected: usize, actual: usize },
    /// The value cannot be stored (e.g. a NaN float, a string that is not UTF-8).
    InvalidValue(String),
    /// The query mechanism itself is unusable: entry point not loaded, no current context, ...
    Mechanism(String),
}

impl FetchError {
    /// Whether this error points at a broken query mechanism rather than an unsupported query.
    pub fn is_mechanism(&self) -> bool {
        match self {
            FetchError::Mechanism(_) => true,
            _ => false,
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            FetchError::Rejected { code } => write!(f, "query rejected (error 0x{:04X})", code),
            FetchError::ShapeMismatch { expected, actual } => write!(
                f,
                "expected {} elements, fetch returned {}",
                expected, actual
            ),
            FetchError::InvalidValue(msg) => write!(f, "invalid value: {}", msg),
            FetchError::Mechanism(msg) => write!(f, "query mechanism failure: {}", msg),
        }
    }
}

impl error::Error for FetchError {}

//--------------------------------------------------------------------------------------------------

type ScalarFn<'a, T> = Box<dyn Fn(LimitId) -> Result<T, FetchError> + 'a>;
/// Array fetches fill a buffer of the exact descriptor length and return the number of elements
/// they wrote.
type ArrayFn<'a, T> = Box<dyn Fn(LimitId, &mut [T]) -> Result<usize, FetchError> + 'a>;

/// Native query functions, one per shape kind. Any of them may be absent.
#[derive(Default)]
pub struct FetchCallbacks<'a> {
    pub int: Option<ScalarFn<'a, i32>>,
    pub float: Option<ScalarFn<'a, f32>>,
    pub int_array: Option<ArrayFn<'a, i32>>,
    pub float_array: Option<ArrayFn<'a, f32>>,
    pub string: Option<ScalarFn<'a, String>>,
}

impl<'a> FetchCallbacks<'a> {
    pub fn new() -> FetchCallbacks<'a> {
        FetchCallbacks::default()
    }

    pub fn with_int(mut self, f: impl Fn(LimitId) -> Result<i32, FetchError> + 'a) -> Self {
        self.int = Some(Box::new(f));
        self
    }

    pub fn with_float(mut self, f: impl Fn(LimitId) -> Result<f32, FetchError> + 'a) -> Self {
        self.float = Some(Box::new(f));
        self
    }

    pub fn with_int_array(
        mut self,
        f: impl Fn(LimitId, &mut [i32]) -> Result<usize, FetchError> + 'a,
    ) -> Self {
        self.int_array = Some(Box::new(f));
        self
    }

    pub fn with_float_array(
        mut self,
        f: impl Fn(LimitId, &mut [f32]) -> Result<usize, FetchError> + 'a,
    ) -> Self {
        self.float_array = Some(Box::new(f));
        self
    }

    pub fn with_string(
        mut self,
        f: impl Fn(LimitId) -> Result<String, FetchError> + 'a,
    ) -> Self {
        self.string = Some(Box::new(f));
        self
    }

    /// Whether a callback is registered for the given kind.
    pub fn supports(&self, kind: ShapeKind) -> bool {
        match kind {
            ShapeKind::Int => self.int.is_some(),
            ShapeKind::Float => self.float.is_some(),
            ShapeKind::IntArray => self.int_array.is_some(),
            ShapeKind::FloatArray => self.float_array.is_some(),
            ShapeKind::String => self.string.is_some(),
        }
    }
}
