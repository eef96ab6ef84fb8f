//! Fetch callbacks issuing the native `glGet*` queries.
use crate::api as gl;
use crate::api::Gl;
use autograph_caps::{FetchCallbacks, FetchError};
use std::ffi::CStr;
use std::os::raw::c_char;

/// Upper bound on the errors drained from the GL error queue before a query.
///
/// GL keeps at most one pending flag per error code, so a queue that is still not empty after this
/// many reads will not drain.
const MAX_PENDING_ERRORS: usize = 32;

fn require(loaded: bool, name: &str) -> Result<(), FetchError> {
    if loaded {
        Ok(())
    } else {
        Err(FetchError::Mechanism(format!("{} is not loaded", name)))
    }
}

/// Drains errors left by previous GL calls so that they are not blamed on the next query.
fn clear_errors(gl: &Gl) -> Result<(), FetchError> {
    for _ in 0..MAX_PENDING_ERRORS {
        match unsafe { gl.GetError() } {
            gl::NO_ERROR => return Ok(()),
            gl::CONTEXT_LOST => return Err(FetchError::Mechanism("GL context lost".to_string())),
            code => debug!("discarding pending GL error 0x{:04X}", code),
        }
    }
    warn!(
        "GL error queue still not empty after {} reads",
        MAX_PENDING_ERRORS
    );
    Err(FetchError::Mechanism(
        "GL error queue does not drain".to_string(),
    ))
}

fn check_errors(gl: &Gl) -> Result<(), FetchError> {
    match unsafe { gl.GetError() } {
        gl::NO_ERROR => Ok(()),
        code => Err(FetchError::Rejected { code }),
    }
}

//--------------------------------------------------------------------------------------------------

/// `glGetIntegerv` into `out`.
///
/// GL reports no element count: it writes as many values as `pname` natively has, so `out` must
/// hold at least that many. The registry array lengths are checked against GL in the limits tests.
pub(crate) fn get_integers(gl: &Gl, pname: u32, out: &mut [i32]) -> Result<usize, FetchError> {
    require(gl.GetError.is_loaded(), "glGetError")?;
    require(gl.GetIntegerv.is_loaded(), "glGetIntegerv")?;
    if out.is_empty() {
        return Ok(0);
    }
    clear_errors(gl)?;
    unsafe {
        gl.GetIntegerv(pname, out.as_mut_ptr());
    }
    check_errors(gl)?;
    Ok(out.len())
}

/// `glGetFloatv` into `out`. Same length contract as `get_integers`.
pub(crate) fn get_floats(gl: &Gl, pname: u32, out: &mut [f32]) -> Result<usize, FetchError> {
    require(gl.GetError.is_loaded(), "glGetError")?;
    require(gl.GetFloatv.is_loaded(), "glGetFloatv")?;
    if out.is_empty() {
        return Ok(0);
    }
    clear_errors(gl)?;
    unsafe {
        gl.GetFloatv(pname, out.as_mut_ptr());
    }
    check_errors(gl)?;
    Ok(out.len())
}

pub(crate) fn get_integer(gl: &Gl, pname: u32) -> Result<i32, FetchError> {
    let mut v = [0];
    get_integers(gl, pname, &mut v)?;
    Ok(v[0])
}

pub(crate) fn get_string(gl: &Gl, name: u32) -> Result<String, FetchError> {
    require(gl.GetError.is_loaded(), "glGetError")?;
    require(gl.GetString.is_loaded(), "glGetString")?;
    clear_errors(gl)?;
    let ptr = unsafe { gl.GetString(name) };
    check_errors(gl)?;
    string_from_ptr(ptr)
}

pub(crate) fn get_string_indexed(gl: &Gl, name: u32, index: u32) -> Result<String, FetchError> {
    require(gl.GetError.is_loaded(), "glGetError")?;
    require(gl.GetStringi.is_loaded(), "glGetStringi")?;
    clear_errors(gl)?;
    let ptr = unsafe { gl.GetStringi(name, index) };
    check_errors(gl)?;
    string_from_ptr(ptr)
}

fn string_from_ptr(ptr: *const u8) -> Result<String, FetchError> {
    if ptr.is_null() {
        return Err(FetchError::InvalidValue("null string".to_string()));
    }
    let s = unsafe { CStr::from_ptr(ptr as *const c_char) };
    s.to_str()
        .map(str::to_owned)
        .map_err(|e| FetchError::InvalidValue(e.to_string()))
}

//--------------------------------------------------------------------------------------------------

/// Fetch callbacks querying the GL context current on the calling thread.
///
/// The returned callbacks borrow `gl` and must be used on the thread that owns the context.
pub fn gl_fetch_callbacks(gl: &Gl) -> FetchCallbacks {
    FetchCallbacks::new()
        .with_int(move |id| get_integer(gl, id.0))
        .with_float(move |id| {
            let mut v = [0.0];
            get_floats(gl, id.0, &mut v)?;
            Ok(v[0])
        })
        .with_int_array(move |id, buf| get_integers(gl, id.0, buf))
        .with_float_array(move |id, buf| get_floats(gl, id.0, buf))
        .with_string(move |id| get_string(gl, id.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use autograph_caps::{LimitId, ShapeKind};
    use std::cell::Cell;
    use std::os::raw::c_void;
    use std::ptr;

    thread_local! {
        static PENDING_ERRORS: Cell<u32> = Cell::new(0);
        static PENDING_CODE: Cell<u32> = Cell::new(gl::INVALID_ENUM);
    }

    extern "system" fn fake_get_error() -> gl::types::GLenum {
        PENDING_ERRORS.with(|pending| match pending.get() {
            0 => gl::NO_ERROR,
            n => {
                pending.set(n - 1);
                PENDING_CODE.with(Cell::get)
            }
        })
    }

    extern "system" fn fake_get_integerv(_pname: gl::types::GLenum, data: *mut gl::types::GLint) {
        unsafe {
            *data = 42;
        }
    }

    /// Bindings with only `glGetError` and `glGetIntegerv` loaded, both backed by fakes.
    fn fake_driver(pending: u32, code: u32) -> Gl {
        PENDING_ERRORS.with(|p| p.set(pending));
        PENDING_CODE.with(|c| c.set(code));
        Gl::load_with(|name| match name {
            "glGetError" => fake_get_error as *const c_void,
            "glGetIntegerv" => fake_get_integerv as *const c_void,
            _ => ptr::null(),
        })
    }

    fn unloaded() -> Gl {
        Gl::load_with(|_| ptr::null())
    }

    #[test]
    fn test_unloaded_entry_points() {
        let gl = unloaded();
        let fetch = gl_fetch_callbacks(&gl);
        for kind in &[
            ShapeKind::Int,
            ShapeKind::Float,
            ShapeKind::IntArray,
            ShapeKind::FloatArray,
            ShapeKind::String,
        ] {
            assert!(fetch.supports(*kind));
        }

        let id = LimitId(gl::MAX_TEXTURE_SIZE);
        assert!(fetch.int.as_ref().unwrap()(id).unwrap_err().is_mechanism());
        assert!(fetch.float.as_ref().unwrap()(id).unwrap_err().is_mechanism());
        let mut buf = [0; 2];
        assert!(fetch.int_array.as_ref().unwrap()(id, &mut buf)
            .unwrap_err()
            .is_mechanism());
        assert!(fetch.string.as_ref().unwrap()(LimitId(gl::RENDERER))
            .unwrap_err()
            .is_mechanism());
    }

    #[test]
    fn test_null_string() {
        match string_from_ptr(ptr::null()) {
            Err(FetchError::InvalidValue(_)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        let s = b"4.6.0 NVIDIA 440.44\0";
        assert_eq!(string_from_ptr(s.as_ptr()).unwrap(), "4.6.0 NVIDIA 440.44");
    }

    #[test]
    fn test_pending_errors_are_drained() {
        let gl = fake_driver(3, gl::INVALID_ENUM);
        assert_eq!(get_integer(&gl, gl::MAX_TEXTURE_SIZE), Ok(42));
        assert_eq!(PENDING_ERRORS.with(Cell::get), 0);
    }

    #[test]
    fn test_error_queue_that_does_not_drain() {
        let gl = fake_driver(MAX_PENDING_ERRORS as u32 + 8, gl::INVALID_OPERATION);
        let err = get_integer(&gl, gl::MAX_TEXTURE_SIZE).unwrap_err();
        assert!(err.is_mechanism());
    }

    #[test]
    fn test_context_lost() {
        let gl = fake_driver(1, gl::CONTEXT_LOST);
        match get_integer(&gl, gl::MAX_TEXTURE_SIZE) {
            Err(FetchError::Mechanism(msg)) => assert_eq!(msg, "GL context lost"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
