use crate::api as gl;
use crate::api::Gl;
use crate::fetch::{get_integer, get_string, get_string_indexed};
use autograph_caps::{
    Api, Extensions, FetchError, ParseVersionError, Profile, RuntimeContext, Version,
};
use std::error;
use std::fmt;

/// Error returned when the current GL context cannot be identified.
#[derive(Debug)]
pub enum ContextError {
    /// A required entry point was not loaded.
    NotLoaded(&'static str),
    /// `glGetString(GL_VERSION)` failed.
    NoVersion(FetchError),
    /// The version string was not recognized.
    Version(ParseVersionError),
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ContextError::NotLoaded(name) => write!(f, "{} is not loaded", name),
            ContextError::NoVersion(e) => write!(f, "could not query the GL version: {}", e),
            ContextError::Version(e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for ContextError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ContextError::NotLoaded(_) => None,
            ContextError::NoVersion(e) => Some(e),
            ContextError::Version(e) => Some(e),
        }
    }
}

impl From<ParseVersionError> for ContextError {
    fn from(e: ParseVersionError) -> Self {
        ContextError::Version(e)
    }
}

//--------------------------------------------------------------------------------------------------

/// Identification of the current GL context.
#[derive(Clone, Debug)]
pub struct ContextInfo {
    pub vendor: String,
    pub renderer: String,
    /// `GL_SHADING_LANGUAGE_VERSION`, if the context has a shading language.
    pub shading_language_version: Option<String>,
    /// Mesa's llvmpipe.
    pub software_renderer: bool,
    /// Version and extensions, as needed by a probe pass.
    pub runtime: RuntimeContext,
}

impl ContextInfo {
    pub fn version(&self) -> &Version {
        &self.runtime.version
    }

    pub fn extensions(&self) -> &Extensions {
        &self.runtime.extensions
    }
}

fn resolve_profile(gl: &Gl, version: Version, renderer: &str) -> Version {
    if version.is_at_least(&Version::new(3, 2, Api::Gl)) {
        let mask = get_integer(gl, gl::CONTEXT_PROFILE_MASK).unwrap_or(0) as u32;
        let profile = if mask & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
            Profile::Compatibility
        } else if mask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
            Profile::Core
        } else {
            Profile::Compatibility
        };
        version.with_profile(profile)
    } else if renderer.contains("WebGL") {
        version.with_profile(Profile::WebGl)
    } else if version.api == Api::Gl {
        version.with_profile(Profile::Compatibility)
    } else {
        version
    }
}

fn query_extensions(gl: &Gl, version: &Version) -> Extensions {
    // glGetStringi exists from GL 3.0 and ES 3.0
    if version.id() >= 300 && gl.GetStringi.is_loaded() {
        let count = match get_integer(gl, gl::NUM_EXTENSIONS) {
            Ok(n) => n.max(0) as u32,
            Err(e) => {
                warn!("could not query GL_NUM_EXTENSIONS: {}", e);
                0
            }
        };
        (0..count)
            .filter_map(|i| match get_string_indexed(gl, gl::EXTENSIONS, i) {
                Ok(name) => Some(name),
                Err(e) => {
                    warn!("could not query extension #{}: {}", i, e);
                    None
                }
            })
            .collect()
    } else {
        match get_string(gl, gl::EXTENSIONS) {
            Ok(s) => Extensions::from_space_separated(&s),
            Err(e) => {
                warn!("could not query GL_EXTENSIONS: {}", e);
                Extensions::new()
            }
        }
    }
}

/// Identifies the GL context current on the calling thread.
pub fn query_context(gl: &Gl) -> Result<ContextInfo, ContextError> {
    if !gl.GetError.is_loaded() {
        return Err(ContextError::NotLoaded("glGetError"));
    }
    if !gl.GetString.is_loaded() {
        return Err(ContextError::NotLoaded("glGetString"));
    }
    if !gl.GetIntegerv.is_loaded() {
        return Err(ContextError::NotLoaded("glGetIntegerv"));
    }

    let version_string = get_string(gl, gl::VERSION).map_err(ContextError::NoVersion)?;
    let version = Version::parse(&version_string)?;
    let vendor = get_string(gl, gl::VENDOR).unwrap_or_default();
    let renderer = get_string(gl, gl::RENDERER).unwrap_or_default();
    let software_renderer = renderer.contains("llvmpipe");
    let version = resolve_profile(gl, version, &renderer);
    let extensions = query_extensions(gl, &version);

    let has_shading_language = match version.api {
        Api::Gl => {
            version.major >= 2 || extensions.contains("GL_ARB_shading_language_100")
        }
        Api::Gles2 | Api::Glsc2 => true,
        Api::Gles1 => false,
    };
    let shading_language_version = if has_shading_language {
        get_string(gl, gl::SHADING_LANGUAGE_VERSION).ok()
    } else {
        None
    };

    info!("OpenGL version: {} ({})", version, version_string);
    info!("vendor: {}, renderer: {}", vendor, renderer);
    if let Some(ref glsl) = shading_language_version {
        info!("shading language: {}", glsl);
    }
    debug!("{} extensions", extensions.len());
    if software_renderer {
        warn!("software renderer in use: {}", renderer);
    }

    Ok(ContextInfo {
        vendor,
        renderer,
        shading_language_version,
        software_renderer,
        runtime: RuntimeContext::new(version, extensions),
    })
}
