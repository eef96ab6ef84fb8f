use crate::context::RuntimeContext;
use crate::version::{Api, ApiSet, Version};
use bitflags::bitflags;
use std::fmt;

//--------------------------------------------------------------------------------------------------

/// Identifier of a limit, correlated with the native query token (e.g. a `GLenum`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct LimitId(pub u32);

impl fmt::Display for LimitId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "0x{:04X}", self.0)
    }
}

/// Data layout of a limit value. Array lengths are exact.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Shape {
    Int,
    Float,
    IntArray(usize),
    FloatArray(usize),
    String,
}

impl Shape {
    pub fn kind(self) -> ShapeKind {
        match self {
            Shape::Int => ShapeKind::Int,
            Shape::Float => ShapeKind::Float,
            Shape::IntArray(_) => ShapeKind::IntArray,
            Shape::FloatArray(_) => ShapeKind::FloatArray,
            Shape::String => ShapeKind::String,
        }
    }

    /// Number of elements of an array shape.
    pub fn array_len(self) -> Option<usize> {
        match self {
            Shape::IntArray(n) | Shape::FloatArray(n) => Some(n),
            _ => None,
        }
    }
}

/// A shape without its array length. Each kind has its own fetch callback.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    Int,
    Float,
    IntArray,
    FloatArray,
    String,
}

bitflags! {
    /// A set of shape kinds.
    #[derive(Default)]
    pub struct ShapeKinds: u8 {
        const INT = 0b00001;
        const FLOAT = 0b00010;
        const INT_ARRAY = 0b00100;
        const FLOAT_ARRAY = 0b01000;
        const STRING = 0b10000;
    }
}

impl ShapeKind {
    pub fn flag(self) -> ShapeKinds {
        match self {
            ShapeKind::Int => ShapeKinds::INT,
            ShapeKind::Float => ShapeKinds::FLOAT,
            ShapeKind::IntArray => ShapeKinds::INT_ARRAY,
            ShapeKind::FloatArray => ShapeKinds::FLOAT_ARRAY,
            ShapeKind::String => ShapeKinds::STRING,
        }
    }
}

impl ShapeKinds {
    pub fn kinds(self) -> impl Iterator<Item = ShapeKind> {
        [
            ShapeKind::Int,
            ShapeKind::Float,
            ShapeKind::IntArray,
            ShapeKind::FloatArray,
            ShapeKind::String,
        ]
        .iter()
        .cloned()
        .filter(move |k| self.contains(k.flag()))
    }
}

//--------------------------------------------------------------------------------------------------

/// One alternative under which a limit can be queried.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Requirement {
    /// Satisfied by a runtime of one of `apis` whose version is at least `major.minor`.
    Version {
        major: u32,
        minor: u32,
        apis: ApiSet,
    },
    /// Satisfied by a runtime of one of `apis` exposing the named extension.
    Extension { name: &'static str, apis: ApiSet },
}

impl Requirement {
    pub const fn version(api: Api, major: u32, minor: u32) -> Requirement {
        Requirement::Version {
            major,
            minor,
            apis: api.as_set(),
        }
    }

    /// Extension alternative valid on any API.
    pub const fn extension(name: &'static str) -> Requirement {
        Requirement::Extension {
            name,
            apis: ApiSet::all(),
        }
    }

    /// Extension alternative restricted to some APIs.
    pub const fn extension_for(name: &'static str, apis: ApiSet) -> Requirement {
        Requirement::Extension { name, apis }
    }

    /// Builds a requirement from a registry feature name (`GL_VERSION_4_3`, `GL_ARB_compute_shader`).
    ///
    /// Version features default to the API their name designates; extensions default to any API.
    pub fn feature(name: &'static str, apis: Option<ApiSet>) -> Requirement {
        match Version::parse_feature(name) {
            Some(v) => Requirement::Version {
                major: v.major,
                minor: v.minor,
                apis: apis.unwrap_or_else(|| v.api.as_set()),
            },
            None => Requirement::Extension {
                name,
                apis: apis.unwrap_or_else(ApiSet::all),
            },
        }
    }

    pub fn is_satisfied(&self, context: &RuntimeContext) -> bool {
        let version = &context.version;
        match self {
            Requirement::Version { major, minor, apis } => {
                apis.contains_api(version.api) && (version.major, version.minor) >= (*major, *minor)
            }
            Requirement::Extension { name, apis } => {
                apis.contains_api(version.api) && context.has_extension(name)
            }
        }
    }
}

//--------------------------------------------------------------------------------------------------

/// Registry entry describing one probeable limit.
#[derive(Copy, Clone, Debug)]
pub struct ProbeDescriptor {
    pub id: LimitId,
    /// Symbolic name, for diagnostics.
    pub name: &'static str,
    pub shape: Shape,
    /// Alternatives; any one of them makes the limit applicable.
    pub requirements: &'static [Requirement],
}

impl ProbeDescriptor {
    pub const fn new(
        id: u32,
        name: &'static str,
        shape: Shape,
        requirements: &'static [Requirement],
    ) -> ProbeDescriptor {
        ProbeDescriptor {
            id: LimitId(id),
            name,
            shape,
            requirements,
        }
    }

    /// Whether any alternative is satisfied by `context`.
    pub fn is_applicable(&self, context: &RuntimeContext) -> bool {
        self.requirements.iter().any(|r| r.is_satisfied(context))
    }
}

//--------------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;
    use crate::extensions::Extensions;

    fn context(version: Version, extensions: &[&str]) -> RuntimeContext {
        RuntimeContext::new(version, extensions.iter().cloned().collect())
    }

    static MAX_VIEWPORTS: ProbeDescriptor = ProbeDescriptor::new(
        0x825B,
        "MAX_VIEWPORTS",
        Shape::Int,
        &[
            Requirement::version(Api::Gl, 4, 1),
            Requirement::extension_for("GL_ARB_viewport_array", ApiSet::GL),
            Requirement::extension_for("GL_OES_viewport_array", ApiSet::GLES2),
        ],
    );

    #[test]
    fn test_version_alternative() {
        let gl41 = context(Version::new(4, 1, Api::Gl), &[]);
        let gl45 = context(Version::new(4, 5, Api::Gl), &[]);
        let gl33 = context(Version::new(3, 3, Api::Gl), &[]);
        let es32 = context(Version::new(3, 2, Api::Gles2), &[]);
        assert!(MAX_VIEWPORTS.is_applicable(&gl41));
        assert!(MAX_VIEWPORTS.is_applicable(&gl45));
        assert!(!MAX_VIEWPORTS.is_applicable(&gl33));
        // ES 3.2 is not GL 4.1
        assert!(!MAX_VIEWPORTS.is_applicable(&es32));
    }

    #[test]
    fn test_extension_alternative() {
        let gl33 = context(Version::new(3, 3, Api::Gl), &["GL_ARB_viewport_array"]);
        assert!(MAX_VIEWPORTS.is_applicable(&gl33));

        // extension restricted to another API
        let es30 = context(Version::new(3, 0, Api::Gles2), &["GL_ARB_viewport_array"]);
        assert!(!MAX_VIEWPORTS.is_applicable(&es30));

        let es30 = context(Version::new(3, 0, Api::Gles2), &["GL_OES_viewport_array"]);
        assert!(MAX_VIEWPORTS.is_applicable(&es30));
    }

    #[test]
    fn test_unrestricted_extension() {
        let r = Requirement::extension("GL_EXT_texture3D");
        for api in &[Api::Gl, Api::Gles1, Api::Gles2, Api::Glsc2] {
            let ctx = context(Version::new(1, 0, *api), &["GL_EXT_texture3D"]);
            assert!(r.is_satisfied(&ctx));
        }
        let ctx = RuntimeContext::new(Version::new(4, 6, Api::Gl), Extensions::new());
        assert!(!r.is_satisfied(&ctx));
    }

    #[test]
    fn test_feature_requirements() {
        assert_eq!(
            Requirement::feature("GL_ES_VERSION_3_1", None),
            Requirement::version(Api::Gles2, 3, 1)
        );
        assert_eq!(
            Requirement::feature("GL_ARB_compute_shader", ApiSet::parse("gl|glcore")),
            Requirement::extension_for("GL_ARB_compute_shader", ApiSet::GL)
        );
        assert_eq!(
            Requirement::feature("GL_EXT_texture3D", None),
            Requirement::extension("GL_EXT_texture3D")
        );
    }

    #[test]
    fn test_no_alternatives() {
        let d = ProbeDescriptor::new(1, "NEVER", Shape::Int, &[]);
        let ctx = context(Version::new(4, 6, Api::Gl), &[]);
        assert!(!d.is_applicable(&ctx));
    }

    #[test]
    fn test_shape_kinds() {
        let kinds = ShapeKinds::INT | ShapeKinds::STRING;
        let v: Vec<_> = kinds.kinds().collect();
        assert_eq!(v, vec![ShapeKind::Int, ShapeKind::String]);
        assert_eq!(Shape::FloatArray(2).kind(), ShapeKind::FloatArray);
        assert_eq!(Shape::FloatArray(2).array_len(), Some(2));
        assert_eq!(Shape::Int.array_len(), None);
    }
}
