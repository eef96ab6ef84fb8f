use crate::error::ParseVersionError;
use bitflags::bitflags;
use lazy_static::lazy_static;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;

//--------------------------------------------------------------------------------------------------

/// API family of a runtime.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Api {
    /// Desktop OpenGL.
    Gl,
    /// OpenGL ES 1.x.
    Gles1,
    /// OpenGL ES 2.0 and later.
    Gles2,
    /// OpenGL SC 2.0 (safety-critical).
    Glsc2,
}

impl Api {
    pub fn name(self) -> &'static str {
        match self {
            Api::Gl => "gl",
            Api::Gles1 => "gles1",
            Api::Gles2 => "gles2",
            Api::Glsc2 => "glsc2",
        }
    }

    pub fn is_gles(self) -> bool {
        match self {
            Api::Gles1 | Api::Gles2 => true,
            _ => false,
        }
    }

    /// The singleton set containing this API.
    pub const fn as_set(self) -> ApiSet {
        match self {
            Api::Gl => ApiSet::GL,
            Api::Gles1 => ApiSet::GLES1,
            Api::Gles2 => ApiSet::GLES2,
            Api::Glsc2 => ApiSet::GLSC2,
        }
    }
}

impl fmt::Display for Api {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

bitflags! {
    /// A set of API families, used to restrict a requirement to some runtimes.
    pub struct ApiSet: u8 {
        const GL = 0b0001;
        const GLES1 = 0b0010;
        const GLES2 = 0b0100;
        const GLSC2 = 0b1000;
        const GLES = Self::GLES1.bits | Self::GLES2.bits;
    }
}

impl ApiSet {
    /// Parses a `|`-separated list of API names, such as `gl|glcore|gles2`.
    ///
    /// `glcore` is folded into `gl`: profiles are not API families.
    pub fn parse(s: &str) -> Option<ApiSet> {
        let mut set = ApiSet::empty();
        for name in s.split('|') {
            set |= match name.trim() {
                "gl" | "glcore" => ApiSet::GL,
                "gles1" => ApiSet::GLES1,
                "gles2" => ApiSet::GLES2,
                "glsc2" => ApiSet::GLSC2,
                _ => return None,
            };
        }
        Some(set)
    }

    pub fn contains_api(self, api: Api) -> bool {
        self.contains(api.as_set())
    }
}

/// Context profile.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Profile {
    Core,
    Compatibility,
    /// OpenGL ES 1.x common profile.
    Common,
    WebGl,
}

impl Profile {
    pub fn name(self) -> &'static str {
        match self {
            Profile::Core => "core",
            Profile::Compatibility => "compatibility",
            Profile::Common => "common",
            Profile::WebGl => "webgl",
        }
    }
}

//--------------------------------------------------------------------------------------------------

/// Version of a runtime, qualified by its API family.
///
/// Versions of different API families are unordered: `cmp_release` returns `None` for them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
    pub api: Api,
    pub profile: Option<Profile>,
}

lazy_static! {
    static ref RE_VERSION: Regex =
        Regex::new(r"(?P<major>\d+)\.(?P<minor>\d+)(\.(?P<rev>\d+))?").unwrap();
    static ref RE_FEATURE: Regex =
        Regex::new(r"^GL(?P<api>_ES|_SC)?_VERSION_(?P<major>\d+)_(?P<minor>\d+)$").unwrap();
}

impl Version {
    pub const fn new(major: u32, minor: u32, api: Api) -> Version {
        Version {
            major,
            minor,
            revision: 0,
            api,
            profile: None,
        }
    }

    pub const fn with_revision(self, revision: u32) -> Version {
        Version { revision, ..self }
    }

    pub const fn with_profile(self, profile: Profile) -> Version {
        Version {
            profile: Some(profile),
            ..self
        }
    }

    /// Compact identifier: `major * 100 + minor * 10` (e.g. 460 for 4.6).
    pub fn id(&self) -> u32 {
        self.major * 100 + self.minor * 10
    }

    /// Compares release numbers. Returns `None` if the API families differ.
    pub fn cmp_release(&self, other: &Version) -> Option<Ordering> {
        if self.api != other.api {
            return None;
        }
        Some(
            (self.major, self.minor, self.revision).cmp(&(
                other.major,
                other.minor,
                other.revision,
            )),
        )
    }

    /// Returns whether this version belongs to the same API family as `min` and is not older.
    pub fn is_at_least(&self, min: &Version) -> bool {
        match self.cmp_release(min) {
            Some(Ordering::Greater) | Some(Ordering::Equal) => true,
            _ => false,
        }
    }

    /// Parses a version string as returned by `glGetString(GL_VERSION)`.
    ///
    /// Examples: `4.6.0 NVIDIA 440.44`, `OpenGL ES 3.2 Mesa 19.0`,
    /// `WebGL 2.0 (OpenGL ES 3.0 Chromium)`.
    pub fn parse(input: &str) -> Result<Version, ParseVersionError> {
        let c = RE_VERSION
            .captures(input)
            .ok_or_else(|| ParseVersionError::new(input))?;

        let number = |name: &str| -> Result<u32, ParseVersionError> {
            match c.name(name) {
                Some(m) => m
                    .as_str()
                    .parse::<u32>()
                    .map_err(|_| ParseVersionError::new(input)),
                None => Ok(0),
            }
        };

        let mut major = number("major")?;
        let mut minor = number("minor")?;
        let revision = number("rev")?;

        // some drivers report 4.60 for 4.6
        if minor >= 10 && minor % 10 == 0 {
            minor /= 10;
        }

        let api = if input.contains("ES") {
            if major == 1 {
                Api::Gles1
            } else {
                Api::Gles2
            }
        } else {
            Api::Gl
        };

        // the first number pair is the WebGL version; WebGL 2 is ES 3.0
        if input.contains("WebGL 2") {
            major = 3;
        }

        Ok(Version::new(major, minor, api).with_revision(revision))
    }

    /// Parses a registry feature name such as `GL_VERSION_4_3` or `GL_ES_VERSION_3_1`.
    ///
    /// Returns `None` for anything that is not a core version feature (e.g. extension names).
    pub fn parse_feature(name: &str) -> Option<Version> {
        if name == "GL_VERSION_ES_CM_1_0" {
            return Some(Version::new(1, 0, Api::Gles1).with_profile(Profile::Common));
        }

        let c = RE_FEATURE.captures(name)?;
        let api = match c.name("api").map(|m| m.as_str()) {
            None => Api::Gl,
            Some("_ES") => Api::Gles2,
            Some("_SC") => Api::Glsc2,
            Some(_) => return None,
        };
        let major = c["major"].parse::<u32>().ok()?;
        let minor = c["minor"].parse::<u32>().ok()?;
        Some(Version::new(major, minor, api))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)?;
        if self.revision != 0 {
            write!(f, ".{}", self.revision)?;
        }
        write!(f, " ({}", self.api)?;
        if let Some(profile) = self.profile {
            write!(f, ", {}", profile.name())?;
        }
        write!(f, ")")
    }
}

//--------------------------------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_desktop() {
        let v = Version::parse("4.6.0 NVIDIA 440.44").unwrap();
        assert_eq!(v, Version::new(4, 6, Api::Gl));

        let v = Version::parse("3.3.14 Compatibility Profile Context").unwrap();
        assert_eq!(v.api, Api::Gl);
        assert_eq!((v.major, v.minor, v.revision), (3, 3, 14));

        let v = Version::parse("4.60").unwrap();
        assert_eq!((v.major, v.minor), (4, 6));
    }

    #[test]
    fn test_parse_es() {
        let v = Version::parse("OpenGL ES 3.2 Mesa 19.0.8").unwrap();
        assert_eq!(v.api, Api::Gles2);
        assert_eq!((v.major, v.minor), (3, 2));

        let v = Version::parse("OpenGL ES-CM 1.1").unwrap();
        assert_eq!(v.api, Api::Gles1);

        let v = Version::parse("WebGL 2.0 (OpenGL ES 3.0 Chromium)").unwrap();
        assert_eq!(v.api, Api::Gles2);
        assert_eq!((v.major, v.minor), (3, 0));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("OpenGL").is_err());
        assert!(Version::parse("4").is_err());
    }

    #[test]
    fn test_parse_feature() {
        assert_eq!(
            Version::parse_feature("GL_VERSION_4_3"),
            Some(Version::new(4, 3, Api::Gl))
        );
        assert_eq!(
            Version::parse_feature("GL_ES_VERSION_3_1"),
            Some(Version::new(3, 1, Api::Gles2))
        );
        assert_eq!(
            Version::parse_feature("GL_SC_VERSION_2_0"),
            Some(Version::new(2, 0, Api::Glsc2))
        );
        let es1 = Version::parse_feature("GL_VERSION_ES_CM_1_0").unwrap();
        assert_eq!(es1.api, Api::Gles1);
        assert_eq!(Version::parse_feature("GL_ARB_compute_shader"), None);
        assert_eq!(Version::parse_feature("WGL_VERSION_1_0"), None);
    }

    #[test]
    fn test_ordering() {
        let gl33 = Version::new(3, 3, Api::Gl);
        let gl46 = Version::new(4, 6, Api::Gl);
        let es30 = Version::new(3, 0, Api::Gles2);

        assert_eq!(gl33.cmp_release(&gl46), Some(Ordering::Less));
        assert_eq!(gl33.cmp_release(&es30), None);
        assert!(gl46.is_at_least(&gl33));
        assert!(gl46.is_at_least(&gl46));
        assert!(!gl33.is_at_least(&gl46));
        assert!(!es30.is_at_least(&Version::new(2, 0, Api::Gl)));

        // profile does not take part in the comparison
        assert!(gl33
            .with_profile(Profile::Core)
            .is_at_least(&Version::new(3, 3, Api::Gl)));
    }

    #[test]
    fn test_id() {
        assert_eq!(Version::new(4, 6, Api::Gl).id(), 460);
        assert_eq!(Version::new(3, 0, Api::Gles2).id(), 300);
        assert_eq!(Version::parse("4.60 NVIDIA").unwrap().id(), 460);
        assert!(Version::new(2, 1, Api::Gl).id() < Version::new(3, 0, Api::Gl).id());
    }

    #[test]
    fn test_api_set_parse() {
        assert_eq!(ApiSet::parse("gl|glcore"), Some(ApiSet::GL));
        assert_eq!(
            ApiSet::parse("gles1|gles2"),
            Some(ApiSet::GLES1 | ApiSet::GLES2)
        );
        assert_eq!(ApiSet::parse("gl|vulkan"), None);
        assert!(ApiSet::parse("gl|glcore|gles1|gles2")
            .unwrap()
            .contains_api(Api::Gles2));
    }

    #[test]
    fn test_display() {
        assert_eq!(Version::new(4, 6, Api::Gl).to_string(), "4.6 (gl)");
        assert_eq!(
            Version::new(3, 2, Api::Gl)
                .with_revision(1)
                .with_profile(Profile::Core)
                .to_string(),
            "3.2.1 (gl, core)"
        );
    }
}
