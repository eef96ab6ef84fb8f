use fxhash::FxHashSet;
use std::iter::FromIterator;

/// Set of extension names supported by a runtime.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Extensions {
    names: FxHashSet<String>,
}

impl Extensions {
    pub fn new() -> Extensions {
        Extensions::default()
    }

    /// Builds the set from a space-separated list, as returned by `glGetString(GL_EXTENSIONS)`.
    pub fn from_space_separated(s: &str) -> Extensions {
        s.split_whitespace().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Marks an extension as supported.
    pub fn enable(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|s| s.as_str())
    }
}

impl<S: Into<String>> FromIterator<S> for Extensions {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Extensions {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Extensions {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.names.extend(iter.into_iter().map(Into::into))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated() {
        let ext = Extensions::from_space_separated(
            "GL_ARB_compute_shader  GL_KHR_debug GL_ARB_compute_shader ",
        );
        assert_eq!(ext.len(), 2);
        assert!(ext.contains("GL_KHR_debug"));
        assert!(ext.contains("GL_ARB_compute_shader"));
        assert!(!ext.contains("GL_ARB"));
    }

    #[test]
    fn test_empty() {
        assert!(Extensions::from_space_separated("   ").is_empty());
    }

    #[test]
    fn test_enable() {
        let mut ext: Extensions = vec!["GL_EXT_texture3D"].into_iter().collect();
        ext.enable("GL_OES_texture_3D");
        assert!(ext.contains("GL_OES_texture_3D"));
        assert_eq!(ext.len(), 2);
    }
}
