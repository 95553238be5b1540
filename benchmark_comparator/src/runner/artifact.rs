//!
//! A temporary build artifact.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// A temporary build artifact, removed when dropped whatever the build or
/// run outcome was.
///
#[derive(Debug)]
pub struct Artifact {
    /// The artifact path.
    path: PathBuf,
}

impl Artifact {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    ///
    /// The artifact path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }
}

impl Drop for Artifact {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = std::fs::remove_file(self.path.as_path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Artifact;

    #[test]
    fn removed_on_drop() {
        let path = std::env::temp_dir().join(format!(
            "benchmark-comparator-artifact-{}",
            std::process::id()
        ));
        std::fs::write(path.as_path(), b"binary").expect("Always valid");

        {
            let artifact = Artifact::new(path.clone());
            assert!(artifact.path().exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn absent_artifact_is_ignored() {
        let path = std::env::temp_dir().join(format!(
            "benchmark-comparator-artifact-absent-{}",
            std::process::id()
        ));

        drop(Artifact::new(path.clone()));

        assert!(!path.exists());
    }
}
