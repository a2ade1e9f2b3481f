use std::path::{Path, PathBuf};

use strata_manifest::{Manifest, StrataToml};

/// A manifest plus the directory its relative paths are resolved against.
#[derive(Debug, Clone)]
pub struct Project {
    manifest: Manifest,
    base_dir: PathBuf,
}

impl Project {
    pub fn new(manifest: Manifest, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            manifest,
            base_dir: base_dir.into(),
        }
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory rendered output paths are joined onto.
    pub fn output_dir(&self) -> PathBuf {
        self.base_dir.join(&self.manifest.output_dir)
    }

    /// Location of a content template named in the manifest.
    pub fn template_path(&self, template: &Path) -> PathBuf {
        self.base_dir.join(template)
    }
}

impl From<StrataToml> for Project {
    fn from(file: StrataToml) -> Self {
        let base_dir = file.base_dir().to_path_buf();
        Self::new(file.into_manifest(), base_dir)
    }
}
