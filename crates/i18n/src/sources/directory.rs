use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{BundleFormat, BundleSource, RawBundle};
use crate::{L10nError, Result};

/// Source reading bundles from a directory.
///
/// # Directory Structure
///
/// ```text
/// l10n_dir/
/// ├── Application_en.toml
/// ├── Application_de.toml
/// ├── Application_de_AT.toml   (optional, overrides Application_de)
/// ├── Menu_en.ron
/// └── Menu_de.ron
/// ```
///
/// When both `name.toml` and `name.ron` exist, the TOML file wins.
#[derive(Clone, Debug)]
pub struct DirectoryBundles {
    root: PathBuf,
}

impl DirectoryBundles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl BundleSource for DirectoryBundles {
    fn fetch(&self, name: &str) -> Result<Option<RawBundle>> {
        for format in BundleFormat::ALL {
            let path = self.root.join(format!("{name}.{}", format.extension()));
            match std::fs::read_to_string(&path) {
                Ok(text) => return Ok(Some(RawBundle::new(name, format, text))),
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(source) => return Err(L10nError::Read { path, source }),
            }
        }
        Ok(None)
    }

    fn describe(&self) -> String {
        format!("bundle directory {}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefers_toml_over_ron() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("Menu_en.toml"), "Quit = \"toml\"").unwrap();
        std::fs::write(dir.path().join("Menu_en.ron"), r#"{ "Quit": "ron" }"#).unwrap();

        let bundle = DirectoryBundles::new(dir.path())
            .fetch("Menu_en")
            .unwrap()
            .unwrap();
        assert_eq!(bundle.format, BundleFormat::Toml);
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(DirectoryBundles::new(dir.path()).fetch("Menu_en").unwrap(), None);
    }

    #[test]
    fn unreadable_entry_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory in place of the file fails with something other than NotFound.
        std::fs::create_dir(dir.path().join("Menu_en.toml")).unwrap();

        let err = DirectoryBundles::new(dir.path()).fetch("Menu_en").unwrap_err();
        assert!(matches!(err, L10nError::Read { .. }), "unexpected error: {err}");
    }
}
