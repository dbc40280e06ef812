//! Bundled runtime assets.
//!
//! The syscall shim is an opaque support file relocated verbatim into every
//! build's output; the generator never inspects or rewrites its contents.

use std::fs;
use std::path::{Path, PathBuf};

use lucent_core::CodegenError;

/// A static asset shipped with the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeAsset {
    /// The PHP syscall shim backing the language's builtin functions.
    Syscall,
}

impl RuntimeAsset {
    /// File name the asset is written under.
    pub fn file_name(&self) -> &'static str {
        match self {
            RuntimeAsset::Syscall => "syscall.php",
        }
    }

    /// The bundled contents.
    pub fn contents(&self) -> &'static str {
        match self {
            RuntimeAsset::Syscall => include_str!("../assets/syscall.php"),
        }
    }

    /// Write the asset into `dir`, overwriting any prior copy.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, CodegenError> {
        let path = dir.join(self.file_name());
        fs::write(&path, self.contents())?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn syscall_shim_is_a_php_file() {
        let contents = RuntimeAsset::Syscall.contents();
        assert!(contents.starts_with("<?php"));
        assert_eq!(RuntimeAsset::Syscall.file_name(), "syscall.php");
    }

    #[test]
    fn write_to_overwrites_prior_copy() {
        let dir = TempDir::new("asset").unwrap();
        fs::write(dir.path().join("syscall.php"), "stale").unwrap();

        let path = RuntimeAsset::Syscall.write_to(dir.path()).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, RuntimeAsset::Syscall.contents());
    }
}
