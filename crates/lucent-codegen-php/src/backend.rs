//! Build orchestration for the PHP target.
//!
//! The outer driver invokes the phases in a fixed order: prepare the output
//! directory, write the runtime asset, build the program, clean up. Each
//! phase returns a `Result`; progress is reported through the `log` facade
//! (one line per compiled source file, one per written function).
//!
//! A build is a single sequential pass. Every output file is rendered to an
//! in-memory buffer, committed, and closed before the next begins; the only
//! cross-file input is the sibling include list, computed once up front.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use lucent_core::{BoundProgram, CodegenError, FunctionSymbol};

use crate::asset::RuntimeAsset;
use crate::entry::{entry_function, entry_output};
use crate::file::PhpFile;
use crate::partition::Partition;

type Result<T> = std::result::Result<T, CodegenError>;

/// Name of the synthesized bootstrap file.
const ENTRY_FILE: &str = "index.php";

/// The PHP backend: writes a complete program into one output directory.
#[derive(Debug, Clone)]
pub struct PhpBackend {
    out_dir: PathBuf,
}

impl PhpBackend {
    /// Target name; also the per-target output subdirectory.
    pub const TARGET_NAME: &'static str = "php8";

    /// Backend writing directly into `out_dir`.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Backend writing into `<base_dir>/out/php8`, the layout the outer
    /// build driver uses.
    pub fn for_base_dir(base_dir: &Path) -> Self {
        Self::new(base_dir.join("out").join(Self::TARGET_NAME))
    }

    /// The output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Create the output directory if it does not exist yet.
    pub fn prepare_output(&self) -> Result<()> {
        fs::create_dir_all(&self.out_dir)?;
        Ok(())
    }

    /// Write the runtime support files, overwriting prior copies.
    pub fn write_runtime(&self) -> Result<PathBuf> {
        info!("build core");
        info!("bind syscalls");
        RuntimeAsset::Syscall.write_to(&self.out_dir)
    }

    /// Generate every output file plus the entry bootstrap.
    ///
    /// Rebuilds are destructive per path: each file named by the current
    /// program is deleted and fully rewritten. Files generated from sources
    /// no longer in the program are left untouched.
    pub fn build(&self, program: &BoundProgram) -> Result<BuildSummary> {
        let partition = Partition::of(program, &self.out_dir);
        let entry = entry_function(program);
        let sibling_names = partition.file_names();

        let mut summary = BuildSummary::default();

        for file in &partition.files {
            info!("compile: {}", file.source.display());

            let mut php = PhpFile::new(file.file_name());
            php.write_header(sibling_names.iter().copied());

            for function in file.functions.iter().copied() {
                debug!("    write: {}", function.name);
                let is_entry = entry.is_some_and(|e| e.name == function.name);
                php.write_function(function, program, is_entry)?;
                summary.functions += 1;
            }

            php.commit(&file.path)?;
            summary.files.push(file.path.clone());
        }

        summary.entry_file = self.write_entry_file(&partition, entry)?;
        Ok(summary)
    }

    /// Write `index.php`: the open tag plus, when the program has an entry
    /// callable, a single include of the generated file that defines it.
    ///
    /// With no entry callable the bootstrap degenerates to the open tag
    /// alone; that is a valid program state, not an error.
    fn write_entry_file(
        &self,
        partition: &Partition<'_>,
        entry: Option<&FunctionSymbol>,
    ) -> Result<PathBuf> {
        let path = self.out_dir.join(ENTRY_FILE);
        if path.exists() {
            fs::remove_file(&path)?;
        }

        let contents = match entry.and_then(|e| entry_output(partition, e)) {
            Some(file) => format!("<?php\ninclude_once \"./{}\";", file.file_name()),
            None => "<?php\n".to_string(),
        };
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Post-build hook; the PHP target has nothing to tear down.
    pub fn clean_up(&self) -> Result<()> {
        Ok(())
    }
}

/// What a build wrote, for driver logging and tests.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuildSummary {
    /// Generated source files, in partition order.
    pub files: Vec<PathBuf>,
    /// The bootstrap file.
    pub entry_file: PathBuf,
    /// Total functions written.
    pub functions: usize,
}
