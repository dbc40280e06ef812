//! Partitioning of functions into output files.
//!
//! Functions are grouped by the source file that declared them; each group
//! becomes one generated file named `<seq>_<stem>.php`. The sequence prefix
//! and the group order both derive from first-encounter order over the
//! program's function enumeration, so repeated builds over the same input
//! produce identical layouts, and two sources sharing a basename still get
//! distinct output names.

use std::path::{Path, PathBuf};

use lucent_core::{BoundProgram, FunctionSymbol};

/// One generated output file and the functions assigned to it.
#[derive(Debug, PartialEq)]
pub struct OutputFile<'p> {
    /// Target path inside the output directory.
    pub path: PathBuf,
    /// The source file this group mirrors.
    pub source: PathBuf,
    /// Functions in program enumeration order.
    pub functions: Vec<&'p FunctionSymbol>,
}

impl OutputFile<'_> {
    /// File name component of the target path.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
    }
}

/// The full partition of a program, in first-encounter source order.
///
/// Kept as an explicit ordered list rather than a map: the ordering is a
/// structural invariant of the output layout, not an incidental property of
/// a hash-map implementation.
#[derive(Debug, Default, PartialEq)]
pub struct Partition<'p> {
    /// Output files, one per distinct source path.
    pub files: Vec<OutputFile<'p>>,
}

impl<'p> Partition<'p> {
    /// Group `program`'s functions by their declaring source file.
    ///
    /// Groups are only created when a function is encountered, so
    /// zero-function groups cannot exist; an empty program yields an empty
    /// partition. Source paths are compared as stored; the upstream
    /// contract guarantees they are already absolute and resolved.
    pub fn of(program: &'p BoundProgram, out_dir: &Path) -> Self {
        let mut files: Vec<OutputFile<'p>> = Vec::new();

        for function in &program.functions {
            match files.iter().position(|f| f.source == function.source) {
                Some(i) => files[i].functions.push(function),
                None => {
                    let stem = function
                        .source
                        .file_stem()
                        .and_then(|s| s.to_str())
                        .unwrap_or("module");
                    let name = format!("{:04}_{}.php", files.len(), stem);
                    files.push(OutputFile {
                        path: out_dir.join(name),
                        source: function.source.clone(),
                        functions: vec![function],
                    });
                }
            }
        }

        Self { files }
    }

    /// Basenames of every generated file, in partition order.
    pub fn file_names(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.file_name()).collect()
    }

    /// Whether the partition holds no files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
