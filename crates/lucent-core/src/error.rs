//! Unified error type for code generation.
//!
//! Every failure is fatal to the current build and aborts it
//! deterministically; the only recovery path is a full rebuild. There is no
//! partial-success reporting below the build level.

use thiserror::Error;

use crate::symbols::TypeSymbol;

/// Errors that abort a build.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CodegenError {
    /// A literal carried a semantic type with no rendering rule.
    ///
    /// This is an invariant violation from the upstream phases, not a
    /// target-language limitation.
    #[error("unsupported literal type '{ty}'")]
    UnsupportedLiteral {
        /// The offending semantic type.
        ty: TypeSymbol,
    },

    /// A function symbol had no entry in the program's body mapping.
    ///
    /// Indicates upstream produced an inconsistent program; the function
    /// must not be silently skipped.
    #[error("function '{name}' has no body")]
    MissingBody {
        /// The function name.
        name: String,
    },

    /// An output file could not be created, removed, or written.
    #[error("io: {0}")]
    Io(String),
}

impl From<std::io::Error> for CodegenError {
    fn from(e: std::io::Error) -> Self {
        CodegenError::Io(e.to_string())
    }
}
