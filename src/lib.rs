//! Lucent PHP backend facade crate.
//!
//! Re-exports the bound-program model (`lucent-core`) and the PHP code
//! generator (`lucent-codegen-php`) under one roof. The outer build driver
//! depends on this crate and drives the backend in a fixed order: prepare
//! the output directory, write the runtime asset, build the program.
//!
//! ## Example
//!
//! ```no_run
//! use lucent::{BoundProgram, PhpBackend};
//!
//! fn main() -> Result<(), lucent::CodegenError> {
//!     let program = BoundProgram::new();
//!
//!     let backend = PhpBackend::for_base_dir(std::path::Path::new("."));
//!     backend.prepare_output()?;
//!     backend.write_runtime()?;
//!     let summary = backend.build(&program)?;
//!     backend.clean_up()?;
//!
//!     println!("wrote {} functions", summary.functions);
//!     Ok(())
//! }
//! ```

pub use lucent_codegen_php::{
    BuildSummary, OutputFile, Partition, PhpBackend, PhpFile, RuntimeAsset, entry_function,
    entry_output,
};
pub use lucent_core::{
    BinaryOp, BoundBlock, BoundExpr, BoundLiteral, BoundProgram, BoundStmt, CodegenError,
    FunctionSymbol, Label, LiteralValue, ParameterSymbol, Span, TypeSymbol, UnaryOp,
};
