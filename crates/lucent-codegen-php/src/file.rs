//! Per-file PHP emission.
//!
//! A [`PhpFile`] renders one output file into an owned string buffer: the
//! include header first, then each function declaration in group order.
//! Nothing touches the filesystem until [`PhpFile::commit`], which deletes
//! any stale file at the target path and writes the whole buffer in one
//! pass. Statement and expression rendering live in the sibling `stmt` and
//! `expr` modules as further `impl` blocks on this type.

use std::fs;
use std::path::Path;

use lucent_core::{BoundProgram, CodegenError, FunctionSymbol};

use crate::asset::RuntimeAsset;

type Result<T> = std::result::Result<T, CodegenError>;

/// One indentation unit inside a function body.
pub(crate) const INDENT: &str = "    ";

/// Renders a single generated PHP file.
#[derive(Debug)]
pub struct PhpFile {
    /// Own basename; excluded from the sibling includes.
    pub(crate) name: String,
    /// Accumulated file contents.
    pub(crate) out: String,
}

impl PhpFile {
    /// Create an empty buffer for the output file named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            out: String::new(),
        }
    }

    /// The rendered contents so far.
    pub fn output(&self) -> &str {
        &self.out
    }

    /// Emit the open tag and the include header.
    ///
    /// The target has no static linker: cross-file symbol references resolve
    /// at load time via textual inclusion, so every file pulls in the
    /// runtime shim plus the entire sibling set regardless of actual
    /// dependency. The file's own name is skipped.
    pub fn write_header<'a>(&mut self, siblings: impl IntoIterator<Item = &'a str>) {
        self.out.push_str("<?php\n");
        self.out.push_str("include_once \"./");
        self.out.push_str(RuntimeAsset::Syscall.file_name());
        self.out.push_str("\";\n");

        for file in siblings {
            if file == self.name {
                continue;
            }
            self.out.push_str("include_once \"./");
            self.out.push_str(file);
            self.out.push_str("\";\n");
        }
    }

    /// Emit one function declaration.
    ///
    /// The entry callable is wrapped in an immediately-invoked expression so
    /// loading the file both defines and runs it; every other declaration is
    /// inert until called.
    pub fn write_function(
        &mut self,
        function: &FunctionSymbol,
        program: &BoundProgram,
        is_entry: bool,
    ) -> Result<()> {
        let body = program
            .body_of(&function.name)
            .ok_or_else(|| CodegenError::MissingBody {
                name: function.name.clone(),
            })?;

        if is_entry {
            self.out.push('(');
        }
        self.write_function_head(function);
        self.out.push_str("\n{\n");
        self.write_block(body)?;
        self.out.push_str(if is_entry { "})();\n" } else { "}\n" });
        Ok(())
    }

    fn write_function_head(&mut self, function: &FunctionSymbol) {
        self.out.push_str("function ");
        self.out.push_str(&function.name);
        self.out.push('(');
        for (i, parameter) in function.parameters.iter().enumerate() {
            if i > 0 {
                self.out.push_str(", ");
            }
            self.out.push('$');
            self.out.push_str(&parameter.name);
        }
        self.out.push(')');
    }

    /// Delete any pre-existing file at `path`, then write the buffer.
    ///
    /// The delete-then-recreate step guarantees the output reflects exactly
    /// this build, and remedies partially-written leftovers from an earlier
    /// failed one.
    pub fn commit(self, path: &Path) -> Result<()> {
        if path.exists() {
            fs::remove_file(path)?;
        }
        fs::write(path, self.out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_core::{BoundBlock, BoundExpr, BoundLiteral, BoundStmt, ParameterSymbol, Span};

    fn function(name: &str, parameters: &[&str]) -> FunctionSymbol {
        FunctionSymbol::new(
            name,
            parameters.iter().copied().map(ParameterSymbol::new).collect(),
            "/src/app.lc",
            Span::new(1, 1),
        )
    }

    #[test]
    fn header_includes_runtime_then_siblings_except_self() {
        let mut file = PhpFile::new("0001_two.php");
        file.write_header(["0000_one.php", "0001_two.php", "0002_three.php"]);

        assert_eq!(
            file.output(),
            "<?php\n\
             include_once \"./syscall.php\";\n\
             include_once \"./0000_one.php\";\n\
             include_once \"./0002_three.php\";\n"
        );
    }

    #[test]
    fn function_declaration_shape() {
        let symbol = function("greet", &["who", "times"]);
        let program = BoundProgram::new().with_function(
            symbol.clone(),
            BoundBlock::new(vec![BoundStmt::Return(None)]),
        );

        let mut file = PhpFile::new("0000_app.php");
        file.write_function(&symbol, &program, false).unwrap();

        assert_eq!(
            file.output(),
            "function greet($who, $times)\n{\n    return;\n}\n"
        );
    }

    #[test]
    fn entry_function_is_immediately_invoked() {
        let symbol = function("main", &[]);
        let program = BoundProgram::new().with_function(
            symbol.clone(),
            BoundBlock::new(vec![BoundStmt::Expression(BoundExpr::Call {
                function: "println".to_string(),
                arguments: vec![BoundExpr::Literal(BoundLiteral::int(1))],
            })]),
        );

        let mut file = PhpFile::new("0000_app.php");
        file.write_function(&symbol, &program, true).unwrap();

        assert_eq!(
            file.output(),
            "(function main()\n{\n    println(1);\n})();\n"
        );
    }

    #[test]
    fn missing_body_is_fatal() {
        let symbol = function("ghost", &[]);
        let program = BoundProgram::new();

        let mut file = PhpFile::new("0000_app.php");
        let err = file.write_function(&symbol, &program, false).unwrap_err();
        assert_eq!(
            err,
            CodegenError::MissingBody {
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn commit_replaces_existing_file() {
        use tempdir::TempDir;

        let dir = TempDir::new("file").unwrap();
        let path = dir.path().join("0000_app.php");
        fs::write(&path, "stale contents").unwrap();

        let mut file = PhpFile::new("0000_app.php");
        file.write_header([]);
        file.commit(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "<?php\ninclude_once \"./syscall.php\";\n");
    }
}
