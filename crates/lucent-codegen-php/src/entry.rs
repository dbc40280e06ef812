//! Entry point resolution.
//!
//! A program designates at most one entry callable: either a `main`
//! function or a synthesized top-level script function. The entry callable
//! is wrapped for immediate invocation where it is defined, and the
//! bootstrap file includes the generated file that defines it.

use lucent_core::{BoundProgram, FunctionSymbol};

use crate::partition::{OutputFile, Partition};

/// Find the program's entry callable, if any.
///
/// When a program designates both a `main` function and a top-level script
/// function, `main` wins and the script designation is ignored.
pub fn entry_function(program: &BoundProgram) -> Option<&FunctionSymbol> {
    let name = program
        .main_function
        .as_deref()
        .or(program.script_function.as_deref())?;
    program.functions.iter().find(|f| f.name == name)
}

/// The output file that defines the entry callable.
pub fn entry_output<'a, 'p>(
    partition: &'a Partition<'p>,
    entry: &FunctionSymbol,
) -> Option<&'a OutputFile<'p>> {
    partition
        .files
        .iter()
        .find(|f| f.functions.iter().any(|g| g.name == entry.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucent_core::{BoundBlock, Span};
    use std::path::Path;

    fn function(name: &str, source: &str) -> FunctionSymbol {
        FunctionSymbol::new(name, Vec::new(), source, Span::new(1, 1))
    }

    #[test]
    fn no_designation_means_no_entry() {
        let program = BoundProgram::new()
            .with_function(function("helper", "/src/a.lc"), BoundBlock::default());
        assert!(entry_function(&program).is_none());
    }

    #[test]
    fn main_function_is_found() {
        let program = BoundProgram::new()
            .with_function(function("main", "/src/a.lc"), BoundBlock::default())
            .with_main("main");
        assert_eq!(entry_function(&program).unwrap().name, "main");
    }

    #[test]
    fn script_function_is_found_without_main() {
        let program = BoundProgram::new()
            .with_function(function("$script", "/src/a.lc"), BoundBlock::default())
            .with_script("$script");
        assert_eq!(entry_function(&program).unwrap().name, "$script");
    }

    #[test]
    fn main_takes_precedence_over_script() {
        let program = BoundProgram::new()
            .with_function(function("main", "/src/a.lc"), BoundBlock::default())
            .with_function(function("$script", "/src/b.lc"), BoundBlock::default())
            .with_main("main")
            .with_script("$script");
        assert_eq!(entry_function(&program).unwrap().name, "main");
    }

    #[test]
    fn entry_output_names_the_defining_file() {
        let program = BoundProgram::new()
            .with_function(function("helper", "/src/a.lc"), BoundBlock::default())
            .with_function(function("main", "/src/b.lc"), BoundBlock::default())
            .with_main("main");
        let partition = Partition::of(&program, Path::new("/out"));

        let entry = entry_function(&program).unwrap();
        let file = entry_output(&partition, entry).unwrap();
        assert_eq!(file.file_name(), "0001_b.php");
    }
}
