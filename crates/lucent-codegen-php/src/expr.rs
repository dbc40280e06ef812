//! Expression rendering.
//!
//! Operand order and grouping are taken from the bound tree as-is: no
//! re-association, no synthesized parentheses. Any required grouping is
//! already implicit in the tree structure. Literal formatting dispatches on
//! the semantic type tag; a tag without a rendering rule aborts the build.

use lucent_core::{BoundExpr, BoundLiteral, CodegenError, LiteralValue, TypeSymbol};

use crate::file::PhpFile;

type Result<T> = std::result::Result<T, CodegenError>;

impl PhpFile {
    /// Render a single bound expression.
    pub(crate) fn write_expr(&mut self, expression: &BoundExpr) -> Result<()> {
        match expression {
            BoundExpr::Literal(literal) => self.write_literal(literal),

            BoundExpr::Variable(name) => {
                self.out.push('$');
                self.out.push_str(name);
                Ok(())
            }

            BoundExpr::Assignment { name, value } => {
                self.out.push('$');
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.write_expr(value)
            }

            BoundExpr::Binary { op, left, right } => {
                self.write_expr(left)?;
                self.out.push_str(op.text());
                self.write_expr(right)
            }

            BoundExpr::Unary { op, operand } => {
                self.out.push_str(op.text());
                self.write_expr(operand)
            }

            BoundExpr::Call {
                function,
                arguments,
            } => {
                self.out.push_str(function);
                self.out.push('(');
                for (i, argument) in arguments.iter().enumerate() {
                    if i > 0 {
                        self.out.push_str(", ");
                    }
                    self.write_expr(argument)?;
                }
                self.out.push(')');
                Ok(())
            }

            BoundExpr::Conversion { ty, expr } => {
                // C-style cast; every semantic type name is a valid PHP cast
                // keyword (types without one are rejected upstream).
                self.out.push('(');
                self.out.push_str(ty.name());
                self.out.push(')');
                self.write_expr(expr)
            }
        }
    }

    /// Render a literal according to its semantic type tag.
    fn write_literal(&mut self, literal: &BoundLiteral) -> Result<()> {
        match (literal.ty, &literal.value) {
            (TypeSymbol::Bool, LiteralValue::Bool(value)) => {
                self.out.push_str(if *value { "true" } else { "false" });
                Ok(())
            }

            (TypeSymbol::Int, LiteralValue::Int(value)) => {
                self.out.push_str(&value.to_string());
                Ok(())
            }

            (TypeSymbol::String, LiteralValue::String(value)) => {
                // Only embedded double quotes are escaped; everything else
                // passes through untouched.
                self.out.push('"');
                self.out.push_str(&value.replace('"', "\\\""));
                self.out.push('"');
                Ok(())
            }

            (ty, _) => Err(CodegenError::UnsupportedLiteral { ty }),
        }
    }
}
