//! Statement rendering.
//!
//! Bodies arrive from the lowering pass as flat blocks of labels and jumps;
//! rendering reconstructs runnable control flow with PHP's `goto` rather
//! than reintroducing structured constructs. Dispatch is an exhaustive
//! match over the closed statement set; a kind without a handler fails to
//! compile instead of surfacing at runtime.

use lucent_core::{BoundBlock, BoundStmt, CodegenError};

use crate::file::{INDENT, PhpFile};

type Result<T> = std::result::Result<T, CodegenError>;

impl PhpFile {
    /// Render a block, each child prefixed by one indentation unit.
    pub(crate) fn write_block(&mut self, block: &BoundBlock) -> Result<()> {
        for statement in &block.statements {
            self.out.push_str(INDENT);
            self.write_stmt(statement)?;
        }
        Ok(())
    }

    /// Render a single lowered statement.
    pub(crate) fn write_stmt(&mut self, statement: &BoundStmt) -> Result<()> {
        match statement {
            BoundStmt::Block(block) => self.write_block(block),

            BoundStmt::Label(label) => {
                self.out.push('\n');
                self.out.push_str(&label.name);
                self.out.push_str(":\n");
                Ok(())
            }

            BoundStmt::Goto(label) => {
                self.out.push_str("goto ");
                self.out.push_str(&label.name);
                self.out.push_str(";\n");
                Ok(())
            }

            BoundStmt::ConditionalGoto {
                label,
                condition,
                jump_if_true,
            } => {
                // Explicit equality against the jump sense: PHP truthiness
                // on non-boolean values differs from the source language's.
                self.out.push_str("if ((");
                self.write_expr(condition)?;
                self.out
                    .push_str(if *jump_if_true { ")==true) " } else { ")==false) " });
                self.out.push_str("goto ");
                self.out.push_str(&label.name);
                self.out.push_str(";\n");
                Ok(())
            }

            BoundStmt::Return(value) => {
                self.out.push_str("return");
                if let Some(expression) = value {
                    self.out.push(' ');
                    self.write_expr(expression)?;
                }
                self.out.push_str(";\n");
                Ok(())
            }

            BoundStmt::Expression(expression) => {
                self.write_expr(expression)?;
                self.out.push_str(";\n");
                Ok(())
            }

            BoundStmt::VariableDeclaration { name, initializer } => {
                // Declaration fused with first assignment; PHP has no
                // separate declaration syntax.
                self.out.push('$');
                self.out.push_str(name);
                self.out.push_str(" = ");
                self.write_expr(initializer)?;
                self.out.push_str(";\n");
                Ok(())
            }
        }
    }
}
