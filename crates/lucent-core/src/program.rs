//! The bound program: the lowered intermediate representation the backends
//! consume.
//!
//! Bodies contain no structured control flow. The upstream lowering pass has
//! already rewritten `if`/`while`/`for` into labels and (conditional) jumps,
//! so a body is a flat block over the statement set below. The backend reads
//! this tree; it never mutates or validates it. Well-formedness (labels
//! declared exactly once per body, unique function names, at most one entry
//! designation) is the upstream contract.

use rustc_hash::FxHashMap;

use crate::ops::{BinaryOp, UnaryOp};
use crate::symbols::{FunctionSymbol, Label, TypeSymbol};

/// A literal constant payload.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// Boolean constant.
    Bool(bool),
    /// Integer constant.
    Int(i64),
    /// String constant.
    String(String),
}

/// A bound literal: payload plus the semantic type tag the binder assigned.
///
/// The tag drives rendering. A tag with no rendering rule, or one that
/// disagrees with its payload, aborts the build.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundLiteral {
    /// Semantic type of the literal.
    pub ty: TypeSymbol,
    /// Constant payload.
    pub value: LiteralValue,
}

impl BoundLiteral {
    /// A boolean literal.
    pub fn bool(value: bool) -> Self {
        Self {
            ty: TypeSymbol::Bool,
            value: LiteralValue::Bool(value),
        }
    }

    /// An integer literal.
    pub fn int(value: i64) -> Self {
        Self {
            ty: TypeSymbol::Int,
            value: LiteralValue::Int(value),
        }
    }

    /// A string literal.
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            ty: TypeSymbol::String,
            value: LiteralValue::String(value.into()),
        }
    }
}

/// A bound expression.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundExpr {
    /// Constant literal.
    Literal(BoundLiteral),
    /// Variable reference by name.
    Variable(String),
    /// Assignment to a variable.
    Assignment {
        /// Variable name.
        name: String,
        /// Assigned value.
        value: Box<BoundExpr>,
    },
    /// Binary operation.
    Binary {
        /// The operator.
        op: BinaryOp,
        /// Left operand.
        left: Box<BoundExpr>,
        /// Right operand.
        right: Box<BoundExpr>,
    },
    /// Unary operation.
    Unary {
        /// The operator.
        op: UnaryOp,
        /// The operand.
        operand: Box<BoundExpr>,
    },
    /// Function call.
    Call {
        /// Callee name.
        function: String,
        /// Ordered argument list.
        arguments: Vec<BoundExpr>,
    },
    /// Type conversion.
    Conversion {
        /// Target semantic type.
        ty: TypeSymbol,
        /// The converted expression.
        expr: Box<BoundExpr>,
    },
}

/// A lowered statement.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundStmt {
    /// Ordered sequence of statements.
    Block(BoundBlock),
    /// Declaration of a jump target.
    Label(Label),
    /// Unconditional jump.
    Goto(Label),
    /// Jump taken iff the condition equals the given truth value.
    ConditionalGoto {
        /// Jump target.
        label: Label,
        /// The boolean condition.
        condition: BoundExpr,
        /// `true` to jump when the condition holds, `false` to jump when it
        /// does not.
        jump_if_true: bool,
    },
    /// Return, with an optional value.
    Return(Option<BoundExpr>),
    /// Expression evaluated for effect; the value is discarded.
    Expression(BoundExpr),
    /// Variable declaration fused with its first assignment.
    VariableDeclaration {
        /// Variable name.
        name: String,
        /// Initializer expression.
        initializer: BoundExpr,
    },
}

/// An ordered sequence of lowered statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoundBlock {
    /// The statements, in execution order.
    pub statements: Vec<BoundStmt>,
}

impl BoundBlock {
    /// Create a block from statements.
    pub fn new(statements: Vec<BoundStmt>) -> Self {
        Self { statements }
    }
}

/// The root artifact of the upstream phases.
///
/// Holds every bound function, the mapping from function name to lowered
/// body, and the (at most one) entry designation. Function names are unique
/// program-wide, so the body map is keyed by name.
#[derive(Debug, Clone, Default)]
pub struct BoundProgram {
    /// All functions, in a stable enumeration order.
    pub functions: Vec<FunctionSymbol>,
    /// Lowered body per function name.
    pub bodies: FxHashMap<String, BoundBlock>,
    /// Name of the designated `main` function, if any.
    pub main_function: Option<String>,
    /// Name of the top-level script function, if any.
    pub script_function: Option<String>,
}

impl BoundProgram {
    /// Create an empty program.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a function and its body.
    pub fn with_function(mut self, function: FunctionSymbol, body: BoundBlock) -> Self {
        self.bodies.insert(function.name.clone(), body);
        self.functions.push(function);
        self
    }

    /// Designate the `main` function by name.
    pub fn with_main(mut self, name: impl Into<String>) -> Self {
        self.main_function = Some(name.into());
        self
    }

    /// Designate the top-level script function by name.
    pub fn with_script(mut self, name: impl Into<String>) -> Self {
        self.script_function = Some(name.into());
        self
    }

    /// Look up a function's lowered body.
    pub fn body_of(&self, name: &str) -> Option<&BoundBlock> {
        self.bodies.get(name)
    }

    /// Whether the program holds no functions at all.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Span;

    fn symbol(name: &str, source: &str) -> FunctionSymbol {
        FunctionSymbol::new(name, Vec::new(), source, Span::new(1, 1))
    }

    #[test]
    fn with_function_registers_body() {
        let program = BoundProgram::new().with_function(
            symbol("main", "/src/app.lc"),
            BoundBlock::new(vec![BoundStmt::Return(None)]),
        );

        assert_eq!(program.functions.len(), 1);
        let body = program.body_of("main").unwrap();
        assert_eq!(body.statements, vec![BoundStmt::Return(None)]);
    }

    #[test]
    fn body_of_unknown_function_is_none() {
        let program = BoundProgram::new();
        assert!(program.body_of("missing").is_none());
        assert!(program.is_empty());
    }

    #[test]
    fn literal_constructors_tag_their_payload() {
        assert_eq!(BoundLiteral::int(7).ty, TypeSymbol::Int);
        assert_eq!(BoundLiteral::bool(true).ty, TypeSymbol::Bool);
        assert_eq!(BoundLiteral::string("x").ty, TypeSymbol::String);
    }
}
