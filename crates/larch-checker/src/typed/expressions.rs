//! Typed expressions.

use larch_ast::Ident;
use larch_ast::nodes::OperatorKind;

use super::{TypedArgument, TypedDeclaration};
use crate::types::Type;

/// A typed expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedExpression {
    /// A reference to a declaration in scope, with that declaration's type
    Identifier(Type, Ident),
    /// An integer literal
    Number(i64),
    /// A floating-point literal
    Float(f64),
    /// A string literal
    String(String),
    /// An infix operation over two same-typed operands
    Infix {
        /// The operator
        op: OperatorKind,
        /// The left operand
        left: Box<TypedExpression>,
        /// The right operand
        right: Box<TypedExpression>,
    },
    /// A function application, carrying its result type after constraint
    /// substitution
    Apply {
        /// The result type
        ty: Type,
        /// The function expression
        function: Box<TypedExpression>,
        /// The argument expression
        argument: Box<TypedExpression>,
    },
    /// A `case` expression, carrying the common branch type
    Case {
        /// The common branch type
        ty: Type,
        /// The scrutinee
        scrutinee: Box<TypedExpression>,
        /// The typed branches: pattern and result expression
        branches: Vec<(TypedArgument, TypedExpression)>,
    },
    /// A `let` expression
    Let {
        /// The checked bindings, in order
        bindings: Vec<TypedDeclaration>,
        /// The body expression
        body: Box<TypedExpression>,
    },
    /// A data-constructor body: the constructor's tag applied to its
    /// argument patterns. Appears only in synthesized constructor
    /// declarations.
    ADTConstruction {
        /// The constructor's 0-based tag
        tag: usize,
        /// The constructor's argument patterns
        args: Vec<TypedArgument>,
    },
}

impl TypedExpression {
    /// Returns the type of this expression.
    #[must_use]
    pub fn ty(&self) -> Type {
        match self {
            Self::Identifier(ty, _) => ty.clone(),
            Self::Number(_) => Type::Num,
            Self::Float(_) => Type::Float,
            Self::String(_) => Type::Str,
            Self::Infix { op, left, .. } => match op {
                OperatorKind::StringAdd => Type::Str,
                // Both operands were checked to the same numeric type
                _ => left.ty(),
            },
            Self::Apply { ty, .. } | Self::Case { ty, .. } => ty.clone(),
            Self::Let { body, .. } => body.ty(),
            // Placeholder; the node occurs only inside synthesized
            // constructor declarations, whose outer type comes from the
            // declaration itself
            Self::ADTConstruction { .. } => Type::lambda(Type::Num, Type::Num),
        }
    }
}
