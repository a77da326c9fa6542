//! Expression type inference.

use larch_ast::nodes::{Expression, OperatorKind};

use crate::context::CheckContext;
use crate::declaration::check_declaration;
use crate::error::CompileError;
use crate::pattern::{declarations_from_pattern, infer_argument};
use crate::typed::TypedExpression;
use crate::types::{Type, type_constraints, type_eq};

/// Infers the type of one expression, producing its typed counterpart.
///
/// ## Errors
///
/// Returns the first [`CompileError`] encountered; inference of the
/// enclosing declaration short-circuits.
pub fn infer_expression(
    context: &mut CheckContext,
    expression: &Expression,
) -> Result<TypedExpression, CompileError> {
    let span = Some(expression.span());

    match expression {
        Expression::Number(value, _) => Ok(TypedExpression::Number(*value)),
        Expression::Float(value, _) => Ok(TypedExpression::Float(*value)),
        Expression::String(contents, _) => Ok(TypedExpression::String(contents.clone())),
        Expression::Parenthesized(inner, _) => infer_expression(context, inner),

        Expression::Identifier(name, _) => match context.lookup_declaration(name) {
            Some(declaration) => {
                Ok(TypedExpression::Identifier(declaration.ty.clone(), name.clone()))
            }
            None => Err(CompileError::UnknownIdentifier { name: name.clone(), span }),
        },

        Expression::Infix { op, left, right, .. } => {
            let left = infer_expression(context, left)?;
            let right = infer_expression(context, right)?;

            let valid = match op {
                OperatorKind::StringAdd => left.ty() == Type::Str && right.ty() == Type::Str,
                _ => {
                    (left.ty() == Type::Num && right.ty() == Type::Num)
                        || (left.ty() == Type::Float && right.ty() == Type::Float)
                }
            };

            if valid {
                Ok(TypedExpression::Infix {
                    op: *op,
                    left: Box::new(left),
                    right: Box::new(right),
                })
            } else {
                Err(CompileError::InvalidInfix {
                    op: *op,
                    left: left.ty(),
                    right: right.ty(),
                    span,
                })
            }
        }

        Expression::Apply { function, argument, .. } => {
            let function = infer_expression(context, function)?;
            let argument = infer_expression(context, argument)?;

            match function.ty() {
                Type::Lambda(param, result) => {
                    match type_constraints(&param, &argument.ty()) {
                        Some(constraints) => Ok(TypedExpression::Apply {
                            ty: result.substitute(&constraints),
                            function: Box::new(function),
                            argument: Box::new(argument),
                        }),
                        None => Err(CompileError::ArgumentMismatch {
                            expected: *param,
                            found: argument.ty(),
                            span,
                        }),
                    }
                }
                other => Err(CompileError::NotAFunction {
                    function: other,
                    argument: argument.ty(),
                    span,
                }),
            }
        }

        Expression::Case { scrutinee, branches, .. } => {
            let scrutinee = infer_expression(context, scrutinee)?;
            let scrutinee_type = scrutinee.ty();

            let mut typed_branches = Vec::with_capacity(branches.len());
            for branch in branches {
                let pattern = infer_argument(context, &scrutinee_type, &branch.pattern)?;

                let mark = context.scope_mark();
                for binding in declarations_from_pattern(&pattern) {
                    context.declare(binding);
                }
                let body = infer_expression(context, &branch.body);
                context.truncate_scope(mark);

                typed_branches.push((pattern, body?));
            }

            let types: Vec<Type> =
                typed_branches.iter().map(|(_, body)| body.ty()).collect();
            if !all_branches_have_same_type(&types) {
                return Err(CompileError::BranchTypeMismatch { types, span });
            }

            // The parser guarantees at least one branch
            let ty = types.first().cloned().unwrap_or(Type::Num);
            Ok(TypedExpression::Case {
                ty,
                scrutinee: Box::new(scrutinee),
                branches: typed_branches,
            })
        }

        Expression::Let { bindings, body, .. } => {
            let mark = context.scope_mark();

            let mut typed_bindings = Vec::with_capacity(bindings.len());
            for binding in bindings {
                match check_declaration(context, binding) {
                    Ok(declaration) => {
                        context.declare(declaration.clone());
                        typed_bindings.push(declaration);
                    }
                    Err(error) => {
                        context.truncate_scope(mark);
                        return Err(error);
                    }
                }
            }

            let body = infer_expression(context, body);
            context.truncate_scope(mark);

            Ok(TypedExpression::Let { bindings: typed_bindings, body: Box::new(body?) })
        }
    }
}

/// Branch agreement is the pairwise OR of both solver directions, over every
/// ordered pair of branch types. The check is not transitive across the
/// whole set.
fn all_branches_have_same_type(types: &[Type]) -> bool {
    types
        .iter()
        .all(|a| types.iter().all(|b| type_eq(a, b) || type_eq(b, a)))
}
