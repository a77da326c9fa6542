//! Argument-pattern inference.
//!
//! Patterns are always inferred against the type of the value they
//! deconstruct: the annotated argument type for function arguments, the
//! scrutinee type for case branches.

use larch_ast::Ident;
use larch_ast::nodes::Argument;

use crate::context::CheckContext;
use crate::error::CompileError;
use crate::typed::{TypedArgument, TypedDeclaration, TypedExpression};
use crate::types::Type;

/// Infers a pattern against the type of the matched value.
///
/// ## Errors
///
/// Returns a [`CompileError`] when a literal pattern is matched against a
/// non-`Int` value, when the value's type has no data-type head to
/// deconstruct, when the named constructor does not exist for it, or when
/// the sub-pattern count disagrees with the constructor's fields.
pub fn infer_argument(
    context: &CheckContext,
    expected: &Type,
    argument: &Argument,
) -> Result<TypedArgument, CompileError> {
    match argument {
        Argument::Identifier(name, _) => {
            Ok(TypedArgument::Identifier(expected.clone(), name.clone()))
        }
        Argument::NumberLiteral(value, span) => {
            if *expected == Type::Num {
                Ok(TypedArgument::NumberLiteral(*value))
            } else {
                Err(CompileError::PatternLiteralMismatch {
                    expected: expected.clone(),
                    span: Some(*span),
                })
            }
        }
        Argument::Deconstruction { constructor, args, span } => {
            let Some(head) = type_lambda_head(expected) else {
                return Err(CompileError::UndeconstructableType {
                    ty: expected.clone(),
                    span: Some(*span),
                });
            };

            let info = context
                .constructors_of(head)
                .and_then(|constructors| {
                    constructors.iter().find(|candidate| candidate.name == *constructor)
                });
            let Some(info) = info else {
                return Err(CompileError::UnknownConstructor {
                    name: constructor.clone(),
                    ty: expected.clone(),
                    span: Some(*span),
                });
            };

            if info.fields.len() != args.len() {
                return Err(CompileError::DeconstructionArity {
                    name: constructor.clone(),
                    expected: info.fields.len(),
                    found: args.len(),
                    span: Some(*span),
                });
            }

            let tag = info.tag;
            let fields = info.fields.clone();

            let mut typed_args = Vec::with_capacity(args.len());
            for (field, sub_pattern) in fields.iter().zip(args) {
                typed_args.push(infer_argument(context, field, sub_pattern)?);
            }

            Ok(TypedArgument::Deconstruction {
                constructor: constructor.clone(),
                tag,
                args: typed_args,
            })
        }
    }
}

/// Strips an `Applied` spine down to its head type lambda.
fn type_lambda_head(ty: &Type) -> Option<&Ident> {
    match ty {
        Type::TypeLambda(name) => Some(name),
        Type::Applied(head, _) => type_lambda_head(head),
        _ => None,
    }
}

/// The declarations a typed pattern introduces into the scope of the body
/// (or branch) it guards. Field types come from the typed sub-patterns
/// themselves.
#[must_use]
pub fn declarations_from_pattern(pattern: &TypedArgument) -> Vec<TypedDeclaration> {
    match pattern {
        TypedArgument::Identifier(ty, name) => vec![TypedDeclaration::new(
            name.clone(),
            ty.clone(),
            Vec::new(),
            TypedExpression::Identifier(ty.clone(), name.clone()),
        )],
        TypedArgument::NumberLiteral(_) => Vec::new(),
        TypedArgument::Deconstruction { args, .. } => {
            args.iter().flat_map(declarations_from_pattern).collect()
        }
    }
}
