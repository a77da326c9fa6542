//! Function declaration checking.

use larch_ast::nodes::{AnnotationType, Declaration};
use larch_source::Span;

use crate::context::CheckContext;
use crate::error::CompileError;
use crate::expression::infer_expression;
use crate::pattern::{declarations_from_pattern, infer_argument};
use crate::typed::{TypedDeclaration, TypedExpression};
use crate::types::{Type, type_eq};

/// Checks one function declaration against its annotation.
///
/// The first `len(args)` annotation types type the argument patterns; the
/// rest, right-folded into a function type, are the expected return type. A
/// provisional declaration and the pattern bindings are brought into scope
/// before the body is inferred, so recursive references and bound pattern
/// variables resolve.
///
/// ## Errors
///
/// Returns the first [`CompileError`] encountered; a failed declaration
/// contributes nothing to the scope.
pub fn check_declaration(
    context: &mut CheckContext,
    declaration: &Declaration,
) -> Result<TypedDeclaration, CompileError> {
    let span = Some(declaration.span);

    let Some(annotation) = &declaration.annotation else {
        return Err(CompileError::MissingAnnotation { span });
    };

    let mut annotation_types = Vec::with_capacity(annotation.types.len());
    for annotation_type in &annotation.types {
        annotation_types.push(resolve_annotation_type(
            context,
            annotation_type,
            annotation.span,
        )?);
    }

    if annotation_types.len() <= declaration.args.len() {
        return Err(CompileError::AnnotationArity {
            name: declaration.name.clone(),
            types: annotation_types.len(),
            args: declaration.args.len(),
            span,
        });
    }

    let (argument_types, return_types) = annotation_types.split_at(declaration.args.len());

    let mut typed_args = Vec::with_capacity(declaration.args.len());
    for (expected, argument) in argument_types.iter().zip(&declaration.args) {
        typed_args.push(infer_argument(context, expected, argument)?);
    }

    let expected_return = fold_lambda(return_types);
    let full_type = fold_lambda(&annotation_types);

    // Provisional declaration so recursive references resolve during body
    // inference; the pattern bindings follow it into scope
    let provisional = TypedDeclaration::new(
        declaration.name.clone(),
        full_type.clone(),
        typed_args.clone(),
        TypedExpression::Number(0),
    );

    let mark = context.scope_mark();
    context.declare(provisional);
    for typed_arg in &typed_args {
        for binding in declarations_from_pattern(typed_arg) {
            context.declare(binding);
        }
    }

    let body = infer_expression(context, &declaration.body);
    context.truncate_scope(mark);
    let body = body?;

    let found = body.ty();
    if !type_eq(&expected_return, &found) {
        return Err(CompileError::ReturnTypeMismatch {
            name: declaration.name.clone(),
            expected: expected_return,
            found,
            span,
        });
    }

    Ok(TypedDeclaration::new(declaration.name.clone(), full_type, typed_args, body))
}

/// Resolves one annotation segment into a type.
///
/// ## Errors
///
/// Returns a [`CompileError`] for an unknown type name or an application
/// whose head is not a declared type lambda.
pub fn resolve_annotation_type(
    context: &CheckContext,
    annotation_type: &AnnotationType,
    span: Span,
) -> Result<Type, CompileError> {
    match annotation_type {
        AnnotationType::Concrete(name) => {
            if name.is_generic_name() {
                Ok(Type::Generic(name.clone()))
            } else if let Some(ty) = context.lookup_type(name) {
                Ok(ty.clone())
            } else {
                Err(CompileError::UnknownType { name: name.clone(), span: Some(span) })
            }
        }
        AnnotationType::Parenthesized(segments) => {
            let mut resolved = Vec::with_capacity(segments.len());
            for segment in segments {
                resolved.push(resolve_annotation_type(context, segment, span)?);
            }
            Ok(fold_lambda(&resolved))
        }
        AnnotationType::Application(head, argument) => {
            let head = resolve_annotation_type(context, head, span)?;
            if matches!(head, Type::TypeLambda(_) | Type::Applied(_, _)) {
                let argument = resolve_annotation_type(context, argument, span)?;
                Ok(Type::applied(head, argument))
            } else {
                Err(CompileError::MalformedTypeApplication { span: Some(span) })
            }
        }
    }
}

/// Right-folds a non-empty type list into a function type; the last element
/// is the result.
fn fold_lambda(types: &[Type]) -> Type {
    let Some((last, init)) = types.split_last() else {
        // Callers guarantee a non-empty list
        return Type::Num;
    };
    init.iter().rev().fold(last.clone(), |acc, ty| Type::lambda(ty.clone(), acc))
}
