//! Data-type (ADT) checking.
//!
//! Registers a data type's head as a type lambda, resolves every
//! constructor's payload into field types, and synthesizes a typed
//! declaration plus a constructor registry entry for each constructor.

use larch_ast::Ident;
use larch_ast::nodes::{ConstructorType, DataType};
use larch_source::Span;

use crate::context::CheckContext;
use crate::error::CompileError;
use crate::typed::{TypedArgument, TypedConstructor, TypedDeclaration, TypedExpression};
use crate::types::Type;

/// Checks one `data` declaration.
///
/// The head type lambda is registered before the constructors are resolved,
/// so recursive fields (fields naming the type being declared) resolve. A
/// broken field aborts the whole data type: its errors are recorded and no
/// constructor is registered, but the head stays registered.
///
/// Returns the synthesized constructor declarations (empty when the data
/// type failed).
pub fn check_data_type(
    context: &mut CheckContext,
    data_type: &DataType,
) -> Vec<TypedDeclaration> {
    let head = Type::TypeLambda(data_type.name.clone());
    context.register_type_lambda(data_type.name.clone(), head.clone());

    // One `Applied` per generic parameter, left-folded over the head
    let return_type = data_type
        .generics
        .iter()
        .fold(head, |acc, generic| Type::applied(acc, Type::Generic(generic.clone())));

    let mut declarations = Vec::new();
    let mut constructors = Vec::new();
    let mut errors = Vec::new();

    for (tag, constructor) in data_type.constructors.iter().enumerate() {
        let fields = match &constructor.payload {
            None => Vec::new(),
            Some(payload) => {
                match resolve_constructor_type(
                    context,
                    data_type,
                    &return_type,
                    payload,
                    constructor.span,
                ) {
                    Ok(fields) => fields,
                    Err(error) => {
                        errors.push(error);
                        continue;
                    }
                }
            }
        };

        let constructor_type = fields
            .iter()
            .rev()
            .fold(return_type.clone(), |acc, field| Type::lambda(field.clone(), acc));

        let args: Vec<TypedArgument> = fields
            .iter()
            .enumerate()
            .map(|(index, field)| TypedArgument::Identifier(field.clone(), field_name(index)))
            .collect();

        declarations.push(TypedDeclaration::new(
            constructor.name.clone(),
            constructor_type,
            args.clone(),
            TypedExpression::ADTConstruction { tag, args },
        ));
        constructors.push(TypedConstructor::new(constructor.name.clone(), tag, fields));
    }

    if errors.is_empty() {
        context.register_constructors(data_type.name.clone(), constructors);
        for declaration in &declarations {
            context.declare(declaration.clone());
        }
        declarations
    } else {
        for error in errors {
            context.push_error(error);
        }
        Vec::new()
    }
}

/// Single-character argument names `a`, `b`, `c`, … for synthesized
/// constructor declarations.
fn field_name(index: usize) -> Ident {
    let letter = char::from(b'a' + u8::try_from(index % 26).unwrap_or(0));
    Ident::new(letter.to_string())
}

/// Resolves a constructor payload into the ordered list of field types.
fn resolve_constructor_type(
    context: &CheckContext,
    data_type: &DataType,
    return_type: &Type,
    payload: &ConstructorType,
    span: Span,
) -> Result<Vec<Type>, CompileError> {
    match payload {
        ConstructorType::Concrete(name) => {
            Ok(vec![resolve_field_name(context, data_type, return_type, name, span)?])
        }
        ConstructorType::Parenthesized(inner) => {
            if let ConstructorType::Applied(head, argument) = inner.as_ref() {
                if let (ConstructorType::Concrete(head), ConstructorType::Concrete(argument)) =
                    (head.as_ref(), argument.as_ref())
                {
                    // A parenthesized application like `(Maybe a)` is a
                    // single applied-type field
                    return Ok(vec![Type::applied(
                        Type::TypeLambda(head.clone()),
                        Type::Generic(argument.clone()),
                    )]);
                }
            }
            resolve_constructor_type(context, data_type, return_type, inner, span)
        }
        ConstructorType::Applied(left, right) => {
            let mut fields =
                resolve_constructor_type(context, data_type, return_type, left, span)?;
            fields.extend(resolve_constructor_type(
                context,
                data_type,
                return_type,
                right,
                span,
            )?);
            Ok(fields)
        }
    }
}

/// Resolves a single field name.
fn resolve_field_name(
    context: &CheckContext,
    data_type: &DataType,
    return_type: &Type,
    name: &Ident,
    span: Span,
) -> Result<Type, CompileError> {
    match name.as_str() {
        "Int" => Ok(Type::Num),
        "Float" => Ok(Type::Float),
        "String" => Ok(Type::Str),
        // A field naming the type being declared is the applied return type
        _ if *name == data_type.name => Ok(return_type.clone()),
        _ => {
            if let Some(ty) = context.lookup_type(name) {
                Ok(ty.clone())
            } else if name.is_generic_name() {
                Ok(Type::Generic(name.clone()))
            } else {
                Err(CompileError::UnknownType { name: name.clone(), span: Some(span) })
            }
        }
    }
}
