//! Surface-syntax pretty-printer.
//!
//! Prints an AST back to Larch source text. The output follows the layout
//! rules the parser expects (top-levels at column one, `case` branches and
//! `let` bindings aligned, continuations indented), so printing and
//! reparsing yields a structurally identical module.

use crate::nodes::{
    Annotation,
    AnnotationType,
    Argument,
    ConstructorType,
    DataType,
    Declaration,
    Expression,
    Module,
    TopLevel,
};

/// Prints a whole module.
#[must_use]
pub fn print_module(module: &Module) -> String {
    let items: Vec<String> = module.items.iter().map(print_top_level).collect();
    let mut out = items.join("\n\n");
    out.push('\n');
    out
}

/// Prints a single top-level item.
#[must_use]
pub fn print_top_level(item: &TopLevel) -> String {
    match item {
        TopLevel::DataType(data_type) => print_data_type(data_type),
        TopLevel::Function(declaration) => print_declaration(declaration, 0),
    }
}

/// Prints an expression at column zero.
#[must_use]
pub fn print_expression(expression: &Expression) -> String { expr_to_string(expression, 0) }

fn print_data_type(data_type: &DataType) -> String {
    let mut out = format!("data {}", data_type.name);

    for generic in &data_type.generics {
        out.push(' ');
        out.push_str(generic.as_str());
    }

    out.push_str(" = ");

    let constructors: Vec<String> = data_type
        .constructors
        .iter()
        .map(|constructor| {
            let mut text = constructor.name.to_string();
            if let Some(payload) = &constructor.payload {
                text.push(' ');
                text.push_str(&constructor_type_to_string(payload));
            }
            text
        })
        .collect();

    out.push_str(&constructors.join(" | "));
    out
}

fn constructor_type_to_string(constructor_type: &ConstructorType) -> String {
    match constructor_type {
        ConstructorType::Concrete(name) => name.to_string(),
        ConstructorType::Applied(left, right) => format!(
            "{} {}",
            constructor_type_to_string(left),
            constructor_type_to_string(right)
        ),
        ConstructorType::Parenthesized(inner) => {
            format!("({})", constructor_type_to_string(inner))
        }
    }
}

fn print_declaration(declaration: &Declaration, indent: usize) -> String {
    let pad = " ".repeat(indent);
    let mut out = String::new();

    if let Some(annotation) = &declaration.annotation {
        out.push_str(&pad);
        out.push_str(&annotation_to_string(annotation));
        out.push('\n');
    }

    out.push_str(&pad);
    out.push_str(declaration.name.as_str());

    for arg in &declaration.args {
        out.push(' ');
        out.push_str(&argument_to_string(arg));
    }

    out.push_str(" =");

    if starts_block(&declaration.body) {
        out.push('\n');
        out.push_str(&" ".repeat(indent + 2));
        out.push_str(&expr_to_string(&declaration.body, indent + 2));
    } else {
        out.push(' ');
        out.push_str(&expr_to_string(&declaration.body, indent));
    }

    out
}

fn annotation_to_string(annotation: &Annotation) -> String {
    let segments: Vec<String> =
        annotation.types.iter().map(annotation_type_to_string).collect();
    format!("{} :: {}", annotation.name, segments.join(" -> "))
}

fn annotation_type_to_string(annotation_type: &AnnotationType) -> String {
    match annotation_type {
        AnnotationType::Concrete(name) => name.to_string(),
        AnnotationType::Parenthesized(segments) => {
            let inner: Vec<String> = segments.iter().map(annotation_type_to_string).collect();
            format!("({})", inner.join(" -> "))
        }
        AnnotationType::Application(left, right) => format!(
            "{} {}",
            annotation_type_to_string(left),
            annotation_type_to_string(right)
        ),
    }
}

fn argument_to_string(argument: &Argument) -> String {
    match argument {
        Argument::Identifier(name, _) => name.to_string(),
        Argument::NumberLiteral(value, _) => value.to_string(),
        Argument::Deconstruction { constructor, args, .. } => {
            let mut out = format!("({constructor}");
            for arg in args {
                out.push(' ');
                out.push_str(&argument_to_string(arg));
            }
            out.push(')');
            out
        }
    }
}

/// Renders a case-branch pattern, which unlike a function argument is not
/// parenthesized when it deconstructs a constructor.
fn branch_pattern_to_string(pattern: &Argument) -> String {
    match pattern {
        Argument::Deconstruction { constructor, args, .. } => {
            let mut out = constructor.to_string();
            for arg in args {
                out.push(' ');
                out.push_str(&argument_to_string(arg));
            }
            out
        }
        _ => argument_to_string(pattern),
    }
}

/// Returns true for expressions that print as an indented block.
const fn starts_block(expression: &Expression) -> bool {
    matches!(expression, Expression::Case { .. } | Expression::Let { .. })
}

fn expr_to_string(expression: &Expression, indent: usize) -> String {
    match expression {
        Expression::Identifier(name, _) => name.to_string(),
        Expression::Number(value, _) => value.to_string(),
        // Debug formatting keeps the trailing `.0` on round floats, so the
        // literal reparses as a float
        Expression::Float(value, _) => format!("{value:?}"),
        Expression::String(contents, _) => format!("\"{contents}\""),
        Expression::Infix { op, left, right, .. } => format!(
            "{} {op} {}",
            expr_to_string(left, indent),
            expr_to_string(right, indent)
        ),
        Expression::Apply { function, argument, .. } => format!(
            "{} {}",
            expr_to_string(function, indent),
            expr_to_string(argument, indent)
        ),
        Expression::Parenthesized(inner, _) => {
            format!("({})", expr_to_string(inner, indent))
        }
        Expression::Case { scrutinee, branches, .. } => {
            let pad = " ".repeat(indent + 2);
            let mut out = format!("case {} of", expr_to_string(scrutinee, indent));

            for branch in branches {
                out.push('\n');
                out.push_str(&pad);
                out.push_str(&branch_pattern_to_string(&branch.pattern));
                out.push_str(" ->");

                if starts_block(&branch.body) {
                    out.push('\n');
                    out.push_str(&" ".repeat(indent + 4));
                    out.push_str(&expr_to_string(&branch.body, indent + 4));
                } else {
                    out.push(' ');
                    out.push_str(&expr_to_string(&branch.body, indent + 2));
                }
            }

            out
        }
        Expression::Let { bindings, body, .. } => {
            let pad = " ".repeat(indent);
            let mut out = String::from("let");

            for binding in bindings {
                out.push('\n');
                out.push_str(&print_declaration(binding, indent + 2));
            }

            out.push('\n');
            out.push_str(&pad);
            out.push_str("in");

            if starts_block(body) {
                out.push('\n');
                out.push_str(&" ".repeat(indent + 2));
                out.push_str(&expr_to_string(body, indent + 2));
            } else {
                out.push(' ');
                out.push_str(&expr_to_string(body, indent));
            }

            out
        }
    }
}

#[cfg(test)]
mod tests {
    use larch_source::Span;

    use super::*;
    use crate::ident::Ident;
    use crate::nodes::{CaseBranch, Constructor, OperatorKind};

    fn span() -> Span { Span::default() }

    #[test]
    fn prints_identity_function() {
        let declaration = Declaration::new(
            Some(Annotation::new(
                Ident::new("id"),
                vec![
                    AnnotationType::Concrete(Ident::new("a")),
                    AnnotationType::Concrete(Ident::new("a")),
                ],
                span(),
            )),
            Ident::new("id"),
            vec![Argument::Identifier(Ident::new("x"), span())],
            Expression::Identifier(Ident::new("x"), span()),
            span(),
        );

        let printed = print_declaration(&declaration, 0);
        assert_eq!(printed, "id :: a -> a\nid x = x");
    }

    #[test]
    fn prints_data_type_with_payloads() {
        let data_type = DataType::new(
            Ident::new("Result"),
            vec![Ident::new("error"), Ident::new("value")],
            vec![
                Constructor::new(
                    Ident::new("Err"),
                    Some(ConstructorType::Concrete(Ident::new("error"))),
                    span(),
                ),
                Constructor::new(
                    Ident::new("Ok"),
                    Some(ConstructorType::Concrete(Ident::new("value"))),
                    span(),
                ),
            ],
            span(),
        );

        assert_eq!(
            print_data_type(&data_type),
            "data Result error value = Err error | Ok value"
        );
    }

    #[test]
    fn case_branches_are_aligned() {
        let body = Expression::Case {
            scrutinee: Box::new(Expression::Identifier(Ident::new("n"), span())),
            branches: vec![
                CaseBranch::new(
                    Argument::NumberLiteral(0, span()),
                    Expression::Number(1, span()),
                ),
                CaseBranch::new(
                    Argument::Identifier(Ident::new("m"), span()),
                    Expression::Identifier(Ident::new("m"), span()),
                ),
            ],
            span: span(),
        };
        let declaration = Declaration::new(
            None,
            Ident::new("f"),
            vec![Argument::Identifier(Ident::new("n"), span())],
            body,
            span(),
        );

        let printed = print_declaration(&declaration, 0);
        assert_eq!(printed, "f n =\n  case n of\n    0 -> 1\n    m -> m");
    }

    #[test]
    fn infix_is_flat() {
        let expression = Expression::Infix {
            op: OperatorKind::Add,
            left: Box::new(Expression::Number(1, span())),
            right: Box::new(Expression::Infix {
                op: OperatorKind::Multiply,
                left: Box::new(Expression::Number(2, span())),
                right: Box::new(Expression::Number(3, span())),
                span: span(),
            }),
            span: span(),
        };

        assert_eq!(print_expression(&expression), "1 + 2 * 3");
    }

    #[test]
    fn round_floats_keep_their_dot() {
        let expression = Expression::Float(2.0, span());

        assert_eq!(print_expression(&expression), "2.0");
    }
}
