//! WebAssembly text generation.

use larch_ast::Ident;
use larch_ast::nodes::OperatorKind;
use larch_checker::typed::{TypedArgument, TypedDeclaration, TypedExpression, TypedModule};
use larch_checker::types::Type;
use rustc_hash::FxHashMap;

use crate::error::EmitError;

/// Bindings substituted inline during emission: bound name to emitted text.
///
/// The language is pure, so substituting a binding's expression at every
/// use is semantics-preserving.
type Bindings = FxHashMap<Ident, String>;

/// Generates WebAssembly text for a typed module.
#[derive(Debug, Default)]
pub struct WatGenerator {
    output: String,
}

impl WatGenerator {
    /// Creates a new generator.
    #[must_use]
    pub fn new() -> Self { Self { output: String::new() } }

    /// Generates the module text.
    ///
    /// ## Errors
    ///
    /// Returns an [`EmitError`] for constructs outside the backend's value
    /// model.
    pub fn generate(mut self, module: &TypedModule) -> Result<String, EmitError> {
        self.output.push_str("(module\n");

        for declaration in &module.declarations {
            self.generate_declaration(declaration)?;
        }

        self.output.push_str(")\n");
        Ok(self.output)
    }

    /// Emits the export and function definition for one declaration.
    fn generate_declaration(
        &mut self,
        declaration: &TypedDeclaration,
    ) -> Result<(), EmitError> {
        let name = &declaration.name;
        self.output.push_str(&format!("  (export \"{name}\" (func ${name}))\n"));

        self.output.push_str(&format!("  (func ${name}"));
        for argument in &declaration.args {
            match argument {
                TypedArgument::Identifier(_, param) => {
                    self.output.push_str(&format!(" (param ${param} i32)"));
                }
                TypedArgument::NumberLiteral(_) | TypedArgument::Deconstruction { .. } => {
                    return Err(EmitError::unsupported(
                        "pattern-matching function parameters",
                    ));
                }
            }
        }
        self.output.push_str(" (result i32)\n");

        let body = emit_expression(&declaration.body, &Bindings::default())?;
        self.output.push_str(&format!("    {body}\n"));

        self.output.push_str("  )\n");
        Ok(())
    }
}

/// Emits one expression as a WebAssembly text s-expression.
fn emit_expression(
    expression: &TypedExpression,
    bindings: &Bindings,
) -> Result<String, EmitError> {
    match expression {
        TypedExpression::Number(value) => Ok(format!("(i32.const {value})")),
        TypedExpression::Float(value) => Ok(format!("(f32.const {value:?})")),
        TypedExpression::String(_) => Err(EmitError::unsupported("string literals")),

        TypedExpression::Identifier(_, name) => Ok(bindings
            .get(name)
            .cloned()
            .unwrap_or_else(|| format!("(get_local ${name})"))),

        TypedExpression::Infix { op, left, right, .. } => {
            let instruction = operator_instruction(*op, &left.ty())?;
            let left = emit_expression(left, bindings)?;
            let right = emit_expression(right, bindings)?;
            Ok(format!("({instruction} {left} {right})"))
        }

        TypedExpression::Apply { .. } => {
            let (callee, arguments) = flatten_application(expression);
            let TypedExpression::Identifier(_, name) = callee else {
                return Err(EmitError::unsupported("calls to computed functions"));
            };

            let mut call = format!("(call ${name}");
            for argument in arguments {
                call.push(' ');
                call.push_str(&emit_expression(argument, bindings)?);
            }
            call.push(')');
            Ok(call)
        }

        TypedExpression::Case { scrutinee, branches, .. } => {
            emit_case(scrutinee, branches, bindings)
        }

        TypedExpression::Let { bindings: declarations, body } => {
            let mut extended = bindings.clone();
            for binding in declarations {
                if !binding.args.is_empty() {
                    return Err(EmitError::unsupported("local function bindings"));
                }
                let value = emit_expression(&binding.body, &extended)?;
                extended.insert(binding.name.clone(), value);
            }
            emit_expression(body, &extended)
        }

        // Payload fields have no representation in the i32 value model;
        // a construction is its tag
        TypedExpression::ADTConstruction { tag, .. } => Ok(format!("(i32.const {tag})")),
    }
}

/// Lowers a `case` to a nested `select` chain. The final branch is the
/// default; the comparators of the earlier branches are generated in
/// reverse order from the pattern list.
fn emit_case(
    scrutinee: &TypedExpression,
    branches: &[(TypedArgument, TypedExpression)],
    bindings: &Bindings,
) -> Result<String, EmitError> {
    let scrutinee = emit_expression(scrutinee, bindings)?;

    let Some(((default_pattern, default_body), rest)) = branches.split_last() else {
        return Err(EmitError::unsupported("case expressions without branches"));
    };

    let mut chain = emit_branch_body(default_pattern, default_body, &scrutinee, bindings)?;

    for (pattern, body) in rest.iter().rev() {
        let comparator = match pattern {
            TypedArgument::NumberLiteral(value) => {
                format!("(i32.eq {scrutinee} (i32.const {value}))")
            }
            TypedArgument::Deconstruction { tag, args, .. } => {
                if !args.is_empty() {
                    return Err(EmitError::unsupported("constructor field bindings"));
                }
                format!("(i32.eq {scrutinee} (i32.const {tag}))")
            }
            TypedArgument::Identifier(_, _) => {
                return Err(EmitError::unsupported(
                    "binding patterns before the final case branch",
                ));
            }
        };

        let body = emit_branch_body(pattern, body, &scrutinee, bindings)?;
        chain = format!("(select {body} {chain} {comparator})");
    }

    Ok(chain)
}

/// Emits a branch body, substituting the scrutinee for a name bound by an
/// identifier pattern.
fn emit_branch_body(
    pattern: &TypedArgument,
    body: &TypedExpression,
    scrutinee: &str,
    bindings: &Bindings,
) -> Result<String, EmitError> {
    match pattern {
        TypedArgument::Identifier(_, name) => {
            let mut extended = bindings.clone();
            extended.insert(name.clone(), scrutinee.to_string());
            emit_expression(body, &extended)
        }
        TypedArgument::Deconstruction { args, .. } if !args.is_empty() => {
            Err(EmitError::unsupported("constructor field bindings"))
        }
        _ => emit_expression(body, bindings),
    }
}

/// Flattens an application spine into its callee and argument list.
fn flatten_application(expression: &TypedExpression) -> (&TypedExpression, Vec<&TypedExpression>) {
    let mut arguments = Vec::new();
    let mut current = expression;

    while let TypedExpression::Apply { function, argument, .. } = current {
        arguments.push(argument.as_ref());
        current = function;
    }

    arguments.reverse();
    (current, arguments)
}

/// Picks the instruction for an infix operator over the given operand type.
fn operator_instruction(op: OperatorKind, operand: &Type) -> Result<&'static str, EmitError> {
    let instruction = match (op, operand) {
        (OperatorKind::Add, Type::Float) => "f32.add",
        (OperatorKind::Subtract, Type::Float) => "f32.sub",
        (OperatorKind::Multiply, Type::Float) => "f32.mul",
        (OperatorKind::Divide, Type::Float) => "f32.div",
        (OperatorKind::Add, _) => "i32.add",
        (OperatorKind::Subtract, _) => "i32.sub",
        (OperatorKind::Multiply, _) => "i32.mul",
        (OperatorKind::Divide, _) => "i32.div_s",
        (OperatorKind::StringAdd, _) => {
            return Err(EmitError::unsupported("string concatenation"));
        }
    };
    Ok(instruction)
}
