//! The compile state threaded across top-level declarations.

use larch_ast::Ident;
use rustc_hash::FxHashMap;

use crate::error::CompileError;
use crate::typed::{TypedConstructor, TypedDeclaration};
use crate::types::Type;

/// The compile state, built up left-to-right over the module's top-levels.
///
/// The state grows monotonically at the module level: errors and
/// declarations append and are never removed. Locals introduced while
/// checking one declaration are scoped with [`CheckContext::scope_mark`] /
/// [`CheckContext::truncate_scope`] so they do not leak into the next.
#[derive(Debug)]
pub struct CheckContext {
    /// Errors accumulated across top-levels
    errors: Vec<CompileError>,
    /// Declared type lambdas, in order of appearance (kept ordered for
    /// deterministic diagnostics)
    type_lambdas: Vec<Ident>,
    /// Type name resolution, seeded with the primitives
    type_map: FxHashMap<Ident, Type>,
    /// Value-level scope: module declarations plus any active locals
    scope: Vec<TypedDeclaration>,
    /// Constructors of each declared type lambda, in declaration order
    constructors: FxHashMap<Ident, Vec<TypedConstructor>>,
}

impl CheckContext {
    /// Creates the initial compile state with the primitive types
    /// registered.
    #[must_use]
    pub fn new() -> Self {
        let mut type_map = FxHashMap::default();
        type_map.insert(Ident::new("Int"), Type::Num);
        type_map.insert(Ident::new("Float"), Type::Float);
        type_map.insert(Ident::new("String"), Type::Str);

        Self {
            errors: Vec::new(),
            type_lambdas: Vec::new(),
            type_map,
            scope: Vec::new(),
            constructors: FxHashMap::default(),
        }
    }

    /// Records an error.
    pub fn push_error(&mut self, error: CompileError) { self.errors.push(error); }

    /// Registers a new type lambda under its name.
    pub fn register_type_lambda(&mut self, name: Ident, ty: Type) {
        self.type_lambdas.push(name.clone());
        self.type_map.insert(name, ty);
    }

    /// Resolves a type name.
    #[must_use]
    pub fn lookup_type(&self, name: &Ident) -> Option<&Type> { self.type_map.get(name) }

    /// The declared type lambdas, in order of appearance.
    #[must_use]
    pub fn type_lambdas(&self) -> &[Ident] { &self.type_lambdas }

    /// Adds a declaration to the value scope.
    pub fn declare(&mut self, declaration: TypedDeclaration) { self.scope.push(declaration); }

    /// Resolves a name to the most recently added declaration carrying it.
    #[must_use]
    pub fn lookup_declaration(&self, name: &Ident) -> Option<&TypedDeclaration> {
        self.scope.iter().rev().find(|declaration| declaration.name == *name)
    }

    /// Marks the current extent of the value scope.
    #[must_use]
    pub fn scope_mark(&self) -> usize { self.scope.len() }

    /// Drops every declaration added after the given mark.
    pub fn truncate_scope(&mut self, mark: usize) { self.scope.truncate(mark); }

    /// Registers the constructors of a type lambda.
    pub fn register_constructors(
        &mut self,
        type_lambda: Ident,
        constructors: Vec<TypedConstructor>,
    ) {
        self.constructors.insert(type_lambda, constructors);
    }

    /// The constructors of a type lambda, in declaration order.
    #[must_use]
    pub fn constructors_of(&self, type_lambda: &Ident) -> Option<&[TypedConstructor]> {
        self.constructors.get(type_lambda).map(Vec::as_slice)
    }

    /// Consumes the state: the accumulated errors if any, otherwise `Ok`.
    ///
    /// ## Errors
    ///
    /// Returns the non-empty error list when any top-level failed.
    pub fn into_result<T>(self, value: T) -> Result<T, Vec<CompileError>> {
        if self.errors.is_empty() { Ok(value) } else { Err(self.errors) }
    }
}

impl Default for CheckContext {
    fn default() -> Self { Self::new() }
}
