//! The Larch type language and constraint solver.

pub mod constraints;
pub mod ty;

pub use constraints::{Constraints, merge_constraints, type_constraints, type_eq};
pub use ty::Type;
