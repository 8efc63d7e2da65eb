//! Operator registry: one module per operator family.

pub mod arithmetic;
pub mod array;
pub mod comparison;
pub mod conditional;
pub mod logical;
pub mod string;
pub mod variable;

use crate::types::{operators_to_map, OperatorDefinition, OperatorMap};
use std::sync::Arc;

/// All built-in operators, family by family.
///
/// The order is part of the contract: arithmetic, comparison, logical,
/// conditional, array, string, variable. A token defined by two families is
/// owned by the later one, which is how string `in` replaces comparison `in`.
pub fn all_operators() -> Vec<Arc<OperatorDefinition>> {
    let mut ops = Vec::new();
    ops.extend(arithmetic::operators());
    ops.extend(comparison::operators());
    ops.extend(logical::operators());
    ops.extend(conditional::operators());
    ops.extend(array::operators());
    ops.extend(string::operators());
    ops.extend(variable::operators());
    ops
}

/// Build the operator map from all operators.
pub fn operators_map() -> OperatorMap {
    operators_to_map(all_operators())
}
