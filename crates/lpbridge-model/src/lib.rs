mod augment;
mod expr;
mod input;
mod names;
mod outcome;
mod problem;

pub use augment::{AugmentedModel, augment};
pub use expr::{format_constraint, format_expression, format_number};
pub use input::{DEFAULT_VARIABLE_COUNT, parse_coefficient, parse_variable_count};
pub use names::{variable_name, variable_names};
pub use outcome::{InputEcho, OriginalExpressions, OutcomeKind, SolveResult};
pub use problem::{
    Constraint, ConstraintOp, DEFAULT_MAX_VARIABLES, LpModel, MAX_VARIABLES_HARD, ValidationError,
    VariableLimit,
};
