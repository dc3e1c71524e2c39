use thiserror::Error;

use crate::input::DEFAULT_VARIABLE_COUNT;

/// Upper cap applied by [`VariableLimit::default`]
pub const DEFAULT_MAX_VARIABLES: usize = 10;

/// Ceiling no limit can exceed, including [`VariableLimit::Unbounded`]
pub const MAX_VARIABLES_HARD: usize = 100_000;

/// Policy for how many decision variables a model may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableLimit {
    /// At most this many variables (never less than one)
    Capped(usize),
    /// Any positive count up to [`MAX_VARIABLES_HARD`]
    Unbounded,
}

impl Default for VariableLimit {
    fn default() -> Self {
        VariableLimit::Capped(DEFAULT_MAX_VARIABLES)
    }
}

impl VariableLimit {
    /// Clamp a requested count into `[1, cap]`
    pub fn clamp(self, requested: usize) -> usize {
        let cap = match self {
            VariableLimit::Capped(cap) => cap.clamp(1, MAX_VARIABLES_HARD),
            VariableLimit::Unbounded => MAX_VARIABLES_HARD,
        };
        requested.clamp(1, cap)
    }
}

/// Relational operator of a constraint
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConstraintOp {
    /// Less than or equal (≤)
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "≤", alias = "<="))]
    Le,
    /// Greater than or equal (≥)
    #[cfg_attr(feature = "serde", serde(rename = "≥", alias = ">="))]
    Ge,
    /// Equal (=)
    #[cfg_attr(feature = "serde", serde(rename = "="))]
    Eq,
}

impl ConstraintOp {
    /// Read an operator as typed by a user. Unrecognized text falls back to `≤`.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "≥" | ">=" => ConstraintOp::Ge,
            "=" | "==" => ConstraintOp::Eq,
            _ => ConstraintOp::Le,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ConstraintOp::Le => "≤",
            ConstraintOp::Ge => "≥",
            ConstraintOp::Eq => "=",
        }
    }

    /// Machine-readable label, e.g. `less_than_or_equal`
    pub fn kind_label(self) -> &'static str {
        match self {
            ConstraintOp::Le => "less_than_or_equal",
            ConstraintOp::Ge => "greater_than_or_equal",
            ConstraintOp::Eq => "equal",
        }
    }
}

impl std::fmt::Display for ConstraintOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Coefficients for each variable
    pub coefficients: Vec<f64>,
    /// Comparison operator
    pub op: ConstraintOp,
    /// Right-hand side value
    pub rhs: f64,
}

impl Constraint {
    /// An all-zero `≤ 0` row over `n` variables
    pub fn zero(n: usize) -> Self {
        Self {
            coefficients: vec![0.0; n],
            op: ConstraintOp::Le,
            rhs: 0.0,
        }
    }

    fn resize(&mut self, n: usize) {
        self.coefficients.resize(n, 0.0);
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("objective must have at least one non-zero coefficient")]
    ZeroObjective,
    /// Carries the 1-based constraint index
    #[error("constraint {0} must have at least one non-zero coefficient")]
    ZeroConstraint(usize),
}

/// A linear program as edited by a user.
///
/// The objective always holds one coefficient per variable and every
/// constraint row has the same length as the objective. There is always at
/// least one constraint.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct LpModel {
    objective: Vec<f64>,
    constraints: Vec<Constraint>,
    maximize: bool,
}

impl Default for LpModel {
    fn default() -> Self {
        Self::new(DEFAULT_VARIABLE_COUNT)
    }
}

impl LpModel {
    /// An all-zero model with `n` variables (at least one) and a single `≤` row
    pub fn new(n: usize) -> Self {
        let n = n.max(1);
        Self {
            objective: vec![0.0; n],
            constraints: vec![Constraint::zero(n)],
            maximize: true,
        }
    }

    pub fn variable_count(&self) -> usize {
        self.objective.len()
    }

    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn maximize(&self) -> bool {
        self.maximize
    }

    pub fn set_maximize(&mut self, maximize: bool) {
        self.maximize = maximize;
    }

    /// Resize the model to `requested` variables after clamping by `limit`.
    ///
    /// Coefficients keep their index; new slots are zero and dropped slots are
    /// discarded. Returns the count actually applied.
    pub fn set_variable_count(&mut self, requested: usize, limit: VariableLimit) -> usize {
        let n = limit.clamp(requested);
        self.objective.resize(n, 0.0);
        for constraint in &mut self.constraints {
            constraint.resize(n);
        }
        tracing::debug!(
            component = "model",
            operation = "set_variable_count",
            requested,
            applied = n,
            "Resized model"
        );
        n
    }

    /// Out-of-range indices are ignored
    pub fn set_objective_coefficient(&mut self, index: usize, value: f64) {
        if let Some(slot) = self.objective.get_mut(index) {
            *slot = finite_or_zero(value);
        }
    }

    pub fn add_constraint(&mut self) {
        self.constraints.push(Constraint::zero(self.variable_count()));
        tracing::debug!(
            component = "model",
            operation = "add_constraint",
            count = self.constraints.len(),
            "Added constraint"
        );
    }

    /// Remove the constraint at `index`. Removing the last remaining
    /// constraint, or an index past the end, does nothing.
    pub fn remove_constraint(&mut self, index: usize) {
        if self.constraints.len() > 1 && index < self.constraints.len() {
            self.constraints.remove(index);
            tracing::debug!(
                component = "model",
                operation = "remove_constraint",
                index,
                count = self.constraints.len(),
                "Removed constraint"
            );
        }
    }

    pub fn set_constraint_coefficient(&mut self, constraint: usize, variable: usize, value: f64) {
        if let Some(slot) = self
            .constraints
            .get_mut(constraint)
            .and_then(|c| c.coefficients.get_mut(variable))
        {
            *slot = finite_or_zero(value);
        }
    }

    pub fn set_constraint_op(&mut self, constraint: usize, op: ConstraintOp) {
        if let Some(c) = self.constraints.get_mut(constraint) {
            c.op = op;
        }
    }

    pub fn set_constraint_rhs(&mut self, constraint: usize, value: f64) {
        if let Some(c) = self.constraints.get_mut(constraint) {
            c.rhs = finite_or_zero(value);
        }
    }

    /// Check the model can be sent to a solver.
    ///
    /// Stops at the first offending row and reports it 1-based.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if is_all_zero(&self.objective) {
            return Err(ValidationError::ZeroObjective);
        }
        for (i, constraint) in self.constraints.iter().enumerate() {
            if is_all_zero(&constraint.coefficients) {
                return Err(ValidationError::ZeroConstraint(i + 1));
            }
        }
        Ok(())
    }
}

fn is_all_zero(coefficients: &[f64]) -> bool {
    coefficients.iter().all(|&c| c == 0.0)
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let model = LpModel::default();
        assert_eq!(model.variable_count(), 2);
        assert_eq!(model.objective(), &[0.0, 0.0]);
        assert_eq!(model.constraints(), &[Constraint::zero(2)]);
        assert!(model.maximize());
    }

    #[test]
    fn test_resize_round_trip_keeps_values() {
        let mut model = LpModel::new(3);
        model.set_objective_coefficient(0, 1.0);
        model.set_objective_coefficient(2, -4.0);
        model.set_constraint_coefficient(0, 1, 7.5);

        model.set_variable_count(5, VariableLimit::Unbounded);
        assert_eq!(model.objective(), &[1.0, 0.0, -4.0, 0.0, 0.0]);
        assert_eq!(model.constraints()[0].coefficients.len(), 5);

        model.set_variable_count(3, VariableLimit::Unbounded);
        assert_eq!(model.objective(), &[1.0, 0.0, -4.0]);
        assert_eq!(model.constraints()[0].coefficients, vec![0.0, 7.5, 0.0]);
    }

    #[test]
    fn test_shrink_drops_tail() {
        let mut model = LpModel::new(3);
        model.set_objective_coefficient(2, 9.0);
        model.set_variable_count(2, VariableLimit::default());
        model.set_variable_count(3, VariableLimit::default());
        assert_eq!(model.objective(), &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_variable_limit() {
        let mut model = LpModel::default();
        assert_eq!(model.set_variable_count(0, VariableLimit::default()), 1);
        assert_eq!(model.set_variable_count(25, VariableLimit::default()), 10);
        assert_eq!(model.set_variable_count(25, VariableLimit::Unbounded), 25);
        assert_eq!(model.constraints()[0].coefficients.len(), 25);
        assert_eq!(VariableLimit::Capped(0).clamp(4), 1);
    }

    #[test]
    fn test_huge_counts_hit_hard_ceiling() {
        let mut model = LpModel::new(2);
        model.set_objective_coefficient(1, 3.0);

        let applied = model.set_variable_count(usize::MAX, VariableLimit::Unbounded);
        assert_eq!(applied, MAX_VARIABLES_HARD);
        assert_eq!(model.variable_count(), MAX_VARIABLES_HARD);
        assert_eq!(model.constraints()[0].coefficients.len(), MAX_VARIABLES_HARD);
        assert_eq!(model.objective()[1], 3.0);

        let applied = model.set_variable_count(usize::MAX, VariableLimit::Capped(usize::MAX));
        assert_eq!(applied, MAX_VARIABLES_HARD);
    }

    #[test]
    fn test_add_and_remove_constraints() {
        let mut model = LpModel::new(2);
        model.remove_constraint(0);
        assert_eq!(model.num_constraints(), 1);

        model.add_constraint();
        model.set_constraint_coefficient(1, 0, 3.0);
        model.set_constraint_op(1, ConstraintOp::Ge);
        model.set_constraint_rhs(1, 5.0);
        assert_eq!(model.num_constraints(), 2);

        model.remove_constraint(0);
        assert_eq!(model.num_constraints(), 1);
        assert_eq!(
            model.constraints()[0],
            Constraint {
                coefficients: vec![3.0, 0.0],
                op: ConstraintOp::Ge,
                rhs: 5.0,
            }
        );

        model.remove_constraint(7);
        assert_eq!(model.num_constraints(), 1);
    }

    #[test]
    fn test_out_of_range_edits_ignored() {
        let mut model = LpModel::new(2);
        model.set_objective_coefficient(5, 1.0);
        model.set_constraint_coefficient(3, 0, 1.0);
        model.set_constraint_coefficient(0, 9, 1.0);
        model.set_constraint_rhs(4, 1.0);
        assert_eq!(model, LpModel::new(2));
    }

    #[test]
    fn test_non_finite_values_coerced() {
        let mut model = LpModel::new(1);
        model.set_objective_coefficient(0, f64::NAN);
        model.set_constraint_rhs(0, f64::INFINITY);
        assert_eq!(model.objective(), &[0.0]);
        assert_eq!(model.constraints()[0].rhs, 0.0);
    }

    #[test]
    fn test_validate() {
        let mut model = LpModel::new(2);
        assert_eq!(model.validate(), Err(ValidationError::ZeroObjective));

        model.set_objective_coefficient(0, 1.0);
        assert_eq!(model.validate(), Err(ValidationError::ZeroConstraint(1)));

        model.set_constraint_coefficient(0, 1, 2.0);
        model.add_constraint();
        model.add_constraint();
        model.set_constraint_coefficient(2, 0, 1.0);
        assert_eq!(model.validate(), Err(ValidationError::ZeroConstraint(2)));

        model.set_constraint_coefficient(1, 0, -1.0);
        assert_eq!(model.validate(), Ok(()));
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::ZeroObjective.to_string(),
            "objective must have at least one non-zero coefficient"
        );
        assert_eq!(
            ValidationError::ZeroConstraint(3).to_string(),
            "constraint 3 must have at least one non-zero coefficient"
        );
    }

    #[test]
    fn test_operator_parsing() {
        assert_eq!(ConstraintOp::parse("<="), ConstraintOp::Le);
        assert_eq!(ConstraintOp::parse("≤"), ConstraintOp::Le);
        assert_eq!(ConstraintOp::parse(" >= "), ConstraintOp::Ge);
        assert_eq!(ConstraintOp::parse("≥"), ConstraintOp::Ge);
        assert_eq!(ConstraintOp::parse("="), ConstraintOp::Eq);
        assert_eq!(ConstraintOp::parse("<>"), ConstraintOp::Le);
        assert_eq!(ConstraintOp::Ge.kind_label(), "greater_than_or_equal");
        assert_eq!(ConstraintOp::Eq.to_string(), "=");
    }
}
