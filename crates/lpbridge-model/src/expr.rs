//! Human-readable rendering of linear expressions.

use crate::names::variable_names;
use crate::problem::{Constraint, LpModel};

/// Render `coefficients` against `names` as a linear expression.
///
/// Zero terms are skipped and unit coefficients print as the bare name, so
/// `[1, -1, 2]` over `x1..x3` renders as `x1 - x2 + 2x3`. Later negative
/// terms are joined with a spaced ` - `, but a leading negative term carries
/// its sign with no space before it (`-x1`, never ` - x1`). An expression with
/// no terms renders as `0`.
pub fn format_expression(coefficients: &[f64], names: &[String]) -> String {
    let mut out = String::new();
    for (coeff, name) in coefficients.iter().zip(names) {
        let coeff = *coeff;
        if coeff == 0.0 {
            continue;
        }
        let first = out.is_empty();
        match (coeff < 0.0, first) {
            (true, true) => out.push('-'),
            (true, false) => out.push_str(" - "),
            (false, true) => {}
            (false, false) => out.push_str(" + "),
        }
        let magnitude = coeff.abs();
        if magnitude != 1.0 {
            out.push_str(&format_number(magnitude));
        }
        out.push_str(name);
    }
    if out.is_empty() {
        out.push('0');
    }
    out
}

/// Render a full constraint line: `<expr> <op> <rhs>`
pub fn format_constraint(constraint: &Constraint, names: &[String]) -> String {
    format!(
        "{} {} {}",
        format_expression(&constraint.coefficients, names),
        constraint.op,
        format_number(constraint.rhs)
    )
}

/// Shortest decimal form, with negative zero printed as `0`
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

impl LpModel {
    pub fn variable_names(&self) -> Vec<String> {
        variable_names(self.variable_count())
    }

    pub fn objective_expression(&self) -> String {
        format_expression(self.objective(), &self.variable_names())
    }

    pub fn constraint_expressions(&self) -> Vec<String> {
        let names = self.variable_names();
        self.constraints()
            .iter()
            .map(|c| format_constraint(c, &names))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::ConstraintOp;

    fn names(n: usize) -> Vec<String> {
        variable_names(n)
    }

    #[test]
    fn test_all_zero() {
        assert_eq!(format_expression(&[0.0, 0.0, 0.0], &names(3)), "0");
        assert_eq!(format_expression(&[], &names(0)), "0");
    }

    #[test]
    fn test_signs_and_unit_coefficients() {
        assert_eq!(format_expression(&[1.0, -1.0, 2.0], &names(3)), "x1 - x2 + 2x3");
        assert_eq!(format_expression(&[0.0, 3.0, -2.5], &names(3)), "3x2 - 2.5x3");
        assert_eq!(format_expression(&[-1.0, 4.0], &names(2)), "-x1 + 4x2");
        assert_eq!(format_expression(&[-3.0, 0.0], &names(2)), "-3x1");
    }

    #[test]
    fn test_constraint_line() {
        let constraint = Constraint {
            coefficients: vec![3.0, 2.0],
            op: ConstraintOp::Le,
            rhs: 18.0,
        };
        assert_eq!(format_constraint(&constraint, &names(2)), "3x1 + 2x2 ≤ 18");

        let constraint = Constraint {
            coefficients: vec![0.0, 0.0],
            op: ConstraintOp::Ge,
            rhs: -0.0,
        };
        assert_eq!(format_constraint(&constraint, &names(2)), "0 ≥ 0");
    }

    #[test]
    fn test_model_expressions() {
        let mut model = LpModel::new(2);
        model.set_objective_coefficient(0, 3.0);
        model.set_objective_coefficient(1, 5.0);
        model.set_constraint_coefficient(0, 0, 1.0);
        model.set_constraint_rhs(0, 4.0);
        model.add_constraint();
        model.set_constraint_coefficient(1, 1, 2.0);
        model.set_constraint_op(1, ConstraintOp::Eq);
        model.set_constraint_rhs(1, 12.0);

        assert_eq!(model.objective_expression(), "3x1 + 5x2");
        assert_eq!(model.constraint_expressions(), vec!["x1 ≤ 4", "2x2 = 12"]);
    }
}
