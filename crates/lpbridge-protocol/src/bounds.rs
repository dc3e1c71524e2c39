//! Mapping from constraint operators to the solver's bound encoding.

use lpbridge_model::{Constraint, ConstraintOp};

use crate::wire::WireBounds;

/// GLPK bound-type codes the request builder emits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BoundKind {
    /// Lower bound only, `lb <= r`
    Lower = 2,
    /// Upper bound only, `r <= ub`
    Upper = 3,
    /// Fixed, `r = lb = ub`
    Fixed = 5,
}

impl BoundKind {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Feasible range of a constraint row
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bounds {
    /// `≤ ub`
    Upper(f64),
    /// `≥ lb`
    Lower(f64),
    /// `= value`
    Fixed(f64),
}

impl Bounds {
    pub fn from_op(op: ConstraintOp, value: f64) -> Self {
        match op {
            ConstraintOp::Le => Bounds::Upper(value),
            ConstraintOp::Ge => Bounds::Lower(value),
            ConstraintOp::Eq => Bounds::Fixed(value),
        }
    }

    pub fn for_constraint(constraint: &Constraint) -> Self {
        Self::from_op(constraint.op, constraint.rhs)
    }

    pub fn kind(self) -> BoundKind {
        match self {
            Bounds::Upper(_) => BoundKind::Upper,
            Bounds::Lower(_) => BoundKind::Lower,
            Bounds::Fixed(_) => BoundKind::Fixed,
        }
    }

    /// `(lb, ub)` with the unused side written as `0.0`
    pub fn pair(self) -> (f64, f64) {
        match self {
            Bounds::Upper(ub) => (0.0, ub),
            Bounds::Lower(lb) => (lb, 0.0),
            Bounds::Fixed(v) => (v, v),
        }
    }

    pub fn to_wire(self, unused: UnusedBound) -> WireBounds {
        let (lb, ub) = self.pair();
        let (lb, ub) = match (unused, self) {
            (UnusedBound::Zero, _) | (_, Bounds::Fixed(_)) => (Some(lb), Some(ub)),
            (UnusedBound::Omit, Bounds::Upper(_)) => (None, Some(ub)),
            (UnusedBound::Omit, Bounds::Lower(_)) => (Some(lb), None),
        };
        WireBounds {
            kind: self.kind().code(),
            lb,
            ub,
        }
    }
}

/// How the side a one-sided bound does not use is serialized.
///
/// `Zero` matches what deployed solver services expect, but a solver that
/// honours both fields reads `≥ 5` as `5 <= r <= 0`. `Omit` leaves the field
/// out instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnusedBound {
    #[default]
    Zero,
    Omit,
}

/// `(lb, ub)` for an operator and right-hand side
pub fn map_bounds(op: ConstraintOp, value: f64) -> (f64, f64) {
    Bounds::from_op(op, value).pair()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_pairs() {
        assert_eq!(map_bounds(ConstraintOp::Le, 5.0), (0.0, 5.0));
        assert_eq!(map_bounds(ConstraintOp::Ge, 5.0), (5.0, 0.0));
        assert_eq!(map_bounds(ConstraintOp::Eq, 5.0), (5.0, 5.0));
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(Bounds::from_op(ConstraintOp::Le, 1.0).kind().code(), 3);
        assert_eq!(Bounds::from_op(ConstraintOp::Ge, 1.0).kind().code(), 2);
        assert_eq!(Bounds::from_op(ConstraintOp::Eq, 1.0).kind().code(), 5);
    }

    fn wire(kind: u8, lb: Option<f64>, ub: Option<f64>) -> WireBounds {
        WireBounds { kind, lb, ub }
    }

    #[test]
    fn test_wire_zero_policy() {
        let lower = Bounds::Lower(5.0).to_wire(UnusedBound::Zero);
        assert_eq!(lower, wire(2, Some(5.0), Some(0.0)));
    }

    #[test]
    fn test_wire_omit_policy() {
        let lower = Bounds::Lower(5.0).to_wire(UnusedBound::Omit);
        assert_eq!(lower, wire(2, Some(5.0), None));
        let upper = Bounds::Upper(4.0).to_wire(UnusedBound::Omit);
        assert_eq!(upper, wire(3, None, Some(4.0)));
        let fixed = Bounds::Fixed(2.0).to_wire(UnusedBound::Omit);
        assert_eq!(fixed, wire(5, Some(2.0), Some(2.0)));
    }
}
