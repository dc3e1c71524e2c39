use crate::problem::{Constraint, ConstraintOp};

/// Objective shown with the slack (`s`) and surplus (`e`) variables a
/// standard-form conversion would introduce. Display only.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AugmentedModel {
    pub original_objective: String,
    pub augmented_objective: String,
    /// Generated names in constraint order
    pub added_variables: Vec<String>,
    pub slack_count: usize,
    pub surplus_count: usize,
}

/// Derive the augmented objective from the constraint operators.
///
/// `≤` adds `s<k>`, `≥` adds `e<k>`, and `=` adds one of each, with the two
/// counters numbered independently across the whole constraint list.
pub fn augment(original_objective: &str, constraints: &[Constraint]) -> AugmentedModel {
    let mut slack_count = 0;
    let mut surplus_count = 0;
    let mut added_variables = Vec::new();

    for constraint in constraints {
        match constraint.op {
            ConstraintOp::Le => {
                slack_count += 1;
                added_variables.push(format!("s{slack_count}"));
            }
            ConstraintOp::Ge => {
                surplus_count += 1;
                added_variables.push(format!("e{surplus_count}"));
            }
            ConstraintOp::Eq => {
                slack_count += 1;
                surplus_count += 1;
                added_variables.push(format!("s{slack_count}"));
                added_variables.push(format!("e{surplus_count}"));
            }
        }
    }

    let mut augmented_objective = original_objective.to_string();
    for name in &added_variables {
        augmented_objective.push_str(" + ");
        augmented_objective.push_str(name);
    }

    AugmentedModel {
        original_objective: original_objective.to_string(),
        augmented_objective,
        added_variables,
        slack_count,
        surplus_count,
    }
}
