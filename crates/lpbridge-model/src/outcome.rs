use indexmap::IndexMap;

use crate::problem::LpModel;

/// Classified meaning of a solver status code
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// Problem not evaluated or malformed (code 1)
    Undefined,
    /// A valid but not necessarily optimal solution (code 2)
    Feasible,
    /// Constraints contradict each other (code 3)
    Infeasible,
    /// No point satisfies all constraints (code 4)
    NoFeasibleSolution,
    /// Best possible solution found (code 5)
    Optimal,
    /// Objective can grow without bound (code 6)
    Unbounded,
    /// Unrecognized code, kept verbatim
    Unknown(i64),
    /// The solver could not be reached or its reply could not be read
    CommunicationFailure,
}

impl OutcomeKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => OutcomeKind::Undefined,
            2 => OutcomeKind::Feasible,
            3 => OutcomeKind::Infeasible,
            4 => OutcomeKind::NoFeasibleSolution,
            5 => OutcomeKind::Optimal,
            6 => OutcomeKind::Unbounded,
            other => OutcomeKind::Unknown(other),
        }
    }

    /// Raw status code; a communication failure reports 0
    pub fn code(self) -> i64 {
        match self {
            OutcomeKind::Undefined => 1,
            OutcomeKind::Feasible => 2,
            OutcomeKind::Infeasible => 3,
            OutcomeKind::NoFeasibleSolution => 4,
            OutcomeKind::Optimal => 5,
            OutcomeKind::Unbounded => 6,
            OutcomeKind::Unknown(code) => code,
            OutcomeKind::CommunicationFailure => 0,
        }
    }

    pub fn description(self) -> String {
        match self {
            OutcomeKind::Undefined => "Solution undefined".to_string(),
            OutcomeKind::Feasible => "Feasible solution".to_string(),
            OutcomeKind::Infeasible => "Infeasible solution".to_string(),
            OutcomeKind::NoFeasibleSolution => "No feasible solution".to_string(),
            OutcomeKind::Optimal => "Optimal solution found".to_string(),
            OutcomeKind::Unbounded => "Unbounded solution".to_string(),
            OutcomeKind::Unknown(code) => format!("Unknown status ({code})"),
            OutcomeKind::CommunicationFailure => "Error communicating with the server".to_string(),
        }
    }

    pub fn is_failure(self) -> bool {
        self == OutcomeKind::CommunicationFailure
    }
}

/// Objective and constraint lines as the user wrote them
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OriginalExpressions {
    pub objective: String,
    pub constraints: Vec<String>,
}

/// The problem a result belongs to, as echoed by the solver or rebuilt locally
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InputEcho {
    pub variable_names: Vec<String>,
    pub original_expressions: OriginalExpressions,
    pub num_variables: usize,
}

impl InputEcho {
    pub fn from_model(model: &LpModel) -> Self {
        Self {
            variable_names: model.variable_names(),
            original_expressions: OriginalExpressions {
                objective: model.objective_expression(),
                constraints: model.constraint_expressions(),
            },
            num_variables: model.variable_count(),
        }
    }
}

/// Outcome of one submission
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct SolveResult {
    /// Optimal objective value, when the solver reported one
    pub objective_value: Option<f64>,
    /// Variable name to value, in the order the solver listed them
    pub assignment: IndexMap<String, f64>,
    /// Constraint name to dual value
    pub dual_values: IndexMap<String, f64>,
    pub outcome: OutcomeKind,
    /// Objective values observed before the optimum
    pub iterations: Vec<f64>,
    pub execution_time_seconds: f64,
    pub message: String,
    pub input: InputEcho,
}

impl SolveResult {
    /// Result for a solve that never produced a readable reply
    pub fn communication_failure(reason: impl std::fmt::Display, input: InputEcho) -> Self {
        Self {
            objective_value: None,
            assignment: IndexMap::new(),
            dual_values: IndexMap::new(),
            outcome: OutcomeKind::CommunicationFailure,
            iterations: Vec::new(),
            execution_time_seconds: 0.0,
            message: format!("Error: {reason}"),
            input,
        }
    }

    pub fn status_code(&self) -> i64 {
        self.outcome.code()
    }

    pub fn status_description(&self) -> String {
        self.outcome.description()
    }
}
