use std::path::{Path, PathBuf};

use lpbridge_model::parse_coefficient;
use lpbridge_protocol::Session;
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProblemFileError {
    #[error("Error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid problem file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// A number, or text that goes through the same coercion as typed input
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    fn value(&self) -> f64 {
        match self {
            Cell::Number(v) => *v,
            Cell::Text(text) => parse_coefficient(text),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConstraintEntry {
    pub coefficients: Vec<Cell>,
    #[serde(default)]
    pub operator: Option<String>,
    #[serde(default)]
    pub value: Option<Cell>,
}

/// Problem description read from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ProblemFile {
    #[serde(default = "default_maximize")]
    pub maximize: bool,
    pub objective: Vec<Cell>,
    #[serde(default)]
    pub constraints: Vec<ConstraintEntry>,
}

fn default_maximize() -> bool {
    true
}

impl ProblemFile {
    pub fn load(path: &Path) -> Result<Self, ProblemFileError> {
        let source = std::fs::read_to_string(path).map_err(|source| ProblemFileError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source).map_err(|source| ProblemFileError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Replay the file as edits on `session`, so the model's shape rules and
    /// variable limit apply exactly as they would to typed input
    pub fn apply(&self, session: &mut Session) {
        let applied = session.set_variable_count(self.objective.len());
        if applied < self.objective.len() {
            tracing::warn!(
                requested = self.objective.len(),
                applied,
                "Problem has more variables than allowed; extra columns ignored"
            );
        }
        session.set_maximize(self.maximize);

        for (i, cell) in self.objective.iter().enumerate() {
            session.set_objective_coefficient(i, cell.value());
        }

        for (ci, entry) in self.constraints.iter().enumerate() {
            if ci > 0 {
                session.add_constraint();
            }
            for (vi, cell) in entry.coefficients.iter().enumerate() {
                session.set_constraint_coefficient(ci, vi, cell.value());
            }
            if let Some(op) = &entry.operator {
                session.set_constraint_op_text(ci, op);
            }
            if let Some(value) = &entry.value {
                session.set_constraint_value(ci, value.value());
            }
        }
    }

    pub fn into_session(self, mut session: Session) -> Session {
        self.apply(&mut session);
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lpbridge_model::{ConstraintOp, VariableLimit};
    use lpbridge_protocol::SessionConfig;

    #[test]
    fn test_apply_problem() {
        let source = r#"{
            "objective": [3, "5"],
            "constraints": [
                {"coefficients": [1, 0], "operator": "<=", "value": 4},
                {"coefficients": [0, 2], "operator": "≥", "value": "12"},
                {"coefficients": [3, 2], "operator": "=", "value": 18}
            ]
        }"#;
        let problem = ProblemFile::parse(source).unwrap();
        let session = problem.into_session(Session::new(SessionConfig::new()));
        let model = session.model();

        assert!(model.maximize());
        assert_eq!(model.objective(), &[3.0, 5.0]);
        assert_eq!(model.num_constraints(), 3);
        assert_eq!(model.constraints()[1].op, ConstraintOp::Ge);
        assert_eq!(model.constraints()[1].rhs, 12.0);
        assert_eq!(model.constraints()[2].op, ConstraintOp::Eq);
        assert_eq!(model.validate(), Ok(()));
    }

    #[test]
    fn test_extra_columns_ignored() {
        let source = r#"{"maximize": false, "objective": [1, 1, 1],
            "constraints": [{"coefficients": [1, 1, 1, 1]}]}"#;
        let problem = ProblemFile::parse(source).unwrap();
        let config = SessionConfig::new().with_variable_limit(VariableLimit::Capped(2));
        let session = problem.into_session(Session::new(config));

        assert!(!session.model().maximize());
        assert_eq!(session.model().objective(), &[1.0, 1.0]);
        assert_eq!(session.model().constraints()[0].coefficients, vec![1.0, 1.0]);
        assert_eq!(session.model().constraints()[0].op, ConstraintOp::Le);
    }

    #[test]
    fn test_garbage_cells_become_zero() {
        let source = r#"{"objective": ["abc", "2x"], "constraints": []}"#;
        let session = ProblemFile::parse(source)
            .unwrap()
            .into_session(Session::default());
        assert_eq!(session.model().objective(), &[0.0, 2.0]);
        assert_eq!(session.model().num_constraints(), 1);
    }
}
