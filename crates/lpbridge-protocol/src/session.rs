//! The single owner of a user's model and its latest result.

use lpbridge_model::{
    AugmentedModel, Constraint, ConstraintOp, InputEcho, LpModel, SolveResult, ValidationError,
    augment, parse_coefficient, parse_variable_count,
};
use thiserror::Error;

use crate::config::SessionConfig;
use crate::request::build_request;
use crate::response::interpret;
use crate::transport::{Transport, TransportError};
use crate::wire::{WireRequest, WireResponse};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("a solve is already in progress")]
    Busy,
    #[error("no solve is in progress")]
    NotPending,
}

/// A request ready to go out, produced by [`Session::begin_submit`].
///
/// The session stays busy until the reply is handed to
/// [`Session::finish_submit`]. A caller that drops the request without
/// sending it must call [`Session::cancel_submit`].
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSolve {
    pub url: String,
    pub request: WireRequest,
}

/// What the model looked like when a request was built
#[derive(Debug, Clone)]
struct Snapshot {
    input: InputEcho,
    constraints: Vec<Constraint>,
}

#[derive(Debug, Clone)]
struct Solved {
    result: SolveResult,
    constraints: Vec<Constraint>,
}

/// Owns one [`LpModel`] and the result of its most recent solve.
///
/// At most one solve is outstanding at a time: [`Session::begin_submit`]
/// marks the session busy and [`Session::finish_submit`] clears it whatever
/// the reply was. Each finished solve replaces the previous result.
#[derive(Debug, Clone, Default)]
pub struct Session {
    config: SessionConfig,
    model: LpModel,
    solved: Option<Solved>,
    pending: Option<Snapshot>,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            model: LpModel::default(),
            solved: None,
            pending: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn model(&self) -> &LpModel {
        &self.model
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn result(&self) -> Option<&SolveResult> {
        self.solved.as_ref().map(|s| &s.result)
    }

    /// Augmented model for the current result, derived from the constraints
    /// that were actually submitted
    pub fn augmented_model(&self) -> Option<AugmentedModel> {
        self.solved
            .as_ref()
            .map(|s| augment(&s.result.input.original_expressions.objective, &s.constraints))
    }

    /// Augmented model for the current result, derived from the constraints
    /// as they are now. Edits made after the solve show up here even though
    /// the result does not reflect them.
    pub fn live_augmented_model(&self) -> Option<AugmentedModel> {
        self.result()
            .map(|r| augment(&r.input.original_expressions.objective, self.model.constraints()))
    }

    // Model edits

    /// Resize to `requested` variables under the configured limit
    pub fn set_variable_count(&mut self, requested: usize) -> usize {
        let applied = self.model.set_variable_count(requested, self.config.variable_limit);
        if self.config.invalidate_on_resize {
            self.solved = None;
        }
        applied
    }

    pub fn set_variable_count_text(&mut self, text: &str) -> usize {
        self.set_variable_count(parse_variable_count(text))
    }

    pub fn set_maximize(&mut self, maximize: bool) {
        self.model.set_maximize(maximize);
    }

    pub fn set_objective_coefficient(&mut self, index: usize, value: f64) {
        self.model.set_objective_coefficient(index, value);
    }

    pub fn set_objective_coefficient_text(&mut self, index: usize, text: &str) {
        self.set_objective_coefficient(index, parse_coefficient(text));
    }

    pub fn add_constraint(&mut self) {
        self.model.add_constraint();
    }

    pub fn remove_constraint(&mut self, index: usize) {
        self.model.remove_constraint(index);
    }

    pub fn set_constraint_coefficient(&mut self, constraint: usize, variable: usize, value: f64) {
        self.model.set_constraint_coefficient(constraint, variable, value);
    }

    pub fn set_constraint_coefficient_text(
        &mut self,
        constraint: usize,
        variable: usize,
        text: &str,
    ) {
        self.set_constraint_coefficient(constraint, variable, parse_coefficient(text));
    }

    pub fn set_constraint_op(&mut self, constraint: usize, op: ConstraintOp) {
        self.model.set_constraint_op(constraint, op);
    }

    pub fn set_constraint_op_text(&mut self, constraint: usize, text: &str) {
        self.set_constraint_op(constraint, ConstraintOp::parse(text));
    }

    pub fn set_constraint_value(&mut self, constraint: usize, value: f64) {
        self.model.set_constraint_rhs(constraint, value);
    }

    pub fn set_constraint_value_text(&mut self, constraint: usize, text: &str) {
        self.set_constraint_value(constraint, parse_coefficient(text));
    }

    // Submission

    /// Validate the model and build its request, marking the session busy.
    ///
    /// A validation failure leaves the session untouched.
    pub fn begin_submit(&mut self) -> Result<PendingSolve, SubmitError> {
        if self.is_busy() {
            return Err(SubmitError::Busy);
        }
        self.model.validate()?;

        let request = build_request(&self.model, &self.config);
        let url = self.config.solve_url(self.model.maximize());
        self.pending = Some(Snapshot {
            input: InputEcho::from_model(&self.model),
            constraints: self.model.constraints().to_vec(),
        });

        tracing::info!(
            component = "session",
            operation = "begin_submit",
            url = %url,
            variables = self.model.variable_count(),
            constraints = self.model.num_constraints(),
            "Submitting model to solver"
        );
        Ok(PendingSolve { url, request })
    }

    /// Record the reply to the outstanding request and clear the busy flag
    pub fn finish_submit(
        &mut self,
        reply: Result<WireResponse, TransportError>,
    ) -> Result<&SolveResult, SubmitError> {
        let snapshot = self.pending.take().ok_or(SubmitError::NotPending)?;
        let result = interpret(reply, snapshot.input);

        tracing::info!(
            component = "session",
            operation = "finish_submit",
            status = result.status_code(),
            objective = ?result.objective_value,
            "Solve finished"
        );

        let solved = self.solved.insert(Solved {
            result,
            constraints: snapshot.constraints,
        });
        Ok(&solved.result)
    }

    /// Abandon the outstanding request without recording a result.
    ///
    /// Returns `false` when nothing was pending. The previous result is kept.
    pub fn cancel_submit(&mut self) -> bool {
        let cancelled = self.pending.take().is_some();
        if cancelled {
            tracing::info!(
                component = "session",
                operation = "cancel_submit",
                "Submission abandoned"
            );
        }
        cancelled
    }

    /// Validate, send and interpret in one step
    pub fn submit<T: Transport + ?Sized>(
        &mut self,
        transport: &T,
    ) -> Result<&SolveResult, SubmitError> {
        let pending = self.begin_submit()?;
        let reply = transport.post(&pending.url, &pending.request);
        self.finish_submit(reply)
    }
}
