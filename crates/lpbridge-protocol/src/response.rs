use lpbridge_model::{InputEcho, OutcomeKind, SolveResult};

use crate::transport::TransportError;
use crate::wire::{WireInputEcho, WireResponse};

/// Message used when the service sends none
pub const NO_MESSAGE: &str = "No message";

/// Turn the outcome of a round trip into a [`SolveResult`].
///
/// `local` describes the submitted model and stands in for any part of the
/// echo the service did not send back. Transport failures become a
/// communication-failure result; nothing here returns an error.
pub fn interpret(reply: Result<WireResponse, TransportError>, local: InputEcho) -> SolveResult {
    match reply {
        Ok(response) => interpret_response(response, local),
        Err(err) => {
            tracing::warn!(
                component = "response",
                operation = "interpret",
                error = %err,
                "Solver request failed"
            );
            SolveResult::communication_failure(err, local)
        }
    }
}

/// Interpret a decoded reply, defaulting every missing field
pub fn interpret_response(response: WireResponse, local: InputEcho) -> SolveResult {
    let outcome = response.result.unwrap_or_default();
    let solution = outcome.result.unwrap_or_default();
    let kind = OutcomeKind::from_code(solution.status.unwrap_or(0));

    tracing::info!(
        component = "response",
        operation = "interpret",
        status = kind.code(),
        outcome = ?kind,
        "Interpreted solver response"
    );

    SolveResult {
        objective_value: solution.z,
        assignment: solution.vars.unwrap_or_default(),
        dual_values: solution.dual.unwrap_or_default(),
        outcome: kind,
        iterations: outcome.iterations.unwrap_or_default(),
        execution_time_seconds: outcome.time.unwrap_or(0.0),
        message: response.message.unwrap_or_else(|| NO_MESSAGE.to_string()),
        input: merge_echo(response.input_data, local),
    }
}

fn merge_echo(echo: Option<WireInputEcho>, local: InputEcho) -> InputEcho {
    let Some(echo) = echo else {
        return local;
    };
    InputEcho {
        variable_names: echo.variable_names.unwrap_or(local.variable_names),
        original_expressions: echo
            .original_expressions
            .unwrap_or(local.original_expressions),
        num_variables: echo.num_variables.unwrap_or(local.num_variables),
    }
}
