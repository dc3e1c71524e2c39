use chrono::{DateTime, SecondsFormat, Utc};
use lpbridge_model::{InputEcho, LpModel};

use crate::bounds::Bounds;
use crate::config::SessionConfig;
use crate::wire::{WireConstraint, WireMetadata, WireRequest, WireTerm};

/// Name the solver knows the constraint at `index` (0-based) by
pub fn constraint_name(index: usize) -> String {
    format!("cons{}", index + 1)
}

/// Build the solver request for a model stamped with the current time.
///
/// The model is expected to have passed [`LpModel::validate`]; nothing is
/// checked here.
pub fn build_request(model: &LpModel, config: &SessionConfig) -> WireRequest {
    build_request_at(model, config, Utc::now())
}

pub fn build_request_at(
    model: &LpModel,
    config: &SessionConfig,
    created_at: DateTime<Utc>,
) -> WireRequest {
    let echo = InputEcho::from_model(model);
    let names = &echo.variable_names;

    let objective = sparse_terms(model.objective(), names);
    let constraints: Vec<WireConstraint> = model
        .constraints()
        .iter()
        .enumerate()
        .map(|(i, c)| WireConstraint {
            name: constraint_name(i),
            vars: sparse_terms(&c.coefficients, names),
            bnds: Bounds::for_constraint(c).to_wire(config.unused_bound),
        })
        .collect();

    tracing::debug!(
        component = "request",
        operation = "build",
        variables = echo.num_variables,
        objective_terms = objective.len(),
        constraints = constraints.len(),
        "Built solver request"
    );

    WireRequest {
        objective,
        constraints,
        metadata: WireMetadata {
            created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            format_version: config.format_version.clone(),
            source: config.source.clone(),
            num_variables: echo.num_variables,
            variable_names: echo.variable_names,
            original_expressions: echo.original_expressions,
        },
    }
}

/// Terms for the non-zero coefficients, in variable order
fn sparse_terms(coefficients: &[f64], names: &[String]) -> Vec<WireTerm> {
    coefficients
        .iter()
        .zip(names)
        .filter(|(coef, _)| **coef != 0.0)
        .map(|(coef, name)| WireTerm {
            name: name.clone(),
            coef: *coef,
        })
        .collect()
}
