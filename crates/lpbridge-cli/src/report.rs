use std::fmt::Write;

use lpbridge_model::{AugmentedModel, LpModel, SolveResult};

fn sense_label(maximize: bool) -> &'static str {
    if maximize { "Maximize" } else { "Minimize" }
}

pub fn render_preview(model: &LpModel) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} Z = {}",
        sense_label(model.maximize()),
        model.objective_expression()
    );
    let _ = writeln!(out, "Subject to:");
    let lines = model.constraint_expressions();
    for (line, constraint) in lines.iter().zip(model.constraints()) {
        let _ = writeln!(out, "  {:30} ({})", line, constraint.op.kind_label());
    }
    out
}

pub fn render_result(
    result: &SolveResult,
    augmented: Option<&AugmentedModel>,
    maximize: bool,
) -> String {
    let sense = sense_label(maximize);
    let mut out = String::new();

    let marker = if result.outcome.is_failure() { "✗" } else { "✓" };
    let _ = writeln!(
        out,
        "{} Status {}: {}",
        marker,
        result.status_code(),
        result.status_description()
    );
    let _ = writeln!(
        out,
        "Execution time: {:.2} ms",
        result.execution_time_seconds * 1000.0
    );
    let _ = writeln!(out);

    match result.objective_value {
        Some(z) => {
            let _ = writeln!(out, "Optimal value (Z): {}", z);
        }
        None => {
            let _ = writeln!(out, "Optimal value (Z): -");
        }
    }

    if !result.assignment.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Decision variables:");
        for (name, value) in &result.assignment {
            let _ = writeln!(out, "  {:10} {}", name, value);
        }
    }

    if !result.dual_values.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Dual values:");
        for (name, value) in &result.dual_values {
            let _ = writeln!(out, "  {:10} {}", name, value);
        }
    }

    if !result.iterations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Iterations (Z before the optimum):");
        let _ = writeln!(out, "  {:>9}  Z", "Iteration");
        for (i, z) in result.iterations.iter().enumerate() {
            let _ = writeln!(out, "  {:>9}  {}", i + 1, z);
        }
        let optimum = result
            .objective_value
            .map(|z| z.to_string())
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(out, "  {:>9}  {}", "Optimum", optimum);
    }

    if let Some(model) = augmented {
        let _ = writeln!(out);
        let _ = writeln!(out, "Augmented model:");
        let _ = writeln!(out, "  Original:  {} Z = {}", sense, model.original_objective);
        let _ = writeln!(out, "  Augmented: {} Z = {}", sense, model.augmented_objective);
        if model.added_variables.is_empty() {
            let _ = writeln!(out, "  Slack/surplus variables: none");
        } else {
            let _ = writeln!(
                out,
                "  Slack/surplus variables: {}",
                model.added_variables.join(" + ")
            );
        }
        let _ = writeln!(
            out,
            "  Counts: s = {}, e = {}",
            model.slack_count, model.surplus_count
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Problem:");
    let _ = writeln!(
        out,
        "  {} Z = {}",
        sense, result.input.original_expressions.objective
    );
    for line in &result.input.original_expressions.constraints {
        let _ = writeln!(out, "  {}", line);
    }
    let _ = writeln!(
        out,
        "  Variables: {}",
        result.input.variable_names.join(", ")
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", result.message);
    out
}
