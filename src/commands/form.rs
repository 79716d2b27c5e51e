//! Form Command Wrappers
//!
//! Field updates and calculation-sheet lookups. The backend is the sole
//! validator: `update_field` either succeeds or rejects with a
//! validation error, and batch results arrive on the `validation-error`
//! and `validation-ok` event channels.

use serde::Serialize;

use super::{run, run_with, CommandError};
use crate::models::{CalculationComponent, Parameter, ParameterType};

#[derive(Serialize)]
struct UpdateFieldArgs<'a> {
    id: &'a str,
    value: Option<&'a str>,
}

#[derive(Serialize)]
struct EquationArgs<'a> {
    parameter: &'a ParameterType,
}

#[derive(Serialize)]
struct StepArgs {
    #[serde(rename = "stepId")]
    step_id: u32,
}

/// Push a single field edit to the backend. A `Validation` error carries
/// the message to show inline under the field.
pub async fn update_field(id: &str, value: Option<&str>) -> Result<(), CommandError> {
    run_with("update_field", &UpdateFieldArgs { id, value }).await
}

/// Validate the whole form and, if valid, evaluate the method. Outcomes
/// are broadcast on `validation-error` / `validation-ok`, and a successful
/// evaluation triggers `tabs_updated`.
pub async fn calculate_form() -> Result<(), CommandError> {
    run("calculate_form").await
}

pub async fn get_equation_with_symbols(
    parameter: &ParameterType,
) -> Result<Vec<Vec<CalculationComponent>>, CommandError> {
    run_with("get_equation_with_symbols", &EquationArgs { parameter }).await
}

pub async fn get_equation_with_numbers(
    parameter: &ParameterType,
) -> Result<Vec<Vec<CalculationComponent>>, CommandError> {
    run_with("get_equation_with_numbers", &EquationArgs { parameter }).await
}

/// Input parameters of a calc-sheet step, with their current values.
pub async fn get_equation_inputs(step_id: u32) -> Result<Vec<Parameter>, CommandError> {
    run_with("get_equation_inputs", &StepArgs { step_id }).await
}

/// All symbols appearing in a calc-sheet step, for the nomenclature table.
pub async fn get_equation_inputs_symbols(step_id: u32) -> Result<Vec<Parameter>, CommandError> {
    run_with("get_equation_inputs_symbols", &StepArgs { step_id }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_args_use_the_camel_case_id_key() {
        let json = serde_json::to_value(&StepArgs { step_id: 0 }).unwrap();
        assert_eq!(json, serde_json::json!({ "stepId": 0 }));
    }
}
