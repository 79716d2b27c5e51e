//! Parameter Display Formatting
//!
//! Pure mappings from the backend's parameter tagged unions to display
//! strings for read-only views and input controls.

use crate::models::{Parameter, ParameterType, ParameterValue};

/// Format a parameter's value for display. Null renders as the empty
/// string; floats honor the `DecimalPlaces` display option.
pub fn parameter_value(param: &Parameter) -> String {
    let Some(value) = &param.value else {
        return String::new();
    };

    match (value, param.decimal_places()) {
        (ParameterValue::Float(f), Some(places)) => format!("{:.*}", places as usize, f),
        (ParameterValue::Float(f), None) => f.to_string(),
        (ParameterValue::String(s), _) => s.clone(),
        (ParameterValue::Bool(b), _) => b.to_string(),
    }
}

/// Flat, stringly-valued view of a parameter for input controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDisplay {
    pub id: String,
    pub name: String,
    pub units: Option<String>,
    pub value: Option<String>,
}

/// Collapse a `ParameterType` into a `FieldDisplay`: floats formatted
/// per `DecimalPlaces`, booleans and strings stringified, `Object`
/// parameters not representable as a single input.
pub fn stringed_param(param: &ParameterType) -> Option<FieldDisplay> {
    let inner = param.parameter()?;
    let value = inner.value.as_ref().map(|value| match value {
        ParameterValue::Float(f) => match inner.decimal_places() {
            Some(places) => format!("{:.*}", places as usize, f),
            None => f.to_string(),
        },
        ParameterValue::String(s) => s.clone(),
        ParameterValue::Bool(b) => b.to_string(),
    });

    Some(FieldDisplay {
        id: inner.id.clone(),
        name: inner.name.clone(),
        units: inner.units.clone(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DisplayOptions;

    fn float_param(value: Option<f64>, display_options: Vec<DisplayOptions>) -> Parameter {
        Parameter {
            id: "Q".into(),
            name: "Heat release rate".into(),
            units: Some("kW".into()),
            value: value.map(ParameterValue::Float),
            display_options,
        }
    }

    #[test]
    fn null_value_renders_empty() {
        assert_eq!(parameter_value(&float_param(None, vec![])), "");
    }

    #[test]
    fn decimal_places_format_fixed_point() {
        let param = float_param(Some(3.14159), vec![DisplayOptions::DecimalPlaces(2)]);
        assert_eq!(parameter_value(&param), "3.14");
    }

    #[test]
    fn default_float_formatting_drops_trailing_zero() {
        assert_eq!(parameter_value(&float_param(Some(3.0), vec![])), "3");
        assert_eq!(parameter_value(&float_param(Some(0.5), vec![])), "0.5");
    }

    #[test]
    fn bool_and_string_values_stringify() {
        let param = Parameter {
            id: "s".into(),
            name: "Sprinklered".into(),
            units: None,
            value: Some(ParameterValue::Bool(true)),
            display_options: vec![],
        };
        assert_eq!(parameter_value(&param), "true");
    }

    #[test]
    fn stringed_param_honors_decimal_places() {
        let param = ParameterType::Float(float_param(
            Some(12.5),
            vec![DisplayOptions::DecimalPlaces(1)],
        ));
        let display = stringed_param(&param).unwrap();
        assert_eq!(display.value.as_deref(), Some("12.5"));
        assert_eq!(display.id, "Q");
        assert_eq!(display.units.as_deref(), Some("kW"));
    }

    #[test]
    fn stringed_param_rejects_object_parameters() {
        let param = ParameterType::Object(serde_json::json!({}));
        assert_eq!(stringed_param(&param), None);
    }
}
