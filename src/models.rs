//! Frontend Models
//!
//! Data structures mirroring the backend's wire types. The backend owns
//! every entity here; the frontend only deserializes copies and, for the
//! equation commands, serializes them back unchanged.

use serde::{Deserialize, Serialize};

/// One open calculation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tab {
    pub id: String,
    pub state: TabState,
    pub saved: bool,
    pub current: bool,
    pub filename: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoCalc {
    pub id: String,
}

/// What a tab is showing: the method index, or an active calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TabState {
    Index(NoCalc),
    Method(Method),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Method {
    pub name: String,
    pub description: Option<String>,
    pub reference: Document,
    pub method_type: MethodType,
    pub quick_calc_compatible: bool,
    pub calc_sheet: Calculation,
    pub form: Form,
}

/// Identifier for a backend-implemented calculation procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MethodType {
    PD7974Part2Section7Equation1,
    PD7974Part1Section8MaximumEnclosureTemperature,
    PD7974Part1Section8HRRAtFlashover,
    BR187Chapter1Equation1,
    SFPEAlpertHeatReleaseFromTemperatureAndPosition,
    IntroductionToFireDynamicsBurningRegime,
}

/// Source document for a method. The chapter/part payloads are backend
/// detail which only round-trips through the document metadata commands,
/// so they stay opaque JSON here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Document {
    BR187(Option<serde_json::Value>),
    PD7974(Option<serde_json::Value>),
    SFPEHandbook(Option<serde_json::Value>),
    IntroductionToFireDynamics(Option<serde_json::Value>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Form {
    pub steps: Vec<FormStep>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormStep {
    pub name: String,
    pub description: String,
    pub fields: Vec<Field>,
    pub introduction: Vec<Vec<IntroComponent>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    pub name: String,
    pub value: Option<String>,
    pub touched: bool,
    pub parameter: ParameterType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum IntroComponent {
    Title(String),
    Text(String),
    Equation(CalculationComponent),
}

/// A parameter tagged with the type of value it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParameterType {
    String(Parameter),
    Float(Parameter),
    Bool(Parameter),
    Object(serde_json::Value),
}

impl ParameterType {
    /// The inner parameter, for the three scalar alternatives.
    pub fn parameter(&self) -> Option<&Parameter> {
        match self {
            ParameterType::String(p) | ParameterType::Float(p) | ParameterType::Bool(p) => Some(p),
            ParameterType::Object(_) => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.parameter().map(|p| p.id.as_str())
    }
}

/// A single named input/output value of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub name: String,
    pub units: Option<String>,
    pub value: Option<ParameterValue>,
    pub display_options: Vec<DisplayOptions>,
}

impl Parameter {
    pub fn decimal_places(&self) -> Option<u32> {
        self.display_options
            .iter()
            .map(|option| {
                let DisplayOptions::DecimalPlaces(places) = option;
                *places
            })
            .next()
    }
}

/// Untagged on the wire: the backend serializes the bare scalar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    String(String),
    Float(f64),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayOptions {
    DecimalPlaces(u32),
}

/// Backend-produced breakdown of a method's steps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub steps: Vec<Step>,
    pub stale: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub parameters: Vec<ParameterType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CalculationComponent {
    Equation(String),
    EquationWithResult(String),
    Text(String),
}

/// One entry on the method index page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Implementation {
    pub name: String,
    pub tags: Vec<String>,
    pub description: String,
    pub reference: Document,
    pub search_reference: String,
    pub method_type: MethodType,
    pub icon: Icon,
    pub colors: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    FireIcon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentImplementations {
    pub document: String,
    pub implementations: Vec<Implementation>,
}

/// Result of an update check against the release channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateInfo {
    pub version: String,
    pub available: bool,
    pub body: Option<String>,
}

/// Progress events emitted while an update downloads and installs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data")]
pub enum DownloadEvent {
    Started {
        #[serde(rename = "contentLength")]
        content_length: Option<u64>,
    },
    Progress {
        #[serde(rename = "chunkLength")]
        chunk_length: u64,
    },
    Finished,
}

/// Payload of the `validation-error` event, one entry per failing field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorEvent {
    pub field_id: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_state_is_internally_tagged() {
        let json = r#"{
            "id": "abc",
            "state": { "type": "Index", "id": "Index" },
            "saved": true,
            "current": false,
            "filename": null,
            "title": null
        }"#;
        let tab: Tab = serde_json::from_str(json).unwrap();
        assert_eq!(tab.state, TabState::Index(NoCalc { id: "Index".into() }));
    }

    #[test]
    fn parameter_value_deserializes_each_scalar() {
        let float: Parameter = serde_json::from_str(
            r#"{"id":"Q","name":"Heat release rate","units":"kW","value":3.5,"display_options":[]}"#,
        )
        .unwrap();
        assert_eq!(float.value, Some(ParameterValue::Float(3.5)));

        let string: Parameter = serde_json::from_str(
            r#"{"id":"r","name":"Regime","units":null,"value":"ventilation","display_options":[]}"#,
        )
        .unwrap();
        assert_eq!(
            string.value,
            Some(ParameterValue::String("ventilation".into()))
        );

        let boolean: Parameter = serde_json::from_str(
            r#"{"id":"s","name":"Sprinklered","units":null,"value":true,"display_options":[]}"#,
        )
        .unwrap();
        assert_eq!(boolean.value, Some(ParameterValue::Bool(true)));

        let null: Parameter = serde_json::from_str(
            r#"{"id":"T","name":"Temperature","units":"C","value":null,"display_options":[]}"#,
        )
        .unwrap();
        assert_eq!(null.value, None);
    }

    #[test]
    fn parameter_type_is_externally_tagged() {
        let json = r#"{"Float":{"id":"Q","name":"HRR","units":"kW","value":null,"display_options":[{"DecimalPlaces":2}]}}"#;
        let param: ParameterType = serde_json::from_str(json).unwrap();
        let inner = param.parameter().unwrap();
        assert_eq!(inner.decimal_places(), Some(2));
        assert_eq!(param.id(), Some("Q"));
    }

    #[test]
    fn download_event_uses_event_and_data_tags() {
        let started: DownloadEvent =
            serde_json::from_str(r#"{"event":"Started","data":{"contentLength":1000}}"#).unwrap();
        assert_eq!(
            started,
            DownloadEvent::Started {
                content_length: Some(1000)
            }
        );

        let progress: DownloadEvent =
            serde_json::from_str(r#"{"event":"Progress","data":{"chunkLength":128}}"#).unwrap();
        assert_eq!(progress, DownloadEvent::Progress { chunk_length: 128 });

        let finished: DownloadEvent = serde_json::from_str(r#"{"event":"Finished"}"#).unwrap();
        assert_eq!(finished, DownloadEvent::Finished);
    }

    #[test]
    fn validation_error_payload_is_a_field_keyed_list() {
        let payload = r#"[{"field_id":"Q","error":"Must be 0 or more"}]"#;
        let errors: Vec<ValidationErrorEvent> = serde_json::from_str(payload).unwrap();
        assert_eq!(errors[0].field_id, "Q");
        assert_eq!(errors[0].error, "Must be 0 or more");
    }

    #[test]
    fn calculation_component_variants_round_trip() {
        let json = r#"[{"Text":"where"},{"Equation":"Q = m c"},{"EquationWithResult":"Q"}]"#;
        let row: Vec<CalculationComponent> = serde_json::from_str(json).unwrap();
        assert_eq!(row.len(), 3);
        assert!(matches!(row[0], CalculationComponent::Text(_)));
        assert!(matches!(
            row[2],
            CalculationComponent::EquationWithResult(_)
        ));
    }
}
