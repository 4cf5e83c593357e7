//! Dynamic form fields configured per sub-department.
//!
//! A sub-department carries an ordered list of [`FieldDescriptor`]s. The data
//! entry and data edit screens turn them into concrete inputs with
//! [`render_inputs`] and check user input with [`validate_inputs`] before any
//! request leaves the browser.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Field name -> value as typed by the user.
pub type FieldValues = BTreeMap<String, String>;

pub const NUMERIC_PATTERN: &str = "[0-9]*";
pub const ALPHANUMERIC_PATTERN: &str = r"[a-zA-Z0-9\s]*";
pub const ALPHANUMERIC_TITLE: &str = "Only letters, numbers, and spaces are allowed";

// ============================================================================
// Descriptor
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldDataType {
    #[default]
    Alphanumeric,
    Numeric,
    Date,
}

impl FieldDataType {
    pub const ALL: [FieldDataType; 3] = [
        FieldDataType::Alphanumeric,
        FieldDataType::Numeric,
        FieldDataType::Date,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldDataType::Alphanumeric => "alphanumeric",
            FieldDataType::Numeric => "numeric",
            FieldDataType::Date => "date",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldDataType::Alphanumeric => "Alphanumeric",
            FieldDataType::Numeric => "Numeric",
            FieldDataType::Date => "Date",
        }
    }
}

/// Unknown type names render as free text.
impl From<String> for FieldDataType {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "numeric" => FieldDataType::Numeric,
            "date" => FieldDataType::Date,
            _ => FieldDataType::Alphanumeric,
        }
    }
}

impl From<FieldDataType> for String {
    fn from(value: FieldDataType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldRequirement {
    Essential,
    #[default]
    Optional,
}

impl FieldRequirement {
    pub const ALL: [FieldRequirement; 2] = [FieldRequirement::Optional, FieldRequirement::Essential];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRequirement::Essential => "essential",
            FieldRequirement::Optional => "optional",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FieldRequirement::Essential => "Essential",
            FieldRequirement::Optional => "Optional",
        }
    }
}

impl From<String> for FieldRequirement {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case("essential") {
            FieldRequirement::Essential
        } else {
            FieldRequirement::Optional
        }
    }
}

impl From<FieldRequirement> for String {
    fn from(value: FieldRequirement) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub data_type: FieldDataType,
    #[serde(default)]
    pub requirement: FieldRequirement,
    #[serde(default)]
    pub verify: bool,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, data_type: FieldDataType, requirement: FieldRequirement) -> Self {
        Self {
            name: name.into(),
            data_type,
            requirement,
            verify: false,
        }
    }

    pub fn is_required(&self) -> bool {
        self.requirement == FieldRequirement::Essential
    }

    /// Form control name used by the edit form and the search filters.
    pub fn input_name(&self) -> String {
        format!("field_{}", self.name)
    }
}

/// Response of `GET /api/data-entry/get_subdepartment_fields/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubDepartmentFields {
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

// ============================================================================
// Rendering
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
}

impl InputKind {
    /// Value of the HTML `type` attribute.
    pub fn html_type(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Date => "date",
        }
    }
}

/// Everything needed to draw one dynamic input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputSpec {
    pub field: String,
    pub input_name: String,
    pub label: String,
    pub kind: InputKind,
    pub pattern: Option<&'static str>,
    pub title: Option<&'static str>,
    pub required: bool,
    pub invalid_message: String,
    pub value: String,
}

impl InputSpec {
    fn from_descriptor(descriptor: &FieldDescriptor, value: String) -> Self {
        let (kind, pattern, title) = match descriptor.data_type {
            FieldDataType::Numeric => (InputKind::Number, Some(NUMERIC_PATTERN), None),
            FieldDataType::Date => (InputKind::Date, None, None),
            FieldDataType::Alphanumeric => {
                (InputKind::Text, Some(ALPHANUMERIC_PATTERN), Some(ALPHANUMERIC_TITLE))
            }
        };
        let required = descriptor.is_required();
        Self {
            field: descriptor.name.clone(),
            input_name: descriptor.input_name(),
            label: if required {
                format!("{} *", descriptor.name)
            } else {
                descriptor.name.clone()
            },
            kind,
            pattern,
            title,
            required,
            invalid_message: format!("Please enter a valid {}", descriptor.name),
            value,
        }
    }
}

/// One input per descriptor, in descriptor order.
///
/// `values` pre-populates inputs in the edit context; missing keys render empty.
pub fn render_inputs(descriptors: &[FieldDescriptor], values: &FieldValues) -> Vec<InputSpec> {
    descriptors
        .iter()
        .map(|d| InputSpec::from_descriptor(d, values.get(&d.name).cloned().unwrap_or_default()))
        .collect()
}

/// Search filter inputs for the data edit screen. Filters are never required
/// and carry no pattern; dates keep the date picker.
pub fn filter_inputs(descriptors: &[FieldDescriptor]) -> Vec<InputSpec> {
    descriptors
        .iter()
        .map(|d| {
            let kind = match d.data_type {
                FieldDataType::Date => InputKind::Date,
                _ => InputKind::Text,
            };
            InputSpec {
                field: d.name.clone(),
                input_name: d.input_name(),
                label: d.name.clone(),
                kind,
                pattern: None,
                title: None,
                required: false,
                invalid_message: format!("Please enter a valid {}", d.name),
                value: String::new(),
            }
        })
        .collect()
}

// ============================================================================
// Validation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Check one value against its descriptor. Empty optional values always pass.
pub fn validate_value(descriptor: &FieldDescriptor, value: &str) -> Result<(), String> {
    let value = value.trim();
    if value.is_empty() {
        return if descriptor.is_required() {
            Err(format!("{} is required", descriptor.name))
        } else {
            Ok(())
        };
    }

    let valid = match descriptor.data_type {
        FieldDataType::Numeric => value.chars().all(|c| c.is_ascii_digit()),
        FieldDataType::Alphanumeric => value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace()),
        FieldDataType::Date => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
    };

    if valid {
        Ok(())
    } else {
        Err(format!("Please enter a valid {}", descriptor.name))
    }
}

/// Validate every field and collect the submit payload.
///
/// The payload keeps only non-empty values, trimmed.
pub fn validate_inputs(
    descriptors: &[FieldDescriptor],
    values: &FieldValues,
) -> Result<FieldValues, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut payload = FieldValues::new();

    for descriptor in descriptors {
        let raw = values.get(&descriptor.name).map(String::as_str).unwrap_or("");
        match validate_value(descriptor, raw) {
            Ok(()) => {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    payload.insert(descriptor.name.clone(), trimmed.to_string());
                }
            }
            Err(message) => errors.push(FieldError {
                field: descriptor.name.clone(),
                message,
            }),
        }
    }

    if errors.is_empty() {
        Ok(payload)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn amount() -> FieldDescriptor {
        FieldDescriptor::new("Amount", FieldDataType::Numeric, FieldRequirement::Essential)
    }

    #[test]
    fn test_descriptor_parsing_defaults() {
        let fields: SubDepartmentFields = serde_json::from_value(json!({
            "fields": [
                {"name": "Amount", "data_type": "numeric", "requirement": "essential"},
                {"name": "Memo", "data_type": "currency", "requirement": "sometimes", "verify": true},
                {"name": "Day", "data_type": "Date"}
            ]
        }))
        .unwrap();
        assert_eq!(fields.fields[0], amount());
        assert_eq!(fields.fields[1].data_type, FieldDataType::Alphanumeric);
        assert_eq!(fields.fields[1].requirement, FieldRequirement::Optional);
        assert!(fields.fields[1].verify);
        assert_eq!(fields.fields[2].data_type, FieldDataType::Date);
    }

    #[test]
    fn test_descriptor_serializes_as_strings() {
        let value = serde_json::to_value(amount()).unwrap();
        assert_eq!(value["data_type"], "numeric");
        assert_eq!(value["requirement"], "essential");
    }

    #[test]
    fn test_one_input_per_descriptor() {
        let descriptors = vec![
            amount(),
            FieldDescriptor::new("Ref", FieldDataType::Alphanumeric, FieldRequirement::Optional),
            FieldDescriptor::new("Posted", FieldDataType::Date, FieldRequirement::Essential),
        ];
        let inputs = render_inputs(&descriptors, &FieldValues::new());
        assert_eq!(inputs.len(), descriptors.len());
        for (input, descriptor) in inputs.iter().zip(&descriptors) {
            assert_eq!(input.field, descriptor.name);
            assert_eq!(input.required, descriptor.requirement == FieldRequirement::Essential);
        }
        assert_eq!(inputs[0].kind.html_type(), "number");
        assert_eq!(inputs[0].pattern, Some(NUMERIC_PATTERN));
        assert_eq!(inputs[0].label, "Amount *");
        assert_eq!(inputs[1].title, Some(ALPHANUMERIC_TITLE));
        assert_eq!(inputs[2].kind, InputKind::Date);
        assert_eq!(inputs[2].pattern, None);
    }

    #[test]
    fn test_render_is_idempotent() {
        let descriptors = vec![amount()];
        let first = render_inputs(&descriptors, &FieldValues::new());
        let second = render_inputs(&descriptors, &FieldValues::new());
        assert_eq!(first, second);
    }

    #[test]
    fn test_edit_context_prefills_values() {
        let descriptors = vec![
            amount(),
            FieldDescriptor::new("Ref", FieldDataType::Alphanumeric, FieldRequirement::Optional),
        ];
        let mut values = FieldValues::new();
        values.insert("Amount".into(), "150".into());
        let inputs = render_inputs(&descriptors, &values);
        assert_eq!(inputs[0].value, "150");
        assert_eq!(inputs[0].input_name, "field_Amount");
        assert_eq!(inputs[1].value, "");
    }

    #[test]
    fn test_empty_essential_numeric_blocks_submit() {
        let errors = validate_inputs(&[amount()], &FieldValues::new()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "Amount");
    }

    #[test]
    fn test_type_checks() {
        let ref_field = FieldDescriptor::new("Ref", FieldDataType::Alphanumeric, FieldRequirement::Optional);
        let day = FieldDescriptor::new("Day", FieldDataType::Date, FieldRequirement::Optional);
        assert!(validate_value(&amount(), "12a").is_err());
        assert!(validate_value(&amount(), "1200").is_ok());
        assert!(validate_value(&ref_field, "INV 42").is_ok());
        assert_eq!(
            validate_value(&ref_field, "INV-42"),
            Err("Please enter a valid Ref".to_string())
        );
        assert!(validate_value(&day, "2024-02-30").is_err());
        assert!(validate_value(&day, "2024-02-29").is_ok());
        assert!(validate_value(&day, "").is_ok());
    }

    #[test]
    fn test_payload_omits_empty_optional_values() {
        let descriptors = vec![
            amount(),
            FieldDescriptor::new("Ref", FieldDataType::Alphanumeric, FieldRequirement::Optional),
        ];
        let mut values = FieldValues::new();
        values.insert("Amount".into(), " 99 ".into());
        values.insert("Ref".into(), "   ".into());
        let payload = validate_inputs(&descriptors, &values).unwrap();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("Amount").map(String::as_str), Some("99"));
    }

    #[test]
    fn test_filter_inputs_are_optional() {
        let inputs = filter_inputs(&[amount()]);
        assert!(!inputs[0].required);
        assert_eq!(inputs[0].kind, InputKind::Text);
        assert_eq!(inputs[0].input_name, "field_Amount");
    }
}
