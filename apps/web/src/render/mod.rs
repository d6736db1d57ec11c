//! Display model for a `ResumeRecord`.
//!
//! Everything the result page shows is computed here so the template stays a
//! dumb loop. Missing or falsy values become `N/A`; list entries are shown key
//! by key in the backend's order, whatever their shape.

use std::fmt;

use serde_json::{Map, Value};

use crate::models::resume::ResumeRecord;

pub const NOT_AVAILABLE: &str = "N/A";

/// One `key: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

impl fmt::Display for KeyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

/// A list-valued field such as work experience. Empty `entries` renders as `N/A`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: &'static str,
    pub entries: Vec<Vec<KeyValue>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeView {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gpa: String,
    pub model_type: String,
    pub notice: Option<String>,
    /// Empty renders as `N/A`.
    pub skills: Vec<KeyValue>,
    pub sections: Vec<Section>,
}

impl ResumeView {
    pub fn from_record(record: &ResumeRecord) -> Self {
        Self {
            name: field_or_na(record.name.as_deref()),
            email: field_or_na(record.email.as_deref()),
            phone: field_or_na(record.phone_number.as_deref()),
            gpa: value_or_na(record.gpa.as_ref()),
            model_type: field_or_na(record.model_type.as_deref()),
            notice: record.message.clone().filter(|m| !m.trim().is_empty()),
            skills: record.skills.as_ref().map(skill_lines).unwrap_or_default(),
            sections: vec![
                section("Work Experience", record.work_experience.as_deref()),
                section("Education", record.education.as_deref()),
                section("Certifications", record.certifications.as_deref()),
                section("Projects", record.projects.as_deref()),
            ],
        }
    }
}

/// Renders an optional text field, or `N/A` when absent or empty.
/// Falsy JSON values are already dropped to `None` on deserialize.
pub fn field_or_na(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Renders an optional JSON scalar, or `N/A` when absent or falsy.
pub fn value_or_na(value: Option<&Value>) -> String {
    match value {
        Some(v) if !is_falsy(v) => display_value(v),
        _ => NOT_AVAILABLE.to_string(),
    }
}

pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Text shown for a single value: strings verbatim, arrays joined with ", ",
/// nested objects as compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(display_value)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(_) => value.to_string(),
    }
}

fn skill_lines(skills: &Map<String, Value>) -> Vec<KeyValue> {
    skills
        .iter()
        .map(|(category, items)| KeyValue {
            key: category.clone(),
            value: display_value(items),
        })
        .collect()
}

fn section(title: &'static str, items: Option<&[Value]>) -> Section {
    Section {
        title,
        entries: items
            .unwrap_or_default()
            .iter()
            .map(entry_lines)
            .collect(),
    }
}

fn entry_lines(entry: &Value) -> Vec<KeyValue> {
    match entry {
        Value::Object(fields) => fields
            .iter()
            .map(|(key, value)| KeyValue {
                key: key.clone(),
                value: display_value(value),
            })
            .collect(),
        // Scalars in a list (e.g. certification names) have no keys of their own.
        other => vec![KeyValue {
            key: "value".to_string(),
            value: display_value(other),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> ResumeRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sparse_record_falls_back_to_na() {
        let view = ResumeView::from_record(&record(json!({
            "name": "Jane Doe",
            "email": "jane@x.com"
        })));

        assert_eq!(view.name, "Jane Doe");
        assert_eq!(view.email, "jane@x.com");
        assert_eq!(view.phone, NOT_AVAILABLE);
        assert_eq!(view.gpa, NOT_AVAILABLE);
        assert_eq!(view.model_type, NOT_AVAILABLE);
        assert!(view.skills.is_empty());
        assert_eq!(view.sections.len(), 4);
        assert!(view.sections.iter().all(|s| s.entries.is_empty()));
    }

    #[test]
    fn test_skills_line_joins_list() {
        let view = ResumeView::from_record(&record(json!({
            "skills": { "Languages": ["Go", "Rust"], "Tools": "Git" }
        })));

        let lines: Vec<String> = view.skills.iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["Languages: Go, Rust", "Tools: Git"]);
    }

    #[test]
    fn test_work_experience_entry_keeps_key_order() {
        let view = ResumeView::from_record(&record(json!({
            "work_experience": [{ "title": "Engineer", "years": "2019-2022" }]
        })));

        let work = &view.sections[0];
        assert_eq!(work.title, "Work Experience");
        assert_eq!(work.entries.len(), 1);
        let lines: Vec<String> = work.entries[0].iter().map(ToString::to_string).collect();
        assert_eq!(lines, vec!["title: Engineer", "years: 2019-2022"]);
    }

    #[test]
    fn test_falsy_scalars() {
        assert!(is_falsy(&json!(null)));
        assert!(is_falsy(&json!("")));
        assert!(is_falsy(&json!(0)));
        assert!(is_falsy(&json!(false)));
        assert!(!is_falsy(&json!("3.5")));
        assert!(!is_falsy(&json!([])));
        assert_eq!(value_or_na(Some(&json!(3.8))), "3.8");
        assert_eq!(value_or_na(Some(&json!(0))), NOT_AVAILABLE);
        assert_eq!(field_or_na(Some("")), NOT_AVAILABLE);
    }

    #[test]
    fn test_falsy_text_fields_render_na() {
        let view = ResumeView::from_record(&record(json!({
            "name": false,
            "email": 0,
            "phone_number": false,
            "model_type": 0,
            "gpa": false
        })));

        assert_eq!(view.name, NOT_AVAILABLE);
        assert_eq!(view.email, NOT_AVAILABLE);
        assert_eq!(view.phone, NOT_AVAILABLE);
        assert_eq!(view.model_type, NOT_AVAILABLE);
        assert_eq!(view.gpa, NOT_AVAILABLE);
    }

    #[test]
    fn test_display_value_shapes() {
        assert_eq!(display_value(&json!("plain")), "plain");
        assert_eq!(display_value(&json!(["a", 1, true])), "a, 1, true");
        assert_eq!(display_value(&json!({ "k": "v" })), r#"{"k":"v"}"#);
        assert_eq!(display_value(&json!(null)), "");
    }

    #[test]
    fn test_scalar_list_entries_and_notice() {
        let view = ResumeView::from_record(&record(json!({
            "certifications": ["AWS SAA"],
            "message": "No suitable matches found for your preferences"
        })));

        assert_eq!(
            view.sections[2].entries,
            vec![vec![KeyValue {
                key: "value".to_string(),
                value: "AWS SAA".to_string()
            }]]
        );
        assert_eq!(
            view.notice.as_deref(),
            Some("No suitable matches found for your preferences")
        );
    }
}
