use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

/// Backend-side extraction strategy. Opaque to us beyond its two wire values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    #[default]
    GptFitz,
    Mistral,
}

impl ModelType {
    pub const ALL: [ModelType; 2] = [ModelType::GptFitz, ModelType::Mistral];

    pub fn as_str(self) -> &'static str {
        match self {
            ModelType::GptFitz => "gpt_fitz",
            ModelType::Mistral => "mistral",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ModelType::GptFitz => "GPT+Fitz",
            ModelType::Mistral => "Mistral",
        }
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownModelType(pub String);

impl fmt::Display for UnknownModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown model type '{}'", self.0)
    }
}

impl std::error::Error for UnknownModelType {}

impl FromStr for ModelType {
    type Err = UnknownModelType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "gpt_fitz" => Ok(ModelType::GptFitz),
            "mistral" => Ok(ModelType::Mistral),
            other => Err(UnknownModelType(other.to_string())),
        }
    }
}

/// A PDF upload as received from the browser, forwarded to the backend as multipart.
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub model_type: ModelType,
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub user_prompt: String,
}

// ────────────────────────────────────────────────────────────────────────────
// ResumeRecord
// ────────────────────────────────────────────────────────────────────────────

/// A resume as returned by the backend search and detail endpoints.
///
/// No field is guaranteed. Deserialization is lenient: scalars of the wrong
/// JSON type are stringified, and collections of the wrong shape are dropped
/// instead of failing the whole record. Map key order follows the backend's.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    #[serde(default, deserialize_with = "lenient_id")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone_number: Option<String>,
    /// Category → list of skills, or a single scalar.
    #[serde(default, deserialize_with = "lenient_map")]
    pub skills: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub work_experience: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub education: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub certifications: Option<Vec<Value>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub projects: Option<Vec<Value>>,
    /// String or number depending on the extraction model.
    #[serde(default)]
    pub gpa: Option<Value>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub model_type: Option<String>,
    /// Set instead of the resume fields when the search found nothing.
    #[serde(default, deserialize_with = "lenient_string")]
    pub message: Option<String>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    // Falsy values (null, false, 0, "") count as absent.
    Ok(match Value::deserialize(deserializer)? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_map<'de, D>(deserializer: D) -> Result<Option<Map<String, Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => Some(map),
        // A bare list of skills gets positional keys, same as iterating an array's entries.
        Value::Array(items) => Some(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (i.to_string(), v))
                .collect(),
        ),
        _ => None,
    })
}

fn lenient_list<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => Some(items),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_model_type_wire_values() {
        assert_eq!(ModelType::default(), ModelType::GptFitz);
        assert_eq!("mistral".parse::<ModelType>().unwrap(), ModelType::Mistral);
        assert_eq!(" gpt_fitz ".parse::<ModelType>().unwrap(), ModelType::GptFitz);
        assert_eq!(
            serde_json::to_value(ModelType::GptFitz).unwrap(),
            json!("gpt_fitz")
        );
        assert!("Mistral".parse::<ModelType>().is_err());
    }

    #[test]
    fn test_search_request_serializes_user_prompt() {
        let body = serde_json::to_value(SearchRequest {
            user_prompt: "java developer".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "user_prompt": "java developer" }));
    }

    #[test]
    fn test_sparse_record_deserializes() {
        let record: ResumeRecord =
            serde_json::from_value(json!({ "name": "Jane Doe", "email": "jane@x.com" })).unwrap();
        assert_eq!(record.name.as_deref(), Some("Jane Doe"));
        assert_eq!(record.email.as_deref(), Some("jane@x.com"));
        assert!(record.phone_number.is_none());
        assert!(record.skills.is_none());
        assert!(record.work_experience.is_none());
        assert!(record.gpa.is_none());
    }

    #[test]
    fn test_record_tolerates_wrong_shapes() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "id": "12",
            "name": 42,
            "phone_number": null,
            "skills": ["Go", "Rust"],
            "education": "none",
            "gpa": 3.8,
            "unexpected": { "nested": true }
        }))
        .unwrap();
        assert_eq!(record.id, Some(12));
        assert_eq!(record.name.as_deref(), Some("42"));
        assert!(record.phone_number.is_none());
        let skills = record.skills.unwrap();
        assert_eq!(skills.get("0"), Some(&json!("Go")));
        assert_eq!(skills.get("1"), Some(&json!("Rust")));
        assert!(record.education.is_none());
        assert_eq!(record.gpa, Some(json!(3.8)));
    }

    #[test]
    fn test_falsy_text_fields_are_absent() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "name": false,
            "email": 0,
            "phone_number": "",
            "model_type": 0.0,
            "message": true
        }))
        .unwrap();
        assert!(record.name.is_none());
        assert!(record.email.is_none());
        assert!(record.phone_number.is_none());
        assert!(record.model_type.is_none());
        assert_eq!(record.message.as_deref(), Some("true"));
    }

    #[test]
    fn test_record_preserves_key_order() {
        let record: ResumeRecord = serde_json::from_str(
            r#"{"skills": {"Tools": "Git", "Languages": ["Go"], "Cloud": ["AWS"]}}"#,
        )
        .unwrap();
        let keys: Vec<_> = record.skills.unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["Tools", "Languages", "Cloud"]);
    }

    #[test]
    fn test_no_match_message() {
        let record: ResumeRecord = serde_json::from_value(json!({
            "message": "No suitable matches found for your preferences"
        }))
        .unwrap();
        assert_eq!(
            record.message.as_deref(),
            Some("No suitable matches found for your preferences")
        );
        assert!(record.name.is_none());
    }
}
