// Gemini generateContent type definitions
// Author: kelexine (https://github.com/kelexine)

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Gemini `generateContent` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    /// A single user turn; the relay never sends history.
    pub contents: Vec<Content>,
}

/// One turn of content in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// Individual part of content in a Gemini request.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Part {
    /// Text content part.
    Text { text: String },

    /// Inline data (images).
    InlineData { inline_data: InlineData },
}

/// Inline image data for vision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String, // base64 encoded
}

/// Gemini `generateContent` response.
///
/// Only `candidates[0].content.parts[0].text` is read. Every other element
/// stays an untyped [`Value`], so oddities elsewhere in the body cannot
/// spoil an otherwise usable answer.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Value>,
}

/// Response candidate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Absent when the candidate was blocked before producing content.
    #[serde(default)]
    pub content: Option<CandidateContent>,
    #[serde(default)]
    pub finish_reason: Option<Value>,
}

/// Content of a response candidate
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Value>,
}

/// A response part. Non-text parts (function calls, inline data) have no `text`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// The first candidate, typed. `None` if absent or malformed.
    pub fn first_candidate(&self) -> Option<Candidate> {
        Candidate::deserialize(self.candidates.first()?).ok()
    }

    /// `candidates[0].content.parts[0].text`, if every step of the path exists.
    pub fn first_text(&self) -> Option<String> {
        let candidate = self.first_candidate()?;
        let first_part = candidate.content?.parts.into_iter().next()?;
        ResponsePart::deserialize(first_part).ok()?.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inline_data_serializes_snake_case() {
        let part = Part::InlineData {
            inline_data: InlineData {
                mime_type: "image/jpeg".to_string(),
                data: "abc".to_string(),
            },
        };

        let value = serde_json::to_value(&part).unwrap();
        assert_eq!(value, json!({"inline_data": {"mime_type": "image/jpeg", "data": "abc"}}));
    }

    #[test]
    fn test_first_text_ignores_extra_structure() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {
                    "content": {"role": "model", "parts": [{"text": "Hello plant"}, {"text": "ignored"}]},
                    "finishReason": "STOP",
                    "safetyRatings": []
                },
                {"content": {"parts": [{"text": "second candidate"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 4}
        }))
        .unwrap();

        assert_eq!(resp.first_text().as_deref(), Some("Hello plant"));
        let finish_reason = resp.first_candidate().unwrap().finish_reason;
        assert_eq!(finish_reason, Some(json!("STOP")));
    }

    #[test]
    fn test_first_text_missing_pieces() {
        let empty: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert_eq!(empty.first_text(), None);

        let blocked: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": [{"finishReason": "SAFETY"}]})).unwrap();
        assert_eq!(blocked.first_text(), None);

        let no_text: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"functionCall": {"name": "f", "args": {}}}]}}]
        }))
        .unwrap();
        assert_eq!(no_text.first_text(), None);
    }

    #[test]
    fn test_first_text_tolerates_odd_siblings() {
        let odd_part: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "Hello plant"}, {"text": {"nested": true}}]}}]
        }))
        .unwrap();
        assert_eq!(odd_part.first_text().as_deref(), Some("Hello plant"));

        let odd_candidate: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [
                {"content": {"parts": [{"text": "Hello plant"}]}, "finishReason": 1},
                {"content": "unexpected"}
            ]
        }))
        .unwrap();
        assert_eq!(odd_candidate.first_text().as_deref(), Some("Hello plant"));
    }

    #[test]
    fn test_first_text_rejects_non_string_text() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": ["not", "a", "string"]}]}}]
        }))
        .unwrap();
        assert_eq!(resp.first_text(), None);
    }
}
