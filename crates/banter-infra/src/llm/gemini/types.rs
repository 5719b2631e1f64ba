//! Gemini `generateContent` API types.
//!
//! These are Gemini-specific request/response structures used for HTTP
//! communication with the generative-language endpoint. The wire format is
//! camelCase throughout.

use serde::{Deserialize, Serialize};

/// Request body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
    pub safety_settings: Vec<SafetySetting>,
}

/// One turn of content in the request.
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

/// A single text part.
#[derive(Debug, Clone, Serialize)]
pub struct Part {
    pub text: String,
}

/// Sampling configuration. These values are constants of the service, not
/// user-configurable.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub max_output_tokens: u32,
}

impl GenerationConfig {
    /// The fixed configuration sent with every request.
    pub fn fixed() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 1024,
        }
    }
}

/// A single safety filter entry.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetySetting {
    pub category: String,
    pub threshold: String,
}

impl SafetySetting {
    /// The fixed safety filters sent with every request.
    pub fn defaults() -> Vec<Self> {
        const BLOCK_MEDIUM: &str = "BLOCK_MEDIUM_AND_ABOVE";
        vec![
            Self {
                category: "HARM_CATEGORY_HARASSMENT".to_string(),
                threshold: BLOCK_MEDIUM.to_string(),
            },
            Self {
                category: "HARM_CATEGORY_HATE_SPEECH".to_string(),
                threshold: BLOCK_MEDIUM.to_string(),
            },
        ]
    }
}

// ---------------------------------------------------------------------------
// Response types
//
// Every field is optional or defaulted: the endpoint omits `candidates`
// entirely when generation is blocked, and parts may carry non-text payloads
// with no `text` field.
// ---------------------------------------------------------------------------

/// Response body for `models/{model}:generateContent`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// One generated response option.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<CandidateContent>,
}

/// The content of a candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

/// A part of a candidate's content.
#[derive(Debug, Clone, Deserialize)]
pub struct CandidatePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Extract the first candidate's text: non-blank part texts joined with
    /// newlines and trimmed. Returns an empty string when there is nothing
    /// usable.
    pub fn joined_text(&self) -> String {
        let Some(content) = self.candidates.first().and_then(|c| c.content.as_ref()) else {
            return String::new();
        };

        content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .filter(|text| !text.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_wire_shape() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Hello".to_string(),
                }],
            }],
            generation_config: GenerationConfig::fixed(),
            safety_settings: SafetySetting::defaults(),
        };

        let json_str = serde_json::to_string(&request).unwrap();
        assert!(json_str.contains("\"contents\""));
        assert!(json_str.contains("\"generationConfig\""));
        assert!(json_str.contains("\"maxOutputTokens\":1024"));
        assert!(json_str.contains("\"topK\":40"));
        assert!(json_str.contains("\"topP\":0.95"));
        assert!(json_str.contains("\"safetySettings\""));
        assert!(json_str.contains("HARM_CATEGORY_HATE_SPEECH"));
    }

    #[test]
    fn test_joined_text_single_part() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Hi there"}]}}]}"#;
        let decoded: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.joined_text(), "Hi there");
    }

    #[test]
    fn test_joined_text_joins_parts_and_skips_blanks() {
        let body = r#"{"candidates":[{"content":{"parts":[
            {"text":"First line "},
            {"text":"   "},
            {"inlineData":{"mimeType":"image/png"}},
            {"text":"Second line"}
        ]}}]}"#;
        let decoded: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(decoded.joined_text(), "First line \nSecond line");
    }

    #[test]
    fn test_joined_text_empty_on_no_candidates() {
        let decoded: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(decoded.joined_text(), "");

        let blocked = r#"{"candidates":[{"finishReason":"SAFETY"}]}"#;
        let decoded: GenerateContentResponse = serde_json::from_str(blocked).unwrap();
        assert_eq!(decoded.joined_text(), "");
    }
}
