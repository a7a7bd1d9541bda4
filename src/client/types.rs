//! Wire types for the Gemini `generateContent` endpoint.
//!
//! Only the fields this service reads are modelled. Response fields are all
//! optional so that a well-formed but unexpected body can be reported as a bad
//! response with a precise reason instead of a generic decode error.

use serde::{Deserialize, Serialize};

/// Request body: `{"contents":[{"parts":[{"text": ...}]}]}`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Serialize)]
pub struct RequestContent {
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Serialize)]
pub struct RequestPart {
    pub text: String,
}

impl GenerateContentRequest {
    /// Single-turn request carrying one text part.
    pub fn from_prompt(prompt: &str) -> Self {
        Self {
            contents: vec![RequestContent {
                parts: vec![RequestPart {
                    text: prompt.to_string(),
                }],
            }],
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
    /// Present when the prompt itself was blocked by safety filters
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Option<Vec<ResponsePart>>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<u32>,
    #[serde(default)]
    pub candidates_token_count: Option<u32>,
    #[serde(default)]
    pub total_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Text of `candidates[0].content.parts[0]`, or the reason it is missing.
    pub fn first_text(self) -> Result<String, String> {
        let block_reason = self.prompt_feedback.and_then(|f| f.block_reason);

        let candidate = match self.candidates.and_then(|c| c.into_iter().next()) {
            Some(candidate) => candidate,
            None => {
                return Err(match block_reason {
                    Some(reason) => format!("response has no candidates (prompt blocked: {})", reason),
                    None => "response has no candidates".to_string(),
                })
            }
        };

        let finish_reason = candidate.finish_reason;
        let part = candidate
            .content
            .and_then(|content| content.parts)
            .and_then(|parts| parts.into_iter().next());

        match part {
            Some(ResponsePart { text: Some(text) }) => Ok(text),
            Some(ResponsePart { text: None }) => Err("first part has no text".to_string()),
            None => Err(format!(
                "first candidate has no content parts (finish reason: {})",
                finish_reason.as_deref().unwrap_or("unknown")
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GenerateContentResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_request_shape() {
        let body = serde_json::to_value(GenerateContentRequest::from_prompt("hello")).unwrap();
        assert_eq!(body, json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_first_text_uses_first_candidate_only() {
        let response = parse(json!({
            "candidates": [
                {"content": {"parts": [{"text": "first"}, {"text": "ignored"}], "role": "model"}},
                {"content": {"parts": [{"text": "second"}]}}
            ]
        }));
        assert_eq!(response.first_text().unwrap(), "first");
    }

    #[test]
    fn test_blocked_prompt_reports_reason() {
        let response = parse(json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }));
        let reason = response.first_text().unwrap_err();
        assert!(reason.contains("SAFETY"), "{}", reason);
    }

    #[test]
    fn test_empty_candidate_list() {
        let response = parse(json!({"candidates": []}));
        assert_eq!(response.first_text().unwrap_err(), "response has no candidates");
    }

    #[test]
    fn test_candidate_without_content_reports_finish_reason() {
        let response = parse(json!({"candidates": [{"finishReason": "SAFETY"}]}));
        let reason = response.first_text().unwrap_err();
        assert!(reason.contains("finish reason: SAFETY"), "{}", reason);
    }

    #[test]
    fn test_part_without_text() {
        let response = parse(json!({
            "candidates": [{"content": {"parts": [{"inlineData": {}}]}}]
        }));
        assert_eq!(response.first_text().unwrap_err(), "first part has no text");
    }
}
