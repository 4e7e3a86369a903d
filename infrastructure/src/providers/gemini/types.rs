//! Wire types for `generateContent` and conversions to and from the ports

use postcraft_application::{CompletionRequest, GatewayError};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

// ─── Request ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tools: Vec<Tool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tool {
    pub google_search: GoogleSearch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoogleSearch {}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }

    fn system(text: &str) -> Self {
        Self {
            role: None,
            parts: vec![Part {
                text: Some(text.to_string()),
            }],
        }
    }
}

/// Body for a chat completion: system instruction plus one user turn
pub fn completion_body(request: &CompletionRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: (!request.system.is_empty()).then(|| Content::system(&request.system)),
        contents: vec![Content::user(&request.human)],
        generation_config: Some(GenerationConfig {
            temperature: request.temperature,
        }),
        tools: Vec::new(),
    }
}

/// Body for a grounded search: the instruction with the Google Search tool enabled
pub fn search_body(instruction: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: None,
        contents: vec![Content::user(instruction)],
        generation_config: None,
        tools: vec![Tool {
            google_search: GoogleSearch::default(),
        }],
    }
}

// ─── Response ────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Concatenated text of the first candidate.
///
/// Grounded answers are often split across several parts.
pub fn extract_text(response: &GenerateContentResponse) -> Result<String, GatewayError> {
    let Some(candidate) = response.candidates.first() else {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
            .map(|r| format!("prompt blocked: {}", r))
            .unwrap_or_else(|| "no candidates in response".to_string());
        return Err(GatewayError::InvalidResponse(reason));
    };

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.is_empty() {
        let reason = candidate.finish_reason.as_deref().unwrap_or("unknown");
        return Err(GatewayError::InvalidResponse(format!(
            "candidate has no text (finish reason: {})",
            reason
        )));
    }
    Ok(text)
}

/// Parse a successful response body
pub fn parse_response(body: &str) -> Result<String, GatewayError> {
    let response: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| GatewayError::InvalidResponse(format!("malformed JSON: {}", e)))?;
    extract_text(&response)
}

/// Map a non-success HTTP status and its body to a gateway error
pub fn status_error(status: StatusCode, body: &str) -> GatewayError {
    let detail = match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => match envelope.error.status {
            Some(code) => format!("{} ({})", envelope.error.message, code),
            None => envelope.error.message,
        },
        Err(_) => body.trim().to_string(),
    };

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Unauthorized(detail),
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => GatewayError::Timeout,
        _ => GatewayError::RequestFailed(format!("HTTP {}: {}", status.as_u16(), detail)),
    }
}

/// Map a transport-level failure to a gateway error
pub fn transport_error(error: &reqwest::Error) -> GatewayError {
    if error.is_timeout() {
        GatewayError::Timeout
    } else if error.is_connect() {
        GatewayError::ConnectionError(error.to_string())
    } else {
        GatewayError::RequestFailed(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use postcraft_domain::{Model, RenderedPrompt};
    use serde_json::json;

    fn completion() -> CompletionRequest {
        CompletionRequest::new(
            Model::Gemini25Flash,
            0.5,
            RenderedPrompt {
                system: "You are a trend analyst.".to_string(),
                human: "Top topics in Healthcare".to_string(),
            },
        )
    }

    #[test]
    fn test_completion_body_shape() {
        let body = serde_json::to_value(completion_body(&completion())).unwrap();
        assert_eq!(
            body,
            json!({
                "systemInstruction": {"parts": [{"text": "You are a trend analyst."}]},
                "contents": [{"role": "user", "parts": [{"text": "Top topics in Healthcare"}]}],
                "generationConfig": {"temperature": 0.5}
            })
        );
    }

    #[test]
    fn test_empty_system_is_omitted() {
        let mut request = completion();
        request.system.clear();
        let body = serde_json::to_value(completion_body(&request)).unwrap();
        assert!(body.get("systemInstruction").is_none());
    }

    #[test]
    fn test_search_body_enables_google_search() {
        let body = serde_json::to_value(search_body("Search for: fintech")).unwrap();
        assert_eq!(
            body,
            json!({
                "contents": [{"role": "user", "parts": [{"text": "Search for: fintech"}]}],
                "tools": [{"google_search": {}}]
            })
        );
    }

    #[test]
    fn test_extract_joins_parts() {
        let body = json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "AI scribes "}, {"text": "are spreading."}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"totalTokenCount": 42}
        });
        assert_eq!(
            parse_response(&body.to_string()).unwrap(),
            "AI scribes are spreading."
        );
    }

    #[test]
    fn test_blocked_prompt_is_invalid_response() {
        let body = json!({"promptFeedback": {"blockReason": "SAFETY"}});
        assert_eq!(
            parse_response(&body.to_string()),
            Err(GatewayError::InvalidResponse(
                "prompt blocked: SAFETY".to_string()
            ))
        );
    }

    #[test]
    fn test_candidate_without_text() {
        let body = json!({"candidates": [{"finishReason": "MAX_TOKENS"}]});
        let err = parse_response(&body.to_string()).unwrap_err();
        assert!(err.to_string().contains("MAX_TOKENS"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            parse_response("<html>oops</html>"),
            Err(GatewayError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_status_error_mapping() {
        let body = json!({
            "error": {"code": 403, "message": "API key not valid.", "status": "PERMISSION_DENIED"}
        })
        .to_string();
        assert_eq!(
            status_error(StatusCode::FORBIDDEN, &body),
            GatewayError::Unauthorized("API key not valid. (PERMISSION_DENIED)".to_string())
        );
        assert_eq!(
            status_error(StatusCode::GATEWAY_TIMEOUT, ""),
            GatewayError::Timeout
        );
        assert_eq!(
            status_error(StatusCode::TOO_MANY_REQUESTS, "quota exceeded\n"),
            GatewayError::RequestFailed("HTTP 429: quota exceeded".to_string())
        );
    }
}
