//! OpenAI Responses API client for the chat assistant.
//!
//! The persona prompt and user utterance travel concatenated in the single
//! `input` field. Reply extraction tolerates any structural mismatch: missing
//! keys or malformed JSON degrade to fixed fallback strings, never an error.

use serde::{Deserialize, Serialize};

use super::persona::PERSONA_PROMPT;
use super::ChatError;

/// Fixed fallback when the response structure holds no reply text.
pub const NO_REPLY_FALLBACK: &str = "답변을 생성하지 못했습니다.";

/// Sends one user utterance and returns the assistant's reply text.
pub trait ChatGenerate {
    fn send(&self, user_text: &str) -> Result<String, ChatError>;
}

/// Blocking client for `POST {base}/v1/responses`.
pub struct OpenAiChatClient {
    base_url: String,
    api_key: String,
    model: String,
    client: reqwest::blocking::Client,
}

impl OpenAiChatClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Client for the production endpoint with the stock persona model.
    pub fn production() -> Self {
        Self::new(
            crate::config::CHAT_BASE_URL,
            crate::config::chat_api_key(),
            crate::config::CHAT_MODEL,
        )
    }
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: String,
}

#[derive(Deserialize, Default)]
struct ResponsesBody {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize, Default)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentItem>,
}

#[derive(Deserialize, Default)]
struct ContentItem {
    #[serde(default)]
    text: String,
}

/// Extract the first text segment from the nested response structure.
///
/// Missing `output`/`content` keys or an empty text yield the fixed
/// no-reply fallback; a body that is not JSON at all yields a parse-failed
/// string. Both are normal returns — the UI must never see an exception
/// from this step.
pub fn parse_reply(body: &str) -> String {
    let parsed: ResponsesBody = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(e) => return format!("답변 형식을 파싱하는 데 실패했습니다. ({e})"),
    };

    parsed
        .output
        .first()
        .and_then(|o| o.content.first())
        .map(|c| c.text.clone())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| NO_REPLY_FALLBACK.to_string())
}

impl ChatGenerate for OpenAiChatClient {
    fn send(&self, user_text: &str) -> Result<String, ChatError> {
        let _span = tracing::info_span!("chat_send", model = %self.model).entered();
        let start = std::time::Instant::now();

        let url = format!("{}/v1/responses", self.base_url);
        let body = ResponsesRequest {
            model: &self.model,
            input: format!("{PERSONA_PROMPT}\n\n사용자의 질문: {user_text}"),
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    ChatError::Connection(self.base_url.clone())
                } else {
                    ChatError::HttpClient(e.to_string())
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|e| ChatError::HttpClient(e.to_string()))?;

        if !status.is_success() {
            return Err(ChatError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let reply = parse_reply(&text);
        tracing::info!(
            elapsed_ms = %start.elapsed().as_millis(),
            reply_len = reply.len(),
            "chat reply received"
        );
        Ok(reply)
    }
}

/// Mock chat client for testing — returns a configurable reply or error.
pub struct MockChatClient {
    result: Result<String, ChatError>,
}

impl MockChatClient {
    pub fn with_reply(reply: &str) -> Self {
        Self {
            result: Ok(reply.to_string()),
        }
    }

    pub fn with_error(error: ChatError) -> Self {
        Self { result: Err(error) }
    }
}

impl ChatGenerate for MockChatClient {
    fn send(&self, _user_text: &str) -> Result<String, ChatError> {
        match &self.result {
            Ok(reply) => Ok(reply.clone()),
            Err(ChatError::Connection(s)) => Err(ChatError::Connection(s.clone())),
            Err(ChatError::Api { status, body }) => Err(ChatError::Api {
                status: *status,
                body: body.clone(),
            }),
            Err(ChatError::HttpClient(s)) => Err(ChatError::HttpClient(s.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_reply_text() {
        let body = r#"{"output":[{"content":[{"text":"눈을 자주 비비면 병원에 가보세요 🐶"}]}]}"#;
        assert_eq!(parse_reply(body), "눈을 자주 비비면 병원에 가보세요 🐶");
    }

    #[test]
    fn parse_takes_first_segment_only() {
        let body = r#"{"output":[
            {"content":[{"text":"first"},{"text":"second"}]},
            {"content":[{"text":"third"}]}
        ]}"#;
        assert_eq!(parse_reply(body), "first");
    }

    #[test]
    fn missing_output_key_yields_fallback() {
        assert_eq!(parse_reply(r#"{"id":"resp_123"}"#), NO_REPLY_FALLBACK);
    }

    #[test]
    fn empty_output_array_yields_fallback() {
        assert_eq!(parse_reply(r#"{"output":[]}"#), NO_REPLY_FALLBACK);
    }

    #[test]
    fn empty_content_array_yields_fallback() {
        assert_eq!(parse_reply(r#"{"output":[{"content":[]}]}"#), NO_REPLY_FALLBACK);
    }

    #[test]
    fn empty_text_yields_fallback() {
        assert_eq!(
            parse_reply(r#"{"output":[{"content":[{"text":""}]}]}"#),
            NO_REPLY_FALLBACK
        );
    }

    #[test]
    fn malformed_json_yields_parse_failed_string() {
        let reply = parse_reply("not json");
        assert!(reply.contains("파싱하는 데 실패했습니다"));
    }

    #[test]
    fn mock_client_round_trip() {
        let client = MockChatClient::with_reply("안녕하세요 🐶");
        assert_eq!(client.send("hi").unwrap(), "안녕하세요 🐶");

        let failing = MockChatClient::with_error(ChatError::Api {
            status: 429,
            body: "rate limited".into(),
        });
        assert!(matches!(
            failing.send("hi").unwrap_err(),
            ChatError::Api { status: 429, .. }
        ));
    }
}
