use super::provider::LlmProvider;
use crate::error::{PaimonError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash-exp";

/// Gemini through its OpenAI-compatible chat completions endpoint.
pub struct GeminiProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(GEMINI_BASE_URL, api_key, model)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

/// Pull the human-readable message out of an API error body. Falls back to
/// the raw body when it is not the usual `{"error": {"message": ...}}` shape.
pub(crate) fn extract_api_error(raw: &str) -> String {
    if let Some(start) = raw.find('[').or_else(|| raw.find('{')) {
        if let Ok(v) = raw[start..].parse::<Value>() {
            // Gemini sometimes wraps the error object in an array
            let obj = if v.is_array() { &v[0] } else { &v };
            if let Some(msg) = obj["error"]["message"].as_str() {
                return msg.split(". Please refer to").next().unwrap_or(msg).trim().to_string();
            }
        }
    }
    raw.trim().to_string()
}

#[async_trait]
impl LlmProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let url = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));
        debug!(model = %self.model, prompt_len = prompt.len(), "sending generation request");

        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body_text = resp.text().await.unwrap_or_default();
            return Err(PaimonError::generation(format!(
                "status {}: {}",
                status.as_u16(),
                extract_api_error(&body_text)
            )));
        }

        let data: Value = resp
            .json()
            .await
            .map_err(|e| PaimonError::generation(format!("malformed response: {e}")))?;

        data["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                PaimonError::generation("malformed response: missing choices[0].message.content")
            })
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::{BodyExt, Full};
    use hyper::body::Bytes;
    use hyper::server::conn::http1;
    use hyper::service::service_fn;
    use hyper::{Request, Response};
    use hyper_util::rt::TokioIo;
    use std::convert::Infallible;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;

    async fn serve_once<F, Fut>(handler: F) -> SocketAddr
    where
        F: Fn(Request<hyper::body::Incoming>) -> Fut + Send + 'static,
        Fut: std::future::Future<Output = std::result::Result<Response<Full<Bytes>>, Infallible>>
            + Send
            + 'static,
    {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            http1::Builder::new()
                .serve_connection(TokioIo::new(stream), service_fn(handler))
                .await
                .ok();
        });

        addr
    }

    fn json_response(status: u16, body: &str) -> Response<Full<Bytes>> {
        Response::builder()
            .status(status)
            .header("content-type", "application/json")
            .body(Full::new(Bytes::from(body.to_string())))
            .unwrap()
    }

    fn provider(addr: SocketAddr) -> GeminiProvider {
        GeminiProvider::with_base_url(format!("http://{addr}/"), "test-key", "gemini-test")
    }

    #[tokio::test]
    async fn returns_message_content_verbatim() {
        let addr = serve_once(|_req| async {
            Ok::<_, Infallible>(json_response(
                200,
                r#"{"choices":[{"message":{"role":"assistant","content":"Hehe, Paimon di sini! ✨"}}]}"#,
            ))
        })
        .await;

        let text = provider(addr).generate("halo").await.unwrap();
        assert_eq!(text, "Hehe, Paimon di sini! ✨");
    }

    #[tokio::test]
    async fn sends_single_user_message_with_bearer_key() {
        let addr = serve_once(|req| async move {
            assert_eq!(req.method(), hyper::Method::POST);
            assert_eq!(req.uri().path(), "/chat/completions");
            let auth = req
                .headers()
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            let body = req.collect().await.unwrap().to_bytes();
            let v: Value = serde_json::from_slice(&body).unwrap();
            let ok = auth == "Bearer test-key"
                && v["model"] == "gemini-test"
                && v["messages"].as_array().map(|m| m.len()) == Some(1)
                && v["messages"][0]["role"] == "user"
                && v["messages"][0]["content"] == "the prompt";
            let reply = if ok { "request ok" } else { "request mismatch" };
            Ok::<_, Infallible>(json_response(
                200,
                &json!({ "choices": [{ "message": { "content": reply } }] }).to_string(),
            ))
        })
        .await;

        let text = provider(addr).generate("the prompt").await.unwrap();
        assert_eq!(text, "request ok");
    }

    #[tokio::test]
    async fn api_error_carries_status_and_message() {
        let addr = serve_once(|_req| async {
            Ok::<_, Infallible>(json_response(
                429,
                r#"[{"error":{"code":429,"message":"Resource has been exhausted (e.g. check quota)."}}]"#,
            ))
        })
        .await;

        let err = provider(addr).generate("halo").await.unwrap_err();
        assert!(matches!(err, PaimonError::Generation(_)));
        let msg = err.to_string();
        assert!(msg.contains("429"), "unexpected: {msg}");
        assert!(msg.contains("Resource has been exhausted"), "unexpected: {msg}");
    }

    #[tokio::test]
    async fn missing_content_is_malformed() {
        let addr = serve_once(|_req| async {
            Ok::<_, Infallible>(json_response(200, r#"{"choices":[]}"#))
        })
        .await;

        let err = provider(addr).generate("halo").await.unwrap_err();
        assert!(err.to_string().contains("malformed response"), "unexpected: {err}");
    }

    #[tokio::test]
    async fn connection_refused_is_a_generation_error() {
        // Bind then drop so nothing is listening on the port
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = provider(addr).generate("halo").await.unwrap_err();
        assert!(matches!(err, PaimonError::Generation(_)));
        assert!(!err.detail().is_empty());
    }

    #[test]
    fn extract_api_error_handles_plain_and_json_bodies() {
        assert_eq!(
            extract_api_error(r#"{"error":{"message":"API key not valid. Please refer to the docs"}}"#),
            "API key not valid"
        );
        assert_eq!(extract_api_error("  upstream timeout \n"), "upstream timeout");
    }
}
