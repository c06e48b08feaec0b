//! Browser `fetch` client for the hosted leaderboard

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use super::api::{ApiRequest, ApiResponse};
use super::client::LeaderboardClient;
use super::error::LeaderboardError;

/// Talks to the leaderboard backend at `base_url`
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, request: &ApiRequest) -> String {
        match request {
            ApiRequest::CheckName { name } => {
                let encoded: String =
                    js_sys::encode_uri_component(name.as_deref().unwrap_or_default()).into();
                format!("{}{}?name={}", self.base_url, request.path(), encoded)
            }
            _ => format!("{}{}", self.base_url, request.path()),
        }
    }
}

impl LeaderboardClient for HttpClient {
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, LeaderboardError> {
        let init = RequestInit::new();
        init.set_method(request.method());
        init.set_mode(RequestMode::Cors);
        if let ApiRequest::SubmitScore(body) = request {
            let json = serde_json::to_string(body)?;
            init.set_body(&JsValue::from_str(&json));
        }

        let url = self.url(request);
        let req = Request::new_with_str_and_init(&url, &init).map_err(transport)?;
        if matches!(request, ApiRequest::SubmitScore(_)) {
            req.headers()
                .set("Content-Type", "application/json")
                .map_err(transport)?;
        }

        let window =
            web_sys::window().ok_or_else(|| LeaderboardError::Transport("no window".into()))?;
        let value = JsFuture::from(window.fetch_with_request(&req))
            .await
            .map_err(transport)?;
        let resp: Response = value.dyn_into().map_err(transport)?;
        let text = JsFuture::from(resp.text().map_err(transport)?)
            .await
            .map_err(transport)?;

        log::debug!("{} {} -> {}", request.method(), url, resp.status());
        Ok(ApiResponse {
            status: resp.status(),
            body: text.as_string().unwrap_or_default(),
        })
    }
}

fn transport(err: JsValue) -> LeaderboardError {
    LeaderboardError::Transport(format!("{:?}", err))
}
