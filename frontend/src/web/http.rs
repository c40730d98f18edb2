//! `fetch` transport for the portal API.

use async_trait::async_trait;
use tallerportal::error::{PortalError, Result};
use tallerportal::request::{HEADER_CONTENT_TYPE, HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, Response};

fn network(context: &str, e: JsValue) -> PortalError {
    PortalError::Network(format!("{}: {:?}", context, e))
}

/// Browser `fetch`, sending the session cookie on same-origin requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchClient;

#[async_trait(?Send)]
impl HttpClient for FetchClient {
    async fn send(&self, req: HttpRequest) -> Result<HttpResponse> {
        let headers = Headers::new().map_err(|e| network("headers", e))?;
        for (key, value) in &req.headers {
            headers
                .set(key, value)
                .map_err(|e| network("header", e))?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_credentials(RequestCredentials::SameOrigin);
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request =
            Request::new_with_str_and_init(&req.url, &opts).map_err(|e| network("request", e))?;

        let window =
            web_sys::window().ok_or_else(|| PortalError::Network("no window".to_string()))?;
        let value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| network("fetch", e))?;
        let response: Response = value.dyn_into().map_err(|e| network("response", e))?;

        let content_type = response.headers().get(HEADER_CONTENT_TYPE).ok().flatten();
        let text = response.text().map_err(|e| network("body", e))?;
        let body = JsFuture::from(text)
            .await
            .map_err(|e| network("body", e))?
            .as_string()
            .unwrap_or_default();

        Ok(HttpResponse {
            status: response.status(),
            content_type,
            body,
        })
    }
}
