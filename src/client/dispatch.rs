use reqwest::{
    Method, RequestBuilder,
    header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue},
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::{
    errors::{ApiError, REQUEST_FAILED_MESSAGE},
    types::ApiResponse,
};

use super::ApiClient;

/// Per-request options: method, JSON body and extra headers.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<Value>,
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        RequestOptions {
            method,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn patch() -> Self {
        Self::new(Method::PATCH)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn json<B: Serialize>(mut self, body: &B) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body).map_err(|e| ApiError::Decode {
            message: format!("cannot encode request body: {}", e),
        })?;
        self.body = Some(value);
        Ok(self)
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Builds the outgoing header set.
///
/// `Content-Type: application/json` and the bearer token come first; any
/// header in `extra` replaces them.
pub fn merge_headers(token: Option<&str>, extra: &HeaderMap) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
            Err(_) => tracing::warn!("session token is not a valid header value, sending request without it"),
        }
    }

    for name in extra.keys() {
        headers.remove(name);
    }
    for (name, value) in extra.iter() {
        headers.append(name, value.clone());
    }

    headers
}

/// Turns a status code and raw body into the request's result.
///
/// - non-2xx: `HttpStatus` with the body's `message` field, or
///   "Request failed" when there is none or the body isn't JSON
/// - 2xx with an empty body: the payload decoded from `null`
/// - 2xx otherwise: the `{ success, data, error }` envelope
pub fn decode_response<T>(status: u16, body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    if !(200..300).contains(&status) {
        let message = serde_json::from_slice::<Value>(body)
            .ok()
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| REQUEST_FAILED_MESSAGE.to_string());
        return Err(ApiError::HttpStatus { status, message });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(serde_json::from_value(Value::Null)?);
    }

    let envelope: ApiResponse<T> = serde_json::from_slice(body)?;
    envelope.into_result()
}

impl ApiClient {
    /// Sends a request to `path` (relative to the base URL) and decodes the
    /// envelope's payload.
    ///
    /// Never panics and never retries: transport errors, non-2xx answers,
    /// undecodable bodies and `success: false` envelopes all come back as
    /// [`ApiError`].
    pub async fn request<T>(&self, path: &str, options: RequestOptions) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let token = self.tokens.resolve().await;
        let headers = merge_headers(token.as_deref(), &options.headers);
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(
            method = %options.method,
            url = %url,
            authenticated = token.is_some(),
            "dispatching request"
        );

        let mut builder = self.http.request(options.method.clone(), &url).headers(headers);
        if let Some(body) = &options.body {
            builder = builder.body(body.to_string());
        }

        let result = Self::send(builder).await;
        if let Err(e) = &result {
            tracing::warn!(method = %options.method, url = %url, code = e.code(), error = %e, "request failed");
        }
        result
    }

    async fn send<T>(builder: RequestBuilder) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        decode_response(status, &body)
    }
}
