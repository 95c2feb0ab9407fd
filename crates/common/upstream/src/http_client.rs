use std::time::Duration;

use reqwest::{
    Client, RequestBuilder, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderValue},
};
use serde_json::Value;

use crate::error::FetchError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// A reqwest client bound to a single upstream endpoint, with every request bounded by the
/// same timeout.
#[derive(Debug, Clone)]
pub struct EndpointClient {
    client: Client,
    endpoint: Url,
    request_timeout: Duration,
}

impl EndpointClient {
    pub fn new(endpoint: Url, request_timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|err| FetchError::Client(err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            request_timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn get(&self) -> RequestBuilder {
        self.client
            .get(self.endpoint.clone())
            .header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE))
    }

    pub fn post(&self) -> RequestBuilder {
        self.client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))
            .header(ACCEPT, HeaderValue::from_static(JSON_CONTENT_TYPE))
    }

    /// Sends the request and returns the JSON body of a 2xx response.
    pub async fn send_json(&self, request: RequestBuilder) -> Result<Value, FetchError> {
        let response = request.send().await.map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                endpoint: self.endpoint.to_string(),
                status,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| self.transport_error(err))?;

        serde_json::from_slice(&body).map_err(|err| {
            FetchError::malformed(&self.endpoint, format!("body is not valid JSON: {err}"))
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        FetchError::transport(&self.endpoint, self.request_timeout, err)
    }
}
