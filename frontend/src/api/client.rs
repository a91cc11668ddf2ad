use reqwest::{header, Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ErrorBody},
    config,
};

const DEFAULT_FAILURE_MESSAGE: &str = "Request failed. Please try again.";
const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please try again.";

#[derive(Clone, Default)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.trim_end_matches('/').to_string()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn bearer_headers(token: &str) -> Result<header::HeaderMap, ApiError> {
        let mut headers = header::HeaderMap::new();
        let value = format!("Bearer {}", token)
            .parse()
            .map_err(|_| ApiError::unauthorized())?;
        headers.insert(header::AUTHORIZATION, value);
        Ok(headers)
    }

    pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        response.json::<T>().await.map_err(|err| {
            log::warn!("unexpected response body: {}", err);
            ApiError::unknown("Unexpected response from server.")
        })
    }

    pub(crate) async fn error_message(response: Response) -> Option<String> {
        response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(ErrorBody::into_message)
    }
}

pub(crate) fn transport_failure(err: reqwest::Error) -> ApiError {
    log::warn!("request did not reach the server: {}", err);
    ApiError::network()
}

/// Maps a non-success status on an authenticated endpoint.
pub(crate) fn status_failure(status: StatusCode, message: Option<String>) -> ApiError {
    classify_status(status, message, DEFAULT_FAILURE_MESSAGE)
}

/// Same as `status_failure` except that 401 means the credentials were wrong.
pub(crate) fn login_failure(status: StatusCode, message: Option<String>) -> ApiError {
    if status == StatusCode::UNAUTHORIZED {
        ApiError::invalid_credentials()
    } else {
        classify_status(status, message, LOGIN_FAILED_MESSAGE)
    }
}

fn classify_status(status: StatusCode, message: Option<String>, fallback: &str) -> ApiError {
    match status {
        StatusCode::UNAUTHORIZED => ApiError::unauthorized(),
        StatusCode::NOT_FOUND => ApiError::not_found(),
        s if s.is_server_error() => ApiError::server(),
        _ => ApiError::unknown(message.unwrap_or_else(|| fallback.to_string())),
    }
}
