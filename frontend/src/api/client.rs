use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{api::types::ApiError, config, state::session::Session};

/// HTTP access to the AssetVerse backend.
///
/// Every request carries the session's bearer token. A 401/403 from any
/// endpoint ends the session (which redirects to the login view); callers
/// only ever see the resulting `ApiError`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: None,
            session,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>, session: Session) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.bearer() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    fn is_auth_failure(status: StatusCode) -> bool {
        status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN
    }

    fn handle_auth_failure(&self, status: StatusCode) {
        if Self::is_auth_failure(status) {
            log::warn!("backend rejected credentials ({}); signing out", status.as_u16());
            self.session.end();
        }
    }

    /// Sends an authorized request; transport failures become `REQUEST_FAILED`.
    pub(crate) async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let request = self
            .authorize(request)
            .build()
            .map_err(|e| ApiError::request_failed(format!("Invalid request: {}", e)))?;
        let method = request.method().clone();
        let path = request.url().path().to_string();
        let response = self.dispatch(request).await.map_err(|err| {
            log::warn!("{} {} failed: {}", method, path, err);
            err
        })?;
        self.handle_auth_failure(response.status());
        Ok(response)
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        self.client
            .execute(request)
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn dispatch(&self, request: reqwest::Request) -> Result<Response, ApiError> {
        match mock::responder_for(request.url().as_str()) {
            Some(responder) => responder.respond(&request).map(MockResponse::into_response),
            None => self
                .client
                .execute(request)
                .await
                .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e))),
        }
    }

    pub(crate) async fn map_json_response<T: DeserializeOwned>(
        &self,
        response: Response,
    ) -> Result<T, ApiError> {
        let status = response.status();
        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)));
        }
        if Self::is_auth_failure(status) {
            return Err(ApiError::unauthorized(status.as_u16()));
        }
        let body = response.bytes().await.unwrap_or_default();
        Err(ApiError::from_error_body(status.as_u16(), &body))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock::{register_mock, MockResponse, TestResponder};
