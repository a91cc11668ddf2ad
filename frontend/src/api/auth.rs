use super::{
    client::{login_failure, transport_failure, ApiClient},
    types::{ApiError, LoginRequest, LoginResponse},
};

impl ApiClient {
    /// `POST {base}/login`. Only talks to the network; the session store owns
    /// persistence.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .post(format!("{}/login", base_url))
            .json(request)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if status.is_success() {
            Self::parse_json(response).await
        } else {
            let message = Self::error_message(response).await;
            Err(login_failure(status, message))
        }
    }
}
