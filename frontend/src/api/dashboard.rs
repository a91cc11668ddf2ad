use super::{
    client::{status_failure, transport_failure, ApiClient},
    types::{ApiError, CountsQuery, DashboardCounts},
};

impl ApiClient {
    pub async fn get_dashboard_counts(
        &self,
        token: &str,
        query: &CountsQuery,
    ) -> Result<DashboardCounts, ApiError> {
        let headers = Self::bearer_headers(token)?;
        let base_url = self.resolved_base_url().await;
        let response = self
            .http_client()
            .get(format!(
                "{}/dashboard/counts?{}",
                base_url,
                query.to_query_string()
            ))
            .headers(headers)
            .send()
            .await
            .map_err(transport_failure)?;

        let status = response.status();
        if status.is_success() {
            Self::parse_json(response).await
        } else {
            let message = Self::error_message(response).await;
            Err(status_failure(status, message))
        }
    }
}
