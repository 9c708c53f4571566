use super::{
    client::ApiClient,
    types::{ApiError, Employee},
};

impl ApiClient {
    /// Employees affiliated with the signed-in HR manager.
    pub async fn list_hr_employees(&self) -> Result<Vec<Employee>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/employees/hr", base_url)))
            .await?;
        self.map_json_response(response).await
    }
}
