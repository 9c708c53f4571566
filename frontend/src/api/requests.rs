use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{
        ApiError, AssetRequest, MessageResponse, NewAssetRequest, RequestAction,
        RequestActionBody,
    },
};

impl ApiClient {
    /// Requests addressed to the signed-in HR manager.
    pub async fn list_hr_requests(&self) -> Result<Vec<AssetRequest>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/requests/hr", base_url)))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn act_on_request(
        &self,
        id: &str,
        action: RequestAction,
    ) -> Result<MessageResponse, ApiError> {
        if id.trim().is_empty() {
            return Err(ApiError::validation("Request id is missing"));
        }
        let base_url = self.resolved_base_url().await;
        let encoded = utf8_percent_encode(id.trim(), NON_ALPHANUMERIC).to_string();
        let response = self
            .send(
                self.http_client()
                    .patch(format!("{}/requests/{}/action", base_url, encoded))
                    .json(&RequestActionBody { action }),
            )
            .await?;
        self.map_json_response(response).await
    }

    /// Files a new request for an asset on behalf of the signed-in employee.
    pub async fn create_request(
        &self,
        payload: &NewAssetRequest,
    ) -> Result<MessageResponse, ApiError> {
        if payload.asset_id.trim().is_empty() {
            return Err(ApiError::validation("Asset id is missing"));
        }
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/requests", base_url))
                    .json(payload),
            )
            .await?;
        self.map_json_response(response).await
    }
}
