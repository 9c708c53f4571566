use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{ApiError, AssetListResponse, AssignAssetRequest, AssignedAsset, MessageResponse},
};

impl ApiClient {
    /// Every asset visible to the caller; paging happens client-side.
    pub async fn list_assets(&self) -> Result<AssetListResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/assets", base_url)))
            .await?;
        self.map_json_response(response).await
    }

    pub async fn assign_asset(
        &self,
        payload: &AssignAssetRequest,
    ) -> Result<MessageResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/assign-asset", base_url))
                    .json(payload),
            )
            .await?;
        self.map_json_response(response).await
    }

    pub async fn list_assigned_assets(&self, email: &str) -> Result<Vec<AssignedAsset>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let encoded = utf8_percent_encode(email, NON_ALPHANUMERIC).to_string();
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/assigned-assets/employee/{}", base_url, encoded)),
            )
            .await?;
        self.map_json_response(response).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::state::session::Session;
    use crate::test_support::helpers::{asset_json, employee_user, hr_user};
    use serde_json::json;

    #[tokio::test]
    async fn list_assets_reads_result_envelope() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/assets");
            then.status(200).json_body(json!({
                "result": [asset_json("a1", "Laptop", 3), asset_json("a2", "Chair", 0)],
                "total": 2
            }));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"), Session::authenticated("t", hr_user()));

        let assets = api.list_assets().await.unwrap();

        assert_eq!(assets.result.len(), 2);
        assert_eq!(assets.total, Some(2));
        assert!(server.received()[0].query.is_none());
    }

    #[tokio::test]
    async fn assign_asset_posts_camel_case_payload() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/assign-asset");
            then.status(200).json_body(json!({ "message": "Asset assigned" }));
        });
        let api = ApiClient::new_with_base_url(server.url("/api"), Session::authenticated("t", hr_user()));

        let reply = api
            .assign_asset(&AssignAssetRequest {
                employee_email: "bob@example.com".into(),
                asset_id: "a1".into(),
            })
            .await
            .unwrap();

        assert_eq!(reply.message, "Asset assigned");
        assert_eq!(
            server.received()[0].body,
            Some(json!({ "employeeEmail": "bob@example.com", "assetId": "a1" }))
        );
    }

    #[tokio::test]
    async fn list_assigned_assets_encodes_email_in_path() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET)
                .path("/api/assigned-assets/employee/bob%40example%2Ecom");
            then.status(200).json_body(json!([{
                "_id": "x1",
                "assetName": "Monitor",
                "assetType": "Returnable",
                "assignmentDate": "2025-03-01T10:00:00Z",
                "status": "assigned"
            }]));
        });
        let api = ApiClient::new_with_base_url(
            server.url("/api"),
            Session::authenticated("t", employee_user()),
        );

        let assigned = api.list_assigned_assets("bob@example.com").await.unwrap();

        assert_eq!(assigned.len(), 1);
        assert_eq!(assigned[0].asset_name, "Monitor");
    }

    #[tokio::test]
    async fn transport_failure_maps_to_request_failed() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/assets");
            then.network_error();
        });
        let session = Session::authenticated("t", hr_user());
        let api = ApiClient::new_with_base_url(server.url("/api"), session.clone());

        let err = api.list_assets().await.unwrap_err();

        assert_eq!(err.code, "REQUEST_FAILED");
        assert!(session.is_authenticated());
    }
}
