use crate::api::{
    ApiClient, ApiError, AssetListResponse, AssignAssetRequest, Employee, MessageResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct EmployeesRepository {
    client: Rc<ApiClient>,
}

impl EmployeesRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_employees(&self) -> Result<Vec<Employee>, ApiError> {
        self.client.list_hr_employees().await
    }

    pub async fn list_assets(&self) -> Result<AssetListResponse, ApiError> {
        self.client.list_assets().await
    }

    pub async fn assign(
        &self,
        employee_email: &str,
        asset_id: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .assign_asset(&AssignAssetRequest {
                employee_email: employee_email.to_string(),
                asset_id: asset_id.to_string(),
            })
            .await
    }
}
