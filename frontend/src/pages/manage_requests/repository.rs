use crate::api::{ApiClient, ApiError, AssetRequest, MessageResponse, RequestAction};
use std::rc::Rc;

#[derive(Clone)]
pub struct RequestsRepository {
    client: Rc<ApiClient>,
}

impl RequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_requests(&self) -> Result<Vec<AssetRequest>, ApiError> {
        self.client.list_hr_requests().await
    }

    pub async fn act(&self, id: &str, action: RequestAction) -> Result<MessageResponse, ApiError> {
        self.client.act_on_request(id, action).await
    }
}
