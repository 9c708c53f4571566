use crate::api::{ApiClient, ApiError, Asset, AssetListResponse, MessageResponse, NewAssetRequest};
use std::rc::Rc;

#[derive(Clone)]
pub struct AssetsRepository {
    client: Rc<ApiClient>,
}

impl AssetsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_assets(&self) -> Result<AssetListResponse, ApiError> {
        self.client.list_assets().await
    }

    pub async fn request(&self, asset: &Asset) -> Result<MessageResponse, ApiError> {
        self.client
            .create_request(&NewAssetRequest::for_asset(asset))
            .await
    }
}
