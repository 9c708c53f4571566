use leptos::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Shown whenever the backend fails without a usable `message`.
pub const FALLBACK_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RequestStatus::Pending)
    }

    pub fn label(self) -> &'static str {
        match self {
            RequestStatus::Pending => "Pending",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum RequestAction {
    Approve,
    Reject,
}

impl RequestAction {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestAction::Approve => "approve",
            RequestAction::Reject => "reject",
        }
    }

    /// Terminal status a successful action settles on.
    pub fn outcome(self) -> RequestStatus {
        match self {
            RequestAction::Approve => RequestStatus::Approved,
            RequestAction::Reject => RequestStatus::Rejected,
        }
    }
}

impl fmt::Display for RequestAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetRequest {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "requesterName", default)]
    pub requester_name: String,
    #[serde(rename = "assetName", default)]
    pub asset_name: String,
    #[serde(rename = "requestDate", default)]
    pub request_date: String,
    #[serde(rename = "requestStatus", alias = "status")]
    pub status: RequestStatus,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RequestActionBody {
    pub action: RequestAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AssetType {
    Returnable,
    NonReturnable,
    Other(String),
}

impl AssetType {
    pub fn label(&self) -> &str {
        match self {
            AssetType::Returnable => "Returnable",
            AssetType::NonReturnable => "Non-returnable",
            AssetType::Other(raw) => raw,
        }
    }
}

impl From<String> for AssetType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "Returnable" | "returnable" => AssetType::Returnable,
            "Non-returnable" | "non-returnable" | "Non-Returnable" => AssetType::NonReturnable,
            _ => AssetType::Other(raw),
        }
    }
}

impl From<AssetType> for String {
    fn from(value: AssetType) -> Self {
        value.label().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Asset {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub quantity: u32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(rename = "hrEmail", default, skip_serializing_if = "Option::is_none")]
    pub hr_email: Option<String>,
    /// Owning HR manager as embedded by the asset listing.
    #[serde(rename = "HR", default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<AssetOwner>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetOwner {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(rename = "companyName", default)]
    pub company_name: Option<String>,
}

impl Asset {
    pub fn is_assignable(&self) -> bool {
        self.quantity > 0
    }

    pub fn owner_email(&self) -> Option<&str> {
        self.hr_email
            .as_deref()
            .or_else(|| self.owner.as_ref().and_then(|owner| owner.email.as_deref()))
            .filter(|email| !email.trim().is_empty())
    }

    pub fn company_name(&self) -> Option<&str> {
        self.owner
            .as_ref()
            .and_then(|owner| owner.company_name.as_deref())
    }
}

/// Body of `POST /requests`, sent when an employee asks for an asset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewAssetRequest {
    #[serde(rename = "assetId")]
    pub asset_id: String,
    #[serde(rename = "assetName")]
    pub asset_name: String,
    #[serde(rename = "assetType", skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(rename = "hrEmail", skip_serializing_if = "Option::is_none")]
    pub hr_email: Option<String>,
    #[serde(rename = "companyName", skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
}

impl NewAssetRequest {
    pub fn for_asset(asset: &Asset) -> Self {
        Self {
            asset_id: asset.id.clone(),
            asset_name: asset.name.clone(),
            asset_type: asset.asset_type.clone(),
            hr_email: asset.owner_email().map(str::to_string),
            company_name: asset.company_name().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetListResponse {
    #[serde(default)]
    pub result: Vec<Asset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignAssetRequest {
    #[serde(rename = "employeeEmail")]
    pub employee_email: String,
    #[serde(rename = "assetId")]
    pub asset_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl Employee {
    pub fn status_label(&self) -> &str {
        self.status
            .as_deref()
            .filter(|status| !status.trim().is_empty())
            .unwrap_or("Unavailable")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssignedAsset {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(rename = "assetName", default)]
    pub asset_name: String,
    #[serde(rename = "assetType", default)]
    pub asset_type: Option<AssetType>,
    #[serde(rename = "companyName", default)]
    pub company_name: Option<String>,
    #[serde(rename = "assignmentDate", default)]
    pub assignment_date: Option<String>,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    #[serde(default = "fallback_message", deserialize_with = "message_or_fallback")]
    pub message: String,
    #[serde(default = "unknown_code")]
    pub code: String,
    #[serde(skip)]
    pub status: Option<u16>,
}

fn fallback_message() -> String {
    FALLBACK_MESSAGE.to_string()
}

fn unknown_code() -> String {
    "UNKNOWN".to_string()
}

fn message_or_fallback<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(fallback_message))
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

impl ApiError {
    fn with_code(msg: impl Into<String>, code: &str) -> Self {
        Self {
            message: msg.into(),
            code: code.to_string(),
            status: None,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "VALIDATION_ERROR")
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "UNKNOWN")
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self::with_code(msg, "REQUEST_FAILED")
    }

    pub fn unauthorized(status: u16) -> Self {
        Self {
            status: Some(status),
            ..Self::with_code("Your session has ended. Please sign in again.", "UNAUTHORIZED")
        }
    }

    /// Error for a non-2xx response; keeps the server `message` when the body has one.
    pub fn from_error_body(status: u16, body: &[u8]) -> Self {
        let mut error = serde_json::from_slice::<ApiError>(body)
            .unwrap_or_else(|_| Self::with_code(FALLBACK_MESSAGE, "HTTP_ERROR"));
        if error.code == "UNKNOWN" {
            error.code = "HTTP_ERROR".to_string();
        }
        error.status = Some(status);
        error
    }

    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status, Some(401) | Some(403))
    }
}
