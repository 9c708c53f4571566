use crate::api::{AssetType, AssignedAsset};
use crate::pages::asset_list::utils::type_filter_from_value;

/// Assigned assets whose name contains `search` (case-insensitive) and whose
/// type matches the filter value (`""`/`"all"` matches everything).
pub fn filter_assigned(assets: &[AssignedAsset], search: &str, type_filter: &str) -> Vec<AssignedAsset> {
    let needle = search.trim().to_lowercase();
    let kind: Option<AssetType> = type_filter_from_value(type_filter);
    assets
        .iter()
        .filter(|asset| needle.is_empty() || asset.asset_name.to_lowercase().contains(&needle))
        .filter(|asset| match &kind {
            Some(kind) => asset.asset_type.as_ref() == Some(kind),
            None => true,
        })
        .cloned()
        .collect()
}

pub fn type_label(asset: &AssignedAsset) -> String {
    asset
        .asset_type
        .as_ref()
        .map(|kind| kind.label().to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
