use crate::api::{Asset, AssetType};
use leptos::*;

pub const PAGE_SIZE: usize = 10;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QuantityOrder {
    #[default]
    Any,
    HighToLow,
    LowToHigh,
}

impl QuantityOrder {
    pub fn from_value(value: &str) -> Self {
        match value {
            "highToLow" => QuantityOrder::HighToLow,
            "lowToHigh" => QuantityOrder::LowToHigh,
            _ => QuantityOrder::Any,
        }
    }

    pub fn as_value(self) -> &'static str {
        match self {
            QuantityOrder::Any => "all",
            QuantityOrder::HighToLow => "highToLow",
            QuantityOrder::LowToHigh => "lowToHigh",
        }
    }
}

/// `None` matches every type.
pub fn type_filter_from_value(value: &str) -> Option<AssetType> {
    match value.trim() {
        "" | "all" => None,
        other => Some(AssetType::from(other.to_string())),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetQuery {
    pub search: String,
    pub asset_type: Option<AssetType>,
    pub order: QuantityOrder,
    pub page: usize,
}

impl AssetQuery {
    fn matches(&self, asset: &Asset) -> bool {
        let needle = self.search.trim().to_lowercase();
        let name_matches = needle.is_empty() || asset.name.to_lowercase().contains(&needle);
        let type_matches = match &self.asset_type {
            None => true,
            Some(wanted) => asset.asset_type.as_ref() == Some(wanted),
        };
        name_matches && type_matches
    }

    /// Filtered and sorted, before paging.
    pub fn select(&self, assets: &[Asset]) -> Vec<Asset> {
        let mut selected: Vec<Asset> = assets
            .iter()
            .filter(|asset| self.matches(asset))
            .cloned()
            .collect();
        match self.order {
            QuantityOrder::Any => {}
            QuantityOrder::HighToLow => selected.sort_by(|a, b| b.quantity.cmp(&a.quantity)),
            QuantityOrder::LowToHigh => selected.sort_by_key(|asset| asset.quantity),
        }
        selected
    }

    pub fn page_of(&self, assets: &[Asset]) -> AssetPage {
        let selected = self.select(assets);
        let total = selected.len();
        let pages = page_count(total);
        let page = self.page.min(pages - 1);
        let items = selected
            .into_iter()
            .skip(page * PAGE_SIZE)
            .take(PAGE_SIZE)
            .collect();
        AssetPage {
            items,
            page,
            pages,
            total,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetPage {
    pub items: Vec<Asset>,
    pub page: usize,
    pub pages: usize,
    pub total: usize,
}

pub fn page_count(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE).max(1)
}

/// Filter controls for the asset list; any filter change returns to the first page.
#[derive(Clone, Copy)]
pub struct AssetQueryState {
    search: RwSignal<String>,
    asset_type: RwSignal<Option<AssetType>>,
    order: RwSignal<QuantityOrder>,
    page: RwSignal<usize>,
}

impl AssetQueryState {
    pub fn new() -> Self {
        Self {
            search: create_rw_signal(String::new()),
            asset_type: create_rw_signal(None),
            order: create_rw_signal(QuantityOrder::Any),
            page: create_rw_signal(0),
        }
    }

    pub fn search_signal(&self) -> RwSignal<String> {
        self.search
    }

    pub fn set_search(&self, value: String) {
        self.search.set(value);
        self.page.set(0);
    }

    pub fn set_type(&self, value: &str) {
        self.asset_type.set(type_filter_from_value(value));
        self.page.set(0);
    }

    pub fn set_order(&self, value: &str) {
        self.order.set(QuantityOrder::from_value(value));
        self.page.set(0);
    }

    pub fn set_page(&self, page: usize) {
        self.page.set(page);
    }

    pub fn snapshot(&self) -> AssetQuery {
        AssetQuery {
            search: self.search.get(),
            asset_type: self.asset_type.get(),
            order: self.order.get(),
            page: self.page.get(),
        }
    }
}

impl Default for AssetQueryState {
    fn default() -> Self {
        Self::new()
    }
}
