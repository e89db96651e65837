use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outlet available for attachment to the item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletRef {
    pub outlet_id: Uuid,
    pub name: String,
}

/// An item category available for selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub item_category_id: Uuid,
    pub name: String,
}

/// One option inside a modifier group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierOptionRef {
    pub modifier_option_id: Uuid,
    pub name: String,
}

/// A modifier group available for attachment, fetched with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierGroupRef {
    pub modifier_group_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub options: Vec<ModifierOptionRef>,
}

/// A stock-managed SKU usable as a bill-of-materials component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSkuRef {
    pub item_sku_id: Uuid,
    pub display_name: String,
    pub code: String,
}
