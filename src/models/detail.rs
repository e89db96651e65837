use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{
    Bom, ItemImage, OutletRef, SkuConfig, SkuCost, SkuOverride, SkuPrice, UnitRef, VariantOption,
};

/// A persisted unit row as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemUnitDetail {
    pub item_unit_id: Uuid,
    #[serde(default)]
    pub unit_id: Option<Uuid>,
    #[serde(default)]
    pub unit: Option<UnitRef>,
    #[serde(default = "default_one")]
    pub conversion: Decimal,
    #[serde(default = "default_one")]
    pub min_sales_qty: Decimal,
    #[serde(default)]
    pub is_base: bool,
    #[serde(default)]
    pub is_stock: bool,
    #[serde(default)]
    pub is_purchase: bool,
    #[serde(default)]
    pub is_sales: bool,
    #[serde(default)]
    pub is_transfer: bool,
}

/// A persisted variant row as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantDetail {
    pub item_variant_id: Uuid,
    #[serde(default)]
    pub options_key: String,
    #[serde(default)]
    pub options: Vec<VariantOption>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// A persisted variant-unit pairing as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantUnitDetail {
    pub item_variant_unit_id: Uuid,
    #[serde(default)]
    pub item_variant_id: Option<Uuid>,
    #[serde(default)]
    pub item_unit_id: Option<Uuid>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// A persisted SKU as returned by the backend, nested blocks optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuDetail {
    pub item_sku_id: Uuid,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub item_unit_id: Option<Uuid>,
    #[serde(default)]
    pub item_variant_unit_id: Option<Uuid>,
    #[serde(default)]
    pub config: SkuConfig,
    #[serde(default)]
    pub cost: SkuCost,
    #[serde(default)]
    pub price: SkuPrice,
    #[serde(default)]
    pub bom: Bom,
    #[serde(default)]
    pub overrides: Vec<SkuOverride>,
}

/// A persisted modifier attachment as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifierDetail {
    #[serde(default)]
    pub item_modifier_id: Option<Uuid>,
    #[serde(default)]
    pub modifier_group_id: Option<Uuid>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// A persisted outlet attachment, with its outlet record when included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletDetail {
    pub outlet_id: Uuid,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default)]
    pub outlet: Option<OutletRef>,
}

/// The full persisted item as fetched for edit mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub item_id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub item_category_id: Option<Uuid>,
    #[serde(default)]
    pub has_variant: bool,
    #[serde(default)]
    pub units: Vec<ItemUnitDetail>,
    #[serde(default)]
    pub variants: Vec<VariantDetail>,
    #[serde(default)]
    pub variant_units: Vec<VariantUnitDetail>,
    #[serde(default)]
    pub skus: Vec<SkuDetail>,
    #[serde(default)]
    pub modifiers: Vec<ModifierDetail>,
    #[serde(default)]
    pub images: Vec<ItemImage>,
    #[serde(default)]
    pub outlets: Vec<OutletDetail>,
    /// Item-level sales bill of materials.
    #[serde(default)]
    pub bom: Option<Bom>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_one() -> Decimal {
    Decimal::ONE
}

fn default_true() -> bool {
    true
}
