use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Inventory costing method for a SKU.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CostMethod {
    #[default]
    Fifo,
    Lifo,
    Average,
}

/// Stable synthetic identity of a SKU within the session.
///
/// Minted when the SKU first appears (or rebuilt from persisted linkage on
/// load) and carried through every regeneration. Matching previous SKUs by
/// this key instead of the display-derived `code` keeps identity intact when
/// the item is renamed mid-session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SkuKey {
    /// `options_key` of the owning variant, `None` for non-variant SKUs.
    pub variant_key: Option<String>,
    /// Session id of the owning unit row.
    pub unit_temp_id: Uuid,
}

impl SkuKey {
    pub fn non_variant(unit_temp_id: Uuid) -> Self {
        Self {
            variant_key: None,
            unit_temp_id,
        }
    }

    pub fn variant(options_key: &str, unit_temp_id: Uuid) -> Self {
        Self {
            variant_key: Some(options_key.to_string()),
            unit_temp_id,
        }
    }
}

/// Per-SKU operational settings.
///
/// Every field is optional so a "common" config derived across diverging
/// SKUs can null out the fields they disagree on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkuConfig {
    #[serde(default)]
    pub track_stock: Option<bool>,
    #[serde(default)]
    pub allow_negative: Option<bool>,
    #[serde(default)]
    pub sellable: Option<bool>,
    #[serde(default)]
    pub purchasable: Option<bool>,
}

/// Cost block nested under a SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuCost {
    #[serde(default)]
    pub cost: Decimal,
    #[serde(default)]
    pub last_cost: Decimal,
    #[serde(default)]
    pub method: CostMethod,
}

impl Default for SkuCost {
    fn default() -> Self {
        Self {
            cost: Decimal::ZERO,
            last_cost: Decimal::ZERO,
            method: CostMethod::Fifo,
        }
    }
}

/// Price block nested under a SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkuPrice {
    #[serde(default)]
    pub price: Decimal,
    #[serde(default)]
    pub tax_inclusive: bool,
    #[serde(default = "default_one")]
    pub qty_threshold: Decimal,
}

impl Default for SkuPrice {
    fn default() -> Self {
        Self {
            price: Decimal::ZERO,
            tax_inclusive: false,
            qty_threshold: Decimal::ONE,
        }
    }
}

/// One component consumption entry in a bill of materials.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "crate::validation::validate_material_selected"))]
pub struct BomLine {
    #[serde(default)]
    pub material_item_sku_id: Option<Uuid>,
    #[serde(default = "default_one")]
    #[validate(custom = "crate::validation::validate_positive_decimal")]
    pub quantity: Decimal,
    #[serde(default)]
    #[validate(custom = "crate::validation::validate_waste_percent")]
    pub waste_pct: Decimal,
    #[serde(default = "default_true")]
    pub consume_from_stock: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub notes: String,
}

impl BomLine {
    /// Blank line appended at the given 1-based position.
    pub fn new(sort_order: i32) -> Self {
        Self {
            material_item_sku_id: None,
            quantity: Decimal::ONE,
            waste_pct: Decimal::ZERO,
            consume_from_stock: true,
            sort_order,
            notes: String::new(),
        }
    }
}

/// Production bill of materials nested under a SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Bom {
    /// Output quantity produced by one assembly run.
    #[serde(rename = "yield", default = "default_one")]
    #[validate(custom = "crate::validation::validate_positive_decimal")]
    pub yield_qty: Decimal,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    #[validate]
    pub lines: Vec<BomLine>,
}

impl Default for Bom {
    fn default() -> Self {
        Self {
            yield_qty: Decimal::ONE,
            notes: String::new(),
            lines: Vec::new(),
        }
    }
}

/// Outlet- or channel-level override entry, carried through untouched.
pub type SkuOverride = serde_json::Value;

/// The sellable/stockable leaf entity of the item.
///
/// `code` is recomputed from the item name, variant values, and unit code on
/// every regeneration pass and is display data only; `match_key` is the
/// identity the engine matches on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Sku {
    pub temp_id: Uuid,
    #[serde(default)]
    pub item_sku_id: Option<Uuid>,
    pub match_key: SkuKey,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub barcode: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub unit_temp_id: Uuid,
    #[serde(default)]
    pub item_unit_id: Option<Uuid>,
    #[serde(default)]
    pub variant_unit_temp_id: Option<Uuid>,
    #[serde(default)]
    pub item_variant_unit_id: Option<Uuid>,
    #[serde(default)]
    pub config: SkuConfig,
    #[serde(default)]
    pub cost: SkuCost,
    #[serde(default)]
    pub price: SkuPrice,
    #[serde(default)]
    #[validate]
    pub bom: Bom,
    #[serde(default)]
    pub overrides: Vec<SkuOverride>,
}

impl Sku {
    pub fn is_persisted(&self) -> bool {
        self.item_sku_id.is_some()
    }
}

fn default_one() -> Decimal {
    Decimal::ONE
}

fn default_true() -> bool {
    true
}
