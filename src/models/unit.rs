use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Denormalized master unit-of-measure record attached to an item unit row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitRef {
    pub unit_id: Uuid,
    pub code: String,
    pub name: String,
}

/// A unit of measure attached to the item being edited.
///
/// `temp_id` identifies the row within the editing session; `item_unit_id`
/// is present once the row has been persisted. `unit_id`/`unit` point at the
/// master unit the user picked, and stay unset on a freshly added row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "crate::validation::validate_master_unit_selected"))]
pub struct ItemUnit {
    pub temp_id: Uuid,
    #[serde(default)]
    pub item_unit_id: Option<Uuid>,
    #[serde(default)]
    pub unit_id: Option<Uuid>,
    #[serde(default)]
    pub unit: Option<UnitRef>,
    #[serde(default = "default_one")]
    #[validate(custom = "crate::validation::validate_positive_decimal")]
    pub conversion: Decimal,
    #[serde(default = "default_one")]
    #[validate(custom = "crate::validation::validate_positive_decimal")]
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

impl ItemUnit {
    /// Blank unit row; the base row starts with every capability flag on.
    pub fn new(is_base: bool) -> Self {
        Self {
            temp_id: Uuid::new_v4(),
            item_unit_id: None,
            unit_id: None,
            unit: None,
            conversion: Decimal::ONE,
            min_sales_qty: Decimal::ONE,
            is_base,
            is_stock: is_base,
            is_purchase: is_base,
            is_sales: is_base,
            is_transfer: is_base,
        }
    }

    /// Unit code shown in display names, empty until a master unit is picked.
    pub fn unit_code(&self) -> &str {
        self.unit.as_ref().map(|u| u.code.as_str()).unwrap_or("")
    }
}

fn default_one() -> Decimal {
    Decimal::ONE
}
