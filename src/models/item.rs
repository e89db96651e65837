use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::{
    Bom, ItemUnit, OutletRef, Sku, SkuConfig, Variant, VariantUnit,
};

/// A modifier group attached to the item (add-ons, preparation choices).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemModifier {
    pub temp_id: Uuid,
    #[serde(default)]
    pub modifier_group_id: Option<Uuid>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_required: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl ItemModifier {
    /// Blank modifier row appended at the given 1-based position.
    pub fn new(sort_order: i32) -> Self {
        Self {
            temp_id: Uuid::new_v4(),
            modifier_group_id: None,
            is_active: true,
            is_required: false,
            sort_order,
        }
    }
}

/// An image attached to the item. The id is minted client-side for new rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemImage {
    pub item_image_id: Uuid,
    #[serde(default)]
    pub image_key_original: String,
    #[serde(default)]
    pub image_key_medium: Option<String>,
    #[serde(default)]
    pub image_key_small: Option<String>,
    #[serde(default)]
    pub image_url_original: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl ItemImage {
    pub fn new() -> Self {
        Self {
            item_image_id: Uuid::new_v4(),
            image_key_original: String::new(),
            image_key_medium: None,
            image_key_small: None,
            image_url_original: String::new(),
            title: None,
            is_primary: false,
            is_active: true,
        }
    }
}

impl Default for ItemImage {
    fn default() -> Self {
        Self::new()
    }
}

/// An outlet the item is offered at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemOutlet {
    pub outlet_id: Uuid,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl ItemOutlet {
    pub fn from_ref(outlet: &OutletRef) -> Self {
        Self {
            outlet_id: outlet.outlet_id,
            is_active: true,
            name: outlet.name.clone(),
            sort_order: None,
        }
    }
}

/// The whole editable form state for one catalog item.
///
/// Owned by a single editing session; the derived collections (`variants`,
/// `variant_units`, `skus`) are overwritten by the reconciliation engine and
/// should not be edited row-by-row except where an explicit operation exists
/// (SKU removal, per-SKU config).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "crate::validation::validate_base_unit_count"))]
#[validate(schema(function = "crate::validation::validate_unique_sku_codes"))]
pub struct ItemForm {
    #[serde(default)]
    #[validate(custom = "crate::validation::validate_non_blank")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub item_category_id: Option<Uuid>,
    #[serde(default)]
    pub has_variant: bool,
    #[serde(default)]
    #[validate(length(min = 1, message = "at least one unit is required"))]
    #[validate]
    pub units: Vec<ItemUnit>,
    #[serde(default)]
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub variant_units: Vec<VariantUnit>,
    #[serde(default)]
    #[validate]
    pub skus: Vec<Sku>,
    #[serde(default)]
    pub modifiers: Vec<ItemModifier>,
    #[serde(default)]
    pub images: Vec<ItemImage>,
    #[serde(default)]
    pub outlets: Vec<ItemOutlet>,
    /// Global default config, broadcast to every SKU while
    /// `use_same_config` is on.
    #[serde(default)]
    pub config: SkuConfig,
    #[serde(default)]
    pub use_same_config: bool,
    /// Item-level sales bill of materials, absent unless enabled.
    #[serde(default)]
    #[validate]
    pub bom: Option<Bom>,
}

impl ItemForm {
    /// Base unit row, if one is flagged.
    pub fn base_unit(&self) -> Option<&ItemUnit> {
        self.units.iter().find(|u| u.is_base)
    }
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_factory_sets_sort_order() {
        let modifier = ItemModifier::new(3);
        assert_eq!(modifier.sort_order, 3);
        assert!(modifier.is_active);
        assert!(!modifier.is_required);
        assert!(modifier.modifier_group_id.is_none());
    }

    #[test]
    fn image_factory_is_blank_and_active() {
        let image = ItemImage::new();
        assert!(image.image_key_original.is_empty());
        assert!(image.image_key_medium.is_none());
        assert!(!image.is_primary);
        assert!(image.is_active);
    }

    #[test]
    fn outlet_row_copies_the_reference() {
        let outlet_ref = OutletRef {
            outlet_id: Uuid::new_v4(),
            name: "Main Street".to_string(),
        };
        let row = ItemOutlet::from_ref(&outlet_ref);
        assert_eq!(row.outlet_id, outlet_ref.outlet_id);
        assert_eq!(row.name, "Main Street");
        assert!(row.is_active);
        assert!(row.sort_order.is_none());
    }

    #[test]
    fn blank_form_has_no_rows() {
        let form = ItemForm::default();
        assert!(form.units.is_empty());
        assert!(form.skus.is_empty());
        assert!(form.bom.is_none());
        assert!(!form.use_same_config);
        assert!(form.base_unit().is_none());
    }
}
