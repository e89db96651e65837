//! Form-state data model for one catalog item under edit.

pub mod detail;
pub mod item;
pub mod reference;
pub mod sku;
pub mod unit;
pub mod variant;
pub mod variant_unit;

pub use detail::{
    ItemDetail, ItemUnitDetail, ModifierDetail, OutletDetail, SkuDetail, VariantDetail,
    VariantUnitDetail,
};
pub use item::{ItemForm, ItemImage, ItemModifier, ItemOutlet};
pub use reference::{CategoryRef, MaterialSkuRef, ModifierGroupRef, ModifierOptionRef, OutletRef};
pub use sku::{Bom, BomLine, CostMethod, Sku, SkuConfig, SkuCost, SkuKey, SkuOverride, SkuPrice};
pub use unit::{ItemUnit, UnitRef};
pub use variant::{Variant, VariantGroup, VariantGroupOption, VariantOption};
pub use variant_unit::VariantUnit;
