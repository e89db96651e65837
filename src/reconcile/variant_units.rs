use uuid::Uuid;

use crate::codes::sku_display_name;
use crate::models::{ItemUnit, Variant, VariantUnit};

/// Rebuild the variant × unit pairing list.
///
/// A previous pairing with the same `(variant_temp_id, unit_temp_id)` hands
/// its persisted identity, denormalized ids, and activity to the rebuilt
/// row; its temp id is the persisted id when there is one, fresh otherwise.
/// Display names are always recomputed from the current item name.
pub fn generate_variant_units(
    item_name: &str,
    variants: &[Variant],
    units: &[ItemUnit],
    previous: &[VariantUnit],
) -> Vec<VariantUnit> {
    let mut next = Vec::with_capacity(variants.len() * units.len());
    for variant in variants {
        for unit in units {
            let existing = previous.iter().find(|pairing| {
                pairing.variant_temp_id == variant.temp_id && pairing.unit_temp_id == unit.temp_id
            });

            next.push(VariantUnit {
                temp_id: existing
                    .and_then(|pairing| pairing.item_variant_unit_id)
                    .unwrap_or_else(Uuid::new_v4),
                item_variant_unit_id: existing.and_then(|pairing| pairing.item_variant_unit_id),
                item_variant_id: existing
                    .and_then(|pairing| pairing.item_variant_id)
                    .or(variant.item_variant_id),
                item_unit_id: existing
                    .and_then(|pairing| pairing.item_unit_id)
                    .or(unit.item_unit_id),
                variant_temp_id: variant.temp_id,
                unit_temp_id: unit.temp_id,
                display_name: sku_display_name(item_name, Some(variant), Some(unit)),
                is_active: existing.map(|pairing| pairing.is_active).unwrap_or(true),
            });
        }
    }
    next
}
