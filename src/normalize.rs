use uuid::Uuid;

use crate::models::{
    ItemDetail, ItemForm, ItemModifier, ItemOutlet, ItemUnit, Sku, SkuKey, Variant, VariantGroup,
    VariantGroupOption, VariantUnit,
};
use crate::reconcile::derive_common_config;

/// Shape a fetched item into editable form state.
///
/// Loaded rows adopt their persisted id as the session id, so the linkage
/// columns (`variant_temp_id`, `unit_temp_id`, ...) stay consistent without
/// any rewiring. A missing linkage id becomes the nil id, which matches no
/// live row. SKU match keys are rebuilt from the persisted linkage so later
/// regeneration passes recognize the loaded rows.
pub fn item_form_from_detail(detail: ItemDetail) -> ItemForm {
    let units: Vec<ItemUnit> = detail
        .units
        .into_iter()
        .map(|u| ItemUnit {
            temp_id: u.item_unit_id,
            item_unit_id: Some(u.item_unit_id),
            unit_id: u.unit_id,
            unit: u.unit,
            conversion: u.conversion,
            min_sales_qty: u.min_sales_qty,
            is_base: u.is_base,
            is_stock: u.is_stock,
            is_purchase: u.is_purchase,
            is_sales: u.is_sales,
            is_transfer: u.is_transfer,
        })
        .collect();

    let variants: Vec<Variant> = detail
        .variants
        .into_iter()
        .map(|v| Variant {
            temp_id: v.item_variant_id,
            item_variant_id: Some(v.item_variant_id),
            options_key: v.options_key,
            options: v.options,
            display_name: v.display_name,
            is_active: v.is_active,
            sort_order: v.sort_order,
        })
        .collect();

    let variant_units: Vec<VariantUnit> = detail
        .variant_units
        .into_iter()
        .map(|vu| VariantUnit {
            temp_id: vu.item_variant_unit_id,
            item_variant_unit_id: Some(vu.item_variant_unit_id),
            item_variant_id: vu.item_variant_id,
            item_unit_id: vu.item_unit_id,
            variant_temp_id: vu.item_variant_id.unwrap_or_else(Uuid::nil),
            unit_temp_id: vu.item_unit_id.unwrap_or_else(Uuid::nil),
            display_name: vu.display_name,
            is_active: vu.is_active,
        })
        .collect();

    let skus: Vec<Sku> = detail
        .skus
        .into_iter()
        .map(|s| {
            let match_key = rebuild_match_key(
                s.item_variant_unit_id,
                s.item_unit_id,
                &variants,
                &variant_units,
            );
            Sku {
                temp_id: s.item_sku_id,
                item_sku_id: Some(s.item_sku_id),
                match_key,
                display_name: s.display_name,
                code: s.code,
                barcode: s.barcode,
                is_active: s.is_active,
                unit_temp_id: s.item_unit_id.unwrap_or_else(Uuid::nil),
                item_unit_id: s.item_unit_id,
                variant_unit_temp_id: s.item_variant_unit_id,
                item_variant_unit_id: s.item_variant_unit_id,
                config: s.config,
                cost: s.cost,
                price: s.price,
                bom: s.bom,
                overrides: s.overrides,
            }
        })
        .collect();

    let modifiers: Vec<ItemModifier> = detail
        .modifiers
        .into_iter()
        .map(|m| ItemModifier {
            temp_id: m.item_modifier_id.unwrap_or_else(Uuid::new_v4),
            modifier_group_id: m.modifier_group_id,
            is_active: m.is_active,
            is_required: m.is_required,
            sort_order: m.sort_order,
        })
        .collect();

    let outlets: Vec<ItemOutlet> = detail
        .outlets
        .into_iter()
        .map(|o| ItemOutlet {
            outlet_id: o.outlet_id,
            is_active: o.is_active,
            name: o
                .outlet
                .map(|outlet| outlet.name)
                .unwrap_or_default(),
            sort_order: o.sort_order,
        })
        .collect();

    let config = derive_common_config(&skus, Default::default());

    ItemForm {
        name: detail.name,
        description: detail.description,
        item_category_id: detail.item_category_id,
        has_variant: detail.has_variant || !variants.is_empty(),
        units,
        variants,
        variant_units,
        skus,
        modifiers,
        images: detail.images,
        outlets,
        config,
        use_same_config: false,
        bom: detail.bom,
    }
}

/// Reconstruct a loaded SKU's match key from its persisted linkage.
///
/// Variant SKUs key on the owning variant's `options_key` plus the unit's
/// session id; non-variant SKUs key on the unit alone. Unresolvable linkage
/// gets a fresh key that no generated candidate can collide with.
fn rebuild_match_key(
    item_variant_unit_id: Option<Uuid>,
    item_unit_id: Option<Uuid>,
    variants: &[Variant],
    variant_units: &[VariantUnit],
) -> SkuKey {
    match item_variant_unit_id {
        Some(pairing_id) => {
            let owning_variant = variant_units
                .iter()
                .find(|vu| vu.item_variant_unit_id == Some(pairing_id))
                .and_then(|vu| {
                    variants
                        .iter()
                        .find(|v| v.temp_id == vu.variant_temp_id)
                });
            match owning_variant {
                Some(variant) => SkuKey::variant(
                    &variant.options_key,
                    item_unit_id.unwrap_or_else(Uuid::nil),
                ),
                None => SkuKey::non_variant(Uuid::new_v4()),
            }
        }
        None => match item_unit_id {
            Some(unit_id) => SkuKey::non_variant(unit_id),
            None => SkuKey::non_variant(Uuid::new_v4()),
        },
    }
}

/// Rebuild the editable axis groups from loaded variants.
///
/// Axes appear in first-seen order with the slug kept as the group name;
/// option names are the de-slugged values (hyphens back to spaces), deduped
/// per axis, all active.
pub fn variant_groups_from_variants(variants: &[Variant]) -> Vec<VariantGroup> {
    let mut axes: Vec<(String, Vec<String>)> = Vec::new();
    for variant in variants {
        for opt in &variant.options {
            let entry = match axes.iter_mut().find(|(axis, _)| *axis == opt.axis) {
                Some(entry) => entry,
                None => {
                    axes.push((opt.axis.clone(), Vec::new()));
                    axes.last_mut().unwrap()
                }
            };
            if !entry.1.contains(&opt.value) {
                entry.1.push(opt.value.clone());
            }
        }
    }

    axes.into_iter()
        .map(|(axis, values)| VariantGroup {
            temp_id: Uuid::new_v4(),
            name: axis,
            options: values
                .into_iter()
                .map(|value| VariantGroupOption {
                    temp_id: Uuid::new_v4(),
                    name: value.replace('-', " "),
                    is_active: true,
                })
                .collect(),
        })
        .collect()
}
