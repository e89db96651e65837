use uuid::Uuid;

use crate::codes::{sku_code, sku_display_name};
use crate::models::{ItemUnit, Sku, SkuConfig, SkuKey, Variant, VariantUnit};

/// Everything the SKU pass reads, borrowed from the form state.
#[derive(Debug, Clone, Copy)]
pub struct SkuRegenInput<'a> {
    pub item_name: &'a str,
    pub units: &'a [ItemUnit],
    pub variants: &'a [Variant],
    pub variant_units: &'a [VariantUnit],
    pub has_variant: bool,
    pub previous: &'a [Sku],
    pub global_config: SkuConfig,
    /// True only while persisted data is being loaded and merged; suppresses
    /// creation of combinations that have no previous match yet.
    pub initializing: bool,
}

/// Derive the authoritative SKU list from the current name, units, and
/// variants, reusing previously known SKUs wherever possible.
///
/// Candidates are matched against the previous list by `match_key`; a match
/// hands over row identity, barcode, and activity, and a persisted match
/// also hands over the nested cost/price/bom/config/overrides. Candidates
/// colliding with a persisted previous SKU on
/// `(item_variant_unit_id, item_unit_id)` are dropped, and the persisted
/// rows themselves pass through untouched ahead of the surviving candidates.
pub fn regenerate_skus(input: SkuRegenInput<'_>) -> Vec<Sku> {
    let mut candidates: Vec<Sku> = Vec::new();

    if !input.has_variant || input.variants.is_empty() {
        for unit in input.units {
            let key = SkuKey::non_variant(unit.temp_id);
            let existing = find_by_key(input.previous, &key);
            candidates.push(build_candidate(&input, key, None, unit, None, existing));
        }
    } else {
        for variant in input.variants {
            for unit in input.units {
                let pairing = input.variant_units.iter().find(|pairing| {
                    pairing.variant_temp_id == variant.temp_id
                        && pairing.unit_temp_id == unit.temp_id
                });
                let key = SkuKey::variant(&variant.options_key, unit.temp_id);
                let existing = find_by_key(input.previous, &key);

                // guard applies to this branch only
                if existing.is_none() && input.initializing {
                    continue;
                }

                candidates.push(build_candidate(
                    &input,
                    key,
                    Some(variant),
                    unit,
                    pairing,
                    existing,
                ));
            }
        }
    }

    let persisted: Vec<Sku> = input
        .previous
        .iter()
        .filter(|sku| sku.is_persisted())
        .cloned()
        .collect();

    let surviving: Vec<Sku> = candidates
        .into_iter()
        .filter(|candidate| {
            !persisted.iter().any(|kept| {
                kept.item_variant_unit_id == candidate.item_variant_unit_id
                    && kept.item_unit_id == candidate.item_unit_id
            })
        })
        .collect();

    persisted.into_iter().chain(surviving).collect()
}

fn find_by_key<'a>(previous: &'a [Sku], key: &SkuKey) -> Option<&'a Sku> {
    previous.iter().find(|sku| sku.match_key == *key)
}

fn build_candidate(
    input: &SkuRegenInput<'_>,
    key: SkuKey,
    variant: Option<&Variant>,
    unit: &ItemUnit,
    pairing: Option<&VariantUnit>,
    existing: Option<&Sku>,
) -> Sku {
    // nested business data only survives from rows that reached storage
    let persisted_source = existing.filter(|sku| sku.is_persisted());

    Sku {
        temp_id: existing
            .map(|sku| sku.temp_id)
            .unwrap_or_else(Uuid::new_v4),
        item_sku_id: existing.and_then(|sku| sku.item_sku_id),
        match_key: key,
        display_name: sku_display_name(input.item_name, variant, Some(unit)),
        code: sku_code(input.item_name, variant, Some(unit)),
        barcode: existing
            .map(|sku| sku.barcode.clone())
            .unwrap_or_default(),
        is_active: existing.map(|sku| sku.is_active).unwrap_or(true),
        unit_temp_id: unit.temp_id,
        item_unit_id: unit.item_unit_id,
        variant_unit_temp_id: pairing.map(|p| p.temp_id),
        item_variant_unit_id: pairing.and_then(|p| p.item_variant_unit_id),
        config: persisted_source
            .map(|sku| sku.config)
            .unwrap_or(input.global_config),
        cost: persisted_source
            .map(|sku| sku.cost.clone())
            .unwrap_or_default(),
        price: persisted_source
            .map(|sku| sku.price.clone())
            .unwrap_or_default(),
        bom: persisted_source
            .map(|sku| sku.bom.clone())
            .unwrap_or_default(),
        overrides: persisted_source
            .map(|sku| sku.overrides.clone())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CostMethod, SkuCost, UnitRef, VariantOption};
    use crate::reconcile::variant_units::generate_variant_units;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn unit(code: &str) -> ItemUnit {
        let mut unit = ItemUnit::new(true);
        unit.unit = Some(UnitRef {
            unit_id: Uuid::new_v4(),
            code: code.to_string(),
            name: code.to_string(),
        });
        unit
    }

    fn variant(value: &str) -> Variant {
        Variant {
            temp_id: Uuid::new_v4(),
            item_variant_id: None,
            options_key: format!("color:{}", value),
            options: vec![VariantOption {
                axis: "color".to_string(),
                value: value.to_string(),
            }],
            display_name: value.to_string(),
            is_active: true,
            sort_order: 1,
        }
    }

    fn input<'a>(
        name: &'a str,
        units: &'a [ItemUnit],
        variants: &'a [Variant],
        variant_units: &'a [VariantUnit],
        previous: &'a [Sku],
    ) -> SkuRegenInput<'a> {
        SkuRegenInput {
            item_name: name,
            units,
            variants,
            variant_units,
            has_variant: !variants.is_empty(),
            previous,
            global_config: SkuConfig::default(),
            initializing: false,
        }
    }

    #[test]
    fn non_variant_item_gets_one_sku_per_unit() {
        let units = vec![unit("PCS"), unit("BOX")];
        let skus = regenerate_skus(input("Mug", &units, &[], &[], &[]));
        assert_eq!(skus.len(), 2);
        assert_eq!(skus[0].code, "MUG-PCS");
        assert_eq!(skus[1].code, "MUG-BOX");
        assert!(skus.iter().all(|s| s.variant_unit_temp_id.is_none()));
        assert!(skus.iter().all(|s| s.cost.method == CostMethod::Fifo));
        assert!(skus.iter().all(|s| s.price.qty_threshold == Decimal::ONE));
    }

    #[test]
    fn variant_item_gets_one_sku_per_variant_unit_pair() {
        let units = vec![unit("PCS")];
        let variants = vec![variant("red"), variant("blue")];
        let pairings = generate_variant_units("Mug", &variants, &units, &[]);
        let skus = regenerate_skus(input("Mug", &units, &variants, &pairings, &[]));
        assert_eq!(skus.len(), 2);
        assert_eq!(skus[0].code, "MUG-RED-PCS");
        assert_eq!(skus[0].variant_unit_temp_id, Some(pairings[0].temp_id));
        assert_eq!(skus[0].match_key, SkuKey::variant("color:red", units[0].temp_id));
    }

    #[test]
    fn key_match_survives_a_rename() {
        let units = vec![unit("PCS")];
        let variants = vec![variant("red")];
        let pairings = generate_variant_units("Mug", &variants, &units, &[]);
        let first = regenerate_skus(input("Mug", &units, &variants, &pairings, &[]));

        let mut previous = first;
        previous[0].barcode = "888111".to_string();

        let renamed = regenerate_skus(input("Tumbler", &units, &variants, &pairings, &previous));
        assert_eq!(renamed.len(), 1);
        assert_eq!(renamed[0].temp_id, previous[0].temp_id);
        assert_eq!(renamed[0].barcode, "888111");
        assert_eq!(renamed[0].code, "TUMBLER-RED-PCS");
    }

    #[test]
    fn persisted_match_carries_nested_data() {
        let units = vec![unit("PCS")];
        let variants = vec![variant("red")];
        let mut pairings = generate_variant_units("Mug", &variants, &units, &[]);
        pairings[0].item_variant_unit_id = Some(Uuid::new_v4());
        let mut previous = regenerate_skus(input("Mug", &units, &variants, &pairings, &[]));
        previous[0].item_sku_id = Some(Uuid::new_v4());
        previous[0].cost = SkuCost {
            cost: dec!(4.25),
            last_cost: dec!(4.00),
            method: CostMethod::Average,
        };

        let variants_grown = vec![variants[0].clone(), variant("blue")];
        let pairings_grown =
            generate_variant_units("Mug", &variants_grown, &units, &pairings);
        let regenerated = regenerate_skus(input(
            "Mug",
            &units,
            &variants_grown,
            &pairings_grown,
            &previous,
        ));

        assert_eq!(regenerated.len(), 2);
        let kept = &regenerated[0];
        assert_eq!(kept.item_sku_id, previous[0].item_sku_id);
        assert_eq!(kept.cost.cost, dec!(4.25));
        assert_eq!(kept.cost.method, CostMethod::Average);
        let fresh = &regenerated[1];
        assert_eq!(fresh.code, "MUG-BLUE-PCS");
        assert_eq!(fresh.cost, SkuCost::default());
    }

    #[test]
    fn unpersisted_match_keeps_identity_but_resets_business_data() {
        let units = vec![unit("PCS")];
        let variants = vec![variant("red")];
        let pairings = generate_variant_units("Mug", &variants, &units, &[]);
        let mut previous = regenerate_skus(input("Mug", &units, &variants, &pairings, &[]));
        previous[0].cost.cost = dec!(9.99);

        let regenerated = regenerate_skus(input("Mug", &units, &variants, &pairings, &previous));
        assert_eq!(regenerated[0].temp_id, previous[0].temp_id);
        assert_eq!(regenerated[0].cost.cost, Decimal::ZERO);
    }

    #[test]
    fn initializing_guard_skips_unknown_variant_combinations() {
        let units = vec![unit("PCS")];
        let variants = vec![variant("red")];
        let pairings = generate_variant_units("Mug", &variants, &units, &[]);
        let mut guarded = input("Mug", &units, &variants, &pairings, &[]);
        guarded.initializing = true;
        assert!(regenerate_skus(guarded).is_empty());
    }

    #[test]
    fn initializing_guard_leaves_the_non_variant_branch_alone() {
        let units = vec![unit("PCS")];
        let mut guarded = input("Mug", &units, &[], &[], &[]);
        guarded.initializing = true;
        assert_eq!(regenerate_skus(guarded).len(), 1);
    }

    #[test]
    fn persisted_rows_pass_through_ahead_of_candidates() {
        let units = vec![unit("PCS")];
        let variants = vec![variant("red")];
        let mut pairings = generate_variant_units("Mug", &variants, &units, &[]);
        pairings[0].item_variant_unit_id = Some(Uuid::new_v4());
        let mut previous = regenerate_skus(input("Mug", &units, &variants, &pairings, &[]));
        previous[0].item_sku_id = Some(Uuid::new_v4());
        previous[0].display_name = "Hand-tuned".to_string();

        let regenerated =
            regenerate_skus(input("Mug", &units, &variants, &pairings, &previous));

        assert_eq!(regenerated.len(), 1);
        assert_eq!(regenerated[0].display_name, "Hand-tuned");
    }

    #[test]
    fn no_two_rows_share_a_fully_persisted_linkage_pair() {
        let mut units = vec![unit("PCS")];
        units[0].item_unit_id = Some(Uuid::new_v4());
        let variants = vec![variant("red")];
        let mut pairings = generate_variant_units("Mug", &variants, &units, &[]);
        pairings[0].item_variant_unit_id = Some(Uuid::new_v4());

        let mut previous = regenerate_skus(input("Mug", &units, &variants, &pairings, &[]));
        previous[0].item_sku_id = Some(Uuid::new_v4());

        let regenerated = regenerate_skus(input("Mug", &units, &variants, &pairings, &previous));
        assert_eq!(regenerated.len(), 1);
        assert_eq!(regenerated[0].item_sku_id, previous[0].item_sku_id);
    }
}
