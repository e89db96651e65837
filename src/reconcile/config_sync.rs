use crate::models::{Sku, SkuConfig};

/// Copy the shared config onto every SKU, overwriting whatever each row held.
///
/// Callers gate this on the form's `use_same_config` flag; the function
/// itself applies unconditionally.
pub fn broadcast_config(skus: &mut [Sku], global: SkuConfig) {
    for sku in skus.iter_mut() {
        sku.config = global;
    }
}

/// Collapse the per-SKU configs into one shared view.
///
/// Starts from the first SKU's config and nulls every field any later SKU
/// disagrees on. Once a field is nulled it stays nulled for the rest of the
/// scan, even if the remaining SKUs agree with each other. An empty SKU list
/// falls back to the current shared config.
pub fn derive_common_config(skus: &[Sku], global: SkuConfig) -> SkuConfig {
    let Some(first) = skus.first() else {
        return global;
    };
    let mut base = first.config;
    for sku in &skus[1..] {
        if sku.config.track_stock != base.track_stock {
            base.track_stock = None;
        }
        if sku.config.allow_negative != base.allow_negative {
            base.allow_negative = None;
        }
        if sku.config.sellable != base.sellable {
            base.sellable = None;
        }
        if sku.config.purchasable != base.purchasable {
            base.purchasable = None;
        }
    }
    base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bom, SkuCost, SkuKey, SkuPrice};
    use uuid::Uuid;

    fn sku_with(config: SkuConfig) -> Sku {
        let unit_temp_id = Uuid::new_v4();
        Sku {
            temp_id: Uuid::new_v4(),
            item_sku_id: None,
            match_key: SkuKey::non_variant(unit_temp_id),
            display_name: String::new(),
            code: String::new(),
            barcode: String::new(),
            is_active: true,
            unit_temp_id,
            item_unit_id: None,
            variant_unit_temp_id: None,
            item_variant_unit_id: None,
            config,
            cost: SkuCost::default(),
            price: SkuPrice::default(),
            bom: Bom::default(),
            overrides: Vec::new(),
        }
    }

    fn config(track: Option<bool>, sell: Option<bool>) -> SkuConfig {
        SkuConfig {
            track_stock: track,
            sellable: sell,
            ..SkuConfig::default()
        }
    }

    #[test]
    fn broadcast_overwrites_every_row() {
        let mut skus = vec![
            sku_with(config(Some(false), None)),
            sku_with(config(None, Some(false))),
        ];
        let global = config(Some(true), Some(true));

        broadcast_config(&mut skus, global);

        assert!(skus.iter().all(|sku| sku.config == global));
    }

    #[test]
    fn derive_keeps_fields_all_rows_agree_on() {
        let skus = vec![
            sku_with(config(Some(true), Some(false))),
            sku_with(config(Some(true), Some(false))),
        ];

        let common = derive_common_config(&skus, SkuConfig::default());
        assert_eq!(common, config(Some(true), Some(false)));
    }

    #[test]
    fn derive_nulls_disagreeing_fields_only() {
        let skus = vec![
            sku_with(config(Some(true), Some(true))),
            sku_with(config(Some(false), Some(true))),
        ];

        let common = derive_common_config(&skus, SkuConfig::default());
        assert_eq!(common, config(None, Some(true)));
    }

    #[test]
    fn nulled_field_stays_nulled_even_if_later_rows_agree() {
        let skus = vec![
            sku_with(config(Some(true), None)),
            sku_with(config(Some(false), None)),
            sku_with(config(Some(false), None)),
        ];

        let common = derive_common_config(&skus, SkuConfig::default());
        assert_eq!(common.track_stock, None);
    }

    #[test]
    fn empty_sku_list_returns_the_shared_config() {
        let global = config(Some(true), Some(false));
        assert_eq!(derive_common_config(&[], global), global);
    }

    #[test]
    fn broadcast_then_derive_round_trips_the_shared_config() {
        let mut skus = vec![
            sku_with(config(Some(false), Some(true))),
            sku_with(config(Some(true), None)),
        ];
        let global = config(Some(true), Some(true));

        broadcast_config(&mut skus, global);
        assert_eq!(derive_common_config(&skus, SkuConfig::default()), global);
    }
}
