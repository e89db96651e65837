//! Shared fixtures: an in-memory catalog seeded with one persisted
//! single-axis item ("Ceramic Mug" in red/blue, sold as PCS/BOX) plus the
//! ids tests need to assert identity preservation.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;
use skuforge::config::FormSettings;
use skuforge::events::FormEvent;
use skuforge::models::{
    CategoryRef, ItemDetail, ItemUnitDetail, OutletDetail, OutletRef, SkuCost, SkuDetail, UnitRef,
    VariantDetail, VariantOption, VariantUnitDetail,
};
use skuforge::session::ItemFormSession;
use skuforge::source::MemoryCatalogSource;
use tokio::sync::mpsc;
use uuid::Uuid;

/// Every id the seeded item was persisted with.
pub struct SeededItem {
    pub item_id: Uuid,
    pub base_item_unit_id: Uuid,
    pub pack_item_unit_id: Uuid,
    pub red_item_variant_id: Uuid,
    pub blue_item_variant_id: Uuid,
    pub red_base_pairing_id: Uuid,
    pub sku_ids: Vec<Uuid>,
    pub spare_master_unit_id: Uuid,
    pub outlet_id: Uuid,
}

pub struct TestCatalog {
    pub source: Arc<MemoryCatalogSource>,
    pub item: SeededItem,
}

pub fn unit_ref(code: &str, name: &str) -> UnitRef {
    UnitRef {
        unit_id: Uuid::new_v4(),
        code: code.to_string(),
        name: name.to_string(),
    }
}

fn unit_detail(item_unit_id: Uuid, unit: &UnitRef, is_base: bool) -> ItemUnitDetail {
    ItemUnitDetail {
        item_unit_id,
        unit_id: Some(unit.unit_id),
        unit: Some(unit.clone()),
        conversion: if is_base { dec!(1) } else { dec!(12) },
        min_sales_qty: dec!(1),
        is_base,
        is_stock: is_base,
        is_purchase: is_base,
        is_sales: is_base,
        is_transfer: is_base,
    }
}

fn variant_detail(item_variant_id: Uuid, value: &str, sort_order: i32) -> VariantDetail {
    VariantDetail {
        item_variant_id,
        options_key: format!("color:{}", value),
        options: vec![VariantOption {
            axis: "color".to_string(),
            value: value.to_string(),
        }],
        display_name: format!("Ceramic Mug {}", value),
        is_active: true,
        sort_order,
    }
}

fn pairing_detail(id: Uuid, item_variant_id: Uuid, item_unit_id: Uuid) -> VariantUnitDetail {
    VariantUnitDetail {
        item_variant_unit_id: id,
        item_variant_id: Some(item_variant_id),
        item_unit_id: Some(item_unit_id),
        display_name: String::new(),
        is_active: true,
    }
}

fn sku_detail(
    item_sku_id: Uuid,
    item_unit_id: Uuid,
    item_variant_unit_id: Uuid,
    display_name: &str,
    code: &str,
) -> SkuDetail {
    SkuDetail {
        item_sku_id,
        display_name: display_name.to_string(),
        code: code.to_string(),
        barcode: String::new(),
        is_active: true,
        item_unit_id: Some(item_unit_id),
        item_variant_unit_id: Some(item_variant_unit_id),
        config: Default::default(),
        cost: SkuCost {
            cost: dec!(4.50),
            ..Default::default()
        },
        price: Default::default(),
        bom: Default::default(),
        overrides: Vec::new(),
    }
}

/// Seeds the catalog with reference lists and one fully persisted item:
/// two units, two color variants, four pairings, four SKUs.
pub fn seeded_catalog() -> TestCatalog {
    let source = Arc::new(MemoryCatalogSource::new());

    let pcs = unit_ref("PCS", "Piece");
    let bx = unit_ref("BOX", "Box of twelve");
    let spare = unit_ref("PLT", "Pallet");
    source.seed_units(vec![pcs.clone(), bx.clone(), spare.clone()]);

    let outlet = OutletRef {
        outlet_id: Uuid::new_v4(),
        name: "Main store".to_string(),
    };
    source.seed_outlets(vec![outlet.clone()]);
    source.seed_categories(vec![CategoryRef {
        item_category_id: Uuid::new_v4(),
        name: "Drinkware".to_string(),
    }]);

    let item_id = Uuid::new_v4();
    let base_item_unit_id = Uuid::new_v4();
    let pack_item_unit_id = Uuid::new_v4();
    let red_item_variant_id = Uuid::new_v4();
    let blue_item_variant_id = Uuid::new_v4();

    let red_base = Uuid::new_v4();
    let red_pack = Uuid::new_v4();
    let blue_base = Uuid::new_v4();
    let blue_pack = Uuid::new_v4();

    let sku_ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();

    let detail = ItemDetail {
        item_id,
        name: "Ceramic Mug".to_string(),
        description: None,
        item_category_id: None,
        has_variant: true,
        units: vec![
            unit_detail(base_item_unit_id, &pcs, true),
            unit_detail(pack_item_unit_id, &bx, false),
        ],
        variants: vec![
            variant_detail(red_item_variant_id, "red", 1),
            variant_detail(blue_item_variant_id, "blue", 2),
        ],
        variant_units: vec![
            pairing_detail(red_base, red_item_variant_id, base_item_unit_id),
            pairing_detail(red_pack, red_item_variant_id, pack_item_unit_id),
            pairing_detail(blue_base, blue_item_variant_id, base_item_unit_id),
            pairing_detail(blue_pack, blue_item_variant_id, pack_item_unit_id),
        ],
        skus: vec![
            sku_detail(
                sku_ids[0],
                base_item_unit_id,
                red_base,
                "Ceramic Mug red (PCS)",
                "CERAMIC-MUG-RED-PCS",
            ),
            sku_detail(
                sku_ids[1],
                pack_item_unit_id,
                red_pack,
                "Ceramic Mug red (BOX)",
                "CERAMIC-MUG-RED-BOX",
            ),
            sku_detail(
                sku_ids[2],
                base_item_unit_id,
                blue_base,
                "Ceramic Mug blue (PCS)",
                "CERAMIC-MUG-BLUE-PCS",
            ),
            sku_detail(
                sku_ids[3],
                pack_item_unit_id,
                blue_pack,
                "Ceramic Mug blue (BOX)",
                "CERAMIC-MUG-BLUE-BOX",
            ),
        ],
        modifiers: Vec::new(),
        images: Vec::new(),
        outlets: vec![OutletDetail {
            outlet_id: outlet.outlet_id,
            is_active: true,
            sort_order: None,
            outlet: Some(outlet.clone()),
        }],
        bom: None,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    };
    source.seed_item(detail);

    TestCatalog {
        source,
        item: SeededItem {
            item_id,
            base_item_unit_id,
            pack_item_unit_id,
            red_item_variant_id,
            blue_item_variant_id,
            red_base_pairing_id: red_base,
            sku_ids,
            spare_master_unit_id: spare.unit_id,
            outlet_id: outlet.outlet_id,
        },
    }
}

pub fn session_for(catalog: &TestCatalog) -> (ItemFormSession, mpsc::Receiver<FormEvent>) {
    ItemFormSession::with_channel(catalog.source.clone(), FormSettings::default())
}

/// Collects whatever events have been emitted so far.
pub fn drain_events(rx: &mut mpsc::Receiver<FormEvent>) -> Vec<FormEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}
