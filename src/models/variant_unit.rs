use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The pairing of one variant with one unit, the stockable/sellable grain.
///
/// `(variant_temp_id, unit_temp_id)` links the pairing to its parents within
/// the session; the `item_*` ids are the persisted identities carried across
/// regenerations when the same combination survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantUnit {
    pub temp_id: Uuid,
    #[serde(default)]
    pub item_variant_unit_id: Option<Uuid>,
    #[serde(default)]
    pub item_variant_id: Option<Uuid>,
    #[serde(default)]
    pub item_unit_id: Option<Uuid>,
    pub variant_temp_id: Uuid,
    pub unit_temp_id: Uuid,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}
