use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// One selectable value inside a variant axis group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantGroupOption {
    pub temp_id: Uuid,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl VariantGroupOption {
    pub fn blank() -> Self {
        Self {
            temp_id: Uuid::new_v4(),
            name: String::new(),
            is_active: true,
        }
    }
}

/// A user-defined variant dimension ("Color", "Size") with its option values.
///
/// Only options that are active and have a non-blank trimmed name participate
/// in combination generation; a blank group name falls back to the axis slug
/// `axis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "crate::validation::validate_usable_options"))]
pub struct VariantGroup {
    pub temp_id: Uuid,
    #[validate(custom = "crate::validation::validate_non_blank")]
    pub name: String,
    #[serde(default)]
    pub options: Vec<VariantGroupOption>,
}

impl VariantGroup {
    /// Blank group seeded with one blank active option row.
    pub fn blank() -> Self {
        Self {
            temp_id: Uuid::new_v4(),
            name: String::new(),
            options: vec![VariantGroupOption::blank()],
        }
    }
}

/// One `axis:value` assignment inside a generated variant, both in slug form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantOption {
    pub axis: String,
    pub value: String,
}

/// One concrete combination across all variant axes.
///
/// `options_key` joins the `axis:value` pairs with `|` and is the stable
/// identity used to match a regenerated combination back to its predecessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub temp_id: Uuid,
    #[serde(default)]
    pub item_variant_id: Option<Uuid>,
    pub options_key: String,
    #[serde(default)]
    pub options: Vec<VariantOption>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

fn default_true() -> bool {
    true
}
