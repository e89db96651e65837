use uuid::Uuid;

use crate::codes::{slugify, DISPLAY_SEPARATOR};
use crate::models::{Variant, VariantGroup, VariantOption};

/// Axis slug used when a group has no name yet.
const FALLBACK_AXIS: &str = "axis";

/// Rebuild the variant list as the cartesian product of all active,
/// non-blank options across the axis groups, in group order.
///
/// A combination whose `options_key` matches a previous variant keeps that
/// variant's `temp_id`, persisted id, and activity, so identity survives
/// axis edits that leave the combination itself unchanged. Ordering and
/// `sort_order` always come from the fresh pass. No groups, or any group
/// with zero usable options, yields an empty list.
pub fn generate_variants(groups: &[VariantGroup], previous: &[Variant]) -> Vec<Variant> {
    if groups.is_empty() {
        return Vec::new();
    }

    let mut acc: Vec<Vec<VariantOption>> = vec![Vec::new()];
    for group in groups {
        let raw_name = if group.name.is_empty() {
            FALLBACK_AXIS
        } else {
            group.name.as_str()
        };
        let axis = slugify(raw_name);
        let active_options: Vec<&str> = group
            .options
            .iter()
            .filter(|opt| opt.is_active && !opt.name.trim().is_empty())
            .map(|opt| opt.name.as_str())
            .collect();

        let mut next = Vec::with_capacity(acc.len() * active_options.len());
        for base in &acc {
            for option_name in &active_options {
                let mut combo = base.clone();
                assign_axis(&mut combo, &axis, slugify(option_name));
                next.push(combo);
            }
        }
        acc = next;
    }

    let mut claimed = vec![false; previous.len()];
    let mut variants = Vec::with_capacity(acc.len());
    for (index, options) in acc.into_iter().enumerate() {
        let options_key = options
            .iter()
            .map(|opt| format!("{}:{}", opt.axis, opt.value))
            .collect::<Vec<_>>()
            .join("|");

        let matched = previous
            .iter()
            .enumerate()
            .find(|(prev_index, prev)| !claimed[*prev_index] && prev.options_key == options_key);
        let (temp_id, item_variant_id, is_active) = match matched {
            Some((prev_index, prev)) => {
                claimed[prev_index] = true;
                (prev.temp_id, prev.item_variant_id, prev.is_active)
            }
            None => (Uuid::new_v4(), None, true),
        };

        let display_name = options
            .iter()
            .map(|opt| opt.value.replace('-', " "))
            .collect::<Vec<_>>()
            .join(DISPLAY_SEPARATOR);

        variants.push(Variant {
            temp_id,
            item_variant_id,
            options_key,
            options,
            display_name,
            is_active,
            sort_order: (index + 1) as i32,
        });
    }
    variants
}

/// A later group with the same axis slug replaces the value instead of
/// stacking a second entry, keeping one value per axis.
fn assign_axis(combo: &mut Vec<VariantOption>, axis: &str, value: String) {
    if let Some(existing) = combo.iter_mut().find(|opt| opt.axis == axis) {
        existing.value = value;
    } else {
        combo.push(VariantOption {
            axis: axis.to_string(),
            value,
        });
    }
}
