//! Derivation passes that keep variants, variant/unit pairings, and SKUs
//! consistent with the axis groups, units, and item name they are built from.
//!
//! Each pass is a pure function from the current form state (plus the
//! previous derived list) to a fresh list, reusing prior rows by identity so
//! user- and server-assigned data survives regeneration.

pub mod config_sync;
pub mod skus;
pub mod variant_units;
pub mod variants;

pub use config_sync::{broadcast_config, derive_common_config};
pub use skus::{regenerate_skus, SkuRegenInput};
pub use variant_units::generate_variant_units;
pub use variants::generate_variants;
