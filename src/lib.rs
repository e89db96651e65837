//! SkuForge
//!
//! Form-state engine for catalog item editing: derives variants, unit
//! pairings, and SKUs from user edits while preserving persisted identity.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod codes;
pub mod config;
pub mod errors;
pub mod events;
pub mod models;
pub mod normalize;
pub mod reconcile;
pub mod session;
pub mod source;
pub mod validation;

pub mod prelude {
    pub use crate::codes::*;
    pub use crate::config::*;
    pub use crate::errors::*;
    pub use crate::events::*;
    pub use crate::models::*;
    pub use crate::normalize::*;
    pub use crate::reconcile::*;
    pub use crate::session::*;
    pub use crate::source::*;
    pub use crate::validation::*;
}
