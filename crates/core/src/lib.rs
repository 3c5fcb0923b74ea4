//! `shoplist-core` — the shopping item model.
//!
//! This crate is **pure domain**: item records, name matching and merge
//! rules. Storage and HTTP live in `shoplist-infra` and `shoplist-api`.

pub mod error;
pub mod item;

pub use error::{ItemError, ItemResult, NotAnObject};
pub use item::Item;
