//! Catalog item model shared across Marquee crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod error;
pub mod ids;
pub mod image;
pub mod item;

pub use catalog::{CatalogListing, decode_items, decode_listing};
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ItemId, MediaKind};
pub use image::{ImageBase, ImagePath, PosterSize, PosterSource};
pub use item::Item;
