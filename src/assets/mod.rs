//! Asset records and the vocabulary around them
//!
//! Every other module speaks in these types: the store keeps a `Vec<Asset>`,
//! the ingestion pipeline produces them, and section views filter them by
//! [`Section`] and [`TypeFilter`].

pub mod types;

pub use types::{Asset, AssetType, IconKind, Section, TypeFilter};
