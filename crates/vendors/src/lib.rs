//! `forgemarket-vendors` — marketplace vendor domain model.
//!
//! This crate contains the vendor aggregate and the thin slices of the host
//! platform it touches: sales channels and catalog products a vendor can be
//! attached to, per-locale vendor translations, and the persisted record
//! shapes. Pure domain rules only; storage, HTTP and file I/O live with the
//! host.

pub mod channel;
pub mod product;
pub mod record;
pub mod translation;
pub mod vendor;

pub use channel::{Channel, ChannelId, SalesChannel};
pub use product::{CatalogProduct, Product, ProductId};
pub use record::{VendorRecord, VendorTranslationRecord};
pub use translation::VendorTranslation;
pub use vendor::{LogoFile, Vendor, VendorId, VendorsAware};
