//! `forgemarket-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure
//! concerns): entity identity, the shared error model, and the capability
//! components (toggle state, audit timestamps, per-locale translations) that
//! marketplace entities embed by composition.

pub mod entity;
pub mod error;
pub mod id;
pub mod locale;
pub mod timestamps;
pub mod toggle;
pub mod translation;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use locale::Locale;
pub use timestamps::Timestamps;
pub use toggle::Toggle;
pub use translation::{Translation, TranslationSet};
