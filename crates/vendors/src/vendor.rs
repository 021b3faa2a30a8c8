//! Vendor aggregate for the marketplace module.
//!
//! A vendor is a marketplace seller attached to sales channels and catalog
//! products. Associations are kept consistent from both ends when the
//! counterpart opts into the vendors-aware capability; counterparts without
//! it are simply left untouched. All association operations are tolerant:
//! re-adding and re-removing are silent no-ops, never errors.

use core::fmt;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use forgemarket_core::{Entity, Locale, Timestamps, Toggle, TranslationSet};

use crate::channel::{ChannelId, SalesChannel};
use crate::product::{CatalogProduct, ProductId};
use crate::translation::VendorTranslation;

// ─────────────────────────────────────────────────────────────────────────────
// Vendor ID
// ─────────────────────────────────────────────────────────────────────────────

forgemarket_core::entity_id!(
    /// Unique identifier of a vendor.
    VendorId
);

// ─────────────────────────────────────────────────────────────────────────────
// Vendors-aware capability
// ─────────────────────────────────────────────────────────────────────────────

/// Capability for counterparts that keep their own back-reference set of
/// associated vendors.
///
/// [`Vendor::add_channel`] and friends update the vendor's own set first and
/// then mirror the change through this trait, so both ends agree after every
/// operation. The operations are idempotent by contract.
pub trait VendorsAware {
    /// Record `vendor` in the back-reference set (no-op if present).
    fn add_vendor(&mut self, vendor: VendorId);

    /// Drop `vendor` from the back-reference set (no-op if absent).
    fn remove_vendor(&mut self, vendor: VendorId);

    /// Membership test for the back-reference set.
    fn has_vendor(&self, vendor: VendorId) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// Logo upload handle
// ─────────────────────────────────────────────────────────────────────────────

/// Transient handle to an uploaded logo image.
///
/// Never persisted: only the stored filename ([`Vendor::logo_name`]) survives
/// a round trip through the record types. The actual bytes belong to the
/// host's file storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoFile {
    path: PathBuf,
}

impl LogoFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Vendor
// ─────────────────────────────────────────────────────────────────────────────

/// Marketplace seller.
///
/// Profile fields are stored verbatim; email format and slug uniqueness are
/// the host's concern and deliberately not enforced here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vendor {
    id: VendorId,
    name: String,
    slug: Option<String>,
    email: String,
    category: String,
    toggle: Toggle,
    timestamps: Timestamps,
    logo_file: Option<LogoFile>,
    logo_name: Option<String>,
    channels: BTreeSet<ChannelId>,
    products: BTreeSet<ProductId>,
    translations: TranslationSet<VendorTranslation>,
}

impl Vendor {
    /// Create an empty vendor with a fresh id.
    pub fn new() -> Self {
        Self::with_id(VendorId::new())
    }

    /// Create an empty vendor under an explicit id (rehydration, tests).
    pub fn with_id(id: VendorId) -> Self {
        Self {
            id,
            name: String::new(),
            slug: None,
            email: String::new(),
            category: String::new(),
            toggle: Toggle::default(),
            timestamps: Timestamps::now(),
            logo_file: None,
            logo_name: None,
            channels: BTreeSet::new(),
            products: BTreeSet::new(),
            translations: TranslationSet::new(),
        }
    }

    pub fn id(&self) -> VendorId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn slug(&self) -> Option<&str> {
        self.slug.as_deref()
    }

    pub fn set_slug(&mut self, slug: Option<String>) {
        self.slug = slug;
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Toggle and timestamps
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_enabled(&self) -> bool {
        self.toggle.is_enabled()
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.toggle.set_enabled(enabled);
    }

    pub fn enable(&mut self) {
        self.toggle.enable();
    }

    pub fn disable(&mut self) {
        self.toggle.disable();
    }

    /// Flip the enabled state.
    pub fn toggle(&mut self) {
        self.toggle.toggle();
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.timestamps.created_at()
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.timestamps.updated_at()
    }

    /// Record an update at the current instant.
    ///
    /// Plain profile setters do not touch on their own; the owning unit of
    /// work decides what counts as an update.
    pub fn touch(&mut self) {
        self.timestamps.touch();
    }

    /// Restore persisted audit stamps during rehydration.
    pub fn set_timestamps(&mut self, timestamps: Timestamps) {
        self.timestamps = timestamps;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Logo
    // ─────────────────────────────────────────────────────────────────────────

    pub fn logo_file(&self) -> Option<&LogoFile> {
        self.logo_file.as_ref()
    }

    /// Attach or clear the pending logo upload.
    ///
    /// Attaching touches the update stamp so persistence layers that diff on
    /// timestamps notice the change even though the handle itself is never
    /// stored. Clearing does not touch.
    pub fn set_logo_file(&mut self, logo_file: Option<LogoFile>) {
        if logo_file.is_some() {
            self.timestamps.touch();
        }
        self.logo_file = logo_file;
    }

    pub fn logo_name(&self) -> Option<&str> {
        self.logo_name.as_deref()
    }

    pub fn set_logo_name(&mut self, logo_name: Option<String>) {
        self.logo_name = logo_name;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Channels
    // ─────────────────────────────────────────────────────────────────────────

    /// Channels this vendor is attached to, ordered by id.
    pub fn channels(&self) -> &BTreeSet<ChannelId> {
        &self.channels
    }

    pub fn has_channel(&self, channel: ChannelId) -> bool {
        self.channels.contains(&channel)
    }

    /// Attach `channel`, mirroring the back-reference when the channel is
    /// vendors-aware. No-op if already attached.
    pub fn add_channel(&mut self, channel: &mut dyn SalesChannel) {
        if self.channels.insert(channel.id()) {
            if let Some(aware) = channel.vendors_aware() {
                aware.add_vendor(self.id);
            }
        }
    }

    /// Detach `channel`, mirroring the back-reference when the channel is
    /// vendors-aware. No-op if not attached.
    pub fn remove_channel(&mut self, channel: &mut dyn SalesChannel) {
        if self.channels.remove(&channel.id()) {
            if let Some(aware) = channel.vendors_aware() {
                aware.remove_vendor(self.id);
            }
        }
    }

    /// Replace the whole channel set without mirroring (rehydration).
    pub fn set_channels(&mut self, channels: BTreeSet<ChannelId>) {
        self.channels = channels;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Products
    // ─────────────────────────────────────────────────────────────────────────

    /// Products this vendor offers, ordered by id.
    pub fn products(&self) -> &BTreeSet<ProductId> {
        &self.products
    }

    pub fn has_product(&self, product: ProductId) -> bool {
        self.products.contains(&product)
    }

    /// Attach `product`, mirroring the back-reference when the product is
    /// vendors-aware. No-op if already attached.
    pub fn add_product(&mut self, product: &mut dyn CatalogProduct) {
        if self.products.insert(product.id()) {
            if let Some(aware) = product.vendors_aware() {
                aware.add_vendor(self.id);
            }
        }
    }

    /// Detach `product`, mirroring the back-reference when the product is
    /// vendors-aware. No-op if not attached.
    pub fn remove_product(&mut self, product: &mut dyn CatalogProduct) {
        if self.products.remove(&product.id()) {
            if let Some(aware) = product.vendors_aware() {
                aware.remove_vendor(self.id);
            }
        }
    }

    /// Replace the whole product set without mirroring (rehydration).
    pub fn set_products(&mut self, products: BTreeSet<ProductId>) {
        self.products = products;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Translations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn translations(&self) -> &TranslationSet<VendorTranslation> {
        &self.translations
    }

    pub fn translation(&self, locale: &Locale) -> Option<&VendorTranslation> {
        self.translations.get(locale)
    }

    /// Fetch the translation for `locale`, minting an empty one on first use.
    pub fn translation_mut(&mut self, locale: &Locale) -> &mut VendorTranslation {
        self.translations.get_or_create(locale)
    }

    /// Adopt `translation` unless one already exists for its locale.
    pub fn add_translation(&mut self, translation: VendorTranslation) {
        if !self.translations.contains(translation.locale()) {
            self.translations.insert(translation);
        }
    }

    pub fn remove_translation(&mut self, locale: &Locale) -> Option<VendorTranslation> {
        self.translations.remove(locale)
    }

    /// Locales this vendor has translations for, in order.
    pub fn locales(&self) -> impl Iterator<Item = &Locale> {
        self.translations.locales()
    }

    pub fn description(&self, locale: &Locale) -> Option<&str> {
        self.translations.get(locale).and_then(|t| t.description())
    }

    /// Set the description for `locale`, minting the translation on first use.
    pub fn set_description(&mut self, locale: &Locale, description: impl Into<String>) {
        self.translations
            .get_or_create(locale)
            .set_description(description);
    }

    /// Clear the description for `locale`. No-op when no translation exists.
    pub fn clear_description(&mut self, locale: &Locale) {
        if let Some(translation) = self.translations.get_mut(locale) {
            translation.clear_description();
        }
    }
}

impl Entity for Vendor {
    type Id = VendorId;

    fn id(&self) -> &VendorId {
        &self.id
    }
}

impl Default for Vendor {
    fn default() -> Self {
        Self::new()
    }
}

/// A vendor renders as its display name.
impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
