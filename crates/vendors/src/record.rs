//! Persisted record shapes for vendors.
//!
//! The aggregate itself never derives serde; these records are the stable
//! wire/storage view. Conversion back into the aggregate re-validates what
//! the store hands us, so a corrupted row surfaces as a [`DomainError`]
//! instead of a half-built vendor.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use forgemarket_core::{DomainError, DomainResult, Locale, Timestamps, Translation};

use crate::channel::ChannelId;
use crate::product::ProductId;
use crate::translation::VendorTranslation;
use crate::vendor::{Vendor, VendorId};

/// Persisted shape of one vendor translation row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorTranslationRecord {
    pub locale: String,
    pub description: Option<String>,
}

/// Persisted shape of a vendor: profile columns plus association ids.
///
/// The transient logo upload handle is deliberately absent; only the stored
/// `logo_name` survives persistence. Association ids are sorted so equal
/// vendors serialize identically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorRecord {
    pub id: VendorId,
    pub name: String,
    pub slug: Option<String>,
    pub email: String,
    pub category: String,
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub logo_name: Option<String>,
    pub channel_ids: Vec<ChannelId>,
    pub product_ids: Vec<ProductId>,
    pub translations: Vec<VendorTranslationRecord>,
}

impl From<&Vendor> for VendorRecord {
    fn from(vendor: &Vendor) -> Self {
        Self {
            id: vendor.id(),
            name: vendor.name().to_string(),
            slug: vendor.slug().map(str::to_string),
            email: vendor.email().to_string(),
            category: vendor.category().to_string(),
            enabled: vendor.is_enabled(),
            created_at: vendor.created_at(),
            updated_at: vendor.updated_at(),
            logo_name: vendor.logo_name().map(str::to_string),
            channel_ids: vendor.channels().iter().copied().collect(),
            product_ids: vendor.products().iter().copied().collect(),
            translations: vendor
                .translations()
                .iter()
                .map(|translation| VendorTranslationRecord {
                    locale: translation.locale().to_string(),
                    description: translation.description().map(str::to_string),
                })
                .collect(),
        }
    }
}

impl Vendor {
    /// Snapshot this vendor into its persisted shape.
    pub fn to_record(&self) -> VendorRecord {
        VendorRecord::from(self)
    }

    /// Rebuild a vendor from its persisted shape.
    ///
    /// Association mirroring does not run here: the counterpart rows carry
    /// their own back-references. Fails on malformed locale codes and on
    /// duplicate translation locales.
    pub fn from_record(record: VendorRecord) -> DomainResult<Self> {
        let mut vendor = Vendor::with_id(record.id);
        vendor.set_name(record.name);
        vendor.set_slug(record.slug);
        vendor.set_email(record.email);
        vendor.set_category(record.category);
        vendor.set_enabled(record.enabled);
        vendor.set_timestamps(Timestamps::from_parts(record.created_at, record.updated_at));
        vendor.set_logo_name(record.logo_name);
        vendor.set_channels(record.channel_ids.into_iter().collect());
        vendor.set_products(record.product_ids.into_iter().collect());

        for row in record.translations {
            let locale: Locale = row.locale.parse()?;
            if vendor.translation(&locale).is_some() {
                return Err(DomainError::validation(format!(
                    "duplicate translation locale `{locale}`"
                )));
            }
            let mut translation = VendorTranslation::for_locale(locale);
            if let Some(description) = row.description {
                translation.set_description(description);
            }
            vendor.add_translation(translation);
        }

        Ok(vendor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channel::Channel;
    use crate::product::Product;
    use crate::vendor::LogoFile;

    fn sample_vendor() -> (Vendor, Channel, Product) {
        let mut vendor = Vendor::new();
        vendor.set_name("Nordic Crafts");
        vendor.set_slug(Some("nordic-crafts".to_string()));
        vendor.set_email("hello@nordic-crafts.test");
        vendor.set_category("handmade");
        vendor.set_logo_name(Some("logo-8f3a.png".to_string()));

        let mut channel = Channel::new("WEB-EU", "European webstore");
        let mut product = Product::new("SKU-001", "Hand-carved bowl");
        vendor.add_channel(&mut channel);
        vendor.add_product(&mut product);

        vendor.set_description(&"en".parse().unwrap(), "Hand-made goods");
        vendor.set_description(&"fr_FR".parse().unwrap(), "Artisanat");

        (vendor, channel, product)
    }

    #[test]
    fn snapshot_carries_columns_and_association_ids() {
        let (vendor, channel, product) = sample_vendor();
        let record = vendor.to_record();

        assert_eq!(record.id, vendor.id());
        assert_eq!(record.name, "Nordic Crafts");
        assert_eq!(record.slug.as_deref(), Some("nordic-crafts"));
        assert!(record.enabled);
        assert_eq!(record.logo_name.as_deref(), Some("logo-8f3a.png"));
        assert_eq!(record.channel_ids, vec![channel.id()]);
        assert_eq!(record.product_ids, vec![product.id()]);

        let locales: Vec<&str> = record
            .translations
            .iter()
            .map(|row| row.locale.as_str())
            .collect();
        assert_eq!(locales, ["en", "fr_FR"]);
    }

    #[test]
    fn snapshot_json_has_no_transient_upload_field() {
        let (mut vendor, _, _) = sample_vendor();
        vendor.set_logo_file(Some(LogoFile::new("/tmp/upload/logo.png")));

        let json = serde_json::to_value(vendor.to_record()).unwrap();
        assert!(json.get("logo_file").is_none());
        assert_eq!(
            json.get("logo_name"),
            Some(&serde_json::Value::String("logo-8f3a.png".to_string()))
        );
        // Ids travel as plain UUID strings.
        assert_eq!(
            json.get("id"),
            Some(&serde_json::Value::String(vendor.id().to_string()))
        );
    }

    #[test]
    fn rehydration_restores_profile_associations_and_translations() {
        let (mut vendor, channel, product) = sample_vendor();
        vendor.disable();
        vendor.touch();

        let restored = Vendor::from_record(vendor.to_record()).unwrap();

        assert_eq!(restored.id(), vendor.id());
        assert_eq!(restored.name(), vendor.name());
        assert_eq!(restored.email(), vendor.email());
        assert_eq!(restored.category(), vendor.category());
        assert!(!restored.is_enabled());
        assert_eq!(restored.created_at(), vendor.created_at());
        assert_eq!(restored.updated_at(), vendor.updated_at());
        assert!(restored.has_channel(channel.id()));
        assert!(restored.has_product(product.id()));
        assert_eq!(
            restored.description(&"en".parse().unwrap()),
            Some("Hand-made goods")
        );
        assert_eq!(restored, vendor);
    }

    #[test]
    fn rehydration_rejects_a_malformed_locale() {
        let (vendor, _, _) = sample_vendor();
        let mut record = vendor.to_record();
        record.translations[0].locale = "no spaces allowed".to_string();

        let Err(DomainError::InvalidLocale(_)) = Vendor::from_record(record) else {
            panic!("expected InvalidLocale");
        };
    }

    #[test]
    fn rehydration_rejects_duplicate_locales() {
        let (vendor, _, _) = sample_vendor();
        let mut record = vendor.to_record();
        let duplicate = record.translations[0].clone();
        record.translations.push(duplicate);

        let Err(DomainError::Validation(msg)) = Vendor::from_record(record) else {
            panic!("expected Validation");
        };
        assert!(msg.contains("duplicate"));
    }
}
