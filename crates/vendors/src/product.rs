//! Catalog products a vendor can offer.

use std::collections::BTreeSet;

use forgemarket_core::Entity;

use crate::vendor::{VendorId, VendorsAware};

forgemarket_core::entity_id!(
    /// Unique identifier of a catalog product.
    ProductId
);

/// Contract the vendor module expects from any catalog product.
///
/// Mirror image of [`SalesChannel`](crate::channel::SalesChannel): an
/// identity plus the optional vendors-aware capability hook.
pub trait CatalogProduct {
    fn id(&self) -> ProductId;

    /// Capability hook. Products that maintain a vendor back-reference
    /// return `Some(self)` so association changes can be mirrored.
    fn vendors_aware(&mut self) -> Option<&mut dyn VendorsAware> {
        None
    }
}

/// Vendors-aware catalog product shipped with this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    sku: String,
    name: String,
    vendors: BTreeSet<VendorId>,
}

impl Product {
    pub fn new(sku: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(),
            sku: sku.into(),
            name: name.into(),
            vendors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Vendors currently offering this product.
    pub fn vendors(&self) -> &BTreeSet<VendorId> {
        &self.vendors
    }
}

impl CatalogProduct for Product {
    fn id(&self) -> ProductId {
        self.id
    }

    fn vendors_aware(&mut self) -> Option<&mut dyn VendorsAware> {
        Some(self)
    }
}

impl VendorsAware for Product {
    fn add_vendor(&mut self, vendor: VendorId) {
        self.vendors.insert(vendor);
    }

    fn remove_vendor(&mut self, vendor: VendorId) {
        self.vendors.remove(&vendor);
    }

    fn has_vendor(&self, vendor: VendorId) -> bool {
        self.vendors.contains(&vendor)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &ProductId {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_has_no_vendors() {
        let product = Product::new("SKU-001", "Hand-carved bowl");
        assert_eq!(product.sku(), "SKU-001");
        assert_eq!(product.name(), "Hand-carved bowl");
        assert!(product.vendors().is_empty());
    }

    #[test]
    fn vendor_membership_is_idempotent() {
        let mut product = Product::new("SKU-001", "Hand-carved bowl");
        let vendor = VendorId::new();

        product.add_vendor(vendor);
        product.add_vendor(vendor);
        assert_eq!(product.vendors().len(), 1);

        product.remove_vendor(vendor);
        assert!(!product.has_vendor(vendor));
    }

    #[test]
    fn same_identity_tracks_the_id_not_the_fields() {
        let mut product = Product::new("SKU-001", "Hand-carved bowl");
        let other = product.clone();
        product.set_name("Renamed bowl");
        assert!(product.same_identity(&other));
    }
}
