//! Sales channels a vendor can be attached to.

use std::collections::BTreeSet;

use forgemarket_core::{Entity, Toggle};

use crate::vendor::{VendorId, VendorsAware};

forgemarket_core::entity_id!(
    /// Unique identifier of a sales channel.
    ChannelId
);

/// Contract the vendor module expects from any sales channel.
///
/// The host platform owns the real channel entity; this is the slice the
/// vendor domain needs: an identity plus an optional vendors-aware
/// capability. Channels that do not track vendors keep the default `None`
/// hook and association changes stay one-sided, without errors.
pub trait SalesChannel {
    fn id(&self) -> ChannelId;

    /// Capability hook. Channels that maintain a vendor back-reference
    /// return `Some(self)` so association changes can be mirrored.
    fn vendors_aware(&mut self) -> Option<&mut dyn VendorsAware> {
        None
    }
}

/// Vendors-aware sales channel shipped with this module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    id: ChannelId,
    code: String,
    name: String,
    toggle: Toggle,
    vendors: BTreeSet<VendorId>,
}

impl Channel {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ChannelId::new(),
            code: code.into(),
            name: name.into(),
            toggle: Toggle::default(),
            vendors: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> ChannelId {
        self.id
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.toggle.is_enabled()
    }

    pub fn enable(&mut self) {
        self.toggle.enable();
    }

    pub fn disable(&mut self) {
        self.toggle.disable();
    }

    /// Vendors currently attached to this channel.
    pub fn vendors(&self) -> &BTreeSet<VendorId> {
        &self.vendors
    }
}

impl SalesChannel for Channel {
    fn id(&self) -> ChannelId {
        self.id
    }

    fn vendors_aware(&mut self) -> Option<&mut dyn VendorsAware> {
        Some(self)
    }
}

impl VendorsAware for Channel {
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

impl Entity for Channel {
    type Id = ChannelId;

    fn id(&self) -> &ChannelId {
        &self.id
    }
}
