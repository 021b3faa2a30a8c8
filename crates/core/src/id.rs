//! Strongly-typed identifier support.
//!
//! Domain crates declare their id newtypes with [`entity_id!`] instead of
//! passing raw UUIDs around. The generated types are ordered so they can live
//! in `BTreeSet`-backed association collections.

/// Declares a UUID-backed identifier newtype.
///
/// The generated type is `Copy`, ordered, hashable and serializes
/// transparently as the underlying UUID string. Parsing goes through
/// [`DomainError::InvalidId`](crate::DomainError::InvalidId) on malformed
/// input. Calling crates need `uuid` and `serde` in their dependency table.
///
/// ```
/// forgemarket_core::entity_id!(
///     /// Identifier of an order.
///     OrderId
/// );
///
/// let id = OrderId::new();
/// let parsed: OrderId = id.to_string().parse().unwrap();
/// assert_eq!(parsed, id);
/// ```
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(uuid::Uuid);

        impl $name {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in
            /// tests for determinism.
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &uuid::Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$name> for uuid::Uuid {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = <uuid::Uuid as core::str::FromStr>::from_str(s).map_err(|e| {
                    $crate::error::DomainError::invalid_id(format!(
                        "{}: {}",
                        stringify!($name),
                        e
                    ))
                })?;
                Ok(Self(uuid))
            }
        }
    };
}
