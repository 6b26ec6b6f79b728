//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the repetitive trait implementations and coded
//! enumerations shared by every CRM record type.

/// Implement [`Entity`](crate::core::Entity) for a struct with an `id: i64`
/// field and a tenant field
///
/// # Example
/// ```rust,ignore
/// impl_entity!(Person, "person", "persons", tenant = app_account);
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $singular:expr, $plural:expr, tenant = $tenant:ident) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> $crate::core::entity::EntityId {
                self.id
            }

            fn set_id(&mut self, id: $crate::core::entity::EntityId) {
                self.id = id;
            }

            fn tenant_id(&self) -> $crate::core::entity::TenantId {
                self.$tenant
            }
        }
    };
}

/// Declare a coded enumeration stored by member name
///
/// Generates the enum with serde support, `as_str()`, `MEMBERS` (the names
/// accepted by filters) and `field_type()` for use in an entity schema.
///
/// # Example
/// ```rust,ignore
/// coded_enum!(
///     /// Deal status
///     DealStatus { Open => "OPEN", Closed => "CLOSED" }
/// );
/// ```
#[macro_export]
macro_rules! coded_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Member names, as written in filters and payloads
            pub const MEMBERS: &'static [&'static str] = &[$($code),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Schema type for a field holding this enumeration
            pub fn field_type() -> $crate::core::field::FieldType {
                $crate::core::field::FieldType::enumerated(Self::MEMBERS.iter().copied())
            }

            /// Field value for the engine
            pub fn field_value(self) -> $crate::core::field::FieldValue {
                $crate::core::field::FieldValue::Enum(self.as_str().to_string())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
