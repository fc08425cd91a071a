//! Macros for reducing boilerplate when defining entities
//!
//! These macros generate the repetitive trait implementations needed for each
//! marketplace record.

/// Implement [`Entity`](crate::core::entity::Entity) for a struct with `id`
/// and `created_at` fields
///
/// # Example
/// ```rust,ignore
/// impl_entity!(Product, "product", "products");
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $singular:expr, $plural:expr) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn created_at(&self) -> ::chrono::DateTime<::chrono::Utc> {
                self.created_at
            }
        }
    };
}

/// Implement [`Actor`](crate::core::entity::Actor) for a struct with `name`,
/// `email`, `latitude` and `longitude` fields
#[macro_export]
macro_rules! impl_actor {
    ($type:ident) => {
        impl $crate::core::entity::Actor for $type {
            fn name(&self) -> &str {
                &self.name
            }

            fn email(&self) -> &str {
                &self.email
            }

            fn coordinates(&self) -> Option<$crate::core::entity::Coordinates> {
                $crate::core::entity::Coordinates::from_parts(self.latitude, self.longitude)
            }
        }
    };
}
