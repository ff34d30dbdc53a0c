//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their serialised shape and are registered with
//! utoipa under the domain type's name.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    /// The ID of the user
    #[schema(example = 1)]
    id: i32,
    /// The name of the user
    #[schema(example = "John Doe")]
    name: String,
    /// The email of the user
    #[schema(example = "john.doe@example.com")]
    email: String,
}
