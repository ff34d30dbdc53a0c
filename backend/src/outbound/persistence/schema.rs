//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users.
    ///
    /// `id` is a `SERIAL` primary key; `email` carries a unique index.
    users (id) {
        /// Primary key assigned by the sequence.
        id -> Int4,
        /// Name supplied at creation.
        name -> Text,
        /// E-mail address supplied at creation.
        email -> Text,
    }
}
