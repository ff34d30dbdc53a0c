//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned by [`NewUser::try_from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserValidationError {
    /// `name` was absent or null.
    MissingName,
    /// `email` was absent or null.
    MissingEmail,
}

impl UserValidationError {
    /// Name of the request field that failed the presence check.
    pub fn field(self) -> &'static str {
        match self {
            Self::MissingName => "name",
            Self::MissingEmail => "email",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingName => write!(f, "user name must be present"),
            Self::MissingEmail => write!(f, "user email must be present"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Backend-assigned user identifier.
///
/// Identifiers are issued once by the gateway at creation time and never
/// change afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap an identifier issued by a gateway.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Access the raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for i32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

/// Registered user as returned by the gateway.
///
/// ## Invariants
/// - `id` is assigned exactly once by the gateway.
/// - Records are never mutated after creation.
///
/// Serialises as `{"id": 1, "name": "...", "email": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
}

impl User {
    /// Build a [`User`] from stored components.
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Name supplied at creation.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// E-mail address supplied at creation.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

/// Creation request that passed presence checks.
///
/// Empty strings are accepted; only absent (or `null`) values are rejected,
/// mirroring the storage `NOT NULL` constraints.
///
/// # Examples
/// ```
/// use users_api::domain::NewUser;
///
/// let draft = NewUser::try_from_parts(Some("John Doe".into()), Some("john.doe@example.com".into()))
///     .expect("both fields present");
/// assert_eq!(draft.name(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
}

impl NewUser {
    /// Build a creation request from present values.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Fallible constructor checking that both fields are present.
    pub fn try_from_parts(
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let name = name.ok_or(UserValidationError::MissingName)?;
        let email = email.ok_or(UserValidationError::MissingEmail)?;
        Ok(Self { name, email })
    }

    /// Requested name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Requested e-mail address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Attach a gateway-issued identifier, producing the stored record.
    pub fn into_user(self, id: UserId) -> User {
        let Self { name, email } = self;
        User { id, name, email }
    }
}
