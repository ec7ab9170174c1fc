use crate::domain::errors::{DomainError, DomainResult};
use crate::slug::slugify;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShopId(pub i64);

impl ShopId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("shop id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ShopId> for i64 {
    fn from(value: ShopId) -> Self {
        value.0
    }
}

/// Human-facing shop name, as typed by the owner. Only emptiness is
/// rejected here; the name is slugified separately for the URL identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopName(String);

impl ShopName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("shop name cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ShopName> for String {
    fn from(value: ShopName) -> Self {
        value.0
    }
}

/// URL identifier of a shop. The constructor enforces the slug alphabet
/// (lowercase ASCII letters, digits, underscore, hyphen) with no leading,
/// trailing, or doubled hyphen, so an invalid slug is unrepresentable past
/// this point. An empty slug is rejected here too: `slugify` is allowed to
/// produce one, storing one is not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShopSlug(String);

impl ShopSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug cannot be empty".into()));
        }
        let allowed = value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
        if !allowed {
            return Err(DomainError::Validation(format!(
                "slug '{value}' contains characters outside [a-z0-9_-]"
            )));
        }
        if value.starts_with('-') || value.ends_with('-') || value.contains("--") {
            return Err(DomainError::Validation(format!(
                "slug '{value}' has a leading, trailing, or doubled hyphen"
            )));
        }
        Ok(Self(value))
    }

    /// Slugifies a display name and validates the result in one step.
    /// Fails with a validation error when the name has no sluggable
    /// characters at all.
    pub fn from_display_name(name: &ShopName) -> DomainResult<Self> {
        Self::new(slugify(name.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShopSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ShopSlug> for String {
    fn from(value: ShopSlug) -> Self {
        value.0
    }
}
