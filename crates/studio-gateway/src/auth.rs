//! Signed-in identity and admin detection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::GatewayError;

/// Emails that are always treated as administrators.
pub const DEFAULT_ADMIN_EMAILS: &[&str] = &["admin@studio64.com", "kakulia.nika@gmail.com"];

/// The currently authenticated user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    /// Free-form user metadata (`role` is the only key inspected)
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl User {
    /// Create a user with an email and no metadata
    pub fn new(id: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: Some(email.into()),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach a `role` metadata entry
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.metadata.insert("role".to_string(), role.into());
        self
    }

    /// Value of the `role` metadata entry
    pub fn role(&self) -> Option<&str> {
        self.metadata.get("role").map(String::as_str)
    }
}

/// Source of the current identity.
pub trait AuthProvider {
    /// The signed-in user, or `None` when signed out.
    fn current_user(&self) -> Result<Option<User>, GatewayError>;
}

/// Client-side admin rule: allow-listed email or `role = admin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPolicy {
    emails: Vec<String>,
}

impl Default for AdminPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_EMAILS.iter().copied())
    }
}

impl AdminPolicy {
    /// Create a policy from an allow-list (compared case-insensitively)
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            emails: emails
                .into_iter()
                .map(|e| e.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Allow-listed emails, lowercased
    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    /// Check whether `user` is an administrator
    pub fn is_admin(&self, user: &User) -> bool {
        if user.role() == Some("admin") {
            return true;
        }
        match &user.email {
            Some(email) => {
                let email = email.trim().to_lowercase();
                self.emails.iter().any(|e| *e == email)
            }
            None => false,
        }
    }

    /// Admin check for an optional user (signed out is never admin)
    pub fn is_admin_opt(&self, user: Option<&User>) -> bool {
        user.map(|u| self.is_admin(u)).unwrap_or(false)
    }
}
