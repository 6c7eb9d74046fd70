use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Customer,
    Seller,
    Admin,
}

/// Marker for a pending customer-to-seller upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Requested,
}

/// Represents a registered user in the system, keyed by email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub image: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// Profile data sent on first authenticated contact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserCreate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

#[cfg(test)]
impl User {
    /// Creates a new User instance.
    ///
    /// # Notes
    /// New accounts always start as [`Role::Customer`] without a pending request.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            image: String::new(),
            role: Role::Customer,
            status: None,
        }
    }
}
