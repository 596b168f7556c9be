//! Signed-in user as seen by the client.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Seller,
    User,
    #[serde(other)]
    Unknown,
}

/// Backend-tracked approval state for publishing marketplace products.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SellerStatus {
    Pending,
    Approved,
    Rejected,
    #[serde(other)]
    Unknown,
}

/// Cached projection of the backend user, refreshed on session establishment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserPayload")]
pub struct User {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub email: String,
    pub role: Option<Role>,
    #[serde(rename = "sellerStatus", skip_serializing_if = "Option::is_none")]
    pub seller_status: Option<SellerStatus>,
}

/// Raw user payload. The id and seller status show up under several names,
/// sometimes more than one at once; the first one present wins.
#[derive(Deserialize)]
struct UserPayload {
    #[serde(default)]
    id: Option<String>,
    #[serde(default, rename = "userId")]
    user_id_camel: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default, rename = "sellerStatus")]
    seller_status_camel: Option<SellerStatus>,
    #[serde(default)]
    seller_status: Option<SellerStatus>,
}

impl TryFrom<UserPayload> for User {
    type Error = String;

    fn try_from(raw: UserPayload) -> Result<Self, Self::Error> {
        let user_id = raw.id.or(raw.user_id_camel).or(raw.user_id).ok_or("missing field `id`")?;
        Ok(Self {
            user_id,
            email: raw.email.unwrap_or_default(),
            role: raw.role,
            seller_status: raw.seller_status_camel.or(raw.seller_status),
        })
    }
}

/// Whether a user may open the product upload flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PublishAccess {
    Allowed,
    /// Seller application awaits admin review.
    Pending,
    /// Seller application was turned down; it can be resubmitted.
    Rejected,
    NotApplied,
}

impl User {
    #[must_use]
    pub fn publish_access(&self) -> PublishAccess {
        if self.role == Some(Role::Seller) || self.seller_status == Some(SellerStatus::Approved) {
            return PublishAccess::Allowed;
        }
        match self.seller_status {
            Some(SellerStatus::Pending) => PublishAccess::Pending,
            Some(SellerStatus::Rejected) => PublishAccess::Rejected,
            Some(SellerStatus::Approved | SellerStatus::Unknown) | None => PublishAccess::NotApplied,
        }
    }
}
