use super::*;
use serde_json::json;

// =============================================================
// decoding
// =============================================================

#[test]
fn decodes_backend_id_field() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "email": "a@b.com", "role": "seller" })).unwrap();
    assert_eq!(user.user_id, "u1");
    assert_eq!(user.email, "a@b.com");
    assert_eq!(user.role, Some(Role::Seller));
    assert!(user.seller_status.is_none());
}

#[test]
fn decodes_client_and_snake_case_ids() {
    let a: User = serde_json::from_value(json!({ "userId": "u2", "email": "x@y.z" })).unwrap();
    let b: User = serde_json::from_value(json!({ "user_id": "u3", "email": "x@y.z" })).unwrap();
    assert_eq!(a.user_id, "u2");
    assert_eq!(b.user_id, "u3");
    assert!(a.role.is_none());
}

#[test]
fn decodes_payload_carrying_both_id_spellings() {
    let user: User = serde_json::from_value(json!({
        "id": "u1",
        "userId": "u1-legacy",
        "email": "a@b.com",
        "role": "seller",
        "sellerStatus": "approved",
        "seller_status": "pending",
    }))
    .unwrap();
    assert_eq!(user.user_id, "u1");
    assert_eq!(user.seller_status, Some(SellerStatus::Approved));
}

#[test]
fn null_email_and_role_are_tolerated() {
    let user: User = serde_json::from_value(json!({ "id": "u1", "email": null, "role": null })).unwrap();
    assert_eq!(user.email, "");
    assert!(user.role.is_none());
}

#[test]
fn payload_without_any_id_is_rejected() {
    let err = serde_json::from_value::<User>(json!({ "email": "a@b.com" })).unwrap_err();
    assert!(err.to_string().contains("missing field `id`"));
}

#[test]
fn unrecognized_role_and_status_decode_as_unknown() {
    let user: User =
        serde_json::from_value(json!({ "id": "u1", "role": "superuser", "seller_status": "suspended" })).unwrap();
    assert_eq!(user.role, Some(Role::Unknown));
    assert_eq!(user.seller_status, Some(SellerStatus::Unknown));
}

#[test]
fn serializes_client_shape() {
    let user = User { user_id: "u1".to_owned(), email: "a@b.com".to_owned(), role: Some(Role::Seller), seller_status: None };
    assert_eq!(serde_json::to_value(&user).unwrap(), json!({ "userId": "u1", "email": "a@b.com", "role": "seller" }));
}

// =============================================================
// publish_access
// =============================================================

fn user_with(role: Option<Role>, status: Option<SellerStatus>) -> User {
    User { user_id: "u1".to_owned(), email: "a@b.com".to_owned(), role, seller_status: status }
}

#[test]
fn sellers_and_approved_users_may_publish() {
    assert_eq!(user_with(Some(Role::Seller), None).publish_access(), PublishAccess::Allowed);
    assert_eq!(user_with(Some(Role::User), Some(SellerStatus::Approved)).publish_access(), PublishAccess::Allowed);
}

#[test]
fn pending_and_rejected_applications_are_reported() {
    assert_eq!(user_with(Some(Role::User), Some(SellerStatus::Pending)).publish_access(), PublishAccess::Pending);
    assert_eq!(user_with(None, Some(SellerStatus::Rejected)).publish_access(), PublishAccess::Rejected);
}

#[test]
fn users_without_application_have_not_applied() {
    assert_eq!(user_with(Some(Role::User), None).publish_access(), PublishAccess::NotApplied);
    assert_eq!(user_with(Some(Role::Admin), Some(SellerStatus::Unknown)).publish_access(), PublishAccess::NotApplied);
}
