//! User profile, address, and auth wire models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use clementine_core::types::{AddressId, AddressType, ApprovalStatus, Gender, UserId};

/// The signed-in user's profile as returned by `GET /user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub avatar_url: Option<String>,
    pub status: Option<String>,
    pub approval_status: Option<ApprovalStatus>,
    pub create_time: Option<NaiveDateTime>,
    pub update_time: Option<NaiveDateTime>,
}

/// Body for `PUT /user/profile`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    pub avatar_url: Option<String>,
}

/// A saved shipping or billing address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: AddressId,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
    pub address_type: Option<AddressType>,
}

/// Body for `PUT /user/addresses/shipping` and `/billing`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub street: Option<String>,
    pub zip_code: Option<String>,
}

/// Body for `POST /auth/signin`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `POST /auth/signup`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
}

/// Payload of a successful `POST /auth/signin`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: Option<String>,
    pub id: UserId,
    pub username: String,
    pub real_name: Option<String>,
    pub phone: Option<String>,
    pub gender: Option<Gender>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_deserializes() {
        let profile: UserProfile = serde_json::from_str(
            r#"{
                "id": 1,
                "username": "alice",
                "realName": "Alice",
                "gender": "F",
                "approvalStatus": "APPROVED",
                "createTime": "2024-01-02T08:30:00"
            }"#,
        )
        .unwrap();
        assert_eq!(profile.username, "alice");
        assert_eq!(profile.approval_status, Some(ApprovalStatus::Approved));
    }

    #[test]
    fn test_login_response_deserializes() {
        let response: LoginResponse = serde_json::from_str(
            r#"{
                "token": "abc.def.ghi",
                "type": "Bearer",
                "id": 1,
                "username": "alice",
                "roles": ["ROLE_USER"]
            }"#,
        )
        .unwrap();
        assert_eq!(response.token, "abc.def.ghi");
        assert_eq!(response.token_type.as_deref(), Some("Bearer"));
        assert_eq!(response.roles, vec!["ROLE_USER".to_string()]);
    }

    #[test]
    fn test_address_request_skips_nothing() {
        // The backend tolerates explicit nulls; no skip_serializing_if here.
        let json = serde_json::to_value(AddressRequest::default()).unwrap();
        assert!(json.get("zipCode").is_some());
    }
}
