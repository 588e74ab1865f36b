//! Member Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Longest member display name, in characters
pub const MAX_NAME_LEN: u64 = 60;
/// Longest accepted email address (RFC 5321)
pub const MAX_EMAIL_LEN: u64 = 254;
/// Password length bounds, checked before hashing
pub const MIN_PASSWORD_LEN: u64 = 8;
pub const MAX_PASSWORD_LEN: u64 = 128;

/// Public projection of a member
///
/// This is the only member shape that leaves the server. The password hash
/// lives on the server-side record and has no field here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberView {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Registration payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberCreate {
    #[validate(length(min = 1, max = MAX_NAME_LEN))]
    pub name: String,
    #[validate(email, length(max = MAX_EMAIL_LEN))]
    pub email: String,
    #[validate(length(min = MIN_PASSWORD_LEN, max = MAX_PASSWORD_LEN))]
    pub password: String,
}

/// Credential update payload; the target member is addressed by `_id`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MemberCredentialsUpdate {
    #[serde(rename = "_id")]
    pub id: String,
    #[validate(length(min = MIN_PASSWORD_LEN, max = MAX_PASSWORD_LEN))]
    pub password: String,
}

/// Login payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, max = MAX_EMAIL_LEN))]
    pub email: String,
    #[validate(length(min = 1, max = MAX_PASSWORD_LEN))]
    pub password: String,
}

/// Login / sign-up response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub name: String,
    pub email: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_serializes_with_underscore_id_and_no_password() {
        let view = MemberView {
            id: "abc".into(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["_id"], "abc");
        assert!(json.get("password").is_none());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn create_rejects_short_password_and_bad_email() {
        let payload = MemberCreate {
            name: "Ana".into(),
            email: "not-an-email".into(),
            password: "short".into(),
        };
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn password_bounds_follow_constants() {
        let with_password = |len: u64| MemberCredentialsUpdate {
            id: "m-1".into(),
            password: "p".repeat(len as usize),
        };
        assert!(with_password(MIN_PASSWORD_LEN).validate().is_ok());
        assert!(with_password(MAX_PASSWORD_LEN).validate().is_ok());
        assert!(with_password(MIN_PASSWORD_LEN - 1).validate().is_err());
        assert!(with_password(MAX_PASSWORD_LEN + 1).validate().is_err());
    }

    #[test]
    fn create_rejects_long_name() {
        let payload = MemberCreate {
            name: "x".repeat(61),
            email: "ana@example.com".into(),
            password: "longenough".into(),
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn credentials_update_reads_underscore_id() {
        let json = r#"{"_id":"m-1","password":"new-secret-1"}"#;
        let update: MemberCredentialsUpdate = serde_json::from_str(json).unwrap();
        assert_eq!(update.id, "m-1");
        assert!(update.validate().is_ok());
    }
}
