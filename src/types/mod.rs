use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Admin;

/// Uniform JSON response: `data` on success, `message` on failure.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: Some(message.into()),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Admin information safe to expose to the browser
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminPublic {
    pub id: Uuid,
    pub email: String,
}

impl From<&Admin> for AdminPublic {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            email: admin.email.clone(),
        }
    }
}

/// Login request payload
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Successful login response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub admin: AdminPublic,
    pub token: String,
}

/// Password change payload
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PasswordChangeRequest {
    #[serde(default)]
    pub current_password: String,
    #[serde(default)]
    pub new_password: String,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_omits_empty_fields() {
        let ok = serde_json::to_value(ApiEnvelope::data(vec![1, 2])).unwrap();
        assert_eq!(ok, serde_json::json!({ "success": true, "data": [1, 2] }));

        let err = serde_json::to_value(ApiEnvelope::<()>::failure("Unauthorized")).unwrap();
        assert_eq!(err, serde_json::json!({ "success": false, "message": "Unauthorized" }));
    }
}
