mod role;

pub use role::{Role, UnknownRole};
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Credentials persisted in the browser for the current visitor.
///
/// A session is authenticated exactly when it carries a non-empty token. The
/// role is only consulted for authenticated sessions.
pub struct Session {
    /// Opaque bearer token issued by the API.
    pub token: Option<String>,
    /// Role tag reported alongside the token.
    pub role: Option<Role>,
    /// Opaque user identifier reported alongside the token.
    pub user_id: Option<String>,
}

impl Session {
    /// Session of a visitor who has not signed in.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build a session from the fields returned by login or registration.
    pub fn new(token: impl Into<String>, role: Option<Role>, user_id: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            role,
            user_id: Some(user_id.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Token, if the session is authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.is_empty())
    }

    /// Role, if the session is authenticated.
    pub fn role(&self) -> Option<Role> {
        if self.is_authenticated() { self.role } else { None }
    }

    pub fn is_admin(&self) -> bool {
        self.role().is_some_and(|r| r.is_admin())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
/// Login payload submitted to `POST /auth/login`.
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required("Email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Registration payload submitted to `POST /auth/register`.
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub college_name: String,
    /// Shared secret the API checks before granting the admin role.
    pub admin_secret: String,
}

impl Default for RegisterRequest {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            role: Role::User,
            college_name: String::new(),
            admin_secret: String::new(),
        }
    }
}

impl RegisterRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Required("Full name"));
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::Required("Email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.role.is_admin() && self.admin_secret.trim().is_empty() {
            return Err(ValidationError::AdminSecretRequired);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Credentials returned by login and registration.
pub struct AuthResponse {
    pub token: String,
    /// Raw role tag; unknown tags leave the stored role empty.
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "crate::null_as_default")]
    pub user_id: String,
}

impl AuthResponse {
    pub fn role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    pub fn into_session(self) -> Session {
        let role = self.role();
        Session::new(self.token, role, self.user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_token_is_not_authenticated() {
        let session = Session {
            token: Some(String::new()),
            role: Some(Role::Admin),
            user_id: Some("u1".to_string()),
        };
        assert!(!session.is_authenticated());
        assert_eq!(session.role(), None);
        assert!(!session.is_admin());
    }

    #[test]
    fn role_only_meaningful_with_token() {
        let session = Session {
            token: None,
            role: Some(Role::Admin),
            user_id: None,
        };
        assert_eq!(session.role(), None);

        let session = Session::new("t1", Some(Role::Admin), "u1");
        assert_eq!(session.role(), Some(Role::Admin));
        assert!(session.is_admin());
    }

    #[test]
    fn auth_response_parses_wire_shape() {
        let json = r#"{"token":"t1","role":"student","userId":"64f0"}"#;
        let response: AuthResponse = serde_json::from_str(json).unwrap();
        let session = response.into_session();
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(session.role(), Some(Role::Student));
        assert_eq!(session.user_id.as_deref(), Some("64f0"));
    }

    #[test]
    fn auth_response_with_unknown_role_keeps_token() {
        let json = r#"{"token":"t1","role":"superuser","userId":null}"#;
        let session = serde_json::from_str::<AuthResponse>(json).unwrap().into_session();
        assert!(session.is_authenticated());
        assert_eq!(session.role(), None);
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterRequest {
            college_name: "MIT".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["collegeName"], "MIT");
        assert_eq!(value["role"], "user");
        assert!(value.get("confirmPassword").is_some());
    }

    #[test]
    fn register_validation() {
        let mut request = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
            ..Default::default()
        };
        assert_eq!(request.validate(), Ok(()));

        request.confirm_password = "other".to_string();
        assert_eq!(request.validate(), Err(ValidationError::PasswordMismatch));

        request.confirm_password = "secret".to_string();
        request.role = Role::Admin;
        assert_eq!(request.validate(), Err(ValidationError::AdminSecretRequired));

        request.admin_secret = "s3cret".to_string();
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn login_requires_email_and_password() {
        let request = LoginRequest::default();
        assert_eq!(request.validate(), Err(ValidationError::Required("Email")));
        let request = LoginRequest {
            email: "a@b.c".to_string(),
            password: String::new(),
        };
        assert_eq!(request.validate(), Err(ValidationError::Required("Password")));
    }
}
